use std::ffi::c_int;
use std::fmt;

/// Return codes understood by the host PAM library.
///
/// Only the codes this module can observe from `pam_set_item` are named; anything
/// else is carried through as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PamStatus {
    Success,
    SystemErr,
    BufErr,
    PermDenied,
    AuthErr,
    BadItem,
    Other(c_int),
}

impl PamStatus {
    pub const PAM_SUCCESS: c_int = 0;
    pub const PAM_SYSTEM_ERR: c_int = 4;
    pub const PAM_BUF_ERR: c_int = 5;
    pub const PAM_PERM_DENIED: c_int = 6;
    pub const PAM_AUTH_ERR: c_int = 7;
    pub const PAM_BAD_ITEM: c_int = 29;

    pub fn from_code(code: c_int) -> Self {
        match code {
            Self::PAM_SUCCESS => PamStatus::Success,
            Self::PAM_SYSTEM_ERR => PamStatus::SystemErr,
            Self::PAM_BUF_ERR => PamStatus::BufErr,
            Self::PAM_PERM_DENIED => PamStatus::PermDenied,
            Self::PAM_AUTH_ERR => PamStatus::AuthErr,
            Self::PAM_BAD_ITEM => PamStatus::BadItem,
            other => PamStatus::Other(other),
        }
    }

    pub fn code(self) -> c_int {
        match self {
            PamStatus::Success => Self::PAM_SUCCESS,
            PamStatus::SystemErr => Self::PAM_SYSTEM_ERR,
            PamStatus::BufErr => Self::PAM_BUF_ERR,
            PamStatus::PermDenied => Self::PAM_PERM_DENIED,
            PamStatus::AuthErr => Self::PAM_AUTH_ERR,
            PamStatus::BadItem => Self::PAM_BAD_ITEM,
            PamStatus::Other(code) => code,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, PamStatus::Success)
    }
}

impl fmt::Display for PamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PamStatus::Success => write!(f, "PAM_SUCCESS"),
            PamStatus::SystemErr => write!(f, "PAM_SYSTEM_ERR"),
            PamStatus::BufErr => write!(f, "PAM_BUF_ERR"),
            PamStatus::PermDenied => write!(f, "PAM_PERM_DENIED"),
            PamStatus::AuthErr => write!(f, "PAM_AUTH_ERR"),
            PamStatus::BadItem => write!(f, "PAM_BAD_ITEM"),
            PamStatus::Other(code) => write!(f, "PAM status {}", code),
        }
    }
}
