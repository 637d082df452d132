use log::{debug, warn};

use super::slots::{CredentialSlot, CredentialSlots};
use super::status::PamStatus;
use crate::modules::utils::logging::log_pam_event;

/// Flags and argument count handed to a PAM entry point.
///
/// Only logged. The argument strings themselves are never read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invocation {
    pub flags: i32,
    pub argc: i32,
}

impl Invocation {
    pub fn new(flags: i32, argc: i32) -> Self {
        Self { flags, argc }
    }
}

/// Wipes the authentication tokens of every session it sees.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenResetModule;

impl TokenResetModule {
    pub fn new() -> Self {
        Self
    }

    /// Clear `PAM_AUTHTOK` and `PAM_OLDAUTHTOK`, then report success.
    ///
    /// A slot the host refuses to clear is logged and skipped. The remaining slot
    /// is still cleared and the result is still success.
    pub fn authenticate<S>(&self, session: &mut S, invocation: &Invocation) -> PamStatus
    where
        S: CredentialSlots + ?Sized,
    {
        debug!(
            "authenticate: flags={:#x}, argc={}",
            invocation.flags, invocation.argc
        );

        let mut rejected = 0;
        for slot in CredentialSlot::ALL {
            if let Err(e) = session.clear(slot) {
                warn!("Could not clear {}: {}", slot, e);
                rejected += 1;
            }
        }

        if rejected == 0 {
            log_pam_event("authenticate", true, Some("auth tokens cleared"));
        } else {
            log_pam_event("authenticate", false, Some("host rejected a clear request"));
        }
        PamStatus::Success
    }

    /// Nothing to establish.
    pub fn establish_credentials<S>(&self, _session: &mut S, invocation: &Invocation) -> PamStatus
    where
        S: CredentialSlots + ?Sized,
    {
        debug!(
            "establish_credentials: flags={:#x}, argc={}",
            invocation.flags, invocation.argc
        );
        PamStatus::Success
    }
}
