use std::ffi::c_int;
use std::fmt;

use super::status::PamStatus;

/// The credential items this module clears from a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialSlot {
    /// `PAM_AUTHTOK`, the token supplied for the current attempt.
    AuthToken,
    /// `PAM_OLDAUTHTOK`, the previous token.
    OldAuthToken,
}

impl CredentialSlot {
    pub const ALL: [CredentialSlot; 2] = [CredentialSlot::AuthToken, CredentialSlot::OldAuthToken];

    /// PAM item type passed to `pam_set_item`.
    pub fn item_type(self) -> c_int {
        match self {
            CredentialSlot::AuthToken => 6,
            CredentialSlot::OldAuthToken => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CredentialSlot::AuthToken => "PAM_AUTHTOK",
            CredentialSlot::OldAuthToken => "PAM_OLDAUTHTOK",
        }
    }
}

impl fmt::Display for CredentialSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure reported while clearing a credential slot.
#[derive(Debug, PartialEq, Eq)]
pub enum SlotError {
    NoSession,
    Rejected {
        slot: CredentialSlot,
        status: PamStatus,
    },
}

impl fmt::Display for SlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotError::NoSession => write!(f, "no session handle was supplied"),
            SlotError::Rejected { slot, status } => {
                write!(f, "host rejected clearing {}: {}", slot, status)
            }
        }
    }
}

impl std::error::Error for SlotError {}

/// Write access to the credential slots of one authentication attempt.
pub trait CredentialSlots {
    /// Drop whatever the slot holds. Clearing an empty slot succeeds.
    fn clear(&mut self, slot: CredentialSlot) -> Result<(), SlotError>;
}

/// In-memory session used by the tests in this crate.
#[cfg(test)]
pub(crate) mod memory {
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct MemorySession {
        items: HashMap<CredentialSlot, Vec<u8>>,
        pub clear_calls: Vec<CredentialSlot>,
        pub reject_with: Option<PamStatus>,
    }

    impl MemorySession {
        pub fn with_tokens(current: Option<&str>, previous: Option<&str>) -> Self {
            let mut session = Self::default();
            if let Some(token) = current {
                session.items.insert(CredentialSlot::AuthToken, token.as_bytes().to_vec());
            }
            if let Some(token) = previous {
                session.items.insert(CredentialSlot::OldAuthToken, token.as_bytes().to_vec());
            }
            session
        }

        pub fn get(&self, slot: CredentialSlot) -> Option<&[u8]> {
            self.items.get(&slot).map(Vec::as_slice)
        }
    }

    impl CredentialSlots for MemorySession {
        fn clear(&mut self, slot: CredentialSlot) -> Result<(), SlotError> {
            self.clear_calls.push(slot);
            if let Some(status) = self.reject_with {
                return Err(SlotError::Rejected { slot, status });
            }
            self.items.remove(&slot);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemorySession;
    use super::*;

    #[test]
    fn test_item_types_match_pam_headers() {
        assert_eq!(CredentialSlot::AuthToken.item_type(), 6);
        assert_eq!(CredentialSlot::OldAuthToken.item_type(), 7);
    }

    #[test]
    fn test_clearing_empty_slot_is_ok() {
        let mut session = MemorySession::default();
        assert!(session.clear(CredentialSlot::AuthToken).is_ok());
        assert!(session.get(CredentialSlot::AuthToken).is_none());
    }

    #[test]
    fn test_rejection_message_names_slot() {
        let err = SlotError::Rejected {
            slot: CredentialSlot::OldAuthToken,
            status: PamStatus::BadItem,
        };
        assert_eq!(
            err.to_string(),
            "host rejected clearing PAM_OLDAUTHTOK: PAM_BAD_ITEM"
        );
    }
}
