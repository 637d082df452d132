use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use super::ffi::{self, pam_handle_t};
use crate::modules::token_reset::{CredentialSlot, CredentialSlots, PamStatus, SlotError};

/// Borrowed view of the host's session for the duration of one entry-point call.
pub struct PamHandle<'a> {
    raw: NonNull<pam_handle_t>,
    _session: PhantomData<&'a mut pam_handle_t>,
}

impl<'a> PamHandle<'a> {
    /// Wrap a handle received from the host. Returns `None` for a null pointer.
    ///
    /// # Safety
    ///
    /// `raw` must be null or a live `pam_handle_t` that nothing else mutates while the
    /// returned value exists.
    pub unsafe fn from_raw(raw: *mut pam_handle_t) -> Option<Self> {
        NonNull::new(raw).map(|raw| Self {
            raw,
            _session: PhantomData,
        })
    }
}

impl CredentialSlots for PamHandle<'_> {
    fn clear(&mut self, slot: CredentialSlot) -> Result<(), SlotError> {
        // SAFETY: the handle is live for 'a, and a null item is how PAM empties a slot.
        let code = unsafe { ffi::pam_set_item(self.raw.as_ptr(), slot.item_type(), ptr::null()) };
        match PamStatus::from_code(code) {
            PamStatus::Success => Ok(()),
            status => Err(SlotError::Rejected { slot, status }),
        }
    }
}

/// Used when the host hands over a null handle.
pub struct MissingSession;

impl CredentialSlots for MissingSession {
    fn clear(&mut self, _slot: CredentialSlot) -> Result<(), SlotError> {
        Err(SlotError::NoSession)
    }
}
