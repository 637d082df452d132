//! Raw bindings to the parts of libpam this module calls.
//!
//! The symbols are resolved against the libpam already loaded by the host
//! process, so the shared object does not link libpam itself. Test builds swap
//! `pam_set_item` for an in-process double so the exported entry points can be
//! driven end to end.

#[cfg(not(test))]
use std::ffi::{c_int, c_void};

/// Opaque `pam_handle_t`.
#[allow(non_camel_case_types)]
#[repr(C)]
pub struct pam_handle_t {
    _private: [u8; 0],
}

#[cfg(not(test))]
extern "C" {
    pub fn pam_set_item(pamh: *mut pam_handle_t, item_type: c_int, item: *const c_void) -> c_int;
}

#[cfg(test)]
pub use self::fake::pam_set_item;

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::HashMap;
    use std::ffi::{c_int, c_void, CStr};

    use super::pam_handle_t;
    use crate::modules::token_reset::CredentialSlot;

    /// Stand-in for the host's session state, reachable through a `pam_handle_t` pointer.
    #[derive(Debug, Default)]
    pub struct FakePamHandle {
        pub items: HashMap<c_int, Vec<u8>>,
        pub set_calls: Vec<(c_int, bool)>,
        pub reject_with: Option<c_int>,
    }

    impl FakePamHandle {
        pub fn with_tokens(current: &str, previous: &str) -> Self {
            let mut handle = Self::default();
            handle.items.insert(CredentialSlot::AuthToken.item_type(), current.as_bytes().to_vec());
            handle.items.insert(CredentialSlot::OldAuthToken.item_type(), previous.as_bytes().to_vec());
            handle
        }

        pub fn as_raw(&mut self) -> *mut pam_handle_t {
            self as *mut FakePamHandle as *mut pam_handle_t
        }
    }

    /// Mirrors `pam_set_item`: a null `item` empties the slot, anything else is
    /// copied in as a C string.
    pub unsafe extern "C" fn pam_set_item(
        pamh: *mut pam_handle_t,
        item_type: c_int,
        item: *const c_void,
    ) -> c_int {
        // SAFETY: test code only ever passes pointers produced by `FakePamHandle::as_raw`.
        let handle = unsafe { &mut *(pamh as *mut FakePamHandle) };
        handle.set_calls.push((item_type, item.is_null()));

        if let Some(code) = handle.reject_with {
            return code;
        }
        if item.is_null() {
            handle.items.remove(&item_type);
        } else {
            // SAFETY: credential items are NUL-terminated strings.
            let value = unsafe { CStr::from_ptr(item.cast()) };
            handle.items.insert(item_type, value.to_bytes().to_vec());
        }
        0
    }
}
