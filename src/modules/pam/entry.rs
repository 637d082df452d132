//! Symbols looked up by the PAM loader when the stack names `pam_clear_token.so`.

use std::ffi::{c_char, c_int};

use super::ffi::pam_handle_t;
use super::handle::{MissingSession, PamHandle};
use crate::modules::token_reset::{Invocation, TokenResetModule};
use crate::modules::utils::logging::initialize_logging;

/// `auth` stage: drop `PAM_AUTHTOK` and `PAM_OLDAUTHTOK`. Always returns `PAM_SUCCESS`.
///
/// # Safety
///
/// Called by libpam with a handle it owns. `argv` is never dereferenced.
#[no_mangle]
pub unsafe extern "C" fn pam_sm_authenticate(
    pamh: *mut pam_handle_t,
    flags: c_int,
    argc: c_int,
    _argv: *const *const c_char,
) -> c_int {
    initialize_logging();
    let invocation = Invocation::new(flags, argc);
    let module = TokenResetModule::new();

    // SAFETY: the handle stays valid and unshared for the duration of this call.
    let status = match unsafe { PamHandle::from_raw(pamh) } {
        Some(mut handle) => module.authenticate(&mut handle, &invocation),
        None => module.authenticate(&mut MissingSession, &invocation),
    };
    status.code()
}

/// `setcred` stage: no-op. Always returns `PAM_SUCCESS`.
///
/// # Safety
///
/// Same contract as [`pam_sm_authenticate`].
#[no_mangle]
pub unsafe extern "C" fn pam_sm_setcred(
    pamh: *mut pam_handle_t,
    flags: c_int,
    argc: c_int,
    _argv: *const *const c_char,
) -> c_int {
    initialize_logging();
    let invocation = Invocation::new(flags, argc);
    let module = TokenResetModule::new();

    // SAFETY: as above.
    let status = match unsafe { PamHandle::from_raw(pamh) } {
        Some(mut handle) => module.establish_credentials(&mut handle, &invocation),
        None => module.establish_credentials(&mut MissingSession, &invocation),
    };
    status.code()
}
