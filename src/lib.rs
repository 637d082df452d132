//! PAM module that wipes `PAM_AUTHTOK` and `PAM_OLDAUTHTOK` during the `auth`
//! stage so every attempt in a test stack starts without a cached password.
//!
//! Built as `cdylib`; the deployment installs it as `pam_clear_token.so`.

// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{pam, token_reset, utils};

// Re-export commonly used types
pub use modules::pam::{pam_sm_authenticate, pam_sm_setcred};
pub use modules::token_reset::{
    CredentialSlot, CredentialSlots, Invocation, PamStatus, SlotError, TokenResetModule,
};
