pub mod entry;
pub mod ffi;
pub mod handle;

// Re-export the exported entry points and the handle wrapper
pub use entry::{pam_sm_authenticate, pam_sm_setcred};
pub use handle::{MissingSession, PamHandle};
