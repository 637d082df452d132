pub mod module;
pub mod slots;
pub mod status;

// Re-export the main types
pub use module::{Invocation, TokenResetModule};
pub use slots::{CredentialSlot, CredentialSlots, SlotError};
pub use status::PamStatus;
