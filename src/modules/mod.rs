// Declare all modules
pub mod pam;
pub mod token_reset;
pub mod utils;

// No re-exports here as they're handled in lib.rs
