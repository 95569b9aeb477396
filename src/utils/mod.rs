//! Utility implementations: in-memory backend and validation helpers

pub mod memory_backend;
pub mod validation;

pub use memory_backend::MemoryBackend;
pub use validation::{validate_account_name, validate_description, StrictEntryValidator};
