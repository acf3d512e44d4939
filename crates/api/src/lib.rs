//! Public API traits and types for the k1crypt library
//!
//! This crate provides the public API surface shared by every k1crypt crate:
//! the error taxonomy, validation helpers and the signing traits.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result};

pub use traits::{NonceFunction, Signature};

// Re-export trait modules for direct access
pub use traits::{nonce, signature};
