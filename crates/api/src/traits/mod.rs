//! Trait definitions shared by the signature schemes

pub mod nonce;
pub mod signature;

pub use nonce::NonceFunction;
pub use signature::Signature;
