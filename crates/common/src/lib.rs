//! Common implementations and shared functionality for the k1crypt library
//!
//! This crate provides the secret-holding types used across k1crypt
//! components.

pub mod security;

// Re-export core security types
pub use security::SecretBuffer;
