//! Key agreement over secp256k1
//!
//! This crate implements elliptic-curve Diffie-Hellman whose output is the
//! SHA-256 digest of the compressed shared point.

#![forbid(unsafe_code)]

pub mod ecdh;

pub use ecdh::{ecdh, ecdh_from_bytes, EcdhSecp256k1SharedSecret};
