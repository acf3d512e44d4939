//! secp256k1 primitives with constant-time implementation
//!
//! This crate provides the numeric core of k1crypt: field and scalar
//! arithmetic modulo p and n, curve points, the precomputed and blinded
//! [`Context`], SHA-256 tagged hashing, the HMAC-DRBG used for RFC 6979
//! nonces, and the DER/PEM codec for PKCS#8 private keys.
//!
//! # Security Features
//!
//! - Scalar and field arithmetic without secret-dependent branches
//! - Fixed-window scalar multiplication with full table scans
//! - Generator multiplication blinded by a reseedable random scalar
//! - Zeroization of secret intermediates

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::secp256k1::{
    base_point_g, generate_secret, sum_points, Context, FieldElement, Point, PointFormat, Scalar,
};

// Hashing
pub mod hash;
pub use hash::{sha256, tagged_hash};

// Deterministic random bit generation
pub mod drbg;
pub use drbg::HmacDrbg;

// DER / PEM codec
pub mod encoding;
