//! Elliptic Curve Primitives
//!
//! Constant-time arithmetic on the Koblitz curve secp256k1. These routines are
//! the foundation for the ECDSA, BIP340 Schnorr and ECDH crates.

pub mod secp256k1;

pub use secp256k1::{Context, FieldElement, Point, PointFormat, Scalar};
