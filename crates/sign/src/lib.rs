//! Digital Signature Schemes over secp256k1
//!
//! This crate implements ECDSA (RFC 6979 deterministic nonces, low-S
//! normalization, public-key recovery, DER and compact encodings) and BIP340
//! Schnorr signatures.

pub mod ecdsa;
pub mod hasher;
pub mod schnorr;

pub use ecdsa::{EcdsaSecp256k1, EcdsaSignature, RecoverableSignature, Rfc6979};
pub use hasher::Hasher;
pub use schnorr::{AuxRandomness, SchnorrBip340};
