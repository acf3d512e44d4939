//! # k1crypt
//!
//! A pure Rust secp256k1 library: key management, ECDSA with public-key
//! recovery, BIP340 Schnorr signatures, x-only keys, ECDH, key tweaking and
//! PKCS#8 DER/PEM private keys.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! k1crypt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `sign` (default): ECDSA and BIP340 Schnorr
//! - `kem` (default): ECDH
//! - `keys` (default): `PrivateKey`, `PublicKey` and `XOnlyPublicKey`
//! - `serde`: `Serialize`/`Deserialize` for public keys
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`k1crypt-algorithms`]: Field, scalar and point arithmetic, the blinded context, encodings
//! - [`k1crypt-sign`]: ECDSA and Schnorr signatures
//! - [`k1crypt-kem`]: ECDH key agreement
//! - [`k1crypt-keys`]: Key types

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use k1crypt_algorithms as algorithms;
pub use k1crypt_api as api;
pub use k1crypt_common as common;
pub use k1crypt_internal as internal;
pub use k1crypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "sign")]
pub use k1crypt_sign as sign;

#[cfg(feature = "kem")]
pub use k1crypt_kem as kem;

#[cfg(feature = "keys")]
pub use k1crypt_keys as keys;

// Third-party crates that appear in the public API
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for k1crypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, ErrorKind, Result};

    // Re-export core traits
    pub use crate::api::{NonceFunction, Signature};

    // Re-export security types
    pub use crate::common::SecretBuffer;

    // Curve context
    pub use crate::algorithms::Context;

    #[cfg(feature = "sign")]
    pub use crate::sign::{
        AuxRandomness, EcdsaSecp256k1, EcdsaSignature, Hasher, RecoverableSignature, Rfc6979,
        SchnorrBip340,
    };

    #[cfg(feature = "kem")]
    pub use crate::kem::EcdhSecp256k1SharedSecret;

    #[cfg(feature = "keys")]
    pub use crate::keys::{PrivateKey, PublicKey, XOnlyPublicKey};
}
