//! Constants for secp256k1 elliptic curve operations

pub use k1crypt_params::traditional::ecdsa::{
    SECP256K1, SECP256K1_COMPRESSED_PUBLIC_KEY_SIZE as SECP256K1_POINT_COMPRESSED_SIZE,
    SECP256K1_FIELD_ELEMENT_SIZE, SECP256K1_SCALAR_SIZE,
    SECP256K1_UNCOMPRESSED_PUBLIC_KEY_SIZE as SECP256K1_POINT_UNCOMPRESSED_SIZE,
};

/// Size of an x-only (BIP340) point encoding in bytes
pub const SECP256K1_POINT_XONLY_SIZE: usize = 32;

/// Width in bits of the windows used by scalar multiplication
pub(crate) const WINDOW_BITS: usize = 4;

/// Number of multiples stored per window
pub(crate) const WINDOW_SIZE: usize = 1 << WINDOW_BITS;

/// Number of 4-bit windows in a 256-bit scalar
pub(crate) const WINDOW_COUNT: usize = 256 / WINDOW_BITS;
