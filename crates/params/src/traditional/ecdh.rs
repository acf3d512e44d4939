//! Constants for Elliptic Curve Diffie-Hellman over secp256k1

/// Size of the hashed ECDH shared secret in bytes
pub const ECDH_SECP256K1_SHARED_SECRET_SIZE: usize = 32;

/// Size of an ECDH private key in bytes
pub const ECDH_SECP256K1_PRIVATE_KEY_SIZE: usize = 32;
