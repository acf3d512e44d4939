//! Constants for ECDSA over secp256k1

/// Parameters of the secp256k1 curve `y² = x³ + b` over `F_p`.
///
/// All values are big-endian byte strings.
#[derive(Debug, Clone, Copy)]
pub struct Secp256k1Params {
    /// Field prime p = 2²⁵⁶ − 2³² − 977
    pub p: [u8; 32],
    /// Order n of the base point
    pub n: [u8; 32],
    /// Curve coefficient b
    pub b: u64,
    /// x-coordinate of the base point G
    pub g_x: [u8; 32],
    /// y-coordinate of the base point G
    pub g_y: [u8; 32],
}

/// The secp256k1 curve (SEC 2, section 2.4.1)
pub const SECP256K1: Secp256k1Params = Secp256k1Params {
    p: [
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF,
        0xFC, 0x2F,
    ],
    n: [
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36,
        0x41, 0x41,
    ],
    b: 7,
    g_x: [
        0x79, 0xBE, 0x66, 0x7E, 0xF9, 0xDC, 0xBB, 0xAC, 0x55, 0xA0, 0x62, 0x95, 0xCE, 0x87, 0x0B,
        0x07, 0x02, 0x9B, 0xFC, 0xDB, 0x2D, 0xCE, 0x28, 0xD9, 0x59, 0xF2, 0x81, 0x5B, 0x16, 0xF8,
        0x17, 0x98,
    ],
    g_y: [
        0x48, 0x3A, 0xDA, 0x77, 0x26, 0xA3, 0xC4, 0x65, 0x5D, 0xA4, 0xFB, 0xFC, 0x0E, 0x11, 0x08,
        0xA8, 0xFD, 0x17, 0xB4, 0x48, 0xA6, 0x85, 0x54, 0x19, 0x9C, 0x47, 0xD0, 0x8F, 0xFB, 0x10,
        0xD4, 0xB8,
    ],
};

/// Size of a secp256k1 scalar (private key) in bytes
pub const SECP256K1_SCALAR_SIZE: usize = 32;

/// Size of a secp256k1 field element in bytes
pub const SECP256K1_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of a compressed public key: 0x02/0x03 || x
pub const SECP256K1_COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;

/// Size of an uncompressed public key: 0x04 || x || y
pub const SECP256K1_UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;

/// Size of the message hash signed by ECDSA
pub const ECDSA_MESSAGE_HASH_SIZE: usize = 32;

/// Size of a compact ECDSA signature: r || s
pub const ECDSA_COMPACT_SIGNATURE_SIZE: usize = 64;

/// Size of a compact recoverable ECDSA signature: r || s || recid
pub const ECDSA_RECOVERABLE_SIGNATURE_SIZE: usize = 65;

/// Upper bound on a DER-encoded ECDSA signature
pub const ECDSA_MAX_DER_SIGNATURE_SIZE: usize = 72;
