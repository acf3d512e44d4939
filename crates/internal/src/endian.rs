//! Endianness utility functions
//!
//! Field elements and scalars are stored as four little-endian 64-bit limbs
//! and serialized as 32 big-endian bytes.

/// Convert 32 big-endian bytes into four little-endian `u64` limbs
pub fn be_bytes_to_limbs(bytes: &[u8; 32]) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let start = 24 - i * 8;
        let mut word = [0u8; 8];
        word.copy_from_slice(&bytes[start..start + 8]);
        *limb = u64::from_be_bytes(word);
    }
    limbs
}

/// Convert four little-endian `u64` limbs into 32 big-endian bytes
pub fn limbs_to_be_bytes(limbs: &[u64; 4]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, limb) in limbs.iter().enumerate() {
        let start = 24 - i * 8;
        out[start..start + 8].copy_from_slice(&limb.to_be_bytes());
    }
    out
}
