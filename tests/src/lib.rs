//! Shared fixtures for the k1crypt integration tests
//!
//! Published vectors (BIP340, BIP86, RFC 6979) live here so every test file
//! checks against the same data.

pub mod vectors;

/// Decode a hex fixture, panicking on malformed input
pub fn unhex(hexed: &str) -> Vec<u8> {
    match hex::decode(hexed) {
        Ok(bytes) => bytes,
        Err(e) => panic!("malformed hex fixture {}: {}", hexed, e),
    }
}

/// Decode a hex fixture into a fixed 32-byte array
pub fn bytes32(hexed: &str) -> [u8; 32] {
    let decoded = unhex(hexed);
    let mut out = [0u8; 32];
    out.copy_from_slice(&decoded);
    out
}
