//! SHA-256 and BIP340 tagged hashing
//!
//! Thin wrappers over the `sha2` crate returning fixed-size arrays.

use k1crypt_params::utils::hash::SHA256_OUTPUT_SIZE;
use sha2::{Digest, Sha256};

/// SHA-256 digest of `data`
pub fn sha256(data: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
    Sha256::digest(data).into()
}

/// SHA-256 over the concatenation of `parts`
pub fn sha256_concat(parts: &[&[u8]]) -> [u8; SHA256_OUTPUT_SIZE] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// BIP340 tagged hash: SHA256(SHA256(tag) || SHA256(tag) || parts...)
pub fn tagged_hash(tag: &[u8], parts: &[&[u8]]) -> [u8; SHA256_OUTPUT_SIZE] {
    let tag_hash = sha256(tag);
    let mut hasher = Sha256::new();
    hasher.update(tag_hash);
    hasher.update(tag_hash);
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}
