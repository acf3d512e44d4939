//! Constants for hash functions

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Internal block size of SHA-256 in bytes
pub const SHA256_BLOCK_SIZE: usize = 64;

/// Output size of HMAC-SHA256 in bytes
pub const HMAC_SHA256_OUTPUT_SIZE: usize = SHA256_OUTPUT_SIZE;
