//! Deterministic ECDSA nonces (RFC 6979) with HMAC-SHA256

use k1crypt_algorithms::{HmacDrbg, Scalar};
use k1crypt_api::NonceFunction;
use zeroize::Zeroizing;

/// RFC 6979 nonce generation
///
/// The DRBG is seeded with `secret || (msg_hash mod n)`, followed by the
/// optional 32 bytes of extra entropy and the optional algorithm tag. Attempt
/// `i` returns the `(i + 1)`-th DRBG output.
#[derive(Clone, Debug, Default)]
pub struct Rfc6979 {
    extra_data: Option<[u8; 32]>,
}

impl Rfc6979 {
    /// Plain RFC 6979
    pub const fn new() -> Self {
        Rfc6979 { extra_data: None }
    }

    /// RFC 6979 with additional data mixed into the seed
    pub const fn with_extra_data(extra_data: [u8; 32]) -> Self {
        Rfc6979 {
            extra_data: Some(extra_data),
        }
    }
}

impl NonceFunction for Rfc6979 {
    fn generate(
        &self,
        msg_hash: &[u8; 32],
        secret: &[u8; 32],
        algorithm: Option<&[u8; 16]>,
        attempt: u32,
    ) -> Option<[u8; 32]> {
        let mut seed = Zeroizing::new(Vec::with_capacity(112));
        seed.extend_from_slice(secret);
        seed.extend_from_slice(&Scalar::from_bytes_reduced(msg_hash).to_bytes());
        if let Some(extra) = &self.extra_data {
            seed.extend_from_slice(extra);
        }
        if let Some(algo) = algorithm {
            seed.extend_from_slice(algo);
        }

        let mut drbg = HmacDrbg::new(&seed);
        let mut nonce = [0u8; 32];
        for _ in 0..=attempt {
            drbg.generate(&mut nonce);
        }
        Some(nonce)
    }
}
