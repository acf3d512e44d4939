//! HMAC-SHA256 deterministic random bit generator (RFC 6979, section 3.2)

use hmac::{Hmac, Mac};
use k1crypt_params::utils::hash::HMAC_SHA256_OUTPUT_SIZE;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-DRBG state (K, V)
///
/// Used as the RFC 6979 nonce generator: seeded with the secret key and the
/// message hash, each call to [`HmacDrbg::generate`] yields the next 32-byte
/// candidate.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct HmacDrbg {
    k: [u8; HMAC_SHA256_OUTPUT_SIZE],
    v: [u8; HMAC_SHA256_OUTPUT_SIZE],
    retry: bool,
}

fn hmac(key: &[u8], parts: &[&[u8]]) -> [u8; HMAC_SHA256_OUTPUT_SIZE] {
    let mut mac = match HmacSha256::new_from_slice(key) {
        Ok(mac) => mac,
        Err(_) => unreachable!("HMAC-SHA256 accepts any key length"),
    };
    for part in parts {
        mac.update(part);
    }
    mac.finalize().into_bytes().into()
}

impl HmacDrbg {
    /// Instantiate from seed material (RFC 6979 steps b through g)
    pub fn new(seed: &[u8]) -> Self {
        let mut drbg = HmacDrbg {
            k: [0x00; HMAC_SHA256_OUTPUT_SIZE],
            v: [0x01; HMAC_SHA256_OUTPUT_SIZE],
            retry: false,
        };
        drbg.k = hmac(&drbg.k, &[&drbg.v, &[0x00], seed]);
        drbg.v = hmac(&drbg.k, &[&drbg.v]);
        drbg.k = hmac(&drbg.k, &[&drbg.v, &[0x01], seed]);
        drbg.v = hmac(&drbg.k, &[&drbg.v]);
        drbg
    }

    /// Produce the next 32 bytes, reseeding with K = HMAC(K, V || 0x00)
    /// between outputs (RFC 6979 step h.3).
    pub fn generate(&mut self, out: &mut [u8; HMAC_SHA256_OUTPUT_SIZE]) {
        if self.retry {
            self.k = hmac(&self.k, &[&self.v, &[0x00]]);
            self.v = hmac(&self.k, &[&self.v]);
        }
        self.v = hmac(&self.k, &[&self.v]);
        out.copy_from_slice(&self.v);
        self.retry = true;
    }
}
