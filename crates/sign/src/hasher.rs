//! Message hashing ahead of ECDSA signing and verification

use core::fmt;

use k1crypt_algorithms::sha256;
use k1crypt_api::error::validation;
use k1crypt_api::Result;
use k1crypt_params::traditional::ecdsa::ECDSA_MESSAGE_HASH_SIZE;

/// How a message is turned into the 32-byte digest that ECDSA signs
#[derive(Clone, Copy, Default)]
pub enum Hasher {
    /// SHA-256 of the message
    #[default]
    Sha256,
    /// The message already is the 32-byte digest
    Prehashed,
    /// A caller-supplied hash; its output must be 32 bytes
    Custom(fn(&[u8]) -> Vec<u8>),
}

impl Hasher {
    /// Produce the digest, failing with `InvalidLength` if it is not 32 bytes
    pub fn digest(&self, message: &[u8]) -> Result<[u8; ECDSA_MESSAGE_HASH_SIZE]> {
        match self {
            Hasher::Sha256 => Ok(sha256(message)),
            Hasher::Prehashed => to_digest(message),
            Hasher::Custom(hash) => to_digest(&hash(message)),
        }
    }
}

fn to_digest(bytes: &[u8]) -> Result<[u8; ECDSA_MESSAGE_HASH_SIZE]> {
    validation::length("message hash", bytes.len(), ECDSA_MESSAGE_HASH_SIZE)?;
    let mut out = [0u8; ECDSA_MESSAGE_HASH_SIZE];
    out.copy_from_slice(bytes);
    Ok(out)
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hasher::Sha256 => f.write_str("Sha256"),
            Hasher::Prehashed => f.write_str("Prehashed"),
            Hasher::Custom(_) => f.write_str("Custom"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k1crypt_api::ErrorKind;

    fn truncated(msg: &[u8]) -> Vec<u8> {
        sha256(msg)[..20].to_vec()
    }

    fn doubled(msg: &[u8]) -> Vec<u8> {
        sha256(&sha256(msg)).to_vec()
    }

    #[test]
    fn prehashed_requires_32_bytes() {
        assert_eq!(Hasher::Prehashed.digest(&[7u8; 32]).unwrap(), [7u8; 32]);
        let err = Hasher::Prehashed.digest(b"short").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn custom_output_is_length_checked() {
        assert!(Hasher::Custom(truncated).digest(b"msg").is_err());
        assert_eq!(
            Hasher::Custom(doubled).digest(b"msg").unwrap(),
            sha256(&sha256(b"msg"))
        );
    }
}
