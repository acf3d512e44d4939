//! Byte, hex and PEM helpers shared by the key types

use k1crypt_algorithms::{Context, Point, Scalar};
use k1crypt_api::error::validation;
use k1crypt_api::{Error, Result};
use k1crypt_params::traditional::ecdsa::{ECDSA_MESSAGE_HASH_SIZE, SECP256K1_SCALAR_SIZE};
use k1crypt_sign::{ecdsa, EcdsaSignature, Hasher};

/// The group order n, big-endian
pub const GROUP_ORDER: [u8; SECP256K1_SCALAR_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Size of a secret key in bytes
pub const KEY_SIZE: usize = SECP256K1_SCALAR_SIZE;

/// Size of the message digest ECDSA signs
pub const MSG_HASH_SIZE: usize = ECDSA_MESSAGE_HASH_SIZE;

/// Left-pad a big-endian value with zeros to 32 bytes
pub fn pad_scalar(bytes: &[u8]) -> Result<[u8; KEY_SIZE]> {
    validation::max_length("scalar", bytes.len(), KEY_SIZE)?;
    let mut out = [0u8; KEY_SIZE];
    out[KEY_SIZE - bytes.len()..].copy_from_slice(bytes);
    Ok(out)
}

/// Pad a big-endian secret to 32 bytes and check `0 < s < n`
pub fn validate_secret(bytes: &[u8]) -> Result<[u8; KEY_SIZE]> {
    let padded = pad_scalar(bytes).map_err(|_| Error::invalid_secret("secret scalar"))?;
    Scalar::from_secret_bytes(&padded)
        .map_err(|e| Error::from(e).with_context("secret scalar"))?;
    Ok(padded)
}

/// Decode hex into a 32-byte value. Odd-length input gains a leading zero
/// nibble and short values are left-padded.
pub fn hex_to_bytes(hexed: &str) -> Result<[u8; KEY_SIZE]> {
    let decoded = if hexed.len() % 2 == 1 {
        hex::decode(format!("0{}", hexed))
    } else {
        hex::decode(hexed)
    }
    .map_err(|e| Error::decode("hex", e.to_string()))?;
    pad_scalar(&decoded)
}

/// Wrap DER bytes in `PRIVATE KEY` PEM armour
pub fn der_to_pem(der: &[u8]) -> String {
    k1crypt_algorithms::encoding::der_to_pem(der)
}

/// Strip `PRIVATE KEY` PEM armour and decode the base64 body
pub fn pem_to_der(pem: &str) -> Result<Vec<u8>> {
    k1crypt_algorithms::encoding::pem_to_der(pem).map_err(Error::from)
}

/// Verify a DER ECDSA signature against a serialized public key.
///
/// Malformed keys, digests of the wrong size and unparseable DER are
/// errors; a well-formed signature that does not match returns `Ok(false)`.
pub fn verify_signature(
    signature: &[u8],
    message: &[u8],
    public_key: &[u8],
    hasher: &Hasher,
    ctx: &Context,
) -> Result<bool> {
    let point = Point::deserialize(public_key)
        .map_err(|e| Error::from(e).with_context("verify_signature"))?;
    let digest = hasher.digest(message)?;
    let signature = EcdsaSignature::from_der(signature)?;
    Ok(ecdsa::verify(ctx, &signature, &digest, &point))
}
