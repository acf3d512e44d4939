//! ECDH over secp256k1
//!
//! The shared secret is `SHA256(compressed(d·Q))`. Hashing the compressed
//! encoding binds the parity of the shared point, so a point and its
//! negation never yield the same secret.

use k1crypt_algorithms::{sha256, Context, Point, Scalar};
use k1crypt_api::{Error, Result};
use k1crypt_common::SecretBuffer;
use k1crypt_params::traditional::ecdh::{
    ECDH_SECP256K1_PRIVATE_KEY_SIZE, ECDH_SECP256K1_SHARED_SECRET_SIZE,
};
use subtle::{Choice, ConstantTimeEq};
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

/// Hashed ECDH shared secret
#[derive(Clone, Debug, Zeroize)]
pub struct EcdhSecp256k1SharedSecret(SecretBuffer<ECDH_SECP256K1_SHARED_SECRET_SIZE>);

impl EcdhSecp256k1SharedSecret {
    /// Copy out the secret bytes
    pub fn to_bytes(&self) -> [u8; ECDH_SECP256K1_SHARED_SECRET_SIZE] {
        *self.0.as_array()
    }
}

impl AsRef<[u8]> for EcdhSecp256k1SharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl ConstantTimeEq for EcdhSecp256k1SharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for EcdhSecp256k1SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EcdhSecp256k1SharedSecret {}

/// Compute the shared secret between our scalar and the peer's point
pub fn ecdh(ctx: &Context, secret: &Scalar, peer: &Point) -> Result<EcdhSecp256k1SharedSecret> {
    if bool::from(secret.is_zero()) {
        return Err(Error::invalid_secret("ECDH"));
    }
    if peer.is_identity() {
        return Err(Error::invalid_input("ECDH", "peer public key is the identity"));
    }

    let shared = ctx.mul(secret, peer);
    if shared.is_identity() {
        debug!("ECDH shared point is the identity");
        return Err(Error::invalid_input("ECDH", "shared point is the identity"));
    }

    let encoded = Zeroizing::new(shared.serialize_compressed());
    Ok(EcdhSecp256k1SharedSecret(SecretBuffer::new(sha256(&encoded[..]))))
}

/// Byte-level ECDH: a 32-byte secret scalar and a serialized peer key in
/// any accepted SEC1 form. A malformed peer key is reported as
/// `InvalidInput`.
pub fn ecdh_from_bytes(
    ctx: &Context,
    secret: &[u8; ECDH_SECP256K1_PRIVATE_KEY_SIZE],
    peer: &[u8],
) -> Result<EcdhSecp256k1SharedSecret> {
    let peer = Point::deserialize(peer).map_err(|e| Error::invalid_input("ECDH", e.to_string()))?;
    let mut scalar = Scalar::from_secret_bytes(secret).map_err(Error::from)?;
    let shared = ecdh(ctx, &scalar, &peer);
    scalar.zeroize();
    shared
}
