//! ECDSA over secp256k1
//!
//! Signing follows the libsecp256k1 state machine: nonces come from a
//! [`NonceFunction`] (RFC 6979 by default) and are retried with an increasing
//! attempt counter until `r` and `s` are both nonzero. Produced signatures
//! are always low-S and verification rejects high-S signatures.

mod rfc6979;
mod signature;

pub use rfc6979::Rfc6979;
pub use signature::{EcdsaSignature, RecoverableSignature};

use k1crypt_algorithms::{generate_secret, Context, FieldElement, Point, Scalar};
use k1crypt_api::{Error, NonceFunction, Result, Signature as SignatureTrait};
use k1crypt_common::SecretBuffer;
use k1crypt_params::traditional::ecdsa::{
    ECDSA_MESSAGE_HASH_SIZE, SECP256K1_COMPRESSED_PUBLIC_KEY_SIZE, SECP256K1_SCALAR_SIZE,
};
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};
use zeroize::{Zeroize, Zeroizing};

/// Upper bound on nonce attempts before signing gives up
const MAX_NONCE_ATTEMPTS: u32 = 1024;

/// Sign a 32-byte message hash, returning the signature with its recovery id
pub fn sign_recoverable<N>(
    ctx: &Context,
    secret: &Scalar,
    msg_hash: &[u8; ECDSA_MESSAGE_HASH_SIZE],
    nonce_fn: &N,
) -> Result<RecoverableSignature>
where
    N: NonceFunction + ?Sized,
{
    if bool::from(secret.is_zero()) {
        return Err(Error::invalid_secret("ECDSA sign"));
    }
    let message = Scalar::from_bytes_reduced(msg_hash);
    let secret_bytes = Zeroizing::new(secret.to_bytes());

    for attempt in 0..MAX_NONCE_ATTEMPTS {
        let mut candidate = nonce_fn
            .generate(msg_hash, &secret_bytes, None, attempt)
            .ok_or_else(|| Error::signing_failed("ECDSA sign", "nonce function failed"))?;
        let (mut k, overflow) = Scalar::from_bytes_with_overflow(&candidate);
        candidate.zeroize();

        if bool::from(overflow | k.is_zero()) {
            trace!(attempt, "ECDSA nonce out of range, advancing counter");
            continue;
        }

        let signed = sign_with_nonce(ctx, secret, &message, &k);
        k.zeroize();
        match signed {
            Some(sig) => return Ok(sig),
            None => trace!(attempt, "ECDSA produced r = 0 or s = 0, advancing counter"),
        }
    }

    Err(Error::signing_failed(
        "ECDSA sign",
        "no usable nonce within the attempt limit",
    ))
}

/// s = k⁻¹(m + r·d); `None` when r or s is zero
fn sign_with_nonce(
    ctx: &Context,
    secret: &Scalar,
    message: &Scalar,
    k: &Scalar,
) -> Option<RecoverableSignature> {
    let nonce_point = ctx.mul_generator(k);
    let (r, overflow) = Scalar::from_bytes_with_overflow(&nonce_point.x_coordinate_bytes());
    if bool::from(r.is_zero()) {
        return None;
    }
    let mut recid = (overflow.unwrap_u8() << 1) | nonce_point.has_odd_y() as u8;

    let mut k_inv = k.invert().ok()?;
    let mut s = k_inv.mul(&r.mul(secret).add(message));
    k_inv.zeroize();
    if bool::from(s.is_zero()) {
        return None;
    }
    if bool::from(s.is_high()) {
        s = s.negate();
        recid ^= 1;
    }
    Some(RecoverableSignature::new(
        EcdsaSignature::from_scalars(&r, &s),
        recid,
    ))
}

/// Sign a 32-byte message hash
pub fn sign<N>(
    ctx: &Context,
    secret: &Scalar,
    msg_hash: &[u8; ECDSA_MESSAGE_HASH_SIZE],
    nonce_fn: &N,
) -> Result<EcdsaSignature>
where
    N: NonceFunction + ?Sized,
{
    sign_recoverable(ctx, secret, msg_hash, nonce_fn).map(|sig| sig.to_standard())
}

/// Verify a signature over a 32-byte message hash.
///
/// Returns `false` for any signature that does not verify, including
/// out-of-range components and high-S signatures.
pub fn verify(
    ctx: &Context,
    signature: &EcdsaSignature,
    msg_hash: &[u8; ECDSA_MESSAGE_HASH_SIZE],
    public_key: &Point,
) -> bool {
    let Some((r, s)) = signature.scalars() else {
        return false;
    };
    if bool::from(s.is_high()) || public_key.is_identity() {
        return false;
    }
    let Ok(s_inv) = s.invert() else {
        return false;
    };

    let message = Scalar::from_bytes_reduced(msg_hash);
    let u1 = message.mul(&s_inv);
    let u2 = r.mul(&s_inv);
    let candidate = ctx.mul_add(&u1, &u2, public_key);
    if candidate.is_identity() {
        return false;
    }
    Scalar::from_bytes_reduced(&candidate.x_coordinate_bytes()) == r
}

/// Recover the public key that produced a recoverable signature:
/// Q = r⁻¹(s·R − m·G)
pub fn recover(
    ctx: &Context,
    signature: &RecoverableSignature,
    msg_hash: &[u8; ECDSA_MESSAGE_HASH_SIZE],
) -> Result<Point> {
    let standard = signature.to_standard();
    let (r, s) = standard
        .scalars()
        .ok_or_else(|| Error::recovery_failed("ECDSA recover", "r or s is zero"))?;

    let recid = signature.recid();
    let nonce_point = FieldElement::from_scalar(&r, recid & 2 != 0)
        .and_then(|x| Point::decompress(&x.to_bytes(), recid & 1 == 1))
        .map_err(|e| {
            debug!(recid, error = %e, "ECDSA recovery could not rebuild the nonce point");
            Error::recovery_failed("ECDSA recover", "nonce point is not on the curve")
        })?;

    let r_inv = r
        .invert()
        .map_err(|_| Error::recovery_failed("ECDSA recover", "r is not invertible"))?;
    let message = Scalar::from_bytes_reduced(msg_hash);
    let u1 = message.mul(&r_inv).negate();
    let u2 = s.mul(&r_inv);
    let public_key = ctx.mul_add(&u1, &u2, &nonce_point);

    if public_key.is_identity() || !verify(ctx, &standard.normalize().1, msg_hash, &public_key) {
        debug!(recid, "ECDSA recovery produced an unusable key");
        return Err(Error::recovery_failed(
            "ECDSA recover",
            "recovered key does not verify",
        ));
    }
    Ok(public_key)
}

/// 64-byte `r || s`
pub fn serialize_compact(signature: &EcdsaSignature) -> [u8; 64] {
    signature.to_compact()
}

/// Parse 64-byte `r || s`
pub fn deserialize_compact(bytes: &[u8]) -> Result<EcdsaSignature> {
    EcdsaSignature::from_compact(bytes)
}

/// 65-byte `r || s || recid`
pub fn serialize_recoverable(signature: &RecoverableSignature) -> [u8; 65] {
    signature.to_bytes()
}

/// Parse 65-byte `r || s || recid`
pub fn deserialize_recoverable(bytes: &[u8]) -> Result<RecoverableSignature> {
    RecoverableSignature::from_bytes(bytes)
}

/// Drop the recovery id from a recoverable signature
pub fn recoverable_convert(signature: &RecoverableSignature) -> EcdsaSignature {
    signature.to_standard()
}

/// Low-S normalization of a DER signature; returns whether it changed and
/// the normalized DER bytes
pub fn signature_normalize(der: &[u8]) -> Result<(bool, Vec<u8>)> {
    let (changed, normalized) = EcdsaSignature::from_der(der)?.normalize();
    Ok((changed, normalized.to_der()))
}

/// ECDSA signature scheme over secp256k1 with SHA-256 and RFC 6979 nonces
pub struct EcdsaSecp256k1;

/// secp256k1 public key in compressed SEC1 form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcdsaSecp256k1PublicKey(pub [u8; SECP256K1_COMPRESSED_PUBLIC_KEY_SIZE]);

/// secp256k1 secret key, a scalar in (0, n)
#[derive(Clone, Zeroize)]
pub struct EcdsaSecp256k1SecretKey(SecretBuffer<SECP256K1_SCALAR_SIZE>);

impl EcdsaSecp256k1SecretKey {
    /// Validate and wrap a big-endian secret scalar
    pub fn from_bytes(bytes: &[u8; SECP256K1_SCALAR_SIZE]) -> Result<Self> {
        Scalar::from_secret_bytes(bytes).map_err(Error::from)?;
        Ok(EcdsaSecp256k1SecretKey(SecretBuffer::new(*bytes)))
    }

    pub(crate) fn scalar(&self) -> Result<Scalar> {
        Scalar::from_secret_bytes(self.0.as_array()).map_err(Error::from)
    }
}

impl AsRef<[u8]> for EcdsaSecp256k1PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for EcdsaSecp256k1SecretKey {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl SignatureTrait for EcdsaSecp256k1 {
    type PublicKey = EcdsaSecp256k1PublicKey;
    type SecretKey = EcdsaSecp256k1SecretKey;
    type SignatureData = EcdsaSignature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "ECDSA-secp256k1"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair> {
        let mut secret = generate_secret(rng);
        let public = Context::global().mul_generator(&secret);
        let keypair = (
            EcdsaSecp256k1PublicKey(public.serialize_compressed()),
            EcdsaSecp256k1SecretKey(SecretBuffer::new(secret.to_bytes())),
        );
        secret.zeroize();
        Ok(keypair)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    /// SHA-256 the message and sign it with an RFC 6979 nonce
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData> {
        let mut secret = secret_key.scalar()?;
        let digest = k1crypt_algorithms::sha256(message);
        let sig = sign(&Context::global(), &secret, &digest, &Rfc6979::new());
        secret.zeroize();
        sig
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<bool> {
        let point = Point::deserialize(&public_key.0).map_err(Error::from)?;
        let digest = k1crypt_algorithms::sha256(message);
        Ok(verify(&Context::global(), signature, &digest, &point))
    }
}
