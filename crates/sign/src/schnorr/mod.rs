//! BIP340 Schnorr signatures over secp256k1
//!
//! Public keys are x-only: the signer negates its secret whenever the full
//! public point has an odd y-coordinate, so verifiers always lift the key to
//! the even-y point. Nonces are derived from the secret, the public key, the
//! message and 32 bytes of auxiliary randomness.

use k1crypt_algorithms::{generate_secret, tagged_hash, Context, FieldElement, Point, Scalar};
use k1crypt_api::error::validation;
use k1crypt_api::{Error, Result, Signature as SignatureTrait};
use k1crypt_common::SecretBuffer;
use k1crypt_params::traditional::ecdsa::SECP256K1_SCALAR_SIZE;
use k1crypt_params::traditional::schnorr::{
    BIP340_AUX_RAND_SIZE, BIP340_AUX_TAG, BIP340_CHALLENGE_TAG, BIP340_NONCE_TAG,
    BIP340_PUBLIC_KEY_SIZE, BIP340_SIGNATURE_SIZE, BIP340_SIGN_MESSAGE_SIZE,
};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable};
use tracing::warn;
use zeroize::{Zeroize, Zeroizing};

/// Source of the 32 bytes of auxiliary randomness mixed into the nonce
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuxRandomness {
    /// Draw fresh bytes from the operating system CSPRNG
    #[default]
    Fresh,
    /// All-zero auxiliary data. Signatures become fully deterministic.
    Zero,
    /// Caller-supplied auxiliary data
    Bytes([u8; BIP340_AUX_RAND_SIZE]),
}

impl AuxRandomness {
    fn resolve(&self) -> Result<Zeroizing<[u8; BIP340_AUX_RAND_SIZE]>> {
        let mut aux = Zeroizing::new([0u8; BIP340_AUX_RAND_SIZE]);
        match self {
            AuxRandomness::Fresh => OsRng.try_fill_bytes(&mut aux[..])?,
            AuxRandomness::Zero => {}
            AuxRandomness::Bytes(bytes) => aux.copy_from_slice(bytes),
        }
        Ok(aux)
    }
}

/// A 64-byte BIP340 signature `R.x || s`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SchnorrSignature([u8; BIP340_SIGNATURE_SIZE]);

impl SchnorrSignature {
    /// Wrap 64 signature bytes. Fails with `InvalidLength` on any other size.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validation::length("BIP340 signature", bytes.len(), BIP340_SIGNATURE_SIZE)?;
        let mut sig = [0u8; BIP340_SIGNATURE_SIZE];
        sig.copy_from_slice(bytes);
        Ok(SchnorrSignature(sig))
    }

    /// The raw signature bytes
    pub fn to_bytes(&self) -> [u8; BIP340_SIGNATURE_SIZE] {
        self.0
    }

    fn split(&self) -> ([u8; 32], [u8; 32]) {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&self.0[..32]);
        s.copy_from_slice(&self.0[32..]);
        (r, s)
    }
}

impl AsRef<[u8]> for SchnorrSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// e = H_challenge(R.x || P.x || m) mod n
fn challenge(r_x: &[u8; 32], p_x: &[u8; 32], message: &[u8]) -> Scalar {
    Scalar::from_bytes_reduced(&tagged_hash(BIP340_CHALLENGE_TAG, &[&r_x[..], &p_x[..], message]))
}

/// Sign a 32-byte message.
///
/// The produced signature is verified before it is returned; a signature
/// that fails this check is reported as `SigningFailed`.
pub fn sign(
    ctx: &Context,
    secret: &Scalar,
    message: &[u8],
    aux: &AuxRandomness,
) -> Result<SchnorrSignature> {
    if message.len() != BIP340_SIGN_MESSAGE_SIZE {
        return Err(Error::invalid_input(
            "BIP340 sign",
            format!("message must be {} bytes", BIP340_SIGN_MESSAGE_SIZE),
        ));
    }
    if bool::from(secret.is_zero()) {
        return Err(Error::invalid_secret("BIP340 sign"));
    }

    let public = ctx.mul_generator(secret);
    let p_x = public.x_coordinate_bytes();
    let mut d = Scalar::conditional_select(
        secret,
        &secret.negate(),
        Choice::from(public.has_odd_y() as u8),
    );

    let aux = aux.resolve()?;
    let aux_hash = tagged_hash(BIP340_AUX_TAG, &[&aux[..]]);
    let mut t = Zeroizing::new(d.to_bytes());
    t.iter_mut().zip(aux_hash.iter()).for_each(|(a, b)| *a ^= b);

    let rand = Zeroizing::new(tagged_hash(BIP340_NONCE_TAG, &[&t[..], &p_x[..], message]));
    let mut k0 = Scalar::from_bytes_reduced(&rand);
    if bool::from(k0.is_zero()) {
        d.zeroize();
        return Err(Error::signing_failed("BIP340 sign", "derived nonce is zero"));
    }

    let nonce_point = ctx.mul_generator(&k0);
    let mut k = Scalar::conditional_select(
        &k0,
        &k0.negate(),
        Choice::from(nonce_point.has_odd_y() as u8),
    );
    let r_x = nonce_point.x_coordinate_bytes();
    let e = challenge(&r_x, &p_x, message);
    let s = k.add(&e.mul(&d));
    k.zeroize();
    k0.zeroize();
    d.zeroize();

    let mut sig = [0u8; BIP340_SIGNATURE_SIZE];
    sig[..32].copy_from_slice(&r_x);
    sig[32..].copy_from_slice(&s.to_bytes());
    let sig = SchnorrSignature(sig);

    if !verify(ctx, &sig, message, &p_x) {
        warn!("BIP340 signature failed self-verification");
        return Err(Error::signing_failed(
            "BIP340 sign",
            "produced signature does not verify",
        ));
    }
    Ok(sig)
}

/// Verify a signature against an x-only public key. Messages may have any
/// length.
pub fn verify(
    ctx: &Context,
    signature: &SchnorrSignature,
    message: &[u8],
    public_key: &[u8; BIP340_PUBLIC_KEY_SIZE],
) -> bool {
    let Ok(public) = Point::lift_x(public_key) else {
        return false;
    };
    let (r_x, s_bytes) = signature.split();
    if FieldElement::from_bytes(&r_x).is_err() {
        return false;
    }
    let Ok(s) = Scalar::from_bytes(&s_bytes) else {
        return false;
    };

    let e = challenge(&r_x, public_key, message);
    let candidate = ctx.mul_add(&s, &e.negate(), &public);
    !candidate.is_identity() && !candidate.has_odd_y() && candidate.x_coordinate_bytes() == r_x
}

/// BIP340 Schnorr signature scheme
pub struct SchnorrBip340;

/// x-only public key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchnorrPublicKey(pub [u8; BIP340_PUBLIC_KEY_SIZE]);

/// Schnorr secret key
#[derive(Clone, Zeroize)]
pub struct SchnorrSecretKey(SecretBuffer<SECP256K1_SCALAR_SIZE>);

impl SchnorrSecretKey {
    /// Validate and wrap a big-endian secret scalar
    pub fn from_bytes(bytes: &[u8; SECP256K1_SCALAR_SIZE]) -> Result<Self> {
        Scalar::from_secret_bytes(bytes).map_err(Error::from)?;
        Ok(SchnorrSecretKey(SecretBuffer::new(*bytes)))
    }
}

impl AsRef<[u8]> for SchnorrPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for SchnorrSecretKey {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl SignatureTrait for SchnorrBip340 {
    type PublicKey = SchnorrPublicKey;
    type SecretKey = SchnorrSecretKey;
    type SignatureData = SchnorrSignature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "BIP340-Schnorr"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair> {
        let mut secret = generate_secret(rng);
        let public = Context::global().mul_generator(&secret);
        let keypair = (
            SchnorrPublicKey(public.serialize_xonly()),
            SchnorrSecretKey(SecretBuffer::new(secret.to_bytes())),
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

    /// Sign a 32-byte message with fresh auxiliary randomness
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData> {
        let mut secret = Scalar::from_secret_bytes(secret_key.0.as_array()).map_err(Error::from)?;
        let sig = sign(&Context::global(), &secret, message, &AuxRandomness::Fresh);
        secret.zeroize();
        sig
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<bool> {
        Point::lift_x(&public_key.0).map_err(|e| Error::from(e).with_context("BIP340 verify"))?;
        Ok(verify(&Context::global(), signature, message, &public_key.0))
    }
}
