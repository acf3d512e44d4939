//! secp256k1 private keys

use std::fmt;
use std::hash::{self, Hash};
use std::sync::Arc;

use k1crypt_algorithms::encoding::{decode_pkcs8_private_key, encode_pkcs8_private_key};
use k1crypt_algorithms::{generate_secret, Context, Scalar};
use k1crypt_api::{Error, NonceFunction, Result};
use k1crypt_common::SecretBuffer;
use k1crypt_kem::{ecdh_from_bytes, EcdhSecp256k1SharedSecret};
use k1crypt_params::traditional::ecdsa::{
    ECDSA_RECOVERABLE_SIGNATURE_SIZE, SECP256K1_SCALAR_SIZE,
};
use k1crypt_params::traditional::schnorr::BIP340_SIGNATURE_SIZE;
use k1crypt_sign::{ecdsa, schnorr, AuxRandomness, Hasher, Rfc6979};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::public::{parse_add_tweak, parse_mul_tweak};
use crate::utils::{der_to_pem, hex_to_bytes, pad_scalar, pem_to_der, validate_secret};
use crate::{PublicKey, XOnlyPublicKey};

/// A secret scalar in (0, n) together with its public key
///
/// The secret is wiped when the key is dropped.
#[derive(Clone)]
pub struct PrivateKey {
    secret: SecretBuffer<SECP256K1_SCALAR_SIZE>,
    public_key: PublicKey,
}

impl PrivateKey {
    fn from_valid_scalar(scalar: &Scalar, ctx: Arc<Context>) -> Self {
        PrivateKey {
            secret: SecretBuffer::new(scalar.to_bytes()),
            public_key: PublicKey::from_valid_scalar(scalar, ctx),
        }
    }

    fn from_validated_bytes(bytes: &[u8], ctx: Arc<Context>) -> Result<Self> {
        let padded = Zeroizing::new(validate_secret(bytes)?);
        let mut scalar = Scalar::from_secret_bytes(&padded).map_err(Error::from)?;
        let key = Self::from_valid_scalar(&scalar, ctx);
        scalar.zeroize();
        Ok(key)
    }

    /// Run `f` on the secret scalar, wiping the temporary afterwards
    fn with_scalar<T>(&self, f: impl FnOnce(&Scalar) -> T) -> T {
        let mut scalar = Scalar::from_bytes_reduced(self.secret.as_array());
        let out = f(&scalar);
        scalar.zeroize();
        out
    }

    fn ctx(&self) -> &Arc<Context> {
        self.public_key.context()
    }

    /// A fresh key from the operating system CSPRNG
    pub fn generate() -> Self {
        Self::generate_with_rng(&mut OsRng)
    }

    /// A fresh key from `rng`, by rejection sampling
    pub fn generate_with_rng<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let mut scalar = generate_secret(rng);
        let key = Self::from_valid_scalar(&scalar, Context::global());
        scalar.zeroize();
        key
    }

    /// Import a big-endian secret of at most 32 bytes. Fails with
    /// `InvalidSecret` unless `0 < s < n`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_validated_bytes(bytes, Context::global())
    }

    /// Import a hex secret; odd-length input gains a leading zero
    pub fn from_hex(hexed: &str) -> Result<Self> {
        let bytes = Zeroizing::new(hex_to_bytes(hexed)?);
        Self::from_bytes(&bytes[..])
    }

    /// Import a 256-bit integer given as four `u64` limbs, most significant
    /// first. Fails with `InvalidSecret` unless `0 < s < n`.
    pub fn from_int(limbs: [u64; 4]) -> Result<Self> {
        let mut bytes = Zeroizing::new([0u8; SECP256K1_SCALAR_SIZE]);
        for (chunk, limb) in bytes.chunks_exact_mut(8).zip(limbs.iter()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        Self::from_bytes(&bytes[..])
    }

    /// Import a secret that fits in a `u128`
    pub fn from_u128(value: u128) -> Result<Self> {
        let bytes = Zeroizing::new(pad_scalar(&value.to_be_bytes())?);
        Self::from_bytes(&bytes[..])
    }

    /// Import a PKCS#8 DER document
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let decoded = decode_pkcs8_private_key(der).map_err(Error::from)?;
        Self::from_bytes(decoded.secret.as_slice())
    }

    /// Import a PKCS#8 PEM document
    pub fn from_pem(pem: &str) -> Result<Self> {
        let der = Zeroizing::new(pem_to_der(pem)?);
        Self::from_der(&der)
    }

    /// Use `ctx` for later operations on this key
    pub fn with_context(mut self, ctx: Arc<Context>) -> Self {
        self.public_key = self.public_key.with_context(ctx);
        self
    }

    /// The 32-byte big-endian secret
    pub fn secret(&self) -> &[u8; SECP256K1_SCALAR_SIZE] {
        self.secret.as_array()
    }

    /// The secret as lowercase hex
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.secret.as_slice()))
    }

    /// The secret as four `u64` limbs, most significant first
    pub fn to_int(&self) -> Zeroizing<[u64; 4]> {
        let mut limbs = Zeroizing::new([0u64; 4]);
        for (limb, chunk) in limbs.iter_mut().zip(self.secret.as_slice().chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(word);
        }
        limbs
    }

    /// PKCS#8 DER with the uncompressed public key embedded
    pub fn to_der(&self) -> Zeroizing<Vec<u8>> {
        let public = self.public_key.to_uncompressed();
        Zeroizing::new(encode_pkcs8_private_key(self.secret.as_array(), Some(&public)))
    }

    /// PKCS#8 PEM
    pub fn to_pem(&self) -> Zeroizing<String> {
        Zeroizing::new(der_to_pem(&self.to_der()))
    }

    /// The matching public key
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The matching x-only public key and its parity
    pub fn public_key_xonly(&self) -> XOnlyPublicKey {
        self.public_key.xonly()
    }

    /// ECDSA-sign `message` with an RFC 6979 nonce; returns DER
    pub fn sign(&self, message: &[u8], hasher: &Hasher) -> Result<Vec<u8>> {
        self.sign_with_nonce(message, hasher, &Rfc6979::new())
    }

    /// ECDSA-sign `message` with a caller-chosen nonce function; returns DER
    pub fn sign_with_nonce<N>(&self, message: &[u8], hasher: &Hasher, nonce: &N) -> Result<Vec<u8>>
    where
        N: NonceFunction + ?Sized,
    {
        let digest = hasher.digest(message)?;
        let signature = self.with_scalar(|d| ecdsa::sign(self.ctx(), d, &digest, nonce))?;
        Ok(signature.to_der())
    }

    /// ECDSA-sign `message`; returns 65-byte `r || s || recid`
    pub fn sign_recoverable(
        &self,
        message: &[u8],
        hasher: &Hasher,
    ) -> Result<[u8; ECDSA_RECOVERABLE_SIGNATURE_SIZE]> {
        self.sign_recoverable_with_nonce(message, hasher, &Rfc6979::new())
    }

    /// Recoverable ECDSA signature with a caller-chosen nonce function
    pub fn sign_recoverable_with_nonce<N>(
        &self,
        message: &[u8],
        hasher: &Hasher,
        nonce: &N,
    ) -> Result<[u8; ECDSA_RECOVERABLE_SIGNATURE_SIZE]>
    where
        N: NonceFunction + ?Sized,
    {
        let digest = hasher.digest(message)?;
        let signature =
            self.with_scalar(|d| ecdsa::sign_recoverable(self.ctx(), d, &digest, nonce))?;
        Ok(signature.to_bytes())
    }

    /// BIP340-sign a 32-byte message
    pub fn sign_schnorr(
        &self,
        message: &[u8],
        aux: &AuxRandomness,
    ) -> Result<[u8; BIP340_SIGNATURE_SIZE]> {
        let signature = self.with_scalar(|d| schnorr::sign(self.ctx(), d, message, aux))?;
        Ok(signature.to_bytes())
    }

    /// Shared secret with the holder of `public_key` (any SEC1 encoding)
    pub fn ecdh(&self, public_key: &[u8]) -> Result<EcdhSecp256k1SharedSecret> {
        ecdh_from_bytes(self.ctx(), self.secret.as_array(), public_key)
    }

    /// (s + t) mod n. Fails with `InvalidTweak` if `t ≥ n` or the sum is zero.
    pub fn tweaked_add(&self, tweak: &[u8]) -> Result<Self> {
        let mut tweak = parse_add_tweak(tweak, "private key tweak add")?;
        let mut sum = self.with_scalar(|d| d.add(&tweak));
        tweak.zeroize();
        if bool::from(sum.is_zero()) {
            return Err(Error::invalid_tweak(
                "private key tweak add",
                "resulting secret is zero",
            ));
        }
        let key = Self::from_valid_scalar(&sum, Arc::clone(self.ctx()));
        sum.zeroize();
        Ok(key)
    }

    /// In-place form of [`tweaked_add`](Self::tweaked_add)
    pub fn tweak_add_in_place(&mut self, tweak: &[u8]) -> Result<()> {
        *self = self.tweaked_add(tweak)?;
        Ok(())
    }

    /// (s · t) mod n. The tweak must itself be a valid secret scalar.
    pub fn tweaked_mul(&self, tweak: &[u8]) -> Result<Self> {
        let mut tweak = parse_mul_tweak(tweak, "private key tweak mul")?;
        let mut product = self.with_scalar(|d| d.mul(&tweak));
        tweak.zeroize();
        let key = Self::from_valid_scalar(&product, Arc::clone(self.ctx()));
        product.zeroize();
        Ok(key)
    }

    /// In-place form of [`tweaked_mul`](Self::tweaked_mul)
    pub fn tweak_mul_in_place(&mut self, tweak: &[u8]) -> Result<()> {
        *self = self.tweaked_mul(tweak)?;
        Ok(())
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.secret.ct_eq(&other.secret).into()
    }
}

impl Eq for PrivateKey {}

impl Hash for PrivateKey {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.secret.as_slice().hash(state);
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("secret", &self.secret)
            .field("public_key", &self.public_key)
            .finish()
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}
