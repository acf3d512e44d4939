//! secp256k1 public keys

use std::fmt;
use std::hash::{Hash, Hasher as StdHasher};
use std::sync::Arc;

use k1crypt_algorithms::{sum_points, Context, Point, Scalar};
use k1crypt_api::{Error, Result};
use k1crypt_params::traditional::ecdsa::{
    SECP256K1_COMPRESSED_PUBLIC_KEY_SIZE, SECP256K1_FIELD_ELEMENT_SIZE,
    SECP256K1_UNCOMPRESSED_PUBLIC_KEY_SIZE,
};
use k1crypt_sign::{ecdsa, EcdsaSignature, Hasher, RecoverableSignature};
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::utils::{pad_scalar, validate_secret};
use crate::XOnlyPublicKey;

/// A point on secp256k1 other than the identity
///
/// Keys compare equal when their uncompressed encodings are equal,
/// whichever [`Context`] they carry.
#[derive(Clone)]
pub struct PublicKey {
    point: Point,
    ctx: Arc<Context>,
}

impl PublicKey {
    /// s·G for a scalar already known to lie in (0, n)
    pub(crate) fn from_valid_scalar(secret: &Scalar, ctx: Arc<Context>) -> Self {
        let point = ctx.mul_generator(secret);
        PublicKey { point, ctx }
    }

    /// Parse a compressed (33-byte), uncompressed or hybrid (65-byte) key
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let point = Point::deserialize(bytes)
            .map_err(|e| Error::from(e).with_context("public key"))?;
        Ok(PublicKey {
            point,
            ctx: Context::global(),
        })
    }

    /// Derive s·G, failing with `InvalidSecret` unless `0 < s < n`
    pub fn from_secret(secret: &[u8]) -> Result<Self> {
        let padded = Zeroizing::new(validate_secret(secret)?);
        let mut scalar = Scalar::from_secret_bytes(&padded).map_err(Error::from)?;
        let key = Self::from_valid_scalar(&scalar, Context::global());
        scalar.zeroize();
        Ok(key)
    }

    /// Build a key from affine coordinates
    pub fn from_point(
        x: &[u8; SECP256K1_FIELD_ELEMENT_SIZE],
        y: &[u8; SECP256K1_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let point = Point::new_uncompressed(x, y)
            .map_err(|e| Error::from(e).with_context("public key"))?;
        Ok(PublicKey {
            point,
            ctx: Context::global(),
        })
    }

    /// Recover the signer's key from a 65-byte recoverable signature
    pub fn from_signature_and_message(
        signature: &[u8],
        message: &[u8],
        hasher: &Hasher,
    ) -> Result<Self> {
        let ctx = Context::global();
        let signature = RecoverableSignature::from_bytes(signature)?;
        let digest = hasher.digest(message)?;
        let point = ecdsa::recover(&ctx, &signature, &digest)?;
        Ok(PublicKey { point, ctx })
    }

    /// Sum of the given keys. Fails with `InvalidCombination` when the list
    /// is empty or the sum is the identity.
    pub fn combine_keys(keys: &[PublicKey]) -> Result<Self> {
        let ctx = keys
            .first()
            .map(|k| Arc::clone(&k.ctx))
            .ok_or_else(|| Error::InvalidCombination {
                context: "combine public keys",
            })?;
        let points: Vec<Point> = keys.iter().map(|k| k.point).collect();
        match sum_points(&points) {
            Some(point) => Ok(PublicKey { point, ctx }),
            None => {
                debug!(count = keys.len(), "public keys sum to the identity");
                Err(Error::InvalidCombination {
                    context: "combine public keys",
                })
            }
        }
    }

    /// Use `ctx` for later operations on this key
    pub fn with_context(mut self, ctx: Arc<Context>) -> Self {
        self.ctx = ctx;
        self
    }

    /// The context this key computes with
    pub fn context(&self) -> &Arc<Context> {
        &self.ctx
    }

    /// Serialize as compressed (33 bytes) or uncompressed (65 bytes)
    pub fn format(&self, compressed: bool) -> Vec<u8> {
        if compressed {
            self.to_compressed().to_vec()
        } else {
            self.to_uncompressed().to_vec()
        }
    }

    /// 33-byte compressed encoding
    pub fn to_compressed(&self) -> [u8; SECP256K1_COMPRESSED_PUBLIC_KEY_SIZE] {
        self.point.serialize_compressed()
    }

    /// 65-byte uncompressed encoding
    pub fn to_uncompressed(&self) -> [u8; SECP256K1_UNCOMPRESSED_PUBLIC_KEY_SIZE] {
        self.point.serialize_uncompressed()
    }

    /// Affine coordinates `(x, y)`, big-endian
    pub fn point(&self) -> ([u8; 32], [u8; 32]) {
        (
            self.point.x_coordinate_bytes(),
            self.point.y_coordinate_bytes(),
        )
    }

    /// The underlying curve point
    pub fn as_point(&self) -> &Point {
        &self.point
    }

    /// The x-only form of this key together with its parity
    pub fn xonly(&self) -> XOnlyPublicKey {
        XOnlyPublicKey::from_full_point(self.point, Arc::clone(&self.ctx))
    }

    /// Verify a DER ECDSA signature over `message`
    pub fn verify(&self, signature: &[u8], message: &[u8], hasher: &Hasher) -> Result<bool> {
        let digest = hasher.digest(message)?;
        let signature = EcdsaSignature::from_der(signature)?;
        Ok(ecdsa::verify(&self.ctx, &signature, &digest, &self.point))
    }

    /// P + t·G. Fails with `InvalidTweak` if `t ≥ n` or the result is the
    /// identity.
    pub fn tweaked_add(&self, tweak: &[u8]) -> Result<Self> {
        let tweak = parse_add_tweak(tweak, "public key tweak add")?;
        let point = self.ctx.mul_add(&tweak, &Scalar::ONE, &self.point);
        if point.is_identity() {
            return Err(Error::invalid_tweak(
                "public key tweak add",
                "result is the point at infinity",
            ));
        }
        Ok(PublicKey {
            point,
            ctx: Arc::clone(&self.ctx),
        })
    }

    /// In-place form of [`tweaked_add`](Self::tweaked_add)
    pub fn tweak_add_in_place(&mut self, tweak: &[u8]) -> Result<()> {
        *self = self.tweaked_add(tweak)?;
        Ok(())
    }

    /// t·P. The tweak must itself be a valid secret scalar.
    pub fn tweaked_mul(&self, tweak: &[u8]) -> Result<Self> {
        let tweak = parse_mul_tweak(tweak, "public key tweak mul")?;
        let point = self.ctx.mul(&tweak, &self.point);
        Ok(PublicKey {
            point,
            ctx: Arc::clone(&self.ctx),
        })
    }

    /// In-place form of [`tweaked_mul`](Self::tweaked_mul)
    pub fn tweak_mul_in_place(&mut self, tweak: &[u8]) -> Result<()> {
        *self = self.tweaked_mul(tweak)?;
        Ok(())
    }

    /// This key plus every key in `others`
    pub fn combine(&self, others: &[PublicKey]) -> Result<Self> {
        let mut keys = Vec::with_capacity(others.len() + 1);
        keys.push(self.clone());
        keys.extend_from_slice(others);
        Self::combine_keys(&keys)
    }

    /// In-place form of [`combine`](Self::combine)
    pub fn combine_in_place(&mut self, others: &[PublicKey]) -> Result<()> {
        *self = self.combine(others)?;
        Ok(())
    }
}

/// Additive tweaks are zero-padded and must be below n; zero is allowed
pub(crate) fn parse_add_tweak(tweak: &[u8], context: &'static str) -> Result<Scalar> {
    let padded =
        pad_scalar(tweak).map_err(|_| Error::invalid_tweak(context, "tweak longer than 32 bytes"))?;
    Scalar::from_bytes(&padded)
        .map_err(|_| Error::invalid_tweak(context, "tweak is not below the group order"))
}

/// Multiplicative tweaks follow secret-key rules: `0 < t < n`
pub(crate) fn parse_mul_tweak(tweak: &[u8], context: &'static str) -> Result<Scalar> {
    let padded = validate_secret(tweak)
        .map_err(|_| Error::invalid_tweak(context, "tweak must be in (0, n)"))?;
    Scalar::from_secret_bytes(&padded)
        .map_err(|_| Error::invalid_tweak(context, "tweak must be in (0, n)"))
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_uncompressed() == other.to_uncompressed()
    }
}

impl Eq for PublicKey {}

impl Hash for PublicKey {
    fn hash<H: StdHasher>(&self, state: &mut H) {
        self.to_uncompressed().hash(state);
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.to_compressed()))
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PublicKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_compressed())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PublicKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let bytes: Vec<u8> = serde::Deserialize::deserialize(deserializer)?;
        PublicKey::from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}
