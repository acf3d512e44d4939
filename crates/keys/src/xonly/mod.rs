//! BIP340 x-only public keys

use std::fmt;
use std::hash::{Hash, Hasher as StdHasher};
use std::sync::Arc;

use k1crypt_algorithms::{tagged_hash, Context, Point, Scalar};
use k1crypt_api::{Error, Result};
use k1crypt_params::traditional::schnorr::{BIP340_PUBLIC_KEY_SIZE, BIP341_TAPTWEAK_TAG};
use k1crypt_sign::schnorr::{self, SchnorrSignature};
use zeroize::{Zeroize, Zeroizing};

use crate::public::parse_add_tweak;
use crate::utils::validate_secret;

/// The x-coordinate of a public point plus the parity of its y-coordinate
///
/// BIP340 treats the key as the even-y point with this x-coordinate; the
/// parity bit records whether the point it was derived from had odd y.
/// Keys compare equal when their x-coordinates are equal.
#[derive(Clone)]
pub struct XOnlyPublicKey {
    x: [u8; BIP340_PUBLIC_KEY_SIZE],
    parity: bool,
    ctx: Arc<Context>,
}

impl XOnlyPublicKey {
    pub(crate) fn from_full_point(point: Point, ctx: Arc<Context>) -> Self {
        XOnlyPublicKey {
            x: point.x_coordinate_bytes(),
            parity: point.has_odd_y(),
            ctx,
        }
    }

    /// Parse 32 bytes; the x-coordinate must be on the curve. Parity is even.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let x: [u8; BIP340_PUBLIC_KEY_SIZE] = bytes.try_into().map_err(|_| {
            Error::invalid_public_key("x-only public key", "x-only keys are 32 bytes")
        })?;
        Point::lift_x(&x).map_err(|e| Error::from(e).with_context("x-only public key"))?;
        Ok(XOnlyPublicKey {
            x,
            parity: false,
            ctx: Context::global(),
        })
    }

    /// Derive the x-only key of s·G
    pub fn from_secret(secret: &[u8]) -> Result<Self> {
        let padded = Zeroizing::new(validate_secret(secret)?);
        let mut scalar = Scalar::from_secret_bytes(&padded).map_err(Error::from)?;
        let ctx = Context::global();
        let point = ctx.mul_generator(&scalar);
        scalar.zeroize();
        Ok(Self::from_full_point(point, ctx))
    }

    /// Use `ctx` for later operations on this key
    pub fn with_context(mut self, ctx: Arc<Context>) -> Self {
        self.ctx = ctx;
        self
    }

    /// The 32-byte x-coordinate
    pub fn format(&self) -> [u8; BIP340_PUBLIC_KEY_SIZE] {
        self.x
    }

    /// Whether the originating point had an odd y-coordinate
    pub fn parity(&self) -> bool {
        self.parity
    }

    /// Verify a 64-byte BIP340 signature over a message of any length.
    /// A signature of the wrong length fails with `InvalidLength`.
    pub fn verify(&self, signature: &[u8], message: &[u8]) -> Result<bool> {
        let signature = SchnorrSignature::from_bytes(signature)?;
        Ok(schnorr::verify(&self.ctx, &signature, message, &self.x))
    }

    /// lift_x(P) + t·G, re-derived as an x-only key with its new parity
    pub fn tweaked_add(&self, tweak: &[u8]) -> Result<Self> {
        let tweak = parse_add_tweak(tweak, "x-only tweak add")?;
        let even = Point::lift_x(&self.x).map_err(Error::from)?;
        let point = self.ctx.mul_add(&tweak, &Scalar::ONE, &even);
        if point.is_identity() {
            return Err(Error::invalid_tweak(
                "x-only tweak add",
                "result is the point at infinity",
            ));
        }
        Ok(Self::from_full_point(point, Arc::clone(&self.ctx)))
    }

    /// In-place form of [`tweaked_add`](Self::tweaked_add); updates the parity
    pub fn tweak_add(&mut self, tweak: &[u8]) -> Result<()> {
        *self = self.tweaked_add(tweak)?;
        Ok(())
    }

    /// BIP341 output key: tweak by `H_TapTweak(x || merkle_root)`, with an
    /// empty script tree when `merkle_root` is `None`
    pub fn tap_tweak(&self, merkle_root: Option<&[u8; 32]>) -> Result<Self> {
        let root: &[u8] = match merkle_root {
            Some(root) => root,
            None => &[],
        };
        let tweak = tagged_hash(BIP341_TAPTWEAK_TAG, &[&self.x[..], root]);
        self.tweaked_add(&tweak)
    }
}

impl PartialEq for XOnlyPublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
    }
}

impl Eq for XOnlyPublicKey {}

impl Hash for XOnlyPublicKey {
    fn hash<H: StdHasher>(&self, state: &mut H) {
        self.x.hash(state);
    }
}

impl fmt::Debug for XOnlyPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XOnlyPublicKey({}, odd: {})", hex::encode(self.x), self.parity)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for XOnlyPublicKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.x)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for XOnlyPublicKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let bytes: Vec<u8> = serde::Deserialize::deserialize(deserializer)?;
        XOnlyPublicKey::from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}
