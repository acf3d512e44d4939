//! ECDSA signature encodings: compact, DER and recoverable

use k1crypt_algorithms::encoding::der::{write_tlv, write_unsigned_integer, DerReader};
use k1crypt_algorithms::Scalar;
use k1crypt_api::error::validation;
use k1crypt_api::{Error, Result};
use k1crypt_params::traditional::ecdsa::{
    ECDSA_COMPACT_SIGNATURE_SIZE, ECDSA_MAX_DER_SIGNATURE_SIZE, ECDSA_RECOVERABLE_SIGNATURE_SIZE,
    SECP256K1_SCALAR_SIZE,
};
use k1crypt_params::traditional::pkcs8::SEQUENCE_TAG;

/// An ECDSA signature `(r, s)`
///
/// The components are kept as the raw 32-byte big-endian values they were
/// parsed from. Values outside `[1, n-1]` can be represented but never
/// verify.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EcdsaSignature {
    r: [u8; SECP256K1_SCALAR_SIZE],
    s: [u8; SECP256K1_SCALAR_SIZE],
}

impl EcdsaSignature {
    /// Assemble a signature from its big-endian components
    pub fn from_components(r: [u8; SECP256K1_SCALAR_SIZE], s: [u8; SECP256K1_SCALAR_SIZE]) -> Self {
        EcdsaSignature { r, s }
    }

    pub(crate) fn from_scalars(r: &Scalar, s: &Scalar) -> Self {
        EcdsaSignature {
            r: r.to_bytes(),
            s: s.to_bytes(),
        }
    }

    /// The `r` component
    pub fn r(&self) -> &[u8; SECP256K1_SCALAR_SIZE] {
        &self.r
    }

    /// The `s` component
    pub fn s(&self) -> &[u8; SECP256K1_SCALAR_SIZE] {
        &self.s
    }

    /// Both components as scalars, if each lies in `[1, n-1]`
    pub(crate) fn scalars(&self) -> Option<(Scalar, Scalar)> {
        let r = Scalar::from_bytes(&self.r).ok()?;
        let s = Scalar::from_bytes(&self.s).ok()?;
        if bool::from(r.is_zero() | s.is_zero()) {
            return None;
        }
        Some((r, s))
    }

    /// Parse the 64-byte `r || s` form. Any 64 bytes are accepted.
    pub fn from_compact(bytes: &[u8]) -> Result<Self> {
        validation::encoded_length(
            "compact ECDSA signature",
            bytes.len(),
            ECDSA_COMPACT_SIGNATURE_SIZE,
        )?;
        let mut r = [0u8; SECP256K1_SCALAR_SIZE];
        let mut s = [0u8; SECP256K1_SCALAR_SIZE];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        Ok(EcdsaSignature { r, s })
    }

    /// Serialize as 64-byte `r || s`
    pub fn to_compact(&self) -> [u8; ECDSA_COMPACT_SIGNATURE_SIZE] {
        let mut out = [0u8; ECDSA_COMPACT_SIGNATURE_SIZE];
        out[..32].copy_from_slice(&self.r);
        out[32..].copy_from_slice(&self.s);
        out
    }

    /// Parse a strict DER `SEQUENCE { r INTEGER, s INTEGER }`
    pub fn from_der(der: &[u8]) -> Result<Self> {
        validation::max_length("DER ECDSA signature", der.len(), ECDSA_MAX_DER_SIGNATURE_SIZE)
            .map_err(|_| Error::decode("DER ECDSA signature", "signature is longer than 72 bytes"))?;
        let parse = || -> k1crypt_algorithms::Result<Self> {
            let mut outer = DerReader::new(der);
            let mut seq = DerReader::new(outer.read_tlv(SEQUENCE_TAG)?);
            outer.finish()?;
            let r = seq.read_unsigned_integer()?;
            let s = seq.read_unsigned_integer()?;
            seq.finish()?;
            Ok(EcdsaSignature {
                r: pad_component(r)?,
                s: pad_component(s)?,
            })
        };
        parse().map_err(|e| Error::from(e).with_context("DER ECDSA signature"))
    }

    /// Serialize as DER (at most 72 bytes)
    pub fn to_der(&self) -> Vec<u8> {
        let mut body = Vec::with_capacity(ECDSA_MAX_DER_SIGNATURE_SIZE);
        write_unsigned_integer(&mut body, &self.r);
        write_unsigned_integer(&mut body, &self.s);
        let mut out = Vec::with_capacity(body.len() + 2);
        write_tlv(&mut out, SEQUENCE_TAG, &body);
        out
    }

    /// Whether `s` is already at most n/2
    pub fn is_low_s(&self) -> bool {
        !bool::from(Scalar::from_bytes_reduced(&self.s).is_high())
    }

    /// Low-S normalization: replace `s` by `n - s` when `s > n/2`.
    ///
    /// Returns whether the signature changed, together with the normalized
    /// signature.
    pub fn normalize(&self) -> (bool, EcdsaSignature) {
        let s = Scalar::from_bytes_reduced(&self.s);
        if !bool::from(s.is_high()) {
            return (false, *self);
        }
        (
            true,
            EcdsaSignature {
                r: self.r,
                s: s.negate().to_bytes(),
            },
        )
    }
}

fn pad_component(bytes: &[u8]) -> k1crypt_algorithms::Result<[u8; SECP256K1_SCALAR_SIZE]> {
    if bytes.len() > SECP256K1_SCALAR_SIZE {
        return Err(k1crypt_algorithms::Error::encoding(
            "DER",
            "INTEGER exceeds 32 bytes",
        ));
    }
    let mut out = [0u8; SECP256K1_SCALAR_SIZE];
    out[SECP256K1_SCALAR_SIZE - bytes.len()..].copy_from_slice(bytes);
    Ok(out)
}

/// An ECDSA signature with its recovery id
///
/// `recid` bit 0 is the parity of the nonce point's y-coordinate and bit 1
/// records that its x-coordinate was at least n.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecoverableSignature {
    signature: EcdsaSignature,
    recid: u8,
}

impl RecoverableSignature {
    pub(crate) fn new(signature: EcdsaSignature, recid: u8) -> Self {
        RecoverableSignature { signature, recid }
    }

    /// Parse the 65-byte `r || s || recid` form.
    ///
    /// Fails if `recid > 3` or either component is not below n.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validation::encoded_length(
            "recoverable ECDSA signature",
            bytes.len(),
            ECDSA_RECOVERABLE_SIGNATURE_SIZE,
        )?;
        let recid = bytes[ECDSA_COMPACT_SIGNATURE_SIZE];
        if recid > 3 {
            return Err(Error::decode(
                "recoverable ECDSA signature",
                "recovery id must be 0..=3",
            ));
        }
        let signature = EcdsaSignature::from_compact(&bytes[..ECDSA_COMPACT_SIGNATURE_SIZE])?;
        if Scalar::from_bytes(&signature.r).is_err() || Scalar::from_bytes(&signature.s).is_err() {
            return Err(Error::decode(
                "recoverable ECDSA signature",
                "r or s is not below the group order",
            ));
        }
        Ok(RecoverableSignature { signature, recid })
    }

    /// Serialize as 65-byte `r || s || recid`
    pub fn to_bytes(&self) -> [u8; ECDSA_RECOVERABLE_SIGNATURE_SIZE] {
        let mut out = [0u8; ECDSA_RECOVERABLE_SIGNATURE_SIZE];
        out[..ECDSA_COMPACT_SIGNATURE_SIZE].copy_from_slice(&self.signature.to_compact());
        out[ECDSA_COMPACT_SIGNATURE_SIZE] = self.recid;
        out
    }

    /// The recovery id, 0..=3
    pub fn recid(&self) -> u8 {
        self.recid
    }

    /// Drop the recovery id
    pub fn to_standard(&self) -> EcdsaSignature {
        self.signature
    }
}

impl From<RecoverableSignature> for EcdsaSignature {
    fn from(sig: RecoverableSignature) -> Self {
        sig.signature
    }
}
