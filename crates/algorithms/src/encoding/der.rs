//! Minimal DER encoder/decoder
//!
//! Only definite, minimal lengths are produced or accepted. The PKCS#8
//! layout handled here is
//!
//! ```text
//! PrivateKeyInfo ::= SEQUENCE {
//!     version             INTEGER (0),
//!     privateKeyAlgorithm SEQUENCE { id-ecPublicKey, secp256k1 },
//!     privateKey          OCTET STRING (ECPrivateKey)
//! }
//! ECPrivateKey ::= SEQUENCE {
//!     version    INTEGER (1),
//!     privateKey OCTET STRING,
//!     publicKey  [1] EXPLICIT BIT STRING OPTIONAL
//! }
//! ```

use crate::error::{Error, Result};
use k1crypt_common::SecretBuffer;
use k1crypt_params::traditional::ecdsa::{
    SECP256K1_SCALAR_SIZE, SECP256K1_UNCOMPRESSED_PUBLIC_KEY_SIZE,
};
use k1crypt_params::traditional::pkcs8::{
    BIT_STRING_TAG, EC_PRIVATE_KEY_VERSION, EC_PUBLIC_KEY_OID, INTEGER_TAG,
    OBJECT_IDENTIFIER_TAG, OCTET_STRING_TAG, PKCS8_VERSION, PUBLIC_KEY_CONTEXT_TAG,
    SECP256K1_OID, SEQUENCE_TAG,
};
use zeroize::Zeroizing;

const CONTEXT: &str = "DER";

/// Append a DER length
pub fn write_length(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
        return;
    }
    let bytes = len.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    out.push(0x80 | (bytes.len() - skip) as u8);
    out.extend_from_slice(&bytes[skip..]);
}

/// Append a complete tag-length-value element
pub fn write_tlv(out: &mut Vec<u8>, tag: u8, content: &[u8]) {
    out.push(tag);
    write_length(out, content.len());
    out.extend_from_slice(content);
}

/// Append an unsigned big-endian integer as a DER INTEGER
pub fn write_unsigned_integer(out: &mut Vec<u8>, be_bytes: &[u8]) {
    let skip = be_bytes.iter().take_while(|&&b| b == 0).count();
    let digits = &be_bytes[skip..];
    let mut content = Vec::with_capacity(digits.len() + 1);
    if digits.first().map_or(true, |&b| b & 0x80 != 0) {
        content.push(0x00);
    }
    content.extend_from_slice(digits);
    write_tlv(out, INTEGER_TAG, &content);
}

/// Sequential reader over DER elements
pub struct DerReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> DerReader<'a> {
    /// Start reading at the beginning of `data`
    pub fn new(data: &'a [u8]) -> Self {
        DerReader { data, pos: 0 }
    }

    /// Whether every byte has been consumed
    pub fn is_empty(&self) -> bool {
        self.pos == self.data.len()
    }

    /// Tag of the next element, if any
    pub fn peek_tag(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn next_byte(&mut self) -> Result<u8> {
        let b = *self
            .data
            .get(self.pos)
            .ok_or_else(|| Error::encoding(CONTEXT, "unexpected end of input"))?;
        self.pos += 1;
        Ok(b)
    }

    fn read_length(&mut self) -> Result<usize> {
        let first = self.next_byte()?;
        if first < 0x80 {
            return Ok(first as usize);
        }
        let count = (first & 0x7F) as usize;
        if count == 0 || count > 4 {
            return Err(Error::encoding(CONTEXT, "unsupported length encoding"));
        }
        let mut len = 0usize;
        for i in 0..count {
            let b = self.next_byte()?;
            if i == 0 && b == 0 {
                return Err(Error::encoding(CONTEXT, "non-minimal length"));
            }
            len = (len << 8) | b as usize;
        }
        if len < 0x80 {
            return Err(Error::encoding(CONTEXT, "non-minimal length"));
        }
        Ok(len)
    }

    /// Read one element with the expected tag and return its contents
    pub fn read_tlv(&mut self, tag: u8) -> Result<&'a [u8]> {
        let found = self.next_byte()?;
        if found != tag {
            return Err(Error::encoding(
                CONTEXT,
                format!("expected tag 0x{:02X}, found 0x{:02X}", tag, found),
            ));
        }
        let len = self.read_length()?;
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| Error::encoding(CONTEXT, "length exceeds input"))?;
        let content = &self.data[self.pos..end];
        self.pos = end;
        Ok(content)
    }

    /// Read a non-negative INTEGER and return its magnitude without padding
    pub fn read_unsigned_integer(&mut self) -> Result<&'a [u8]> {
        let content = self.read_tlv(INTEGER_TAG)?;
        match content {
            [] => Err(Error::encoding(CONTEXT, "empty INTEGER")),
            [b, ..] if b & 0x80 != 0 => Err(Error::encoding(CONTEXT, "negative INTEGER")),
            [0x00, b, ..] if b & 0x80 == 0 => {
                Err(Error::encoding(CONTEXT, "non-minimal INTEGER"))
            }
            [0x00, rest @ ..] if !rest.is_empty() => Ok(rest),
            _ => Ok(content),
        }
    }

    /// Require that all input was consumed
    pub fn finish(&self) -> Result<()> {
        if !self.is_empty() {
            return Err(Error::encoding(CONTEXT, "trailing data"));
        }
        Ok(())
    }
}

/// A private key extracted from a PKCS#8 document
pub struct Pkcs8PrivateKey {
    /// Big-endian secret scalar, left-padded to 32 bytes
    pub secret: SecretBuffer<SECP256K1_SCALAR_SIZE>,
    /// Embedded public key encoding, if present
    pub public_key: Option<Vec<u8>>,
}

/// Encode a secret scalar (and optionally its uncompressed public key) as PKCS#8 DER
pub fn encode_pkcs8_private_key(
    secret: &[u8; SECP256K1_SCALAR_SIZE],
    public_key: Option<&[u8; SECP256K1_UNCOMPRESSED_PUBLIC_KEY_SIZE]>,
) -> Vec<u8> {
    let mut ec_key = Zeroizing::new(Vec::with_capacity(112));
    write_tlv(&mut ec_key, INTEGER_TAG, &[EC_PRIVATE_KEY_VERSION]);
    write_tlv(&mut ec_key, OCTET_STRING_TAG, secret);
    if let Some(pk) = public_key {
        let mut bits = Vec::with_capacity(pk.len() + 1);
        bits.push(0x00); // no unused bits
        bits.extend_from_slice(pk);
        let mut bit_string = Vec::with_capacity(bits.len() + 2);
        write_tlv(&mut bit_string, BIT_STRING_TAG, &bits);
        write_tlv(&mut ec_key, PUBLIC_KEY_CONTEXT_TAG, &bit_string);
    }
    let mut ec_key_seq = Zeroizing::new(Vec::with_capacity(ec_key.len() + 2));
    write_tlv(&mut ec_key_seq, SEQUENCE_TAG, &ec_key);

    let mut algorithm = Vec::with_capacity(16);
    write_tlv(&mut algorithm, OBJECT_IDENTIFIER_TAG, &EC_PUBLIC_KEY_OID);
    write_tlv(&mut algorithm, OBJECT_IDENTIFIER_TAG, &SECP256K1_OID);

    let mut info = Zeroizing::new(Vec::with_capacity(140));
    write_tlv(&mut info, INTEGER_TAG, &[PKCS8_VERSION]);
    write_tlv(&mut info, SEQUENCE_TAG, &algorithm);
    write_tlv(&mut info, OCTET_STRING_TAG, &ec_key_seq);

    let mut out = Vec::with_capacity(info.len() + 4);
    write_tlv(&mut out, SEQUENCE_TAG, &info);
    out
}

fn expect_small_integer(reader: &mut DerReader<'_>, value: u8, what: &'static str) -> Result<()> {
    let found = reader.read_unsigned_integer()?;
    if found != [value] {
        return Err(Error::encoding(CONTEXT, what));
    }
    Ok(())
}

/// Walk a PKCS#8 PrivateKeyInfo and extract the secp256k1 private key
pub fn decode_pkcs8_private_key(der: &[u8]) -> Result<Pkcs8PrivateKey> {
    let mut outer = DerReader::new(der);
    let info = outer.read_tlv(SEQUENCE_TAG)?;
    outer.finish()?;

    let mut info = DerReader::new(info);
    expect_small_integer(&mut info, PKCS8_VERSION, "unsupported PKCS#8 version")?;

    let mut algorithm = DerReader::new(info.read_tlv(SEQUENCE_TAG)?);
    if algorithm.read_tlv(OBJECT_IDENTIFIER_TAG)? != EC_PUBLIC_KEY_OID {
        return Err(Error::encoding(CONTEXT, "algorithm is not id-ecPublicKey"));
    }
    if algorithm.read_tlv(OBJECT_IDENTIFIER_TAG)? != SECP256K1_OID {
        return Err(Error::encoding(CONTEXT, "curve is not secp256k1"));
    }
    algorithm.finish()?;

    // Optional attributes may follow the private key and are ignored
    let wrapped = info.read_tlv(OCTET_STRING_TAG)?;
    let mut ec_outer = DerReader::new(wrapped);
    let mut ec_key = DerReader::new(ec_outer.read_tlv(SEQUENCE_TAG)?);
    ec_outer.finish()?;

    expect_small_integer(&mut ec_key, EC_PRIVATE_KEY_VERSION, "unsupported ECPrivateKey version")?;
    let secret = ec_key.read_tlv(OCTET_STRING_TAG)?;
    if secret.is_empty() || secret.len() > SECP256K1_SCALAR_SIZE {
        return Err(Error::encoding(CONTEXT, "private key has the wrong length"));
    }
    let mut padded = Zeroizing::new([0u8; SECP256K1_SCALAR_SIZE]);
    padded[SECP256K1_SCALAR_SIZE - secret.len()..].copy_from_slice(secret);

    let mut public_key = None;
    while let Some(tag) = ec_key.peek_tag() {
        let field = ec_key.read_tlv(tag)?;
        if tag == PUBLIC_KEY_CONTEXT_TAG {
            let mut bit_reader = DerReader::new(field);
            let bits = bit_reader.read_tlv(BIT_STRING_TAG)?;
            bit_reader.finish()?;
            match bits {
                [0x00, key @ ..] if !key.is_empty() => public_key = Some(key.to_vec()),
                _ => return Err(Error::encoding(CONTEXT, "malformed public key BIT STRING")),
            }
        }
    }

    Ok(Pkcs8PrivateKey {
        secret: SecretBuffer::new(*padded),
        public_key,
    })
}
