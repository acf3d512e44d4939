//! PEM armour for PKCS#8 private keys

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use k1crypt_params::traditional::pkcs8::{PEM_FOOTER, PEM_HEADER, PEM_LINE_WIDTH};

/// Wrap DER bytes in `BEGIN/END PRIVATE KEY` lines, 64 base64 characters per line
pub fn der_to_pem(der: &[u8]) -> String {
    let body = STANDARD.encode(der);
    let mut pem = String::with_capacity(body.len() + body.len() / PEM_LINE_WIDTH + 64);
    pem.push_str(PEM_HEADER);
    pem.push('\n');
    // base64 output is ASCII, so any byte offset is a char boundary
    for start in (0..body.len()).step_by(PEM_LINE_WIDTH) {
        let end = (start + PEM_LINE_WIDTH).min(body.len());
        pem.push_str(&body[start..end]);
        pem.push('\n');
    }
    pem.push_str(PEM_FOOTER);
    pem.push('\n');
    pem
}

/// Strip the PEM armour and decode the base64 body
pub fn pem_to_der(pem: &str) -> Result<Vec<u8>> {
    let trimmed = pem.trim();
    let body = trimmed
        .strip_prefix(PEM_HEADER)
        .and_then(|rest| rest.strip_suffix(PEM_FOOTER))
        .ok_or_else(|| Error::encoding("PEM", "missing PRIVATE KEY header or footer"))?;
    let joined: String = body.split_whitespace().collect();
    STANDARD
        .decode(joined)
        .map_err(|e| Error::encoding("PEM", e.to_string()))
}
