//! ASN.1 DER primitives, PKCS#8 private-key wrapping and PEM armour

pub mod der;
pub mod pem;

pub use der::{decode_pkcs8_private_key, encode_pkcs8_private_key, DerReader, Pkcs8PrivateKey};
pub use pem::{der_to_pem, pem_to_der};
