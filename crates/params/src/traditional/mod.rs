//! Constants for the secp256k1 family of schemes

pub mod ecdh;
pub mod ecdsa;
pub mod pkcs8;
pub mod schnorr;
