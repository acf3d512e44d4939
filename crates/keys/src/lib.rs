//! secp256k1 keys
//!
//! [`PrivateKey`], [`PublicKey`] and [`XOnlyPublicKey`] tie the signature,
//! key agreement and encoding crates together behind key-centric methods.
//! Every key carries a shared [`Context`](k1crypt_algorithms::Context),
//! the process-wide one unless replaced with `with_context`.

#![forbid(unsafe_code)]

pub mod private;
pub mod public;
pub mod utils;
pub mod xonly;

pub use private::PrivateKey;
pub use public::PublicKey;
pub use utils::{
    der_to_pem, hex_to_bytes, pad_scalar, pem_to_der, validate_secret, verify_signature,
    GROUP_ORDER, KEY_SIZE, MSG_HASH_SIZE,
};
pub use xonly::XOnlyPublicKey;
