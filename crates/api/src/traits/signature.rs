//! Digital signature traits for k1crypt
//!
//! This module defines the trait that the secp256k1 signature schemes
//! implement. Secret keys stay opaque: the trait never asks for mutable
//! access to secret key bytes.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for digital signature algorithms
///
/// Implemented by both ECDSA and BIP340 Schnorr over secp256k1. ECDSA
/// hashes the message with SHA-256 before signing; Schnorr signs 32-byte
/// messages as given.
///
/// # Verification result
///
/// `verify` distinguishes malformed input (an `Err`) from a well-formed
/// signature that does not match (`Ok(false)`).
pub trait Signature {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type (typically a tuple of public and secret keys)
    type KeyPair;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign a message with the given secret key
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData>;

    /// Verify a signature against a message and public key
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<bool>;
}
