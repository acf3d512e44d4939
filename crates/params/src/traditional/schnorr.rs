//! Constants for BIP340 Schnorr signatures

/// Size of an x-only public key in bytes
pub const BIP340_PUBLIC_KEY_SIZE: usize = 32;

/// Size of a Schnorr signature: R.x || s
pub const BIP340_SIGNATURE_SIZE: usize = 64;

/// Size of the message accepted by the signer
pub const BIP340_SIGN_MESSAGE_SIZE: usize = 32;

/// Size of the auxiliary randomness mixed into the nonce
pub const BIP340_AUX_RAND_SIZE: usize = 32;

/// Tag for hashing auxiliary randomness
pub const BIP340_AUX_TAG: &[u8] = b"BIP0340/aux";

/// Tag for nonce derivation
pub const BIP340_NONCE_TAG: &[u8] = b"BIP0340/nonce";

/// Tag for the challenge hash
pub const BIP340_CHALLENGE_TAG: &[u8] = b"BIP0340/challenge";

/// Tag for BIP341 taproot key tweaks
pub const BIP341_TAPTWEAK_TAG: &[u8] = b"TapTweak";
