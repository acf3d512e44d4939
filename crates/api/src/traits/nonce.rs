//! Pluggable ECDSA nonce generation

/// A deterministic nonce source for ECDSA signing
///
/// `generate` is called with increasing `attempt` values until it yields a
/// nonce in `(0, n)` that produces a valid signature. Returning `None`
/// aborts signing.
pub trait NonceFunction {
    /// Produce the candidate nonce for the given attempt
    ///
    /// `msg_hash` is the 32-byte message digest, `secret` the big-endian
    /// secret scalar and `algorithm` an optional 16-byte algorithm tag that
    /// separates nonce streams of different schemes.
    fn generate(
        &self,
        msg_hash: &[u8; 32],
        secret: &[u8; 32],
        algorithm: Option<&[u8; 16]>,
        attempt: u32,
    ) -> Option<[u8; 32]>;
}

impl<F> NonceFunction for F
where
    F: Fn(&[u8; 32], &[u8; 32], Option<&[u8; 16]>, u32) -> Option<[u8; 32]>,
{
    fn generate(
        &self,
        msg_hash: &[u8; 32],
        secret: &[u8; 32],
        algorithm: Option<&[u8; 16]>,
        attempt: u32,
    ) -> Option<[u8; 32]> {
        self(msg_hash, secret, algorithm, attempt)
    }
}
