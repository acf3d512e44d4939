//! Secret data types with guaranteed zeroization
//!
//! Secret keys and ECDH shared secrets are held in a [`SecretBuffer`], which
//! wipes its contents on drop, never prints them, and compares in constant
//! time.

use core::fmt;
use k1crypt_internal::ct_eq;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed-size secret buffer that guarantees zeroization
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    /// Create a new secret buffer with the given data
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed secret buffer
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Copy a slice into a new buffer, `None` if the length differs from `N`
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != N {
            return None;
        }
        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Some(Self { data })
    }

    /// Get the length of the buffer
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the buffer is empty (always false for non-zero N)
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Get a reference to the inner data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Borrow the inner array
    pub fn as_array(&self) -> &[u8; N] {
        &self.data
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> ConstantTimeEq for SecretBuffer<N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        Choice::from(ct_eq(&self.data, &other.data) as u8)
    }
}

impl<const N: usize> PartialEq for SecretBuffer<N> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(ConstantTimeEq::ct_eq(self, other))
    }
}

impl<const N: usize> Eq for SecretBuffer<N> {}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_contents() {
        let buf = SecretBuffer::new([0xABu8; 32]);
        let shown = format!("{:?}", buf);
        assert!(!shown.to_lowercase().contains("ab"));
        assert!(shown.contains("REDACTED"));
    }

    #[test]
    fn from_slice_checks_length() {
        assert!(SecretBuffer::<32>::from_slice(&[1u8; 31]).is_none());
        let buf = SecretBuffer::<4>::from_slice(&hex::decode("01020304").unwrap()).unwrap();
        assert_eq!(buf.as_array(), &[1, 2, 3, 4]);
    }

    #[test]
    fn equality_is_by_content() {
        let a = SecretBuffer::new([7u8; 16]);
        let mut b = a.clone();
        assert_eq!(a, b);
        b.zeroize();
        assert_ne!(a, b);
        assert_eq!(b, SecretBuffer::zeroed());
    }
}
