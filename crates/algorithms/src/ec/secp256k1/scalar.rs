//! secp256k1 scalar arithmetic operations

use crate::ec::secp256k1::constants::SECP256K1_SCALAR_SIZE;
use crate::ec::secp256k1::field::{adc, mul_wide, sbb};
use crate::error::{Error, Result};
use k1crypt_internal::endian::{be_bytes_to_limbs, limbs_to_be_bytes};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

const NLIMBS: usize = 4;

/// secp256k1 scalar: an integer modulo the group order n
///
/// Stored as 4 little-endian 64-bit limbs, always fully reduced. The type is
/// `Copy` so it can take part in constant-time selection; holders of secret
/// scalars are responsible for zeroizing their copies.
#[derive(Clone, Copy, Default, Zeroize)]
pub struct Scalar(pub(crate) [u64; NLIMBS]);

impl Scalar {
    /// n = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141
    pub(crate) const ORDER: [u64; NLIMBS] = [
        0xBFD2_5E8C_D036_4141,
        0xBAAE_DCE6_AF48_A03B,
        0xFFFF_FFFF_FFFF_FFFE,
        0xFFFF_FFFF_FFFF_FFFF,
    ];

    /// 2²⁵⁶ − n
    const NC: [u64; NLIMBS] = [0x402D_A173_2FC9_BEBF, 0x4551_2319_50B7_5FC4, 0x1, 0x0];

    /// n − 2, the Fermat inversion exponent
    const ORDER_MINUS_2: [u64; NLIMBS] = [
        0xBFD2_5E8C_D036_413F,
        0xBAAE_DCE6_AF48_A03B,
        0xFFFF_FFFF_FFFF_FFFE,
        0xFFFF_FFFF_FFFF_FFFF,
    ];

    /// ⌊n / 2⌋, the largest low-S value
    const HALF_ORDER: [u64; NLIMBS] = [
        0xDFE9_2F46_681B_20A0,
        0x5D57_6E73_57A4_501D,
        0xFFFF_FFFF_FFFF_FFFF,
        0x7FFF_FFFF_FFFF_FFFF,
    ];

    /// The scalar 0
    pub const ZERO: Self = Scalar([0; NLIMBS]);

    /// The scalar 1
    pub const ONE: Self = Scalar([1, 0, 0, 0]);

    /// Build a scalar from a small literal
    pub const fn from_u64(n: u64) -> Self {
        Scalar([n, 0, 0, 0])
    }

    /// Parse a big-endian scalar, rejecting values ≥ n. Zero is accepted.
    pub fn from_bytes(bytes: &[u8; SECP256K1_SCALAR_SIZE]) -> Result<Self> {
        let (s, overflow) = Self::from_bytes_with_overflow(bytes);
        if bool::from(overflow) {
            return Err(Error::param("secp256k1 Scalar", "Value ≥ group order"));
        }
        Ok(s)
    }

    /// Parse a big-endian secret scalar, which must lie in (0, n)
    pub fn from_secret_bytes(bytes: &[u8; SECP256K1_SCALAR_SIZE]) -> Result<Self> {
        let (s, overflow) = Self::from_bytes_with_overflow(bytes);
        if bool::from(overflow | s.is_zero()) {
            return Err(Error::InvalidScalar {
                context: "secp256k1 secret scalar",
            });
        }
        Ok(s)
    }

    /// Interpret 32 big-endian bytes as an integer and reduce it modulo n
    pub fn from_bytes_reduced(bytes: &[u8; SECP256K1_SCALAR_SIZE]) -> Self {
        Self::from_bytes_with_overflow(bytes).0
    }

    /// Reduce modulo n, also reporting whether the input was ≥ n
    pub fn from_bytes_with_overflow(bytes: &[u8; SECP256K1_SCALAR_SIZE]) -> (Self, Choice) {
        let limbs = be_bytes_to_limbs(bytes);
        // limbs + NC carries out exactly when limbs ≥ n; 2²⁵⁶ < 2n so once is enough
        let mut reduced = [0u64; NLIMBS];
        let mut carry = 0u64;
        for i in 0..NLIMBS {
            let (s, c) = adc(limbs[i], Self::NC[i], carry);
            reduced[i] = s;
            carry = c;
        }
        let overflow = Choice::from(carry as u8);
        (
            Self::conditional_select(&Scalar(limbs), &Scalar(reduced), overflow),
            overflow,
        )
    }

    /// Serialize this scalar to 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; SECP256K1_SCALAR_SIZE] {
        limbs_to_be_bytes(&self.0)
    }

    /// Check if this scalar is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// True when the scalar is greater than ⌊n / 2⌋
    pub fn is_high(&self) -> Choice {
        let mut borrow = 0u64;
        for i in 0..NLIMBS {
            let (_, b) = sbb(Self::HALF_ORDER[i], self.0[i], borrow);
            borrow = b;
        }
        Choice::from(borrow as u8)
    }

    /// Least-significant bit
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.0[0] & 1) as u8)
    }

    /// Modular addition: (self + other) mod n
    pub fn add(&self, other: &Self) -> Self {
        let mut sum = [0u64; NLIMBS];
        let mut carry = 0u64;
        for i in 0..NLIMBS {
            let (s, c) = adc(self.0[i], other.0[i], carry);
            sum[i] = s;
            carry = c;
        }

        let mut reduced = [0u64; NLIMBS];
        let mut carry2 = 0u64;
        for i in 0..NLIMBS {
            let (s, c) = adc(sum[i], Self::NC[i], carry2);
            reduced[i] = s;
            carry2 = c;
        }

        Self::conditional_select(
            &Scalar(sum),
            &Scalar(reduced),
            Choice::from((carry | carry2) as u8),
        )
    }

    /// Modular subtraction: (self - other) mod n
    pub fn sub(&self, other: &Self) -> Self {
        let mut diff = [0u64; NLIMBS];
        let mut borrow = 0u64;
        for i in 0..NLIMBS {
            let (d, b) = sbb(self.0[i], other.0[i], borrow);
            diff[i] = d;
            borrow = b;
        }

        let mut wrapped = [0u64; NLIMBS];
        let mut borrow2 = 0u64;
        for i in 0..NLIMBS {
            let (d, b) = sbb(diff[i], Self::NC[i], borrow2);
            wrapped[i] = d;
            borrow2 = b;
        }

        Self::conditional_select(&Scalar(diff), &Scalar(wrapped), Choice::from(borrow as u8))
    }

    /// Additive inverse: (n - self) mod n
    pub fn negate(&self) -> Self {
        Self::ZERO.sub(self)
    }

    /// Modular multiplication: (self * other) mod n
    pub fn mul(&self, other: &Self) -> Self {
        Self::reduce_wide(mul_wide(&self.0, &other.0))
    }

    /// Modular squaring
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Reduce a 512-bit value modulo n.
    ///
    /// Each fold rewrites hi·2²⁵⁶ + lo as hi·NC + lo. NC has 129 bits, so the
    /// width shrinks 512 → 386 → 260 → 257 → 256 over four folds.
    fn reduce_wide(mut w: [u64; 8]) -> Self {
        for _ in 0..4 {
            let hi = [w[4], w[5], w[6], w[7]];
            let mut next = mul_wide(&hi, &Self::NC);
            let mut carry = 0u64;
            for i in 0..8 {
                let lo = if i < NLIMBS { w[i] } else { 0 };
                let (s, c) = adc(next[i], lo, carry);
                next[i] = s;
                carry = c;
            }
            w = next;
        }

        let out = Scalar([w[0], w[1], w[2], w[3]]);
        let mut reduced = [0u64; NLIMBS];
        let mut carry = 0u64;
        for i in 0..NLIMBS {
            let (s, c) = adc(w[i], Self::NC[i], carry);
            reduced[i] = s;
            carry = c;
        }
        Self::conditional_select(&out, &Scalar(reduced), Choice::from(carry as u8))
    }

    /// Exponentiation by a public exponent given as little-endian limbs
    fn pow(&self, exp: &[u64; NLIMBS]) -> Self {
        let mut result = Self::ONE;
        for limb in exp.iter().rev() {
            for bit in (0..64).rev() {
                result = result.square();
                let mul = result.mul(self);
                result =
                    Self::conditional_select(&result, &mul, Choice::from(((limb >> bit) & 1) as u8));
            }
        }
        result
    }

    /// Compute multiplicative inverse via Fermat: a^(n-2) mod n
    pub fn invert(&self) -> Result<Self> {
        if bool::from(self.is_zero()) {
            return Err(Error::param("secp256k1 Scalar", "Inverse of zero"));
        }
        Ok(self.pow(&Self::ORDER_MINUS_2))
    }

    /// 4-bit window `index`, counted from the least-significant end
    #[inline(always)]
    pub(crate) fn nibble(&self, index: usize) -> u8 {
        let limb = self.0[index / 16];
        ((limb >> ((index % 16) * 4)) & 0xF) as u8
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u64; NLIMBS];
        for (i, limb) in out.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Scalar(out)
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut acc = 0u64;
        for i in 0..NLIMBS {
            acc |= self.0[i] ^ other.0[i];
        }
        acc.ct_eq(&0)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl core::fmt::Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Scalar([REDACTED])")
    }
}
