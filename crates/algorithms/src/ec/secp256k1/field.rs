//! secp256k1 field arithmetic implementation

use crate::ec::secp256k1::constants::SECP256K1_FIELD_ELEMENT_SIZE;
use crate::ec::secp256k1::scalar::Scalar;
use crate::error::{Error, Result};
use k1crypt_internal::endian::{be_bytes_to_limbs, limbs_to_be_bytes};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Number of 64-bit limbs for a secp256k1 field element (4 × 64 = 256 bits)
const NLIMBS: usize = 4;

/// secp256k1 field element representing values in 𝔽ₚ, where
/// p = 2²⁵⁶ − 2³² − 977.
/// Internally stored as 4 little-endian 64-bit limbs, always fully reduced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldElement(pub(crate) [u64; NLIMBS]);

/// Add with carry
#[inline(always)]
pub(crate) fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// Subtract with borrow; the returned borrow is 0 or 1
#[inline(always)]
pub(crate) fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (t as u64, (t >> 127) as u64)
}

/// Multiply-accumulate: a + b·c + carry
#[inline(always)]
pub(crate) fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// 4×4 limb schoolbook multiplication into 8 limbs
#[inline(always)]
pub(crate) fn mul_wide(a: &[u64; 4], b: &[u64; 4]) -> [u64; 8] {
    let mut w = [0u64; 8];
    for i in 0..4 {
        let mut carry = 0u64;
        for j in 0..4 {
            let (lo, hi) = mac(w[i + j], a[i], b[j], carry);
            w[i + j] = lo;
            carry = hi;
        }
        w[i + 4] = carry;
    }
    w
}

impl FieldElement {
    /* ---------------------------------------------------------------- */
    /*  secp256k1 Field Constants (little-endian 64-bit limbs)          */
    /* ---------------------------------------------------------------- */

    /// p = 0xFFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE FFFFFC2F
    pub(crate) const MOD_LIMBS: [u64; NLIMBS] = [
        0xFFFF_FFFE_FFFF_FC2F,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
    ];

    /// 2²⁵⁶ mod p = 2³² + 977
    const C: u64 = 0x1_0000_03D1;

    /// p − 2, the Fermat inversion exponent
    const P_MINUS_2: [u64; NLIMBS] = [
        0xFFFF_FFFE_FFFF_FC2D,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
    ];

    /// (p + 1) / 4, the square-root exponent (p ≡ 3 mod 4)
    const SQRT_EXP: [u64; NLIMBS] = [
        0xFFFF_FFFF_BFFF_FF0C,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
        0x3FFF_FFFF_FFFF_FFFF,
    ];

    /* ================================================================= */
    /*  Tiny helpers                                                     */
    /* ================================================================= */

    /// Build a field element from a small literal
    #[inline]
    pub const fn from_u64(n: u64) -> Self {
        FieldElement([n, 0, 0, 0])
    }

    /// The additive identity: 0
    #[inline]
    pub const fn zero() -> Self {
        FieldElement([0; NLIMBS])
    }

    /// The multiplicative identity: 1
    #[inline]
    pub const fn one() -> Self {
        FieldElement([1, 0, 0, 0])
    }

    /// Create a field element from big-endian bytes.
    /// Returns Err if the value is not below p.
    pub fn from_bytes(bytes: &[u8; SECP256K1_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let limbs = be_bytes_to_limbs(bytes);
        let fe = FieldElement(limbs);
        if !bool::from(fe.is_canonical()) {
            return Err(Error::param("FieldElement secp256k1", "Value ≥ modulus"));
        }
        Ok(fe)
    }

    /// The integer value of `s`, plus n when `add_order` is set, as a field
    /// element. Used to rebuild the x-coordinate of an ECDSA nonce point;
    /// fails when the value is not below p.
    pub fn from_scalar(s: &Scalar, add_order: bool) -> Result<Self> {
        let addend = if add_order { Scalar::ORDER } else { [0; NLIMBS] };
        let mut limbs = [0u64; NLIMBS];
        let mut carry = 0u64;
        for i in 0..NLIMBS {
            let (sum, c) = adc(s.0[i], addend[i], carry);
            limbs[i] = sum;
            carry = c;
        }
        let fe = FieldElement(limbs);
        if carry != 0 || !bool::from(fe.is_canonical()) {
            return Err(Error::param("FieldElement secp256k1", "Value ≥ modulus"));
        }
        Ok(fe)
    }

    /// Convert this field element into big-endian bytes.
    pub fn to_bytes(&self) -> [u8; SECP256K1_FIELD_ELEMENT_SIZE] {
        limbs_to_be_bytes(&self.0)
    }

    /// Constant-time check: is the stored value < p ?
    #[inline(always)]
    fn is_canonical(&self) -> Choice {
        let mut borrow = 0u64;
        for i in 0..NLIMBS {
            let (_, b) = sbb(self.0[i], Self::MOD_LIMBS[i], borrow);
            borrow = b;
        }
        Choice::from(borrow as u8)
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::zero())
    }

    /// Least-significant bit of the canonical value
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.0[0] & 1) as u8)
    }

    /// Constant-time addition: (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        // Full 256-bit addition
        let mut sum = [0u64; NLIMBS];
        let mut carry = 0u64;
        for i in 0..NLIMBS {
            let (s, c) = adc(self.0[i], other.0[i], carry);
            sum[i] = s;
            carry = c;
        }

        // sum + C wraps past 2²⁵⁶ exactly when sum ≥ p
        let mut reduced = [0u64; NLIMBS];
        let mut carry2 = 0u64;
        let mut addend = Self::C;
        for i in 0..NLIMBS {
            let (s, c) = adc(sum[i], addend, carry2);
            reduced[i] = s;
            carry2 = c;
            addend = 0;
        }

        let need_reduce = Choice::from((carry | carry2) as u8);
        Self::conditional_select(&FieldElement(sum), &FieldElement(reduced), need_reduce)
    }

    /// Constant-time subtraction: (self - other) mod p
    pub fn sub(&self, other: &Self) -> Self {
        let mut diff = [0u64; NLIMBS];
        let mut borrow = 0u64;
        for i in 0..NLIMBS {
            let (d, b) = sbb(self.0[i], other.0[i], borrow);
            diff[i] = d;
            borrow = b;
        }

        // Adding p modulo 2²⁵⁶ is subtracting C
        let mut wrapped = [0u64; NLIMBS];
        let mut borrow2 = 0u64;
        let mut subtrahend = Self::C;
        for i in 0..NLIMBS {
            let (d, b) = sbb(diff[i], subtrahend, borrow2);
            wrapped[i] = d;
            borrow2 = b;
            subtrahend = 0;
        }

        Self::conditional_select(
            &FieldElement(diff),
            &FieldElement(wrapped),
            Choice::from(borrow as u8),
        )
    }

    /// Additive inverse: (−self) mod p
    #[inline]
    pub fn negate(&self) -> Self {
        Self::zero().sub(self)
    }

    /// Doubling: (2·self) mod p
    #[inline(always)]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Field multiplication: (self * other) mod p
    pub fn mul(&self, other: &Self) -> Self {
        Self::reduce_wide(mul_wide(&self.0, &other.0))
    }

    /// Field squaring: (self²) mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Reduce a 512-bit product modulo p using 2²⁵⁶ ≡ C
    fn reduce_wide(w: [u64; 8]) -> Self {
        // Fold 1: lo + hi·C, at most 289 bits
        let mut r = [0u64; NLIMBS];
        let mut carry = 0u64;
        for i in 0..NLIMBS {
            let (lo, hi) = mac(w[i], w[i + 4], Self::C, carry);
            r[i] = lo;
            carry = hi;
        }

        // Fold 2: the 33-bit overflow limb times C
        let t = (carry as u128) * (Self::C as u128);
        let (r0, c) = adc(r[0], t as u64, 0);
        let (r1, c) = adc(r[1], (t >> 64) as u64, c);
        let (r2, c) = adc(r[2], 0, c);
        let (r3, c) = adc(r[3], 0, c);

        // Fold 3: a final carry can only happen when the low limbs are tiny
        let (r0, c2) = adc(r0, c * Self::C, 0);
        let (r1, c2) = adc(r1, 0, c2);
        let (r2, c2) = adc(r2, 0, c2);
        let (r3, _) = adc(r3, 0, c2);

        // Value is now below 2²⁵⁶ < 2p: one conditional subtraction
        let out = FieldElement([r0, r1, r2, r3]);
        let (s0, c) = adc(r0, Self::C, 0);
        let (s1, c) = adc(r1, 0, c);
        let (s2, c) = adc(r2, 0, c);
        let (s3, c) = adc(r3, 0, c);
        Self::conditional_select(&out, &FieldElement([s0, s1, s2, s3]), Choice::from(c as u8))
    }

    /// Exponentiation by a public exponent given as little-endian limbs
    pub(crate) fn pow(&self, exp: &[u64; NLIMBS]) -> Self {
        let mut result = Self::one();
        for limb in exp.iter().rev() {
            for bit in (0..64).rev() {
                result = result.square();
                let mul = result.mul(self);
                result = Self::conditional_select(
                    &result,
                    &mul,
                    Choice::from(((limb >> bit) & 1) as u8),
                );
            }
        }
        result
    }

    /// Inverse that maps zero to zero
    #[inline]
    pub(crate) fn invert_or_zero(&self) -> Self {
        self.pow(&Self::P_MINUS_2)
    }

    /// Compute multiplicative inverse via Fermat: a^(p-2) mod p
    pub fn invert(&self) -> Result<Self> {
        if bool::from(self.is_zero()) {
            return Err(Error::param("FieldElement secp256k1", "Inverse of zero"));
        }
        Ok(self.invert_or_zero())
    }

    /// Square root, if one exists. Since p ≡ 3 (mod 4) the candidate is
    /// a^((p+1)/4); it is a root exactly when it squares back to `self`.
    pub fn sqrt(&self) -> Option<Self> {
        let candidate = self.pow(&Self::SQRT_EXP);
        if bool::from(candidate.square().ct_eq(self)) {
            Some(candidate)
        } else {
            None
        }
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u64; NLIMBS];
        for (i, limb) in out.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement(out)
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut acc = 0u64;
        for i in 0..NLIMBS {
            acc |= self.0[i] ^ other.0[i];
        }
        acc.ct_eq(&0)
    }
}
