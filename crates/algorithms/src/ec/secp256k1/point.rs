//! secp256k1 elliptic curve point operations

use crate::ec::secp256k1::{
    constants::{
        SECP256K1, SECP256K1_FIELD_ELEMENT_SIZE, SECP256K1_POINT_COMPRESSED_SIZE,
        SECP256K1_POINT_UNCOMPRESSED_SIZE, SECP256K1_POINT_XONLY_SIZE, WINDOW_COUNT, WINDOW_SIZE,
    },
    field::FieldElement,
    scalar::Scalar,
};
use crate::error::{Error, Result};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Curve coefficient b = 7
const B: FieldElement = FieldElement::from_u64(SECP256K1.b);

/// 3·b, used by the complete projective formulas
const B3: FieldElement = FieldElement::from_u64(3 * SECP256K1.b);

/// Format of a serialized elliptic curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// Uncompressed format: 0x04 || x || y
    Uncompressed,
    /// Compressed format: 0x02/0x03 || x
    Compressed,
    /// Hybrid format: 0x06/0x07 || x || y, prefix parity must match y
    Hybrid,
}

impl PointFormat {
    /// Detect the encoding from its length and prefix byte
    pub fn detect(bytes: &[u8]) -> Result<Self> {
        match (bytes.len(), bytes.first()) {
            (SECP256K1_POINT_COMPRESSED_SIZE, Some(0x02 | 0x03)) => Ok(PointFormat::Compressed),
            (SECP256K1_POINT_UNCOMPRESSED_SIZE, Some(0x04)) => Ok(PointFormat::Uncompressed),
            (SECP256K1_POINT_UNCOMPRESSED_SIZE, Some(0x06 | 0x07)) => Ok(PointFormat::Hybrid),
            (SECP256K1_POINT_COMPRESSED_SIZE | SECP256K1_POINT_UNCOMPRESSED_SIZE, _) => {
                Err(Error::InvalidPoint {
                    context: "secp256k1 point",
                    details: "unknown prefix byte",
                })
            }
            _ => Err(Error::InvalidPoint {
                context: "secp256k1 point",
                details: "encoding must be 33 or 65 bytes",
            }),
        }
    }
}

/// A point on the secp256k1 elliptic curve in affine coordinates
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

/// Homogeneous projective point (X:Y:Z), x = X/Z and y = Y/Z.
/// The identity is (0:1:0); the addition formulas are complete.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        let self_is_identity: bool = self.is_identity.into();
        let other_is_identity: bool = other.is_identity.into();
        if self_is_identity || other_is_identity {
            return self_is_identity == other_is_identity;
        }
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Point {
    /// Create a new point from uncompressed coordinates.
    ///
    /// Returns an error if a coordinate is not below p or the coordinates
    /// don't satisfy the curve equation.
    pub fn new_uncompressed(
        x: &[u8; SECP256K1_FIELD_ELEMENT_SIZE],
        y: &[u8; SECP256K1_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let x_fe = FieldElement::from_bytes(x).map_err(|_| Error::InvalidPoint {
            context: "secp256k1 point",
            details: "x-coordinate is not below the field prime",
        })?;
        let y_fe = FieldElement::from_bytes(y).map_err(|_| Error::InvalidPoint {
            context: "secp256k1 point",
            details: "y-coordinate is not below the field prime",
        })?;
        Self::from_coordinates(x_fe, y_fe)
    }

    fn from_coordinates(x: FieldElement, y: FieldElement) -> Result<Self> {
        if !Self::is_on_curve(&x, &y) {
            return Err(Error::InvalidPoint {
                context: "secp256k1 point",
                details: "coordinates do not satisfy the curve equation",
            });
        }
        Ok(Point {
            is_identity: Choice::from(0),
            x,
            y,
        })
    }

    /// Create the identity point (point at infinity).
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// The standard base point G
    pub fn generator() -> Self {
        Point {
            is_identity: Choice::from(0),
            x: FieldElement(k1crypt_internal::endian::be_bytes_to_limbs(&SECP256K1.g_x)),
            y: FieldElement(k1crypt_internal::endian::be_bytes_to_limbs(&SECP256K1.g_y)),
        }
    }

    /// Check if this point is the identity element.
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// Whether y² = x³ + 7 holds
    fn is_on_curve(x: &FieldElement, y: &FieldElement) -> bool {
        let rhs = x.square().mul(x).add(&B);
        y.square().ct_eq(&rhs).into()
    }

    /// x-coordinate as big-endian bytes
    pub fn x_coordinate_bytes(&self) -> [u8; SECP256K1_FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    /// y-coordinate as big-endian bytes
    pub fn y_coordinate_bytes(&self) -> [u8; SECP256K1_FIELD_ELEMENT_SIZE] {
        self.y.to_bytes()
    }

    /// Whether the y-coordinate is odd
    pub fn has_odd_y(&self) -> bool {
        self.y.is_odd().into()
    }

    /// Serialize as 0x02/0x03 || x. The identity encodes as all zeros.
    pub fn serialize_compressed(&self) -> [u8; SECP256K1_POINT_COMPRESSED_SIZE] {
        let mut out = [0u8; SECP256K1_POINT_COMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = 0x02 | (self.has_odd_y() as u8);
        out[1..].copy_from_slice(&self.x.to_bytes());
        out
    }

    /// Serialize as 0x04 || x || y. The identity encodes as all zeros.
    pub fn serialize_uncompressed(&self) -> [u8; SECP256K1_POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; SECP256K1_POINT_UNCOMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = 0x04;
        out[1..33].copy_from_slice(&self.x.to_bytes());
        out[33..].copy_from_slice(&self.y.to_bytes());
        out
    }

    /// Serialize the bare x-coordinate (BIP340)
    pub fn serialize_xonly(&self) -> [u8; SECP256K1_POINT_XONLY_SIZE] {
        self.x.to_bytes()
    }

    /// Parse a compressed, uncompressed or hybrid encoding
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        match PointFormat::detect(bytes)? {
            PointFormat::Compressed => {
                let mut x = [0u8; SECP256K1_FIELD_ELEMENT_SIZE];
                x.copy_from_slice(&bytes[1..]);
                Self::decompress(&x, bytes[0] == 0x03)
            }
            PointFormat::Uncompressed => {
                let (x, y) = split_coordinates(bytes);
                Self::new_uncompressed(&x, &y)
            }
            PointFormat::Hybrid => {
                let (x, y) = split_coordinates(bytes);
                let point = Self::new_uncompressed(&x, &y)?;
                if point.has_odd_y() != (bytes[0] == 0x07) {
                    return Err(Error::InvalidPoint {
                        context: "secp256k1 point",
                        details: "hybrid prefix disagrees with y parity",
                    });
                }
                Ok(point)
            }
        }
    }

    /// Recover the point with the given x-coordinate and y parity
    pub fn decompress(x: &[u8; SECP256K1_FIELD_ELEMENT_SIZE], odd_y: bool) -> Result<Self> {
        let x_fe = FieldElement::from_bytes(x).map_err(|_| Error::InvalidPoint {
            context: "secp256k1 point",
            details: "x-coordinate is not below the field prime",
        })?;
        Self::decompress_field(&x_fe, odd_y)
    }

    pub(crate) fn decompress_field(x: &FieldElement, odd_y: bool) -> Result<Self> {
        let rhs = x.square().mul(x).add(&B);
        let y = rhs.sqrt().ok_or(Error::InvalidPoint {
            context: "secp256k1 point",
            details: "x-coordinate is not on the curve",
        })?;
        let flip = y.is_odd() ^ Choice::from(odd_y as u8);
        let y = FieldElement::conditional_select(&y, &y.negate(), flip);
        Ok(Point {
            is_identity: Choice::from(0),
            x: *x,
            y,
        })
    }

    /// BIP340 `lift_x`: the point with this x-coordinate and even y
    pub fn lift_x(x: &[u8; SECP256K1_POINT_XONLY_SIZE]) -> Result<Self> {
        Self::decompress(x, false)
    }

    /// Point negation: (x, -y)
    pub fn negate(&self) -> Self {
        Point {
            is_identity: self.is_identity,
            x: self.x,
            y: self.y.negate(),
        }
    }

    /// Point addition
    pub fn add(&self, other: &Self) -> Self {
        self.to_projective().add(&other.to_projective()).to_affine()
    }

    /// Point doubling
    pub fn double(&self) -> Self {
        self.to_projective().double().to_affine()
    }

    /// Constant-time scalar multiplication: scalar · self
    pub fn mul(&self, scalar: &Scalar) -> Self {
        self.to_projective().mul(scalar).to_affine()
    }

    pub(crate) fn to_projective(self) -> ProjectivePoint {
        let affine = ProjectivePoint {
            x: self.x,
            y: self.y,
            z: FieldElement::one(),
        };
        ProjectivePoint::conditional_select(&affine, &ProjectivePoint::IDENTITY, self.is_identity)
    }
}

fn split_coordinates(
    bytes: &[u8],
) -> (
    [u8; SECP256K1_FIELD_ELEMENT_SIZE],
    [u8; SECP256K1_FIELD_ELEMENT_SIZE],
) {
    let mut x = [0u8; SECP256K1_FIELD_ELEMENT_SIZE];
    let mut y = [0u8; SECP256K1_FIELD_ELEMENT_SIZE];
    x.copy_from_slice(&bytes[1..33]);
    y.copy_from_slice(&bytes[33..65]);
    (x, y)
}

impl ProjectivePoint {
    pub(crate) const IDENTITY: Self = ProjectivePoint {
        x: FieldElement::zero(),
        y: FieldElement::one(),
        z: FieldElement::zero(),
    };

    pub(crate) fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Convert to affine coordinates; Z = 0 maps to the identity
    pub(crate) fn to_affine(self) -> Point {
        let is_identity = self.is_identity();
        let z_inv = self.z.invert_or_zero();
        Point {
            is_identity,
            x: self.x.mul(&z_inv),
            y: self.y.mul(&z_inv),
        }
    }

    pub(crate) fn negate(&self) -> Self {
        ProjectivePoint {
            x: self.x,
            y: self.y.negate(),
            z: self.z,
        }
    }

    /// Complete addition for a = 0 (Renes–Costello–Batina 2015, algorithm 7)
    pub(crate) fn add(&self, other: &Self) -> Self {
        let (x1, y1, z1) = (&self.x, &self.y, &self.z);
        let (x2, y2, z2) = (&other.x, &other.y, &other.z);

        let t0 = x1.mul(x2);
        let t1 = y1.mul(y2);
        let t2 = z1.mul(z2);
        let t3 = x1.add(y1).mul(&x2.add(y2)).sub(&t0.add(&t1));
        let t4 = y1.add(z1).mul(&y2.add(z2)).sub(&t1.add(&t2));
        let xz = x1.add(z1).mul(&x2.add(z2)).sub(&t0.add(&t2));

        let t0 = t0.double().add(&t0);
        let t2 = B3.mul(&t2);
        let z3 = t1.add(&t2);
        let t1 = t1.sub(&t2);
        let y3 = B3.mul(&xz);

        let x3 = t3.mul(&t1).sub(&t4.mul(&y3));
        let y3 = t1.mul(&z3).add(&y3.mul(&t0));
        let z3 = z3.mul(&t4).add(&t0.mul(&t3));

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Complete doubling for a = 0 (Renes–Costello–Batina 2015, algorithm 9)
    pub(crate) fn double(&self) -> Self {
        let (x, y, z) = (&self.x, &self.y, &self.z);

        let t0 = y.square();
        let z3 = t0.double().double().double();
        let t1 = y.mul(z);
        let t2 = B3.mul(&z.square());
        let x3 = t2.mul(&z3);
        let y3 = t0.add(&t2);
        let z3 = t1.mul(&z3);
        let t2 = t2.double().add(&t2);
        let t0 = t0.sub(&t2);
        let y3 = t0.mul(&y3).add(&x3);
        let x3 = t0.mul(&x.mul(y)).double();

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Multiples 0·P .. 15·P for windowed multiplication
    pub(crate) fn window_table(&self) -> [ProjectivePoint; WINDOW_SIZE] {
        let mut table = [ProjectivePoint::IDENTITY; WINDOW_SIZE];
        for i in 1..WINDOW_SIZE {
            table[i] = table[i - 1].add(self);
        }
        table
    }

    /// Constant-time table lookup: scans every entry
    pub(crate) fn lookup(table: &[ProjectivePoint; WINDOW_SIZE], index: u8) -> Self {
        let mut out = ProjectivePoint::IDENTITY;
        for (i, entry) in table.iter().enumerate() {
            out.conditional_assign(entry, (i as u8).ct_eq(&index));
        }
        out
    }

    /// Fixed 4-bit window scalar multiplication.
    ///
    /// Every window performs four doublings, one full table scan and one
    /// addition, whatever the scalar bits are.
    pub(crate) fn mul(&self, scalar: &Scalar) -> Self {
        let table = self.window_table();
        let mut acc = ProjectivePoint::IDENTITY;
        for window in (0..WINDOW_COUNT).rev() {
            acc = acc.double().double().double().double();
            acc = acc.add(&Self::lookup(&table, scalar.nibble(window)));
        }
        acc
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}
