//! Koblitz secp256k1 Elliptic Curve Primitives
//!
//! This module implements the secp256k1 elliptic curve operations in constant time.
//! The curve equation is y² = x³ + 7 over the prime field F_p where:
//! - p = 2^256 - 2^32 - 977
//! - The curve order n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
//!
//! Secret-dependent operations (scalar arithmetic, multiplication, table
//! lookups) avoid branches and memory accesses that depend on secret data.

mod constants;
mod context;
mod field;
mod point;
mod scalar;

pub use constants::{
    SECP256K1_FIELD_ELEMENT_SIZE, SECP256K1_POINT_COMPRESSED_SIZE,
    SECP256K1_POINT_UNCOMPRESSED_SIZE, SECP256K1_POINT_XONLY_SIZE, SECP256K1_SCALAR_SIZE,
};
pub use context::{Context, CONTEXT_SEED_SIZE};
pub use field::FieldElement;
pub use point::{Point, PointFormat};
pub use scalar::Scalar;

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Get the standard base point G of the secp256k1 curve
pub fn base_point_g() -> Point {
    Point::generator()
}

/// Draw a uniformly random scalar in (0, n) by rejection sampling
pub fn generate_secret<R: CryptoRng + RngCore>(rng: &mut R) -> Scalar {
    let mut bytes = [0u8; SECP256K1_SCALAR_SIZE];
    loop {
        rng.fill_bytes(&mut bytes);
        if let Ok(secret) = Scalar::from_secret_bytes(&bytes) {
            bytes.zeroize();
            return secret;
        }
    }
}

/// Sum of a set of points; `None` when the sum is the identity
pub fn sum_points(points: &[Point]) -> Option<Point> {
    let sum = points
        .iter()
        .fold(Point::identity().to_projective(), |acc, p| {
            acc.add(&p.to_projective())
        })
        .to_affine();
    if sum.is_identity() {
        None
    } else {
        Some(sum)
    }
}
