//! Precomputed generator tables and scalar-multiplication blinding

use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;
use zeroize::Zeroize;

use crate::ec::secp256k1::{
    constants::{WINDOW_COUNT, WINDOW_SIZE},
    point::{Point, ProjectivePoint},
    scalar::Scalar,
};
use crate::hash::sha256;

/// Length of a context randomization seed
pub const CONTEXT_SEED_SIZE: usize = 32;

static GLOBAL_CONTEXT: OnceLock<Arc<Context>> = OnceLock::new();

/// Blinding state: generator multiplication computes (k + b)·G + (−b·G)
struct Blinding {
    scalar: Scalar,
    point: ProjectivePoint,
}

impl Drop for Blinding {
    fn drop(&mut self) {
        self.scalar.zeroize();
    }
}

/// secp256k1 context
///
/// Holds the fixed-base table used for `k·G` (64 windows of 16 multiples of
/// `16^w·G`) and the blinding state mixed into every generator
/// multiplication. Reseeding takes a write lock; every other operation only
/// reads, so a single context can be shared between threads.
pub struct Context {
    name: Option<String>,
    table: Vec<[ProjectivePoint; WINDOW_SIZE]>,
    blinding: RwLock<Blinding>,
}

impl Context {
    /// Create a context, randomized with `seed` or fresh OS randomness
    pub fn new(seed: Option<&[u8]>) -> Self {
        Self::build(None, seed)
    }

    /// Create a named context; the name appears in `Debug` output and logs
    pub fn with_name(name: impl Into<String>, seed: Option<&[u8]>) -> Self {
        Self::build(Some(name.into()), seed)
    }

    /// The lazily created process-wide context
    pub fn global() -> Arc<Context> {
        GLOBAL_CONTEXT
            .get_or_init(|| Arc::new(Context::with_name("global", None)))
            .clone()
    }

    fn build(name: Option<String>, seed: Option<&[u8]>) -> Self {
        let mut table = Vec::with_capacity(WINDOW_COUNT);
        let mut base = Point::generator().to_projective();
        for _ in 0..WINDOW_COUNT {
            table.push(base.window_table());
            base = base.double().double().double().double();
        }

        let ctx = Context {
            name,
            table,
            blinding: RwLock::new(Blinding {
                scalar: Scalar::ZERO,
                point: ProjectivePoint::IDENTITY,
            }),
        };
        debug!(context = ctx.label(), "secp256k1 context created");
        ctx.reseed(seed);
        ctx
    }

    /// Name given at construction, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn label(&self) -> &str {
        self.name().unwrap_or("unnamed")
    }

    /// Replace the blinding state.
    ///
    /// A seed that is absent or not exactly 32 bytes is replaced by 32 bytes
    /// from the OS CSPRNG. Results of every operation are unchanged; only the
    /// intermediate values of generator multiplication differ.
    pub fn reseed(&self, seed: Option<&[u8]>) {
        let mut fresh = [0u8; CONTEXT_SEED_SIZE];
        let seed = match seed {
            Some(s) if s.len() == CONTEXT_SEED_SIZE => s,
            _ => {
                OsRng.fill_bytes(&mut fresh);
                &fresh[..]
            }
        };

        let mut digest = sha256(seed);
        let scalar = Scalar::from_bytes_reduced(&digest);
        digest.zeroize();
        let point = self.comb(&scalar).negate();
        fresh.zeroize();

        let mut guard = self
            .blinding
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Blinding { scalar, point };
        debug!(context = self.label(), "secp256k1 context reseeded");
    }

    /// Unblinded fixed-base multiplication over the precomputed windows
    fn comb(&self, k: &Scalar) -> ProjectivePoint {
        let mut acc = ProjectivePoint::IDENTITY;
        for (w, window) in self.table.iter().enumerate() {
            acc = acc.add(&ProjectivePoint::lookup(window, k.nibble(w)));
        }
        acc
    }

    pub(crate) fn mul_generator_projective(&self, k: &Scalar) -> ProjectivePoint {
        let guard = self
            .blinding
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut blinded = k.add(&guard.scalar);
        let result = self.comb(&blinded).add(&guard.point);
        blinded.zeroize();
        result
    }

    /// Constant-time k·G
    pub fn mul_generator(&self, k: &Scalar) -> Point {
        self.mul_generator_projective(k).to_affine()
    }

    /// Constant-time k·P
    pub fn mul(&self, k: &Scalar, point: &Point) -> Point {
        point.mul(k)
    }

    /// a·G + b·P
    pub fn mul_add(&self, a: &Scalar, b: &Scalar, point: &Point) -> Point {
        self.mul_generator_projective(a)
            .add(&point.to_projective().mul(b))
            .to_affine()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("name", &self.label())
            .field("windows", &self.table.len())
            .finish_non_exhaustive()
    }
}
