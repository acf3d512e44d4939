//! Internal utilities for the k1crypt library
//!
//! Nothing in this crate is part of the public API contract. It holds the
//! constant-time comparison helpers and the limb/byte conversions shared by
//! the field and scalar implementations.

pub mod constant_time;
pub mod endian;

pub use constant_time::ct_eq;
