//! Constant values for the k1crypt library
//!
//! Curve parameters, encoding sizes, object identifiers and hash tags used
//! by every other crate in the workspace. This crate has no dependencies.

#![no_std]

pub mod traditional;
pub mod utils;
