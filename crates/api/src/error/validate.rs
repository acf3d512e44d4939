//! Validation utilities producing the public error kinds

use super::types::{Error, Result};

/// Validate an exact length, reporting [`Error::InvalidLength`]
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length, reporting [`Error::InvalidLength`]
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::InvalidLength {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Validate an exact length of encoded data, reporting [`Error::DecodeError`]
#[inline(always)]
pub fn encoded_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::decode(
            context,
            format!("expected {} bytes, got {}", expected, actual),
        ));
    }
    Ok(())
}
