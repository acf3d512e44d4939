//! Error handling for the k1crypt ecosystem

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, ErrorKind, Result};

// Re-export validation utilities module (not as a nested function)
pub use validate as validation;

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Self {
        Self::DecodeError {
            context: "array conversion",
            message: "slice has the wrong length".to_string(),
        }
    }
}

// Specialized result types for different operations
pub type KeyResult<T> = Result<T>;
pub type SignatureResult<T> = Result<T>;
