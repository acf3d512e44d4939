//! Error type definitions for secp256k1 operations

use thiserror::Error as ThisError;

/// Primary error type for k1crypt operations
///
/// Every fallible public operation reports one of these variants. Callers
/// that only care about the category should match on [`Error::kind`].
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Scalar outside `(0, n)`
    #[error("Invalid secret: {context}: scalar must be greater than 0 and less than the group order")]
    InvalidSecret { context: &'static str },

    /// Tweak was out of range or produced a zero scalar / the identity point
    #[error("Invalid tweak: {context}: {message}")]
    InvalidTweak {
        context: &'static str,
        message: String,
    },

    /// Malformed or off-curve public key
    #[error("Invalid public key: {context}: {message}")]
    InvalidPublicKey {
        context: &'static str,
        message: String,
    },

    /// The sum of a set of public keys is the point at infinity
    #[error("Invalid combination: {context}: the sum of the public keys is invalid")]
    InvalidCombination { context: &'static str },

    /// Malformed signature, DER or PEM structure
    #[error("Decode error: {context}: {message}")]
    DecodeError {
        context: &'static str,
        message: String,
    },

    /// Invalid argument that is not a length problem
    #[error("Invalid input: {context}: {message}")]
    InvalidInput {
        context: &'static str,
        message: String,
    },

    /// Wrong-length message, hash or auxiliary randomness
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The nonce function rejected every candidate or signing self-check failed
    #[error("Signing failed: {context}: {message}")]
    SigningFailed {
        context: &'static str,
        message: String,
    },

    /// Public key could not be recovered from a recoverable signature
    #[error("Recovery failed: {context}: {message}")]
    RecoveryFailed {
        context: &'static str,
        message: String,
    },

    /// The operating system RNG failed
    #[error("Random generation error: {context}: {message}")]
    RandomGenerationError {
        context: &'static str,
        message: String,
    },
}

/// Coarse error category, for callers that branch on the kind of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidSecret,
    InvalidTweak,
    InvalidPublicKey,
    InvalidCombination,
    DecodeError,
    InvalidInput,
    SigningFailed,
    RecoveryFailed,
    RandomGenerationError,
}

/// Result type for k1crypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// The category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSecret { .. } => ErrorKind::InvalidSecret,
            Self::InvalidTweak { .. } => ErrorKind::InvalidTweak,
            Self::InvalidPublicKey { .. } => ErrorKind::InvalidPublicKey,
            Self::InvalidCombination { .. } => ErrorKind::InvalidCombination,
            Self::DecodeError { .. } => ErrorKind::DecodeError,
            Self::InvalidInput { .. } | Self::InvalidLength { .. } => ErrorKind::InvalidInput,
            Self::SigningFailed { .. } => ErrorKind::SigningFailed,
            Self::RecoveryFailed { .. } => ErrorKind::RecoveryFailed,
            Self::RandomGenerationError { .. } => ErrorKind::RandomGenerationError,
        }
    }

    /// Shorthand for [`Error::InvalidSecret`]
    pub fn invalid_secret(context: &'static str) -> Self {
        Self::InvalidSecret { context }
    }

    /// Shorthand for [`Error::InvalidTweak`]
    pub fn invalid_tweak(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidTweak {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for [`Error::InvalidPublicKey`]
    pub fn invalid_public_key(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidPublicKey {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for [`Error::DecodeError`]
    pub fn decode(context: &'static str, message: impl Into<String>) -> Self {
        Self::DecodeError {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for [`Error::InvalidInput`]
    pub fn invalid_input(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for [`Error::SigningFailed`]
    pub fn signing_failed(context: &'static str, message: impl Into<String>) -> Self {
        Self::SigningFailed {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for [`Error::RecoveryFailed`]
    pub fn recovery_failed(context: &'static str, message: impl Into<String>) -> Self {
        Self::RecoveryFailed {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error, keeping its kind and details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidSecret { .. } => Self::InvalidSecret { context },
            Self::InvalidTweak { message, .. } => Self::InvalidTweak { context, message },
            Self::InvalidPublicKey { message, .. } => Self::InvalidPublicKey { context, message },
            Self::InvalidCombination { .. } => Self::InvalidCombination { context },
            Self::DecodeError { message, .. } => Self::DecodeError { context, message },
            Self::InvalidInput { message, .. } => Self::InvalidInput { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::SigningFailed { message, .. } => Self::SigningFailed { context, message },
            Self::RecoveryFailed { message, .. } => Self::RecoveryFailed { context, message },
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
        }
    }
}

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Self::RandomGenerationError {
            context: "OS random source",
            message: e.to_string(),
        }
    }
}
