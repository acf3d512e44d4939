//! Error handling for the secp256k1 primitives

use std::borrow::Cow;
use std::fmt;

use k1crypt_api::Error as CoreError;

/// The error type for the secp256k1 primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// A scalar was zero or not below the group order
    InvalidScalar {
        /// Operation that rejected the scalar
        context: &'static str,
    },

    /// A point encoding was malformed or the point is not on the curve
    InvalidPoint {
        /// Operation that rejected the point
        context: &'static str,
        /// What was wrong with it
        details: &'static str,
    },

    /// Malformed DER or PEM structure
    Encoding {
        /// Codec that rejected the input
        context: &'static str,
        /// What was wrong with it
        details: Cow<'static, str>,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create an Encoding error
    pub fn encoding<D: Into<Cow<'static, str>>>(context: &'static str, details: D) -> Self {
        Error::Encoding {
            context,
            details: details.into(),
        }
    }
}

/// Result type for the secp256k1 primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::InvalidScalar { context } => {
                write!(f, "Invalid scalar in {}: must be in (0, n)", context)
            }
            Error::InvalidPoint { context, details } => {
                write!(f, "Invalid point in {}: {}", context, details)
            }
            Error::Encoding { context, details } => {
                write!(f, "Malformed {} encoding: {}", context, details)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidInput {
                context: "parameter",
                message: format!("{}: {}", name, reason),
            },
            Error::InvalidScalar { context } => CoreError::InvalidSecret { context },
            Error::InvalidPoint { context, details } => CoreError::InvalidPublicKey {
                context,
                message: details.to_string(),
            },
            Error::Encoding { context, details } => CoreError::DecodeError {
                context,
                message: details.into_owned(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k1crypt_api::ErrorKind;

    #[test]
    fn maps_onto_public_kinds() {
        let cases = [
            (Error::param("secp256k1 Scalar", "Inverse of zero"), ErrorKind::InvalidInput),
            (Error::InvalidScalar { context: "secret" }, ErrorKind::InvalidSecret),
            (
                Error::InvalidPoint {
                    context: "secp256k1 point",
                    details: "not on the curve",
                },
                ErrorKind::InvalidPublicKey,
            ),
            (Error::encoding("PKCS#8", "bad tag"), ErrorKind::DecodeError),
        ];
        for (err, kind) in cases {
            assert_eq!(CoreError::from(err).kind(), kind);
        }
    }

    #[test]
    fn display_names_the_context() {
        let err = Error::encoding("PKCS#8", "bad tag");
        assert_eq!(err.to_string(), "Malformed PKCS#8 encoding: bad tag");
    }
}
