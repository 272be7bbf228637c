//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! A malformed license URL is only an error for callers that opt into
//! [`License::new_strict`](crate::License::new_strict). The lenient
//! constructors log it and store no URL.

use thiserror::Error;

/// Top-level error type for license identity operations.
#[derive(Error, Debug)]
pub enum LicenseError {
    /// A required argument was absent or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A license URL string could not be parsed.
    #[error("malformed license reference {reference:?}: {source}")]
    MalformedReference {
        /// The rejected URL string, verbatim.
        reference: String,
        /// The parser's reason for rejecting it.
        #[source]
        source: url::ParseError,
    },

    /// A textual digest was not 32 hex digits.
    #[error("invalid license digest: {0}")]
    InvalidDigest(String),
}

impl LicenseError {
    /// The error raised when a license is built without a body.
    pub(crate) fn missing_body() -> Self {
        Self::InvalidArgument("body cannot be null".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_body_message() {
        assert_eq!(
            LicenseError::missing_body().to_string(),
            "invalid argument: body cannot be null"
        );
    }

    #[test]
    fn test_malformed_reference_exposes_source() {
        let source = url::Url::parse("not-a-url").unwrap_err();
        let err = LicenseError::MalformedReference {
            reference: "not-a-url".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("malformed license reference \"not-a-url\""));
        assert!(std::error::Error::source(&err).is_some());
    }
}
