//! Classified API errors and their HTTP status mapping.

use thiserror::Error;

/// Every failure the core can surface to a client.
///
/// Errors are produced at the layer that detects them and mapped to a status
/// code here, deterministically. Producer internals are the only thing that is
/// generalized: whatever goes wrong during generation becomes [`Internal`]
/// with a generic message, and the detail stays in the operator log.
///
/// [`Internal`]: ApiError::Internal
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A query parameter failed to parse (e.g. non-integer `count`).
    #[error("{0}")]
    InvalidParameter(String),
    /// `count` parsed but is outside the accepted range.
    #[error("Count must be between 1 and 100")]
    OutOfRange,
    /// Requested type is not in the catalog.
    #[error("Unknown data type: {0}")]
    UnknownType(String),
    /// No route matched the request path.
    #[error("Endpoint not found: {0}")]
    NotFound(String),
    /// Unexpected failure inside a producer. Never leaks internal detail.
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub const fn status(&self) -> u16 {
        match self {
            ApiError::InvalidParameter(_) | ApiError::OutOfRange | ApiError::UnknownType(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Internal => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::InvalidParameter("bad".into()).status(), 400);
        assert_eq!(ApiError::OutOfRange.status(), 400);
        assert_eq!(ApiError::UnknownType("pony".into()).status(), 400);
        assert_eq!(ApiError::NotFound("/x".into()).status(), 404);
        assert_eq!(ApiError::Internal.status(), 500);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ApiError::OutOfRange.to_string(),
            "Count must be between 1 and 100"
        );
        assert_eq!(
            ApiError::UnknownType("pony".into()).to_string(),
            "Unknown data type: pony"
        );
        assert_eq!(
            ApiError::NotFound("/unknown/path".into()).to_string(),
            "Endpoint not found: /unknown/path"
        );
        assert_eq!(ApiError::Internal.to_string(), "Internal server error");
    }
}
