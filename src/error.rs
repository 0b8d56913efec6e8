//! Error types for sequence analysis.

use thiserror::Error;

/// A specialized `Result` type for analysis operations.
pub type Result<T> = core::result::Result<T, AnalysisError>;

/// Errors produced while validating a request or generating its sequences.
///
/// An undefined π estimate is not an error: it is reported as data
/// in [`CesaroReport`](crate::CesaroReport).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// A request field violates its invariant.
    #[error("invalid request: {field} {reason}")]
    InvalidRequest {
        /// Wire name of the offending field.
        field: &'static str,
        /// What the field must satisfy.
        reason: &'static str,
    },

    /// Modulus 0 reached the arithmetic core.
    #[error("invalid modulus: m must be at least 1")]
    InvalidModulus,
}

impl AnalysisError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        AnalysisError::InvalidRequest { field, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_request() {
        let err = AnalysisError::invalid("n", "must be at least 2");
        assert_eq!(format!("{}", err), "invalid request: n must be at least 2");
    }

    #[test]
    fn test_display_invalid_modulus() {
        assert_eq!(
            format!("{}", AnalysisError::InvalidModulus),
            "invalid modulus: m must be at least 1"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(AnalysisError::InvalidModulus, AnalysisError::InvalidModulus);
        assert_ne!(
            AnalysisError::InvalidModulus,
            AnalysisError::invalid("m", "must be at least 1")
        );
    }
}
