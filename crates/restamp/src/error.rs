//! Error types for the restamp crate.

use restamp_scanner::DelimiterError;
use thiserror::Error;

/// Errors from compiling or rendering a template.
///
/// All variants are deterministic input-validation failures: they are
/// returned to the immediate caller, never raised as panics, and there is
/// nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Invalid delimiter configuration at compile time.
    #[error("delimiter configuration: {0}")]
    Configuration(#[from] DelimiterError),

    /// The number of substitution values does not equal the template's
    /// placeholder count. Rendering is all-or-nothing: no partial output
    /// is produced.
    #[error("expected {expected} substitution value(s), got {supplied}")]
    ArityMismatch { expected: usize, supplied: usize },

    /// The trailing repeat count is missing, negative, or not an integer.
    #[error("invalid repeat count: {0}")]
    InvalidCount(String),
}

/// Result type for restamp operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

#[cfg(test)]
mod tests {
    use super::*;
    use restamp_scanner::DelimiterPair;

    #[test]
    fn arity_display_names_both_counts() {
        let err = TemplateError::ArityMismatch {
            expected: 2,
            supplied: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains('2'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn configuration_wraps_delimiter_error() {
        let delim_err = DelimiterPair::new("", ")*").unwrap_err();
        let err: TemplateError = delim_err.into();
        assert!(matches!(err, TemplateError::Configuration(_)));
        assert!(err.to_string().contains("open"));
    }

    #[test]
    fn invalid_count_carries_offender() {
        let err = TemplateError::InvalidCount("'quick' is not an integer".to_string());
        assert!(err.to_string().contains("quick"));
    }
}
