//! Custom error types for spendlog
//!
//! The validation taxonomy is intentionally small: expense entry can fail on
//! amount, description, or date, checked in that order, and the first failing
//! rule produces the single message shown to the user. The query and export
//! functions are total and never surface errors of their own beyond I/O.

use thiserror::Error;

/// The main error type for spendlog operations
#[derive(Error, Debug)]
pub enum SpendlogError {
    /// Amount field missing, not numeric, or negative
    #[error("Please enter a valid amount")]
    InvalidAmount,

    /// Description field empty
    #[error("Please enter a description")]
    MissingDescription,

    /// Date field empty or not a valid calendar date
    #[error("Please select a date")]
    MissingDate,

    /// Expense lookup by id failed
    #[error("Expense not found: {0}")]
    NotFound(String),

    /// CSV export errors
    #[error("Export error: {0}")]
    Export(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl SpendlogError {
    /// Check if this is one of the form-validation errors
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount | Self::MissingDescription | Self::MissingDate
        )
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<std::io::Error> for SpendlogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for spendlog operations
pub type SpendlogResult<T> = Result<T, SpendlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            SpendlogError::InvalidAmount.to_string(),
            "Please enter a valid amount"
        );
        assert_eq!(
            SpendlogError::MissingDescription.to_string(),
            "Please enter a description"
        );
        assert_eq!(
            SpendlogError::MissingDate.to_string(),
            "Please select a date"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(SpendlogError::InvalidAmount.is_validation());
        assert!(SpendlogError::MissingDate.is_validation());
        assert!(!SpendlogError::NotFound("abc".into()).is_validation());
        assert!(SpendlogError::NotFound("abc".into()).is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SpendlogError = io_err.into();
        assert!(matches!(err, SpendlogError::Io(_)));
    }
}
