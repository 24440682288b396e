//! Error types for preprocessing operations.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for loading, transforming and writing a table.
#[derive(Error, Debug)]
pub enum PreprocessingError {
    /// The input file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited input or a failed write.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A column does not hold the kind of values an operation needs.
    #[error("Column '{column}' has the wrong type: expected {expected}, got {got}")]
    ColumnType {
        column: String,
        expected: &'static str,
        got: &'static str,
    },

    /// Numerical computation error (domain error, overflow).
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// A column's length disagrees with the table's row count.
    #[error("Length mismatch in column '{column}': expected {expected} rows, got {got}")]
    LengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },

    /// Feature dimension mismatch between fit and transform.
    #[error("Feature mismatch: expected {expected_features} features, got {got_features}")]
    FeatureMismatch {
        expected_features: usize,
        got_features: usize,
    },

    /// Two columns share a name.
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// Empty data provided where non-empty was required.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A value was not seen while fitting an encoder.
    #[error("Unknown label: {0}")]
    UnknownLabel(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PreprocessingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_not_found() {
        let err = PreprocessingError::FileNotFound(PathBuf::from("titanic_raw/titanic.csv"));
        let msg = err.to_string();
        assert!(msg.contains("File not found"));
        assert!(msg.contains("titanic_raw/titanic.csv"));
    }

    #[test]
    fn test_error_display_column_type() {
        let err = PreprocessingError::ColumnType {
            column: "SibSp".to_string(),
            expected: "numeric",
            got: "text",
        };
        assert!(err.to_string().contains("SibSp"));
        assert!(err.to_string().contains("expected numeric"));
    }

    #[test]
    fn test_error_display_numerical_error() {
        let err = PreprocessingError::NumericalError("log1p of -2".to_string());
        assert!(err.to_string().contains("Numerical error"));
    }

    #[test]
    fn test_error_display_length_mismatch() {
        let err = PreprocessingError::LengthMismatch {
            column: "Age".to_string(),
            expected: 3,
            got: 2,
        };
        assert!(err.to_string().contains("expected 3 rows, got 2"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let err: PreprocessingError = io_err.into();
        assert!(matches!(err, PreprocessingError::Io(_)));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = PreprocessingError::UnknownLabel("Z".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
