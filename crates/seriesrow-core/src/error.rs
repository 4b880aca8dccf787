//! Error types for seriesrow-core

use thiserror::Error;

/// Row model errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Value tuple {index} has {actual} values, expected {expected}")]
    ColumnCountMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Empty column name at position {0}")]
    EmptyColumnName(usize),

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),
}

/// Result type alias for row model operations
pub type Result<T> = std::result::Result<T, ModelError>;
