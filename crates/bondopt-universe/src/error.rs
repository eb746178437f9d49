//! Error types for universe handling.

use thiserror::Error;

/// Result type for universe operations.
pub type UniverseResult<T> = Result<T, UniverseError>;

/// Errors raised while reading a universe file.
#[derive(Error, Debug, Clone)]
pub enum UniverseError {
    /// The file could not be opened or read.
    #[error("Cannot read universe '{path}': {reason}")]
    Io {
        /// Path of the universe file.
        path: String,
        /// Underlying I/O or CSV error.
        reason: String,
    },

    /// A required column is missing from the header.
    #[error("Universe is missing column '{column}'")]
    MissingColumn {
        /// Expected column name.
        column: String,
    },

    /// A field could not be parsed.
    #[error("Line {line}: invalid {field} '{value}'")]
    InvalidField {
        /// 1-based line number in the file, header included.
        line: u64,
        /// Column name.
        field: String,
        /// Raw value.
        value: String,
    },

    /// A record could not be decoded.
    #[error("Line {line}: {reason}")]
    Record {
        /// 1-based line number in the file, header included.
        line: u64,
        /// Decoder message.
        reason: String,
    },
}

impl UniverseError {
    /// Create an I/O error.
    #[must_use]
    pub fn io(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::Io {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid field error.
    #[must_use]
    pub fn invalid_field(line: u64, field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidField {
            line,
            field: field.into(),
            value: value.into(),
        }
    }
}
