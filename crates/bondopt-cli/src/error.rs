//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date: {0}. Use YYYY-MM-DD or MM/DD/YYYY.")]
    InvalidDate(String),

    /// No universe file given on the command line or in the config.
    #[error("No universe file. Pass --universe or set [universe] path in the config file.")]
    MissingUniverse,

    /// The universe file has no rows.
    #[error("Universe {0} contains no bonds")]
    EmptyUniverse(PathBuf),

    /// Configuration error.
    #[error("Configuration error in {path}: {reason}")]
    Config {
        /// Config file path.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// Refusing to overwrite an existing file.
    #[error("{0} already exists. Use --force to overwrite.")]
    AlreadyExists(PathBuf),

    /// No usable configuration directory on this platform.
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create a configuration error.
    pub fn config(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
