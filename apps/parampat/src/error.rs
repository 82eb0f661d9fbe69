//! # CLI Errors
//!
//! Everything that makes the binary exit with status 1.

use parampat_core::PatternError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the parampat binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Engine error: bad description, unsupported type, failed conversion.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("Cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("File size {size} bytes exceeds maximum allowed {max} bytes")]
    FileTooLarge { size: u64, max: u64 },

    #[error("Invalid parameter file '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// `check` was given a value the pattern rejects.
    #[error("The value \"{value}\" does not match the pattern \"{pattern}\"")]
    Mismatch { value: String, pattern: String },

    /// `validate` found parameters whose values are rejected.
    #[error("{failed} of {total} parameters failed validation")]
    ValidationFailed { failed: usize, total: usize },
}

// =============================================================================
// TESTS
// =============================================================================
