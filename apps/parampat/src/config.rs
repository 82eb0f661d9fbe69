//! # Parameter Files
//!
//! TOML files listing parameters, each with the pattern its value must
//! satisfy:
//!
//! ```toml
//! [[parameter]]
//! name = "refinement_steps"
//! pattern = "[Integer range 0...10 (inclusive)]"
//! value = "3"
//! ```
//!
//! `pattern` holds a Machine description and is rebuilt through the pattern
//! factory while the file is parsed, so an unreadable description fails the
//! whole file.

use crate::error::CliError;
use parampat_core::{OutputStyle, Pattern};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum parameter file size (10 MB).
pub const MAX_PARAMETER_FILE_SIZE: u64 = 10 * 1024 * 1024;

// =============================================================================
// FILE FORMAT
// =============================================================================

/// One `[[parameter]]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub pattern: Pattern,
    pub value: String,
}

/// A whole parameter file.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ParameterFile {
    #[serde(default, rename = "parameter")]
    pub parameters: Vec<Parameter>,
}

impl ParameterFile {
    /// Parse a parameter file from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read and parse the parameter file at `path`.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let io_error = |source| CliError::Io {
            path: path.to_path_buf(),
            source,
        };
        let size = std::fs::metadata(path).map_err(io_error)?.len();
        if size > MAX_PARAMETER_FILE_SIZE {
            return Err(CliError::FileTooLarge {
                size,
                max: MAX_PARAMETER_FILE_SIZE,
            });
        }

        let text = std::fs::read_to_string(path).map_err(io_error)?;
        let file = Self::from_toml(&text).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            parameters = file.parameters.len(),
            "loaded parameter file"
        );
        Ok(file)
    }

    /// Check every parameter, in file order.
    pub fn validate(&self) -> Vec<ParameterReport> {
        self.parameters.iter().map(Parameter::check).collect()
    }
}

// =============================================================================
// REPORTS
// =============================================================================

/// Outcome of checking one parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterReport {
    pub name: String,
    pub value: String,
    pub matches: bool,
    /// Text description of what the value should look like.
    pub expected: String,
}

impl Parameter {
    /// Check this parameter's value against its pattern.
    pub fn check(&self) -> ParameterReport {
        let matches = self.pattern.is_match(&self.value);
        if !matches {
            tracing::debug!(name = %self.name, value = %self.value, "parameter rejected");
        }
        ParameterReport {
            name: self.name.clone(),
            value: self.value.clone(),
            matches,
            expected: self.pattern.description(OutputStyle::Text),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
