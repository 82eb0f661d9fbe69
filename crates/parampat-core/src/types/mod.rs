//! # Core Type Definitions
//!
//! Small shared types used across the pattern engine:
//! - Description styles (`OutputStyle`)
//! - File name direction (`FileType`)
//! - Error types (`PatternError`)

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// OUTPUT STYLE
// =============================================================================

/// Rendering style for pattern descriptions.
///
/// The style changes wording and escaping only. A pattern accepts exactly the
/// same strings whichever style its description was rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Terse format that [`crate::pattern_factory`] can parse back.
    #[default]
    Machine,
    /// Plain text for documentation.
    Text,
    /// LaTeX for printed manuals.
    #[serde(rename = "latex")]
    LaTeX,
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Machine => "machine",
            Self::Text => "text",
            Self::LaTeX => "latex",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for OutputStyle {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "machine" => Ok(Self::Machine),
            "text" => Ok(Self::Text),
            "latex" => Ok(Self::LaTeX),
            other => Err(PatternError::UnknownStyle(other.to_string())),
        }
    }
}

// =============================================================================
// FILE TYPE
// =============================================================================

/// Whether a file name parameter is read from or written to.
///
/// Metadata only: it never affects which strings a `FileName` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    #[default]
    Input,
    Output,
}

impl FileType {
    /// Name used inside descriptions.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by the pattern engine.
///
/// A string that simply fails to match is NOT an error: `is_match` returns
/// `false`. These variants cover construction mistakes, unreadable
/// descriptions and conversions that were asked to proceed on bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A value handed to the converter does not satisfy the pattern.
    #[error("The string \"{value}\" does not match the pattern \"{pattern}\"")]
    NoMatch { value: String, pattern: String },

    /// List or Map element bounds with `max < min`.
    #[error("The values {min} and {max} do not form a valid range.")]
    InvalidRange { min: u32, max: u32 },

    /// A List or Map separator that cannot split text unambiguously.
    #[error("Invalid separator \"{separator}\": {reason}")]
    InvalidSeparator {
        separator: String,
        reason: &'static str,
    },

    /// A MultipleSelection option contains the reserved `,`.
    #[error(
        "A comma was found at position {position} of your input string, but commas are not allowed here."
    )]
    CommaInOption { position: usize },

    /// No pattern kind recognises this description.
    #[error("No pattern matches the description \"{0}\"")]
    UnrecognizedDescription(String),

    /// The value type has no usable pattern (for example nesting deeper
    /// than the separator tables).
    #[error("Cannot build a pattern for type {type_name}: {reason}")]
    UnsupportedType {
        type_name: &'static str,
        reason: String,
    },

    /// The converter was handed a pattern of the wrong kind for the type.
    #[error("Converting {type_name} needs a {expected} pattern, got \"{found}\"")]
    WrongPatternKind {
        type_name: &'static str,
        expected: &'static str,
        found: String,
    },

    /// Text passed validation but does not fit the target type.
    #[error("Failed to convert from \"{value}\" to the type \"{type_name}\"")]
    Conversion {
        value: String,
        type_name: &'static str,
    },

    /// Unknown description style name.
    #[error("Unknown output style \"{0}\" (expected machine, text or latex)")]
    UnknownStyle(String),
}

// =============================================================================
// TESTS
// =============================================================================
