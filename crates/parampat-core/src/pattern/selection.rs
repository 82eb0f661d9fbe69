//! Enumerated patterns: one word, several words, or a boolean.

use super::PatternKind;
use crate::description::Cursor;
use crate::primitives::{BOOL_PREFIX, MULTIPLE_SELECTION_PREFIX, SELECTION_PREFIX};
use crate::strings::escape_latex;
use crate::types::{OutputStyle, PatternError};

fn parse_options(sequence: &str) -> Vec<String> {
    sequence
        .split('|')
        .map(|option| option.trim().to_string())
        .collect()
}

/// Body of a `[Prefix a|b|c ]` description.
///
/// The body runs to the LAST `]`, so options may themselves contain `]`.
fn options_body<'a>(description: &'a str, prefix: &str) -> Option<&'a str> {
    let body = description.trim().strip_prefix(prefix)?.strip_suffix(']')?;
    // The prefix must be followed by whitespace, otherwise "[SelectionX" would
    // pass for a Selection.
    if !body.is_empty() && !body.starts_with(' ') {
        return None;
    }
    Some(body.trim())
}

// =============================================================================
// SELECTION
// =============================================================================

/// Accepts exactly one of a fixed list of words.
///
/// Built from a `|`-separated specification such as `"red|blue|black"`;
/// whitespace around each option is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    options: Vec<String>,
}

impl Selection {
    pub fn new(sequence: &str) -> Self {
        Self {
            options: parse_options(sequence),
        }
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl PatternKind for Selection {
    const PREFIX: &'static str = SELECTION_PREFIX;

    fn is_match(&self, test: &str) -> bool {
        let test = test.trim();
        self.options.iter().any(|option| option == test)
    }

    fn description(&self, style: OutputStyle) -> String {
        match style {
            OutputStyle::Machine => format!("{SELECTION_PREFIX} {} ]", self.options.join("|")),
            OutputStyle::Text => format!("Any one of {}", self.options.join(", ")),
            OutputStyle::LaTeX => {
                format!("Any one of {}", escape_latex(&self.options.join(", ")))
            }
        }
    }

    fn create(description: &str) -> Option<Self> {
        options_body(description, SELECTION_PREFIX).map(Self::new)
    }
}

// =============================================================================
// MULTIPLE SELECTION
// =============================================================================

/// Accepts a comma-separated list of zero or more words from a fixed list.
///
/// Repeats are allowed and blank input is the empty list, but an empty
/// token such as the one after a trailing comma is not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MultipleSelection {
    options: Vec<String>,
}

impl MultipleSelection {
    /// Fails with `CommaInOption` if any option contains a comma.
    pub fn new(sequence: &str) -> Result<Self, PatternError> {
        if let Some(position) = sequence.find(',') {
            return Err(PatternError::CommaInOption { position });
        }
        Ok(Self {
            options: parse_options(sequence),
        })
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl PatternKind for MultipleSelection {
    const PREFIX: &'static str = MULTIPLE_SELECTION_PREFIX;

    fn is_match(&self, test: &str) -> bool {
        let test = test.trim();
        if test.is_empty() {
            return true;
        }
        test.split(',').map(str::trim).all(|token| {
            !token.is_empty() && self.options.iter().any(|option| option == token)
        })
    }

    fn description(&self, style: OutputStyle) -> String {
        match style {
            OutputStyle::Machine => {
                format!("{MULTIPLE_SELECTION_PREFIX} {} ]", self.options.join("|"))
            }
            OutputStyle::Text => {
                format!(
                    "A comma-separated list of any of {}",
                    self.options.join(", ")
                )
            }
            OutputStyle::LaTeX => format!(
                "A comma-separated list of any of {}",
                escape_latex(&self.options.join(", "))
            ),
        }
    }

    fn create(description: &str) -> Option<Self> {
        Self::new(options_body(description, MULTIPLE_SELECTION_PREFIX)?).ok()
    }
}

// =============================================================================
// BOOL
// =============================================================================

/// Accepts `true` or `false`, lowercase only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bool;

impl Bool {
    pub const OPTIONS: [&'static str; 2] = ["true", "false"];
}

impl PatternKind for Bool {
    const PREFIX: &'static str = BOOL_PREFIX;

    fn is_match(&self, test: &str) -> bool {
        Self::OPTIONS.contains(&test.trim())
    }

    fn description(&self, style: OutputStyle) -> String {
        match style {
            OutputStyle::Machine => format!("{BOOL_PREFIX}]"),
            OutputStyle::Text | OutputStyle::LaTeX => {
                "A boolean value (true or false)".to_string()
            }
        }
    }

    fn create(description: &str) -> Option<Self> {
        let mut c = Cursor::new(description);
        c.eat(BOOL_PREFIX)?;
        c.eat("]")?;
        c.finish()?;
        Some(Self)
    }
}

// =============================================================================
// TESTS
// =============================================================================
