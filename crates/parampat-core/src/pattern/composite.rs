//! Composite patterns: delimited lists and key/value maps.
//!
//! Both own their nested patterns outright. Splitting is done on literal
//! separator strings, never regular expressions, and every piece is trimmed
//! before it is handed to the nested pattern.

use super::{Pattern, PatternKind};
use crate::description::Cursor;
use crate::factory::pattern_factory;
use crate::primitives::{
    DEFAULT_KEY_VALUE_SEPARATOR, DEFAULT_SEPARATOR, LIST_PREFIX, MAP_PREFIX, MAX_ELEMENTS,
};
use crate::strings::{escape_latex, split_list};
use crate::types::{OutputStyle, PatternError};

fn check_range(min: u32, max: u32) -> Result<(), PatternError> {
    if max < min {
        return Err(PatternError::InvalidRange { min, max });
    }
    Ok(())
}

fn check_separator(separator: &str) -> Result<(), PatternError> {
    if separator.trim().is_empty() {
        return Err(PatternError::InvalidSeparator {
            separator: separator.to_string(),
            reason: "separators must contain a non-whitespace character",
        });
    }
    Ok(())
}

fn count_in_range(count: usize, min: u32, max: u32) -> bool {
    (min as usize..=max as usize).contains(&count)
}

/// ` separated by <SEP>` for non-default separators, rendered for `style`.
fn separator_clause(separator: &str, style: OutputStyle) -> String {
    if separator == DEFAULT_SEPARATOR {
        return String::new();
    }
    match style {
        OutputStyle::Machine | OutputStyle::Text => format!("separated by <{separator}>"),
        OutputStyle::LaTeX => format!("separated by <{}>", escape_latex(separator)),
    }
}

/// Reads ` of length MIN...MAX (inclusive)[ separated by <SEP>]]`.
fn length_and_separator<'a>(c: &mut Cursor<'a>) -> Option<(u32, u32, &'a str)> {
    c.eat(" of length ")?;
    let min = c.number_until("...")?;
    let max = c.number_until(" (inclusive)")?;
    let separator = if c.eat_if(" separated by ") {
        c.group()?
    } else {
        DEFAULT_SEPARATOR
    };
    c.eat("]")?;
    Some((min, max, separator))
}

// =============================================================================
// LIST
// =============================================================================

/// Accepts `separator`-delimited elements that each match one nested
/// pattern, with between `min_elements` and `max_elements` of them.
///
/// Blank input is a list of zero elements.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    element: Box<Pattern>,
    min_elements: u32,
    max_elements: u32,
    separator: String,
}

impl List {
    /// Fails with `InvalidRange` if `max_elements < min_elements`, and with
    /// `InvalidSeparator` for a blank separator.
    pub fn new(
        element: impl Into<Pattern>,
        min_elements: u32,
        max_elements: u32,
        separator: impl Into<String>,
    ) -> Result<Self, PatternError> {
        let separator = separator.into();
        check_range(min_elements, max_elements)?;
        check_separator(&separator)?;
        Ok(Self {
            element: Box::new(element.into()),
            min_elements,
            max_elements,
            separator,
        })
    }

    /// Any number of comma-separated elements.
    pub fn of(element: impl Into<Pattern>) -> Self {
        Self {
            element: Box::new(element.into()),
            min_elements: 0,
            max_elements: MAX_ELEMENTS,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    #[must_use]
    pub fn element_pattern(&self) -> &Pattern {
        &self.element
    }

    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    #[must_use]
    pub const fn min_elements(&self) -> u32 {
        self.min_elements
    }

    #[must_use]
    pub const fn max_elements(&self) -> u32 {
        self.max_elements
    }

    /// Split `text` into trimmed elements the way matching does.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        split_list(text, &self.separator)
    }
}

impl PatternKind for List {
    const PREFIX: &'static str = LIST_PREFIX;

    fn is_match(&self, test: &str) -> bool {
        let elements = self.split(test);
        count_in_range(elements.len(), self.min_elements, self.max_elements)
            && elements.iter().all(|element| self.element.is_match(element))
    }

    fn description(&self, style: OutputStyle) -> String {
        let element = self.element.description(style);
        let (min, max) = (self.min_elements, self.max_elements);
        let clause = separator_clause(&self.separator, style);
        match style {
            OutputStyle::Machine => {
                let clause = if clause.is_empty() {
                    clause
                } else {
                    format!(" {clause}")
                };
                format!("{LIST_PREFIX} of <{element}> of length {min}...{max} (inclusive){clause}]")
            }
            OutputStyle::Text | OutputStyle::LaTeX => {
                let clause = if clause.is_empty() {
                    clause
                } else {
                    format!("{clause} ")
                };
                format!(
                    "A list of {min} to {max} elements {clause}where each element is [{element}]"
                )
            }
        }
    }

    fn create(description: &str) -> Option<Self> {
        let mut c = Cursor::new(description);
        c.eat(LIST_PREFIX)?;
        c.eat(" of ")?;
        let element = c.group()?;
        let (min, max, separator) = length_and_separator(&mut c)?;
        c.finish()?;
        let element = pattern_factory(element).ok()?;
        Self::new(element, min, max, separator).ok()
    }
}

// =============================================================================
// MAP
// =============================================================================

/// Accepts `separator`-delimited entries of the form
/// `key<key_value_separator>value`.
///
/// Each entry is split once, on the FIRST key/value separator: with the
/// default separators `a:1:2` is key `a` and value `1:2`. Both halves must be
/// non-empty after trimming.
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    key: Box<Pattern>,
    value: Box<Pattern>,
    min_elements: u32,
    max_elements: u32,
    separator: String,
    key_value_separator: String,
}

impl Map {
    /// Fails with `InvalidRange` if `max_elements < min_elements`, and with
    /// `InvalidSeparator` for blank or identical separators.
    pub fn new(
        key: impl Into<Pattern>,
        value: impl Into<Pattern>,
        min_elements: u32,
        max_elements: u32,
        separator: impl Into<String>,
        key_value_separator: impl Into<String>,
    ) -> Result<Self, PatternError> {
        let separator = separator.into();
        let key_value_separator = key_value_separator.into();
        check_range(min_elements, max_elements)?;
        check_separator(&separator)?;
        check_separator(&key_value_separator)?;
        if separator == key_value_separator {
            return Err(PatternError::InvalidSeparator {
                separator,
                reason: "entry and key/value separators must differ",
            });
        }
        Ok(Self {
            key: Box::new(key.into()),
            value: Box::new(value.into()),
            min_elements,
            max_elements,
            separator,
            key_value_separator,
        })
    }

    /// Any number of `key: value` entries separated by commas.
    pub fn of(key: impl Into<Pattern>, value: impl Into<Pattern>) -> Self {
        Self {
            key: Box::new(key.into()),
            value: Box::new(value.into()),
            min_elements: 0,
            max_elements: MAX_ELEMENTS,
            separator: DEFAULT_SEPARATOR.to_string(),
            key_value_separator: DEFAULT_KEY_VALUE_SEPARATOR.to_string(),
        }
    }

    #[must_use]
    pub fn key_pattern(&self) -> &Pattern {
        &self.key
    }

    #[must_use]
    pub fn value_pattern(&self) -> &Pattern {
        &self.value
    }

    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    #[must_use]
    pub fn key_value_separator(&self) -> &str {
        &self.key_value_separator
    }

    #[must_use]
    pub const fn min_elements(&self) -> u32 {
        self.min_elements
    }

    #[must_use]
    pub const fn max_elements(&self) -> u32 {
        self.max_elements
    }

    /// Split `text` into trimmed entries the way matching does.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        split_list(text, &self.separator)
    }

    /// Split one entry on the first key/value separator.
    ///
    /// `None` if the separator is missing or either half is blank.
    pub fn split_entry<'a>(&self, entry: &'a str) -> Option<(&'a str, &'a str)> {
        let (key, value) = entry.split_once(self.key_value_separator.as_str())?;
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            return None;
        }
        Some((key, value))
    }
}

impl PatternKind for Map {
    const PREFIX: &'static str = MAP_PREFIX;

    fn is_match(&self, test: &str) -> bool {
        let entries = self.split(test);
        count_in_range(entries.len(), self.min_elements, self.max_elements)
            && entries.iter().all(|entry| {
                self.split_entry(entry).is_some_and(|(key, value)| {
                    self.key.is_match(key) && self.value.is_match(value)
                })
            })
    }

    fn description(&self, style: OutputStyle) -> String {
        let key = self.key.description(style);
        let value = self.value.description(style);
        let (min, max) = (self.min_elements, self.max_elements);
        let clause = separator_clause(&self.separator, style);
        match style {
            OutputStyle::Machine => {
                let clause = if clause.is_empty() {
                    clause
                } else {
                    format!(" {clause}")
                };
                format!(
                    "{MAP_PREFIX} of <{key}>{}<{value}> of length {min}...{max} (inclusive){clause}]",
                    self.key_value_separator
                )
            }
            OutputStyle::Text | OutputStyle::LaTeX => {
                let kv = match style {
                    OutputStyle::LaTeX => escape_latex(&self.key_value_separator),
                    _ => self.key_value_separator.clone(),
                };
                let clause = if clause.is_empty() {
                    clause
                } else {
                    format!("{clause} ")
                };
                format!(
                    "A key{kv}value map of {min} to {max} elements {clause}where each key is [{key}] and each value is [{value}]"
                )
            }
        }
    }

    fn create(description: &str) -> Option<Self> {
        let mut c = Cursor::new(description);
        c.eat(MAP_PREFIX)?;
        c.eat(" of ")?;
        let key = c.group()?;
        let key_value_separator = c.take_until("<")?;
        let value = c.group()?;
        let (min, max, separator) = length_and_separator(&mut c)?;
        c.finish()?;
        let key = pattern_factory(key).ok()?;
        let value = pattern_factory(value).ok()?;
        Self::new(key, value, min, max, separator, key_value_separator).ok()
    }
}

// =============================================================================
// TESTS
// =============================================================================
