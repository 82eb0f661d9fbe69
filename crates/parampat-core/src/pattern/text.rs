//! Free-text patterns. All of them accept every string; they differ only in
//! what they tell the reader about the value.

use super::PatternKind;
use crate::description::Cursor;
use crate::primitives::{ANYTHING_PREFIX, DIRECTORY_NAME_PREFIX, FILE_NAME_PREFIX};
use crate::types::{FileType, OutputStyle};

/// Accepts any string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Anything;

impl PatternKind for Anything {
    const PREFIX: &'static str = ANYTHING_PREFIX;

    fn is_match(&self, _test: &str) -> bool {
        true
    }

    fn description(&self, style: OutputStyle) -> String {
        match style {
            OutputStyle::Machine => format!("{ANYTHING_PREFIX}]"),
            OutputStyle::Text | OutputStyle::LaTeX => "Any string".to_string(),
        }
    }

    fn create(description: &str) -> Option<Self> {
        let mut c = Cursor::new(description);
        c.eat(ANYTHING_PREFIX)?;
        c.eat("]")?;
        c.finish()?;
        Some(Self)
    }
}

/// Accepts any string, naming a file to be read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FileName {
    file_type: FileType,
}

impl FileName {
    #[must_use]
    pub const fn new(file_type: FileType) -> Self {
        Self { file_type }
    }

    #[must_use]
    pub const fn file_type(&self) -> FileType {
        self.file_type
    }
}

impl PatternKind for FileName {
    const PREFIX: &'static str = FILE_NAME_PREFIX;

    fn is_match(&self, _test: &str) -> bool {
        true
    }

    fn description(&self, style: OutputStyle) -> String {
        let kind = self.file_type.as_str();
        match style {
            OutputStyle::Machine => format!("{FILE_NAME_PREFIX} (Type: {kind})]"),
            OutputStyle::Text | OutputStyle::LaTeX => format!("an {kind} filename"),
        }
    }

    fn create(description: &str) -> Option<Self> {
        let mut c = Cursor::new(description);
        c.eat(FILE_NAME_PREFIX)?;
        c.eat(" (Type: ")?;
        let file_type = match c.take_until(")]")? {
            "input" => FileType::Input,
            "output" => FileType::Output,
            _ => return None,
        };
        c.eat(")]")?;
        c.finish()?;
        Some(Self::new(file_type))
    }
}

/// Accepts any string, naming a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectoryName;

impl PatternKind for DirectoryName {
    const PREFIX: &'static str = DIRECTORY_NAME_PREFIX;

    fn is_match(&self, _test: &str) -> bool {
        true
    }

    fn description(&self, style: OutputStyle) -> String {
        match style {
            OutputStyle::Machine => format!("{DIRECTORY_NAME_PREFIX}]"),
            OutputStyle::Text | OutputStyle::LaTeX => "A directory name".to_string(),
        }
    }

    fn create(description: &str) -> Option<Self> {
        let mut c = Cursor::new(description);
        c.eat(DIRECTORY_NAME_PREFIX)?;
        c.eat("]")?;
        c.finish()?;
        Some(Self)
    }
}
