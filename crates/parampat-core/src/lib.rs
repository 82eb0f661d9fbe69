//! # parampat-core
//!
//! The pattern engine for parampat - THE LOGIC.
//!
//! Parameter values arrive as text. This crate decides whether a piece of
//! text is an acceptable value, explains what an acceptable value looks
//! like, and turns typed Rust values into text and back.
//!
//! ## Layers
//!
//! - `pattern`: the closed set of grammars (`Integer`, `Double`, `Selection`,
//!   `MultipleSelection`, `Bool`, `Anything`, `FileName`, `DirectoryName`,
//!   `List`, `Map`) behind the [`Pattern`] sum type
//! - `factory`: rebuilds a [`Pattern`] from its Machine description
//! - `rank`: compile-time nesting depth of value types
//! - `convert`: typed values to and from delimited text, with separators
//!   chosen by rank
//!
//! ## Architectural Constraints
//!
//! - Patterns are immutable once built and safe to share across threads
//! - No global mutable state: every operation is reentrant
//! - Has NO async, NO I/O (pure Rust)
//!
//! ## Example
//!
//! ```
//! use parampat_core::{pattern_factory, to_pattern, OutputStyle};
//!
//! let pattern = to_pattern::<Vec<u8>>().unwrap();
//! let description = pattern.description(OutputStyle::Machine);
//! assert_eq!(
//!     description,
//!     "[List of <[Integer range 0...255 (inclusive)]> of length 0...4294967295 (inclusive)]"
//! );
//!
//! let rebuilt = pattern_factory(&description).unwrap();
//! assert!(rebuilt.is_match("1, 2, 255"));
//! assert!(!rebuilt.is_match("1, 2, 256"));
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod convert;
mod description;
pub mod factory;
pub mod pattern;
pub mod primitives;
pub mod rank;
mod strings;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{FileType, OutputStyle, PatternError};

// =============================================================================
// RE-EXPORTS: Patterns
// =============================================================================

pub use factory::{FACTORY_ORDER, pattern_factory};
pub use pattern::{
    Anything, Bool, DirectoryName, Double, FileName, Integer, List, Map, MultipleSelection,
    Pattern, PatternKind, Selection,
};

// =============================================================================
// RE-EXPORTS: Conversion
// =============================================================================

pub use num_complex::Complex;

pub use convert::{Convert, to_pattern, to_string, to_string_with, to_value, to_value_with};
pub use rank::{Rank, rank_of};
