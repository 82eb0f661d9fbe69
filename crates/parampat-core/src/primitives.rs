//! # Innate Primitives
//!
//! Hardcoded constants shared by the pattern engine.
//!
//! These values are part of the textual format: a description or a
//! converted value written by one version of parampat must stay readable by
//! every later version, so none of them may change.

// =============================================================================
// SEPARATOR TABLES
// =============================================================================

/// List separators, indexed by `list_rank - 1`.
///
/// The outermost sequence of a nested value uses the deepest entry, so that
/// `Vec<Vec<i32>>` renders as `1, 2; 3, 4`.
pub const LIST_SEPARATORS: [&str; 4] = [",", ";", "|", "%"];

/// Key/value separators, indexed by `map_rank - 1`.
pub const MAP_SEPARATORS: [&str; 4] = [":", "=", "@", "#"];

/// Deepest nesting the separator tables can express.
pub const MAX_RANK: usize = LIST_SEPARATORS.len();

/// Default separator between list elements and map entries.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Default separator between a key and its value.
pub const DEFAULT_KEY_VALUE_SEPARATOR: &str = ":";

// =============================================================================
// ELEMENT COUNT LIMITS
// =============================================================================

/// Largest element count a List or Map can require.
///
/// Used as the default upper bound, meaning "no limit".
pub const MAX_ELEMENTS: u32 = u32::MAX;

// =============================================================================
// MACHINE DESCRIPTION TOKENS
// =============================================================================

pub const INTEGER_PREFIX: &str = "[Integer";
pub const DOUBLE_PREFIX: &str = "[Double";
pub const SELECTION_PREFIX: &str = "[Selection";
pub const MULTIPLE_SELECTION_PREFIX: &str = "[MultipleSelection";
pub const BOOL_PREFIX: &str = "[Bool";
pub const ANYTHING_PREFIX: &str = "[Anything";
pub const FILE_NAME_PREFIX: &str = "[FileName";
pub const DIRECTORY_NAME_PREFIX: &str = "[DirectoryName";
pub const LIST_PREFIX: &str = "[List";
pub const MAP_PREFIX: &str = "[Map";

/// Stand-in for `-f64::MAX` in Double descriptions.
pub const MIN_DOUBLE_TOKEN: &str = "-MAX_DOUBLE";

/// Stand-in for `f64::MAX` in Double descriptions.
pub const MAX_DOUBLE_TOKEN: &str = "MAX_DOUBLE";
