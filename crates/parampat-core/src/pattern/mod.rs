//! # Pattern Module
//!
//! The closed set of string grammars a parameter value can be checked
//! against.
//!
//! Every kind implements [`PatternKind`]: it validates strings, describes
//! itself in any [`OutputStyle`], and can be rebuilt from its Machine
//! description. [`Pattern`] is the sum type over all kinds; it is what
//! composite patterns own and what the factory and the converter hand out.
//!
//! ## Kinds
//!
//! | Kind | Accepts |
//! |------|---------|
//! | [`Integer`] | an integer, optionally within inclusive bounds |
//! | [`Double`] | a floating point number, optionally within inclusive bounds |
//! | [`Selection`] | exactly one of a fixed set of words |
//! | [`MultipleSelection`] | a comma-separated list of words from a fixed set |
//! | [`Bool`] | `true` or `false` |
//! | [`Anything`] | any string |
//! | [`FileName`] | any string, tagged as an input or output file |
//! | [`DirectoryName`] | any string, tagged as a directory |
//! | [`List`] | delimited elements matching one nested pattern |
//! | [`Map`] | delimited `key: value` entries matching two nested patterns |

mod composite;
mod numeric;
mod selection;
mod text;

pub use composite::{List, Map};
pub use numeric::{Double, Integer};
pub use selection::{Bool, MultipleSelection, Selection};
pub use text::{Anything, DirectoryName, FileName};

use crate::factory::pattern_factory;
use crate::types::{OutputStyle, PatternError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// PATTERN KIND TRAIT
// =============================================================================

/// Behaviour shared by every concrete pattern.
///
/// The set of implementors is closed: the factory enumerates all of them,
/// and [`Pattern`] has one variant per implementor.
pub trait PatternKind: Clone + Into<Pattern> {
    /// Leading token of this kind's Machine description.
    const PREFIX: &'static str;

    /// Return `true` if `test` is accepted by this pattern.
    ///
    /// Total: never fails, whatever the input.
    fn is_match(&self, test: &str) -> bool;

    /// Describe the accepted grammar.
    fn description(&self, style: OutputStyle) -> String;

    /// Rebuild a pattern from a Machine description.
    ///
    /// Returns `None` when the description was not produced by this kind.
    fn create(description: &str) -> Option<Self>;
}

// =============================================================================
// PATTERN
// =============================================================================

/// Any pattern.
///
/// Cloning is deep: a cloned List or Map owns its own copies of the nested
/// patterns.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Integer(Integer),
    Double(Double),
    Selection(Selection),
    MultipleSelection(MultipleSelection),
    Bool(Bool),
    Anything(Anything),
    FileName(FileName),
    DirectoryName(DirectoryName),
    List(List),
    Map(Map),
}

macro_rules! dispatch {
    ($self:expr, $p:ident => $body:expr) => {
        match $self {
            Pattern::Integer($p) => $body,
            Pattern::Double($p) => $body,
            Pattern::Selection($p) => $body,
            Pattern::MultipleSelection($p) => $body,
            Pattern::Bool($p) => $body,
            Pattern::Anything($p) => $body,
            Pattern::FileName($p) => $body,
            Pattern::DirectoryName($p) => $body,
            Pattern::List($p) => $body,
            Pattern::Map($p) => $body,
        }
    };
}

macro_rules! impl_from_kind {
    ($($kind:ident),* $(,)?) => {
        $(
            impl From<$kind> for Pattern {
                fn from(pattern: $kind) -> Self {
                    Pattern::$kind(pattern)
                }
            }
        )*
    };
}

impl_from_kind!(
    Integer,
    Double,
    Selection,
    MultipleSelection,
    Bool,
    Anything,
    FileName,
    DirectoryName,
    List,
    Map,
);

impl Pattern {
    /// Return `true` if `test` is accepted by this pattern.
    pub fn is_match(&self, test: &str) -> bool {
        dispatch!(self, p => p.is_match(test))
    }

    /// Describe the accepted grammar in the given style.
    pub fn description(&self, style: OutputStyle) -> String {
        dispatch!(self, p => p.description(style))
    }

    /// Name of the concrete kind, e.g. `"List"`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "Integer",
            Self::Double(_) => "Double",
            Self::Selection(_) => "Selection",
            Self::MultipleSelection(_) => "MultipleSelection",
            Self::Bool(_) => "Bool",
            Self::Anything(_) => "Anything",
            Self::FileName(_) => "FileName",
            Self::DirectoryName(_) => "DirectoryName",
            Self::List(_) => "List",
            Self::Map(_) => "Map",
        }
    }

    /// The List inside, if this is a List pattern.
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// The Map inside, if this is a Map pattern.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description(OutputStyle::Machine))
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(description: &str) -> Result<Self, Self::Err> {
        pattern_factory(description)
    }
}

// =============================================================================
// SERDE
// =============================================================================

// A pattern travels as its Machine description.

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.description(OutputStyle::Machine))
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let description = String::deserialize(deserializer)?;
        pattern_factory(&description).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileType;

    fn every_kind() -> Vec<Pattern> {
        vec![
            Integer::new(0, 10).into(),
            Double::default().into(),
            Selection::new("a|b").into(),
            MultipleSelection::new("a|b").expect("no commas").into(),
            Bool.into(),
            Anything.into(),
            FileName::new(FileType::Output).into(),
            DirectoryName.into(),
            List::of(Integer::default()).into(),
            Map::of(Anything, Bool).into(),
        ]
    }

    #[test]
    fn kind_names_match_variants() {
        let names: Vec<_> = every_kind().iter().map(Pattern::kind_name).collect();
        assert_eq!(
            names,
            vec![
                "Integer",
                "Double",
                "Selection",
                "MultipleSelection",
                "Bool",
                "Anything",
                "FileName",
                "DirectoryName",
                "List",
                "Map",
            ]
        );
    }

    #[test]
    fn machine_description_prefix_matches_kind() {
        for pattern in every_kind() {
            let description = pattern.to_string();
            let expected = format!("[{}", pattern.kind_name());
            assert!(
                description.starts_with(&expected),
                "{description} should start with {expected}"
            );
        }
    }

    #[test]
    fn from_str_round_trips_every_kind() {
        for pattern in every_kind() {
            let rebuilt: Pattern = pattern.to_string().parse().expect("recognised");
            assert_eq!(rebuilt.to_string(), pattern.to_string());
        }
    }

    #[test]
    fn clone_is_independent() {
        let original: Pattern = List::of(List::of(Integer::new(1, 3))).into();
        let copy = original.clone();
        drop(original);
        assert!(copy.is_match("1, 2"));
        assert!(!copy.is_match("4"));
    }

    #[test]
    fn accessors_pick_composites() {
        let list: Pattern = List::of(Bool).into();
        let map: Pattern = Map::of(Anything, Bool).into();
        assert!(list.as_list().is_some());
        assert!(list.as_map().is_none());
        assert!(map.as_map().is_some());
        assert!(Pattern::from(Bool).as_list().is_none());
    }

    #[test]
    fn serde_uses_machine_description() {
        let pattern: Pattern = Integer::new(1, 5).into();
        let json = serde_json::to_string(&pattern).expect("serialize");
        assert_eq!(json, "\"[Integer range 1...5 (inclusive)]\"");

        let back: Pattern = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, pattern);
    }

    #[test]
    fn serde_rejects_unknown_description() {
        let result: Result<Pattern, _> = serde_json::from_str("\"[Colour]\"");
        assert!(result.is_err());
    }

    #[test]
    fn patterns_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pattern>();
    }
}
