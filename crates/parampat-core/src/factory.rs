//! # Pattern Factory
//!
//! Rebuilds a [`Pattern`] from a Machine description.
//!
//! Each kind is tried in the order of [`FACTORY_ORDER`], narrow grammars
//! first, and the first kind that recognises the description wins. The
//! order is part of the contract and is pinned by tests: every kind's
//! prefix token is distinct today, but a kind added later must not shadow
//! a narrower one.

use crate::pattern::{
    Anything, Bool, DirectoryName, Double, FileName, Integer, List, Map, MultipleSelection,
    Pattern, PatternKind, Selection,
};
use crate::types::PatternError;

/// Builds one kind from a description, or declines.
pub type Constructor = fn(&str) -> Option<Pattern>;

fn construct<P: PatternKind>(description: &str) -> Option<Pattern> {
    P::create(description).map(Into::into)
}

/// Kinds in the order the factory tries them, keyed by their prefix token.
pub const FACTORY_ORDER: [(&str, Constructor); 10] = [
    (Integer::PREFIX, construct::<Integer>),
    (Double::PREFIX, construct::<Double>),
    (Bool::PREFIX, construct::<Bool>),
    (MultipleSelection::PREFIX, construct::<MultipleSelection>),
    (Selection::PREFIX, construct::<Selection>),
    (List::PREFIX, construct::<List>),
    (Map::PREFIX, construct::<Map>),
    (FileName::PREFIX, construct::<FileName>),
    (DirectoryName::PREFIX, construct::<DirectoryName>),
    (Anything::PREFIX, construct::<Anything>),
];

/// Return the pattern that produced `description`.
///
/// Fails with `UnrecognizedDescription` when no kind accepts it, which
/// means the description is corrupted or was not written by parampat.
pub fn pattern_factory(description: &str) -> Result<Pattern, PatternError> {
    let trimmed = description.trim();
    for (prefix, build) in FACTORY_ORDER {
        if !trimmed.starts_with(prefix) {
            continue;
        }
        tracing::trace!(prefix, "trying pattern kind");
        if let Some(pattern) = build(trimmed) {
            return Ok(pattern);
        }
    }
    tracing::debug!(description, "no pattern kind recognises description");
    Err(PatternError::UnrecognizedDescription(description.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FileType, OutputStyle};

    #[test]
    fn order_is_narrow_first() {
        let prefixes: Vec<_> = FACTORY_ORDER.iter().map(|(prefix, _)| *prefix).collect();
        assert_eq!(
            prefixes,
            vec![
                "[Integer",
                "[Double",
                "[Bool",
                "[MultipleSelection",
                "[Selection",
                "[List",
                "[Map",
                "[FileName",
                "[DirectoryName",
                "[Anything",
            ]
        );
    }

    #[test]
    fn bool_is_tried_before_selection_and_anything_last() {
        let position = |wanted: &str| FACTORY_ORDER.iter().position(|(p, _)| *p == wanted);
        assert!(position("[Bool") < position("[Selection"));
        assert!(position("[List") < position("[Anything"));
        assert!(position("[Map") < position("[Anything"));
        assert_eq!(position("[Anything"), Some(FACTORY_ORDER.len() - 1));
    }

    #[test]
    fn factory_rebuilds_each_kind() {
        let cases: Vec<Pattern> = vec![
            Integer::new(3, 4).into(),
            Double::new(-1.0, 1.0).into(),
            Bool.into(),
            MultipleSelection::new("x|y").expect("no commas").into(),
            Selection::new("x|y").into(),
            List::of(Bool).into(),
            Map::of(Integer::unbounded(), Double::unbounded()).into(),
            FileName::new(FileType::Input).into(),
            DirectoryName.into(),
            Anything.into(),
        ];
        for pattern in cases {
            let description = pattern.description(OutputStyle::Machine);
            let rebuilt = pattern_factory(&description).expect("recognised");
            assert_eq!(rebuilt.kind_name(), pattern.kind_name());
            assert_eq!(rebuilt.description(OutputStyle::Machine), description);
        }
    }

    #[test]
    fn factory_tolerates_surrounding_whitespace() {
        let pattern = pattern_factory("  [Bool]\n").expect("recognised");
        assert_eq!(pattern, Pattern::Bool(Bool));
    }

    #[test]
    fn factory_rejects_foreign_descriptions() {
        for description in [
            "",
            "Integer",
            "[Colour red]",
            "[Integer range 1...2]",
            "[List of <[Nope]> of length 0...1 (inclusive)]",
            "An integer n such that 0 <= n <= 10",
        ] {
            assert_eq!(
                pattern_factory(description),
                Err(PatternError::UnrecognizedDescription(
                    description.to_string()
                ))
            );
        }
    }
}
