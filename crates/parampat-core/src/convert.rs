//! # Converter
//!
//! Typed values to and from delimited text.
//!
//! Every supported type knows its default [`Pattern`] and how to write
//! itself through, and read itself back from, a pattern of that shape.
//! Containers pick their separators from the tables in
//! [`crate::primitives`] by [`Rank`], so nested values never share a
//! delimiter with their parents:
//!
//! ```
//! use parampat_core::{to_string, to_value};
//!
//! let grid = vec![vec![1, 2, 3], vec![4, 5, 6]];
//! let text = to_string(&grid).unwrap();
//! assert_eq!(text, "1, 2, 3; 4, 5, 6");
//! assert_eq!(to_value::<Vec<Vec<i32>>>(&text).unwrap(), grid);
//! ```
//!
//! ## Contract
//!
//! - Input text is validated against the pattern BEFORE it is split.
//! - Output text is validated against the pattern AFTER it is joined; a
//!   failure there means the value cannot be written under that pattern.
//! - Splitting always uses the separators of the pattern passed in, never
//!   separators re-derived from the type.
//! - Separators are followed by one space on output (`a, b, c`).

use crate::pattern::{Anything, Bool, Double, Integer, List, Map, Pattern};
use crate::primitives::{LIST_SEPARATORS, MAP_SEPARATORS, MAX_ELEMENTS, MAX_RANK};
use crate::rank::Rank;
use crate::types::{OutputStyle, PatternError};
use num_complex::Complex;
use std::any::type_name;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

// =============================================================================
// CONVERT TRAIT
// =============================================================================

/// A value type that can be written to and read from pattern-checked text.
pub trait Convert: Rank + Sized {
    /// The pattern a value of this type is written under by default.
    ///
    /// Fails with `UnsupportedType` if the type nests deeper than the
    /// separator tables allow.
    fn to_pattern() -> Result<Pattern, PatternError>;

    /// Write `self` as text accepted by `pattern`.
    fn write_string(&self, pattern: &Pattern) -> Result<String, PatternError>;

    /// Read a value from `text`, which must be accepted by `pattern`.
    fn read_value(text: &str, pattern: &Pattern) -> Result<Self, PatternError>;
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Default pattern for `T`.
pub fn to_pattern<T: Convert>() -> Result<Pattern, PatternError> {
    T::to_pattern()
}

/// Write `value` under the default pattern for `T`.
pub fn to_string<T: Convert>(value: &T) -> Result<String, PatternError> {
    value.write_string(&T::to_pattern()?)
}

/// Write `value` under `pattern`.
pub fn to_string_with<T: Convert>(value: &T, pattern: &Pattern) -> Result<String, PatternError> {
    value.write_string(pattern)
}

/// Read a `T` from text checked against the default pattern for `T`.
pub fn to_value<T: Convert>(text: &str) -> Result<T, PatternError> {
    T::read_value(text, &T::to_pattern()?)
}

/// Read a `T` from text checked against `pattern`.
pub fn to_value_with<T: Convert>(text: &str, pattern: &Pattern) -> Result<T, PatternError> {
    T::read_value(text, pattern)
}

// =============================================================================
// HELPERS
// =============================================================================

fn ensure_match(text: &str, pattern: &Pattern) -> Result<(), PatternError> {
    if pattern.is_match(text) {
        return Ok(());
    }
    let description = pattern.description(OutputStyle::Machine);
    tracing::debug!(value = text, pattern = %description, "value does not match pattern");
    Err(PatternError::NoMatch {
        value: text.to_string(),
        pattern: description,
    })
}

fn conversion_error<T>(text: &str) -> PatternError {
    PatternError::Conversion {
        value: text.to_string(),
        type_name: type_name::<T>(),
    }
}

fn unsupported<T>(reason: String) -> PatternError {
    PatternError::UnsupportedType {
        type_name: type_name::<T>(),
        reason,
    }
}

/// Separator for 1-based nesting `depth` from `table`.
fn separator_at<T>(table: &[&'static str; MAX_RANK], depth: usize, what: &str) -> Result<&'static str, PatternError> {
    depth
        .checked_sub(1)
        .and_then(|index| table.get(index))
        .copied()
        .ok_or_else(|| {
            unsupported::<T>(format!(
                "{what} nesting depth {depth} is outside 1..={MAX_RANK}"
            ))
        })
}

fn list_separator<T>(depth: usize) -> Result<&'static str, PatternError> {
    separator_at::<T>(&LIST_SEPARATORS, depth, "list")
}

fn map_separator<T>(depth: usize) -> Result<&'static str, PatternError> {
    separator_at::<T>(&MAP_SEPARATORS, depth, "map")
}

fn expect_list<'p, T>(pattern: &'p Pattern) -> Result<&'p List, PatternError> {
    pattern.as_list().ok_or_else(|| PatternError::WrongPatternKind {
        type_name: type_name::<T>(),
        expected: "List",
        found: pattern.to_string(),
    })
}

fn expect_map<'p, T>(pattern: &'p Pattern) -> Result<&'p Map, PatternError> {
    pattern.as_map().ok_or_else(|| PatternError::WrongPatternKind {
        type_name: type_name::<T>(),
        expected: "Map",
        found: pattern.to_string(),
    })
}

fn sequence_pattern<T: Rank, E: Convert>(min: u32, max: u32) -> Result<Pattern, PatternError> {
    let separator = list_separator::<T>(T::LIST_RANK)?;
    Ok(List::new(E::to_pattern()?, min, max, separator)?.into())
}

fn write_sequence<'v, T, E: Convert + 'v>(
    items: impl IntoIterator<Item = &'v E>,
    pattern: &Pattern,
) -> Result<String, PatternError> {
    let list = expect_list::<T>(pattern)?;
    let parts = items
        .into_iter()
        .map(|item| item.write_string(list.element_pattern()))
        .collect::<Result<Vec<_>, _>>()?;
    let text = parts.join(&format!("{} ", list.separator()));
    ensure_match(&text, pattern)?;
    Ok(text)
}

fn read_sequence<T, E: Convert, C: FromIterator<E>>(
    text: &str,
    pattern: &Pattern,
) -> Result<C, PatternError> {
    ensure_match(text, pattern)?;
    let list = expect_list::<T>(pattern)?;
    list.split(text)
        .into_iter()
        .map(|piece| E::read_value(piece, list.element_pattern()))
        .collect()
}

fn map_pattern<T: Rank, K: Convert, V: Convert>(
    min: u32,
    max: u32,
    list_depth: usize,
) -> Result<Pattern, PatternError> {
    let separator = list_separator::<T>(list_depth)?;
    let key_value_separator = map_separator::<T>(T::MAP_RANK)?;
    let map = Map::new(
        K::to_pattern()?,
        V::to_pattern()?,
        min,
        max,
        separator,
        key_value_separator,
    )?;
    Ok(map.into())
}

fn write_entries<'v, T, K: Convert + 'v, V: Convert + 'v>(
    entries: impl IntoIterator<Item = (&'v K, &'v V)>,
    pattern: &Pattern,
) -> Result<String, PatternError> {
    let map = expect_map::<T>(pattern)?;
    let parts = entries
        .into_iter()
        .map(|(key, value)| {
            Ok(format!(
                "{}{} {}",
                key.write_string(map.key_pattern())?,
                map.key_value_separator(),
                value.write_string(map.value_pattern())?
            ))
        })
        .collect::<Result<Vec<_>, PatternError>>()?;
    let text = parts.join(&format!("{} ", map.separator()));
    ensure_match(&text, pattern)?;
    Ok(text)
}

fn read_entries<T, K: Convert, V: Convert, C: FromIterator<(K, V)>>(
    text: &str,
    pattern: &Pattern,
) -> Result<C, PatternError> {
    ensure_match(text, pattern)?;
    let map = expect_map::<T>(pattern)?;
    map.split(text)
        .into_iter()
        .map(|entry| -> Result<(K, V), PatternError> {
            let (key, value) = map
                .split_entry(entry)
                .ok_or_else(|| conversion_error::<T>(entry))?;
            Ok((
                K::read_value(key, map.key_pattern())?,
                V::read_value(value, map.value_pattern())?,
            ))
        })
        .collect()
}

// =============================================================================
// SCALARS
// =============================================================================

macro_rules! impl_convert_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Convert for $ty {
                fn to_pattern() -> Result<Pattern, PatternError> {
                    Ok(Integer::new(<$ty>::MIN as i128, <$ty>::MAX as i128).into())
                }

                fn write_string(&self, pattern: &Pattern) -> Result<String, PatternError> {
                    let text = self.to_string();
                    ensure_match(&text, pattern)?;
                    Ok(text)
                }

                fn read_value(text: &str, pattern: &Pattern) -> Result<Self, PatternError> {
                    ensure_match(text, pattern)?;
                    // Wide first, then narrow: `u8` reads "65" as 65, not as 'A'.
                    text.trim()
                        .parse::<i128>()
                        .ok()
                        .and_then(|wide| Self::try_from(wide).ok())
                        .ok_or_else(|| conversion_error::<Self>(text))
                }
            }
        )*
    };
}

impl_convert_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_convert_for_float {
    ($($ty:ty => $max:expr),* $(,)?) => {
        $(
            impl Convert for $ty {
                fn to_pattern() -> Result<Pattern, PatternError> {
                    let max: f64 = $max;
                    Ok(Double::new(-max, max).into())
                }

                fn write_string(&self, pattern: &Pattern) -> Result<String, PatternError> {
                    let text = self.to_string();
                    ensure_match(&text, pattern)?;
                    Ok(text)
                }

                fn read_value(text: &str, pattern: &Pattern) -> Result<Self, PatternError> {
                    ensure_match(text, pattern)?;
                    text.trim()
                        .parse::<$ty>()
                        .map_err(|_| conversion_error::<Self>(text))
                }
            }
        )*
    };
}

// `f32::MAX` prints as its shortest decimal, 3.4028235e38, which is above
// `f64::from(f32::MAX)`. The bound must admit the text that is written.
impl_convert_for_float!(f32 => 3.402_823_5e38, f64 => f64::MAX);

impl Convert for bool {
    fn to_pattern() -> Result<Pattern, PatternError> {
        Ok(Bool.into())
    }

    fn write_string(&self, pattern: &Pattern) -> Result<String, PatternError> {
        let text = if *self { "true" } else { "false" }.to_string();
        ensure_match(&text, pattern)?;
        Ok(text)
    }

    fn read_value(text: &str, pattern: &Pattern) -> Result<Self, PatternError> {
        ensure_match(text, pattern)?;
        match text.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(conversion_error::<Self>(text)),
        }
    }
}

impl Convert for String {
    fn to_pattern() -> Result<Pattern, PatternError> {
        Ok(Anything.into())
    }

    fn write_string(&self, pattern: &Pattern) -> Result<String, PatternError> {
        ensure_match(self, pattern)?;
        Ok(self.clone())
    }

    fn read_value(text: &str, pattern: &Pattern) -> Result<Self, PatternError> {
        ensure_match(text, pattern)?;
        Ok(text.to_string())
    }
}

// =============================================================================
// SEQUENCES
// =============================================================================

macro_rules! impl_convert_for_sequence {
    ($($coll:ident<E $(: $bound:path)?>),* $(,)?) => {
        $(
            impl<E: Convert $(+ $bound)?> Convert for $coll<E> {
                fn to_pattern() -> Result<Pattern, PatternError> {
                    sequence_pattern::<Self, E>(0, MAX_ELEMENTS)
                }

                fn write_string(&self, pattern: &Pattern) -> Result<String, PatternError> {
                    write_sequence::<Self, E>(self, pattern)
                }

                fn read_value(text: &str, pattern: &Pattern) -> Result<Self, PatternError> {
                    read_sequence::<Self, E, Self>(text, pattern)
                }
            }
        )*
    };
}

impl_convert_for_sequence!(Vec<E>, VecDeque<E>, LinkedList<E>, BTreeSet<E: Ord>);

impl<E, S> Convert for HashSet<E, S>
where
    E: Convert + Eq + Hash,
    S: BuildHasher + Default,
{
    fn to_pattern() -> Result<Pattern, PatternError> {
        sequence_pattern::<Self, E>(0, MAX_ELEMENTS)
    }

    fn write_string(&self, pattern: &Pattern) -> Result<String, PatternError> {
        write_sequence::<Self, E>(self, pattern)
    }

    fn read_value(text: &str, pattern: &Pattern) -> Result<Self, PatternError> {
        read_sequence::<Self, E, Self>(text, pattern)
    }
}

/// Fixed-size arrays: exactly `N` elements.
impl<E: Convert, const N: usize> Convert for [E; N] {
    fn to_pattern() -> Result<Pattern, PatternError> {
        let n = u32::try_from(N)
            .map_err(|_| unsupported::<Self>(format!("{N} elements exceed the List limit")))?;
        sequence_pattern::<Self, E>(n, n)
    }

    fn write_string(&self, pattern: &Pattern) -> Result<String, PatternError> {
        write_sequence::<Self, E>(self, pattern)
    }

    fn read_value(text: &str, pattern: &Pattern) -> Result<Self, PatternError> {
        let items: Vec<E> = read_sequence::<Self, E, _>(text, pattern)?;
        Self::try_from(items).map_err(|_| conversion_error::<Self>(text))
    }
}

/// Complex numbers: `re, im`.
impl<E: Convert> Convert for Complex<E> {
    fn to_pattern() -> Result<Pattern, PatternError> {
        sequence_pattern::<Self, E>(2, 2)
    }

    fn write_string(&self, pattern: &Pattern) -> Result<String, PatternError> {
        write_sequence::<Self, E>([&self.re, &self.im], pattern)
    }

    fn read_value(text: &str, pattern: &Pattern) -> Result<Self, PatternError> {
        let items: Vec<E> = read_sequence::<Self, E, _>(text, pattern)?;
        let [re, im]: [E; 2] = items
            .try_into()
            .map_err(|_| conversion_error::<Self>(text))?;
        Ok(Self::new(re, im))
    }
}

// =============================================================================
// MAPS AND PAIRS
// =============================================================================

impl<K: Convert + Ord, V: Convert> Convert for BTreeMap<K, V> {
    fn to_pattern() -> Result<Pattern, PatternError> {
        map_pattern::<Self, K, V>(0, MAX_ELEMENTS, Self::LIST_RANK)
    }

    fn write_string(&self, pattern: &Pattern) -> Result<String, PatternError> {
        write_entries::<Self, K, V>(self, pattern)
    }

    fn read_value(text: &str, pattern: &Pattern) -> Result<Self, PatternError> {
        read_entries::<Self, K, V, Self>(text, pattern)
    }
}

impl<K, V, S> Convert for HashMap<K, V, S>
where
    K: Convert + Eq + Hash,
    V: Convert,
    S: BuildHasher + Default,
{
    fn to_pattern() -> Result<Pattern, PatternError> {
        map_pattern::<Self, K, V>(0, MAX_ELEMENTS, Self::LIST_RANK)
    }

    fn write_string(&self, pattern: &Pattern) -> Result<String, PatternError> {
        write_entries::<Self, K, V>(self, pattern)
    }

    fn read_value(text: &str, pattern: &Pattern) -> Result<Self, PatternError> {
        read_entries::<Self, K, V, Self>(text, pattern)
    }
}

/// Pairs: a map with exactly one entry.
///
/// The entry separator sits one level above the pair's own list rank; it
/// never appears in the text, but keeps the description distinct from the
/// pair's children.
impl<K: Convert, V: Convert> Convert for (K, V) {
    fn to_pattern() -> Result<Pattern, PatternError> {
        map_pattern::<Self, K, V>(1, 1, Self::LIST_RANK + 1)
    }

    fn write_string(&self, pattern: &Pattern) -> Result<String, PatternError> {
        write_entries::<Self, K, V>([(&self.0, &self.1)], pattern)
    }

    fn read_value(text: &str, pattern: &Pattern) -> Result<Self, PatternError> {
        let entries: Vec<(K, V)> = read_entries::<Self, K, V, _>(text, pattern)?;
        let mut entries = entries.into_iter();
        match (entries.next(), entries.next()) {
            (Some(pair), None) => Ok(pair),
            _ => Err(conversion_error::<Self>(text)),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_vectors_pick_deeper_separator_outside() {
        let grid = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let text = to_string(&grid).expect("write");
        assert_eq!(text, "1, 2, 3; 4, 5, 6");
        assert_eq!(to_value::<Vec<Vec<i32>>>(&text).expect("read"), grid);

        let pattern = to_pattern::<Vec<Vec<i32>>>().expect("pattern");
        let outer = pattern.as_list().expect("list");
        assert_eq!(outer.separator(), ";");
        assert_eq!(outer.element_pattern().as_list().map(List::separator), Some(","));
    }

    #[test]
    fn integer_patterns_follow_type_limits() {
        assert_eq!(
            to_pattern::<u8>().expect("pattern").to_string(),
            "[Integer range 0...255 (inclusive)]"
        );
        assert_eq!(to_value::<u8>("255"), Ok(255));
        assert!(matches!(to_value::<u8>("256"), Err(PatternError::NoMatch { .. })));
        assert_eq!(to_value::<i8>(" -128 "), Ok(-128));
        assert_eq!(to_value::<u64>("18446744073709551615"), Ok(u64::MAX));
    }

    #[test]
    fn small_integers_read_as_numbers() {
        assert_eq!(to_value::<u8>("65"), Ok(65));
        assert!(to_value::<u8>("A").is_err());
    }

    #[test]
    fn floats_round_trip_exactly() {
        for value in [0.1, -2.5e-8, 1.0 / 3.0, 12345.678] {
            let text = to_string(&value).expect("write");
            assert_eq!(to_value::<f64>(&text), Ok(value));
        }
        assert_eq!(to_value::<f32>("0.25"), Ok(0.25f32));
    }

    #[test]
    fn f32_extremes_round_trip() {
        for value in [f32::MAX, f32::MIN, f32::MIN_POSITIVE, -0.1f32, 0.1f32] {
            let text = to_string(&value).expect("write");
            assert_eq!(to_value::<f32>(&text), Ok(value));
        }

        let values = vec![f32::MAX, f32::MIN];
        let text = to_string(&values).expect("write");
        assert_eq!(to_value::<Vec<f32>>(&text), Ok(values));
    }

    #[test]
    fn non_finite_floats_do_not_fit_default_pattern() {
        assert!(matches!(
            to_string(&f64::INFINITY),
            Err(PatternError::NoMatch { .. })
        ));
    }

    #[test]
    fn booleans_are_lowercase_words() {
        assert_eq!(to_string(&true), Ok("true".to_string()));
        assert_eq!(to_value::<bool>("false"), Ok(false));
        assert!(matches!(to_value::<bool>("True"), Err(PatternError::NoMatch { .. })));
    }

    #[test]
    fn strings_are_identity() {
        let text = "any text, even; with | separators".to_string();
        assert_eq!(to_string(&text).as_ref(), Ok(&text));
        assert_eq!(to_value::<String>(&text), Ok(text));
    }

    #[test]
    fn maps_write_key_value_entries() {
        let map = BTreeMap::from([("a".to_string(), 1), ("b".to_string(), 2)]);
        let text = to_string(&map).expect("write");
        assert_eq!(text, "a: 1, b: 2");
        assert_eq!(to_value::<BTreeMap<String, i32>>("a: 1, b: 2"), Ok(map));
    }

    #[test]
    fn map_values_split_on_first_separator() {
        let parsed = to_value::<BTreeMap<String, String>>("a:1:2").expect("read");
        assert_eq!(parsed.get("a").map(String::as_str), Some("1:2"));

        assert!(matches!(
            to_value::<BTreeMap<String, i32>>("a:1:2"),
            Err(PatternError::NoMatch { .. })
        ));
    }

    #[test]
    fn map_of_lists_uses_second_list_separator() {
        let map: HashMap<String, Vec<i32>> =
            HashMap::from([("xs".to_string(), vec![1, 2]), ("ys".to_string(), vec![3])]);
        let pattern = to_pattern::<HashMap<String, Vec<i32>>>().expect("pattern");
        let outer = pattern.as_map().expect("map");
        assert_eq!(outer.separator(), ";");
        assert_eq!(outer.key_value_separator(), ":");

        let text = to_string(&map).expect("write");
        assert_eq!(to_value::<HashMap<String, Vec<i32>>>(&text), Ok(map));
    }

    #[test]
    fn pairs_are_single_entry_maps() {
        let pair = ("alpha".to_string(), 3u16);
        let text = to_string(&pair).expect("write");
        assert_eq!(text, "alpha: 3");
        assert_eq!(to_value::<(String, u16)>(&text), Ok(pair));
        assert!(matches!(
            to_value::<(String, u16)>("a: 1, b: 2"),
            Err(PatternError::NoMatch { .. })
        ));
    }

    #[test]
    fn vector_of_pairs() {
        let pairs = vec![("a".to_string(), true), ("b".to_string(), false)];
        let text = to_string(&pairs).expect("write");
        assert_eq!(text, "a: true, b: false");
        assert_eq!(to_value::<Vec<(String, bool)>>(&text), Ok(pairs));
    }

    #[test]
    fn complex_is_real_then_imaginary() {
        let z = Complex::new(1.5, -2.0);
        let text = to_string(&z).expect("write");
        assert_eq!(text, "1.5, -2");
        assert_eq!(to_value::<Complex<f64>>(&text), Ok(z));
        assert!(matches!(
            to_value::<Complex<f64>>("1, 2, 3"),
            Err(PatternError::NoMatch { .. })
        ));
    }

    #[test]
    fn arrays_require_exact_length() {
        let point = [1.0, 2.0, 3.0];
        let text = to_string(&point).expect("write");
        assert_eq!(text, "1, 2, 3");
        assert_eq!(to_value::<[f64; 3]>(&text), Ok(point));
        assert!(matches!(
            to_value::<[f64; 3]>("1, 2"),
            Err(PatternError::NoMatch { .. })
        ));
    }

    #[test]
    fn array_length_mismatch_under_custom_pattern_is_conversion_error() {
        let loose: Pattern = List::of(Integer::default()).into();
        assert!(matches!(
            to_value_with::<[i32; 3]>("1, 2", &loose),
            Err(PatternError::Conversion { .. })
        ));
    }

    #[test]
    fn tensors_nest_arrays() {
        let tensor = [[1, 0], [0, 1]];
        let text = to_string(&tensor).expect("write");
        assert_eq!(text, "1, 0; 0, 1");
        assert_eq!(to_value::<[[i32; 2]; 2]>(&text), Ok(tensor));
    }

    #[test]
    fn conversion_uses_the_supplied_separators() {
        let pattern: Pattern = List::new(Integer::default(), 0, MAX_ELEMENTS, "|")
            .expect("valid")
            .into();
        let text = to_string_with(&vec![7, 8], &pattern).expect("write");
        assert_eq!(text, "7| 8");
        assert_eq!(to_value_with::<Vec<i32>>("7 | 8", &pattern), Ok(vec![7, 8]));
    }

    #[test]
    fn write_rejects_values_outside_pattern() {
        let pattern: Pattern = Integer::new(0, 10).into();
        assert_eq!(
            to_string_with(&20, &pattern),
            Err(PatternError::NoMatch {
                value: "20".to_string(),
                pattern: "[Integer range 0...10 (inclusive)]".to_string(),
            })
        );
    }

    #[test]
    fn wrong_pattern_kind_is_reported() {
        let pattern: Pattern = Map::of(Anything, Anything).into();
        assert!(matches!(
            to_value_with::<Vec<String>>("a: b", &pattern),
            Err(PatternError::WrongPatternKind { expected: "List", .. })
        ));
    }

    #[test]
    fn nesting_beyond_tables_is_unsupported() {
        assert!(to_pattern::<Vec<Vec<Vec<Vec<i32>>>>>().is_ok());
        assert!(matches!(
            to_pattern::<Vec<Vec<Vec<Vec<Vec<i32>>>>>>(),
            Err(PatternError::UnsupportedType { .. })
        ));
        assert!(matches!(
            to_string(&vec![vec![vec![vec![vec![1]]]]]),
            Err(PatternError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn sets_round_trip_as_sets() {
        let set: HashSet<u32> = HashSet::from([3, 1, 2]);
        let text = to_string(&set).expect("write");
        assert_eq!(to_value::<HashSet<u32>>(&text), Ok(set));

        let ordered = BTreeSet::from(["x".to_string(), "y".to_string()]);
        assert_eq!(to_string(&ordered), Ok("x, y".to_string()));
    }

    #[test]
    fn deques_and_linked_lists_keep_order() {
        let deque = VecDeque::from([3i64, -1, 2]);
        let text = to_string(&deque).expect("write");
        assert_eq!(text, "3, -1, 2");
        assert_eq!(to_value::<VecDeque<i64>>(&text), Ok(deque));

        let linked: LinkedList<String> = ["b", "a"].into_iter().map(String::from).collect();
        let text = to_string(&linked).expect("write");
        assert_eq!(text, "b, a");
        assert_eq!(to_value::<LinkedList<String>>(&text), Ok(linked));
    }

    #[test]
    fn lone_empty_inner_container_reads_back_as_nothing() {
        let nested: Vec<Vec<i32>> = vec![Vec::new()];
        let text = to_string(&nested).expect("write");
        assert_eq!(text, "");
        assert_eq!(to_value::<Vec<Vec<i32>>>(&text), Ok(Vec::new()));

        // Among other elements an empty inner container survives.
        let nested = vec![vec![1], Vec::new(), vec![2]];
        let text = to_string(&nested).expect("write");
        assert_eq!(text, "1; ; 2");
        assert_eq!(to_value::<Vec<Vec<i32>>>(&text), Ok(nested));
    }

    #[test]
    fn empty_containers_are_blank() {
        assert_eq!(to_string(&Vec::<i32>::new()), Ok(String::new()));
        assert_eq!(to_value::<Vec<i32>>(""), Ok(Vec::new()));
        assert_eq!(to_value::<BTreeMap<String, i32>>("  "), Ok(BTreeMap::new()));
    }
}
