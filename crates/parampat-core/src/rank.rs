//! # Rank Inference
//!
//! How many levels of delimiters a value type needs when written as text.
//!
//! - `LIST_RANK` counts nested sequence levels and picks the list separator.
//! - `MAP_RANK` counts nested key/value levels and picks the key/value
//!   separator.
//!
//! Both are associated constants, so the rank of a type is fixed at compile
//! time and never depends on the value being converted. New value shapes
//! join by implementing [`Rank`] and [`crate::Convert`]; existing impls are
//! never touched.
//!
//! | Shape | `LIST_RANK` | `MAP_RANK` |
//! |-------|-------------|------------|
//! | scalar, `String` | 0 | 0 |
//! | sequence of `E` | `E + 1` | `E` |
//! | `[E; N]` | `E + 1` | `E` |
//! | `Complex<E>` | `E + 1` | `E` |
//! | map of `K` to `V` | `max(K, V) + 1` | `max(K, V) + 1` |
//! | `(K, V)` | `max(K, V)` | `max(K, V) + 1` |

use num_complex::Complex;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

/// Nesting depth of a value type.
pub trait Rank {
    const LIST_RANK: usize;
    const MAP_RANK: usize;
}

const fn max(a: usize, b: usize) -> usize {
    if a > b { a } else { b }
}

macro_rules! impl_scalar_rank {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Rank for $ty {
                const LIST_RANK: usize = 0;
                const MAP_RANK: usize = 0;
            }
        )*
    };
}

impl_scalar_rank!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String,
);

macro_rules! impl_sequence_rank {
    ($($coll:ident),* $(,)?) => {
        $(
            impl<E: Rank> Rank for $coll<E> {
                const LIST_RANK: usize = E::LIST_RANK + 1;
                const MAP_RANK: usize = E::MAP_RANK;
            }
        )*
    };
}

impl_sequence_rank!(Vec, VecDeque, LinkedList, BTreeSet);

impl<E: Rank, S> Rank for HashSet<E, S> {
    const LIST_RANK: usize = E::LIST_RANK + 1;
    const MAP_RANK: usize = E::MAP_RANK;
}

impl<E: Rank, const N: usize> Rank for [E; N] {
    const LIST_RANK: usize = E::LIST_RANK + 1;
    const MAP_RANK: usize = E::MAP_RANK;
}

impl<E: Rank> Rank for Complex<E> {
    const LIST_RANK: usize = E::LIST_RANK + 1;
    const MAP_RANK: usize = E::MAP_RANK;
}

impl<K: Rank, V: Rank> Rank for BTreeMap<K, V> {
    const LIST_RANK: usize = max(K::LIST_RANK, V::LIST_RANK) + 1;
    const MAP_RANK: usize = max(K::MAP_RANK, V::MAP_RANK) + 1;
}

impl<K: Rank, V: Rank, S> Rank for HashMap<K, V, S> {
    const LIST_RANK: usize = max(K::LIST_RANK, V::LIST_RANK) + 1;
    const MAP_RANK: usize = max(K::MAP_RANK, V::MAP_RANK) + 1;
}

/// A pair is written as a map with exactly one entry.
impl<K: Rank, V: Rank> Rank for (K, V) {
    const LIST_RANK: usize = max(K::LIST_RANK, V::LIST_RANK);
    const MAP_RANK: usize = max(K::MAP_RANK, V::MAP_RANK) + 1;
}

/// `(LIST_RANK, MAP_RANK)` of `T`.
pub const fn rank_of<T: Rank>() -> (usize, usize) {
    (T::LIST_RANK, T::MAP_RANK)
}
