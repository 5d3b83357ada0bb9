//! Core types for Exsort.
//!
//! This module defines:
//! - [`Reference`]: the example ordering supplied by the caller.
//! - [`Options`] and [`Fallback`]: construction-time configuration.
//! - [`SortError`]: construction-time failures.
//! - RankTable: internal value-to-rank lookup.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;

/// Errors surfaced while building a comparator or sorter.
///
/// Every failure here is a construction-time programmer error; sorting
/// itself never fails. Callers can therefore fail fast before feeding any
/// data through a sorter.
#[derive(Debug, Error)]
pub enum SortError {
    /// The reference binds some value to more than one rank.
    #[error("invalid reference ordering: {0}")]
    InvalidReference(String),

    /// The combination of options does not fit the requested build function.
    #[error("incompatible options: {0}")]
    IncompatibleOptions(&'static str),
}

/// An example ordering over the values a comparator should recognize.
///
/// Two shapes are accepted:
///
/// - [`Reference::Ordered`]: values listed in the desired order, ranked by
///   position. Values must be distinct.
/// - [`Reference::Ranked`]: explicit value/score pairs. The score can be any
///   totally-ordered type, and distinct values may share a score; such ties
///   are resolved by the fallback comparator.
///
/// # Examples
///
/// ```
/// use exsort::{build_sorter, Options, Reference};
///
/// let sorter = build_sorter(
///     Reference::ordered(["small", "medium", "large"]),
///     Options::new(),
/// ).unwrap();
///
/// let sizes = sorter.sort(["large", "small", "medium"]);
/// assert_eq!(sizes, ["small", "medium", "large"]);
/// ```
#[derive(Clone, Debug)]
pub enum Reference<K, S = usize> {
    /// Distinct values listed in the desired order; rank follows position.
    Ordered(Vec<K>),
    /// Explicit value/score pairs; equal scores are permitted and resolved
    /// by the fallback comparator.
    Ranked(Vec<(K, S)>),
}

impl<K> Reference<K> {
    /// Builds an ordered reference from any iterable of values.
    pub fn ordered(values: impl IntoIterator<Item = K>) -> Self {
        Reference::Ordered(values.into_iter().collect())
    }
}

impl<K, S> Reference<K, S> {
    /// Builds a ranked reference from value/score pairs.
    ///
    /// A `HashMap<K, S>` works directly, as does a pair array or any other
    /// pair iterator.
    pub fn ranked(pairs: impl IntoIterator<Item = (K, S)>) -> Self {
        Reference::Ranked(pairs.into_iter().collect())
    }
}

/// Rank assigned to a value by a reference: a list position or an explicit
/// score. A single table only ever holds one of the two kinds, so the
/// derived cross-variant ordering is never exercised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Rank<S> {
    Position(usize),
    Score(S),
}

/// Value-to-rank lookup, built once per comparator/sorter construction and
/// immutable thereafter.
#[derive(Debug)]
pub(crate) struct RankTable<K, S = usize> {
    ranks: HashMap<K, Rank<S>>,
}

impl<K: Hash + Eq, S: Ord> RankTable<K, S> {
    /// Resolves a [`Reference`] into a uniform lookup table.
    ///
    /// Fails with [`SortError::InvalidReference`] if any value appears more
    /// than once; every value has at most one rank.
    pub(crate) fn from_reference(reference: Reference<K, S>) -> Result<Self, SortError> {
        let mut ranks = HashMap::new();
        match reference {
            Reference::Ordered(values) => {
                ranks.reserve(values.len());
                for (position, value) in values.into_iter().enumerate() {
                    if ranks.insert(value, Rank::Position(position)).is_some() {
                        return Err(SortError::InvalidReference(format!(
                            "ordered reference repeats the value at position {position}"
                        )));
                    }
                }
            }
            Reference::Ranked(pairs) => {
                ranks.reserve(pairs.len());
                for (entry, (value, score)) in pairs.into_iter().enumerate() {
                    if ranks.insert(value, Rank::Score(score)).is_some() {
                        return Err(SortError::InvalidReference(format!(
                            "ranked reference binds the value at entry {entry} more than once"
                        )));
                    }
                }
            }
        }
        Ok(Self { ranks })
    }

    /// Resolves the rank-only part of a comparison.
    ///
    /// Ranked values order by rank, and a ranked value sorts before any
    /// unranked one. Returns `None` when ranks alone cannot decide (both
    /// unranked, or ranked equal) and the fallback must take over.
    pub(crate) fn precedence(&self, a: &K, b: &K) -> Option<Ordering> {
        match (self.ranks.get(a), self.ranks.get(b)) {
            (Some(rank_a), Some(rank_b)) => match rank_a.cmp(rank_b) {
                Ordering::Equal => None,
                decided => Some(decided),
            },
            (Some(_), None) => Some(Ordering::Less),
            (None, Some(_)) => Some(Ordering::Greater),
            (None, None) => None,
        }
    }
}

/// Key-extraction function: derives the comparison key from an item.
pub type KeyFn<T, K> = Box<dyn Fn(&T) -> K>;

/// Three-way tie-breaker consulted when ranks alone cannot order a pair.
pub enum Fallback<T, K = T> {
    /// Compares the two comparison keys. When no key extraction is
    /// configured the keys are the items themselves.
    Keys(Box<dyn Fn(&K, &K) -> Ordering>),
    /// Compares keys with access to the original items, for keyed sorts
    /// where the tie-break needs fields the key dropped.
    Full(Box<dyn Fn(&K, &K, &T, &T) -> Ordering>),
}

impl<T, K> Fallback<T, K> {
    /// Wraps a key-comparing tie-breaker.
    pub fn keys(f: impl Fn(&K, &K) -> Ordering + 'static) -> Self {
        Fallback::Keys(Box::new(f))
    }

    /// Wraps a tie-breaker that sees both keys and original items.
    pub fn full(f: impl Fn(&K, &K, &T, &T) -> Ordering + 'static) -> Self {
        Fallback::Full(Box::new(f))
    }

    pub(crate) fn apply(&self, key_a: &K, key_b: &K, item_a: &T, item_b: &T) -> Ordering {
        match self {
            Fallback::Keys(f) => f(key_a, key_b),
            Fallback::Full(f) => f(key_a, key_b, item_a, item_b),
        }
    }
}

/// Configuration for the build functions: an optional tie-break fallback and
/// an optional key-extraction function.
///
/// `T` is the item type being sorted and `K` the comparison-key type looked
/// up in the reference; they coincide unless a key function is set.
///
/// # Examples
///
/// The common fallback-only case has a shorthand constructor:
///
/// ```
/// use exsort::{build_sorter, Options, Reference};
///
/// let sorter = build_sorter(
///     Reference::ordered(["foo", "bar"]),
///     Options::fallback(|a: &&str, b: &&str| a.len().cmp(&b.len())),
/// ).unwrap();
///
/// // Unranked values tie-break by ascending length.
/// assert_eq!(sorter.sort(["zz", "bar", "q", "foo"]), ["foo", "bar", "q", "zz"]);
/// ```
pub struct Options<T, K = T> {
    pub(crate) fallback: Option<Fallback<T, K>>,
    pub(crate) key_fn: Option<KeyFn<T, K>>,
}

impl<T, K> Default for Options<T, K> {
    fn default() -> Self {
        Self {
            fallback: None,
            key_fn: None,
        }
    }
}

impl<T, K> Options<T, K> {
    /// Empty options: rank order only, ties compare equal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for options carrying only a key-comparing fallback.
    pub fn fallback(f: impl Fn(&K, &K) -> Ordering + 'static) -> Self {
        Self::new().with_fallback(f)
    }

    /// Sets a fallback that compares the two comparison keys.
    pub fn with_fallback(mut self, f: impl Fn(&K, &K) -> Ordering + 'static) -> Self {
        self.fallback = Some(Fallback::keys(f));
        self
    }

    /// Sets a fallback that receives the keys and the original items.
    pub fn with_item_fallback(
        mut self,
        f: impl Fn(&K, &K, &T, &T) -> Ordering + 'static,
    ) -> Self {
        self.fallback = Some(Fallback::full(f));
        self
    }

    /// Sets the key-extraction function.
    pub fn with_key(mut self, f: impl Fn(&T) -> K + 'static) -> Self {
        self.key_fn = Some(Box::new(f));
        self
    }
}
