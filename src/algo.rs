//! Comparator and sorter construction.
//!
//! The main entry points are [`build_comparator`], [`build_sorter`] and
//! [`build_keyed_sorter`]. All three resolve the caller's [`Reference`] into
//! a rank table up front, so a malformed reference fails before any sorting
//! starts, and the returned value is immutable and self-contained.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use crate::core::{Fallback, KeyFn, Options, RankTable, Reference, SortError};

/// A plain two-argument comparator over values of type `K`.
///
/// Built by [`build_comparator`]; intended for handing to external sort
/// routines (`sort_by`, binary heaps, ordered merges). Key extraction is
/// deliberately unsupported here: a pairwise comparison has no way to
/// precompute each item's key once, so keyed ordering is only available
/// through the sorter.
pub struct Comparator<K, S = usize> {
    table: RankTable<K, S>,
    fallback: Option<Fallback<K, K>>,
}

// Manual impl: the fallback is a boxed closure, so only its presence is
// printable.
impl<K: fmt::Debug, S: fmt::Debug> fmt::Debug for Comparator<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("table", &self.table)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl<K: Hash + Eq, S: Ord> Comparator<K, S> {
    /// Three-way comparison following the reference order.
    ///
    /// Ranked values order by rank and sort before unranked ones. Pairs the
    /// ranks cannot decide go to the fallback, or compare equal without one.
    pub fn compare(&self, a: &K, b: &K) -> Ordering {
        self.table
            .precedence(a, b)
            .unwrap_or_else(|| match &self.fallback {
                Some(f) => f.apply(a, b, a, b),
                None => Ordering::Equal,
            })
    }

    /// Sorts a slice in place with [`compare`](Self::compare).
    ///
    /// Uses an unstable sort; pairs that compare equal may land in any
    /// relative order. Use a [`Sorter`] when input order should be kept for
    /// ties.
    pub fn sort_unstable(&self, data: &mut [K]) {
        data.sort_unstable_by(|a, b| self.compare(a, b));
    }
}

/// Builds a plain comparator from a reference ordering.
///
/// # Errors
///
/// [`SortError::IncompatibleOptions`] if `options` carries a key function,
/// and [`SortError::InvalidReference`] if the reference binds a value to
/// more than one rank.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use exsort::{build_comparator, Options, Reference};
///
/// let cmp = build_comparator(
///     Reference::ordered(["alpha", "beta"]),
///     Options::new(),
/// ).unwrap();
///
/// assert_eq!(cmp.compare(&"beta", &"alpha"), Ordering::Greater);
/// // Ranked values sort before unranked ones.
/// assert_eq!(cmp.compare(&"beta", &"gamma"), Ordering::Less);
/// ```
pub fn build_comparator<K, S>(
    reference: Reference<K, S>,
    options: Options<K>,
) -> Result<Comparator<K, S>, SortError>
where
    K: Hash + Eq,
    S: Ord,
{
    if options.key_fn.is_some() {
        return Err(SortError::IncompatibleOptions(
            "key extraction needs the precompute pass of a sorter; use `build_keyed_sorter`",
        ));
    }
    Ok(Comparator {
        table: RankTable::from_reference(reference)?,
        fallback: options.fallback,
    })
}

/// How a sorter obtains the comparison key for an item.
enum KeyPlan<T, K> {
    /// The item is its own key (no extraction configured).
    Inherent(fn(&T) -> &K),
    /// Keys come from a caller-supplied function, computed once per item
    /// per sort.
    Derived(KeyFn<T, K>),
}

/// Reorders sequences of `T` to match a reference ordering over keys `K`.
///
/// Built by [`build_sorter`] (items are their own keys) or
/// [`build_keyed_sorter`] (keys extracted per item). The underlying sort is
/// stable, so pairs the reference and fallback leave tied keep their input
/// order.
pub struct Sorter<T, K = T, S = usize> {
    table: RankTable<K, S>,
    fallback: Option<Fallback<T, K>>,
    plan: KeyPlan<T, K>,
}

impl<T, K: fmt::Debug, S: fmt::Debug> fmt::Debug for Sorter<T, K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sorter")
            .field("table", &self.table)
            .field("fallback", &self.fallback.is_some())
            .field("keyed", &matches!(self.plan, KeyPlan::Derived(_)))
            .finish()
    }
}

impl<T, K, S> Sorter<T, K, S>
where
    K: Hash + Eq,
    S: Ord,
{
    /// Returns a new `Vec` with the elements of `items` reordered to match
    /// the reference.
    pub fn sort(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let mut items: Vec<T> = items.into_iter().collect();
        self.sort_in_place(&mut items);
        items
    }

    /// Sorts a slice in place.
    ///
    /// With a key function configured, every key is extracted exactly once
    /// before any comparison runs; the comparisons then work over the
    /// precomputed keys and an index permutation, which is applied at the
    /// end. An expensive or impure key function is therefore invoked `n`
    /// times, never `n log n`.
    pub fn sort_in_place(&self, items: &mut [T]) {
        match &self.plan {
            KeyPlan::Inherent(key_of) => {
                items.sort_by(|a, b| self.order(key_of(a), key_of(b), a, b));
            }
            KeyPlan::Derived(key_of) => {
                let keys: Vec<K> = items.iter().map(|item| key_of(item)).collect();
                let mut permutation: Vec<usize> = (0..items.len()).collect();
                permutation
                    .sort_by(|&i, &j| self.order(&keys[i], &keys[j], &items[i], &items[j]));
                apply_permutation(items, permutation);
            }
        }
    }

    fn order(&self, key_a: &K, key_b: &K, item_a: &T, item_b: &T) -> Ordering {
        self.table
            .precedence(key_a, key_b)
            .unwrap_or_else(|| match &self.fallback {
                Some(f) => f.apply(key_a, key_b, item_a, item_b),
                None => Ordering::Equal,
            })
    }
}

/// Builds a sorter whose items are their own comparison keys.
///
/// `options.key_fn` may still carry a `T -> T` transform (case folding and
/// the like); it is then precomputed per item exactly as in the keyed build.
///
/// # Errors
///
/// [`SortError::InvalidReference`] if the reference binds a value to more
/// than one rank.
///
/// # Examples
///
/// ```
/// use exsort::{build_sorter, Options, Reference};
///
/// let sorter = build_sorter(
///     Reference::ranked([("high", 0), ("low", 9)]),
///     Options::new(),
/// ).unwrap();
///
/// assert_eq!(sorter.sort(["low", "high"]), ["high", "low"]);
/// ```
pub fn build_sorter<T, S>(
    reference: Reference<T, S>,
    options: Options<T>,
) -> Result<Sorter<T, T, S>, SortError>
where
    T: Hash + Eq,
    S: Ord,
{
    let plan = match options.key_fn {
        Some(key_fn) => KeyPlan::Derived(key_fn),
        None => KeyPlan::Inherent(|item| item),
    };
    Ok(Sorter {
        table: RankTable::from_reference(reference)?,
        fallback: options.fallback,
        plan,
    })
}

/// Builds a sorter over items of one type keyed by values of another.
///
/// Rank lookup and [`Fallback::Keys`] operate on the extracted keys, while
/// [`Fallback::Full`] additionally receives the two original items.
///
/// # Errors
///
/// [`SortError::IncompatibleOptions`] if `options` has no key function, and
/// [`SortError::InvalidReference`] if the reference binds a value to more
/// than one rank.
///
/// # Examples
///
/// ```
/// use exsort::{build_keyed_sorter, Options, Reference};
///
/// struct Task { tag: String, title: String }
///
/// let sorter = build_keyed_sorter(
///     Reference::ordered(["urgent", "soon"].map(String::from)),
///     Options::new()
///         .with_key(|t: &Task| t.tag.clone())
///         .with_item_fallback(|_, _, a: &Task, b: &Task| a.title.cmp(&b.title)),
/// ).unwrap();
///
/// let tasks = sorter.sort([
///     Task { tag: "later".into(), title: "dust".into() },
///     Task { tag: "urgent".into(), title: "ship".into() },
///     Task { tag: "later".into(), title: "archive".into() },
/// ]);
///
/// let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
/// assert_eq!(titles, ["ship", "archive", "dust"]);
/// ```
pub fn build_keyed_sorter<T, K, S>(
    reference: Reference<K, S>,
    options: Options<T, K>,
) -> Result<Sorter<T, K, S>, SortError>
where
    K: Hash + Eq,
    S: Ord,
{
    let Some(key_fn) = options.key_fn else {
        return Err(SortError::IncompatibleOptions(
            "a keyed sorter needs a key function; set one with `Options::with_key`",
        ));
    };
    Ok(Sorter {
        table: RankTable::from_reference(reference)?,
        fallback: options.fallback,
        plan: KeyPlan::Derived(key_fn),
    })
}

// Cycle-walking permutation apply; no auxiliary buffer of `T`.
// `permutation[i]` is the source index of the element that belongs at `i`.
fn apply_permutation<T>(data: &mut [T], mut permutation: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while permutation[current] != i {
            let next = permutation[current];
            data.swap(current, next);
            permutation[current] = current;
            current = next;
        }
        permutation[current] = current;
    }
}
