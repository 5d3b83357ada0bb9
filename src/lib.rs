//! # Exsort
//!
//! `exsort` builds comparators and sorters from an example: give it a
//! reference ordering over the values you care about, and it arranges any
//! input sequence to match, with deterministic handling of values the
//! reference does not mention and of values the reference ties.
//!
//! ## Key Features
//!
//! - **Two reference shapes**: an ordered list of distinct values (ranked by
//!   position) or an explicit value-to-score map (any totally-ordered score
//!   type, ties allowed). See [`Reference`].
//! - **Deterministic precedence**: ranked values order by rank and always
//!   sort before unranked ones; everything ranks cannot decide goes to an
//!   optional fallback comparator. See [`Options`].
//! - **Key extraction**: sort structured records by a derived key, with the
//!   key computed exactly once per item and the fallback still able to see
//!   the original records. See [`build_keyed_sorter`].
//! - **Fail-fast construction**: malformed references and option
//!   combinations are rejected with [`SortError`] before any sorting runs.
//!
//! ## Usage
//!
//! ### Sorting to match an example
//!
//! ```rust
//! use exsort::{build_sorter, Options, Reference};
//!
//! let sorter = build_sorter(
//!     Reference::ordered(["foo", "bar", "baz", "quux", "pantalones"]),
//!     Options::fallback(|a: &&str, b: &&str| a.len().cmp(&b.len())),
//! ).unwrap();
//!
//! let out = sorter.sort(["foo", "bar", "bar", "x", "foo", "quux", "foo", "pantalones", "garbage"]);
//! assert_eq!(
//!     out,
//!     ["foo", "foo", "foo", "bar", "bar", "quux", "pantalones", "x", "garbage"],
//! );
//! ```
//!
//! ### A plain comparator for external sorts
//!
//! ```rust
//! use exsort::{build_comparator, Options, Reference};
//!
//! let cmp = build_comparator(
//!     Reference::ordered(["error", "warn", "info", "debug"]),
//!     Options::new(),
//! ).unwrap();
//!
//! let mut levels = vec!["info", "debug", "error", "warn"];
//! levels.sort_by(|a, b| cmp.compare(a, b));
//! assert_eq!(levels, ["error", "warn", "info", "debug"]);
//! ```
//!
//! ### Structured records
//!
//! ```rust
//! use exsort::{build_keyed_sorter, Options, Reference};
//!
//! #[derive(Debug, PartialEq)]
//! struct Host { region: &'static str, name: &'static str }
//!
//! let sorter = build_keyed_sorter(
//!     Reference::ordered(["eu-west", "us-east"]),
//!     Options::new()
//!         .with_key(|h: &Host| h.region)
//!         .with_item_fallback(|_, _, a: &Host, b: &Host| a.name.cmp(&b.name)),
//! ).unwrap();
//!
//! let hosts = sorter.sort([
//!     Host { region: "ap-south", name: "db-2" },
//!     Host { region: "us-east", name: "web-1" },
//!     Host { region: "ap-south", name: "db-1" },
//!     Host { region: "eu-west", name: "web-3" },
//! ]);
//!
//! // Ranked regions first, in reference order; unranked ones after,
//! // tie-broken by host name.
//! let names: Vec<&str> = hosts.iter().map(|h| h.name).collect();
//! assert_eq!(names, ["web-3", "web-1", "db-1", "db-2"]);
//! ```
//!
//! ## Ordering Guarantees
//!
//! The sorter uses the standard library's stable sort, so pairs the
//! reference and fallback leave tied keep their input order. A
//! [`Comparator`] handed to an unstable routine makes no such promise;
//! ties there may land in any relative order.
//!
//! Construction is pure and each built value owns its rank table, so
//! distinct comparators and sorters can be used from different threads
//! without coordination.

pub mod algo;
pub mod core;
pub use algo::{Comparator, Sorter, build_comparator, build_keyed_sorter, build_sorter};
pub use core::{Fallback, KeyFn, Options, Reference, SortError};

pub mod prelude {
    pub use crate::algo::{Comparator, Sorter, build_comparator, build_keyed_sorter, build_sorter};
    pub use crate::core::{Fallback, KeyFn, Options, Reference, SortError};
}
