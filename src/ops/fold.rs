//! Accumulation over a collection.
//!
//! ## Purpose
//!
//! This module folds a collection into a single accumulator. Two entry
//! points cover the seeded and seedless forms:
//!
//! * [`fold`] takes an explicit seed and visits every entry;
//! * [`reduce`] seeds the accumulator from the first entry in encounter
//!   order and resumes iteration at the second.
//!
//! ## Design notes
//!
//! * **Seedless mappings**: the "first element" of a mapping is the first
//!   entry in insertion order; it seeds the accumulator and is then
//!   skipped, exactly as for sequences.
//! * **Callback shape**: reduce callbacks receive
//!   `(accumulator, value, collection)` — no index-or-key.
//!
//! ## Invariants
//!
//! * `fold` over an empty collection returns the seed untouched.
//! * `reduce` over an empty collection is an error, never a panic.
//!
//! ## Non-goals
//!
//! * No short-circuiting; every entry after the seed is visited.

// Internal dependencies
use crate::primitives::collection::Collection;
use crate::primitives::errors::CollectionError;

/// Fold the collection into `seed`, visiting every entry in encounter order.
///
/// Each step calls `step(accumulator, value, collection)` and feeds the
/// returned accumulator to the next entry.
pub fn fold<T, A, F>(collection: &Collection<T>, seed: A, mut step: F) -> A
where
    F: FnMut(A, &T, &Collection<T>) -> A,
{
    let mut acc = seed;
    for (_, value) in collection.entries() {
        acc = step(acc, value, collection);
    }
    acc
}

/// Fold the collection without a seed.
///
/// The accumulator is a clone of the first entry in encounter order, and
/// iteration begins at the second entry. An empty collection has no first
/// entry to seed from and yields [`CollectionError::EmptyCollection`].
pub fn reduce<T, F>(collection: &Collection<T>, mut step: F) -> Result<T, CollectionError>
where
    T: Clone,
    F: FnMut(T, &T, &Collection<T>) -> T,
{
    let mut entries = collection.entries();
    let (_, first) = entries.next().ok_or(CollectionError::EmptyCollection)?;

    let mut acc = first.clone();
    for (_, value) in entries {
        acc = step(acc, value, collection);
    }
    Ok(acc)
}
