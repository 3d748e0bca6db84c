//! Element transforms.
//!
//! ## Purpose
//!
//! This module provides the two transforming operations, `map` and
//! `filter`. Both accept either container shape and always produce an
//! ordered sequence: the result of transforming a mapping is the list of
//! results in insertion order, not a mapping keyed by the original keys.
//!
//! ## Invariants
//!
//! * `map` output length equals input element count.
//! * `filter` output is an order-preserving subsequence of the input.
//! * Neither operation mutates its input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::collection::{Collection, EntryKey};

/// Transform every entry into a new ordered sequence, in encounter order.
///
/// The callback receives `(value, index-or-key, collection)`.
pub fn map<T, U, F>(collection: &Collection<T>, mut transform: F) -> Vec<U>
where
    F: FnMut(&T, EntryKey<'_>, &Collection<T>) -> U,
{
    let mut result = Vec::with_capacity(collection.len());
    for (key, value) in collection.entries() {
        result.push(transform(value, key, collection));
    }
    result
}

/// Collect every entry the predicate admits into a new ordered sequence.
///
/// The predicate receives `(value, index-or-key, collection)`; admitted
/// values are cloned into the result in encounter order.
pub fn filter<T, F>(collection: &Collection<T>, mut admit: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, EntryKey<'_>, &Collection<T>) -> bool,
{
    let mut result = Vec::new();
    for (key, value) in collection.entries() {
        if admit(value, key, collection) {
            result.push(value.clone());
        }
    }
    result
}
