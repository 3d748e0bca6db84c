//! Stable key-ordered copies of a sequence.
//!
//! ## Purpose
//!
//! This module produces a new sequence sorted ascending by a caller-derived
//! key, leaving the input untouched. Sorting is sequence-only.
//!
//! ## Design notes
//!
//! * **Stability**: Equal keys retain their original relative order.
//! * **Float keys**: `f32`/`f64` are not `Ord`, so float-keyed sorting is
//!   a separate entry point that orders keys with `partial_cmp` and treats
//!   incomparable pairs (NaN on either side) as equal; the stable sort
//!   then keeps their original order.
//!
//! ## Invariants
//!
//! * Output is a permutation of the input elements.
//! * The key function is the only source of ordering.
//!
//! ## Non-goals
//!
//! * No in-place sorting; the input is never mutated.
//! * Mixed/incomparable key types beyond the NaN rule are not given an
//!   ordering.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::collection::Collection;
use crate::primitives::errors::CollectionError;

/// New sequence sorted ascending by `key`, stably.
pub fn sort_by_key<T, K, F>(collection: &Collection<T>, key: F) -> Result<Vec<T>, CollectionError>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let items = Validator::require_sequence(collection)?;
    let mut sorted = items.to_vec();
    sorted.sort_by_key(key);
    Ok(sorted)
}

/// New sequence sorted ascending by a float-valued `key`, stably.
///
/// Incomparable key pairs compare equal, so elements with NaN keys keep
/// their original relative order.
pub fn sort_by_float_key<T, K, F>(
    collection: &Collection<T>,
    mut key: F,
) -> Result<Vec<T>, CollectionError>
where
    T: Clone,
    K: Float,
    F: FnMut(&T) -> K,
{
    let items = Validator::require_sequence(collection)?;
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal));
    Ok(sorted)
}
