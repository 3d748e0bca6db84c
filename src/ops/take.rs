//! Sequence slicing.
//!
//! ## Purpose
//!
//! This module takes single elements or sub-sequences from the front or
//! back of a sequence. These operations are sequence-only: a mapping input
//! is a kind-contract violation and fails fast.
//!
//! ## Design notes
//!
//! * **Optional counts become entry points**: the single-element forms
//!   (`first`, `last`) and the counted forms (`first_n`, `last_n`) are
//!   separate functions rather than an optional parameter.
//! * **Clamping**: counted forms take `min(n, len)` elements; `n = 0`
//!   yields the empty sequence. Counts are `usize`, so negative counts are
//!   unrepresentable.
//!
//! ## Invariants
//!
//! * Sub-sequences preserve element order.
//! * The input is never mutated.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::collection::Collection;
use crate::primitives::errors::CollectionError;

/// First element of a sequence; `Ok(None)` if the sequence is empty.
pub fn first<T>(collection: &Collection<T>) -> Result<Option<&T>, CollectionError> {
    let items = Validator::require_sequence(collection)?;
    Ok(items.first())
}

/// Last element of a sequence; `Ok(None)` if the sequence is empty.
pub fn last<T>(collection: &Collection<T>) -> Result<Option<&T>, CollectionError> {
    let items = Validator::require_sequence(collection)?;
    Ok(items.last())
}

/// The first `min(n, len)` elements of a sequence, in order.
pub fn first_n<T>(collection: &Collection<T>, n: usize) -> Result<Vec<T>, CollectionError>
where
    T: Clone,
{
    let items = Validator::require_sequence(collection)?;
    let count = n.min(items.len());
    Ok(items[..count].to_vec())
}

/// The last `min(n, len)` elements of a sequence, in order.
pub fn last_n<T>(collection: &Collection<T>, n: usize) -> Result<Vec<T>, CollectionError>
where
    T: Clone,
{
    let items = Validator::require_sequence(collection)?;
    let count = n.min(items.len());
    Ok(items[items.len() - count..].to_vec())
}
