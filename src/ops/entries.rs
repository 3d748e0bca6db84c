//! Mapping entry extraction.
//!
//! `keys` and `values` lift a mapping's own keys or values into an ordered
//! sequence, in insertion order. Both are mapping-only and fail fast on a
//! sequence input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::collection::Collection;
use crate::primitives::errors::CollectionError;

/// The mapping's own keys as an ordered sequence, in insertion order.
pub fn keys<T>(collection: &Collection<T>) -> Result<Vec<String>, CollectionError> {
    let mapping = Validator::require_mapping(collection)?;
    Ok(mapping.keys().map(String::from).collect())
}

/// The mapping's own values as an ordered sequence, in insertion order.
pub fn values<T>(collection: &Collection<T>) -> Result<Vec<T>, CollectionError>
where
    T: Clone,
{
    let mapping = Validator::require_mapping(collection)?;
    Ok(mapping.values().cloned().collect())
}
