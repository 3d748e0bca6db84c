//! Kind-contract validation for collection operations.
//!
//! ## Purpose
//!
//! This module provides the checks kind-restricted operations run before
//! doing any work: sequence-only operations (`first`, `last`, the sorts)
//! must reject mappings, and mapping-only operations (`keys`, `values`)
//! must reject sequences.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: A wrong-shape input is rejected before any element is
//!   visited.
//! * **Single error shape**: Every violation is the same
//!   [`CollectionError::KindMismatch`], so call sites and messages stay
//!   consistent.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not iterate, transform, or copy collection data.

// Internal dependencies
use crate::primitives::collection::{Collection, CollectionKind};
use crate::primitives::errors::CollectionError;
use crate::primitives::ordered_map::OrderedMap;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for operation kind contracts.
///
/// Provides static methods that admit a collection to a kind-restricted
/// operation or fail fast with a [`CollectionError::KindMismatch`].
pub struct Validator;

impl Validator {
    /// Admit a sequence-shaped collection, yielding its elements.
    pub fn require_sequence<T>(collection: &Collection<T>) -> Result<&[T], CollectionError> {
        collection
            .as_sequence()
            .ok_or(CollectionError::KindMismatch {
                expected: CollectionKind::Sequence,
                got: collection.kind(),
            })
    }

    /// Admit a mapping-shaped collection, yielding the mapping.
    pub fn require_mapping<T>(
        collection: &Collection<T>,
    ) -> Result<&OrderedMap<T>, CollectionError> {
        collection
            .as_mapping()
            .ok_or(CollectionError::KindMismatch {
                expected: CollectionKind::Mapping,
                got: collection.kind(),
            })
    }
}
