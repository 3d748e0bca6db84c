//! Nested sequence flattening.
//!
//! ## Purpose
//!
//! This module unwraps nested sub-sequences into a single ordered sequence,
//! preserving encounter order. Depth is a policy: fully recursive (the
//! default) or one level only.
//!
//! ## Key concepts
//!
//! * **Full**: sub-sequences at any depth are unwrapped; the result holds
//!   only leaf items.
//! * **Shallow**: exactly one level is unwrapped; anything nested two or
//!   more levels deep survives as a sub-sequence element of the result.
//!
//! ## Invariants
//!
//! * Leaf items appear in the result in encounter order.
//! * The input is never mutated.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::nested::Nested;

// ============================================================================
// Flatten Policy
// ============================================================================

/// Policy for how deep flattening unwraps nested sub-sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlattenDepth {
    /// Unwrap nesting at every depth; the result holds only leaf items.
    #[default]
    Full,

    /// Unwrap one level; deeper nesting is preserved as sub-sequences.
    Shallow,
}

// ============================================================================
// Flatten Operation
// ============================================================================

/// Flatten a nested sequence according to `depth`, preserving order.
pub fn flatten<T>(elements: &[Nested<T>], depth: FlattenDepth) -> Vec<Nested<T>>
where
    T: Clone,
{
    let mut result = Vec::new();
    match depth {
        FlattenDepth::Full => flatten_into(elements, &mut result),
        FlattenDepth::Shallow => {
            for element in elements {
                match element {
                    Nested::Seq(inner) => result.extend(inner.iter().cloned()),
                    Nested::Item(value) => result.push(Nested::Item(value.clone())),
                }
            }
        }
    }
    result
}

/// Recursively append every leaf item of `elements` to `result`.
fn flatten_into<T>(elements: &[Nested<T>], result: &mut Vec<Nested<T>>)
where
    T: Clone,
{
    for element in elements {
        match element {
            Nested::Seq(inner) => flatten_into(inner, result),
            Nested::Item(value) => result.push(Nested::Item(value.clone())),
        }
    }
}
