#![cfg(feature = "dev")]
//! Tests for mapping entry extraction.
//!
//! These tests verify keys and values:
//! - Insertion-order enumeration into ordered sequences
//! - The mapping-only kind contract
//!
//! ## Test Organization
//!
//! 1. **Extraction** - keys, values, insertion order
//! 2. **Kind Contract** - sequence inputs fail fast

use seqmap::internals::ops::entries::{keys, values};
use seqmap::internals::primitives::collection::{Collection, CollectionKind};
use seqmap::internals::primitives::errors::CollectionError;
use seqmap::internals::primitives::ordered_map::OrderedMap;

// ============================================================================
// Extraction Tests
// ============================================================================

/// Test key extraction.
///
/// Verifies that the keys of {a:1, b:2} are ["a", "b"].
#[test]
fn test_keys_insertion_order() {
    let map = Collection::mapping(OrderedMap::from([("a", 1), ("b", 2)]));

    assert_eq!(keys(&map), Ok(vec!["a".to_string(), "b".to_string()]));
}

/// Test value extraction.
///
/// Verifies that the values of {a:1, b:2} are [1, 2].
#[test]
fn test_values_insertion_order() {
    let map = Collection::mapping(OrderedMap::from([("a", 1), ("b", 2)]));

    assert_eq!(values(&map), Ok(vec![1, 2]));
}

/// Test extraction order is insertion order, not key order.
///
/// Verifies that enumeration ignores lexicographic key order.
#[test]
fn test_extraction_ignores_key_order() {
    let map = Collection::mapping(OrderedMap::from([("z", 26), ("a", 1)]));

    assert_eq!(keys(&map), Ok(vec!["z".to_string(), "a".to_string()]));
    assert_eq!(values(&map), Ok(vec![26, 1]));
}

/// Test extraction from an empty mapping.
///
/// Verifies the empty sequences.
#[test]
fn test_extraction_empty_mapping() {
    let map: Collection<i32> = Collection::mapping(OrderedMap::new());

    assert_eq!(keys(&map), Ok(vec![]));
    assert_eq!(values(&map), Ok(vec![]));
}

// ============================================================================
// Kind Contract Tests
// ============================================================================

/// Test extraction from a sequence.
///
/// Verifies that keys and values fail fast with KindMismatch.
#[test]
fn test_extraction_rejects_sequence() {
    let seq = Collection::sequence(vec![1, 2, 3]);
    let mismatch = CollectionError::KindMismatch {
        expected: CollectionKind::Mapping,
        got: CollectionKind::Sequence,
    };

    assert_eq!(keys(&seq), Err(mismatch));
    assert_eq!(values(&seq), Err(mismatch));
}
