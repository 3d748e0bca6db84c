#![cfg(feature = "dev")]
//! Tests for the dual-shape collection type.
//!
//! These tests verify the iteration contract every operation builds on:
//! - Shape detection and element counting
//! - Entry enumeration order for both shapes
//! - The index-or-key values handed to callbacks
//!
//! ## Test Organization
//!
//! 1. **Shape Observation** - kind, len, is_empty
//! 2. **Sequence Iteration** - index order, entry keys
//! 3. **Mapping Iteration** - insertion order, entry keys
//! 4. **Conversions** - From impls and shape accessors

use seqmap::internals::primitives::collection::{Collection, CollectionKind, EntryKey};
use seqmap::internals::primitives::ordered_map::OrderedMap;

// ============================================================================
// Shape Observation Tests
// ============================================================================

/// Test shape detection for both variants.
///
/// Verifies that kind() reports the variant the collection was built from.
#[test]
fn test_kind_detection() {
    let seq = Collection::sequence(vec![1, 2, 3]);
    let map: Collection<i32> = Collection::mapping(OrderedMap::from([("a", 1)]));

    assert_eq!(seq.kind(), CollectionKind::Sequence);
    assert_eq!(map.kind(), CollectionKind::Mapping);
}

/// Test element counting for both shapes.
///
/// Verifies that len() is the sequence length or the own-key count.
#[test]
fn test_len_both_shapes() {
    let seq = Collection::sequence(vec![1, 2, 3]);
    let map: Collection<i32> = Collection::mapping(OrderedMap::from([("a", 1), ("b", 2)]));

    assert_eq!(seq.len(), 3, "Sequence length should be 3");
    assert_eq!(map.len(), 2, "Mapping own-key count should be 2");
}

/// Test emptiness observation.
///
/// Verifies is_empty() for empty and non-empty collections.
#[test]
fn test_is_empty() {
    let empty: Collection<i32> = Collection::sequence(vec![]);
    let full = Collection::sequence(vec![1]);

    assert!(empty.is_empty(), "Empty sequence should report empty");
    assert!(!full.is_empty(), "Non-empty sequence should not report empty");
}

// ============================================================================
// Sequence Iteration Tests
// ============================================================================

/// Test sequence enumeration order.
///
/// Verifies that entries() visits elements in index order 0..len.
#[test]
fn test_sequence_entry_order() {
    let seq = Collection::sequence(vec![10, 20, 30]);

    let visited: Vec<(EntryKey, i32)> = seq.entries().map(|(k, v)| (k, *v)).collect();

    assert_eq!(
        visited,
        vec![
            (EntryKey::Index(0), 10),
            (EntryKey::Index(1), 20),
            (EntryKey::Index(2), 30),
        ],
        "Sequence entries should be visited in index order"
    );
}

/// Test entry key accessors for sequence keys.
///
/// Verifies that index() yields the position and name() is absent.
#[test]
fn test_sequence_entry_key_accessors() {
    let key = EntryKey::Index(4);

    assert_eq!(key.index(), Some(4));
    assert_eq!(key.name(), None);
}

// ============================================================================
// Mapping Iteration Tests
// ============================================================================

/// Test mapping enumeration order.
///
/// Verifies that entries() visits entries in insertion order.
#[test]
fn test_mapping_entry_order() {
    let map = Collection::mapping(OrderedMap::from([("b", 2), ("a", 1), ("c", 3)]));

    let visited: Vec<(Option<&str>, i32)> = map.entries().map(|(k, v)| (k.name(), *v)).collect();

    assert_eq!(
        visited,
        vec![(Some("b"), 2), (Some("a"), 1), (Some("c"), 3)],
        "Mapping entries should be visited in insertion order"
    );
}

/// Test that no entry is skipped or revisited.
///
/// Verifies the exactly-once guarantee of the iteration contract.
#[test]
fn test_entries_exactly_once() {
    let map: Collection<i32> =
        Collection::mapping(OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]));

    assert_eq!(map.entries().count(), map.len());
}

// ============================================================================
// Conversion Tests
// ============================================================================

/// Test From conversions into Collection.
///
/// Verifies that vectors and maps convert to their respective shapes.
#[test]
fn test_from_conversions() {
    let seq: Collection<i32> = vec![1, 2].into();
    let map: Collection<i32> = OrderedMap::from([("a", 1)]).into();

    assert_eq!(seq.kind(), CollectionKind::Sequence);
    assert_eq!(map.kind(), CollectionKind::Mapping);
}

/// Test shape accessors.
///
/// Verifies that as_sequence/as_mapping admit only the matching shape.
#[test]
fn test_shape_accessors() {
    let seq = Collection::sequence(vec![1, 2]);
    let map: Collection<i32> = Collection::mapping(OrderedMap::from([("a", 1)]));

    assert_eq!(seq.as_sequence(), Some(&[1, 2][..]));
    assert!(seq.as_mapping().is_none(), "Sequence is not a mapping");
    assert!(map.as_sequence().is_none(), "Mapping is not a sequence");
    assert!(map.as_mapping().is_some(), "Mapping should be accessible");
}
