//! The dual-shape collection type and its iteration contract.
//!
//! ## Purpose
//!
//! This module defines [`Collection`], the tagged sum of the two container
//! shapes every operation in this crate accepts: an ordered sequence and an
//! insertion-ordered mapping. It also carries the iteration contract the
//! operations share: [`Collection::entries`] visits every entry exactly
//! once, in encounter order, yielding the `(index-or-key, value)` pair that
//! callbacks receive.
//!
//! ## Design notes
//!
//! * **Explicit dispatch**: Shape detection is pattern matching on the two
//!   variants. Operations never branch on anything else.
//! * **Borrowed iteration**: `entries()` borrows the collection, so a
//!   callback can be handed both an entry and the collection it came from.
//!
//! ## Key concepts
//!
//! * **Encounter order**: index order `0..len` for sequences, insertion
//!   order for mappings.
//! * **[`EntryKey`]**: the index-or-key argument passed to callbacks —
//!   `Index(usize)` for sequences, `Name(&str)` for mappings.
//!
//! ## Invariants
//!
//! * `entries()` yields exactly `len()` pairs, none skipped or revisited.
//! * Iteration order is deterministic for both shapes.
//!
//! ## Non-goals
//!
//! * This module does not implement the operations themselves.
//! * No lazy or resumable iteration state is retained between calls.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::ordered_map::{self, OrderedMap};

// ============================================================================
// Collection Kind
// ============================================================================

/// The two container shapes a [`Collection`] can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    /// Index-addressed, 0-based, length-bounded ordered sequence.
    Sequence,

    /// String-keyed mapping with insertion-ordered enumeration.
    Mapping,
}

impl core::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Sequence => write!(f, "sequence"),
            Self::Mapping => write!(f, "mapping"),
        }
    }
}

// ============================================================================
// Collection
// ============================================================================

/// A collection value: exactly one of an ordered sequence or a mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum Collection<T> {
    /// Ordered sequence of elements, visited in index order.
    Sequence(Vec<T>),

    /// String-keyed mapping, visited in insertion order.
    Mapping(OrderedMap<T>),
}

impl<T> Collection<T> {
    /// Build a sequence-shaped collection.
    pub fn sequence(items: Vec<T>) -> Self {
        Self::Sequence(items)
    }

    /// Build a mapping-shaped collection.
    pub fn mapping(map: OrderedMap<T>) -> Self {
        Self::Mapping(map)
    }

    /// Which of the two shapes this collection is.
    pub fn kind(&self) -> CollectionKind {
        match self {
            Self::Sequence(_) => CollectionKind::Sequence,
            Self::Mapping(_) => CollectionKind::Mapping,
        }
    }

    /// Element count: sequence length or own-key count.
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(items) => items.len(),
            Self::Mapping(map) => map.len(),
        }
    }

    /// True if the collection holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The sequence elements, if this collection is a sequence.
    pub fn as_sequence(&self) -> Option<&[T]> {
        match self {
            Self::Sequence(items) => Some(items),
            Self::Mapping(_) => None,
        }
    }

    /// The mapping, if this collection is a mapping.
    pub fn as_mapping(&self) -> Option<&OrderedMap<T>> {
        match self {
            Self::Sequence(_) => None,
            Self::Mapping(map) => Some(map),
        }
    }

    /// Visit every entry in encounter order.
    ///
    /// This is the iteration contract shared by every operation: sequences
    /// yield `(Index(i), &item)` for `i` in `0..len`, mappings yield
    /// `(Name(key), &value)` in insertion order.
    pub fn entries(&self) -> Entries<'_, T> {
        match self {
            Self::Sequence(items) => Entries {
                inner: EntriesInner::Sequence(items.iter().enumerate()),
            },
            Self::Mapping(map) => Entries {
                inner: EntriesInner::Mapping(map.iter()),
            },
        }
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items)
    }
}

impl<T> From<OrderedMap<T>> for Collection<T> {
    fn from(map: OrderedMap<T>) -> Self {
        Self::Mapping(map)
    }
}

// ============================================================================
// Entry Keys
// ============================================================================

/// The index-or-key handed to callbacks alongside each value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKey<'a> {
    /// Position of the element within a sequence.
    Index(usize),

    /// Key of the entry within a mapping.
    Name(&'a str),
}

impl<'a> EntryKey<'a> {
    /// The sequence index, if this key came from a sequence.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Name(_) => None,
        }
    }

    /// The mapping key, if this key came from a mapping.
    pub fn name(&self) -> Option<&'a str> {
        match self {
            Self::Index(_) => None,
            Self::Name(key) => Some(*key),
        }
    }
}

// ============================================================================
// Entries Iterator
// ============================================================================

/// Iterator over `(EntryKey, &value)` pairs of a [`Collection`].
#[derive(Debug, Clone)]
pub struct Entries<'a, T> {
    inner: EntriesInner<'a, T>,
}

#[derive(Debug, Clone)]
enum EntriesInner<'a, T> {
    Sequence(core::iter::Enumerate<core::slice::Iter<'a, T>>),
    Mapping(ordered_map::Iter<'a, T>),
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (EntryKey<'a>, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            EntriesInner::Sequence(items) => items
                .next()
                .map(|(index, value)| (EntryKey::Index(index), value)),
            EntriesInner::Mapping(entries) => entries
                .next()
                .map(|(key, value)| (EntryKey::Name(key), value)),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            EntriesInner::Sequence(items) => items.size_hint(),
            EntriesInner::Mapping(entries) => entries.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}
