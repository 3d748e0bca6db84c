//! # seqmap — uniform collection operations for Rust
//!
//! A small library of eager, synchronous collection operations
//! (`each`/`map`/`fold`/`reduce`/`find`/`filter`/`size`/`first`/`last`/
//! `sort_by_key`/`flatten`/`keys`/`values`) that work uniformly over two
//! container shapes: an ordered sequence and an insertion-ordered,
//! string-keyed mapping.
//!
//! ## The dual-mode iteration contract
//!
//! Every operation shares one iteration contract. A [`Collection`] is either
//! a `Sequence` (visited in index order) or a `Mapping` (visited in
//! insertion order), and callbacks always receive
//! `(value, index-or-key, collection)` in that order. No entry is skipped
//! or revisited, and transforming operations always normalize their output
//! to an ordered sequence, whatever the input shape was.
//!
//! ## Quick Start
//!
//! ```rust
//! use seqmap::prelude::*;
//!
//! let scores = Collection::sequence(vec![3, 1, 4, 2]);
//!
//! let doubled = map(&scores, |value, _, _| value * 2);
//! assert_eq!(doubled, vec![6, 2, 8, 4]);
//!
//! let evens = filter(&scores, |value, _, _| value % 2 == 0);
//! assert_eq!(evens, vec![4, 2]);
//!
//! let total = fold(&scores, 0, |acc, value, _| acc + value);
//! assert_eq!(total, 10);
//! ```
//!
//! Mappings iterate in insertion order, so results are deterministic:
//!
//! ```rust
//! use seqmap::prelude::*;
//!
//! let ratings = Collection::mapping(OrderedMap::from([
//!     ("solaris", 9),
//!     ("stalker", 10),
//!     ("mirror", 8),
//! ]));
//!
//! assert_eq!(size(&ratings), 3);
//! assert_eq!(keys(&ratings)?, vec!["solaris", "stalker", "mirror"]);
//! assert_eq!(values(&ratings)?, vec![9, 10, 8]);
//!
//! // Seedless reduce: the accumulator starts from the first entry.
//! let total = reduce(&ratings, |acc, value, _| acc + value)?;
//! assert_eq!(total, 27);
//! # Result::<(), CollectionError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Operations that can observe a contract violation return
//! `Result<_, CollectionError>`:
//!
//! - [`reduce`](prelude::reduce) on an empty collection is
//!   `CollectionError::EmptyCollection` (there is no first element to seed
//!   the accumulator from);
//! - kind-restricted operations fail fast with
//!   `CollectionError::KindMismatch` — `keys`/`values` require a mapping,
//!   `first`/`last`/`sort_by_key` require a sequence.
//!
//! Absent-but-valid outcomes use `Option`: [`find`](prelude::find) with no
//! match and [`first`](prelude::first)/[`last`](prelude::last) on an empty
//! sequence return `None`.
//!
//! ```rust
//! use seqmap::prelude::*;
//!
//! let empty: Collection<i32> = Collection::sequence(vec![]);
//! let err = reduce(&empty, |acc, value, _| acc + value);
//! assert_eq!(err, Err(CollectionError::EmptyCollection));
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! seqmap = { version = "0.1", default-features = false }
//! ```
//!
//! All operations only require `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - collection shapes and shared error types.
mod primitives;

// Layer 2: Engine - kind-contract validation.
mod engine;

// Layer 3: Ops - the collection operations.
mod ops;

// Curated public surface.
mod api;

// Standard seqmap prelude.
pub mod prelude {
    pub use crate::api::{
        Collection, CollectionError, CollectionKind, Entries, EntryKey, FlattenDepth, Nested,
        OrderedMap, each, filter, find, first, first_n, flatten, fold, keys, last, last_n, map,
        reduce, size, sort_by_float_key, sort_by_key, values,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod ops {
        pub use crate::ops::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
