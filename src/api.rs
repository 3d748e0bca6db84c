//! Curated public surface.
//!
//! ## Purpose
//!
//! This module gathers the user-facing entry points of the crate: the
//! operation functions from the ops layer and the public types from the
//! primitives layer. The crate's `prelude` re-exports from here.
//!
//! ## Design notes
//!
//! * **Plain functions**: Every operation is a free function taking the
//!   collection first and the callback last, matching the shared
//!   `(value, index-or-key, collection)` callback contract.
//! * **Uniform outcomes**: `Option` for absent-but-valid results,
//!   `Result<_, CollectionError>` for contract violations.

// Publicly re-exported operations
pub use crate::ops::each::each;
pub use crate::ops::entries::{keys, values};
pub use crate::ops::flatten::{FlattenDepth, flatten};
pub use crate::ops::fold::{fold, reduce};
pub use crate::ops::query::{find, size};
pub use crate::ops::sort::{sort_by_float_key, sort_by_key};
pub use crate::ops::take::{first, first_n, last, last_n};
pub use crate::ops::transform::{filter, map};

// Publicly re-exported types
pub use crate::primitives::collection::{Collection, CollectionKind, Entries, EntryKey};
pub use crate::primitives::errors::CollectionError;
pub use crate::primitives::nested::Nested;
pub use crate::primitives::ordered_map::OrderedMap;
