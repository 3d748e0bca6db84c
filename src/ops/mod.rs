//! Layer 3: Ops
//!
//! # Purpose
//!
//! This layer implements the collection operations. Each operation is
//! independent of its siblings; what they share is the dual-mode iteration
//! contract of [`Collection::entries`](crate::primitives::collection::Collection::entries)
//! and the kind checks of the engine layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Ops ← You are here
//!   ↓
//! Layer 2: Engine
//!   ↓
//! Layer 1: Primitives
//! ```

/// Side-effect visitation (`each`).
pub mod each;

/// Element transforms (`map`, `filter`).
pub mod transform;

/// Accumulation (`fold`, `reduce`).
pub mod fold;

/// Element queries (`find`, `size`).
pub mod query;

/// Sequence slicing (`first`, `last` and their `_n` forms).
pub mod take;

/// Stable key-ordered copies (`sort_by_key`, `sort_by_float_key`).
pub mod sort;

/// Nested sequence flattening.
pub mod flatten;

/// Mapping entry extraction (`keys`, `values`).
pub mod entries;
