//! Element queries.
//!
//! `find` locates the first matching entry and stops; `size` reports the
//! element count. Neither allocates.

// Internal dependencies
use crate::primitives::collection::{Collection, EntryKey};

/// Return the first entry, in encounter order, the predicate admits.
///
/// The predicate receives `(value, index-or-key, collection)`. Entries
/// after the first match are not evaluated. `None` is the absent outcome.
pub fn find<T, F>(collection: &Collection<T>, mut matches: F) -> Option<&T>
where
    F: FnMut(&T, EntryKey<'_>, &Collection<T>) -> bool,
{
    for (key, value) in collection.entries() {
        if matches(value, key, collection) {
            return Some(value);
        }
    }
    None
}

/// Element count: sequence length or own-key count of a mapping.
pub fn size<T>(collection: &Collection<T>) -> usize {
    collection.len()
}
