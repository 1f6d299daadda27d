//! Keyed indexing helpers for fetched collections.

use std::collections::HashMap;
use std::hash::Hash;

/// Index a collection by a derived key, one entry per key.
///
/// When two items derive the same key, the later item wins.
pub fn index_by<T, K, F>(items: Vec<T>, key: F) -> HashMap<K, T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut indexed = HashMap::with_capacity(items.len());
    for item in items {
        indexed.insert(key(&item), item);
    }
    indexed
}

/// Group a collection by a derived key, preserving per-key insertion order.
pub fn group_by<T, K, F>(items: Vec<T>, key: F) -> HashMap<K, Vec<T>>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut grouped: HashMap<K, Vec<T>> = HashMap::with_capacity(items.len());
    for item in items {
        grouped.entry(key(&item)).or_default().push(item);
    }
    grouped
}
