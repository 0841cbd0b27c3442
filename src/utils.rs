use std::hash::Hash;

pub use fnv::{FnvHashMap, FnvHashSet};

/// An empty Fowler-Noll-Vo hashed set with room for `capacity` entries.
/// Fast for the small `Copy` keys used here (cells), though not resistant to crafted key collisions.
pub fn fnv_hashset<T: Hash + Eq>(capacity: usize) -> FnvHashSet<T> {
    FnvHashSet::with_capacity_and_hasher(capacity, Default::default())
}

/// The map counterpart of `fnv_hashset`.
pub fn fnv_hashmap<K: Hash + Eq, V>(capacity: usize) -> FnvHashMap<K, V> {
    FnvHashMap::with_capacity_and_hasher(capacity, Default::default())
}
