//! Sparse slot storage.
//!
//! `IndexedStore` maps integer slot numbers to values. It has no ordering of
//! its own and does not require slots to be contiguous or to start at zero;
//! [`SparseDeque`](super::SparseDeque) decides which slots are live.
//!
//! Every operation is a single hash-map probe, so its cost does not depend on
//! how many slots are occupied or on how far apart they are.

use std::collections::HashMap;
use std::fmt;

use super::{Slot, SlotHasher};

/// A mapping from [`Slot`] to element.
///
/// # Examples
///
/// ```rust
/// use sparsedeque::collections::IndexedStore;
///
/// let mut store = IndexedStore::new();
/// store.insert(-7, "far left");
/// store.insert(1_000, "far right");
///
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.get(-7), Some(&"far left"));
/// assert_eq!(store.remove(1_000), Some("far right"));
/// assert!(!store.contains_key(1_000));
/// ```
pub struct IndexedStore<T> {
    slots: HashMap<Slot, T, SlotHasher>,
}

impl<T> IndexedStore<T> {
    /// Creates an empty store.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: HashMap::with_hasher(SlotHasher::default()),
        }
    }

    /// Creates an empty store able to hold `capacity` slots without
    /// reallocating.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HashMap::with_capacity_and_hasher(capacity, SlotHasher::default()),
        }
    }

    /// Stores `element` at `slot`, returning the element previously held
    /// there, if any.
    #[inline]
    pub fn insert(&mut self, slot: Slot, element: T) -> Option<T> {
        self.slots.insert(slot, element)
    }

    /// Removes and returns the element at `slot`, if any.
    #[inline]
    pub fn remove(&mut self, slot: Slot) -> Option<T> {
        self.slots.remove(&slot)
    }

    /// Returns a reference to the element at `slot`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&T> {
        self.slots.get(&slot)
    }

    /// Returns a mutable reference to the element at `slot`, if any.
    #[inline]
    pub fn get_mut(&mut self, slot: Slot) -> Option<&mut T> {
        self.slots.get_mut(&slot)
    }

    /// Returns `true` if `slot` is occupied.
    #[inline]
    #[must_use]
    pub fn contains_key(&self, slot: Slot) -> bool {
        self.slots.contains_key(&slot)
    }

    /// Returns the number of occupied slots.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slot is occupied.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<T> Default for IndexedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for IndexedStore<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexedStore<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(&Slot, &T)> = self.slots.iter().collect();
        entries.sort_unstable_by_key(|(slot, _)| **slot);
        formatter.debug_map().entries(entries).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_store_is_empty() {
        let store: IndexedStore<i32> = IndexedStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.get(0), None);
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i64::MIN)]
    #[case(i64::MAX)]
    fn test_insert_and_get_any_slot(#[case] slot: Slot) {
        let mut store = IndexedStore::new();
        assert_eq!(store.insert(slot, 'x'), None);
        assert_eq!(store.get(slot), Some(&'x'));
        assert!(store.contains_key(slot));
    }

    #[rstest]
    fn test_insert_replaces_existing_element() {
        let mut store = IndexedStore::new();
        store.insert(3, "old");
        assert_eq!(store.insert(3, "new"), Some("old"));
        assert_eq!(store.get(3), Some(&"new"));
        assert_eq!(store.len(), 1);
    }

    #[rstest]
    fn test_remove_vacates_slot() {
        let mut store = IndexedStore::new();
        store.insert(-2, 10);
        assert_eq!(store.remove(-2), Some(10));
        assert_eq!(store.remove(-2), None);
        assert!(store.is_empty());
    }

    #[rstest]
    fn test_get_mut_updates_in_place() {
        let mut store = IndexedStore::new();
        store.insert(5, 1);
        if let Some(element) = store.get_mut(5) {
            *element += 41;
        }
        assert_eq!(store.get(5), Some(&42));
    }

    #[rstest]
    fn test_clear_removes_everything() {
        let mut store = IndexedStore::with_capacity(8);
        for slot in -4..4 {
            store.insert(slot, slot);
        }
        assert_eq!(store.len(), 8);
        store.clear();
        assert!(store.is_empty());
    }

    #[rstest]
    fn test_debug_lists_slots_in_order() {
        let mut store = IndexedStore::new();
        store.insert(2, 'c');
        store.insert(-1, 'a');
        store.insert(0, 'b');
        assert_eq!(format!("{store:?}"), "{-1: 'a', 0: 'b', 2: 'c'}");
    }
}
