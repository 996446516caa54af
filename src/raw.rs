use core::borrow::Borrow;

/// A key/value slot in the valid range.
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

/// The backing sequence: an exclusively-owned, growable run of entries.
///
/// Indices `[0, len)` hold live entries; storage past `len` is uninitialized
/// and unreachable. Lookup is a front-to-back scan, first match wins. Removal
/// swaps the last live entry into the hole, so entry order is unspecified
/// once anything has been removed.
pub(crate) struct RawEntries<K, V> {
    slots: Vec<Entry<K, V>>,
}

impl<K, V> RawEntries<K, V> {
    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[Entry<K, V>] {
        &self.slots
    }

    #[inline]
    pub(crate) fn value_mut(&mut self, index: usize) -> &mut V {
        &mut self.slots[index].value
    }

    /// Appends an entry, doubling the allocation first when the valid range
    /// already fills it. The caller guarantees `key` is not present.
    #[inline]
    pub(crate) fn push(&mut self, key: K, value: V) {
        if self.slots.len() == self.slots.capacity() {
            // max(1) covers a store created with zero capacity.
            self.slots.reserve_exact(self.slots.capacity().max(1));
        }
        self.slots.push(Entry { key, value });
    }

    /// Removes the entry at `index` by overwriting it with the last live
    /// entry and shrinking the valid range by one. O(1), order-destroying.
    #[inline]
    pub(crate) fn swap_remove(&mut self, index: usize) -> Entry<K, V> {
        self.slots.swap_remove(index)
    }

    /// Index of the first entry whose key equals `key`, scanning the valid
    /// range front to back.
    #[inline]
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.slots.iter().position(|entry| entry.key.borrow() == key)
    }
}
