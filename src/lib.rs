use core::{
    borrow::Borrow,
    fmt::{self, Debug, Display},
    mem,
};

mod error;
mod raw;

pub use error::ScanMapError;

use raw::RawEntries;

#[cfg(feature = "serde")]
mod serde;

/// Starting capacity of a store created with [`ScanMap::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// An associative array over an unsorted backing sequence.
///
/// Keys are located by a linear equality scan over the live entries, growth
/// doubles the allocation on demand, and removal swaps the last live entry
/// into the vacated slot. Lookup is O(n) by design; the structure trades
/// asymptotic speed for simplicity and a compact memory layout.
///
/// Keys arrive as `Option` because callers frequently hold a key that may be
/// absent: `set`, `get` and `has_key` reject `None` with
/// [`ScanMapError::NullKey`], while `remove` treats it as "nothing to do".
pub struct ScanMap<K, V> {
    entries: RawEntries<K, V>,
}

impl<K: Debug, V: Debug> Debug for ScanMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.pairs()).finish()
    }
}

impl<K, V> Default for ScanMap<K, V> {
    /// Creates an empty `ScanMap<K, V>`, equivalent to [`ScanMap::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ScanMap<K, V> {
    /// Creates an empty `ScanMap` with the default starting capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use scan_map::{ScanMap, DEFAULT_CAPACITY};
    ///
    /// let map: ScanMap<u32, String> = ScanMap::new();
    /// assert_eq!(map.len(), 0);
    /// assert!(map.capacity() >= DEFAULT_CAPACITY);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `ScanMap` holding at least `capacity` entries without
    /// reallocating. Any starting capacity is valid, including zero; the
    /// store doubles its allocation whenever an insertion outgrows it.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RawEntries::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the map can hold without reallocating.
    ///
    /// This number is a lower bound; the `ScanMap<K, V>` might be able to
    /// hold more, but is guaranteed to be able to hold at least this many.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns the number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.len() == 0
    }

    /// Pairs over the valid range in current storage order.
    #[inline]
    pub(crate) fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries
            .as_slice()
            .iter()
            .map(|entry| (&entry.key, &entry.value))
    }
}

impl<K: Eq, V> ScanMap<K, V> {
    /// Associates `value` with `key`. An existing entry with an equal key is
    /// overwritten in place and its previous value returned; otherwise the
    /// pair is appended, growing the backing sequence if it is full.
    ///
    /// Never fails for a `Some` key, including the first insertion into an
    /// empty store.
    ///
    /// # Errors
    ///
    /// [`ScanMapError::NullKey`] if `key` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scan_map::ScanMap;
    ///
    /// let mut map = ScanMap::new();
    /// assert_eq!(map.set(Some("power"), 3), Ok(None));
    /// assert_eq!(map.set(Some("power"), 9), Ok(Some(3)));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn set(&mut self, key: Option<K>, value: V) -> Result<Option<V>, ScanMapError> {
        let key = key.ok_or(ScanMapError::NullKey)?;
        match self.entries.find(&key) {
            Some(index) => Ok(Some(mem::replace(self.entries.value_mut(index), value))),
            None => {
                self.entries.push(key, value);
                Ok(None)
            }
        }
    }

    /// Returns the value associated with the most recent `set` for an equal
    /// key.
    ///
    /// The key may be any borrowed form of the map's key type, as long as
    /// `Eq` on the borrowed form matches the key type.
    ///
    /// # Errors
    ///
    /// [`ScanMapError::NullKey`] if `key` is `None`,
    /// [`ScanMapError::KeyNotFound`] if no live entry has an equal key.
    ///
    /// # Examples
    ///
    /// ```
    /// use scan_map::{ScanMap, ScanMapError};
    ///
    /// let mut map = ScanMap::new();
    /// map.set(Some("pi".to_string()), 314)?;
    /// assert_eq!(map.get(Some("pi"))?, &314);
    /// assert_eq!(map.get(Some("tau")), Err(ScanMapError::KeyNotFound));
    /// # Ok::<(), ScanMapError>(())
    /// ```
    pub fn get<Q>(&self, key: Option<&Q>) -> Result<&V, ScanMapError>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let key = key.ok_or(ScanMapError::NullKey)?;
        match self.entries.find(key) {
            Some(index) => Ok(&self.entries.as_slice()[index].value),
            None => Err(ScanMapError::KeyNotFound),
        }
    }

    /// Whether a live entry has a key equal to `key`: `Ok(true)` exactly when
    /// [`get`](ScanMap::get) would succeed, `Ok(false)` when the key is
    /// absent.
    ///
    /// # Errors
    ///
    /// [`ScanMapError::NullKey`] if `key` is `None`. A `None` key is an
    /// invalid query, not a missing one.
    pub fn has_key<Q>(&self, key: Option<&Q>) -> Result<bool, ScanMapError>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let key = key.ok_or(ScanMapError::NullKey)?;
        Ok(self.entries.find(key).is_some())
    }

    /// Removes the entry with a key equal to `key`, returning its value.
    ///
    /// Idempotent and infallible: a missing or `None` key is a no-op
    /// returning `None`, so removal is always safe to call speculatively.
    /// The hole left by the entry is filled by the last live entry, so entry
    /// order is unspecified afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use scan_map::ScanMap;
    ///
    /// let mut map = ScanMap::new();
    /// map.set(Some('x'), 1).unwrap();
    /// assert_eq!(map.remove(Some(&'x')), Some(1));
    /// assert_eq!(map.remove(Some(&'x')), None);
    /// assert_eq!(map.remove(None::<&char>), None);
    /// ```
    pub fn remove<Q>(&mut self, key: Option<&Q>) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self.entries.find(key?)?;
        Some(self.entries.swap_remove(index).value)
    }
}

impl<K: Eq + Clone, V: Clone> Clone for ScanMap<K, V> {
    /// Deep element-wise copy, populated through [`ScanMap::set`] so the
    /// copy's invariants hold on their own rather than by raw duplication.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len());
        for (key, value) in self.pairs() {
            // Source keys are concrete and distinct, so set cannot fail or
            // overwrite here.
            let inserted = copy.set(Some(key.clone()), value.clone());
            debug_assert!(matches!(inserted, Ok(None)));
        }
        copy
    }
}

impl<K: Display, V: Display> Display for ScanMap<K, V> {
    /// Renders the live entries as `{Key0:Value0, Key1:Value1, ...}` in
    /// current storage order, which is not insertion order once anything has
    /// been removed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.pairs().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}:{value}")?;
        }
        f.write_str("}")
    }
}
