use core::borrow::Borrow;
use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::iter::FusedIterator;

use log::debug;

use crate::DefaultHashBuilder;
use crate::error::Error;
use crate::error::Result;
use crate::hash_table::Entry as TableEntry;
use crate::hash_table::HashTable;

/// A hash map implemented using the chaining [`HashTable`] as the underlying
/// storage.
///
/// `HashMap<K, V, S>` stores key-value pairs where keys implement `Hash + Eq`
/// and uses a configurable hasher builder `S` to hash keys.
///
/// Unlike `std::collections::HashMap`, [`insert`](HashMap::insert) never
/// overwrites: the first value stored under a key wins until that key is
/// removed. Use [`get_mut`](HashMap::get_mut), [`entry`](HashMap::entry) or
/// [`get_or_insert_default`](HashMap::get_or_insert_default) to update values.
///
/// # Examples
///
/// ```rust
/// # #[cfg(any(feature = "std", feature = "foldhash"))]
/// # {
/// use chain_hash::HashMap;
///
/// let mut map: HashMap<&str, i32> = HashMap::new();
/// assert!(map.insert("a", 1));
/// assert!(!map.insert("a", 2));
/// assert_eq!(map.at(&"a"), Ok(&1));
/// assert_eq!(map.capacity(), 16);
/// # }
/// ```
#[derive(Clone)]
pub struct HashMap<K, V, S = DefaultHashBuilder> {
    table: HashTable<(K, V)>,
    hash_builder: S,
}

impl<K, V, S> Debug for HashMap<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> PartialEq for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    /// Two maps are equal when they have the same length and every entry of
    /// `self` is present in `other` with an equal value. A key missing from
    /// `other` makes the maps unequal.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .all(|(k, v)| other.get(k).is_some_and(|other_v| v == other_v))
    }
}

impl<K, V, S> Eq for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> HashMap<K, V, S> {
    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of buckets. Always a power of two, and at least one.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Returns a reference to the map's hasher builder.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Removes all elements from the map.
    ///
    /// The bucket count is unchanged.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Returns an iterator over the key-value pairs of the map.
    ///
    /// Pairs are yielded in ascending bucket order and, within a bucket, in
    /// insertion order. The iterator borrows the map, so the map cannot be
    /// modified while it is alive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::HashMap;
    ///
    /// let mut map: HashMap<i32, &str> = HashMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let mut pairs: Vec<_> = map.iter().collect();
    /// pairs.sort();
    /// assert_eq!(pairs, [(&1, &"a"), (&2, &"b")]);
    /// # }
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over the key-value pairs of the map, with mutable
    /// references to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.table.iter_mut(),
        }
    }

    /// Returns an iterator over the keys of the map.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values of the map.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator over mutable references to the values of the map.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    /// Returns an iterator that removes and yields all key-value pairs from the
    /// map.
    ///
    /// After calling `drain()`, the map will be empty. Its bucket count is
    /// unchanged.
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        Drain {
            inner: self.table.drain(),
        }
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates a new hash map with the given hasher builder and the default
    /// bucket count.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            table: HashTable::new(),
            hash_builder,
        }
    }

    /// Creates a new hash map with at least `capacity` buckets and the given
    /// hasher builder.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            hash_builder,
        }
    }

    /// Builds a map from parallel sequences of keys and values.
    ///
    /// The `i`-th key is paired with the `i`-th value. When a key repeats, the
    /// last value for it wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the sequences differ in length. No
    /// map is built in that case.
    pub fn from_parts_with_hasher<I, J>(keys: I, values: J, hash_builder: S) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        I::IntoIter: ExactSizeIterator,
        J: IntoIterator<Item = V>,
        J::IntoIter: ExactSizeIterator,
    {
        let keys = keys.into_iter();
        let values = values.into_iter();
        if keys.len() != values.len() {
            debug!(
                "rejecting construction from {} keys and {} values",
                keys.len(),
                values.len()
            );
            return Err(Error::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }

        let mut map = Self::with_hasher(hash_builder);
        for (key, value) in keys.zip(values) {
            match map.entry(key) {
                Entry::Occupied(mut entry) => {
                    entry.insert(value);
                }
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
        }
        Ok(map)
    }

    /// Grows the map so that `additional` more elements can be inserted
    /// without a rehash.
    pub fn reserve(&mut self, additional: usize) {
        self.table.reserve(additional);
    }

    /// Inserts a key-value pair if the key is not already present.
    ///
    /// Returns `true` if the pair was inserted. If the key was present the map
    /// is left unchanged and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::HashMap;
    ///
    /// let mut map: HashMap<i32, &str> = HashMap::new();
    /// assert!(map.insert(37, "a"));
    /// assert!(!map.insert(37, "b"));
    /// assert_eq!(map.get(&37), Some(&"a"));
    /// # }
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let hash = self.hash_builder.hash_one(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(_) => false,
            TableEntry::Vacant(entry) => {
                entry.insert((key, value));
                true
            }
        }
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// This is the non-mutating lookup: a missing key yields `None` and never
    /// inserts anything.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        self.table
            .find(hash, |(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Alias of [`get`](Self::get).
    pub fn try_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        self.table
            .find_mut(hash, |(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::Error;
    /// use chain_hash::HashMap;
    ///
    /// let mut map: HashMap<i32, &str> = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.at(&1), Ok(&"a"));
    /// assert_eq!(map.at(&2), Err(Error::KeyNotFound));
    /// # }
    /// ```
    pub fn at<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns the value for `key`, inserting `V::default()` first if the key
    /// is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::HashMap;
    ///
    /// let mut counts: HashMap<&str, u32> = HashMap::new();
    /// for word in ["a", "b", "a"] {
    ///     *counts.get_or_insert_default(word) += 1;
    /// }
    /// assert_eq!(counts.get("a"), Some(&2));
    /// assert_eq!(counts.get("b"), Some(&1));
    /// # }
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.entry(key).or_default()
    }

    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map. The map may shrink.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was previously in the map.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        self.table.remove(hash, |(k, _)| k.borrow() == key)
    }

    /// Removes a key from the map. Returns whether a pair was removed; an
    /// absent key is not an error.
    pub fn erase<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).is_some()
    }

    /// Returns the index of the bucket holding `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn bucket_index<Q>(&self, key: &Q) -> Result<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        self.table
            .find_bucket(hash, |(k, _)| k.borrow() == key)
            .ok_or(Error::KeyNotFound)
    }

    /// Returns the number of pairs sharing the bucket of `key`, `key`
    /// included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn bucket_size<Q>(&self, key: &Q) -> Result<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.bucket_index(key)
            .map(|index| self.table.bucket_len(index))
    }

    /// Gets the given key's corresponding entry in the map for in-place
    /// manipulation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::HashMap;
    ///
    /// let mut map: HashMap<i32, &str> = HashMap::new();
    ///
    /// map.entry(1).or_insert("a");
    /// map.entry(2).or_insert("b");
    /// map.entry(1).or_insert("c");
    ///
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), Some(&"b"));
    /// # }
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        let hash = self.hash_builder.hash_one(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(entry) => Entry::Occupied(OccupiedEntry { entry }),
            TableEntry::Vacant(entry) => Entry::Vacant(VacantEntry { entry, key }),
        }
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Creates a new hash map with [`INITIAL_CAPACITY`] buckets using the
    /// default hasher builder.
    ///
    /// [`INITIAL_CAPACITY`]: crate::hash_table::INITIAL_CAPACITY
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }

    /// Creates a new hash map with at least `capacity` buckets using the
    /// default hasher builder.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }

    /// Builds a map from parallel sequences of keys and values using the
    /// default hasher builder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the sequences differ in length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::Error;
    /// use chain_hash::HashMap;
    ///
    /// let map: HashMap<&str, i32> = HashMap::from_parts(["a", "b"], [1, 2]).unwrap();
    /// assert_eq!(map.len(), 2);
    ///
    /// let err = HashMap::<&str, i32>::from_parts(["a", "b"], [1]).unwrap_err();
    /// assert_eq!(err, Error::LengthMismatch { keys: 2, values: 1 });
    /// # }
    /// ```
    pub fn from_parts<I, J>(keys: I, values: J) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        I::IntoIter: ExactSizeIterator,
        J: IntoIterator<Item = V>,
        J::IntoIter: ExactSizeIterator,
    {
        Self::from_parts_with_hasher(keys, values, S::default())
    }
}

impl<K, V, S> Default for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Inserts every pair with [`insert`](HashMap::insert) semantics: keys
    /// already present keep their value.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S> IntoIterator for HashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.table.into_iter(),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut HashMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A view into a single entry in the map, which may either be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashMap`].
///
/// [`entry`]: HashMap::entry
pub enum Entry<'a, K, V> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Inserts a default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts a value computed from a closure if the entry is vacant and
    /// returns a mutable reference.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts.
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, K, V> Entry<'a, K, V>
where
    V: Default,
{
    /// Inserts the default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry in the map.
pub struct VacantEntry<'a, K, V> {
    entry: crate::hash_table::VacantEntry<'a, (K, V)>,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// Gets a reference to the key that would be used when inserting a value.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Take ownership of the key.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts the value into the map and returns a mutable reference to it.
    /// The map may grow.
    pub fn insert(self, value: V) -> &'a mut V {
        &mut self.entry.insert((self.key, value)).1
    }
}

/// A view into an occupied entry in the map.
pub struct OccupiedEntry<'a, K, V> {
    entry: crate::hash_table::OccupiedEntry<'a, (K, V)>,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Gets a reference to the key in the entry.
    pub fn key(&self) -> &K {
        &self.entry.get().0
    }

    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.entry.get().1
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.entry.get_mut().1
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.entry.into_mut().1
    }

    /// Inserts a value into the entry and returns the old value.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(&mut self.entry.get_mut().1, value)
    }

    /// Removes the entry from the map and returns the value.
    pub fn remove(self) -> V {
        self.entry.remove().1
    }

    /// Removes the entry from the map and returns the key and value.
    pub fn remove_entry(self) -> (K, V) {
        self.entry.remove()
    }
}

/// An iterator over the key-value pairs of a `HashMap`.
pub struct Iter<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// A mutable iterator over the key-value pairs of a `HashMap`.
pub struct IterMut<'a, K, V> {
    inner: crate::hash_table::IterMut<'a, (K, V)>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (&*k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

/// An iterator over the keys of a `HashMap`.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// An iterator over the values of a `HashMap`.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

/// A mutable iterator over the values of a `HashMap`.
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}

/// An owning iterator over the key-value pairs of a `HashMap`.
pub struct IntoIter<K, V> {
    inner: crate::hash_table::IntoIter<(K, V)>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// A draining iterator over the key-value pairs of a `HashMap`.
pub struct Drain<'a, K, V> {
    inner: crate::hash_table::Drain<'a, (K, V)>,
}

impl<K, V> Iterator for Drain<'_, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Drain<'_, K, V> {}
