use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use log::debug;
use log::trace;

/// Number of buckets a table starts with when no capacity is requested.
pub const INITIAL_CAPACITY: usize = 16;

/// The table never shrinks below this many buckets.
pub const MIN_CAPACITY: usize = 1;

/// Growth is triggered once `len / capacity` rises above this ratio.
pub const UPPER_LOAD_FACTOR: f64 = 0.75;

/// Shrinking is triggered once `len / capacity` falls below this ratio.
pub const LOWER_LOAD_FACTOR: f64 = 0.25;

/// `len / buckets > 3 / 4`, computed without floats or overflow.
#[inline(always)]
fn over_upper_load(len: usize, buckets: usize) -> bool {
    (len as u128) * 4 > (buckets as u128) * 3
}

/// `len / buckets < 1 / 4`, computed without floats or overflow.
#[inline(always)]
fn under_lower_load(len: usize, buckets: usize) -> bool {
    (len as u128) * 4 < buckets as u128
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Capacity {
    buckets: usize,
}

impl From<usize> for Capacity {
    #[inline(always)]
    fn from(value: usize) -> Self {
        // Bucket counts _must_ be powers of two so the index can be computed with a
        // mask instead of a modulo.
        let buckets = value
            .max(MIN_CAPACITY)
            .checked_next_power_of_two()
            .expect("capacity overflow");
        Capacity { buckets }
    }
}

impl Capacity {
    #[inline(always)]
    fn mask(self) -> usize {
        self.buckets - 1
    }

    /// Smallest capacity reachable by doubling that keeps `len` at or under the
    /// upper load factor.
    fn grown_for(self, len: usize) -> Self {
        let mut buckets = self.buckets;
        while over_upper_load(len, buckets) {
            buckets = buckets.checked_mul(2).expect("capacity overflow");
        }
        Capacity { buckets }
    }

    /// Largest capacity reachable by halving that keeps `len` at or over the
    /// lower load factor, bounded by [`MIN_CAPACITY`].
    fn shrunk_for(self, len: usize) -> Self {
        let mut buckets = self.buckets;
        while buckets > MIN_CAPACITY && under_lower_load(len, buckets) {
            buckets /= 2;
        }
        Capacity { buckets }
    }
}

/// Entries sharing one bucket index, in insertion order. The hash is stored
/// next to the value so a rehash never has to call back into the hasher.
type Bucket<V> = Vec<(u64, V)>;

/// Fixed-size array of buckets. Resizing never mutates a store in place; a new
/// store is allocated and the entries are moved over.
#[derive(Clone)]
struct BucketStore<V> {
    buckets: Box<[Bucket<V>]>,
}

impl<V> BucketStore<V> {
    fn new(capacity: Capacity) -> Self {
        let mut buckets = Vec::with_capacity(capacity.buckets);
        buckets.resize_with(capacity.buckets, Vec::new);
        Self {
            buckets: buckets.into_boxed_slice(),
        }
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.buckets.len()
    }

    fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
    }
}

/// Debug statistics for hash table analysis.
///
/// Available in tests and with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of elements currently in the table
    pub populated: usize,
    /// Number of buckets
    pub capacity: usize,
    /// Number of buckets holding at least one element
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Load factor (populated / capacity)
    pub load_factor: f64,
    /// Bucket utilization (occupied_buckets / capacity)
    pub bucket_utilization: f64,
    /// Mean chain length over occupied buckets
    pub average_chain: f64,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Debug Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.populated,
            self.capacity,
            self.load_factor * 100.0
        );
        println!(
            "Bucket Usage: {}/{} ({:.2}% utilization)",
            self.occupied_buckets,
            self.capacity,
            self.bucket_utilization * 100.0
        );
        println!(
            "Chains: longest {}, average {:.2}",
            self.longest_chain, self.average_chain
        );
    }
}

/// A hash table using separate chaining over a power-of-two bucket array.
///
/// `HashTable<V>` stores values of type `V`. Like `hashbrown::HashTable`, it
/// does not hash anything itself: every operation takes the
/// hash of the value's key and an equality predicate. The bucket of a value is
/// `hash & (capacity - 1)`.
///
/// ## Load factor
///
/// After an insertion the table doubles its bucket count until
/// `len / capacity <= 0.75`. After a removal it halves its bucket count while
/// `len / capacity < 0.25`, never going below one bucket. Each change of
/// capacity is a single rehash pass into a freshly allocated bucket array.
///
/// ## Iteration order
///
/// Ascending bucket index, then insertion order within a bucket. Values that
/// are moved by a rehash keep no particular order.
///
/// ## Example
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use chain_hash::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # #[derive(Debug, PartialEq)]
/// # struct Person {
/// #     id: u64,
/// #     name: String,
/// # }
/// #
/// # fn hash_id(id: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     id.hash(&mut hasher);
/// #     hasher.finish()
/// # }
///
/// let mut table = HashTable::new();
/// let hash = hash_id(123);
///
/// match table.entry(hash, |p: &Person| p.id == 123) {
///     chain_hash::hash_table::Entry::Vacant(entry) => {
///         entry.insert(Person {
///             id: 123,
///             name: "Alice".to_string(),
///         });
///     }
///     chain_hash::hash_table::Entry::Occupied(_) => {
///         println!("Person already exists");
///     }
/// }
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Clone)]
pub struct HashTable<V> {
    store: BucketStore<V>,
    populated: usize,
    capacity: Capacity,
}

impl<V> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashTable")
            .field("populated", &self.populated)
            .field("capacity", &self.capacity.buckets)
            .field(
                "chains",
                &self
                    .store
                    .buckets
                    .iter()
                    .map(Vec::len)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Creates an empty table with [`INITIAL_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty table with at least `capacity` buckets.
    ///
    /// The bucket count is rounded up to a power of two, and is at least one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<String> = HashTable::with_capacity(100);
    /// assert_eq!(table.capacity(), 128);
    ///
    /// let table: HashTable<String> = HashTable::with_capacity(0);
    /// assert_eq!(table.capacity(), 1);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity: Capacity = capacity.into();
        Self {
            store: BucketStore::new(capacity),
            populated: 0,
            capacity,
        }
    }

    /// Returns an iterator over all values in the table.
    ///
    /// Values are yielded in ascending bucket order and, within a bucket, in
    /// the order they were inserted. The iterator borrows the table, so the
    /// table cannot be structurally modified while it is alive.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: &self.store.buckets,
            bucket_index: 0,
            slot_index: 0,
            remaining: self.populated,
        }
    }

    /// Returns an iterator over mutable references to all values, in the same
    /// order as [`iter`](Self::iter).
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            buckets: self.store.buckets.iter_mut(),
            current: Default::default(),
            remaining: self.populated,
        }
    }

    /// Returns an iterator that removes and yields all values from the table.
    ///
    /// The table is empty as soon as this is called and keeps its current
    /// capacity. Values not consumed by the iterator are dropped with it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(1, |&v: &u32| v == 1).or_insert(1);
    /// table.entry(2, |&v: &u32| v == 2).or_insert(2);
    ///
    /// let mut values: Vec<u32> = table.drain().collect();
    /// values.sort();
    /// assert_eq!(values, [1, 2]);
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), 16);
    /// ```
    pub fn drain(&mut self) -> Drain<'_, V> {
        let store = core::mem::replace(&mut self.store, BucketStore::new(self.capacity));
        let remaining = core::mem::take(&mut self.populated);
        Drain {
            inner: IntoIter::new(store, remaining),
            _table: PhantomData,
        }
    }

    /// Returns `true` if the table contains no elements.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the number of elements in the table.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns the number of buckets. Always a power of two, and at least one.
    pub fn capacity(&self) -> usize {
        self.capacity.buckets
    }

    /// Returns `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.populated as f64 / self.capacity.buckets as f64
    }

    /// Returns the bucket a value with the given hash lives in.
    #[inline(always)]
    pub fn bucket_index(&self, hash: u64) -> usize {
        hash as usize & self.capacity.mask()
    }

    /// Returns the number of values stored in bucket `index`, or zero if the
    /// index is out of range.
    pub fn bucket_len(&self, index: usize) -> usize {
        self.store.buckets.get(index).map_or(0, Vec::len)
    }

    /// Removes all elements from the table.
    ///
    /// The capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::with_capacity(64);
    /// table.entry(1, |&n: &u64| n == 1).or_insert(1);
    /// table.entry(2, |&n: &u64| n == 2).or_insert(2);
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), 64);
    /// ```
    pub fn clear(&mut self) {
        self.store.clear();
        self.populated = 0;
    }

    /// Grows the table so that `additional` more elements can be inserted
    /// without triggering a rehash.
    pub fn reserve(&mut self, additional: usize) {
        let required = self.populated.saturating_add(additional);
        let capacity = self.capacity.grown_for(required);
        if capacity != self.capacity {
            self.rehash(capacity);
        }
    }

    /// Removes and returns a value from the table.
    ///
    /// The value is identified by its hash and an equality predicate. A
    /// successful removal may shrink the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(42, |&n: &u64| n == 42).or_insert(42);
    ///
    /// assert_eq!(table.remove(42, |&n| n == 42), Some(42));
    /// assert!(table.is_empty());
    /// assert_eq!(table.remove(99, |&n| n == 99), None);
    /// ```
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<V> {
        let (bucket, slot) = self.position(hash, eq)?;
        Some(self.remove_at(bucket, slot))
    }

    /// Gets an entry for the given hash and equality predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::Entry;
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    ///
    /// match table.entry(7, |s: &String| s == "hello") {
    ///     Entry::Vacant(entry) => {
    ///         entry.insert("hello".to_string());
    ///     }
    ///     Entry::Occupied(mut entry) => {
    ///         *entry.get_mut() = "updated".to_string();
    ///     }
    /// }
    /// assert_eq!(table.find(7, |s| s == "hello").map(String::as_str), Some("hello"));
    /// ```
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Entry<'_, V> {
        match self.position(hash, eq) {
            Some((bucket, slot)) => Entry::Occupied(OccupiedEntry {
                table: self,
                bucket,
                slot,
            }),
            None => Entry::Vacant(VacantEntry { table: self, hash }),
        }
    }

    /// Finds a value by hash and equality predicate.
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        self.store.buckets[self.bucket_index(hash)]
            .iter()
            .find(|(_, value)| eq(value))
            .map(|(_, value)| value)
    }

    /// Finds a value by hash and equality predicate, returning a mutable
    /// reference.
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        let index = self.bucket_index(hash);
        self.store.buckets[index]
            .iter_mut()
            .find(|(_, value)| eq(value))
            .map(|(_, value)| value)
    }

    /// Returns the bucket holding the matching value, if there is one.
    pub fn find_bucket(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<usize> {
        self.position(hash, eq).map(|(bucket, _)| bucket)
    }

    fn position(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<(usize, usize)> {
        let bucket = self.bucket_index(hash);
        self.store.buckets[bucket]
            .iter()
            .position(|(_, value)| eq(value))
            .map(|slot| (bucket, slot))
    }

    fn remove_at(&mut self, bucket: usize, slot: usize) -> V {
        let (_, value) = self.store.buckets[bucket].remove(slot);
        self.populated -= 1;
        self.maybe_shrink();
        value
    }

    /// Appends a value known to be absent and returns a reference to it.
    fn push(&mut self, hash: u64, value: V) -> &mut V {
        // Growing before the append leaves the table in the same state as
        // appending first and growing afterwards.
        self.maybe_grow(self.populated + 1);
        self.populated += 1;

        let index = self.bucket_index(hash);
        let bucket = &mut self.store.buckets[index];
        bucket.push((hash, value));
        let slot = bucket.len() - 1;
        &mut bucket[slot].1
    }

    #[inline]
    fn maybe_grow(&mut self, len: usize) {
        if over_upper_load(len, self.capacity.buckets) {
            self.rehash(self.capacity.grown_for(len));
        }
    }

    #[inline]
    fn maybe_shrink(&mut self) {
        if self.capacity.buckets > MIN_CAPACITY
            && under_lower_load(self.populated, self.capacity.buckets)
        {
            self.rehash(self.capacity.shrunk_for(self.populated));
        }
    }

    #[cold]
    fn rehash(&mut self, capacity: Capacity) {
        debug_assert_ne!(capacity, self.capacity);
        debug!(
            "rehashing {} entries from {} to {} buckets",
            self.populated, self.capacity.buckets, capacity.buckets
        );

        let old_store = core::mem::replace(&mut self.store, BucketStore::new(capacity));
        self.capacity = capacity;

        let mask = capacity.mask();
        let mut moved = 0usize;
        for bucket in old_store.buckets.into_vec() {
            for (hash, value) in bucket {
                self.store.buckets[hash as usize & mask].push((hash, value));
                moved += 1;
            }
        }

        debug_assert_eq!(moved, self.populated);
        trace!(
            "rehash moved {} entries across {} buckets",
            moved,
            self.store.len()
        );
    }

    /// Returns a histogram of chain lengths.
    ///
    /// Index `i` of the result holds the number of buckets with exactly `i`
    /// values. The result always has at least one element.
    #[cfg(any(test, feature = "stats"))]
    pub fn bucket_histogram(&self) -> Vec<usize> {
        let longest = self.store.buckets.iter().map(Vec::len).max().unwrap_or(0);
        let mut hist = alloc::vec![0usize; longest + 1];
        for bucket in self.store.buckets.iter() {
            hist[bucket.len()] += 1;
        }
        hist
    }

    /// Returns detailed utilization statistics for debugging.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let occupied_buckets = self.store.buckets.iter().filter(|b| !b.is_empty()).count();
        let longest_chain = self.store.buckets.iter().map(Vec::len).max().unwrap_or(0);
        let capacity = self.capacity.buckets;

        DebugStats {
            populated: self.populated,
            capacity,
            occupied_buckets,
            longest_chain,
            load_factor: self.load_factor(),
            bucket_utilization: occupied_buckets as f64 / capacity as f64,
            average_chain: if occupied_buckets == 0 {
                0.0
            } else {
                self.populated as f64 / occupied_buckets as f64
            },
        }
    }

    /// Pretty-prints the chain-length histogram horizontally using stdout.
    #[cfg(all(any(test, feature = "stats"), feature = "std"))]
    pub fn print_bucket_histogram(&self) {
        let hist = self.bucket_histogram();
        let max = *hist.iter().max().unwrap_or(&0);
        if max == 0 {
            println!("bucket histogram: empty");
            return;
        }

        let max_bar = 60usize;
        let total_units = max_bar * 8;
        println!(
            "bucket histogram ({} entries, {} buckets):",
            self.populated, self.capacity.buckets
        );

        let make_bar = |count: usize| -> alloc::string::String {
            if count == 0 {
                return alloc::string::String::new();
            }
            let units = ((count as u128 * total_units as u128).div_ceil(max as u128)) as usize;
            let full = units / 8;
            let rem = units % 8;
            let mut bar = "█".repeat(full);
            if rem > 0 {
                let ch = match rem {
                    1 => '▏',
                    2 => '▎',
                    3 => '▍',
                    4 => '▌',
                    5 => '▋',
                    6 => '▊',
                    _ => '▉',
                };
                bar.push(ch);
            }
            bar
        };

        for (len, &count) in hist.iter().enumerate() {
            println!("{:>3} | {} ({})", len, make_bar(count), count);
        }
    }
}

/// A view into a single entry in the hash table, which may be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
pub enum Entry<'a, V> {
    /// A vacant entry - no matching value is present in the table
    Vacant(VacantEntry<'a, V>),
    /// An occupied entry - a matching value is present in the table
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the value in the entry.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts the result of `default` if the entry is vacant and returns a
    /// mutable reference to the value in the entry.
    pub fn or_insert_with(self, default: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Calls `f` on the value if the entry is occupied and returns a mutable
    /// reference to it. Returns `None` for a vacant entry.
    pub fn and_modify(self, f: impl FnOnce(&mut V)) -> Option<&'a mut V> {
        match self {
            Entry::Occupied(entry) => {
                let value = entry.into_mut();
                f(value);
                Some(value)
            }
            Entry::Vacant(_) => None,
        }
    }

    /// Inserts `V::default()` if the entry is vacant and returns a mutable
    /// reference to the value in the entry.
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }
}

/// A view into a vacant entry in a [`HashTable`].
///
/// Created by [`HashTable::entry`] when no value matched.
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    hash: u64,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Inserts a value and returns a mutable reference to it.
    ///
    /// The value is appended to the end of its bucket. If this pushes the
    /// load factor over the upper bound the table grows first.
    pub fn insert(self, value: V) -> &'a mut V {
        self.table.push(self.hash, value)
    }

    /// The hash this entry was looked up with.
    pub fn hash(&self) -> u64 {
        self.hash
    }
}

/// A view into an occupied entry in a [`HashTable`].
///
/// Created by [`HashTable::entry`] when a value matched.
pub struct OccupiedEntry<'a, V> {
    table: &'a mut HashTable<V>,
    bucket: usize,
    slot: usize,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.table.store.buckets[self.bucket][self.slot].1
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.table.store.buckets[self.bucket][self.slot].1
    }

    /// Converts the entry into a mutable reference to its value with the
    /// lifetime of the table borrow.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.table.store.buckets[self.bucket][self.slot].1
    }

    /// The bucket this entry lives in.
    pub fn bucket_index(&self) -> usize {
        self.bucket
    }

    /// Removes the value from the table and returns it. The table may shrink.
    pub fn remove(self) -> V {
        self.table.remove_at(self.bucket, self.slot)
    }
}

/// An iterator over the values in a [`HashTable`].
///
/// The iterator is a cursor over the bucket array: it holds a bucket index
/// and a position inside that bucket, skipping empty buckets as it advances.
/// Created by [`HashTable::iter`].
pub struct Iter<'a, V> {
    buckets: &'a [Bucket<V>],
    bucket_index: usize,
    slot_index: usize,
    remaining: usize,
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Iter {
            buckets: self.buckets,
            bucket_index: self.bucket_index,
            slot_index: self.slot_index,
            remaining: self.remaining,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        while let Some(bucket) = self.buckets.get(self.bucket_index) {
            if let Some((_, value)) = bucket.get(self.slot_index) {
                self.slot_index += 1;
                self.remaining -= 1;
                return Some(value);
            }

            self.bucket_index += 1;
            self.slot_index = 0;
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

/// A mutable iterator over the values in a [`HashTable`].
///
/// Created by [`HashTable::iter_mut`].
pub struct IterMut<'a, V> {
    buckets: core::slice::IterMut<'a, Bucket<V>>,
    current: core::slice::IterMut<'a, (u64, V)>,
    remaining: usize,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((_, value)) = self.current.next() {
                self.remaining -= 1;
                return Some(value);
            }
            self.current = self.buckets.next()?.iter_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}

impl<V> FusedIterator for IterMut<'_, V> {}

/// An owning iterator over the values of a [`HashTable`].
///
/// Created by the [`IntoIterator`] implementation for [`HashTable`].
pub struct IntoIter<V> {
    buckets: alloc::vec::IntoIter<Bucket<V>>,
    current: alloc::vec::IntoIter<(u64, V)>,
    remaining: usize,
}

impl<V> IntoIter<V> {
    fn new(store: BucketStore<V>, remaining: usize) -> Self {
        IntoIter {
            buckets: store.buckets.into_vec().into_iter(),
            current: Default::default(),
            remaining,
        }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((_, value)) = self.current.next() {
                self.remaining -= 1;
                return Some(value);
            }
            self.current = self.buckets.next()?.into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> FusedIterator for IntoIter<V> {}

impl<V> IntoIterator for HashTable<V> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.store, self.populated)
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A draining iterator over the values in a [`HashTable`].
///
/// This struct is created by the [`drain`] method on [`HashTable`].
///
/// [`drain`]: HashTable::drain
pub struct Drain<'a, V> {
    inner: IntoIter<V>,
    _table: PhantomData<&'a mut HashTable<V>>,
}

impl<V> Iterator for Drain<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Drain<'_, V> {}

impl<V> FusedIterator for Drain<'_, V> {}
