use alloc::string::String;
use core::fmt::Debug;
use core::hash::BuildHasher;

use log::trace;

use crate::DefaultHashBuilder;
use crate::error::Error;
use crate::error::Result;
use crate::hash_map;
use crate::hash_map::HashMap;

/// A string-to-string map with strict removal and bulk merge.
///
/// `Dictionary` behaves like a [`HashMap<String, String, S>`] except for two
/// operations:
///
/// - [`erase`](Dictionary::erase) fails with [`Error::InvalidKey`] when the
///   key is absent instead of reporting `false`.
/// - [`merge`](Dictionary::merge) upserts a sequence of pairs: present keys are
///   overwritten when the value differs, absent keys are inserted.
///
/// # Examples
///
/// ```rust
/// # #[cfg(any(feature = "std", feature = "foldhash"))]
/// # {
/// use chain_hash::Dictionary;
/// use chain_hash::Error;
///
/// let mut dict: Dictionary = Dictionary::from_parts(["a", "b", "c"], ["1", "2", "3"]).unwrap();
/// assert_eq!(dict.at("b").map(String::as_str), Ok("2"));
///
/// assert_eq!(dict.erase("b"), Ok("2".to_string()));
/// assert_eq!(dict.erase("b"), Err(Error::invalid_key()));
///
/// dict.merge([("a", "9"), ("z", "26")]);
/// assert_eq!(dict.get("a").map(String::as_str), Some("9"));
/// assert_eq!(dict.get("z").map(String::as_str), Some("26"));
/// # }
/// ```
#[derive(Clone)]
pub struct Dictionary<S = DefaultHashBuilder> {
    map: HashMap<String, String, S>,
}

impl<S> Debug for Dictionary<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(&self.map, f)
    }
}

impl<S: BuildHasher> PartialEq for Dictionary<S> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<S: BuildHasher> Eq for Dictionary<S> {}

impl<S> Dictionary<S> {
    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of buckets.
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Returns `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.map.load_factor()
    }

    /// Removes every entry, keeping the bucket count.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Iterates over the entries in bucket order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.map.iter()
    }

    /// Iterates over the keys in bucket order.
    pub fn keys(&self) -> hash_map::Keys<'_, String, String> {
        self.map.keys()
    }

    /// Iterates over the values in bucket order.
    pub fn values(&self) -> hash_map::Values<'_, String, String> {
        self.map.values()
    }

    /// Removes and yields every entry. The bucket count is unchanged.
    pub fn drain(&mut self) -> hash_map::Drain<'_, String, String> {
        self.map.drain()
    }

    /// Borrows the underlying map.
    pub fn as_map(&self) -> &HashMap<String, String, S> {
        &self.map
    }

    /// Unwraps the underlying map.
    pub fn into_map(self) -> HashMap<String, String, S> {
        self.map
    }
}

impl<S: BuildHasher> Dictionary<S> {
    /// Creates an empty dictionary with the given hasher builder.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            map: HashMap::with_hasher(hash_builder),
        }
    }

    /// Creates an empty dictionary with at least `capacity` buckets and the
    /// given hasher builder.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Builds a dictionary from parallel sequences of keys and values. When a
    /// key repeats, the last value for it wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the sequences differ in length.
    pub fn from_parts_with_hasher<I, J, K, V>(keys: I, values: J, hash_builder: S) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        I::IntoIter: ExactSizeIterator,
        J: IntoIterator<Item = V>,
        J::IntoIter: ExactSizeIterator,
        K: Into<String>,
        V: Into<String>,
    {
        let map = HashMap::from_parts_with_hasher(
            keys.into_iter().map(Into::into),
            values.into_iter().map(Into::into),
            hash_builder,
        )?;
        Ok(Self { map })
    }

    /// Grows the dictionary so that `additional` more entries fit without a
    /// rehash.
    pub fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional);
    }

    /// Inserts the pair if `key` is absent. Returns whether it was inserted;
    /// an existing value is never overwritten.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        self.map.insert(key.into(), value.into())
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Looks up `key` without inserting.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.map.get(key)
    }

    /// Alias of [`get`](Self::get).
    pub fn try_get(&self, key: &str) -> Option<&String> {
        self.map.get(key)
    }

    /// Looks up `key` for modification.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        self.map.get_mut(key)
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn at(&self, key: &str) -> Result<&String> {
        self.map.at(key)
    }

    /// Returns the value stored under `key` for modification.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn at_mut(&mut self, key: &str) -> Result<&mut String> {
        self.map.at_mut(key)
    }

    /// Returns the value for `key`, inserting an empty string first if the key
    /// is absent.
    pub fn get_or_insert_default(&mut self, key: impl Into<String>) -> &mut String {
        self.map.get_or_insert_default(key.into())
    }

    /// Removes `key` and returns its value. The dictionary may shrink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the key is absent. The dictionary is
    /// left untouched in that case.
    pub fn erase(&mut self, key: &str) -> Result<String> {
        self.map.remove(key).ok_or_else(Error::invalid_key)
    }

    /// Upserts every pair in order.
    ///
    /// A present key has its value replaced only when the new value differs.
    /// An absent key is inserted, which may grow the dictionary. Merging never
    /// fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::Dictionary;
    ///
    /// let mut dict: Dictionary = Dictionary::new();
    /// dict.insert("a", "1");
    /// dict.insert("b", "2");
    ///
    /// dict.merge([("a", "9"), ("z", "26")]);
    /// assert_eq!(dict.len(), 3);
    /// assert_eq!(dict.get("a").map(String::as_str), Some("9"));
    /// assert_eq!(dict.get("b").map(String::as_str), Some("2"));
    /// assert_eq!(dict.get("z").map(String::as_str), Some("26"));
    /// # }
    /// ```
    pub fn merge<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut inserted = 0usize;
        let mut updated = 0usize;
        let mut unchanged = 0usize;

        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();
            match self.map.get_mut(key.as_str()) {
                Some(stored) if *stored == value => unchanged += 1,
                Some(stored) => {
                    *stored = value;
                    updated += 1;
                }
                None => {
                    self.map.insert(key, value);
                    inserted += 1;
                }
            }
        }

        trace!(
            "merge inserted {} updated {} unchanged {} (len {}, capacity {})",
            inserted,
            updated,
            unchanged,
            self.map.len(),
            self.map.capacity()
        );
    }

    /// Returns the index of the bucket holding `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn bucket_index(&self, key: &str) -> Result<usize> {
        self.map.bucket_index(key)
    }

    /// Returns the number of entries sharing the bucket of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn bucket_size(&self, key: &str) -> Result<usize> {
        self.map.bucket_size(key)
    }
}

impl<S: BuildHasher + Default> Dictionary<S> {
    /// Creates an empty dictionary with the default bucket count.
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }

    /// Creates an empty dictionary with at least `capacity` buckets.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }

    /// Builds a dictionary from parallel sequences of keys and values using the
    /// default hasher builder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the sequences differ in length.
    pub fn from_parts<I, J, K, V>(keys: I, values: J) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        I::IntoIter: ExactSizeIterator,
        J: IntoIterator<Item = V>,
        J::IntoIter: ExactSizeIterator,
        K: Into<String>,
        V: Into<String>,
    {
        Self::from_parts_with_hasher(keys, values, S::default())
    }
}

impl<S: BuildHasher + Default> Default for Dictionary<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> From<HashMap<String, String, S>> for Dictionary<S> {
    fn from(map: HashMap<String, String, S>) -> Self {
        Self { map }
    }
}

impl<S, K, V> Extend<(K, V)> for Dictionary<S>
where
    S: BuildHasher,
    K: Into<String>,
    V: Into<String>,
{
    /// Same as [`merge`](Dictionary::merge).
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.merge(iter);
    }
}

impl<S, K, V> FromIterator<(K, V)> for Dictionary<S>
where
    S: BuildHasher + Default,
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.merge(iter);
        dict
    }
}

impl<S> IntoIterator for Dictionary<S> {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a Dictionary<S> {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use rand::TryRngCore;
    use rand::rngs::OsRng;
    use siphasher::sip::SipHasher;

    use super::*;

    #[derive(Clone)]
    struct SipHashBuilder {
        k1: u64,
        k2: u64,
    }

    impl BuildHasher for SipHashBuilder {
        type Hasher = SipHasher;

        fn build_hasher(&self) -> Self::Hasher {
            SipHasher::new_with_keys(self.k1, self.k2)
        }
    }

    impl Default for SipHashBuilder {
        fn default() -> Self {
            let mut rng = OsRng;
            Self {
                k1: rng.try_next_u64().unwrap_or(0),
                k2: rng.try_next_u64().unwrap_or(0),
            }
        }
    }

    type Dict = Dictionary<SipHashBuilder>;

    fn abc() -> Dict {
        Dictionary::from_parts(["a", "b", "c"], ["1", "2", "3"]).unwrap()
    }

    #[test]
    fn construct_lookup_and_strict_erase() {
        let mut dict = abc();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.at("b").map(String::as_str), Ok("2"));

        assert_eq!(dict.erase("b"), Ok("2".to_string()));
        assert_eq!(dict.len(), 2);
        assert!(!dict.contains_key("b"));

        assert_eq!(dict.erase("b"), Err(Error::invalid_key()));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn strict_erase_on_missing_key_leaves_capacity() {
        let mut dict: Dict = Dictionary::new();
        dict.insert("a", "1");
        let capacity = dict.capacity();

        let err = dict.erase("zzz").unwrap_err();
        assert_eq!(err, Error::InvalidKey("invalid key".to_string()));
        assert_ne!(err, Error::KeyNotFound);
        assert_eq!(dict.capacity(), capacity);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn length_mismatch() {
        let err = Dict::from_parts(vec!["a", "b"], vec!["1"]).unwrap_err();
        assert_eq!(err, Error::LengthMismatch { keys: 2, values: 1 });
    }

    #[test]
    fn missing_key_lookups() {
        let dict = abc();
        assert_eq!(dict.at("nope"), Err(Error::KeyNotFound));
        assert_eq!(dict.get("nope"), None);
        assert_eq!(dict.try_get("nope"), None);
        assert_eq!(dict.bucket_size("nope"), Err(Error::KeyNotFound));
        assert_eq!(dict.bucket_index("nope"), Err(Error::KeyNotFound));
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn merge_upserts() {
        let mut dict = abc();
        dict.merge([("a", "9"), ("z", "26")]);

        assert_eq!(dict.len(), 4);
        assert_eq!(dict.at("a").map(String::as_str), Ok("9"));
        assert_eq!(dict.at("z").map(String::as_str), Ok("26"));
        assert_eq!(dict.at("b").map(String::as_str), Ok("2"));
        assert_eq!(dict.at("c").map(String::as_str), Ok("3"));
    }

    #[test]
    fn merge_is_idempotent() {
        let mut dict = abc();
        let pairs = [("a", "1"), ("b", "20")];
        dict.merge(pairs);
        let once = dict.clone();
        dict.merge(pairs);
        assert_eq!(dict, once);
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn merge_applies_pairs_in_order() {
        let mut dict: Dict = Dictionary::new();
        dict.merge([("k", "first"), ("k", "second"), ("k", "third")]);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("k").map(String::as_str), Some("third"));
    }

    #[test]
    fn merge_grows_the_table() {
        let mut dict: Dict = Dictionary::new();
        let pairs: Vec<(String, String)> = (0..100)
            .map(|i| (format!("key{i}"), format!("value{i}")))
            .collect();
        dict.merge(pairs);

        assert_eq!(dict.len(), 100);
        assert_eq!(dict.capacity(), 256);
        assert!(dict.load_factor() <= 0.75);
    }

    #[test]
    fn insert_does_not_overwrite() {
        let mut dict = abc();
        assert!(!dict.insert("a", "100"));
        assert_eq!(dict.at("a").map(String::as_str), Ok("1"));
        assert!(dict.insert("d", "4"));
    }

    #[test]
    fn get_or_insert_default_inserts_empty_string() {
        let mut dict: Dict = Dictionary::new();
        dict.get_or_insert_default("greeting").push_str("hello");
        dict.get_or_insert_default("greeting").push_str(" world");
        assert_eq!(dict.at("greeting").map(String::as_str), Ok("hello world"));
        assert_eq!(dict.get_or_insert_default("empty").as_str(), "");
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn extend_merges() {
        let mut dict = abc();
        dict.extend(vec![("c".to_string(), "30".to_string())]);
        assert_eq!(dict.at("c").map(String::as_str), Ok("30"));

        let collected: Dict = [("x", "1"), ("x", "2")].into_iter().collect();
        assert_eq!(collected.get("x").map(String::as_str), Some("2"));
    }

    #[test]
    fn from_base_map() {
        let mut map: HashMap<String, String, SipHashBuilder> = HashMap::new();
        map.insert("a".to_string(), "1".to_string());

        let mut dict = Dictionary::from(map);
        assert_eq!(dict.at("a").map(String::as_str), Ok("1"));
        assert_eq!(dict.erase("missing"), Err(Error::invalid_key()));
        assert_eq!(dict.into_map().len(), 1);
    }

    #[test]
    fn clone_and_equality() {
        let dict = abc();
        let mut copy = dict.clone();
        assert_eq!(copy, dict);
        assert_eq!(copy.capacity(), dict.capacity());

        copy.erase("a").unwrap();
        assert_ne!(copy, dict);
        assert!(dict.contains_key("a"));
    }

    #[test]
    fn iteration_covers_all_entries() {
        let dict = abc();
        let mut pairs: Vec<(&str, &str)> = dict
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        pairs.sort_unstable();
        assert_eq!(pairs, [("a", "1"), ("b", "2"), ("c", "3")]);

        let mut keys: Vec<&String> = (&dict).into_iter().map(|(k, _)| k).collect();
        keys.sort();
        assert_eq!(keys, ["a", "b", "c"]);

        let mut owned: Vec<(String, String)> = dict.into_iter().collect();
        owned.sort();
        assert_eq!(owned.len(), 3);
        assert_eq!(owned[2], ("c".to_string(), "3".to_string()));
    }

    #[test]
    fn drain_and_clear_keep_capacity() {
        let mut dict: Dict = Dictionary::with_capacity(64);
        dict.merge([("a", "1"), ("b", "2")]);

        assert_eq!(dict.drain().count(), 2);
        assert!(dict.is_empty());
        assert_eq!(dict.capacity(), 64);

        dict.insert("c", "3");
        dict.clear();
        assert!(dict.is_empty());
        assert_eq!(dict.capacity(), 64);
    }

    #[test]
    fn debug_output() {
        let mut dict: Dict = Dictionary::new();
        dict.insert("k", "v");
        assert_eq!(format!("{:?}", dict), "{\"k\": \"v\"}");
    }
}
