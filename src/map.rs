//! Eager key/value collections.
//!
//! [`Map<K, V>`] is the materialized counterpart of [`Seq2`]: each key is
//! unique and maps to exactly one value. Like [`List`], transformations
//! consume the map and build a new one. Iteration order is unspecified;
//! [`sort_by`](Map::sort_by) returns an ordered [`List`] of entries when
//! order matters.
//!
//! # Examples
//!
//! ```
//! use steams::Map;
//!
//! let stock: Map<&str, u32> = vec![("apples", 3), ("pears", 0), ("plums", 7)]
//!     .into_iter()
//!     .collect();
//!
//! let in_stock = stock.filter(|_, count| *count > 0).sort_by(|a, b| a.cmp(b));
//! let names: Vec<&str> = in_stock.map(|e| e.key).into_vec();
//! assert_eq!(names, vec!["apples", "plums"]);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Index;

use crate::entry::Entry;
use crate::list::List;
use crate::optional::Optional;
use crate::seq::{self, FromIter};
use crate::seq2::Seq2;

/// An owned collection of unique keys, each mapped to one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map<K, V>
where
    K: Eq + Hash,
{
    entries: HashMap<K, V>,
}

impl<K, V> Map<K, V>
where
    K: Eq + Hash,
{
    /// An empty map.
    pub fn new() -> Self {
        Map {
            entries: HashMap::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries. Alias of [`len`](Map::len) matching the lazy API.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value stored under `key`.
    ///
    /// # Example
    ///
    /// ```
    /// use steams::Map;
    ///
    /// let m: Map<String, i32> = vec![("a".to_string(), 1)].into_iter().collect();
    /// assert_eq!(m.get("a").copied().get(), 1);
    /// assert!(m.get("b").is_empty());
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Optional<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get(key).into()
    }

    /// `true` if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Unwrap into the backing `HashMap`.
    pub fn collect(self) -> HashMap<K, V> {
        self.entries
    }

    /// Borrowing iterator over the entries, in unspecified order.
    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// A lazy key/value view over clones of the entries.
    ///
    /// # Example
    ///
    /// ```
    /// use steams::Map;
    ///
    /// let m: Map<&str, i32> = vec![("a", 1), ("b", 2)].into_iter().collect();
    /// let big = m.seq().filter(|_, v| *v > 1).collect();
    /// assert_eq!(big.len(), 1);
    /// ```
    pub fn seq(&self) -> Seq2<FromIter<HashMap<K, V>>>
    where
        K: Clone,
        V: Clone,
    {
        Seq2::new(seq::from_iter(self.entries.clone()))
    }

    // ========== Transformations ==========

    /// Keep entries satisfying `predicate`.
    pub fn filter<P>(self, mut predicate: P) -> Map<K, V>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.entries
            .into_iter()
            .filter(|(k, v)| predicate(k, v))
            .collect()
    }

    /// Transform both key and value. Colliding new keys keep one of the values.
    pub fn map<K2, V2, F>(self, mut f: F) -> Map<K2, V2>
    where
        K2: Eq + Hash,
        F: FnMut(K, V) -> (K2, V2),
    {
        self.entries.into_iter().map(|(k, v)| f(k, v)).collect()
    }

    /// Transform the values, keeping the keys.
    pub fn map_values<U, F>(self, mut f: F) -> Map<K, U>
    where
        F: FnMut(&K, V) -> U,
    {
        self.entries
            .into_iter()
            .map(|(k, v)| {
                let mapped = f(&k, v);
                (k, mapped)
            })
            .collect()
    }

    /// Call `f` on every entry and pass the map through unchanged.
    pub fn peek<F>(self, mut f: F) -> Map<K, V>
    where
        F: FnMut(&K, &V),
    {
        for (k, v) in &self.entries {
            f(k, v);
        }
        self
    }

    /// Keep at most `n` entries. Which ones is unspecified unless the map was
    /// ordered first with [`sort_by`](Map::sort_by).
    pub fn limit(self, n: usize) -> Map<K, V> {
        self.entries.into_iter().take(n).collect()
    }

    // ========== Terminal operations ==========

    /// Call `f` on every entry.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V),
    {
        for (k, v) in &self.entries {
            f(k, v);
        }
    }

    /// `true` if every entry satisfies `predicate`.
    pub fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.entries.iter().all(|(k, v)| predicate(k, v))
    }

    /// `true` if some entry satisfies `predicate`.
    pub fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.entries.iter().any(|(k, v)| predicate(k, v))
    }

    /// `true` if no entry satisfies `predicate`.
    pub fn none<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        !self.any(predicate)
    }

    /// The keys, in unspecified order.
    pub fn keys(&self) -> List<K>
    where
        K: Clone,
    {
        self.entries.keys().cloned().collect()
    }

    /// The values, in unspecified order.
    pub fn values(&self) -> List<V>
    where
        V: Clone,
    {
        self.entries.values().cloned().collect()
    }

    /// The entries, in unspecified order.
    pub fn entries(self) -> List<Entry<K, V>> {
        self.entries
            .into_iter()
            .map(|(k, v)| Entry::new(k, v))
            .collect()
    }

    /// Turn each entry into one value.
    pub fn to_list<R, F>(self, mut f: F) -> List<R>
    where
        F: FnMut(K, V) -> R,
    {
        self.entries.into_iter().map(|(k, v)| f(k, v)).collect()
    }

    /// The entries stably ordered by key.
    ///
    /// # Example
    ///
    /// ```
    /// use steams::Map;
    ///
    /// let m: Map<i32, &str> = vec![(2, "b"), (1, "a"), (3, "c")].into_iter().collect();
    /// let ordered = m.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(ordered.map(|e| e.value).into_vec(), vec!["c", "b", "a"]);
    /// ```
    pub fn sort_by<C>(self, mut compare: C) -> List<Entry<K, V>>
    where
        C: FnMut(&K, &K) -> Ordering,
    {
        self.entries().sort_by(|a, b| compare(&a.key, &b.key))
    }

    /// The entry whose key wins every comparison.
    ///
    /// `better(candidate, current)` returns `true` when the candidate key
    /// should replace the current best. Empty when the map is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use steams::Map;
    ///
    /// let m: Map<i32, &str> = vec![(2, "b"), (1, "a")].into_iter().collect();
    /// let lowest = m.get_compared(|a, b| a < b).get();
    /// assert_eq!(*lowest.value, "a");
    /// ```
    pub fn get_compared<F>(&self, mut better: F) -> Optional<Entry<&K, &V>>
    where
        F: FnMut(&K, &K) -> bool,
    {
        let mut best: Option<(&K, &V)> = None;
        for (k, v) in &self.entries {
            best = match best {
                Some((current, _)) if !better(k, current) => best,
                _ => Some((k, v)),
            };
        }
        best.map(|(k, v)| Entry::new(k, v)).into()
    }
}

impl<K, V> Default for Map<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Map::new()
    }
}

impl<K, V> From<HashMap<K, V>> for Map<K, V>
where
    K: Eq + Hash,
{
    fn from(entries: HashMap<K, V>) -> Self {
        Map { entries }
    }
}

impl<K, V> From<Map<K, V>> for HashMap<K, V>
where
    K: Eq + Hash,
{
    fn from(map: Map<K, V>) -> Self {
        map.entries
    }
}

impl<K, V> FromIterator<(K, V)> for Map<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Map {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K, V> IntoIterator for Map<K, V>
where
    K: Eq + Hash,
{
    type Item = (K, V);
    type IntoIter = std::collections::hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Map<K, V>
where
    K: Eq + Hash,
{
    type Item = (&'a K, &'a V);
    type IntoIter = std::collections::hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K, Q, V> Index<&Q> for Map<K, V>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &Q) -> &V {
        &self.entries[key]
    }
}
