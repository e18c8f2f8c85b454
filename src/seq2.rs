//! Lazy key/value sequences.
//!
//! [`Seq2<S>`] wraps any sequence of `(K, V)` pairs and offers the
//! two-argument pipeline: predicates and mappers receive the key and the
//! value separately. It is as lazy as the sequence it wraps. Projections
//! ([`keys`](Seq2::keys), [`values`](Seq2::values)) turn it back into a plain
//! single-value [`Seq`].
//!
//! Keys are unique when the source is a map. Iteration order is whatever the
//! source produces, which for hash maps is unspecified; add
//! [`sort_by`](Seq2::sort_by) when order matters.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use steams::seq::SeqExt;
//! use steams::Seq2;
//!
//! let stock = HashMap::from([("apples", 3), ("pears", 0), ("plums", 7)]);
//!
//! let in_stock = Seq2::from_map(stock)
//!     .filter(|_, count| *count > 0)
//!     .sort_by(|a, b| a.cmp(b))
//!     .keys();
//!
//! assert_eq!(in_stock.collect(), vec!["apples", "plums"]);
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use crate::entry::Entry;
use crate::map::Map;
use crate::optional::Optional;
use crate::seq::{self, FromIter, Seq, SeqExt};

/// A lazy sequence of key/value pairs.
#[derive(Debug, Clone)]
pub struct Seq2<S> {
    inner: S,
}

impl<K, V> Seq2<FromIter<HashMap<K, V>>>
where
    K: Clone,
    V: Clone,
{
    /// A key/value sequence over an owned map.
    ///
    /// The map is cloned at the start of every drive.
    pub fn from_map(map: HashMap<K, V>) -> Self {
        Seq2::new(seq::from_iter(map))
    }
}

impl<S, K, V> Seq2<S>
where
    S: Seq<Item = (K, V)>,
{
    /// Wrap a sequence of pairs.
    pub fn new(inner: S) -> Self {
        Seq2 { inner }
    }

    /// Unwrap into the underlying sequence of pairs.
    pub fn into_inner(self) -> S {
        self.inner
    }

    // ========== Intermediate stages ==========

    /// Keep pairs satisfying `predicate`.
    pub fn filter<P>(self, predicate: P) -> Seq2<impl Seq<Item = (K, V)>>
    where
        P: Fn(&K, &V) -> bool,
    {
        Seq2::new(self.inner.filter(move |(k, v)| predicate(k, v)))
    }

    /// Transform both key and value.
    ///
    /// Mapping two keys to the same new key is allowed; collecting keeps the
    /// last pair for a repeated key.
    pub fn map<K2, V2, F>(self, f: F) -> Seq2<impl Seq<Item = (K2, V2)>>
    where
        F: Fn(K, V) -> (K2, V2),
    {
        Seq2::new(self.inner.map(move |(k, v)| f(k, v)))
    }

    /// Transform the values, keeping keys as they are.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use steams::Seq2;
    ///
    /// let prices = Seq2::from_map(HashMap::from([("tea", 3)]));
    /// let labels = prices.map_values(|item, price| format!("{}: ${}", item, price));
    /// assert_eq!(labels.collect()["tea"], "tea: $3");
    /// ```
    pub fn map_values<U, F>(self, f: F) -> Seq2<impl Seq<Item = (K, U)>>
    where
        F: Fn(&K, V) -> U,
    {
        Seq2::new(self.inner.map(move |(k, v)| {
            let mapped = f(&k, v);
            (k, mapped)
        }))
    }

    /// Observe each pair as it is pulled.
    pub fn peek<F>(self, f: F) -> Seq2<impl Seq<Item = (K, V)>>
    where
        F: Fn(&K, &V),
    {
        Seq2::new(self.inner.peek(move |(k, v)| f(k, v)))
    }

    /// Yield at most `n` pairs.
    pub fn take(self, n: usize) -> Seq2<impl Seq<Item = (K, V)>> {
        Seq2::new(self.inner.take(n))
    }

    /// Yield pairs stably ordered by key.
    ///
    /// Materializing.
    pub fn sort_by<C>(self, compare: C) -> Seq2<impl Seq<Item = (K, V)>>
    where
        C: Fn(&K, &K) -> Ordering,
    {
        Seq2::new(self.inner.sort_by(move |a, b| compare(&a.0, &b.0)))
    }

    // ========== Projections ==========

    /// The keys only.
    pub fn keys(self) -> impl Seq<Item = K> {
        self.inner.map(|(k, _)| k)
    }

    /// The values only.
    pub fn values(self) -> impl Seq<Item = V> {
        self.inner.map(|(_, v)| v)
    }

    /// The pairs as [`Entry`] values.
    pub fn entries(self) -> impl Seq<Item = Entry<K, V>> {
        self.inner.map(|(k, v)| Entry::new(k, v))
    }

    /// Turn each pair into a single value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use steams::seq::SeqExt;
    /// use steams::Seq2;
    ///
    /// let ages = Seq2::from_map(HashMap::from([("Ann", 31)]));
    /// let lines = ages.to_seq(|name, age| format!("{} is {}", name, age));
    /// assert_eq!(lines.collect(), vec!["Ann is 31"]);
    /// ```
    pub fn to_seq<R, F>(self, f: F) -> impl Seq<Item = R>
    where
        F: Fn(K, V) -> R,
    {
        self.inner.map(move |(k, v)| f(k, v))
    }

    // ========== Terminal operations ==========

    /// Call `f` on every pair.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(K, V),
    {
        self.inner.for_each(|(k, v)| f(k, v));
    }

    /// Count the pairs.
    pub fn count(&self) -> usize {
        self.inner.count()
    }

    /// `true` if every pair satisfies `predicate`.
    pub fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.inner.all(|(k, v)| predicate(k, v))
    }

    /// `true` if some pair satisfies `predicate`.
    pub fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.inner.any(|(k, v)| predicate(k, v))
    }

    /// `true` if no pair satisfies `predicate`.
    pub fn none<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        !self.any(predicate)
    }

    /// The pair whose key wins every comparison.
    ///
    /// `better(candidate, current)` returns `true` when the candidate key
    /// should replace the current winner. Empty when there are no pairs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use steams::Seq2;
    ///
    /// let scores = Seq2::from_map(HashMap::from([(3, "c"), (1, "a"), (2, "b")]));
    /// let lowest = scores.compare(|a, b| a < b).get();
    /// assert_eq!((lowest.key, lowest.value), (1, "a"));
    /// ```
    pub fn compare<F>(&self, mut better: F) -> Optional<Entry<K, V>>
    where
        F: FnMut(&K, &K) -> bool,
    {
        self.inner
            .compare(|candidate, current| better(&candidate.0, &current.0))
            .map(|(k, v)| Entry::new(k, v))
    }

    /// Gather the pairs into a `HashMap`. A repeated key keeps the last value.
    pub fn collect(&self) -> HashMap<K, V>
    where
        K: Eq + Hash,
    {
        self.inner.fold(HashMap::new(), |mut acc, (k, v)| {
            acc.insert(k, v);
            acc
        })
    }

    /// Gather the pairs into an eager [`Map`].
    pub fn collect_map(&self) -> Map<K, V>
    where
        K: Eq + Hash,
    {
        Map::from(self.collect())
    }
}
