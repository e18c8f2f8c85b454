//! Eager, materialized sequences.
//!
//! [`List<T>`] offers the same operations as the lazy [`Seq`](crate::seq::Seq)
//! pipeline, but every stage runs immediately and produces a new backing
//! vector. Transformations consume the list they are called on, so the
//! input can never be aliased by its output. Lookups borrow the list and
//! hand back `Optional<&T>`.
//!
//! # Examples
//!
//! ```
//! use steams::{list, List};
//!
//! let words = list!["pear", "fig", "apple", "fig"];
//! let short = words
//!     .distinct()
//!     .filter(|w| w.len() <= 4)
//!     .sorted(|a, b| a < b);
//!
//! assert_eq!(short.into_vec(), vec!["fig", "pear"]);
//! ```

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::ops::{Add, Index};

use crate::error::LengthMismatchError;
use crate::map::Map;
use crate::optional::Optional;
use crate::seq::{self, Of};

/// Build a [`List`] from its elements, like `vec!`.
///
/// # Example
///
/// ```
/// use steams::list;
///
/// let l = list![1, 2, 3];
/// assert_eq!(l.len(), 3);
///
/// let empty: steams::List<i32> = list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::List::from(vec![$($item),+])
    };
}

/// An owned, ordered, indexable sequence.
///
/// # Example
///
/// ```
/// use steams::List;
///
/// let l = List::of(vec![5, 3, 8]);
/// assert_eq!(l.max().cloned().get(), 8);
/// assert_eq!(l.map(|x| x * 2).into_vec(), vec![10, 6, 16]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct List<T> {
    items: Vec<T>,
}

impl<T> List<T> {
    /// An empty list.
    pub fn new() -> Self {
        List { items: Vec::new() }
    }

    /// A list over `items`. Same as `List::from`.
    pub fn of(items: Vec<T>) -> Self {
        List { items }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements. Alias of [`len`](List::len) matching the lazy API.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Borrowing iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Unwrap into the backing vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Same as [`into_vec`](List::into_vec); ends a pipeline.
    pub fn collect(self) -> Vec<T> {
        self.items
    }

    /// A lazy sequence over clones of the elements.
    ///
    /// # Example
    ///
    /// ```
    /// use steams::seq::SeqExt;
    /// use steams::list;
    ///
    /// let lazy = list![1, 2, 3].seq().map(|x| x * 10);
    /// assert_eq!(lazy.collect(), vec![10, 20, 30]);
    /// ```
    pub fn seq(self) -> Of<T>
    where
        T: Clone,
    {
        seq::of(self.items)
    }

    // ========== Transformations ==========

    /// Keep only elements satisfying `predicate`.
    pub fn filter<P>(self, mut predicate: P) -> List<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.into_iter().filter(|x| predicate(x)).collect()
    }

    /// Transform each element.
    pub fn map<U, F>(self, f: F) -> List<U>
    where
        F: FnMut(T) -> U,
    {
        self.items.into_iter().map(f).collect()
    }

    /// Transform each element, dropping those mapped to `None`.
    pub fn filter_map<U, F>(self, f: F) -> List<U>
    where
        F: FnMut(T) -> Option<U>,
    {
        self.items.into_iter().filter_map(f).collect()
    }

    /// Expand each element and concatenate the results into one list.
    ///
    /// # Example
    ///
    /// ```
    /// use steams::list;
    ///
    /// let repeated = list![1, 2].flat_map(|x| vec![x; x as usize]);
    /// assert_eq!(repeated.into_vec(), vec![1, 2, 2]);
    /// ```
    pub fn flat_map<I, F>(self, f: F) -> List<I::Item>
    where
        F: FnMut(T) -> I,
        I: IntoIterator,
    {
        self.items.into_iter().flat_map(f).collect()
    }

    /// Keep at most the first `n` elements.
    pub fn limit(mut self, n: usize) -> List<T> {
        self.items.truncate(n);
        self
    }

    /// Alias of [`limit`](List::limit).
    pub fn take(self, n: usize) -> List<T> {
        self.limit(n)
    }

    /// Keep the leading elements that satisfy `predicate`.
    pub fn take_while<P>(self, mut predicate: P) -> List<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.into_iter().take_while(|x| predicate(x)).collect()
    }

    /// Drop the first `n` elements.
    pub fn skip(self, n: usize) -> List<T> {
        self.items.into_iter().skip(n).collect()
    }

    /// Drop the leading elements that satisfy `predicate`.
    pub fn skip_while<P>(self, mut predicate: P) -> List<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.into_iter().skip_while(|x| predicate(x)).collect()
    }

    /// Pair each element with its position.
    pub fn enumerate(self) -> List<(usize, T)> {
        self.items.into_iter().enumerate().collect()
    }

    /// Append the elements of `other`.
    pub fn chain(mut self, other: List<T>) -> List<T> {
        self.items.extend(other.items);
        self
    }

    /// Call `f` on each element and pass the list through unchanged.
    pub fn peek<F>(self, mut f: F) -> List<T>
    where
        F: FnMut(&T),
    {
        self.items.iter().for_each(&mut f);
        self
    }

    /// Reverse the order of the elements.
    pub fn reverse(mut self) -> List<T> {
        self.items.reverse();
        self
    }

    /// Stable sort by `compare`.
    pub fn sort_by<C>(mut self, compare: C) -> List<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
        self
    }

    /// Stable sort by a less-than predicate.
    ///
    /// # Example
    ///
    /// ```
    /// use steams::list;
    ///
    /// let by_len = list!["ccc", "a", "bb", "b"].sorted(|a, b| a.len() < b.len());
    /// assert_eq!(by_len.into_vec(), vec!["a", "b", "bb", "ccc"]);
    /// ```
    pub fn sorted<F>(self, mut less: F) -> List<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.sort_by(|a, b| {
            if less(a, b) {
                Ordering::Less
            } else if less(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
    }

    /// Keep the first occurrence of each element.
    pub fn distinct(self) -> List<T>
    where
        T: Eq + Hash + Clone,
    {
        let mut seen = HashSet::new();
        self.filter(|x| seen.insert(x.clone()))
    }

    // ========== Reductions ==========

    /// Combine left to right, starting from `init`.
    pub fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.items.into_iter().fold(init, f)
    }

    /// Combine right to left, starting from `init`.
    pub fn rfold<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.items
            .into_iter()
            .rev()
            .fold(init, |acc, item| f(item, acc))
    }

    /// Combine using the first element as the starting value.
    pub fn reduce<F>(self, f: F) -> Optional<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.items.into_iter().reduce(f).into()
    }

    /// Sum of the elements; `Default::default()` when empty.
    pub fn sum(self) -> T
    where
        T: Add<Output = T> + Default,
    {
        self.fold(T::default(), |acc, item| acc + item)
    }

    /// Split into elements satisfying `predicate` and the rest.
    pub fn partition<P>(self, mut predicate: P) -> (List<T>, List<T>)
    where
        P: FnMut(&T) -> bool,
    {
        let (matching, rest): (Vec<T>, Vec<T>) =
            self.items.into_iter().partition(|x| predicate(x));
        (List::from(matching), List::from(rest))
    }

    /// Group elements by `classifier`, keeping order inside each group.
    ///
    /// # Example
    ///
    /// ```
    /// use steams::list;
    ///
    /// let names = list!["Alice", "Bob", "Brian", "Charlie"];
    /// let groups = names.group_by(|n| n.chars().next().unwrap_or_default());
    /// assert_eq!(groups[&'B'].as_slice(), &["Bob", "Brian"]);
    /// ```
    pub fn group_by<K, F>(self, mut classifier: F) -> Map<K, List<T>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut groups: HashMap<K, List<T>> = HashMap::new();
        for item in self.items {
            groups.entry(classifier(&item)).or_default().items.push(item);
        }
        Map::from(groups)
    }

    /// Count elements per `classifier` key.
    pub fn group_by_counting<K, F>(&self, mut classifier: F) -> Map<K, usize>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut counts: HashMap<K, usize> = HashMap::new();
        for item in &self.items {
            *counts.entry(classifier(item)).or_insert(0) += 1;
        }
        Map::from(counts)
    }

    /// Pair elements positionally with `other`.
    ///
    /// Lists of different lengths are rejected with [`LengthMismatchError`].
    ///
    /// # Example
    ///
    /// ```
    /// use steams::list;
    ///
    /// let pairs = list![1, 2].zip(list!["a", "b"]).unwrap();
    /// assert_eq!(pairs.into_vec(), vec![(1, "a"), (2, "b")]);
    ///
    /// let err = list![1, 2, 3].zip(list!["a"]).unwrap_err();
    /// assert_eq!((err.left, err.right), (3, 1));
    /// ```
    pub fn zip<U>(self, other: List<U>) -> Result<List<(T, U)>, LengthMismatchError> {
        if self.len() != other.len() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                left = self.len(),
                right = other.len(),
                "refusing to zip lists of different lengths"
            );
            return Err(LengthMismatchError::new(self.len(), other.len()));
        }
        Ok(self.items.into_iter().zip(other.items).collect())
    }

    /// Build a [`Map`]. A repeated key keeps the last value.
    pub fn to_map<K, V, FK, FV>(self, mut key: FK, mut value: FV) -> Map<K, V>
    where
        K: Eq + Hash,
        FK: FnMut(&T) -> K,
        FV: FnMut(T) -> V,
    {
        self.items
            .into_iter()
            .map(|item| (key(&item), value(item)))
            .collect()
    }

    // ========== Lookups ==========

    /// Call `f` on every element.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.items.iter().for_each(f);
    }

    /// Call `f` on every element together with its position.
    pub fn for_each_indexed<F>(&self, mut f: F)
    where
        F: FnMut(usize, &T),
    {
        for (index, item) in self.items.iter().enumerate() {
            f(index, item);
        }
    }

    /// The first element.
    pub fn first(&self) -> Optional<&T> {
        self.items.first().into()
    }

    /// The last element.
    pub fn last(&self) -> Optional<&T> {
        self.items.last().into()
    }

    /// The element at position `n`.
    pub fn nth(&self, n: usize) -> Optional<&T> {
        self.items.get(n).into()
    }

    /// The first element satisfying `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Optional<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|x| predicate(x)).into()
    }

    /// Position of the first element satisfying `predicate`.
    pub fn position<P>(&self, predicate: P) -> Optional<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().position(predicate).into()
    }

    /// Position of the last element satisfying `predicate`.
    pub fn rposition<P>(&self, predicate: P) -> Optional<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().rposition(predicate).into()
    }

    /// `true` if every element satisfies `predicate`.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().all(predicate)
    }

    /// `true` if some element satisfies `predicate`.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().any(predicate)
    }

    /// `true` if no element satisfies `predicate`.
    pub fn none<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.any(predicate)
    }

    /// The element that wins every comparison.
    ///
    /// `better(candidate, current)` returns `true` when the candidate should
    /// replace the current best. Ties keep the earliest element.
    ///
    /// # Example
    ///
    /// ```
    /// use steams::list;
    ///
    /// let ages = list![("Tom", 7), ("Kitty", 2), ("Max", 2)];
    /// let youngest = ages.get_compared(|a, b| a.1 < b.1);
    /// assert_eq!(youngest.get().0, "Kitty");
    /// ```
    pub fn get_compared<F>(&self, mut better: F) -> Optional<&T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut items = self.items.iter();
        let mut best = match items.next() {
            Some(first) => first,
            None => return Optional::Empty,
        };
        for item in items {
            if better(item, best) {
                best = item;
            }
        }
        Optional::Present(best)
    }

    /// The smallest element; the earliest one on ties.
    pub fn min(&self) -> Optional<&T>
    where
        T: Ord,
    {
        self.get_compared(|candidate, current| candidate < current)
    }

    /// The largest element; the earliest one on ties.
    pub fn max(&self) -> Optional<&T>
    where
        T: Ord,
    {
        self.get_compared(|candidate, current| candidate > current)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::new()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        List { items }
    }
}

impl<T> From<List<T>> for Vec<T> {
    fn from(list: List<T>) -> Self {
        list.items
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}
