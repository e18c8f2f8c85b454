//! Extension trait providing pipeline stages and terminal operations for
//! every [`Seq`].
//!
//! `SeqExt` is implemented for all types that implement `Seq`; you never
//! implement it yourself.
//!
//! Intermediate stages take `self` and return a new description wrapping it.
//! Terminal operations take `&self`, drive the pipeline once, and leave the
//! description intact so it can be driven again.
//!
//! Terminal operations that need the whole input before they can answer
//! (`last`, `rfold`, `rposition`, `partition`, grouping, `zip`) say so in
//! their docs. Everything else stops pulling from upstream the moment the
//! answer is known.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::{Add, ControlFlow};

use crate::error::LengthMismatchError;
use crate::list::List;
use crate::map::Map;
use crate::optional::Optional;
use crate::seq::boxed::BoxedSeq;
use crate::seq::combinators::{
    ordering_from_less, Chain, Distinct, Enumerate, Filter, FilterMap, FlatMap, Flatten, Of, Peek,
    Reverse, Skip, SkipWhile, SortBy, Take, TakeWhile,
};
use crate::seq::combinators::Map as MapSeq;
use crate::seq::trait_def::{materialize, Seq};

/// Pipeline stages and terminal operations for all sequences.
///
/// # Example
///
/// ```rust
/// use steams::seq::{self, SeqExt};
///
/// let evens_squared = seq::from_iter(1..=10)
///     .filter(|x| x % 2 == 0)
///     .map(|x| x * x);
///
/// assert_eq!(evens_squared.collect(), vec![4, 16, 36, 64, 100]);
/// // The description is reusable.
/// assert_eq!(evens_squared.count(), 5);
/// ```
pub trait SeqExt: Seq {
    // ========== Intermediate stages ==========

    /// Keep only elements satisfying `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let odd = seq::of(vec![1, 2, 3, 4, 5]).filter(|x| x % 2 == 1);
    /// assert_eq!(odd.collect(), vec![1, 3, 5]);
    /// ```
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter {
            inner: self,
            predicate,
        }
    }

    /// Transform each element. The element type may change.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let labels = seq::of(vec![1, 2]).map(|x| format!("value: {}", x));
    /// assert_eq!(labels.collect(), vec!["value: 1", "value: 2"]);
    /// ```
    fn map<U, F>(self, f: F) -> MapSeq<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        MapSeq { inner: self, f }
    }

    /// Transform each element, dropping those for which `f` returns `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let parsed = seq::of(vec!["1", "x", "3"]).filter_map(|s| s.parse::<i32>().ok());
    /// assert_eq!(parsed.collect(), vec![1, 3]);
    /// ```
    fn filter_map<U, F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> Option<U>,
    {
        FilterMap { inner: self, f }
    }

    /// Expand each element into a sequence and flatten the result.
    ///
    /// If the consumer stops while an inner sequence is being drained, both
    /// the inner and the outer traversal halt immediately.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let chars = seq::of(vec!["Go", "it"]).flat_map(|s| seq::from_iter(s.chars()));
    /// assert_eq!(chars.collect(), vec!['G', 'o', 'i', 't']);
    /// ```
    fn flat_map<I, F>(self, f: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> I,
        I: Seq,
    {
        FlatMap { inner: self, f }
    }

    /// Concatenate a sequence of sequences.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let rows = seq::of(vec![seq::of(vec![1, 2]), seq::of(vec![]), seq::of(vec![3])]);
    /// assert_eq!(rows.flatten().collect(), vec![1, 2, 3]);
    /// ```
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: Seq,
    {
        Flatten { inner: self }
    }

    /// Yield at most `n` elements, then stop the upstream source.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// assert_eq!(seq::from_iter(1..100).take(3).collect(), vec![1, 2, 3]);
    /// assert_eq!(seq::of(vec![1]).take(0).count(), 0);
    /// ```
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take { inner: self, n }
    }

    /// Yield elements while `predicate` holds, then stop the upstream source.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let small = seq::of(vec![1, 2, 5, 1]).take_while(|x| *x < 3);
    /// assert_eq!(small.collect(), vec![1, 2]);
    /// ```
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        TakeWhile {
            inner: self,
            predicate,
        }
    }

    /// Drop the first `n` elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// assert_eq!(seq::of(vec![1, 2, 3]).skip(2).collect(), vec![3]);
    /// ```
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip { inner: self, n }
    }

    /// Drop elements while `predicate` holds, then forward the rest.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let rest = seq::of(vec![1, 2, 5, 1]).skip_while(|x| *x < 3);
    /// assert_eq!(rest.collect(), vec![5, 1]);
    /// ```
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        SkipWhile {
            inner: self,
            predicate,
        }
    }

    /// Pair each element with its zero-based position.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let indexed = seq::of(vec!['a', 'b']).enumerate();
    /// assert_eq!(indexed.collect(), vec![(0, 'a'), (1, 'b')]);
    /// ```
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate { inner: self }
    }

    /// Yield all elements of `self`, then all elements of `other`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let both = seq::of(vec![1, 2]).chain(seq::once(3));
    /// assert_eq!(both.collect(), vec![1, 2, 3]);
    /// ```
    fn chain<B>(self, other: B) -> Chain<Self, B>
    where
        Self: Sized,
        B: Seq<Item = Self::Item>,
    {
        Chain {
            first: self,
            second: other,
        }
    }

    /// Observe each element as it is pulled, without changing it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::cell::RefCell;
    /// use steams::seq::{self, SeqExt};
    ///
    /// let seen = RefCell::new(Vec::new());
    /// let first_even = seq::of(vec![1, 3, 4, 5, 6])
    ///     .peek(|x| seen.borrow_mut().push(*x))
    ///     .find(|x| x % 2 == 0);
    ///
    /// assert_eq!(first_even.get(), 4);
    /// assert_eq!(*seen.borrow(), vec![1, 3, 4]);
    /// ```
    fn peek<F>(self, f: F) -> Peek<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item),
    {
        Peek { inner: self, f }
    }

    /// Yield the elements in reverse order.
    ///
    /// Materializing: the input is buffered on every drive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// assert_eq!(seq::of(vec![1, 2, 3]).reverse().collect(), vec![3, 2, 1]);
    /// ```
    fn reverse(self) -> Reverse<Self>
    where
        Self: Sized,
    {
        Reverse { inner: self }
    }

    /// Yield the elements stably sorted by `compare`.
    ///
    /// Materializing: the input is buffered and sorted on every drive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let desc = seq::of(vec![1, 2, 3, 4, 5]).sort_by(|a, b| b.cmp(a));
    /// assert_eq!(desc.collect(), vec![5, 4, 3, 2, 1]);
    /// ```
    fn sort_by<C>(self, compare: C) -> SortBy<Self, C>
    where
        Self: Sized,
        C: Fn(&Self::Item, &Self::Item) -> Ordering,
    {
        SortBy {
            inner: self,
            compare,
        }
    }

    /// Yield the elements stably sorted by a less-than predicate.
    ///
    /// `less(a, b)` returns `true` when `a` belongs before `b`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let words = seq::of(vec!["ccc", "a", "bb"]).sorted(|a, b| a.len() < b.len());
    /// assert_eq!(words.collect(), vec!["a", "bb", "ccc"]);
    /// ```
    fn sorted<F>(self, less: F) -> impl Seq<Item = Self::Item>
    where
        Self: Sized,
        F: Fn(&Self::Item, &Self::Item) -> bool,
    {
        self.sort_by(move |a, b| ordering_from_less(&less, a, b))
    }

    /// Yield each element once, in first-seen order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let unique = seq::of(vec![1, 2, 3, 2, 4, 1, 5]).distinct();
    /// assert_eq!(unique.collect(), vec![1, 2, 3, 4, 5]);
    /// ```
    fn distinct(self) -> Distinct<Self>
    where
        Self: Sized,
        Self::Item: Eq + Hash + Clone,
    {
        Distinct { inner: self }
    }

    /// Erase the pipeline's type.
    ///
    /// Useful for returning different pipelines from match arms or storing
    /// them together.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, BoxedSeq, SeqExt};
    ///
    /// fn numbers(even: bool) -> BoxedSeq<'static, i32> {
    ///     if even {
    ///         seq::from_iter(0..10).filter(|x| x % 2 == 0).boxed()
    ///     } else {
    ///         seq::from_iter(0..10).filter(|x| x % 2 == 1).boxed()
    ///     }
    /// }
    ///
    /// assert_eq!(numbers(true).count(), 5);
    /// ```
    fn boxed<'a>(self) -> BoxedSeq<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        BoxedSeq::new(self)
    }

    // ========== Terminal operations ==========

    /// Drive the pipeline and gather every element into a `Vec`.
    fn collect(&self) -> Vec<Self::Item> {
        materialize(self)
    }

    /// Drive the pipeline and gather every element into a [`List`].
    fn to_list(&self) -> List<Self::Item> {
        List::from(materialize(self))
    }

    /// Count the elements.
    fn count(&self) -> usize {
        let mut count = 0;
        let _ = self.drive(&mut |_| {
            count += 1;
            ControlFlow::Continue(())
        });
        count
    }

    /// Call `f` on every element.
    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Self::Item),
    {
        let _ = self.drive(&mut |item| {
            f(item);
            ControlFlow::Continue(())
        });
    }

    /// Call `f` on every element together with its position.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let mut lines = Vec::new();
    /// seq::of(vec!["a", "b"]).for_each_indexed(|i, s| lines.push(format!("{}: {}", i, s)));
    /// assert_eq!(lines, vec!["0: a", "1: b"]);
    /// ```
    fn for_each_indexed<F>(&self, mut f: F)
    where
        F: FnMut(usize, Self::Item),
    {
        let mut index = 0;
        let _ = self.drive(&mut |item| {
            f(index, item);
            index += 1;
            ControlFlow::Continue(())
        });
    }

    /// Combine all elements left to right, starting from `init`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let joined = seq::of(vec!["a", "b", "c"]).fold(String::new(), |acc, s| acc + s);
    /// assert_eq!(joined, "abc");
    /// ```
    fn fold<B, F>(&self, init: B, mut f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = Some(init);
        let _ = self.drive(&mut |item| {
            if let Some(current) = acc.take() {
                acc = Some(f(current, item));
            }
            ControlFlow::Continue(())
        });
        match acc {
            Some(result) => result,
            None => unreachable!("fold accumulator is restored after every step"),
        }
    }

    /// Combine all elements right to left, starting from `init`.
    ///
    /// Materializing: right folding needs the last element first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let joined = seq::of(vec!["a", "b", "c"]).rfold(String::new(), |s, acc| acc + s);
    /// assert_eq!(joined, "cba");
    /// ```
    fn rfold<B, F>(&self, init: B, mut f: F) -> B
    where
        F: FnMut(Self::Item, B) -> B,
    {
        let buffer = materialize(self);
        #[cfg(feature = "tracing")]
        tracing::trace!(buffered = buffer.len(), "materialized sequence for rfold");
        buffer
            .into_iter()
            .rev()
            .fold(init, |acc, item| f(item, acc))
    }

    /// Combine all elements using the first one as the starting value.
    ///
    /// Empty on an empty sequence.
    fn reduce<F>(&self, mut f: F) -> Optional<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut acc: Option<Self::Item> = None;
        let _ = self.drive(&mut |item| {
            acc = Some(match acc.take() {
                Some(current) => f(current, item),
                None => item,
            });
            ControlFlow::Continue(())
        });
        acc.into()
    }

    /// Add all elements together. An empty sequence sums to `Default::default()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// assert_eq!(seq::from_iter(1..=4).sum(), 10);
    /// ```
    fn sum(&self) -> Self::Item
    where
        Self::Item: Add<Output = Self::Item> + Default,
    {
        self.fold(Self::Item::default(), |acc, item| acc + item)
    }

    /// The first element, pulling nothing beyond it.
    fn first(&self) -> Optional<Self::Item> {
        let mut found = Optional::Empty;
        let _ = self.drive(&mut |item| {
            found = Optional::Present(item);
            ControlFlow::Break(())
        });
        found
    }

    /// The first element satisfying `predicate`.
    fn find<P>(&self, mut predicate: P) -> Optional<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut found = Optional::Empty;
        let _ = self.drive(&mut |item| {
            if predicate(&item) {
                found = Optional::Present(item);
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        found
    }

    /// The last element. Drains the whole sequence.
    fn last(&self) -> Optional<Self::Item> {
        let mut last = Optional::Empty;
        let _ = self.drive(&mut |item| {
            last = Optional::Present(item);
            ControlFlow::Continue(())
        });
        last
    }

    /// The element at zero-based position `n`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let s = seq::of(vec![10, 20, 30]);
    /// assert_eq!(s.nth(1).get(), 20);
    /// assert!(s.nth(3).is_empty());
    /// ```
    fn nth(&self, n: usize) -> Optional<Self::Item> {
        let mut index = 0;
        let mut found = Optional::Empty;
        let _ = self.drive(&mut |item| {
            if index == n {
                found = Optional::Present(item);
                return ControlFlow::Break(());
            }
            index += 1;
            ControlFlow::Continue(())
        });
        found
    }

    /// The position of the first element satisfying `predicate`.
    fn position<P>(&self, mut predicate: P) -> Optional<usize>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut index = 0;
        let mut found = Optional::Empty;
        let _ = self.drive(&mut |item| {
            if predicate(&item) {
                found = Optional::Present(index);
                return ControlFlow::Break(());
            }
            index += 1;
            ControlFlow::Continue(())
        });
        found
    }

    /// The position of the last element satisfying `predicate`.
    ///
    /// Materializing: the search runs from the back of the buffered input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let s = seq::of(vec![1, 2, 3, 2]);
    /// assert_eq!(s.position(|x| *x == 2).get(), 1);
    /// assert_eq!(s.rposition(|x| *x == 2).get(), 3);
    /// ```
    fn rposition<P>(&self, predicate: P) -> Optional<usize>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let buffer = materialize(self);
        #[cfg(feature = "tracing")]
        tracing::trace!(buffered = buffer.len(), "materialized sequence for rposition");
        buffer.iter().rposition(predicate).into()
    }

    /// `true` if every element satisfies `predicate`. Stops at the first failure.
    fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.drive(&mut |item| {
            if predicate(&item) {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .is_continue()
    }

    /// `true` if some element satisfies `predicate`. Stops at the first match.
    fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.drive(&mut |item| {
            if predicate(&item) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
    }

    /// `true` if no element satisfies `predicate`. Stops at the first match.
    fn none<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        !self.any(predicate)
    }

    /// The element that wins every pairwise comparison.
    ///
    /// `better(candidate, current)` returns `true` when `candidate` should
    /// replace the current winner, so ties keep the earliest element. Empty
    /// on an empty sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let ages = seq::of(vec![("Tom", 7), ("Kitty", 2), ("Max", 2)]);
    /// let youngest = ages.compare(|a, b| a.1 < b.1);
    /// assert_eq!(youngest.get(), ("Kitty", 2));
    /// ```
    fn compare<F>(&self, mut better: F) -> Optional<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        let mut best: Option<Self::Item> = None;
        let _ = self.drive(&mut |item| {
            let replace = match &best {
                Some(current) => better(&item, current),
                None => true,
            };
            if replace {
                best = Some(item);
            }
            ControlFlow::Continue(())
        });
        best.into()
    }

    /// The smallest element; the earliest one on ties.
    fn min(&self) -> Optional<Self::Item>
    where
        Self::Item: Ord,
    {
        self.compare(|candidate, current| candidate < current)
    }

    /// The largest element; the earliest one on ties.
    fn max(&self) -> Optional<Self::Item>
    where
        Self::Item: Ord,
    {
        self.compare(|candidate, current| candidate > current)
    }

    /// Split the elements into those satisfying `predicate` and the rest.
    ///
    /// Materializing: both sides are fully built.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let (even, odd) = seq::from_iter(1..=5).partition(|x| x % 2 == 0);
    /// assert_eq!(even.into_vec(), vec![2, 4]);
    /// assert_eq!(odd.into_vec(), vec![1, 3, 5]);
    /// ```
    fn partition<P>(&self, mut predicate: P) -> (List<Self::Item>, List<Self::Item>)
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut matching = Vec::new();
        let mut rest = Vec::new();
        self.for_each(|item| {
            if predicate(&item) {
                matching.push(item);
            } else {
                rest.push(item);
            }
        });
        #[cfg(feature = "tracing")]
        tracing::trace!(
            matching = matching.len(),
            rest = rest.len(),
            "partitioned sequence"
        );
        (List::from(matching), List::from(rest))
    }

    /// Group elements by `classifier`, keeping encounter order inside each group.
    ///
    /// Materializing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let names = seq::of(vec!["Alice", "Bob", "Brian", "Charlie"]);
    /// let groups = names.group_by(|name| name.chars().next().unwrap_or_default());
    /// assert_eq!(groups[&'B'].as_slice(), &["Bob", "Brian"]);
    /// ```
    fn group_by<K, F>(&self, mut classifier: F) -> Map<K, List<Self::Item>>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        let mut groups: HashMap<K, Vec<Self::Item>> = HashMap::new();
        self.for_each(|item| groups.entry(classifier(&item)).or_default().push(item));
        #[cfg(feature = "tracing")]
        tracing::trace!(groups = groups.len(), "grouped sequence");
        groups
            .into_iter()
            .map(|(key, items)| (key, List::from(items)))
            .collect()
    }

    /// Count elements per `classifier` key.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let names = seq::of(vec!["Alice", "Bob", "Brian", "Charlie"]);
    /// let counts = names.group_by_counting(|name| name.len() > 3);
    /// assert_eq!(counts[&true], 3);
    /// assert_eq!(counts[&false], 1);
    /// ```
    fn group_by_counting<K, F>(&self, mut classifier: F) -> Map<K, usize>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        let mut counts: HashMap<K, usize> = HashMap::new();
        self.for_each(|item| *counts.entry(classifier(&item)).or_insert(0) += 1);
        Map::from(counts)
    }

    /// Build a key/value [`Map`]. A repeated key keeps the last value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::seq::{self, SeqExt};
    ///
    /// let lengths = seq::of(vec!["one", "three"]).to_map(|s| *s, |s| s.len());
    /// assert_eq!(lengths[&"three"], 5);
    /// ```
    fn to_map<K, V, FK, FV>(&self, mut key: FK, mut value: FV) -> Map<K, V>
    where
        K: Eq + Hash,
        FK: FnMut(&Self::Item) -> K,
        FV: FnMut(Self::Item) -> V,
    {
        let mut entries = HashMap::new();
        self.for_each(|item| {
            entries.insert(key(&item), value(item));
        });
        Map::from(entries)
    }

    /// Pair elements positionally with `other`. See [`zip`](crate::seq::zip).
    fn zip<B>(self, other: B) -> Result<Of<(Self::Item, B::Item)>, LengthMismatchError>
    where
        Self: Sized,
        B: Seq,
    {
        crate::seq::zip(self, other)
    }
}

impl<S: Seq + ?Sized> SeqExt for S {}
