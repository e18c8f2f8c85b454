//! Constructor functions for sequences.
//!
//! These are the entry points of every lazy pipeline.

use std::marker::PhantomData;
use std::ops::ControlFlow;

use crate::seq::combinators::{Empty, FromFn, FromIter, Of, Once};

/// A sequence over an owned vector.
///
/// # Example
///
/// ```rust
/// use steams::seq::{self, SeqExt};
///
/// let s = seq::of(vec![1, 2, 3]);
/// assert_eq!(s.collect(), vec![1, 2, 3]);
/// assert_eq!(s.collect(), vec![1, 2, 3]);
/// ```
pub fn of<T: Clone>(items: Vec<T>) -> Of<T> {
    Of::new(items)
}

/// A sequence over any cloneable iterable: ranges, `slice.iter()`, maps.
///
/// # Example
///
/// ```rust
/// use steams::seq::{self, SeqExt};
///
/// let words = ["apple", "banana"];
/// let lengths = seq::from_iter(words.iter()).map(|w| w.len());
/// assert_eq!(lengths.collect(), vec![5, 6]);
/// ```
pub fn from_iter<I>(iter: I) -> FromIter<I>
where
    I: IntoIterator + Clone,
{
    FromIter { iter }
}

/// A sequence defined by a generator.
///
/// The generator receives the step function and must stop producing as soon
/// as it returns `Break`. Forwarding with `?` does exactly that.
///
/// # Example
///
/// ```rust
/// use std::ops::ControlFlow;
/// use steams::seq::{self, SeqExt};
///
/// let squares = seq::from_fn(|step| {
///     for n in 1..=4 {
///         step(n * n)?;
///     }
///     ControlFlow::Continue(())
/// });
/// assert_eq!(squares.collect(), vec![1, 4, 9, 16]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F, T>
where
    F: Fn(&mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()>,
{
    FromFn {
        f,
        _marker: PhantomData,
    }
}

/// A sequence with no elements.
pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

/// A sequence of exactly one element.
pub fn once<T: Clone>(value: T) -> Once<T> {
    Once { value }
}
