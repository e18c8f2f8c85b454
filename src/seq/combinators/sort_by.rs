//! SortBy combinator - replay the input in sorted order.

use std::cmp::Ordering;
use std::fmt;
use std::ops::ControlFlow;

use crate::seq::trait_def::{materialize, Seq};

/// A sequence that yields its input stably sorted by a comparator.
///
/// Materializing: the whole input is buffered and sorted on each drive.
///
/// Created by [`SeqExt::sort_by`](crate::seq::SeqExt::sort_by) and
/// [`SeqExt::sorted`](crate::seq::SeqExt::sorted).
#[derive(Clone)]
pub struct SortBy<S, C> {
    pub(crate) inner: S,
    pub(crate) compare: C,
}

impl<S: fmt::Debug, C> fmt::Debug for SortBy<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortBy")
            .field("inner", &self.inner)
            .field("compare", &"<function>")
            .finish()
    }
}

impl<S, C> Seq for SortBy<S, C>
where
    S: Seq,
    C: Fn(&S::Item, &S::Item) -> Ordering,
{
    type Item = S::Item;

    fn drive(&self, step: &mut dyn FnMut(S::Item) -> ControlFlow<()>) -> ControlFlow<()> {
        let mut buffer = materialize(&self.inner);
        #[cfg(feature = "tracing")]
        tracing::trace!(buffered = buffer.len(), "materialized sequence for sort");
        buffer.sort_by(|a, b| (self.compare)(a, b));
        for item in buffer {
            step(item)?;
        }
        ControlFlow::Continue(())
    }
}

/// Turn a less-than predicate into a total comparator.
pub(crate) fn ordering_from_less<T, F>(less: &F, a: &T, b: &T) -> Ordering
where
    F: Fn(&T, &T) -> bool,
{
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
