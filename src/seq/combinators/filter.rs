//! Filter combinator - forward only the elements that match.

use std::fmt;
use std::ops::ControlFlow;

use crate::seq::trait_def::Seq;

/// A sequence that skips elements failing a predicate.
///
/// Created by [`SeqExt::filter`](crate::seq::SeqExt::filter).
#[derive(Clone)]
pub struct Filter<S, P> {
    pub(crate) inner: S,
    pub(crate) predicate: P,
}

impl<S: fmt::Debug, P> fmt::Debug for Filter<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("inner", &self.inner)
            .field("predicate", &"<function>")
            .finish()
    }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive(&self, step: &mut dyn FnMut(S::Item) -> ControlFlow<()>) -> ControlFlow<()> {
        self.inner.drive(&mut |item| {
            if (self.predicate)(&item) {
                step(item)
            } else {
                ControlFlow::Continue(())
            }
        })
    }
}
