//! Peek combinator - observe elements as they flow past.

use std::fmt;
use std::ops::ControlFlow;

use crate::seq::trait_def::Seq;

/// A sequence that calls an observer on each element before forwarding it.
///
/// The observer only sees elements that are actually pulled, which makes it
/// the usual way to observe short-circuit behavior.
///
/// Created by [`SeqExt::peek`](crate::seq::SeqExt::peek).
#[derive(Clone)]
pub struct Peek<S, F> {
    pub(crate) inner: S,
    pub(crate) f: F,
}

impl<S: fmt::Debug, F> fmt::Debug for Peek<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Peek")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<S, F> Seq for Peek<S, F>
where
    S: Seq,
    F: Fn(&S::Item),
{
    type Item = S::Item;

    fn drive(&self, step: &mut dyn FnMut(S::Item) -> ControlFlow<()>) -> ControlFlow<()> {
        self.inner.drive(&mut |item| {
            (self.f)(&item);
            step(item)
        })
    }
}
