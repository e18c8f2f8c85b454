//! Map combinator - transform each element.

use std::fmt;
use std::ops::ControlFlow;

use crate::seq::trait_def::Seq;

/// A sequence that transforms each element before forwarding it.
///
/// Created by [`SeqExt::map`](crate::seq::SeqExt::map).
#[derive(Clone)]
pub struct Map<S, F> {
    pub(crate) inner: S,
    pub(crate) f: F,
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<S, F, U> Seq for Map<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> U,
{
    type Item = U;

    fn drive(&self, step: &mut dyn FnMut(U) -> ControlFlow<()>) -> ControlFlow<()> {
        self.inner.drive(&mut |item| step((self.f)(item)))
    }
}
