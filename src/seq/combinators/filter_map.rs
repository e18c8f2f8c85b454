//! FilterMap combinator - transform and drop in one pass.

use std::fmt;
use std::ops::ControlFlow;

use crate::seq::trait_def::Seq;

/// A sequence that forwards `f(x)` for every `x` where it returns `Some`.
///
/// Created by [`SeqExt::filter_map`](crate::seq::SeqExt::filter_map).
#[derive(Clone)]
pub struct FilterMap<S, F> {
    pub(crate) inner: S,
    pub(crate) f: F,
}

impl<S: fmt::Debug, F> fmt::Debug for FilterMap<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterMap")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<S, F, U> Seq for FilterMap<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> Option<U>,
{
    type Item = U;

    fn drive(&self, step: &mut dyn FnMut(U) -> ControlFlow<()>) -> ControlFlow<()> {
        self.inner.drive(&mut |item| match (self.f)(item) {
            Some(mapped) => step(mapped),
            None => ControlFlow::Continue(()),
        })
    }
}
