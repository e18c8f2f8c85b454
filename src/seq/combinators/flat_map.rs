//! FlatMap combinator - expand each element into a nested sequence.

use std::fmt;
use std::ops::ControlFlow;

use crate::seq::trait_def::Seq;

/// A sequence that opens an inner sequence per outer element and forwards
/// its elements.
///
/// A stop signal raised while an inner sequence is being drained halts the
/// inner sequence, and the `Break` it returns halts the outer one before the
/// next outer element is produced.
///
/// Created by [`SeqExt::flat_map`](crate::seq::SeqExt::flat_map).
#[derive(Clone)]
pub struct FlatMap<S, F> {
    pub(crate) inner: S,
    pub(crate) f: F,
}

impl<S: fmt::Debug, F> fmt::Debug for FlatMap<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatMap")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<S, F, I> Seq for FlatMap<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> I,
    I: Seq,
{
    type Item = I::Item;

    fn drive(&self, step: &mut dyn FnMut(I::Item) -> ControlFlow<()>) -> ControlFlow<()> {
        self.inner.drive(&mut |item| (self.f)(item).drive(&mut *step))
    }
}
