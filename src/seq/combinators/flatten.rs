//! Flatten combinator - concatenate a sequence of sequences.

use std::fmt;
use std::ops::ControlFlow;

use crate::seq::trait_def::Seq;

/// A sequence that drains each inner sequence produced by the outer one.
///
/// Stopping inside an inner sequence stops the outer one too.
///
/// Created by [`SeqExt::flatten`](crate::seq::SeqExt::flatten).
#[derive(Clone)]
pub struct Flatten<S> {
    pub(crate) inner: S,
}

impl<S: fmt::Debug> fmt::Debug for Flatten<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flatten").field("inner", &self.inner).finish()
    }
}

impl<S> Seq for Flatten<S>
where
    S: Seq,
    S::Item: Seq,
{
    type Item = <S::Item as Seq>::Item;

    fn drive(&self, step: &mut dyn FnMut(Self::Item) -> ControlFlow<()>) -> ControlFlow<()> {
        self.inner.drive(&mut |nested| nested.drive(&mut *step))
    }
}
