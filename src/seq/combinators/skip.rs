//! Skip and SkipWhile combinators - suppress a prefix.

use std::fmt;
use std::ops::ControlFlow;

use crate::seq::trait_def::Seq;

/// A sequence that drops its first `n` elements.
///
/// Created by [`SeqExt::skip`](crate::seq::SeqExt::skip).
#[derive(Debug, Clone)]
pub struct Skip<S> {
    pub(crate) inner: S,
    pub(crate) n: usize,
}

impl<S: Seq> Seq for Skip<S> {
    type Item = S::Item;

    fn drive(&self, step: &mut dyn FnMut(S::Item) -> ControlFlow<()>) -> ControlFlow<()> {
        let mut skipped = 0;
        self.inner.drive(&mut |item| {
            if skipped < self.n {
                skipped += 1;
                ControlFlow::Continue(())
            } else {
                step(item)
            }
        })
    }
}

/// A sequence that drops elements while a predicate holds, then forwards the
/// rest unchanged.
///
/// Created by [`SeqExt::skip_while`](crate::seq::SeqExt::skip_while).
#[derive(Clone)]
pub struct SkipWhile<S, P> {
    pub(crate) inner: S,
    pub(crate) predicate: P,
}

impl<S: fmt::Debug, P> fmt::Debug for SkipWhile<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipWhile")
            .field("inner", &self.inner)
            .field("predicate", &"<function>")
            .finish()
    }
}

impl<S, P> Seq for SkipWhile<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive(&self, step: &mut dyn FnMut(S::Item) -> ControlFlow<()>) -> ControlFlow<()> {
        let mut dropping = true;
        self.inner.drive(&mut |item| {
            if dropping {
                if (self.predicate)(&item) {
                    return ControlFlow::Continue(());
                }
                dropping = false;
            }
            step(item)
        })
    }
}
