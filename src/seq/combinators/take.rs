//! Take and TakeWhile combinators - bounded prefixes.

use std::fmt;
use std::ops::ControlFlow;

use crate::seq::trait_def::Seq;

/// A sequence that yields at most `n` elements.
///
/// Once the quota is reached the upstream source is told to stop, so it is
/// never consumed past the `n`th element.
///
/// Created by [`SeqExt::take`](crate::seq::SeqExt::take).
#[derive(Debug, Clone)]
pub struct Take<S> {
    pub(crate) inner: S,
    pub(crate) n: usize,
}

impl<S: Seq> Seq for Take<S> {
    type Item = S::Item;

    fn drive(&self, step: &mut dyn FnMut(S::Item) -> ControlFlow<()>) -> ControlFlow<()> {
        if self.n == 0 {
            return ControlFlow::Continue(());
        }

        let mut remaining = self.n;
        let mut flow = ControlFlow::Continue(());
        let _ = self.inner.drive(&mut |item| {
            remaining -= 1;
            flow = step(item);
            if flow.is_break() || remaining == 0 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        // Hitting the quota is our own stop, not the consumer's.
        flow
    }
}

/// A sequence that yields elements while a predicate holds.
///
/// The first failing element is not forwarded and stops the upstream source.
///
/// Created by [`SeqExt::take_while`](crate::seq::SeqExt::take_while).
#[derive(Clone)]
pub struct TakeWhile<S, P> {
    pub(crate) inner: S,
    pub(crate) predicate: P,
}

impl<S: fmt::Debug, P> fmt::Debug for TakeWhile<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeWhile")
            .field("inner", &self.inner)
            .field("predicate", &"<function>")
            .finish()
    }
}

impl<S, P> Seq for TakeWhile<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive(&self, step: &mut dyn FnMut(S::Item) -> ControlFlow<()>) -> ControlFlow<()> {
        let mut flow = ControlFlow::Continue(());
        let _ = self.inner.drive(&mut |item| {
            if !(self.predicate)(&item) {
                return ControlFlow::Break(());
            }
            flow = step(item);
            flow
        });
        flow
    }
}
