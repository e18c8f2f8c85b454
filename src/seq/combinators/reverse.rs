//! Reverse combinator - replay the input backwards.

use std::ops::ControlFlow;

use crate::seq::trait_def::{materialize, Seq};

/// A sequence that yields its input in reverse order.
///
/// Materializing: the whole input is buffered on each drive before the first
/// element is produced.
///
/// Created by [`SeqExt::reverse`](crate::seq::SeqExt::reverse).
#[derive(Debug, Clone)]
pub struct Reverse<S> {
    pub(crate) inner: S,
}

impl<S: Seq> Seq for Reverse<S> {
    type Item = S::Item;

    fn drive(&self, step: &mut dyn FnMut(S::Item) -> ControlFlow<()>) -> ControlFlow<()> {
        let buffer = materialize(&self.inner);
        #[cfg(feature = "tracing")]
        tracing::trace!(buffered = buffer.len(), "materialized sequence for reverse");
        for item in buffer.into_iter().rev() {
            step(item)?;
        }
        ControlFlow::Continue(())
    }
}
