//! Distinct combinator - drop repeated elements.

use std::collections::HashSet;
use std::hash::Hash;
use std::ops::ControlFlow;

use crate::seq::trait_def::Seq;

/// A sequence that yields each element the first time it is seen.
///
/// Streaming: the set of seen elements is rebuilt on every drive, and only
/// the elements actually pulled are remembered.
///
/// Created by [`SeqExt::distinct`](crate::seq::SeqExt::distinct).
#[derive(Debug, Clone)]
pub struct Distinct<S> {
    pub(crate) inner: S,
}

impl<S> Seq for Distinct<S>
where
    S: Seq,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;

    fn drive(&self, step: &mut dyn FnMut(S::Item) -> ControlFlow<()>) -> ControlFlow<()> {
        let mut seen = HashSet::new();
        self.inner.drive(&mut |item| {
            if seen.insert(item.clone()) {
                step(item)
            } else {
                ControlFlow::Continue(())
            }
        })
    }
}
