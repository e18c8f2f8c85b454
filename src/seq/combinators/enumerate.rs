//! Enumerate combinator - pair elements with their position.

use std::ops::ControlFlow;

use crate::seq::trait_def::Seq;

/// A sequence of `(index, element)` pairs, counting from zero.
///
/// Created by [`SeqExt::enumerate`](crate::seq::SeqExt::enumerate).
#[derive(Debug, Clone)]
pub struct Enumerate<S> {
    pub(crate) inner: S,
}

impl<S: Seq> Seq for Enumerate<S> {
    type Item = (usize, S::Item);

    fn drive(&self, step: &mut dyn FnMut(Self::Item) -> ControlFlow<()>) -> ControlFlow<()> {
        let mut index = 0;
        self.inner.drive(&mut |item| {
            let flow = step((index, item));
            index += 1;
            flow
        })
    }
}
