//! Chain combinator - concatenate two sequences.

use std::ops::ControlFlow;

use crate::seq::trait_def::Seq;

/// A sequence that yields all of `first`, then all of `second`.
///
/// `second` is not driven at all if the consumer stops inside `first`.
///
/// Created by [`SeqExt::chain`](crate::seq::SeqExt::chain).
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Seq for Chain<A, B>
where
    A: Seq,
    B: Seq<Item = A::Item>,
{
    type Item = A::Item;

    fn drive(&self, step: &mut dyn FnMut(A::Item) -> ControlFlow<()>) -> ControlFlow<()> {
        self.first.drive(&mut *step)?;
        self.second.drive(step)
    }
}
