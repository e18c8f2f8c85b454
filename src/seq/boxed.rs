//! BoxedSeq - type-erased sequence for opt-in boxing.
//!
//! Use `BoxedSeq` when you need to:
//! - Store differently built pipelines in one collection
//! - Return different pipelines from match arms
//! - Build a sequence recursively
//!
//! Cloning a `BoxedSeq` shares the underlying description.

use std::fmt;
use std::ops::ControlFlow;
use std::rc::Rc;

use crate::seq::trait_def::Seq;

/// A type-erased sequence.
///
/// # Example
///
/// ```rust
/// use steams::seq::{self, BoxedSeq, SeqExt};
///
/// let pipelines: Vec<BoxedSeq<'static, i32>> = vec![
///     seq::of(vec![1, 2]).boxed(),
///     seq::from_iter(0..5).map(|x| x * 10).boxed(),
/// ];
///
/// let counts: Vec<usize> = pipelines.iter().map(|p| p.count()).collect();
/// assert_eq!(counts, vec![2, 5]);
/// ```
pub struct BoxedSeq<'a, T> {
    inner: Rc<dyn Seq<Item = T> + 'a>,
}

impl<'a, T> BoxedSeq<'a, T> {
    /// Box any sequence.
    pub fn new<S>(seq: S) -> Self
    where
        S: Seq<Item = T> + 'a,
    {
        BoxedSeq {
            inner: Rc::new(seq),
        }
    }
}

impl<T> Clone for BoxedSeq<'_, T> {
    fn clone(&self) -> Self {
        BoxedSeq {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for BoxedSeq<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedSeq")
            .field("inner", &"<sequence>")
            .finish()
    }
}

impl<T> Seq for BoxedSeq<'_, T> {
    type Item = T;

    fn drive(&self, step: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        self.inner.drive(step)
    }
}
