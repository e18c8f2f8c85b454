//! The `Seq` trait: a re-drivable, pull-based description of a stream.

use std::ops::ControlFlow;
use std::rc::Rc;

/// A lazy sequence of `Item` values.
///
/// A `Seq` is a description, not a cursor. Its single capability is
/// [`drive`](Seq::drive): hand each element, in order, to a step function
/// until either the elements run out or the step function returns
/// [`ControlFlow::Break`]. Nothing is produced before `drive` is called, and
/// the same description can be driven any number of times with identical
/// results.
///
/// # The drive contract
///
/// - `step` is called once per element, in order.
/// - As soon as `step` returns `Break`, no further element is produced,
///   including elements of any nested sequence opened by the stage that
///   produced the element.
/// - `drive` returns `Break` exactly when `step` asked to stop, and
///   `Continue` when the sequence ended on its own (including a stage such
///   as `take` deciding it has produced enough). Stages that run several
///   sequences one after another use this to know whether to keep going.
///
/// Implementations usually forward with `?`:
///
/// ```rust
/// use std::ops::ControlFlow;
/// use steams::seq::{Seq, SeqExt};
///
/// struct Countdown(u32);
///
/// impl Seq for Countdown {
///     type Item = u32;
///
///     fn drive(&self, step: &mut dyn FnMut(u32) -> ControlFlow<()>) -> ControlFlow<()> {
///         for n in (1..=self.0).rev() {
///             step(n)?;
///         }
///         ControlFlow::Continue(())
///     }
/// }
///
/// assert_eq!(Countdown(3).collect(), vec![3, 2, 1]);
/// assert_eq!(Countdown(3).first().get(), 3);
/// ```
pub trait Seq {
    /// The type of element this sequence produces.
    type Item;

    /// Drive the sequence, feeding elements to `step` until it stops or the
    /// elements run out.
    fn drive(&self, step: &mut dyn FnMut(Self::Item) -> ControlFlow<()>) -> ControlFlow<()>;
}

impl<S> Seq for &S
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn drive(&self, step: &mut dyn FnMut(Self::Item) -> ControlFlow<()>) -> ControlFlow<()> {
        (**self).drive(step)
    }
}

impl<S> Seq for Box<S>
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn drive(&self, step: &mut dyn FnMut(Self::Item) -> ControlFlow<()>) -> ControlFlow<()> {
        (**self).drive(step)
    }
}

impl<S> Seq for Rc<S>
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn drive(&self, step: &mut dyn FnMut(Self::Item) -> ControlFlow<()>) -> ControlFlow<()> {
        (**self).drive(step)
    }
}

/// Drain `seq` into a buffer. Used by the stages that need the whole input.
pub(crate) fn materialize<S>(seq: &S) -> Vec<S::Item>
where
    S: Seq + ?Sized,
{
    let mut buffer = Vec::new();
    let _ = seq.drive(&mut |item| {
        buffer.push(item);
        ControlFlow::Continue(())
    });
    buffer
}
