//! Tracing support for sequences.
//!
//! Feature-gated behind `#[cfg(feature = "tracing")]`.

use std::ops::ControlFlow;

use crate::seq::trait_def::Seq;

/// A sequence whose drives run inside a tracing span.
///
/// Each drive enters the span, then records how many elements were forwarded
/// and whether the consumer stopped early.
///
/// Created by [`SeqTracingExt::instrument`].
#[derive(Debug, Clone)]
pub struct Instrument<S> {
    pub(crate) inner: S,
    pub(crate) span: tracing::Span,
}

impl<S: Seq> Seq for Instrument<S> {
    type Item = S::Item;

    fn drive(&self, step: &mut dyn FnMut(S::Item) -> ControlFlow<()>) -> ControlFlow<()> {
        let _entered = self.span.enter();
        let mut forwarded = 0usize;
        let flow = self.inner.drive(&mut |item| {
            forwarded += 1;
            step(item)
        });
        tracing::trace!(forwarded, stopped_early = flow.is_break(), "sequence driven");
        flow
    }
}

/// Extension trait for adding tracing instrumentation to sequences.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait SeqTracingExt: Seq {
    /// Run every drive of this sequence inside `span`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use steams::seq::{self, SeqExt, SeqTracingExt};
    /// use tracing::debug_span;
    ///
    /// let pets = seq::of(pets)
    ///     .filter(is_cat)
    ///     .instrument(debug_span!("cats", owner = %owner));
    /// ```
    fn instrument(self, span: tracing::Span) -> Instrument<Self>
    where
        Self: Sized,
    {
        Instrument { inner: self, span }
    }
}

impl<S: Seq> SeqTracingExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::{self, SeqExt};
    use tracing_test::traced_test;

    #[test]
    fn test_instrument_is_transparent() {
        let s = seq::from_iter(1..=5).instrument(tracing::info_span!("numbers"));
        assert_eq!(s.collect(), vec![1, 2, 3, 4, 5]);
        assert_eq!(s.first().get(), 1);
    }

    #[test]
    #[traced_test]
    fn test_instrument_records_forwarded_count() {
        let s = seq::from_iter(1..=5).instrument(tracing::info_span!("numbers"));
        let _ = s.take(2).collect();
        assert!(logs_contain("forwarded=2"));
        assert!(logs_contain("stopped_early=true"));
    }
}
