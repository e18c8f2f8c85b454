//! Lazy sequences built on a pull-based generator with early exit.
//!
//! A [`Seq`] is a reusable description of an ordered stream. Stages such as
//! [`filter`](SeqExt::filter), [`map`](SeqExt::map) and
//! [`flat_map`](SeqExt::flat_map) wrap the previous description without
//! doing any work. A terminal operation such as [`collect`](SeqExt::collect)
//! or [`first`](SeqExt::first) drives the whole pipeline in a single pass.
//!
//! # Early exit
//!
//! Every stage forwards the consumer's stop signal upstream before the next
//! element is requested. Nothing past the answer is ever produced:
//!
//! ```rust
//! use std::cell::Cell;
//! use steams::seq::{self, SeqExt};
//!
//! let produced = Cell::new(0);
//! let counter = &produced;
//! let pipeline = seq::from_iter(0..3).flat_map(move |outer| {
//!     seq::from_iter(0..5)
//!         .peek(move |_| counter.set(counter.get() + 1))
//!         .map(move |inner| outer * 10 + inner)
//! });
//!
//! assert_eq!(pipeline.take(2).collect(), vec![0, 1]);
//! assert_eq!(produced.get(), 2);
//! ```
//!
//! # Materializing stages
//!
//! [`reverse`](SeqExt::reverse), [`sort_by`](SeqExt::sort_by),
//! [`rfold`](SeqExt::rfold), [`rposition`](SeqExt::rposition),
//! [`partition`](SeqExt::partition), grouping and [`zip`] need the whole input
//! and buffer it. Everything else streams.
//!
//! # Reentrancy
//!
//! A sequence owns no mutable state between runs. Stateful stages such as
//! [`take`](SeqExt::take) or [`distinct`](SeqExt::distinct) rebuild their
//! state on every drive, so driving the same description twice yields the
//! same result twice.

mod aggregate;
pub mod boxed;
pub mod combinators;
mod constructors;
mod ext;
#[cfg(feature = "tracing")]
pub mod tracing;
mod trait_def;

pub use std::ops::ControlFlow;

pub use trait_def::Seq;

pub use ext::SeqExt;

pub use boxed::BoxedSeq;

pub use combinators::{
    Chain, Distinct, Empty, Enumerate, Filter, FilterMap, FlatMap, Flatten, FromFn, FromIter,
    Map, Of, Once, Peek, Reverse, Skip, SkipWhile, SortBy, Take, TakeWhile,
};

pub use constructors::{empty, from_fn, from_iter, of, once};

pub use aggregate::{distinct, group_by, group_by_counting, zip};

#[cfg(feature = "tracing")]
pub use self::tracing::{Instrument, SeqTracingExt};

#[cfg(test)]
mod tests;
