//! Combinator types returned by [`SeqExt`](crate::seq::SeqExt).
//!
//! Each stage is a plain struct wrapping the previous stage. Building a
//! pipeline allocates nothing; work happens only when a terminal operation
//! drives it.
//!
//! Most users won't name these types directly. They appear behind
//! `impl Seq<Item = ...>` or are erased with [`boxed`](crate::seq::SeqExt::boxed).

mod chain;
mod distinct;
mod enumerate;
mod filter;
mod filter_map;
mod flat_map;
mod flatten;
mod map;
mod peek;
mod reverse;
mod skip;
mod sort_by;
mod sources;
mod take;

pub use chain::Chain;
pub use distinct::Distinct;
pub use enumerate::Enumerate;
pub use filter::Filter;
pub use filter_map::FilterMap;
pub use flat_map::FlatMap;
pub use flatten::Flatten;
pub use map::Map;
pub use peek::Peek;
pub use reverse::Reverse;
pub use skip::{Skip, SkipWhile};
pub use sort_by::SortBy;
pub use sources::{Empty, FromFn, FromIter, Of, Once};
pub use take::{Take, TakeWhile};

pub(crate) use sort_by::ordering_from_less;
