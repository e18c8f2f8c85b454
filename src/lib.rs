//! # Steams
//!
//! Sequence pipelines without manual loops.
//!
//! Steams offers two ways to run the same pipeline of operations (filter,
//! map, flat-map, take/skip, fold, sort, group, zip) over an ordered
//! collection:
//!
//! - **Lazy**: a [`Seq`] is a reusable description built on a pull-based
//!   generator. Stages compose into a single traversal, and a consumer that
//!   has its answer stops the whole pipeline, including sequences opened by
//!   `flat_map`.
//! - **Eager**: a [`List`] runs each stage immediately and hands back a new
//!   list.
//!
//! Key/value pairs get the same treatment with [`Seq2`] (lazy) and [`Map`]
//! (eager). Terminal operations that may find nothing return an
//! [`Optional`].
//!
//! ## Quick Example
//!
//! ```rust
//! use steams::prelude::*;
//!
//! let people = seq::of(vec![("Alice", 31), ("Bob", 17), ("Brian", 42), ("Charlie", 25)]);
//!
//! // Lazy: nothing runs until a terminal operation.
//! let first_adult_b = people
//!     .clone()
//!     .filter(|(_, age)| *age >= 18)
//!     .find(|(name, _)| name.starts_with('B'));
//! assert_eq!(first_adult_b.get(), ("Brian", 42));
//!
//! // Grouping.
//! let by_initial = people.group_by_counting(|(name, _)| name.chars().next().unwrap_or_default());
//! assert_eq!(by_initial[&'B'], 2);
//!
//! // Eager: every stage builds a new list.
//! let names = list!["Charlie", "Alice", "Bob"].sorted(|a, b| a < b);
//! assert_eq!(names.into_vec(), vec!["Alice", "Bob", "Charlie"]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: trace events from materializing stages and the
//!   `SeqTracingExt::instrument` combinator
//! - `serde`: `Serialize`/`Deserialize` for [`Optional`], [`List`], [`Map`]
//!   and [`Entry`]
//! - `proptest`: `Arbitrary` for [`Optional`] and [`List`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod entry;
pub mod error;
pub mod list;
pub mod map;
pub mod optional;
pub mod seq;
pub mod seq2;
pub mod testing;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use entry::Entry;
pub use error::{EmptyValueError, LengthMismatchError};
pub use list::List;
pub use map::Map;
pub use optional::Optional;
pub use seq::{BoxedSeq, Seq, SeqExt};
pub use seq2::Seq2;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::entry::Entry;
    pub use crate::error::{EmptyValueError, LengthMismatchError};
    pub use crate::list;
    pub use crate::list::List;
    pub use crate::map::Map;
    pub use crate::optional::Optional;
    pub use crate::seq::{self, BoxedSeq, Seq, SeqExt};
    pub use crate::seq2::Seq2;

    #[cfg(feature = "tracing")]
    pub use crate::seq::SeqTracingExt;
}
