//! Free-standing aggregations over sequences.
//!
//! Each of these is also available as a [`SeqExt`](crate::seq::SeqExt)
//! method. The functions read better when neither input is "the" receiver.

use std::hash::Hash;

use crate::error::LengthMismatchError;
use crate::list::List;
use crate::map::Map;
use crate::seq::combinators::{Distinct, Of};
use crate::seq::ext::SeqExt;
use crate::seq::trait_def::{materialize, Seq};

/// Pair elements of two sequences positionally.
///
/// Both inputs are materialized. Inputs of different lengths are a contract
/// violation reported as [`LengthMismatchError`]; the result is never
/// truncated to the shorter input.
///
/// # Example
///
/// ```rust
/// use steams::seq::{self, SeqExt};
///
/// let pairs = seq::zip(seq::of(vec![1, 2, 3]), seq::of(vec!["a", "b", "c"])).unwrap();
/// assert_eq!(pairs.collect(), vec![(1, "a"), (2, "b"), (3, "c")]);
///
/// assert!(seq::zip(seq::of(vec![1, 2, 3, 4]), seq::of(vec!["a", "b", "c"])).is_err());
/// ```
pub fn zip<A, B>(left: A, right: B) -> Result<Of<(A::Item, B::Item)>, LengthMismatchError>
where
    A: Seq,
    B: Seq,
{
    let left = materialize(&left);
    let right = materialize(&right);
    if left.len() != right.len() {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            left = left.len(),
            right = right.len(),
            "refusing to zip sequences of different lengths"
        );
        return Err(LengthMismatchError::new(left.len(), right.len()));
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(buffered = left.len(), "materialized sequences for zip");
    Ok(Of::new(left.into_iter().zip(right).collect()))
}

/// Each element once, in first-seen order. See [`SeqExt::distinct`].
pub fn distinct<S>(seq: S) -> Distinct<S>
where
    S: Seq,
    S::Item: Eq + Hash + Clone,
{
    seq.distinct()
}

/// Group elements by key. See [`SeqExt::group_by`].
pub fn group_by<S, K, F>(seq: S, classifier: F) -> Map<K, List<S::Item>>
where
    S: Seq,
    K: Eq + Hash,
    F: FnMut(&S::Item) -> K,
{
    seq.group_by(classifier)
}

/// Count elements per key. See [`SeqExt::group_by_counting`].
pub fn group_by_counting<S, K, F>(seq: S, classifier: F) -> Map<K, usize>
where
    S: Seq,
    K: Eq + Hash,
    F: FnMut(&S::Item) -> K,
{
    seq.group_by_counting(classifier)
}
