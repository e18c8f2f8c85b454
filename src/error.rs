//! Error types for contract violations.
//!
//! Every pipeline operation is total except two: dereferencing an empty
//! [`Optional`](crate::Optional) and zipping sequences of different lengths.
//! Both are reported with the types in this module.

use std::fmt;

/// Returned when the value of an empty [`Optional`](crate::Optional) is requested.
///
/// # Example
///
/// ```
/// use steams::{EmptyValueError, Optional};
///
/// let empty: Optional<i32> = Optional::empty();
/// assert_eq!(empty.try_get(), Err(EmptyValueError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyValueError;

impl fmt::Display for EmptyValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "called get() on an empty Optional")
    }
}

impl std::error::Error for EmptyValueError {}

/// Returned by `zip` when the two inputs do not have the same length.
///
/// Zipping never truncates to the shorter input.
///
/// # Example
///
/// ```
/// use steams::seq::{self, SeqExt};
///
/// let err = seq::zip(seq::of(vec![1, 2, 3, 4]), seq::of(vec!["a", "b", "c"])).unwrap_err();
/// assert_eq!(err.left, 4);
/// assert_eq!(err.right, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthMismatchError {
    /// Number of elements in the left input
    pub left: usize,
    /// Number of elements in the right input
    pub right: usize,
}

impl LengthMismatchError {
    /// Create a new length mismatch error.
    pub fn new(left: usize, right: usize) -> Self {
        LengthMismatchError { left, right }
    }
}

impl fmt::Display for LengthMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot zip sequences of different lengths: left has {}, right has {}",
            self.left, self.right
        )
    }
}

impl std::error::Error for LengthMismatchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_display() {
        assert_eq!(
            EmptyValueError.to_string(),
            "called get() on an empty Optional"
        );
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = LengthMismatchError::new(4, 3);
        assert_eq!(
            err.to_string(),
            "cannot zip sequences of different lengths: left has 4, right has 3"
        );
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&EmptyValueError);
        takes_error(&LengthMismatchError::new(1, 2));
    }
}
