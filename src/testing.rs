//! Testing utilities for code built on steams.
//!
//! This module provides assertion macros for [`Optional`](crate::Optional)
//! values and, behind the `proptest` feature, [`Arbitrary`] implementations so
//! that `Optional` and `List` can be generated in property tests.
//!
//! # Examples
//!
//! ```rust
//! use steams::seq::{self, SeqExt};
//! use steams::{assert_empty, assert_present, assert_present_eq};
//!
//! let numbers = seq::of(vec![1, 2, 3]);
//! assert_present!(numbers.first());
//! assert_present_eq!(numbers.max(), 3);
//! assert_empty!(numbers.find(|x| *x > 10));
//! ```

/// Assert that an optional holds a value.
///
/// This macro will panic if the optional is empty.
///
/// # Example
///
/// ```rust
/// use steams::{assert_present, Optional};
///
/// assert_present!(Optional::present(42));
/// ```
#[macro_export]
macro_rules! assert_present {
    ($optional:expr) => {
        match $optional {
            $crate::Optional::Present(_) => {}
            $crate::Optional::Empty => {
                panic!("Expected Present, got Empty");
            }
        }
    };
}

/// Assert that an optional is empty.
///
/// This macro will panic if the optional holds a value.
///
/// # Example
///
/// ```rust
/// use steams::{assert_empty, Optional};
///
/// assert_empty!(Optional::<i32>::empty());
/// ```
#[macro_export]
macro_rules! assert_empty {
    ($optional:expr) => {
        match $optional {
            $crate::Optional::Empty => {}
            $crate::Optional::Present(v) => {
                panic!("Expected Empty, got Present: {:?}", v);
            }
        }
    };
}

/// Assert that an optional holds a specific value.
///
/// This macro will panic if the optional is empty or if the values differ.
///
/// # Example
///
/// ```rust
/// use steams::{assert_present_eq, list};
///
/// assert_present_eq!(list![4, 8].last(), &8);
/// ```
#[macro_export]
macro_rules! assert_present_eq {
    ($optional:expr, $expected:expr) => {
        match $optional {
            $crate::Optional::Present(value) => {
                assert_eq!(value, $expected);
            }
            $crate::Optional::Empty => {
                panic!("Expected Present({:?}), got Empty", $expected);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{List, Optional};

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Optional<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        proptest::option::of(any_with::<T>(args))
            .prop_map(Optional::from)
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for List<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        proptest::collection::vec(any_with::<T>(args), 0..32)
            .prop_map(List::from)
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::Optional;

    #[test]
    fn assert_present_macro() {
        assert_present!(Optional::present("x"));
    }

    #[test]
    fn assert_empty_macro() {
        assert_empty!(Optional::<u8>::empty());
    }

    #[test]
    fn assert_present_eq_macro() {
        assert_present_eq!(Optional::present(3).map(|x| x * 2), 6);
    }

    #[test]
    #[should_panic(expected = "Expected Present, got Empty")]
    fn assert_present_panics_on_empty() {
        assert_present!(Optional::<i32>::empty());
    }

    #[test]
    #[should_panic(expected = "Expected Empty, got Present: 7")]
    fn assert_empty_panics_on_present() {
        assert_empty!(Optional::present(7));
    }

    #[test]
    #[should_panic(expected = "Expected Present(5), got Empty")]
    fn assert_present_eq_panics_on_empty() {
        assert_present_eq!(Optional::<i32>::empty(), 5);
    }

    #[test]
    #[should_panic(expected = "assertion")]
    fn assert_present_eq_panics_on_mismatch() {
        assert_present_eq!(Optional::present(1), 2);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::{List, Optional};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn optional_arbitrary_agrees_with_itself(opt in any::<Optional<i32>>()) {
                prop_assert_eq!(opt.has_value(), !opt.is_empty());
                prop_assert_eq!(opt.try_get().is_ok(), opt.has_value());
            }

            #[test]
            fn list_arbitrary_stays_within_bounds(list in any::<List<u8>>()) {
                prop_assert!(list.len() < 32);
                prop_assert_eq!(list.count(), list.as_slice().len());
            }
        }
    }
}
