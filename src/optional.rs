//! A value that may or may not be present.
//!
//! `Optional<T>` is what every terminal operation returns when it may fail to
//! produce an element: `first`, `find`, `last`, `nth`, `position`, `compare`
//! and friends. An empty sequence never raises; it yields [`Optional::Empty`].
//!
//! # Optional vs Option
//!
//! `Optional` converts freely to and from [`Option`]. It exists so that the
//! absence path is spelled out at the call site: [`get`](Optional::get) fails
//! loudly on an empty value, while [`or_else`](Optional::or_else) and
//! [`or_else_compute`](Optional::or_else_compute) take the fallback path
//! deliberately.
//!
//! # Examples
//!
//! ```rust
//! use steams::Optional;
//!
//! let four = Optional::present(4);
//! assert_eq!(four.map(|x| x * 2).get(), 8);
//!
//! let nothing: Optional<i32> = Optional::empty();
//! assert!(!nothing.map(|x| x * 2).has_value());
//! assert_eq!(nothing.or_else(0), 0);
//! ```

use crate::error::EmptyValueError;

/// Zero or one value of type `T`.
///
/// "Has value" and "get value" never disagree: [`has_value`](Optional::has_value)
/// is `true` exactly when [`get`](Optional::get) succeeds.
///
/// # Example
///
/// ```rust
/// use steams::Optional;
///
/// let name = Optional::present("Alice");
/// match name {
///     Optional::Present(n) => assert_eq!(n, "Alice"),
///     Optional::Empty => unreachable!(),
/// }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Optional<T> {
    /// A value is present
    Present(T),
    /// No value
    #[default]
    Empty,
}

impl<T> Optional<T> {
    // ========== Constructors ==========

    /// Create an Optional holding `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::Optional;
    ///
    /// assert!(Optional::present(42).has_value());
    /// ```
    #[inline]
    pub fn present(value: T) -> Self {
        Optional::Present(value)
    }

    /// Create an empty Optional.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::Optional;
    ///
    /// let o: Optional<i32> = Optional::empty();
    /// assert!(o.is_empty());
    /// ```
    #[inline]
    pub fn empty() -> Self {
        Optional::Empty
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn has_value(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.has_value()
    }

    // ========== Extractors ==========

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with the [`EmptyValueError`] message if the Optional is empty.
    /// Check [`has_value`](Optional::has_value) first, use
    /// [`try_get`](Optional::try_get), or use one of the fallback accessors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::Optional;
    ///
    /// assert_eq!(Optional::present(4).get(), 4);
    /// ```
    ///
    /// ```should_panic
    /// use steams::Optional;
    ///
    /// Optional::<i32>::empty().get(); // panics
    /// ```
    #[track_caller]
    pub fn get(self) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Empty => panic!("{}", EmptyValueError),
        }
    }

    /// Returns the contained value, or [`EmptyValueError`] if there is none.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::{EmptyValueError, Optional};
    ///
    /// assert_eq!(Optional::present(1).try_get(), Ok(1));
    /// assert_eq!(Optional::<i32>::empty().try_get(), Err(EmptyValueError));
    /// ```
    pub fn try_get(self) -> Result<T, EmptyValueError> {
        self.or_err(EmptyValueError)
    }

    /// Returns the contained value, panicking with `msg` if there is none.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Empty => panic!("{}", msg),
        }
    }

    /// Returns the contained value or `default`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::Optional;
    ///
    /// assert_eq!(Optional::present(3).or_else(0), 3);
    /// assert_eq!(Optional::empty().or_else(0), 0);
    /// ```
    #[inline]
    pub fn or_else(self, default: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Empty => default,
        }
    }

    /// Returns the contained value or computes one from `supplier`.
    ///
    /// The supplier only runs on the absence path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::Optional;
    ///
    /// let value = Optional::<String>::empty().or_else_compute(|| "fallback".to_string());
    /// assert_eq!(value, "fallback");
    /// ```
    #[inline]
    pub fn or_else_compute<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(value) => value,
            Optional::Empty => supplier(),
        }
    }

    /// Converts into a `Result`, mapping absence to `err`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::Optional;
    ///
    /// assert_eq!(Optional::present(1).or_err("missing"), Ok(1));
    /// assert_eq!(Optional::<i32>::empty().or_err("missing"), Err("missing"));
    /// ```
    pub fn or_err<E>(self, err: E) -> Result<T, E> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Empty => Err(err),
        }
    }

    /// Returns `self` if present, otherwise the Optional produced by `supplier`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::Optional;
    ///
    /// let o = Optional::empty().or(|| Optional::present(5));
    /// assert_eq!(o, Optional::present(5));
    /// ```
    pub fn or<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Empty => supplier(),
        }
    }

    // ========== Transformations ==========

    /// Keep the value only if it satisfies `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::Optional;
    ///
    /// assert_eq!(Optional::present(4).filter(|x| x % 2 == 0), Optional::present(4));
    /// assert_eq!(Optional::present(3).filter(|x| x % 2 == 0), Optional::empty());
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Present(value) if predicate(&value) => Optional::Present(value),
            _ => Optional::Empty,
        }
    }

    /// Transform the contained value, preserving absence.
    ///
    /// The output type is chosen by `mapper`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::Optional;
    ///
    /// assert_eq!(Optional::present(4).map(|x| x.to_string()).get(), "4");
    /// ```
    pub fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(value) => Optional::Present(mapper(value)),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Chain a computation that may itself produce nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::Optional;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Optional::present(x / 2) } else { Optional::empty() };
    /// assert_eq!(Optional::present(8).and_then(half), Optional::present(4));
    /// assert_eq!(Optional::present(7).and_then(half), Optional::empty());
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Present(value) => f(value),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Borrow the contained value.
    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Empty => Optional::Empty,
        }
    }

    // ========== Side effects ==========

    /// Run `consumer` on the value if present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::Optional;
    ///
    /// let mut seen = Vec::new();
    /// Optional::present(1).if_present(|x| seen.push(x));
    /// Optional::<i32>::empty().if_present(|x| seen.push(x));
    /// assert_eq!(seen, vec![1]);
    /// ```
    pub fn if_present<F>(self, consumer: F)
    where
        F: FnOnce(T),
    {
        if let Optional::Present(value) = self {
            consumer(value);
        }
    }

    /// Run `consumer` on the value if present, otherwise run `absent`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::Optional;
    ///
    /// use std::cell::RefCell;
    ///
    /// let log = RefCell::new(Vec::new());
    /// Optional::<i32>::empty().if_present_or_else(
    ///     |x| log.borrow_mut().push(format!("got {}", x)),
    ///     || log.borrow_mut().push("nothing".to_string()),
    /// );
    /// assert_eq!(log.into_inner(), vec!["nothing"]);
    /// ```
    pub fn if_present_or_else<F, G>(self, consumer: F, absent: G)
    where
        F: FnOnce(T),
        G: FnOnce(),
    {
        match self {
            Optional::Present(value) => consumer(value),
            Optional::Empty => absent(),
        }
    }

    // ========== Conversions ==========

    /// Convert into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Empty => None,
        }
    }
}

impl<T: Clone> Optional<&T> {
    /// Clone the borrowed value into an owned Optional.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steams::List;
    ///
    /// let names = List::of(vec!["Ann".to_string()]);
    /// assert_eq!(names.first().cloned().get(), "Ann");
    /// ```
    pub fn cloned(self) -> Optional<T> {
        self.map(T::clone)
    }
}

impl<T: Copy> Optional<&T> {
    /// Copy the borrowed value into an owned Optional.
    pub fn copied(self) -> Optional<T> {
        self.map(|value| *value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Optional::Present(value),
            None => Optional::Empty,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}
