//! Sources - the sequences every pipeline starts from.

use std::fmt;
use std::marker::PhantomData;
use std::ops::ControlFlow;

use crate::seq::trait_def::Seq;

/// A sequence over an owned vector.
///
/// Each drive hands out clones of the stored elements, so the vector is never
/// consumed. Created by [`of`](crate::seq::of).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Of<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Of<T> {
    /// Create a sequence over `items`.
    pub fn new(items: Vec<T>) -> Self {
        Of { items }
    }
}

impl<T: Clone> Seq for Of<T> {
    type Item = T;

    fn drive(&self, step: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        for item in &self.items {
            step(item.clone())?;
        }
        ControlFlow::Continue(())
    }
}

/// A sequence over any cloneable `IntoIterator`.
///
/// The iterable is cloned at the start of every drive. Ranges, slice
/// iterators and maps are all cheap or natural fits. Created by
/// [`from_iter`](crate::seq::from_iter).
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    pub(crate) iter: I,
}

impl<I> Seq for FromIter<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn drive(&self, step: &mut dyn FnMut(I::Item) -> ControlFlow<()>) -> ControlFlow<()> {
        for item in self.iter.clone() {
            step(item)?;
        }
        ControlFlow::Continue(())
    }
}

/// A sequence defined by a generator function.
///
/// The generator receives the step function and is expected to honor its
/// stop signal, usually by forwarding with `?`. Created by
/// [`from_fn`](crate::seq::from_fn).
pub struct FromFn<F, T> {
    pub(crate) f: F,
    pub(crate) _marker: PhantomData<fn() -> T>,
}

impl<F, T> fmt::Debug for FromFn<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").field("f", &"<function>").finish()
    }
}

impl<F: Clone, T> Clone for FromFn<F, T> {
    fn clone(&self) -> Self {
        FromFn {
            f: self.f.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, T> Seq for FromFn<F, T>
where
    F: Fn(&mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()>,
{
    type Item = T;

    fn drive(&self, step: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        (self.f)(step)
    }
}

/// A sequence with no elements. Created by [`empty`](crate::seq::empty).
pub struct Empty<T> {
    pub(crate) _marker: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        Empty {
            _marker: PhantomData,
        }
    }
}

impl<T> Seq for Empty<T> {
    type Item = T;

    fn drive(&self, _step: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// A sequence of exactly one element. Created by [`once`](crate::seq::once).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Once<T> {
    pub(crate) value: T,
}

impl<T: Clone> Seq for Once<T> {
    type Item = T;

    fn drive(&self, step: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        step(self.value.clone())
    }
}
