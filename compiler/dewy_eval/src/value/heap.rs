//! Shared immutable storage for heap-backed values.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Reference-counted payload of a heap value.
///
/// The constructor is private to the `value` module, so every heap value is
/// built through a `Value` factory method. Values are single-threaded, like
/// the scopes that hold them, hence `Rc` rather than `Arc`.
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }
}

impl Heap<str> {
    #[inline]
    pub(super) fn text(s: &str) -> Self {
        Heap(Rc::from(s))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Mutable access when this is the only handle.
    #[inline]
    pub(crate) fn get_mut(&mut self) -> Option<&mut T> {
        Rc::get_mut(&mut self.0)
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (*self.0).fmt(f)
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}
