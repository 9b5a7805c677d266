//! Heap wrapper for shared value storage.
//!
//! `Heap<T>` wraps `Rc<T>` and is the only way string and array payloads are
//! allocated. The constructor is `pub(super)`, so outside the value module
//! heap values come from `Value::string()` and `Value::array()`.
//!
//! Payloads are immutable once allocated. Builtins such as `push` and `rest`
//! build a fresh `Vec` rather than writing through a shared handle, which is
//! what gives arrays value semantics.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// A shared, immutable heap allocation.
///
/// Single-threaded: values capture `Rc`-based environments, so nothing in
/// the value model is `Send`.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    /// Create a new heap-allocated value.
    ///
    /// This is `pub(super)`: only visible within the value module.
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Mutable access to the payload, only if this is the sole handle.
    ///
    /// Used when a value is torn down; a shared payload is never written.
    #[inline]
    pub(super) fn get_mut(this: &mut Self) -> Option<&mut T> {
        Rc::get_mut(&mut this.0)
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
