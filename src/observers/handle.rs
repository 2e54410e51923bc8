//! # Non-owning observer handles.
//!
//! The subject never owns an observer. Callers keep the `Rc<O>` and hand the
//! subject an [`ObserverHandle`], which is a `Weak<dyn Observer>` plus the
//! observer's name.
//!
//! ## Rules
//! - Identity is the allocation address: two handles are equal when they were
//!   built from the same `Rc`, even after the observer has been dropped.
//! - The contract is unchanged from a raw pointer: detach before dropping the
//!   observer. A handle outliving its observer is reported as dangling instead
//!   of being dereferenced.

use std::fmt;
use std::rc::{Rc, Weak};

use super::Observer;

/// Weak, identity-comparable reference to an [`Observer`].
#[derive(Clone)]
pub struct ObserverHandle {
    inner: Weak<dyn Observer>,
    name: &'static str,
}

impl ObserverHandle {
    /// Creates a handle to a concrete observer.
    #[must_use]
    pub fn new<O: Observer>(observer: &Rc<O>) -> Self {
        let weak: Weak<O> = Rc::downgrade(observer);
        let inner: Weak<dyn Observer> = weak;
        Self {
            inner,
            name: observer.name(),
        }
    }

    /// Creates a handle to an already type-erased observer.
    #[must_use]
    pub fn from_dyn(observer: &Rc<dyn Observer>) -> Self {
        Self {
            inner: Rc::downgrade(observer),
            name: observer.name(),
        }
    }

    /// Returns a strong reference for the duration of a call, if the observer is alive.
    #[inline]
    pub fn upgrade(&self) -> Option<Rc<dyn Observer>> {
        self.inner.upgrade()
    }

    /// True if the observer has been dropped.
    #[inline]
    pub fn is_dangling(&self) -> bool {
        self.inner.strong_count() == 0
    }

    /// Name captured when the handle was created.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ObserverHandle {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for ObserverHandle {}

impl fmt::Debug for ObserverHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverHandle")
            .field("name", &self.name)
            .field("dangling", &self.is_dangling())
            .finish()
    }
}

impl<O: Observer> From<&Rc<O>> for ObserverHandle {
    fn from(observer: &Rc<O>) -> Self {
        Self::new(observer)
    }
}

impl From<&Rc<dyn Observer>> for ObserverHandle {
    fn from(observer: &Rc<dyn Observer>) -> Self {
        Self::from_dyn(observer)
    }
}
