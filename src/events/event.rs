//! # The event marker trait.
//!
//! An event is any `'static` value that opts in with `impl Event for T {}`.
//! The registry carries no schema beyond the concrete type: the payload is
//! whatever the type holds.
//!
//! Observers receive events type-erased as `&dyn Event` and discriminate with
//! [`is`](trait.Event.html#method.is) or
//! [`downcast_ref`](trait.Event.html#method.downcast_ref):
//!
//! ```rust
//! use eventvisor::Event;
//!
//! struct Spawned { id: u32 }
//! struct Despawned { id: u32 }
//! impl Event for Spawned {}
//! impl Event for Despawned {}
//!
//! fn describe(ev: &dyn Event) -> String {
//!     if let Some(s) = ev.downcast_ref::<Spawned>() {
//!         format!("spawned {}", s.id)
//!     } else if let Some(d) = ev.downcast_ref::<Despawned>() {
//!         format!("despawned {}", d.id)
//!     } else {
//!         ev.type_name().to_string()
//!     }
//! }
//!
//! assert_eq!(describe(&Spawned { id: 7 }), "spawned 7");
//! assert_eq!(describe(&Despawned { id: 7 }), "despawned 7");
//! ```

use std::any::{self, Any};

use super::EventKey;

/// Upcasting support for event trait objects.
///
/// Implemented for every `'static` type; never implement it by hand.
///
/// Smart pointers are `'static` types too, so `Box<dyn Event>` has its own
/// `AsAny` impl: `boxed.type_name()` and `boxed.as_any()` describe the `Box`,
/// not the event inside. Deref first (`(*boxed).type_name()`,
/// `boxed.as_ref().as_any()`) to reach the event.
///
/// ```rust
/// use eventvisor::{AsAny, Event};
///
/// struct Ready;
/// impl Event for Ready {}
///
/// let boxed: Box<dyn Event> = Box::new(Ready);
/// assert!((*boxed).type_name().ends_with("Ready"));
/// assert!(boxed.type_name().contains("Box"));
/// assert!((*boxed).as_any().is::<Ready>());
/// ```
pub trait AsAny: Any + 'static {
    /// Returns `self` as `&dyn Any` so the concrete type can be recovered.
    fn as_any(&self) -> &dyn Any;

    /// Name of the concrete type.
    fn type_name(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }
}

/// Marker for a kind of occurrence that can be raised through a
/// [`Subject`](crate::Subject).
///
/// Only opted-in types are events: `Box<dyn Event>` is not, so `&boxed` does
/// not coerce to `&dyn Event`. Pass `&*boxed` wherever a `&dyn Event` is
/// expected.
pub trait Event: AsAny + 'static {}

impl dyn Event {
    /// True if the concrete type of this event is `E`.
    #[inline]
    pub fn is<E: Event>(&self) -> bool {
        self.as_any().is::<E>()
    }

    /// Returns the event as `&E` if its concrete type is exactly `E`.
    #[inline]
    pub fn downcast_ref<E: Event>(&self) -> Option<&E> {
        self.as_any().downcast_ref::<E>()
    }

    /// Registry key of the concrete type.
    #[inline]
    pub fn key(&self) -> EventKey {
        EventKey::of_val(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Opened(u8);
    struct Closed;

    impl Event for Opened {}
    impl Event for Closed {}

    #[test]
    fn test_downcast_exact_type_only() {
        let ev: &dyn Event = &Opened(3);
        assert!(ev.is::<Opened>());
        assert!(!ev.is::<Closed>());
        assert_eq!(ev.downcast_ref::<Opened>(), Some(&Opened(3)));
        assert!(ev.downcast_ref::<Closed>().is_none());
    }

    #[test]
    fn test_type_name_through_trait_object() {
        let ev: Box<dyn Event> = Box::new(Closed);
        // Deref first: `Box<dyn Event>` is itself `Any` and would report its own name.
        assert!((*ev).type_name().ends_with("Closed"));
        assert_eq!(ev.key(), EventKey::of::<Closed>());
    }
}
