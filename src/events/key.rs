//! # Exact-type identity of event kinds.
//!
//! [`EventKey`] is the lookup key of the registry. It wraps the [`TypeId`] of
//! the concrete event type, so two keys are equal only when the types are
//! identical. Wrapping an event in a newtype produces a new, unrelated key:
//!
//! ```rust
//! use eventvisor::{Event, EventKey};
//!
//! struct Hit { damage: u32 }
//! struct CriticalHit(Hit);
//! impl Event for Hit {}
//! impl Event for CriticalHit {}
//!
//! assert_ne!(EventKey::of::<Hit>(), EventKey::of::<CriticalHit>());
//! ```

use std::any::{self, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::Event;

/// Runtime identity of a concrete event type.
///
/// Equality and hashing only look at the [`TypeId`]; the type name is carried
/// along for diagnostics.
#[derive(Clone, Copy)]
pub struct EventKey {
    id: TypeId,
    name: &'static str,
}

impl EventKey {
    /// Key of the static type `E`.
    #[must_use]
    pub fn of<E: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            name: any::type_name::<E>(),
        }
    }

    /// Key of the concrete type behind a type-erased event.
    #[must_use]
    pub fn of_val(event: &dyn Event) -> Self {
        Self {
            id: event.as_any().type_id(),
            name: event.type_name(),
        }
    }

    /// Underlying type id.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name (diagnostic only, not guaranteed stable).
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for EventKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EventKey {}

impl Hash for EventKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventKey").field(&self.name).finish()
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    struct Base;
    struct Derived(#[allow(dead_code)] Base);

    impl Event for Base {}
    impl Event for Derived {}

    #[test]
    fn test_newtype_is_distinct_key() {
        assert_eq!(EventKey::of::<Base>(), EventKey::of::<Base>());
        assert_ne!(EventKey::of::<Base>(), EventKey::of::<Derived>());
    }

    #[test]
    fn test_of_val_resolves_concrete_type() {
        let boxed: Box<dyn Event> = Box::new(Derived(Base));
        assert_eq!(EventKey::of_val(boxed.as_ref()), EventKey::of::<Derived>());
        assert_ne!(EventKey::of_val(boxed.as_ref()), EventKey::of::<Base>());
    }

    #[test]
    fn test_hash_follows_type_identity() {
        let mut set = HashSet::new();
        set.insert(EventKey::of::<Base>());
        set.insert(EventKey::of_val(&Base));
        set.insert(EventKey::of::<Derived>());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_is_type_name() {
        let key = EventKey::of::<Base>();
        assert!(key.to_string().ends_with("Base"));
        assert_eq!(key.name(), any::type_name::<Base>());
    }
}
