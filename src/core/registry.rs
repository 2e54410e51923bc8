//! # Registry - type-keyed subscriber lists.
//!
//! The registry maps each [`EventKey`] to the ordered list of observers
//! attached to it. It is a small state machine:
//!
//! ```text
//!            attach (first)
//!   Absent ──────────────────► Active(map)
//!     ▲                           │  attach / detach / prune
//!     │                           │  (list emptied → key removed)
//!     └───────────────────────────┘
//!         last key removed / clear
//! ```
//!
//! ## Rules
//! - A handle appears at most once per list
//! - Lists keep arrival order, which is the delivery order
//! - No key maps to an empty list
//! - `Active` never holds an empty map
//!
//! The registry only reports what happened; turning outcomes into
//! diagnostics is the subject's job.

use std::collections::HashMap;

use crate::events::EventKey;
use crate::observers::ObserverHandle;

/// Result of [`Registry::attach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AttachOutcome {
    /// Handle appended to the list.
    Attached,
    /// Handle was already in the list; nothing changed.
    AlreadyAttached,
}

/// Result of [`Registry::detach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DetachOutcome {
    /// Handle removed (`removed` occurrences).
    Detached { removed: usize },
    /// Registry is active but the handle is not in the list for this key.
    NotAttached,
    /// Registry is absent.
    NoRegistry,
}

/// Subscriber lists keyed by exact event type.
#[derive(Debug, Default)]
pub(crate) enum Registry {
    /// Nothing attached anywhere; no storage allocated.
    #[default]
    Absent,
    /// At least one non-empty list exists.
    Active(HashMap<EventKey, Vec<ObserverHandle>>),
}

impl Registry {
    /// Appends `handle` to the list for `key`, creating storage as needed.
    pub(crate) fn attach(&mut self, key: EventKey, handle: ObserverHandle) -> AttachOutcome {
        let Registry::Active(map) = self else {
            *self = Registry::Active(HashMap::from([(key, vec![handle])]));
            return AttachOutcome::Attached;
        };

        let list = map.entry(key).or_default();
        if list.contains(&handle) {
            return AttachOutcome::AlreadyAttached;
        }
        list.push(handle);
        AttachOutcome::Attached
    }

    /// Removes every occurrence of `handle` from the list for `key`.
    pub(crate) fn detach(&mut self, key: EventKey, handle: &ObserverHandle) -> DetachOutcome {
        let Registry::Active(map) = self else {
            return DetachOutcome::NoRegistry;
        };
        let Some(list) = map.get_mut(&key) else {
            return DetachOutcome::NotAttached;
        };

        let before = list.len();
        list.retain(|h| h != handle);
        let removed = before - list.len();

        self.collapse(key);
        if removed == 0 {
            DetachOutcome::NotAttached
        } else {
            DetachOutcome::Detached { removed }
        }
    }

    /// Removes the given handles from the list for `key` (dangling cleanup).
    pub(crate) fn prune(&mut self, key: EventKey, handles: &[ObserverHandle]) -> usize {
        let Registry::Active(map) = self else {
            return 0;
        };
        let Some(list) = map.get_mut(&key) else {
            return 0;
        };

        let before = list.len();
        list.retain(|h| !handles.contains(h));
        let removed = before - list.len();

        self.collapse(key);
        removed
    }

    /// Copy of the list for `key`, or `None` if nobody is attached.
    pub(crate) fn snapshot(&self, key: &EventKey) -> Option<Vec<ObserverHandle>> {
        match self {
            Registry::Absent => None,
            Registry::Active(map) => map.get(key).cloned(),
        }
    }

    /// True if `handle` is in the list for `key`.
    pub(crate) fn contains(&self, key: &EventKey, handle: &ObserverHandle) -> bool {
        match self {
            Registry::Absent => false,
            Registry::Active(map) => map.get(key).is_some_and(|list| list.contains(handle)),
        }
    }

    /// Number of handles attached to `key`.
    pub(crate) fn subscriber_count(&self, key: &EventKey) -> usize {
        match self {
            Registry::Absent => 0,
            Registry::Active(map) => map.get(key).map_or(0, Vec::len),
        }
    }

    /// Number of event types with at least one handle.
    pub(crate) fn event_count(&self) -> usize {
        match self {
            Registry::Absent => 0,
            Registry::Active(map) => map.len(),
        }
    }

    /// True while any list exists.
    #[inline]
    pub(crate) fn is_active(&self) -> bool {
        matches!(self, Registry::Active(_))
    }

    /// Drops every list and returns to `Absent`.
    pub(crate) fn clear(&mut self) {
        *self = Registry::Absent;
    }

    /// Removes `key` if its list is empty, then releases the map if it is empty.
    fn collapse(&mut self, key: EventKey) {
        let Registry::Active(map) = self else {
            return;
        };
        if map.get(&key).is_some_and(Vec::is_empty) {
            map.remove(&key);
        }
        if map.is_empty() {
            *self = Registry::Absent;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::events::Event;
    use crate::observers::Observer;

    struct Ping;
    struct Pong;
    impl Event for Ping {}
    impl Event for Pong {}

    struct Nop;
    impl Observer for Nop {
        fn on_notify(&self, _event: &dyn Event) {}
        fn on_init(&self) {}
        fn on_destroy(&self) {}
    }

    fn ping() -> EventKey {
        EventKey::of::<Ping>()
    }

    fn pong() -> EventKey {
        EventKey::of::<Pong>()
    }

    #[test]
    fn test_starts_absent() {
        let reg = Registry::default();
        assert!(!reg.is_active());
        assert_eq!(reg.event_count(), 0);
        assert!(reg.snapshot(&ping()).is_none());
    }

    #[test]
    fn test_first_attach_creates_single_list() {
        let a = Rc::new(Nop);
        let mut reg = Registry::default();

        assert_eq!(reg.attach(ping(), ObserverHandle::new(&a)), AttachOutcome::Attached);
        assert_eq!(reg.event_count(), 1);
        assert_eq!(reg.subscriber_count(&ping()), 1);
        assert_eq!(
            reg.attach(ping(), ObserverHandle::new(&a)),
            AttachOutcome::AlreadyAttached
        );

        reg.detach(ping(), &ObserverHandle::new(&a));
        assert_eq!(reg.attach(pong(), ObserverHandle::new(&a)), AttachOutcome::Attached);
        assert_eq!(reg.event_count(), 1);
        assert_eq!(reg.subscriber_count(&ping()), 0);
    }

    #[test]
    fn test_attach_activates_and_preserves_order() {
        let (a, b, c) = (Rc::new(Nop), Rc::new(Nop), Rc::new(Nop));
        let mut reg = Registry::default();

        for o in [&a, &b, &c] {
            assert_eq!(reg.attach(ping(), ObserverHandle::new(o)), AttachOutcome::Attached);
        }

        assert!(reg.is_active());
        let snap = reg.snapshot(&ping()).unwrap();
        assert_eq!(
            snap,
            vec![ObserverHandle::new(&a), ObserverHandle::new(&b), ObserverHandle::new(&c)]
        );
    }

    #[test]
    fn test_duplicate_attach_is_rejected() {
        let a = Rc::new(Nop);
        let mut reg = Registry::default();

        assert_eq!(reg.attach(ping(), ObserverHandle::new(&a)), AttachOutcome::Attached);
        for _ in 0..4 {
            assert_eq!(
                reg.attach(ping(), ObserverHandle::new(&a)),
                AttachOutcome::AlreadyAttached
            );
        }
        assert_eq!(reg.subscriber_count(&ping()), 1);
    }

    #[test]
    fn test_same_observer_on_two_keys() {
        let a = Rc::new(Nop);
        let mut reg = Registry::default();

        reg.attach(ping(), ObserverHandle::new(&a));
        reg.attach(pong(), ObserverHandle::new(&a));
        assert_eq!(reg.event_count(), 2);

        reg.detach(ping(), &ObserverHandle::new(&a));
        assert_eq!(reg.event_count(), 1);
        assert!(reg.contains(&pong(), &ObserverHandle::new(&a)));
    }

    #[test]
    fn test_detach_outcomes() {
        let (a, b) = (Rc::new(Nop), Rc::new(Nop));
        let mut reg = Registry::default();

        assert_eq!(reg.detach(ping(), &ObserverHandle::new(&a)), DetachOutcome::NoRegistry);

        reg.attach(ping(), ObserverHandle::new(&a));
        assert_eq!(reg.detach(ping(), &ObserverHandle::new(&b)), DetachOutcome::NotAttached);
        assert_eq!(reg.detach(pong(), &ObserverHandle::new(&a)), DetachOutcome::NotAttached);
        assert_eq!(reg.subscriber_count(&ping()), 1);

        assert_eq!(
            reg.detach(ping(), &ObserverHandle::new(&a)),
            DetachOutcome::Detached { removed: 1 }
        );
    }

    #[test]
    fn test_spurious_detach_leaves_no_empty_key() {
        let (a, b) = (Rc::new(Nop), Rc::new(Nop));
        let mut reg = Registry::default();

        reg.attach(ping(), ObserverHandle::new(&a));
        reg.detach(pong(), &ObserverHandle::new(&b));

        assert_eq!(reg.event_count(), 1);
        assert_eq!(reg.subscriber_count(&pong()), 0);
    }

    #[test]
    fn test_detach_keeps_relative_order() {
        let (a, b, c) = (Rc::new(Nop), Rc::new(Nop), Rc::new(Nop));
        let mut reg = Registry::default();
        for o in [&a, &b, &c] {
            reg.attach(ping(), ObserverHandle::new(o));
        }

        reg.detach(ping(), &ObserverHandle::new(&b));
        assert_eq!(
            reg.snapshot(&ping()).unwrap(),
            vec![ObserverHandle::new(&a), ObserverHandle::new(&c)]
        );
    }

    #[test]
    fn test_last_detach_releases_everything() {
        let a = Rc::new(Nop);
        let mut reg = Registry::default();

        reg.attach(ping(), ObserverHandle::new(&a));
        reg.detach(ping(), &ObserverHandle::new(&a));

        assert!(matches!(reg, Registry::Absent));
        assert!(reg.snapshot(&ping()).is_none());

        // Lazily recreated afterwards.
        reg.attach(pong(), ObserverHandle::new(&a));
        assert!(reg.is_active());
    }

    #[test]
    fn test_prune_collapses_like_detach() {
        let (a, b) = (Rc::new(Nop), Rc::new(Nop));
        let mut reg = Registry::default();
        reg.attach(ping(), ObserverHandle::new(&a));
        reg.attach(ping(), ObserverHandle::new(&b));

        let stale = [ObserverHandle::new(&a), ObserverHandle::new(&b)];
        assert_eq!(reg.prune(ping(), &stale), 2);
        assert!(!reg.is_active());
        assert_eq!(reg.prune(ping(), &stale), 0);
    }

    #[test]
    fn test_clear() {
        let a = Rc::new(Nop);
        let mut reg = Registry::default();
        reg.attach(ping(), ObserverHandle::new(&a));
        reg.attach(pong(), ObserverHandle::new(&a));

        reg.clear();
        assert!(!reg.is_active());
        assert_eq!(reg.event_count(), 0);
    }
}
