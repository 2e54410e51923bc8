//! # Subject: attach, detach and notify observers by exact event type.
//!
//! The [`Subject`] is the explicitly constructed context that replaces a
//! process-wide observer table. Producers and observers share it (typically
//! as `Rc<Subject>`); it owns the [`Registry`] and the diagnostic sink.
//!
//! ## Delivery
//! ```text
//! notify(&event)
//!     │
//!     ├─► registry Absent or no list for EventKey::of::<E>() ─► return (silent)
//!     │
//!     └─► snapshot list, release borrow
//!            ├─► obs1.on_notify(&dyn Event)
//!            ├─► obs2.on_notify(&dyn Event)      (attachment order, same thread)
//!            └─► obsN.on_notify(&dyn Event)
//!                  dead handle ─► DanglingObserver (+ prune if configured)
//! ```
//!
//! ## Rules
//! - No call ever fails: anomalies go to the [`DiagnosticSink`].
//! - **Reentrancy**: each `notify` delivers to the list as it was when the
//!   call started. Observers may attach or detach (on this subject) from
//!   inside `on_notify`; the change applies from the next `notify`.
//! - **Panics** in an observer are not caught. Remaining observers of that
//!   delivery are skipped and the panic reaches the `notify` caller; the
//!   subject itself stays consistent and usable.
//! - **Threads**: `Subject` is neither `Send` nor `Sync`. Sharing it across
//!   threads needs an external owner per thread, not a lock around this type.
//!
//! ## Example
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use eventvisor::{Event, Observer, Subject};
//!
//! struct Damaged { amount: u32 }
//! impl Event for Damaged {}
//!
//! #[derive(Default)]
//! struct HealthBar { seen: RefCell<Vec<u32>> }
//!
//! impl Observer for HealthBar {
//!     fn on_notify(&self, event: &dyn Event) {
//!         if let Some(d) = event.downcast_ref::<Damaged>() {
//!             self.seen.borrow_mut().push(d.amount);
//!         }
//!     }
//!     fn on_init(&self) {}
//!     fn on_destroy(&self) {}
//! }
//!
//! let subject = Subject::new();
//! let bar = Rc::new(HealthBar::default());
//!
//! subject.attach::<Damaged>(&bar);
//! subject.notify(&Damaged { amount: 12 });
//! subject.detach::<Damaged>(&bar);
//! subject.notify(&Damaged { amount: 99 });
//!
//! assert_eq!(*bar.seen.borrow(), vec![12]);
//! assert!(!subject.is_active());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::Config;
use crate::core::builder::SubjectBuilder;
use crate::core::registry::{AttachOutcome, DetachOutcome, Registry};
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::Diagnostic;
use crate::events::{Event, EventKey};
use crate::observers::ObserverHandle;

/// Type-keyed observer registry with synchronous fan-out.
pub struct Subject {
    registry: RefCell<Registry>,
    sink: Rc<dyn DiagnosticSink>,
    cfg: Config,
}

impl Subject {
    /// Creates a subject with [`Config::default`] and the [`TracingSink`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a subject with the given configuration and the [`TracingSink`].
    #[must_use]
    pub fn with_config(cfg: Config) -> Self {
        Self::new_internal(cfg, Rc::new(TracingSink::new()))
    }

    /// Returns a builder to customize the diagnostic sink.
    #[must_use]
    pub fn builder(cfg: Config) -> SubjectBuilder {
        SubjectBuilder::new(cfg)
    }

    pub(crate) fn new_internal(cfg: Config, sink: Rc<dyn DiagnosticSink>) -> Self {
        Self {
            registry: RefCell::new(Registry::default()),
            sink,
            cfg,
        }
    }

    /// Attaches `observer` to events of exactly type `E`.
    ///
    /// Attaching an observer that is already attached to `E` changes nothing
    /// and reports [`Diagnostic::RedundantAttach`].
    pub fn attach<E: Event>(&self, observer: impl Into<ObserverHandle>) {
        let key = EventKey::of::<E>();
        let handle = observer.into();
        let name = handle.name();

        let outcome = self.registry.borrow_mut().attach(key, handle);
        if outcome == AttachOutcome::AlreadyAttached {
            self.report(Diagnostic::RedundantAttach {
                event: key,
                observer: name,
            });
        }
    }

    /// Detaches `observer` from events of exactly type `E`.
    ///
    /// Empty lists are removed, and the registry is released once nothing is
    /// attached anywhere. Detaching something that is not attached reports
    /// [`Diagnostic::SpuriousDetach`] or [`Diagnostic::DetachWithoutRegistry`].
    pub fn detach<E: Event>(&self, observer: impl Into<ObserverHandle>) {
        let key = EventKey::of::<E>();
        let handle = observer.into();

        let outcome = self.registry.borrow_mut().detach(key, &handle);
        match outcome {
            DetachOutcome::Detached { .. } => {}
            DetachOutcome::NotAttached => self.report(Diagnostic::SpuriousDetach {
                event: key,
                observer: handle.name(),
            }),
            DetachOutcome::NoRegistry => self.report(Diagnostic::DetachWithoutRegistry {
                event: key,
                observer: handle.name(),
            }),
        }
    }

    /// Delivers `event` to every observer attached to `E`, in attachment order.
    pub fn notify<E: Event>(&self, event: &E) {
        self.deliver(EventKey::of::<E>(), event);
    }

    /// Delivers a type-erased event, keyed by its concrete runtime type.
    ///
    /// For a `Box<dyn Event>` pass `&*boxed`: `&boxed` does not coerce,
    /// because `Box<dyn Event>` is not itself an [`Event`].
    pub fn notify_dyn(&self, event: &dyn Event) {
        self.deliver(EventKey::of_val(event), event);
    }

    /// True while at least one observer is attached to some event type.
    pub fn is_active(&self) -> bool {
        self.registry.borrow().is_active()
    }

    /// Number of observers attached to `E`.
    pub fn subscriber_count<E: Event>(&self) -> usize {
        self.registry.borrow().subscriber_count(&EventKey::of::<E>())
    }

    /// Number of event types with at least one observer.
    pub fn event_count(&self) -> usize {
        self.registry.borrow().event_count()
    }

    /// True if `observer` is attached to `E`.
    pub fn is_attached<E: Event>(&self, observer: impl Into<ObserverHandle>) -> bool {
        self.registry
            .borrow()
            .contains(&EventKey::of::<E>(), &observer.into())
    }

    /// Drops every subscription at once and releases the registry.
    pub fn clear(&self) {
        self.registry.borrow_mut().clear();
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    fn deliver(&self, key: EventKey, event: &dyn Event) {
        // Borrow is released before the first callback.
        let Some(observers) = self.registry.borrow().snapshot(&key) else {
            return;
        };

        let mut dangling = Vec::new();
        for handle in observers {
            match handle.upgrade() {
                Some(observer) => observer.on_notify(event),
                None => {
                    self.report(Diagnostic::DanglingObserver {
                        event: key,
                        observer: handle.name(),
                    });
                    dangling.push(handle);
                }
            }
        }

        if self.cfg.prune_dangling && !dangling.is_empty() {
            let removed = self.registry.borrow_mut().prune(key, &dangling);
            tracing::trace!(target: "eventvisor", event = %key, removed, "pruned dangling observers");
        }
    }

    fn report(&self, diagnostic: Diagnostic) {
        if self.cfg.report_diagnostics {
            self.sink.report(&diagnostic);
        }
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::new()
    }
}
