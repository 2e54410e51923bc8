//! # Observer: user-facing event listeners
//!
//! The [`Observer`] trait is the main **extension point** for end users.
//! An observer does not know which event types it is attached to; that
//! binding lives in the [`Subject`](crate::Subject).
//!
//! # High-level architecture:
//! ```text
//! Producer ── notify(&event) ──► Subject ──► subscriber list for EventKey::of::<E>()
//!                                              │
//!                   ┌──────────────────────────┼──────────────────────────┐
//!                   ▼                          ▼                          ▼
//!        obs1.on_notify(&dyn Event)  obs2.on_notify(&dyn Event)  obsN.on_notify(&dyn Event)
//!                             (synchronously, in attachment order)
//! ```
//!
//! Lifecycle hooks ([`Observer::on_init`], [`Observer::on_destroy`]) belong to
//! the embedding application. The subject only ever calls `on_notify`.
//!
//! # Example: custom observer
//! ```rust
//! use std::cell::Cell;
//! use eventvisor::{Event, Observer};
//!
//! struct Scored(u32);
//! impl Event for Scored {}
//!
//! #[derive(Default)]
//! struct Scoreboard {
//!     total: Cell<u32>,
//! }
//!
//! impl Observer for Scoreboard {
//!     fn on_notify(&self, event: &dyn Event) {
//!         if let Some(Scored(points)) = event.downcast_ref::<Scored>() {
//!             self.total.set(self.total.get() + points);
//!         }
//!     }
//!     fn on_init(&self) {}
//!     fn on_destroy(&self) {}
//! }
//!
//! let board = Scoreboard::default();
//! board.on_notify(&Scored(5));
//! assert_eq!(board.total.get(), 5);
//! ```

use std::any;

use crate::events::Event;

/// # Listener capability.
///
/// Callbacks take `&self`; keep mutable state in `Cell`/`RefCell`.
/// Panics raised from [`Observer::on_notify`] are not caught by the subject.
pub trait Observer: 'static {
    /// Called once per delivered event, with the event upcast to `&dyn Event`.
    fn on_notify(&self, event: &dyn Event);

    /// Initialization hook, invoked by the embedding application.
    fn on_init(&self);

    /// Teardown hook, invoked by the embedding application.
    ///
    /// Detach from every subject before the observer is dropped.
    fn on_destroy(&self);

    /// Human-readable name (for diagnostics).
    fn name(&self) -> &'static str {
        any::type_name::<Self>()
    }
}
