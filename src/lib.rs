//! # eventvisor
//!
//! **Eventvisor** is a small, synchronous, type-keyed observer registry.
//!
//! Producers raise typed events; observers previously attached to that exact
//! event type are called back immediately, on the producer's thread, in the
//! order they were attached. There is no queue, no background delivery and no
//! persistence: a `notify` returns once every observer has run.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  Observer A  │   │  Observer B  │   │  Observer C  │
//!     │ (Rc, caller) │   │ (Rc, caller) │   │ (Rc, caller) │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            │ attach::<Hit>    │ attach::<Hit>    │ attach::<Heal>
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Subject (explicit context object)                                │
//! │  - Registry: Absent | Active(EventKey → [ObserverHandle])         │
//! │  - DiagnosticSink (TracingSink by default)                        │
//! │  - Config (report_diagnostics, prune_dangling)                    │
//! └─────────────────────────────────┬─────────────────────────────────┘
//!                                   │ notify(&Hit { .. })
//!                                   ▼
//!                   snapshot list for EventKey::of::<Hit>()
//!                          ┌────────┴────────┐
//!                          ▼                 ▼
//!                  A.on_notify(&ev)   B.on_notify(&ev)      (in order)
//! ```
//!
//! ### Lifecycle
//! ```text
//! Registry: Absent ──first attach──► Active ──last detach──► Absent ──attach──► ...
//!
//! attach::<E>(obs)
//!   ├─ already attached ─► RedundantAttach (diagnostic), no change
//!   └─ otherwise        ─► append to list for E
//!
//! detach::<E>(obs)
//!   ├─ registry absent  ─► DetachWithoutRegistry (diagnostic)
//!   ├─ not in list      ─► SpuriousDetach (diagnostic)
//!   └─ removed          ─► drop empty list ─► release registry if empty
//!
//! notify(&e)
//!   ├─ nobody listening ─► return (silent)
//!   └─ each observer in attach order:
//!        ├─ alive   ─► on_notify(&e)   (panics propagate to the caller)
//!        └─ dropped ─► DanglingObserver (diagnostic), skipped
//! ```
//!
//! ## Features
//! | Area             | Description                                                   | Key types / traits                       |
//! |------------------|---------------------------------------------------------------|------------------------------------------|
//! | **Events**       | Marker trait, exact-type keys, downcasting from `&dyn Event`. | [`Event`], [`EventKey`]                  |
//! | **Observers**    | Listener capability and non-owning handles.                   | [`Observer`], [`ObserverHandle`]         |
//! | **Registry**     | Attach, detach and notify by event type.                      | [`Subject`], [`SubjectBuilder`]          |
//! | **Diagnostics**  | Non-fatal anomalies routed to a pluggable sink.               | [`Diagnostic`], [`DiagnosticSink`]       |
//! | **Configuration**| Reporting and dangling-handle policy.                         | [`Config`]                               |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in `LogWriter` sink _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use eventvisor::{Config, Event, Observer, Subject};
//!
//! struct LevelUp { level: u32 }
//! impl Event for LevelUp {}
//!
//! #[derive(Default)]
//! struct Achievements { best: Cell<u32> }
//!
//! impl Observer for Achievements {
//!     fn on_notify(&self, event: &dyn Event) {
//!         if let Some(ev) = event.downcast_ref::<LevelUp>() {
//!             self.best.set(self.best.get().max(ev.level));
//!         }
//!     }
//!     fn on_init(&self) {}
//!     fn on_destroy(&self) {}
//! }
//!
//! let subject = Subject::with_config(Config::default());
//! let achievements = Rc::new(Achievements::default());
//!
//! achievements.on_init();
//! subject.attach::<LevelUp>(&achievements);
//!
//! subject.notify(&LevelUp { level: 3 });
//! subject.notify(&LevelUp { level: 2 });
//! assert_eq!(achievements.best.get(), 3);
//!
//! subject.detach::<LevelUp>(&achievements);
//! achievements.on_destroy();
//! assert!(!subject.is_active());
//! ```
mod core;
mod diagnostics;
mod error;
mod events;
mod observers;

// ---- Public re-exports ----

pub use crate::core::{Config, Subject, SubjectBuilder};
pub use diagnostics::{DiagnosticSink, NullSink, TracingSink};
pub use error::Diagnostic;
pub use events::{AsAny, Event, EventKey};
pub use observers::{Observer, ObserverHandle};

// Optional: expose a simple built-in stdout sink (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use diagnostics::LogWriter;
