//! # Diagnostic sinks for the observer registry.
//!
//! The [`Subject`](crate::Subject) never fails a call. Redundant attaches,
//! spurious detaches and dangling observers are turned into a
//! [`Diagnostic`](crate::Diagnostic) and handed to a [`DiagnosticSink`].
//!
//! ## Architecture
//! ```text
//! Subject::attach / detach / notify
//!     │
//!     └──► anomaly? ──► Config::report_diagnostics? ──► DiagnosticSink::report(&Diagnostic)
//!                                                          │
//!                                         ┌────────────────┼────────────────┐
//!                                         ▼                ▼                ▼
//!                                    TracingSink        LogWriter        Custom
//!                                    (default)      (feature=logging)
//! ```
//!
//! ## Sink types
//! - [`TracingSink`]: structured `tracing` records (default)
//! - [`NullSink`]: drops everything
//! - `LogWriter`: stdout printer, enabled via the `logging` feature

#[cfg(feature = "logging")]
mod embedded;
mod sink;
mod trace;

#[cfg(feature = "logging")]
pub use embedded::LogWriter;
pub use sink::{DiagnosticSink, NullSink};
pub use trace::TracingSink;
