//! # Core diagnostic sink trait
//!
//! `DiagnosticSink` is the extension point for deciding where registry
//! anomalies go: a log, a test buffer, a metrics counter, or nowhere.
//!
//! ## Contract
//! - `report` is called synchronously from inside `attach`, `detach` or
//!   `notify`, on the caller's thread. Keep it cheap.
//! - A sink must not call back into the subject that reported to it.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use eventvisor::{Diagnostic, DiagnosticSink};
//!
//! #[derive(Default)]
//! struct Counter(Cell<usize>);
//!
//! impl DiagnosticSink for Counter {
//!     fn report(&self, _diagnostic: &Diagnostic) {
//!         self.0.set(self.0.get() + 1);
//!     }
//!     fn name(&self) -> &'static str { "counter" }
//! }
//! ```

use std::any;

use crate::error::Diagnostic;

/// Contract for diagnostic sinks.
pub trait DiagnosticSink: 'static {
    /// Handle a single diagnostic.
    fn report(&self, diagnostic: &Diagnostic);

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        any::type_name::<Self>()
    }
}

/// Sink that discards every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: &Diagnostic) {}

    fn name(&self) -> &'static str {
        "NullSink"
    }
}
