//! # TracingSink — default diagnostic sink
//!
//! Forwards every [`Diagnostic`] to the [`tracing`] facade at `WARN` level with
//! structured fields. The crate never installs a subscriber: without one the
//! records are simply dropped.
//!
//! ## Example output (fmt subscriber)
//! ```text
//! WARN eventvisor: observer 'hud' already attached to 'game::Hit'; likely missing a prior detach label="redundant_attach" event=game::Hit
//! WARN eventvisor: observer 'hud' could not be detached from 'game::Hit'; possible leak label="spurious_detach" event=game::Hit
//! ```

use crate::diagnostics::DiagnosticSink;
use crate::error::Diagnostic;

/// Diagnostic sink backed by `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    /// Construct a new [`TracingSink`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        tracing::warn!(
            target: "eventvisor",
            label = diagnostic.as_label(),
            event = %diagnostic.event(),
            "{diagnostic}"
        );
    }

    fn name(&self) -> &'static str {
        "TracingSink"
    }
}
