//! # LogWriter — simple diagnostic printer
//!
//! A minimal sink that prints incoming [`Diagnostic`]s to stdout.
//! Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! [redundant-attach] observer="hud" event=game::Hit
//! [spurious-detach] observer="hud" event=game::Hit
//! [detach-without-registry] observer="hud" event=game::Hit
//! [dangling-observer] observer="hud" event=game::Hit
//! ```

use crate::diagnostics::DiagnosticSink;
use crate::error::Diagnostic;

/// Diagnostic writer sink.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for LogWriter {
    fn report(&self, d: &Diagnostic) {
        match d {
            Diagnostic::RedundantAttach { event, observer } => {
                println!("[redundant-attach] observer={observer:?} event={event}");
            }
            Diagnostic::SpuriousDetach { event, observer } => {
                println!("[spurious-detach] observer={observer:?} event={event}");
            }
            Diagnostic::DetachWithoutRegistry { event, observer } => {
                println!("[detach-without-registry] observer={observer:?} event={event}");
            }
            Diagnostic::DanglingObserver { event, observer } => {
                println!("[dangling-observer] observer={observer:?} event={event}");
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
