//! Diagnostics reported by the observer registry.
//!
//! This module defines [`Diagnostic`], the taxonomy of anomalies the
//! [`Subject`](crate::Subject) can run into while attaching, detaching or
//! notifying. None of them is ever returned to the caller: every operation
//! completes, and the anomaly is handed to the configured
//! [`DiagnosticSink`](crate::DiagnosticSink).
//!
//! Like any error type, each variant provides helpers (`as_label`, `as_message`)
//! for logs and metrics.

use thiserror::Error;

use crate::events::EventKey;

/// # Anomalies detected by the registry.
///
/// Calling `notify` for an event type nobody listens to is the common case
/// and is deliberately absent from this list.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The observer is already attached to this event type; the call was a no-op.
    #[error("observer '{observer}' already attached to '{event}'; likely missing a prior detach")]
    RedundantAttach {
        /// Event type the attach targeted.
        event: EventKey,
        /// Name of the observer.
        observer: &'static str,
    },

    /// The observer was not attached to this event type; nothing was removed.
    #[error("observer '{observer}' could not be detached from '{event}'; possible leak")]
    SpuriousDetach {
        /// Event type the detach targeted.
        event: EventKey,
        /// Name of the observer.
        observer: &'static str,
    },

    /// Detach was called while no subscription existed anywhere.
    #[error("detach of '{observer}' from '{event}' with no active registry")]
    DetachWithoutRegistry {
        /// Event type the detach targeted.
        event: EventKey,
        /// Name of the observer.
        observer: &'static str,
    },

    /// An attached observer was dropped without being detached and was skipped.
    #[error("observer '{observer}' attached to '{event}' was dropped without detach; delivery skipped")]
    DanglingObserver {
        /// Event type that was being delivered.
        event: EventKey,
        /// Name captured when the observer was attached.
        observer: &'static str,
    },
}

impl Diagnostic {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventvisor::{Diagnostic, EventKey};
    ///
    /// struct Tick;
    /// let d = Diagnostic::DanglingObserver { event: EventKey::of::<Tick>(), observer: "hud" };
    /// assert_eq!(d.as_label(), "dangling_observer");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            Diagnostic::RedundantAttach { .. } => "redundant_attach",
            Diagnostic::SpuriousDetach { .. } => "spurious_detach",
            Diagnostic::DetachWithoutRegistry { .. } => "detach_without_registry",
            Diagnostic::DanglingObserver { .. } => "dangling_observer",
        }
    }

    /// Returns a compact human-readable message.
    pub fn as_message(&self) -> String {
        match self {
            Diagnostic::RedundantAttach { event, observer } => {
                format!("redundant attach: observer={observer} event={event}")
            }
            Diagnostic::SpuriousDetach { event, observer } => {
                format!("spurious detach: observer={observer} event={event}")
            }
            Diagnostic::DetachWithoutRegistry { event, observer } => {
                format!("detach without registry: observer={observer} event={event}")
            }
            Diagnostic::DanglingObserver { event, observer } => {
                format!("dangling observer: observer={observer} event={event}")
            }
        }
    }

    /// Event type the diagnostic concerns.
    pub fn event(&self) -> EventKey {
        match self {
            Diagnostic::RedundantAttach { event, .. }
            | Diagnostic::SpuriousDetach { event, .. }
            | Diagnostic::DetachWithoutRegistry { event, .. }
            | Diagnostic::DanglingObserver { event, .. } => *event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Moved;

    #[test]
    fn test_display_mentions_missing_detach() {
        let d = Diagnostic::RedundantAttach {
            event: EventKey::of::<Moved>(),
            observer: "hud",
        };
        let text = d.to_string();
        assert!(text.contains("hud"));
        assert!(text.contains("Moved"));
        assert!(text.contains("missing a prior detach"));
    }

    #[test]
    fn test_labels_are_stable() {
        let ev = EventKey::of::<Moved>();
        assert_eq!(
            Diagnostic::SpuriousDetach { event: ev, observer: "a" }.as_label(),
            "spurious_detach"
        );
        assert_eq!(
            Diagnostic::DetachWithoutRegistry { event: ev, observer: "a" }.as_label(),
            "detach_without_registry"
        );
        assert_eq!(
            Diagnostic::RedundantAttach { event: ev, observer: "a" }.as_label(),
            "redundant_attach"
        );
    }

    #[test]
    fn test_event_accessor() {
        let ev = EventKey::of::<Moved>();
        let d = Diagnostic::SpuriousDetach { event: ev, observer: "a" };
        assert_eq!(d.event(), ev);
        assert!(d.as_message().starts_with("spurious detach"));
    }
}
