use std::rc::Rc;

use crate::{
    core::Config,
    diagnostics::{DiagnosticSink, TracingSink},
};
use super::subject::Subject;

/// Builder for constructing a Subject with a custom diagnostic sink.
pub struct SubjectBuilder {
    cfg: Config,
    sink: Option<Rc<dyn DiagnosticSink>>,
}

impl SubjectBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self { cfg, sink: None }
    }

    /// Sets the sink that receives diagnostics.
    ///
    /// Defaults to [`TracingSink`] when not set. Keep a clone of the `Rc` to
    /// inspect a collecting sink afterwards.
    pub fn with_sink(mut self, sink: Rc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Builds and returns the Subject instance.
    ///
    /// The registry starts absent; nothing is allocated until the first attach.
    pub fn build(self) -> Subject {
        let sink = self
            .sink
            .unwrap_or_else(|| Rc::new(TracingSink::new()) as Rc<dyn DiagnosticSink>);
        Subject::new_internal(self.cfg, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NullSink;

    #[test]
    fn test_build_defaults() {
        let subject = SubjectBuilder::new(Config::default()).build();
        assert!(!subject.is_active());
        assert_eq!(subject.config().report_diagnostics, cfg!(debug_assertions));
        assert!(!subject.config().prune_dangling);
    }

    #[test]
    fn test_build_with_sink_and_config() {
        let subject = Subject::builder(Config::verbose())
            .with_sink(Rc::new(NullSink))
            .build();
        assert!(subject.config().report_diagnostics);
        assert_eq!(subject.event_count(), 0);
    }
}
