//! # Subject configuration.
//!
//! Provides [`Config`], the settings a [`Subject`](crate::Subject) is built with.
//!
//! Config is used in two ways:
//! 1. **Direct creation**: `Subject::with_config(config)`
//! 2. **Builder**: `Subject::builder(config).with_sink(sink).build()`

/// Configuration for a [`Subject`](crate::Subject).
///
/// ## Field semantics
/// - `report_diagnostics`: hand anomalies to the sink (`false` = drop them before the sink)
/// - `prune_dangling`: drop handles of observers found dead during `notify`
///
/// ## Notes
/// All fields are public for flexibility.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether redundant attaches, spurious detaches and dangling observers
    /// are reported to the diagnostic sink.
    ///
    /// Defaults to `cfg!(debug_assertions)`: diagnostics are a debugging aid,
    /// release builds stay quiet unless asked otherwise.
    pub report_diagnostics: bool,

    /// Whether `notify` removes handles whose observer has been dropped.
    ///
    /// - `false` = skip them on every delivery (the caller still owes a detach)
    /// - `true` = remove them after the delivery, collapsing empty lists and
    ///   releasing the registry exactly like `detach` does
    pub prune_dangling: bool,
}

impl Config {
    /// Configuration that reports every diagnostic regardless of build profile.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            report_diagnostics: true,
            ..Self::default()
        }
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `report_diagnostics = cfg!(debug_assertions)`
    /// - `prune_dangling = false`
    fn default() -> Self {
        Self {
            report_diagnostics: cfg!(debug_assertions),
            prune_dangling: false,
        }
    }
}
