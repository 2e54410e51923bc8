//! # Built-in sinks
//!
//! Small, self-contained implementations useful for demos.
//!
//! - [`LogWriter`]: prints diagnostics in a human-readable form (demo/debug).

mod log;

pub use log::LogWriter;
