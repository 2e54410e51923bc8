//! Registry core: subscription bookkeeping and delivery.
//!
//! The only public types from this module are [`Subject`], its
//! [`SubjectBuilder`] and [`Config`].
//!
//! Internal modules:
//! - [`registry`]: type-keyed subscriber lists and the Absent/Active state machine;
//! - [`subject`]: attach/detach/notify, diagnostics, reentrancy-safe delivery;
//! - [`builder`]: wires configuration and sink together;
//! - [`config`]: subject settings.

mod builder;
mod config;
mod registry;
mod subject;

pub use builder::SubjectBuilder;
pub use config::Config;
pub use subject::Subject;
