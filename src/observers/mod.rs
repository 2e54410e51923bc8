//! # Observers and the handles the subject stores for them.
//!
//! - [`Observer`]: listener capability (notification callback + lifecycle hooks)
//! - [`ObserverHandle`]: non-owning, identity-comparable reference to an observer

mod handle;
mod observer;

pub use handle::ObserverHandle;
pub use observer::Observer;
