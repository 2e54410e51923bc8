//! Events: the marker trait and the exact-type key.
//!
//! ## Contents
//! - [`Event`] marker trait plus `dyn Event` downcasting helpers
//! - [`EventKey`] exact-type identity used as the registry key
//!
//! ## Quick reference
//! - **Producers** build a concrete event and call `Subject::notify(&event)`.
//! - **Observers** receive `&dyn Event` and downcast when they care about the payload.

mod event;
mod key;

pub use event::{AsAny, Event};
pub use key::EventKey;
