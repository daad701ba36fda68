//! Synchronous named-event registry.
//!
//! An [`EventRegistry`] maps event names to ordered lists of subscriber
//! callbacks. Firing an event invokes every subscriber for that name in
//! registration order, synchronously, on the calling thread. Unknown event
//! names fire as silent no-ops.
//!
//! The registry is single-threaded by construction: subscribers are stored
//! as `Rc<dyn Fn>` behind a `RefCell`, so the type is neither `Send` nor
//! `Sync`. A multi-threaded host must provide its own synchronization
//! around a registry it shares.

pub mod registry;

pub use registry::EventRegistry;
