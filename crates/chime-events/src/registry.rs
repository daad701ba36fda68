//! Event registry: name-keyed subscriber lists with synchronous dispatch.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

/// A subscriber callback as stored in the registry.
type Subscriber<D> = Rc<dyn Fn(&D)>;

/// In-memory registry of named events, generic over the payload type `D`.
///
/// Each event name owns an ordered list of subscribers. [`on`] appends to
/// the list, [`fire`] invokes it front to back, and [`off`] clears it
/// wholesale. There is no per-subscriber unsubscribe.
///
/// All operations take `&self`; the subscriber map lives in a [`RefCell`],
/// so a subscriber holding an `Rc` of the registry may call back into it
/// while a dispatch is in flight. Such re-entrant `on`/`off` calls apply to
/// subsequent fires, never to the dispatch that triggered them.
///
/// [`on`]: EventRegistry::on
/// [`fire`]: EventRegistry::fire
/// [`off`]: EventRegistry::off
pub struct EventRegistry<D> {
    /// Event name -> subscribers in registration order.
    channels: RefCell<HashMap<String, Vec<Subscriber<D>>>>,
}

impl<D> EventRegistry<D> {
    /// Create an empty registry.
    ///
    /// Registries are plain values with no global instance; callers create
    /// and drop them like any other object.
    pub fn new() -> Self {
        Self {
            channels: RefCell::new(HashMap::new()),
        }
    }

    /// Append `callback` to the subscriber list for `name`, creating the
    /// list if the name has never been registered (or was cleared).
    ///
    /// Registration performs no dispatch; the callback only runs on a later
    /// [`fire`](EventRegistry::fire) of the same name.
    pub fn on<F>(&self, name: impl Into<String>, callback: F)
    where
        F: Fn(&D) + 'static,
    {
        let name = name.into();
        let mut channels = self.channels.borrow_mut();
        let subscribers = channels.entry(name.clone()).or_default();
        subscribers.push(Rc::new(callback));
        debug!(event = %name, subscribers = subscribers.len(), "subscriber registered");
    }

    /// Invoke every subscriber currently registered for `name`, in
    /// registration order, passing `data` to each.
    ///
    /// Firing a name with no subscriber list (never registered, or cleared
    /// via [`off`](EventRegistry::off)) is a silent no-op. Each subscriber
    /// completes before the next begins; a panic inside a subscriber
    /// propagates to the caller and subscribers later in the list do not
    /// run for that invocation.
    pub fn fire(&self, name: &str, data: &D) {
        // Snapshot the list and release the borrow before invoking, so
        // subscribers may re-enter the registry. Re-entrant mutations take
        // effect from the next fire onward.
        let snapshot: Vec<Subscriber<D>> = match self.channels.borrow().get(name) {
            Some(subscribers) => subscribers.clone(),
            None => return,
        };

        debug!(event = %name, subscribers = snapshot.len(), "firing");
        for callback in &snapshot {
            callback(data);
        }
    }

    /// Clear the subscriber list for `name`.
    ///
    /// Subsequent fires of `name` are no-ops until `on` registers the name
    /// again, starting from an empty list. Clearing an unknown name does
    /// nothing.
    pub fn off(&self, name: &str) {
        if self.channels.borrow_mut().remove(name).is_some() {
            debug!(event = %name, "subscribers cleared");
        }
    }

    /// Number of subscribers currently registered for `name`.
    ///
    /// Returns 0 for names that were never registered or have been cleared.
    pub fn subscriber_count(&self, name: &str) -> usize {
        self.channels.borrow().get(name).map_or(0, Vec::len)
    }
}

impl<D> Default for EventRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}
