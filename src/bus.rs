//! In-process session event delivery.
//!
//! Replaces stringly-typed broadcast events with a small typed observer
//! interface: components interested in session lifecycle register a
//! [`SessionListener`] on the [`SessionBus`], and the session store
//! publishes through it. Delivery is synchronous, in registration order,
//! and fire-and-forget: a listener cannot block or reject an event.
//!
//! Constraint: publishing from inside a listener callback is out of
//! contract. The bus holds each listener borrowed for the duration of its
//! callback, so a re-entrant publish into the same listener would panic on
//! the `RefCell` borrow. Nothing in this crate publishes re-entrantly.

use std::cell::RefCell;
use std::rc::Rc;

/// Observer for session lifecycle events.
pub trait SessionListener {
    /// A user logged in; `username` identifies the now-active account.
    fn on_session_active(&mut self, username: &str);

    /// The session ended (logout or account deletion).
    fn on_session_ended(&mut self);
}

/// Shared handle to a registered listener.
pub type SharedListener = Rc<RefCell<dyn SessionListener>>;

/// Synchronous publish/subscribe channel for session events.
#[derive(Default)]
pub struct SessionBus {
    listeners: Vec<SharedListener>,
}

impl SessionBus {
    /// Creates a bus with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener. Listeners are notified in registration order.
    pub fn register(&mut self, listener: SharedListener) {
        self.listeners.push(listener);
    }

    /// Returns the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Notifies all listeners that a session became active.
    pub fn publish_session_active(&self, username: &str) {
        for listener in &self.listeners {
            listener.borrow_mut().on_session_active(username);
        }
    }

    /// Notifies all listeners that the session ended.
    pub fn publish_session_ended(&self) {
        for listener in &self.listeners {
            listener.borrow_mut().on_session_ended();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Listener that appends to a shared log, tagged with its own name.
    struct RecordingListener {
        tag: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl SessionListener for RecordingListener {
        fn on_session_active(&mut self, username: &str) {
            self.log
                .borrow_mut()
                .push(format!("{}: active {}", self.tag, username));
        }

        fn on_session_ended(&mut self) {
            self.log.borrow_mut().push(format!("{}: ended", self.tag));
        }
    }

    #[test]
    fn test_delivery_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = SessionBus::new();

        for tag in ["first", "second", "third"] {
            bus.register(Rc::new(RefCell::new(RecordingListener {
                tag,
                log: log.clone(),
            })));
        }
        assert_eq!(bus.listener_count(), 3);

        bus.publish_session_active("alice");
        bus.publish_session_ended();

        assert_eq!(
            *log.borrow(),
            vec![
                "first: active alice",
                "second: active alice",
                "third: active alice",
                "first: ended",
                "second: ended",
                "third: ended",
            ]
        );
    }

    #[test]
    fn test_publish_with_no_listeners_is_noop() {
        let bus = SessionBus::new();
        bus.publish_session_active("nobody");
        bus.publish_session_ended();
    }
}
