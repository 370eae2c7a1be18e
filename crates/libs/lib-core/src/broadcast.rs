//! # Broadcast
//!
//! In-process, synchronous publish/subscribe. Any number of independently
//! mounted views subscribe; every [`Broadcast::emit`] reaches all current
//! subscribers before it returns.
//!
//! ```rust
//! use lib_core::broadcast::Broadcast;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let changes = Broadcast::<u32>::new();
//! let seen = Arc::new(AtomicUsize::new(0));
//! let counter = seen.clone();
//! let subscription = changes.subscribe(move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! changes.emit(&1);
//! drop(subscription);
//! changes.emit(&2);
//! assert_eq!(seen.load(Ordering::SeqCst), 1);
//! ```

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Listeners<T> {
    next_id: u64,
    entries: Vec<(u64, Listener<T>)>,
}

/// A cloneable handle to one set of subscribers.
pub struct Broadcast<T> {
    listeners: Arc<Mutex<Listeners<T>>>,
}

impl<T> Clone for Broadcast<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: self.listeners.clone(),
        }
    }
}

impl<T: 'static> Default for Broadcast<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Broadcast<T> {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(Listeners {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register `callback`; it stays registered until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = {
            let mut listeners = self.listeners.lock();
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.entries.push((id, Arc::new(callback)));
            id
        };

        let weak: Weak<Mutex<Listeners<T>>> = Arc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = weak.upgrade() {
                listeners.lock().entries.retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    /// Deliver `value` to every current subscriber.
    ///
    /// The subscriber list is snapshotted first, so callbacks may subscribe,
    /// unsubscribe or emit again without deadlocking.
    pub fn emit(&self, value: &T) {
        let snapshot: Vec<Listener<T>> = self
            .listeners
            .lock()
            .entries
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in snapshot {
            listener(value);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.lock().entries.len()
    }
}

impl<T> fmt::Debug for Broadcast<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broadcast")
            .field("subscribers", &self.listeners.lock().entries.len())
            .finish()
    }
}

/// Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    fn new<F>(cancel: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription that was never registered anywhere.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Keep the listener registered for the lifetime of the broadcast.
    pub fn detach(mut self) {
        self.cancel.take();
    }

    pub fn unsubscribe(self) {
        drop(self)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_emit_reaches_every_subscriber() {
        let changes = Broadcast::<&'static str>::new();
        let first = Arc::new(Mutex::new(Vec::new()));
        let second = Arc::new(Mutex::new(Vec::new()));

        let a = first.clone();
        let _s1 = changes.subscribe(move |v| a.lock().push(*v));
        let b = second.clone();
        let _s2 = changes.subscribe(move |v| b.lock().push(*v));

        changes.emit(&"connected");

        assert_eq!(*first.lock(), vec!["connected"]);
        assert_eq!(*second.lock(), vec!["connected"]);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let changes = Broadcast::<u8>::new();
        let sub = changes.subscribe(|_| {});
        assert_eq!(changes.subscriber_count(), 1);
        drop(sub);
        assert_eq!(changes.subscriber_count(), 0);
    }

    #[test]
    fn test_detach_keeps_listener() {
        let changes = Broadcast::<u8>::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        changes
            .subscribe(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .detach();

        changes.emit(&0);
        changes.emit(&0);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_reentrant_subscribe_from_callback() {
        let changes = Broadcast::<u8>::new();
        let inner = changes.clone();
        let _sub = changes.subscribe(move |_| {
            inner.subscribe(|_| {}).detach();
        });

        changes.emit(&1);
        assert_eq!(changes.subscriber_count(), 2);
    }

    #[test]
    fn test_subscription_outlives_broadcast() {
        let changes = Broadcast::<u8>::new();
        let sub = changes.subscribe(|_| {});
        drop(changes);
        drop(sub);
    }
}
