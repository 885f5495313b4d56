use std::collections::VecDeque;
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::notification::Notification;

/// Implementors are informed of every broadcast on the subject they are
/// registered with.
///
/// `update` runs synchronously on the broadcasting thread. Returning an error
/// aborts the broadcast: the error propagates to the caller and observers
/// later in the delivery order are not invoked.
pub trait NotificationObserver: Send + Sync {
    /// Called once per broadcast with the broadcasting subject and the
    /// notification being delivered.
    fn update(
        &self,
        subject: &NotificationObservable,
        notification: &Notification,
    ) -> anyhow::Result<()>;
}

/// The subject of the observer pattern: an ordered registry of observers and
/// a broadcast operation that walks it deterministically.
///
/// Observers are kept in reverse registration order (new entries go to the
/// head), so the most recently added observer is notified first. The registry
/// holds `Arc` handles only; removing an entry does not destroy the observer.
///
/// Registry mutations are individually serialized behind a mutex. A broadcast
/// snapshots the registry before delivering, so callbacks run without the
/// lock held and may freely register or deregister observers, including
/// themselves. An observer added or removed during an in-flight broadcast
/// takes effect from the next broadcast on.
pub struct NotificationObservable {
    /// Ordered registry of observers, head first at delivery time.
    observers: Mutex<VecDeque<Arc<dyn NotificationObserver>>>,
    /// Whether a broadcast is logically in flight.
    changed: AtomicBool,
}

impl NotificationObservable {
    /// Constructs a subject with an empty registry.
    pub fn new() -> Self {
        Self {
            observers: Mutex::new(VecDeque::new()),
            changed: AtomicBool::new(false),
        }
    }

    /// Inserts the observer at the head of the registry, making it the first
    /// to be notified on subsequent broadcasts.
    pub fn add_observer(&self, observer: Arc<dyn NotificationObserver>) {
        let mut observers = self.lock_registry();
        observers.push_front(observer);
    }

    /// Removes the first registry entry that is the same allocation as
    /// `observer`. Identity comparison only: two distinct observers with
    /// identical behavior are unaffected by each other's removal. Absent
    /// observers are a no-op.
    pub fn remove_observer(&self, observer: &Arc<dyn NotificationObserver>) {
        let mut observers = self.lock_registry();
        if let Some(position) = observers
            .iter()
            .position(|candidate| ptr::addr_eq(Arc::as_ptr(candidate), Arc::as_ptr(observer)))
        {
            observers.remove(position);
        }
    }

    /// Removes the head of the registry, if any.
    pub fn remove_first_observer(&self) {
        let mut observers = self.lock_registry();
        observers.pop_front();
    }

    /// Delivers `notification` to every registered observer, head to tail.
    ///
    /// The subject is marked changed for the duration of the delivery loop.
    /// The registry is snapshotted up front: observers registered once the
    /// broadcast is underway do not see it. The first observer error is
    /// returned to the caller and skips the remaining observers; in that case
    /// the changed marker is left set, since the delivery never completed.
    pub fn broadcast(&self, notification: &Notification) -> anyhow::Result<()> {
        self.changed.store(true, Ordering::Release);

        let snapshot: Vec<Arc<dyn NotificationObserver>> =
            self.lock_registry().iter().cloned().collect();
        for observer in &snapshot {
            observer.update(self, notification)?;
        }

        self.changed.store(false, Ordering::Release);
        Ok(())
    }

    /// Whether a broadcast is logically in flight. Diagnostic only; also true
    /// after a broadcast aborted on an observer error.
    pub fn has_changed(&self) -> bool {
        self.changed.load(Ordering::Acquire)
    }

    fn lock_registry(&self) -> std::sync::MutexGuard<'_, VecDeque<Arc<dyn NotificationObserver>>> {
        self.observers
            .lock()
            .expect("observer registry lock poisoned")
    }
}

impl Default for NotificationObservable {
    fn default() -> Self {
        Self::new()
    }
}
