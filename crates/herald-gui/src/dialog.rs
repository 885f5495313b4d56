use std::sync::Arc;

use herald_core::{Level, Notification, NotificationObservable, NotificationObserver, Notifier};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Capacity of the observer-to-window queue.
const DIALOG_QUEUE_CAPACITY: usize = 64;

/// A rendering request handed from the broadcasting thread to the host
/// window's async context.
#[derive(Debug, Clone)]
pub struct DialogRequest {
    /// The text content to display to the user.
    pub message: String,
    /// Severity of the notification, determining its visual style.
    pub level: Level,
}

/// Observer that presents notifications in the GUI.
///
/// Broadcasts run on arbitrary threads while rendering happens on the GUI
/// executor, so this observer hands each notification over a bounded channel
/// to the window that hosts the rendered dialogs. Hand-off is the
/// presentation step: a successfully enqueued notification is marked
/// consumed, signaling observers later in the delivery order to skip
/// duplicate display.
///
/// Consumed notifications and notifications below the configured minimum
/// severity are skipped (the latter without being consumed). When the
/// receiving side is gone (the window closed, or no UI is running at all)
/// the observer silently does nothing. It never fails a broadcast.
pub struct DialogObserver {
    /// Minimum severity forwarded to the window.
    min_level: Level,
    /// Sending half of the queue drained by the host window.
    tx: mpsc::Sender<DialogRequest>,
}

impl DialogObserver {
    pub fn new(min_level: Level, tx: mpsc::Sender<DialogRequest>) -> Self {
        Self { min_level, tx }
    }
}

impl NotificationObserver for DialogObserver {
    fn update(
        &self,
        _subject: &NotificationObservable,
        notification: &Notification,
    ) -> anyhow::Result<()> {
        if notification.is_consumed() || notification.level() < self.min_level {
            return Ok(());
        }

        let request = DialogRequest {
            message: notification.message().to_string(),
            level: notification.level(),
        };
        match self.tx.try_send(request) {
            Ok(()) => notification.mark_consumed(),
            // no UI is attached anymore; leave the notification unconsumed
            Err(TrySendError::Closed(_)) => {}
            Err(TrySendError::Full(request)) => {
                log::warn!(
                    "Dropping dialog request ({}): the window queue is full",
                    request.message
                );
            }
        }

        Ok(())
    }
}

/// Keeps a [`DialogObserver`] registered for as long as the guard lives and
/// deregisters it on drop.
///
/// [`crate::run`] stores the guard in the host window's root view, so closing
/// the window removes the observer from the notifier instead of leaving a
/// dangling registration behind for the rest of the process lifetime.
pub struct DialogObserverGuard {
    notifier: Notifier,
    observer: Arc<dyn NotificationObserver>,
}

impl Drop for DialogObserverGuard {
    fn drop(&mut self) {
        self.notifier.remove_observer(&self.observer);
    }
}

/// Registers a [`DialogObserver`] with `notifier` and returns the guard
/// controlling the registration together with the receiving half of the
/// request queue, to be drained by the host window.
pub fn attach_dialog_observer(
    notifier: &Notifier,
    min_level: Level,
) -> (DialogObserverGuard, mpsc::Receiver<DialogRequest>) {
    let (tx, rx) = mpsc::channel(DIALOG_QUEUE_CAPACITY);
    let observer: Arc<dyn NotificationObserver> = Arc::new(DialogObserver::new(min_level, tx));
    notifier.add_observer(observer.clone());

    let guard = DialogObserverGuard {
        notifier: notifier.clone(),
        observer,
    };
    (guard, rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observer_with_queue(min_level: Level) -> (DialogObserver, mpsc::Receiver<DialogRequest>) {
        let (tx, rx) = mpsc::channel(4);
        (DialogObserver::new(min_level, tx), rx)
    }

    #[test]
    fn forwards_and_consumes_an_unconsumed_notification() {
        let (observer, mut rx) = observer_with_queue(Level::Info);
        let subject = NotificationObservable::new();
        let notification = Notification::new("low disk", Level::Warn);

        observer.update(&subject, &notification).unwrap();

        assert!(notification.is_consumed());
        let request = rx.try_recv().expect("request should be queued");
        assert_eq!(request.message, "low disk");
        assert_eq!(request.level, Level::Warn);
    }

    #[test]
    fn skips_an_already_consumed_notification() {
        let (observer, mut rx) = observer_with_queue(Level::Info);
        let subject = NotificationObservable::new();
        let notification = Notification::new("seen elsewhere", Level::Error);
        notification.mark_consumed();

        observer.update(&subject, &notification).unwrap();

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn skips_below_threshold_without_consuming() {
        let (observer, mut rx) = observer_with_queue(Level::Error);
        let subject = NotificationObservable::new();
        let notification = Notification::new("minor detail", Level::Info);

        observer.update(&subject, &notification).unwrap();

        assert!(!notification.is_consumed());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn is_silent_when_no_window_is_listening() {
        let (observer, rx) = observer_with_queue(Level::Info);
        drop(rx);
        let subject = NotificationObservable::new();
        let notification = Notification::new("into the void", Level::Error);

        observer
            .update(&subject, &notification)
            .expect("a missing window must not fail the broadcast");

        assert!(!notification.is_consumed());
    }

    #[test]
    fn dropping_the_guard_deregisters_the_observer() {
        let notifier = Notifier::new();
        let (guard, mut rx) = attach_dialog_observer(&notifier, Level::Info);

        notifier.notify_information("while attached").unwrap();
        assert_eq!(rx.try_recv().unwrap().message, "while attached");

        drop(guard);
        notifier.notify_information("after detach").unwrap();
        assert!(rx.try_recv().is_err());
    }
}
