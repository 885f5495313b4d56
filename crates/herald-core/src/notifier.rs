use std::sync::Arc;

use crate::notification::{Level, Notification};
use crate::observable::{NotificationObservable, NotificationObserver};

/// A cloneable handle around one shared [`NotificationObservable`], used to
/// spread notification messages across all of its observers.
///
/// Construct a notifier once near the application entry point and pass clones
/// to whatever needs to fire notifications; every clone broadcasts through
/// the same subject. Each notify call is a single synchronous broadcast with
/// no queuing or deferred delivery, and returns the broadcast result, so a
/// failing observer surfaces at the call site.
#[derive(Clone, Default)]
pub struct Notifier {
    subject: Arc<NotificationObservable>,
}

impl Notifier {
    /// Creates a notifier with a fresh, empty subject.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared subject behind this handle.
    pub fn subject(&self) -> &NotificationObservable {
        &self.subject
    }

    /// Registers an observer with the shared subject. See
    /// [`NotificationObservable::add_observer`].
    pub fn add_observer(&self, observer: Arc<dyn NotificationObserver>) {
        self.subject.add_observer(observer);
    }

    /// Deregisters an observer from the shared subject. See
    /// [`NotificationObservable::remove_observer`].
    pub fn remove_observer(&self, observer: &Arc<dyn NotificationObserver>) {
        self.subject.remove_observer(observer);
    }

    /// Fires a [`Level::Info`] notification with no error detail.
    pub fn notify_information(&self, message: impl Into<String>) -> anyhow::Result<()> {
        self.fire(message.into(), None, Level::Info)
    }

    /// Fires a [`Level::Warn`] notification with no error detail.
    pub fn notify_warning(&self, message: impl Into<String>) -> anyhow::Result<()> {
        self.fire(message.into(), None, Level::Warn)
    }

    /// Fires a [`Level::Error`] notification with no error detail.
    pub fn notify_error(&self, message: impl Into<String>) -> anyhow::Result<()> {
        self.fire(message.into(), None, Level::Error)
    }

    /// Fires a [`Level::Error`] notification carrying `error` as its detail.
    pub fn notify_exception(
        &self,
        message: impl Into<String>,
        error: anyhow::Error,
    ) -> anyhow::Result<()> {
        self.fire(message.into(), Some(error), Level::Error)
    }

    /// Fires a [`Level::Error`] notification whose message is the error's
    /// own description, with the error attached as detail.
    pub fn notify_exception_from(&self, error: anyhow::Error) -> anyhow::Result<()> {
        self.fire(error.to_string(), Some(error), Level::Error)
    }

    fn fire(
        &self,
        message: String,
        error: Option<anyhow::Error>,
        level: Level,
    ) -> anyhow::Result<()> {
        let notification = match error {
            Some(error) => Notification::with_error(message, error, level),
            None => Notification::new(message, level),
        };
        self.subject.broadcast(&notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records `(level, message, error description)` for every delivery.
    #[derive(Default)]
    struct Capture {
        seen: Mutex<Vec<(Level, String, Option<String>)>>,
    }

    impl NotificationObserver for Capture {
        fn update(
            &self,
            _subject: &NotificationObservable,
            notification: &Notification,
        ) -> anyhow::Result<()> {
            self.seen.lock().unwrap().push((
                notification.level(),
                notification.message().to_string(),
                notification.error().map(|error| error.to_string()),
            ));
            Ok(())
        }
    }

    fn notifier_with_capture() -> (Notifier, Arc<Capture>) {
        let notifier = Notifier::new();
        let capture = Arc::new(Capture::default());
        notifier.add_observer(capture.clone());
        (notifier, capture)
    }

    #[test]
    fn notify_information_broadcasts_info_without_error() {
        let (notifier, capture) = notifier_with_capture();
        notifier.notify_information("ready").unwrap();
        assert_eq!(
            *capture.seen.lock().unwrap(),
            vec![(Level::Info, "ready".to_string(), None)]
        );
    }

    #[test]
    fn notify_warning_and_error_carry_their_levels() {
        let (notifier, capture) = notifier_with_capture();
        notifier.notify_warning("low disk").unwrap();
        notifier.notify_error("save failed").unwrap();
        assert_eq!(
            *capture.seen.lock().unwrap(),
            vec![
                (Level::Warn, "low disk".to_string(), None),
                (Level::Error, "save failed".to_string(), None),
            ]
        );
    }

    #[test]
    fn notify_exception_attaches_the_error_detail() {
        let (notifier, capture) = notifier_with_capture();
        notifier
            .notify_exception("boom", anyhow::anyhow!("device unplugged"))
            .unwrap();
        assert_eq!(
            *capture.seen.lock().unwrap(),
            vec![(
                Level::Error,
                "boom".to_string(),
                Some("device unplugged".to_string())
            )]
        );
    }

    #[test]
    fn notify_exception_from_uses_the_error_description_as_message() {
        let (notifier, capture) = notifier_with_capture();
        notifier
            .notify_exception_from(anyhow::anyhow!("boom"))
            .unwrap();
        assert_eq!(
            *capture.seen.lock().unwrap(),
            vec![(Level::Error, "boom".to_string(), Some("boom".to_string()))]
        );
    }

    #[test]
    fn clones_broadcast_through_the_same_subject() {
        let (notifier, capture) = notifier_with_capture();
        notifier.clone().notify_information("from a clone").unwrap();
        assert_eq!(capture.seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn remove_observer_through_the_handle() {
        let (notifier, capture) = notifier_with_capture();
        let observer: Arc<dyn NotificationObserver> = capture.clone();
        notifier.remove_observer(&observer);
        notifier.notify_information("nobody listens").unwrap();
        assert!(capture.seen.lock().unwrap().is_empty());
    }
}
