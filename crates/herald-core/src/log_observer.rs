use crate::notification::{Level, Notification};
use crate::observable::{NotificationObservable, NotificationObserver};

/// Observer that mirrors every notification into the `log` facade at the
/// severity matching its level.
///
/// This observer only records: it ignores the consumed flag and never marks
/// a notification consumed, so it coexists with interactive observers (e.g.
/// a dialog) regardless of registration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl LogObserver {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationObserver for LogObserver {
    fn update(
        &self,
        _subject: &NotificationObservable,
        notification: &Notification,
    ) -> anyhow::Result<()> {
        let line = match notification.error() {
            Some(error) => format!("{notification} ({error:#})"),
            None => notification.to_string(),
        };
        match notification.level() {
            Level::Info => log::info!("{line}"),
            Level::Warn => log::warn!("{line}"),
            Level::Error => log::error!("{line}"),
        }
        Ok(())
    }
}
