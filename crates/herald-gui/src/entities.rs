use gpui::{AppContext, Entity};

/// Running tally of the notifications rendered by the host window, driving
/// the root view's status line.
#[derive(Debug, Clone, Default)]
pub struct ActivityEntity {
    /// Number of notifications rendered since the window opened.
    pub delivered: usize,
    /// Message of the most recently rendered notification.
    pub last_message: Option<String>,
}

impl ActivityEntity {
    pub fn record<C: AppContext>(entity: &Entity<Self>, message: String, cx: &mut C) {
        entity.update(cx, |this, cx| {
            this.delivered += 1;
            this.last_message = Some(message);
            cx.notify();
        });
    }
}
