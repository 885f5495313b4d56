use gpui::{
    Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window, div,
};
use gpui_component::{Root, StyledExt};

use crate::dialog::DialogObserverGuard;
use crate::entities::ActivityEntity;

/// Root view of the window hosting rendered notifications.
///
/// Owns the observer registration guard: when the window closes and the view
/// tree is dropped, the dialog observer is deregistered from the notifier.
pub struct DialogHostUi {
    title: SharedString,
    activity: Entity<ActivityEntity>,
    _observer_guard: DialogObserverGuard,
}

impl DialogHostUi {
    pub fn new(
        title: SharedString,
        activity: Entity<ActivityEntity>,
        guard: DialogObserverGuard,
        cx: &mut Context<Self>,
    ) -> Self {
        cx.observe(&activity, |_, _, cx| cx.notify()).detach();
        Self {
            title,
            activity,
            _observer_guard: guard,
        }
    }
}

impl Render for DialogHostUi {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let notification_layer = Root::render_notification_layer(window, cx);
        let activity = self.activity.read(cx);
        let status = match &activity.last_message {
            Some(last) => format!("{} rendered, last: {last}", activity.delivered),
            None => "Waiting for notifications...".to_string(),
        };

        div()
            .flex()
            .flex_col()
            .gap_3()
            .size_full()
            .p_5()
            .child(div().child(self.title.clone()).text_2xl().font_bold())
            .child(div().child(status))
            .children(notification_layer)
    }
}
