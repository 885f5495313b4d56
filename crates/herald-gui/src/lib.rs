//! GUI rendering of broadcast notifications.
//!
//! This crate provides the dialog-side implementation of the observer
//! capability: a [`dialog::DialogObserver`] registered against a
//! [`herald_core::Notifier`] forwards unconsumed notifications over a bounded
//! channel, and a gpui window drains that channel and presents each one
//! through the window's notification layer with severity-matched styling.
//!
//! The split mirrors the threading model: broadcasts are synchronous on the
//! caller's thread, while rendering belongs to the GUI executor. If no window
//! is running the observer is a silent no-op, so headless use of the same
//! notifier keeps working.

pub mod dialog;
mod entities;
mod views;

use gpui::{AppContext, Application, TitlebarOptions, WindowOptions};
use gpui_component::{
    Root, WindowExt,
    notification::{Notification, NotificationType},
};
use herald_core::{Level, Notifier};

use crate::dialog::attach_dialog_observer;
use crate::entities::ActivityEntity;

/// Presentation settings for the host window and its dialog observer.
#[derive(Debug, Clone)]
pub struct DialogConfig {
    /// Title of the window hosting the rendered notifications.
    pub title: String,
    /// Minimum severity that gets rendered; lower levels pass through to
    /// other observers untouched.
    pub min_level: Level,
}

/// Registers a dialog observer with `notifier` and runs the gpui application
/// hosting the rendered notifications. Blocks until the application quits;
/// the observer is deregistered when the window's view tree is dropped.
pub fn run(notifier: Notifier, config: DialogConfig) -> anyhow::Result<()> {
    let (guard, mut rx) = attach_dialog_observer(&notifier, config.min_level);
    let window_title: gpui::SharedString = config.title.into();

    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(move |cx| {
        gpui_component::init(cx);

        let activity = cx.new(|_| ActivityEntity::default());
        let listener_activity = activity.clone();

        let window_options = WindowOptions {
            titlebar: Some(TitlebarOptions {
                title: Some(window_title.clone()),
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.spawn(async move |cx| {
            cx.open_window(window_options, |window, cx| {
                let window_handle = window.window_handle();
                cx.spawn(async move |cx| {
                    while let Some(request) = rx.recv().await {
                        log::debug!("Rendering a dialog request: {request:?}");
                        let notification_type = match request.level {
                            Level::Info => NotificationType::Info,
                            Level::Warn => NotificationType::Warning,
                            Level::Error => NotificationType::Error,
                        };

                        ActivityEntity::record(&listener_activity, request.message.clone(), cx);
                        window_handle
                            .update(cx, |_, window, cx| {
                                let notification = Notification::new()
                                    .message(request.message)
                                    .with_type(notification_type);
                                window.push_notification(notification, cx);
                            })
                            .expect("failed to push a new notification");
                    }
                })
                .detach();

                let view =
                    cx.new(|cx| views::DialogHostUi::new(window_title, activity.clone(), guard, cx));
                cx.new(|cx| Root::new(view, window, cx))
            })?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });

    Ok(())
}
