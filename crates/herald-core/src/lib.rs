//! Ordered notification broadcasting for interactive applications.
//!
//! This crate implements a small observer mechanism with deterministic
//! delivery order:
//! - A [`NotificationObservable`] subject keeps an ordered registry of
//!   observers and broadcasts to them head to tail, most recently added
//!   first.
//! - A [`Notification`] bundles a message, a severity [`Level`], and an
//!   optional error payload, plus a one-way "consumed" flag that lets an
//!   observer suppress duplicate handling by those that follow it.
//! - A [`Notifier`] is a cloneable handle around one shared subject with
//!   per-level convenience calls, so application code can fire notifications
//!   without knowing who is listening.
//!
//! Delivery is synchronous on the broadcasting thread: there is no queueing,
//! no background delivery, and no retention of notifications by the subject.

pub mod log_observer;
pub mod notification;
pub mod notifier;
pub mod observable;

pub use log_observer::LogObserver;
pub use notification::{Level, Notification};
pub use notifier::Notifier;
pub use observable::{NotificationObservable, NotificationObserver};
