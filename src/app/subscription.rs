// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Keyboard shortcuts for the blocking notice: Enter or Escape dismisses it.
///
/// Only active while a notice is open, so the search input keeps its keys
/// otherwise.
pub fn create_event_subscription(notice_open: bool) -> Subscription<Message> {
    if !notice_open {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape | keyboard::key::Named::Enter),
            ..
        }) => Some(Message::DismissNotice),
        _ => None,
    })
}

/// Periodic tick for notification auto-dismiss, only while toasts exist.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
