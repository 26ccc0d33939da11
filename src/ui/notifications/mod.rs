// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for non-blocking feedback.
//!
//! Used for startup warnings (unreadable settings) and photo download
//! failures. Click-path failures use the blocking notice instead.
//!
//! - [`Notification`] - severity, i18n key and arguments
//! - [`Manager`] - queue, at most three visible, auto-dismiss on tick
//! - [`Toast`] - rendering

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
