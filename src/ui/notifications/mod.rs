// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Short, non-blocking messages in the style of a mobile toast: the back
//! button acknowledgement, fetch failures and configuration warnings all go
//! through here.
//!
//! # Components
//!
//! - [`notification`] - `Notification` message and its `Severity`
//! - [`manager`] - `Manager` for queuing and expiry
//! - [`toast`] - Toast widget for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::info("header-back-pressed"), Instant::now());
//!
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! At most 3 toasts are visible at once; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, ToastId};
pub use notification::{Notification, Severity};
pub use toast::Toast;
