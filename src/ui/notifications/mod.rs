// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! Lookup failures, e-mail outcomes, and config fallbacks surface here as
//! temporary toasts in the bottom-right corner, without blocking the UI.
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification, Toast};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-email-sent"));
//!
//! // In the view, stacked over the screen content:
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Success and info toasts dismiss themselves after 3 s, warnings after 5 s,
//! errors only by hand. At most three are visible; the rest queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
