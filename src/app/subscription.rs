// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two timers drive the whole app: the countdown's own one-second timer
//! (owned by the home screen state, absent on every other screen) and a
//! 100 ms tick that only runs while something actually needs it.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for notification auto-dismiss and
/// UI animations (entrances, numeral swaps, the loading spinner).
///
/// Idle apps get no timer at all: the subscription disappears as soon as
/// nothing is animating and no toast is waiting to expire.
pub fn create_tick_subscription(
    has_notifications: bool,
    is_animating: bool,
) -> Subscription<Message> {
    if has_notifications || is_animating {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
