// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer input reaches the pagers through the gesture areas in the view;
//! here only the window close request and the clocks are subscribed to.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Frame interval while something is animating (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Tick interval while an autoplay or retry timer is pending.
pub const TIMER_INTERVAL: Duration = Duration::from_millis(50);

/// Tick interval while only toasts are waiting to expire.
pub const NOTIFICATION_INTERVAL: Duration = Duration::from_millis(100);

/// Routes the window close request so pagers can be disposed first.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}

/// Frame ticks, only while a pager is moving.
pub fn create_frame_subscription(needs_frames: bool) -> Subscription<Message> {
    if needs_frames {
        time::every(FRAME_INTERVAL).map(Message::Frame)
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for pager timers and notification
/// auto-dismiss.
pub fn create_tick_subscription(
    has_pending_timers: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    match tick_interval(has_pending_timers, has_notifications) {
        Some(interval) => time::every(interval).map(Message::Tick),
        None => Subscription::none(),
    }
}

fn tick_interval(has_pending_timers: bool, has_notifications: bool) -> Option<Duration> {
    if has_pending_timers {
        Some(TIMER_INTERVAL)
    } else if has_notifications {
        Some(NOTIFICATION_INTERVAL)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_tick_faster_than_toasts() {
        assert_eq!(tick_interval(true, true), Some(TIMER_INTERVAL));
        assert_eq!(tick_interval(false, true), Some(NOTIFICATION_INTERVAL));
        assert_eq!(tick_interval(false, false), None);
    }

    #[test]
    fn frames_are_faster_than_timers() {
        assert!(FRAME_INTERVAL < TIMER_INTERVAL);
    }
}
