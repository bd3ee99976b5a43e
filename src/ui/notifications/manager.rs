// SPDX-License-Identifier: MPL-2.0
//! Toast lifetimes.
//!
//! At most [`MAX_VISIBLE`] toasts are on screen; later ones wait in order and
//! get their full lifetime once a slot frees up. Expiry is checked against the
//! instant passed to [`Manager::tick`], so the application clock drives it.

use super::notification::Notification;
use std::collections::VecDeque;
use std::time::Instant;

pub const MAX_VISIBLE: usize = 3;

/// Handle of a toast currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone)]
pub enum Message {
    /// The toast was tapped.
    Dismiss(ToastId),
}

#[derive(Debug, Clone)]
pub struct Shown {
    pub id: ToastId,
    pub notification: Notification,
    expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Oldest first.
    shown: Vec<Shown>,
    waiting: VecDeque<Notification>,
    next_id: u64,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` or queues it behind the visible ones.
    ///
    /// A message already on screen gets its lifetime restarted instead of a
    /// second toast.
    pub fn push(&mut self, notification: Notification, now: Instant) {
        if let Some(shown) = self
            .shown
            .iter_mut()
            .find(|shown| shown.notification == notification)
        {
            shown.expires_at = now + notification.severity().lifetime();
            return;
        }
        if self.waiting.contains(&notification) {
            return;
        }

        log::debug!("toast {} ({:?})", notification.key(), notification.severity());
        self.waiting.push_back(notification);
        self.fill(now);
    }

    /// Returns whether a toast was removed.
    pub fn dismiss(&mut self, id: ToastId, now: Instant) -> bool {
        let before = self.shown.len();
        self.shown.retain(|shown| shown.id != id);
        let removed = self.shown.len() != before;
        if removed {
            self.fill(now);
        }
        removed
    }

    /// Drops expired toasts and promotes waiting ones into the freed slots.
    pub fn tick(&mut self, now: Instant) {
        let before = self.shown.len();
        self.shown.retain(|shown| shown.expires_at > now);
        if self.shown.len() != before {
            self.fill(now);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, Instant::now());
            }
        }
    }

    pub fn shown(&self) -> impl Iterator<Item = &Shown> {
        self.shown.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.shown.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.waiting.len()
    }

    /// Whether anything is visible or queued (drives the tick subscription).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.shown.is_empty() || !self.waiting.is_empty()
    }

    fn fill(&mut self, now: Instant) {
        while self.shown.len() < MAX_VISIBLE {
            let Some(notification) = self.waiting.pop_front() else {
                break;
            };
            let id = ToastId(self.next_id);
            self.next_id += 1;
            self.shown.push(Shown {
                id,
                expires_at: now + notification.severity().lifetime(),
                notification,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ids(manager: &Manager) -> Vec<ToastId> {
        manager.shown().map(|shown| shown.id).collect()
    }

    #[test]
    fn extra_toasts_wait_their_turn() {
        let now = Instant::now();
        let mut manager = Manager::new();
        for i in 0..=MAX_VISIBLE {
            manager.push(Notification::info(format!("toast-{i}")), now);
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn same_message_restarts_the_visible_toast() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.push(Notification::info("header-back-pressed"), now);

        let later = now + Duration::from_millis(1500);
        manager.push(Notification::info("header-back-pressed"), later);
        assert_eq!(manager.visible_count(), 1);

        manager.tick(now + Duration::from_millis(2500));
        assert_eq!(manager.visible_count(), 1);
        manager.tick(later + Duration::from_millis(2000));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn promoted_toast_gets_its_full_lifetime() {
        let now = Instant::now();
        let mut manager = Manager::new();
        for i in 0..=MAX_VISIBLE {
            manager.push(Notification::info(format!("toast-{i}")), now);
        }

        let expiry = now + Duration::from_millis(2000);
        manager.tick(expiry);
        assert_eq!(manager.visible_count(), 1);
        manager.tick(expiry + Duration::from_millis(1999));
        assert_eq!(manager.visible_count(), 1);
        manager.tick(expiry + Duration::from_millis(2000));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn dismissing_frees_a_slot() {
        let now = Instant::now();
        let mut manager = Manager::new();
        for i in 0..=MAX_VISIBLE {
            manager.push(Notification::warning(format!("toast-{i}")), now);
        }
        let first = ids(&manager)[0];

        manager.handle_message(&Message::Dismiss(first));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
        assert!(!ids(&manager).contains(&first));
        assert!(!manager.dismiss(first, now), "already gone");
    }

    #[test]
    fn ids_are_not_reused() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.push(Notification::error("a"), now);
        let first = ids(&manager)[0];
        manager.dismiss(first, now);
        manager.push(Notification::error("a"), now);
        assert_ne!(ids(&manager)[0], first);
    }
}
