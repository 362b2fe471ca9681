// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;
use chrono::{DateTime, Local};
use iced::Color;
use std::time::{Duration, Instant};

/// How long a notification stays in the queue before self-evicting.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(3000);

/// Unique identifier for a notification.
///
/// Backed by a strictly increasing counter, so two notifications created at
/// the same instant still get distinct ids, and an id is never reused while
/// its entry exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of a notification; determines the accent color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Info => palette::INFO_500,
            Kind::Success => palette::SUCCESS_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Error => palette::ERROR_500,
        }
    }
}

/// A transient message shown to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    /// Display text, already localized by the caller.
    message: String,
    created_at: Instant,
    /// Wall-clock stamp for the tray listing.
    stamped_at: DateTime<Local>,
}

impl Notification {
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            created_at: Instant::now(),
            stamped_at: Local::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Kind::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Kind::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Kind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Kind::Error, message)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Wall-clock creation time formatted for the tray listing.
    #[must_use]
    pub fn timestamp(&self) -> String {
        self.stamped_at.format("%H:%M").to_string()
    }

    /// The instant at which the eviction task fires.
    #[must_use]
    pub fn expires_at(&self) -> Instant {
        self.created_at + DISPLAY_DURATION
    }

    /// Whether the display window has elapsed at `now`. The window is
    /// half-open: the notification is live on `[created_at, created_at + 3s)`
    /// and expired from the boundary onward.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::info("one");
        let n2 = Notification::info("two");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn ids_differ_even_for_identical_creation() {
        // Many in a tight loop; creation instants will collide at clock
        // resolution but ids must not.
        let ids: Vec<_> = (0..100).map(|_| NotificationId::new()).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in ids.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_kind_is_info() {
        assert_eq!(Kind::default(), Kind::Info);
    }

    #[test]
    fn kind_colors_are_distinct() {
        let colors = [
            Kind::Info.color(),
            Kind::Success.color(),
            Kind::Warning.color(),
            Kind::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn display_window_is_half_open() {
        let notification = Notification::success("Build complete");
        let t = notification.created_at();

        assert!(!notification.is_expired_at(t));
        assert!(!notification.is_expired_at(t + DISPLAY_DURATION - Duration::from_millis(1)));
        assert!(notification.is_expired_at(t + DISPLAY_DURATION));
        assert!(notification.is_expired_at(t + DISPLAY_DURATION + Duration::from_secs(1)));
    }

    #[test]
    fn constructors_set_matching_kind() {
        assert_eq!(Notification::info("").kind(), Kind::Info);
        assert_eq!(Notification::success("").kind(), Kind::Success);
        assert_eq!(Notification::warning("").kind(), Kind::Warning);
        assert_eq!(Notification::error("").kind(), Kind::Error);
    }
}
