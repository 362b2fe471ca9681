// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications are transient, auto-expiring messages. They appear in two
//! places driven by the same queue: a toast stack floating over the page and
//! the bell dropdown in the top bar.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with kind levels
//! - [`manager`] - `Manager` owning the queue and the eviction timers
//! - [`toast`] - Toast widget rendering the floating stack
//!
//! # Lifecycle
//!
//! Every pushed notification schedules its own eviction task that fires after
//! [`notification::DISPLAY_DURATION`] and removes the entry by id. Manual
//! dismissal aborts the outstanding task through its handle, so no timer
//! outlives its notification; a stale fire that slips through is still
//! harmless because removal is idempotent.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message};
pub use notification::{Kind, Notification, NotificationId, DISPLAY_DURATION};
pub use toast::Toast;
