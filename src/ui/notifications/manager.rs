// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the ordered queue and one cancellable eviction task per
//! entry. Pushing returns the eviction `Task` for the Iced runtime to drive;
//! removing an entry aborts its outstanding task so dismissed notifications
//! do not leak timers.

use super::notification::{Notification, NotificationId, DISPLAY_DURATION};
use iced::task::Handle;
use iced::Task;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// A notification's display window elapsed.
    Expired(NotificationId),
    /// The user dismissed a notification.
    Dismiss(NotificationId),
}

/// Manages the notification queue, oldest first.
#[derive(Default)]
pub struct Manager {
    entries: Vec<Notification>,
    timers: Vec<(NotificationId, Handle)>,
}

impl std::fmt::Debug for Manager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("entries", &self.entries)
            .field("pending_timers", &self.timers.len())
            .finish()
    }
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification at the tail of the queue and schedules its
    /// eviction.
    ///
    /// The returned task sleeps for [`DISPLAY_DURATION`] and then resolves to
    /// [`Message::Expired`]; its abort handle is kept so [`remove`] can cancel
    /// it early.
    ///
    /// [`remove`]: Self::remove
    pub fn push(&mut self, notification: Notification) -> Task<Message> {
        let id = notification.id();
        tracing::debug!(?id, kind = ?notification.kind(), "notification pushed");
        self.entries.push(notification);

        let (task, handle) = Task::future(async move {
            tokio::time::sleep(DISPLAY_DURATION).await;
            Message::Expired(id)
        })
        .abortable();
        self.timers.push((id, handle));

        task
    }

    /// Removes a notification by its id, aborting its pending eviction task.
    ///
    /// Idempotent: removing an id that is no longer (or never was) present is
    /// a no-op and returns `false`. This covers the timer-driven path and the
    /// manual-dismiss path racing each other without double-removal errors.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.timers.iter().position(|(timer_id, _)| *timer_id == id) {
            let (_, handle) = self.timers.remove(pos);
            handle.abort();
        }

        if let Some(pos) = self.entries.iter().position(|n| n.id() == id) {
            self.entries.remove(pos);
            tracing::debug!(?id, "notification removed");
            true
        } else {
            false
        }
    }

    /// Handles a notification message. Both paths converge on [`remove`].
    ///
    /// [`remove`]: Self::remove
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Expired(id) | Message::Dismiss(id) => {
                self.remove(id);
            }
        }
    }

    /// The queued notifications in insertion order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Read-only snapshot of the queue for view contexts.
    #[must_use]
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of eviction tasks that have not fired or been aborted yet.
    #[must_use]
    pub fn pending_evictions(&self) -> usize {
        self.timers.len()
    }

    /// Clears all notifications and aborts every outstanding eviction task.
    pub fn clear(&mut self) {
        for (_, handle) in self.timers.drain(..) {
            handle.abort();
        }
        self.entries.clear();
    }
}
