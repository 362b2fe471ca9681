// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sidebar;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Sidebar(sidebar::Message),
    Navbar(navbar::Message),
    Notifications(notifications::Message),
    /// Push a notification into the queue. This is the message form of the
    /// coordinator's `add_notification` operation, for intents raised outside
    /// the frame components.
    Notify {
        message: String,
        kind: notifications::Kind,
    },
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional startup path (e.g. `/tasks`). Unknown paths fall back to the
    /// dashboard with a logged warning.
    pub start_path: Option<String>,
}
