// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component events bubble up here and are translated into coordinator
//! operations. Navigation, theme and sidebar transitions are synchronous;
//! the only tasks leaving this module are notification eviction timers.

use super::{App, Message};
use crate::ui::navbar;
use crate::ui::notifications::Kind;
use crate::ui::sidebar;
use iced::Task;

pub(super) fn handle_sidebar_message(app: &mut App, message: sidebar::Message) -> Task<Message> {
    match sidebar::update(message, &mut app.navigation) {
        sidebar::Event::None => Task::none(),
        sidebar::Event::Navigate(route) => {
            tracing::debug!(?route, "navigating");
            app.route = route;
            // A navigation action dismisses the sidebar overlay.
            app.set_sidebar_open(false);
            Task::none()
        }
        sidebar::Event::CloseRequested => {
            app.set_sidebar_open(false);
            Task::none()
        }
        sidebar::Event::Logout => logout(app),
    }
}

pub(super) fn handle_navbar_message(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, &mut app.navbar) {
        navbar::Event::None => Task::none(),
        navbar::Event::ToggleSidebar => {
            app.toggle_sidebar();
            Task::none()
        }
        navbar::Event::SearchChanged(value) => {
            app.search.input(value);
            Task::none()
        }
        navbar::Event::ToggleTheme => {
            app.toggle_theme();
            tracing::debug!(mode = ?app.theme_mode(), "theme toggled");
            Task::none()
        }
        navbar::Event::Logout => logout(app),
        navbar::Event::Dismiss(id) => {
            app.notifications.remove(id);
            Task::none()
        }
    }
}

/// Hands the opaque logout intent to the host, if one registered a handler,
/// and acknowledges it in the tray. Without a handler the intent is a safe
/// no-op beyond the acknowledgement.
fn logout(app: &mut App) -> Task<Message> {
    tracing::info!("logout requested");
    if let Some(handler) = &app.on_logout {
        handler();
    }

    let text = app.i18n.tr("notification-logout");
    app.add_notification(text, Kind::Info)
}
