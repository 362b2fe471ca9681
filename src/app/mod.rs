// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the frame components.
//!
//! The `App` struct is the shell state coordinator: the single owner of
//! every piece of cross-cutting UI state — theme mode, sidebar visibility,
//! current route, the notification queue and the search echo. Presentation
//! fragments (sidebar, navbar, toasts, pages) receive read-only snapshots
//! through their view contexts and send intents back as messages; `update`
//! is the only place this state changes.

mod message;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::I18n;
use crate::route::Route;
use crate::ui::navbar;
use crate::ui::notifications::{self, Kind, Notification};
use crate::ui::search;
use crate::ui::sidebar;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Handler invoked when the user asks to log out. The shell treats logout as
/// opaque; whatever session teardown means belongs to the embedding host.
pub type LogoutHandler = Arc<dyn Fn() + Send + Sync>;

/// Root Iced application state bridging the frame components, localization,
/// and startup preferences.
pub struct App {
    pub i18n: I18n,
    route: Route,
    sidebar_open: bool,
    theme_mode: ThemeMode,
    /// Navigation menu state (fixed item set + expanded submenu).
    navigation: sidebar::State,
    /// Local navbar state (tray dropdown visibility).
    navbar: navbar::State,
    /// Search echo + external relay.
    search: search::Relay,
    /// Toast notification queue and its eviction timers.
    notifications: notifications::Manager,
    on_logout: Option<LogoutHandler>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("sidebar_open", &self.sidebar_open)
            .field("theme_mode", &self.theme_mode)
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            route: Route::default(),
            sidebar_open: true,
            theme_mode: ThemeMode::default(),
            navigation: sidebar::State::new(),
            navbar: navbar::State::new(),
            search: search::Relay::new(),
            notifications: notifications::Manager::new(),
            on_logout: None,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes the coordinator from startup flags and the config file.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let route = match flags.start_path.as_deref() {
            None => Route::default(),
            Some(path) => Route::from_path(path).unwrap_or_else(|| {
                tracing::warn!(path, "unknown startup path, falling back to the dashboard");
                Route::default()
            }),
        };

        let mut app = App {
            i18n,
            route,
            ..Self::default()
        };
        app.theme_mode = config.theme_mode.unwrap_or_default();

        let task = match config_warning {
            Some(key) => {
                let text = app.i18n.tr(key);
                app.add_notification(text, Kind::Warning)
            }
            None => Task::none(),
        };

        (app, task)
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let page = self.i18n.tr(self.route.title_key());
        format!("{page} - {app_name}")
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Sidebar(sidebar_message) => {
                update::handle_sidebar_message(self, sidebar_message)
            }
            Message::Navbar(navbar_message) => update::handle_navbar_message(self, navbar_message),
            Message::Notifications(notification_message) => {
                self.notifications.handle_message(notification_message);
                Task::none()
            }
            Message::Notify { message, kind } => self.add_notification(message, kind),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    // ------------------------------------------------------------------
    // Coordinator operations
    // ------------------------------------------------------------------

    /// Flips the sidebar visibility. Always succeeds.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Explicitly sets the sidebar visibility; used by close-on-navigate and
    /// the overlay scrim.
    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    /// Flips the theme between light and dark. Always succeeds.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
    }

    /// Appends a notification to the queue and returns its eviction task for
    /// the runtime to drive.
    pub fn add_notification(&mut self, message: impl Into<String>, kind: Kind) -> Task<Message> {
        self.notifications
            .push(Notification::new(kind, message))
            .map(Message::Notifications)
    }

    /// Registers the opaque logout handler.
    pub fn set_logout_handler(&mut self, handler: LogoutHandler) {
        self.on_logout = Some(handler);
    }

    /// Registers the external search handler.
    pub fn set_search_handler(&mut self, handler: search::SearchHandler) {
        self.search.set_handler(handler);
    }

    // ------------------------------------------------------------------
    // Read-only snapshots
    // ------------------------------------------------------------------

    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    #[must_use]
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        self.search.term()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Message as NotificationMessage;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn sidebar_toggle_is_an_involution() {
        let mut app = App::default();
        let initial = app.sidebar_open();

        let _ = app.update(Message::Navbar(navbar::Message::ToggleSidebar));
        assert_eq!(app.sidebar_open(), !initial);

        let _ = app.update(Message::Navbar(navbar::Message::ToggleSidebar));
        assert_eq!(app.sidebar_open(), initial);
    }

    #[test]
    fn theme_toggle_is_an_involution() {
        let mut app = App::default();
        let initial = app.theme_mode();

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode(), initial.toggled());

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode(), initial);
    }

    #[test]
    fn theme_and_sidebar_are_orthogonal() {
        let mut app = App::default();
        let sidebar = app.sidebar_open();
        let route = app.route();

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.sidebar_open(), sidebar);
        assert_eq!(app.route(), route);
    }

    #[test]
    fn selecting_a_leaf_item_navigates_and_closes_the_sidebar() {
        let mut app = App::default();
        app.set_sidebar_open(true);
        assert_eq!(app.route(), Route::Dashboard);

        let _ = app.update(Message::Sidebar(sidebar::Message::ItemPressed("menu-tasks")));

        assert_eq!(app.route(), Route::Tasks);
        assert!(!app.sidebar_open());
    }

    #[test]
    fn scrim_click_closes_the_sidebar() {
        let mut app = App::default();
        app.set_sidebar_open(true);

        let _ = app.update(Message::Sidebar(sidebar::Message::ScrimPressed));
        assert!(!app.sidebar_open());
    }

    #[test]
    fn notify_pushes_and_expiry_clears() {
        let mut app = App::default();

        let _task = app.update(Message::Notify {
            message: "Build complete".to_string(),
            kind: Kind::Success,
        });

        assert_eq!(app.notifications().len(), 1);
        let entry = app.notifications().iter().next().unwrap();
        assert_eq!(entry.message(), "Build complete");
        assert_eq!(entry.kind(), Kind::Success);

        let id = entry.id();
        let _ = app.update(Message::Notifications(NotificationMessage::Expired(id)));
        assert!(app.notifications().is_empty());

        // Duplicate expiry of the same id stays a no-op.
        let _ = app.update(Message::Notifications(NotificationMessage::Expired(id)));
        assert!(app.notifications().is_empty());
    }

    #[test]
    fn search_input_updates_echo_and_forwards() {
        let calls = Arc::new(AtomicUsize::new(0));

        let mut app = App::default();
        let calls_in_handler = Arc::clone(&calls);
        app.set_search_handler(Arc::new(move |_| {
            calls_in_handler.fetch_add(1, Ordering::SeqCst);
        }));

        let _ = app.update(Message::Navbar(navbar::Message::SearchChanged(
            "deploy".to_string(),
        )));

        assert_eq!(app.search_term(), "deploy");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn logout_invokes_the_registered_handler() {
        let calls = Arc::new(AtomicUsize::new(0));

        let mut app = App::default();
        let calls_in_handler = Arc::clone(&calls);
        app.set_logout_handler(Arc::new(move || {
            calls_in_handler.fetch_add(1, Ordering::SeqCst);
        }));

        let _ = app.update(Message::Navbar(navbar::Message::LogoutPressed));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        // The shell acknowledges the intent with a notification.
        assert_eq!(app.notifications().len(), 1);
    }

    #[test]
    fn logout_without_handler_is_a_safe_noop() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::LogoutPressed));
        assert_eq!(app.notifications().len(), 1);
    }

    #[test]
    fn title_names_the_current_page() {
        let mut app = App::default();
        let _ = app.update(Message::Sidebar(sidebar::Message::ItemPressed(
            "menu-analytics",
        )));
        assert_eq!(app.route(), Route::Analytics);
        assert!(app.title().contains("Comet"));
    }

    #[test]
    fn view_renders_in_every_frame_state() {
        let mut app = App::default();
        let _ = app.view();

        app.set_sidebar_open(false);
        let _ = app.view();

        let _task = app.add_notification("hello", Kind::Info);
        let _ = app.view();
    }
}
