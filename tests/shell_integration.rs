// SPDX-License-Identifier: MPL-2.0
use comet_shell::app::{App, Message};
use comet_shell::config::{self, Config};
use comet_shell::i18n::I18n;
use comet_shell::route::Route;
use comet_shell::ui::navbar;
use comet_shell::ui::notifications::{Kind, Message as NotificationMessage};
use comet_shell::ui::sidebar;
use comet_shell::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: None,
    };
    config::save_to_path(&initial_config, &config_path)
        .expect("failed to write initial config file");

    let loaded = config::load_from_path(&config_path).expect("failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("menu-dashboard"), "Dashboard");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        theme_mode: None,
    };
    config::save_to_path(&french_config, &config_path)
        .expect("failed to write french config file");

    let loaded = config::load_from_path(&config_path).expect("failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("menu-dashboard"), "Tableau de bord");
}

#[test]
fn theme_mode_survives_config_round_trip() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        language: None,
        theme_mode: Some(ThemeMode::Light),
    };
    config::save_to_path(&config, &config_path).expect("failed to save");

    let loaded = config::load_from_path(&config_path).expect("failed to load");
    assert_eq!(loaded.theme_mode, Some(ThemeMode::Light));
}

#[test]
fn route_table_matches_the_menu() {
    // Every sidebar entry points at a resolvable route and back.
    for item in sidebar::default_menu() {
        assert_eq!(Route::from_path(item.route.path()), Some(item.route));
    }
}

#[test]
fn navigation_scenario_drives_the_whole_frame() {
    let mut app = App::default();
    assert_eq!(app.route(), Route::Dashboard);
    assert!(app.sidebar_open());

    // Select "Tasks" in the sidebar: the route changes and the sidebar
    // overlay dismisses itself.
    let _ = app.update(Message::Sidebar(sidebar::Message::ItemPressed("menu-tasks")));
    assert_eq!(app.route(), Route::Tasks);
    assert!(!app.sidebar_open());

    // Reopen from the navbar hamburger and navigate again.
    let _ = app.update(Message::Navbar(navbar::Message::ToggleSidebar));
    assert!(app.sidebar_open());
    let _ = app.update(Message::Sidebar(sidebar::Message::ItemPressed(
        "menu-settings",
    )));
    assert_eq!(app.route(), Route::Settings);
    assert!(!app.sidebar_open());

    // Theme toggling is orthogonal to everything that just happened.
    let before = app.theme_mode();
    let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
    assert_eq!(app.theme_mode(), before.toggled());
    assert_eq!(app.route(), Route::Settings);
}

#[test]
fn notification_lifecycle_scenario() {
    let mut app = App::default();

    let _task = app.update(Message::Notify {
        message: "Build complete".to_string(),
        kind: Kind::Success,
    });
    let _task = app.update(Message::Notify {
        message: "Deploy queued".to_string(),
        kind: Kind::Info,
    });

    // Insertion order, oldest first.
    let messages: Vec<_> = app.notifications().iter().map(|n| n.message().to_string()).collect();
    assert_eq!(messages, ["Build complete", "Deploy queued"]);
    assert_eq!(app.notifications().pending_evictions(), 2);

    // Manual dismissal from the tray cancels the matching timer.
    let first_id = app.notifications().iter().next().unwrap().id();
    let _ = app.update(Message::Navbar(navbar::Message::DismissNotification(
        first_id,
    )));
    assert_eq!(app.notifications().len(), 1);
    assert_eq!(app.notifications().pending_evictions(), 1);

    // The evicted timer firing later is a harmless no-op.
    let _ = app.update(Message::Notifications(NotificationMessage::Expired(
        first_id,
    )));
    assert_eq!(app.notifications().len(), 1);

    // The survivor expires normally.
    let second_id = app.notifications().iter().next().unwrap().id();
    let _ = app.update(Message::Notifications(NotificationMessage::Expired(
        second_id,
    )));
    assert!(app.notifications().is_empty());
    assert_eq!(app.notifications().pending_evictions(), 0);
}

#[test]
fn every_page_renders_under_its_route() {
    let mut app = App::default();
    for item in sidebar::default_menu() {
        let _ = app.update(Message::Sidebar(sidebar::Message::ItemPressed(item.label)));
        assert_eq!(app.route(), item.route);
        let _ = app.view();
    }
}
