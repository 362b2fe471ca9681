// SPDX-License-Identifier: MPL-2.0
//! Sidebar navigation menu.
//!
//! The menu item set is static and fixed when the shell starts. The component
//! owns exactly one piece of state: which submenu, if any, is expanded. The
//! active item is derived from the current route by exact match; the sidebar
//! never decides the route itself, it only emits navigation intents.
//!
//! Interaction rules:
//! - Pressing an item with a submenu toggles that submenu. At most one
//!   submenu is expanded at a time; expanding one collapses the other.
//! - Pressing a leaf item (no submenu) emits [`Event::Navigate`]. The
//!   expanded submenu is left untouched; the parent closes the sidebar.
//! - Pressing the scrim next to the open sidebar emits
//!   [`Event::CloseRequested`].

use crate::i18n::I18n;
use crate::route::Route;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{button, container, Column, Container, Row, Scrollable, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Background, Border, Element, Length, Theme,
};

/// A secondary navigation entry under a parent menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmenuItem {
    /// i18n key, unique within the parent.
    pub label: &'static str,
    pub route: Route,
}

/// A primary navigation entry.
///
/// `label` doubles as the unique key identifying the item (and its expanded
/// state) and as the i18n key for its display text.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub label: &'static str,
    pub icon: fn() -> Svg<'static>,
    pub route: Route,
    pub submenu: &'static [SubmenuItem],
}

impl MenuItem {
    #[must_use]
    pub fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }
}

/// The default menu: one entry per route, no submenus.
#[must_use]
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            label: "menu-dashboard",
            icon: icons::home,
            route: Route::Dashboard,
            submenu: &[],
        },
        MenuItem {
            label: "menu-tasks",
            icon: icons::check_square,
            route: Route::Tasks,
            submenu: &[],
        },
        MenuItem {
            label: "menu-workflows",
            icon: icons::git_branch,
            route: Route::Workflows,
            submenu: &[],
        },
        MenuItem {
            label: "menu-analytics",
            icon: icons::bar_chart,
            route: Route::Analytics,
            submenu: &[],
        },
        MenuItem {
            label: "menu-settings",
            icon: icons::cog,
            route: Route::Settings,
            submenu: &[],
        },
    ]
}

/// Sidebar state: the fixed item set plus the expanded-submenu marker.
#[derive(Debug)]
pub struct State {
    items: Vec<MenuItem>,
    expanded: Option<&'static str>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::with_items(default_menu())
    }

    /// Builds a sidebar over a custom item set.
    #[must_use]
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            expanded: None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// The label of the expanded submenu, if any. Never more than one.
    #[must_use]
    pub fn expanded(&self) -> Option<&'static str> {
        self.expanded
    }

    /// Expands `label` if it was collapsed, collapses it if it was expanded.
    /// Expanding implicitly collapses any other submenu. Labels without a
    /// submenu (or unknown labels) are ignored.
    pub fn toggle_submenu(&mut self, label: &'static str) {
        let toggleable = self
            .items
            .iter()
            .any(|item| item.label == label && item.has_submenu());
        if !toggleable {
            return;
        }

        self.expanded = if self.expanded == Some(label) {
            None
        } else {
            Some(label)
        };
    }

    /// Whether `item` is the one the current route points at. Exact match
    /// only; no prefix matching.
    #[must_use]
    pub fn is_active(item: &MenuItem, current: Route) -> bool {
        item.route == current
    }

    fn find(&self, label: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.label == label)
    }
}

/// Messages emitted by the sidebar.
#[derive(Debug, Clone)]
pub enum Message {
    ItemPressed(&'static str),
    SubItemPressed(Route),
    ScrimPressed,
    LogoutPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Navigate to a route; the parent also dismisses the sidebar overlay.
    Navigate(Route),
    /// The scrim was clicked; the parent should close the sidebar.
    CloseRequested,
    /// The opaque logout intent.
    Logout,
}

/// Processes a sidebar message and returns the event for the parent.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::ItemPressed(label) => match state.find(label) {
            Some(item) if item.has_submenu() => {
                state.toggle_submenu(label);
                Event::None
            }
            Some(item) => Event::Navigate(item.route),
            None => Event::None,
        },
        Message::SubItemPressed(route) => Event::Navigate(route),
        Message::ScrimPressed => Event::CloseRequested,
        Message::LogoutPressed => Event::Logout,
    }
}

/// Contextual data needed to render the sidebar panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub current: Route,
}

/// Renders the sidebar panel (header, navigation, user section).
///
/// The scrim covering the rest of the window is layered by the caller so the
/// panel keeps a fixed width.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut nav = Column::new().spacing(spacing::XXS).padding(spacing::XS);

    for item in ctx.state.items() {
        nav = nav.push(menu_entry(&ctx, item));

        if ctx.state.expanded() == Some(item.label) {
            nav = nav.push(submenu(ctx.i18n, item));
        }
    }

    let content = Column::new()
        .push(header(ctx.i18n))
        .push(
            Scrollable::new(nav)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(user_section(ctx.i18n))
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill);

    Container::new(content)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::sidebar)
        .into()
}

fn header<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let name = Text::new(i18n.tr("sidebar-product-name"))
        .size(typography::TITLE)
        .color(palette::PRIMARY_400);
    let tagline = Text::new(i18n.tr("sidebar-product-tagline"))
        .size(typography::CAPTION)
        .color(palette::GRAY_300);

    Container::new(Column::new().push(name).push(tagline).spacing(spacing::XXS))
        .width(Length::Fill)
        .padding(spacing::LG)
        .into()
}

fn menu_entry<'a>(ctx: &ViewContext<'a>, item: &'a MenuItem) -> Element<'a, Message> {
    let active = State::is_active(item, ctx.current);

    let icon = icons::tinted(
        icons::sized((item.icon)(), sizing::ICON_MD),
        if active { palette::WHITE } else { palette::GRAY_200 },
    );

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icon)
        .push(Text::new(ctx.i18n.tr(item.label)).size(typography::BODY));

    if item.has_submenu() {
        row = row.push(Space::new().width(Length::Fill)).push(icons::tinted(
            icons::sized(icons::chevron_down(), sizing::ICON_SM),
            palette::GRAY_300,
        ));
    }

    button(row.width(Length::Fill))
        .on_press(Message::ItemPressed(item.label))
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .style(styles::button::sidebar_item(active))
        .into()
}

fn submenu<'a>(i18n: &'a I18n, item: &'a MenuItem) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XXS);

    for sub in item.submenu {
        column = column.push(
            button(Text::new(i18n.tr(sub.label)).size(typography::BODY))
                .on_press(Message::SubItemPressed(sub.route))
                .padding([spacing::XXS, spacing::MD])
                .width(Length::Fill)
                .style(styles::button::sidebar_item(false)),
        );
    }

    Container::new(column)
        .padding(iced::Padding::ZERO.left(spacing::XL))
        .width(Length::Fill)
        .into()
}

fn user_section<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let avatar = Container::new(icons::tinted(
        icons::sized(icons::user(), sizing::ICON_MD),
        palette::WHITE,
    ))
    .width(Length::Fixed(sizing::AVATAR))
    .height(Length::Fixed(sizing::AVATAR))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::PRIMARY_600)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let identity = Column::new()
        .push(Text::new(i18n.tr("sidebar-user-name")).size(typography::BODY))
        .push(
            Text::new(i18n.tr("sidebar-user-email"))
                .size(typography::CAPTION)
                .color(palette::GRAY_300),
        );

    let profile = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(avatar)
        .push(identity);

    let logout = button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(icons::tinted(
                icons::sized(icons::log_out(), sizing::ICON_SM),
                palette::GRAY_200,
            ))
            .push(Text::new(i18n.tr("sidebar-logout")).size(typography::BODY)),
    )
    .on_press(Message::LogoutPressed)
    .padding([spacing::XS, spacing::MD])
    .width(Length::Fill)
    .style(styles::button::sidebar_danger);

    Container::new(
        Column::new()
            .push(profile)
            .push(logout)
            .spacing(spacing::SM),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT_SUBMENU: &[SubmenuItem] = &[
        SubmenuItem {
            label: "submenu-usage",
            route: Route::Analytics,
        },
        SubmenuItem {
            label: "submenu-outcomes",
            route: Route::Analytics,
        },
    ];

    fn menu_with_submenus() -> Vec<MenuItem> {
        vec![
            MenuItem {
                label: "menu-dashboard",
                icon: icons::home,
                route: Route::Dashboard,
                submenu: &[],
            },
            MenuItem {
                label: "menu-analytics",
                icon: icons::bar_chart,
                route: Route::Analytics,
                submenu: REPORT_SUBMENU,
            },
            MenuItem {
                label: "menu-settings",
                icon: icons::cog,
                route: Route::Settings,
                submenu: REPORT_SUBMENU,
            },
        ]
    }

    #[test]
    fn default_menu_covers_every_route() {
        let items = default_menu();
        assert_eq!(items.len(), Route::ALL.len());
        for route in Route::ALL {
            assert!(items.iter().any(|item| item.route == route));
        }
    }

    #[test]
    fn labels_are_unique() {
        let items = default_menu();
        for (i, a) in items.iter().enumerate() {
            for b in items.iter().skip(i + 1) {
                assert_ne!(a.label, b.label);
            }
        }
    }

    #[test]
    fn is_active_requires_exact_match() {
        let items = default_menu();
        let dashboard = &items[0];
        let tasks = &items[1];

        assert!(!State::is_active(dashboard, Route::Tasks));
        assert!(State::is_active(tasks, Route::Tasks));
    }

    #[test]
    fn at_most_one_submenu_is_expanded() {
        let mut state = State::with_items(menu_with_submenus());

        state.toggle_submenu("menu-analytics");
        assert_eq!(state.expanded(), Some("menu-analytics"));

        // Expanding another collapses the first.
        state.toggle_submenu("menu-settings");
        assert_eq!(state.expanded(), Some("menu-settings"));
    }

    #[test]
    fn toggling_the_expanded_submenu_collapses_it() {
        let mut state = State::with_items(menu_with_submenus());

        state.toggle_submenu("menu-analytics");
        state.toggle_submenu("menu-analytics");
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn leaf_items_cannot_be_expanded() {
        let mut state = State::with_items(menu_with_submenus());

        state.toggle_submenu("menu-dashboard");
        assert_eq!(state.expanded(), None);

        state.toggle_submenu("menu-unknown");
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn pressing_a_leaf_item_navigates() {
        let mut state = State::with_items(menu_with_submenus());

        let event = update(Message::ItemPressed("menu-dashboard"), &mut state);
        assert_eq!(event, Event::Navigate(Route::Dashboard));
        // Navigation leaves the expanded marker untouched.
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn pressing_a_parent_item_toggles_instead_of_navigating() {
        let mut state = State::with_items(menu_with_submenus());

        let event = update(Message::ItemPressed("menu-analytics"), &mut state);
        assert_eq!(event, Event::None);
        assert_eq!(state.expanded(), Some("menu-analytics"));
    }

    #[test]
    fn leaf_press_keeps_expanded_submenu() {
        let mut state = State::with_items(menu_with_submenus());
        state.toggle_submenu("menu-analytics");

        let event = update(Message::ItemPressed("menu-dashboard"), &mut state);
        assert_eq!(event, Event::Navigate(Route::Dashboard));
        assert_eq!(state.expanded(), Some("menu-analytics"));
    }

    #[test]
    fn submenu_entries_navigate() {
        let mut state = State::with_items(menu_with_submenus());
        let event = update(Message::SubItemPressed(Route::Analytics), &mut state);
        assert_eq!(event, Event::Navigate(Route::Analytics));
    }

    #[test]
    fn scrim_press_requests_close() {
        let mut state = State::new();
        let event = update(Message::ScrimPressed, &mut state);
        assert_eq!(event, Event::CloseRequested);
    }

    #[test]
    fn logout_press_emits_logout() {
        let mut state = State::new();
        let event = update(Message::LogoutPressed, &mut state);
        assert_eq!(event, Event::Logout);
    }

    #[test]
    fn view_renders_collapsed_and_expanded() {
        let i18n = I18n::default();
        let mut state = State::with_items(menu_with_submenus());

        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
            current: Route::Dashboard,
        });

        state.toggle_submenu("menu-analytics");
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
            current: Route::Analytics,
        });
    }
}
