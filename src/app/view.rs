// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The frame is composed as layers: the base layer holds the top bar and the
//! routed page, the sidebar floats over it with a click-to-close scrim when
//! open, and the toast stack sits on top of everything.

use super::{App, Message};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Toast;
use crate::ui::pages;
use crate::ui::sidebar::{self, ViewContext as SidebarViewContext};
use crate::ui::styles;
use iced::widget::{mouse_area, Column, Container, Row, Space, Stack};
use iced::{Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: &app.i18n,
        state: &app.navbar,
        theme_mode: app.theme_mode(),
        search_term: app.search_term(),
        notifications: app.notifications().entries(),
    })
    .map(Message::Navbar);

    let page = pages::view(app.route(), &app.i18n);

    let base = Column::new()
        .push(navbar_view)
        .push(page)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new().push(base);

    if app.sidebar_open() {
        layers = layers.push(sidebar_overlay(app));
    }

    layers = layers.push(Toast::view_overlay(app.notifications()).map(Message::Notifications));

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The sidebar panel plus the translucent scrim covering the rest of the
/// window. Clicking the scrim closes the sidebar.
fn sidebar_overlay(app: &App) -> Element<'_, Message> {
    let panel = sidebar::view(SidebarViewContext {
        i18n: &app.i18n,
        state: &app.navigation,
        current: app.route(),
    });

    let scrim = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::scrim),
    )
    .on_press(sidebar::Message::ScrimPressed);

    let overlay: Element<'_, sidebar::Message> = Row::new()
        .push(panel)
        .push(scrim)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    overlay.map(Message::Sidebar)
}
