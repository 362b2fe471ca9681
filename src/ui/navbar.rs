// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar.
//!
//! The navbar renders the search field, the notification bell with its
//! dropdown tray, the theme toggle and the logout shortcut. It owns exactly
//! one piece of state: whether the tray dropdown is open. That flag is
//! strictly local UI state; the notification list itself is owned by the
//! coordinator's queue and arrives here as a read-only snapshot.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::{Notification, NotificationId, Toast};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, container, text_input, Column, Container, Row, Scrollable, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Background, Border, Element, Length, Theme,
};

/// Local navbar state.
#[derive(Debug, Default)]
pub struct State {
    /// Whether the notification tray dropdown is open. Purely presentational;
    /// never duplicated into the coordinator.
    tray_open: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tray_open(&self) -> bool {
        self.tray_open
    }
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleSidebar,
    SearchChanged(String),
    ToggleTray,
    ToggleTheme,
    LogoutPressed,
    DismissNotification(NotificationId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ToggleSidebar,
    SearchChanged(String),
    ToggleTheme,
    Logout,
    Dismiss(NotificationId),
}

/// Processes a navbar message and returns the event for the parent.
///
/// Actions that leave the navbar (sidebar toggle, theme switch, logout) close
/// the tray; dismissing a single notification keeps it open.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::ToggleSidebar => {
            state.tray_open = false;
            Event::ToggleSidebar
        }
        Message::SearchChanged(value) => Event::SearchChanged(value),
        Message::ToggleTray => {
            state.tray_open = !state.tray_open;
            Event::None
        }
        Message::ToggleTheme => {
            state.tray_open = false;
            Event::ToggleTheme
        }
        Message::LogoutPressed => {
            state.tray_open = false;
            Event::Logout
        }
        Message::DismissNotification(id) => Event::Dismiss(id),
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub theme_mode: ThemeMode,
    pub search_term: &'a str,
    pub notifications: &'a [Notification],
}

/// Renders the top bar, with the tray dropdown below it when open.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(top_bar(&ctx));

    if ctx.state.tray_open {
        content = content.push(tray_dropdown(&ctx));
    }

    content.into()
}

fn top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let sidebar_button = button(icons::themed(icons::sized(icons::menu(), sizing::ICON_MD)))
        .on_press(Message::ToggleSidebar)
        .padding(spacing::XS)
        .style(styles::button::icon);

    let search_field = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::themed(icons::sized(icons::search(), sizing::ICON_SM)))
        .push(
            text_input(
                &ctx.i18n.tr("navbar-search-placeholder"),
                ctx.search_term,
            )
            .on_input(Message::SearchChanged)
            .size(typography::BODY)
            .width(Length::Fixed(sizing::SEARCH_FIELD_WIDTH)),
        );

    let bell = bell_button(ctx.notifications.len());

    let theme_icon = if ctx.theme_mode.is_dark() {
        icons::sun()
    } else {
        icons::moon()
    };
    let theme_button = button(icons::themed(icons::sized(theme_icon, sizing::ICON_MD)))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XS)
        .style(styles::button::icon);

    let logout_button = button(icons::themed(icons::sized(
        icons::log_out(),
        sizing::ICON_MD,
    )))
    .on_press(Message::LogoutPressed)
    .padding(spacing::XS)
    .style(styles::button::icon);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(sidebar_button)
        .push(search_field)
        .push(Space::new().width(Length::Fill))
        .push(bell)
        .push(theme_button)
        .push(logout_button);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

fn bell_button<'a>(count: usize) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(icons::themed(icons::sized(icons::bell(), sizing::ICON_MD)));

    if count > 0 {
        row = row.push(
            Container::new(
                Text::new(count.to_string())
                    .size(typography::CAPTION)
                    .color(palette::WHITE),
            )
            .padding([1.0, spacing::XXS])
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(palette::ERROR_500)),
                border: Border {
                    radius: radius::FULL.into(),
                    ..Default::default()
                },
                ..Default::default()
            }),
        );
    }

    button(row)
        .on_press(Message::ToggleTray)
        .padding(spacing::XS)
        .style(styles::button::icon)
        .into()
}

fn tray_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let header = Container::new(
        Text::new(ctx.i18n.tr("navbar-notifications-title")).size(typography::HEADING),
    )
    .width(Length::Fill)
    .padding(spacing::SM);

    let body: Element<'a, Message> = if ctx.notifications.is_empty() {
        Container::new(
            Text::new(ctx.i18n.tr("navbar-notifications-empty")).size(typography::BODY),
        )
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .into()
    } else {
        let mut list = Column::new();
        for notification in ctx.notifications {
            list = list.push(tray_row(notification));
        }

        Scrollable::new(list)
            .width(Length::Fill)
            .height(Length::Shrink)
            .into()
    };

    let dropdown = Container::new(Column::new().push(header).push(body))
        .width(Length::Fixed(sizing::TRAY_WIDTH))
        .max_height(sizing::TRAY_MAX_HEIGHT)
        .style(styles::container::dropdown);

    // Anchor under the right edge of the bar.
    Container::new(dropdown)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding([0.0, spacing::MD])
        .into()
}

fn tray_row<'a>(notification: &'a Notification) -> Element<'a, Message> {
    let kind = notification.kind();
    let icon = icons::tinted(
        icons::sized(Toast::kind_icon(kind), sizing::ICON_SM),
        kind.color(),
    );

    let body = Column::new()
        .push(Text::new(notification.message()).size(typography::BODY))
        .push(
            Text::new(notification.timestamp())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    let dismiss_icon: Element<'static, Message> =
        icons::themed(icons::sized(icons::cross(), sizing::ICON_SM)).into();
    let dismiss = button(dismiss_icon)
        .on_press(Message::DismissNotification(notification.id()))
        .padding(spacing::XXS)
        .style(styles::button::dismiss);

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(icon)
            .push(Container::new(body).width(Length::Fill))
            .push(dismiss),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::SM])
    .into()
}
