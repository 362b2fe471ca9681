// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the floating notification stack.
//!
//! Toasts are the ephemeral face of the queue: small cards with a
//! kind-colored accent border and a dismiss button, stacked in the
//! bottom-right corner over the page content.

use super::manager::{Manager, Message};
use super::notification::{Kind, Notification};
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification) -> Element<'a, Message> {
        let kind = notification.kind();
        let accent_color = kind.color();

        let icon_widget = icons::sized(Self::kind_icon(kind), sizing::ICON_MD);
        let icon_widget = icons::tinted(icon_widget, accent_color);

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss_icon: Element<'static, Message> =
            icons::themed(icons::sized(icons::cross(), sizing::ICON_SM)).into();
        let dismiss_button = button(dismiss_icon)
        .on_press(Message::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .style(styles::button::dismiss);

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with every queued notification, oldest
    /// first, anchored to the bottom-right corner.
    pub fn view_overlay<'a>(manager: &'a Manager) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> =
            manager.iter().map(Self::view).collect();

        if toasts.is_empty() {
            // An empty container that takes no space and swallows no clicks.
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }

    /// Returns the icon matching the kind.
    pub(crate) fn kind_icon(kind: Kind) -> Svg<'static> {
        match kind {
            Kind::Info => icons::info(),
            Kind::Success => icons::check_circle(),
            Kind::Warning => icons::alert_triangle(),
            Kind::Error => icons::alert_circle(),
        }
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
