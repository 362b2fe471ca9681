// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style pour bouton primaire (action principale).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Flat icon button for the top bar. Transparent at rest, subtle surface on
/// hover, adapting to the active theme.
pub fn icon(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();

    let background = match status {
        button::Status::Hovered => Some(Background::Color(extended.background.weak.color)),
        button::Status::Pressed => Some(Background::Color(extended.background.strong.color)),
        _ => None,
    };

    button::Style {
        background,
        text_color: extended.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Sidebar navigation entry. The active entry carries the brand color;
/// inactive entries are flat on the dark sidebar surface.
pub fn sidebar_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = if active {
            (Some(Background::Color(palette::PRIMARY_500)), WHITE)
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => (
                    Some(Background::Color(palette::SIDEBAR_BG_RAISED)),
                    WHITE,
                ),
                _ => (None, palette::GRAY_200),
            }
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: if active { shadow::SM } else { shadow::NONE },
            snap: true,
        }
    }
}

/// Sidebar logout entry. Flat at rest, alarming on hover.
pub fn sidebar_danger(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (Some(Background::Color(palette::ERROR_500)), WHITE)
        }
        _ => (None, palette::GRAY_200),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Transparent row button used inside dropdown menus.
pub fn menu_item(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(extended.background.strong.color)),
            text_color: extended.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(extended.primary.strong.color)),
            text_color: extended.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color: extended.background.base.text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Dismiss button on toasts and tray rows.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
