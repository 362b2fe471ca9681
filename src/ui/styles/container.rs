// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for page content blocks.
///
/// The color is derived from the active Iced `Theme` background, with a
/// slight opacity, so panels stay readable in both light and dark modes
/// without hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            width: border::WIDTH_SM,
            color: palette.background.weak.color,
        },
        ..Default::default()
    }
}

/// The sidebar surface. Dark in both themes, matching the brand frame.
pub fn sidebar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SIDEBAR_BG)),
        text_color: Some(palette::GRAY_100),
        ..Default::default()
    }
}

/// Divider-bordered section inside the sidebar (header, user block).
pub fn sidebar_section(_theme: &Theme) -> container::Style {
    container::Style {
        background: None,
        border: Border {
            color: palette::SIDEBAR_BG_RAISED,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Translucent scrim next to the open sidebar; clicking it closes the
/// sidebar.
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Elevated dropdown surface (notification tray).
pub fn dropdown(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            radius: radius::MD.into(),
            width: border::WIDTH_SM,
            color: palette.background.strong.color,
        },
        shadow: shadow::LG,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// The top bar surface, separated from the page by a hairline border.
pub fn navbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.weak.color,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}
