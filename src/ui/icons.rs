// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`. Sources are single-color stroke outlines, so a
//! theme-aware tint can be applied uniformly with [`themed`] (or explicitly
//! with [`tinted`]) regardless of the colors in the file.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance, not the
//! action context (e.g. `cross` not `dismiss_notification`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle. The handle is created once
/// on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// Navigation
define_icon!(home, "home.svg", "House outline.");
define_icon!(check_square, "check-square.svg", "Checkmark inside a square.");
define_icon!(git_branch, "git-branch.svg", "Branching commit graph.");
define_icon!(bar_chart, "bar-chart.svg", "Three vertical bars.");
define_icon!(cog, "cog.svg", "Gear wheel.");
define_icon!(chevron_down, "chevron-down.svg", "Downward chevron.");

// Frame controls
define_icon!(menu, "menu.svg", "Hamburger menu: three horizontal lines.");
define_icon!(cross, "cross.svg", "Diagonal cross.");
define_icon!(log_out, "log-out.svg", "Door with outgoing arrow.");
define_icon!(user, "user.svg", "Person silhouette.");
define_icon!(search, "search.svg", "Magnifying glass.");
define_icon!(bell, "bell.svg", "Notification bell.");
define_icon!(sun, "sun.svg", "Sun with rays.");
define_icon!(moon, "moon.svg", "Crescent moon.");

// Notification kinds
define_icon!(info, "info.svg", "Letter i inside a circle.");
define_icon!(check_circle, "check-circle.svg", "Checkmark inside a circle.");
define_icon!(alert_triangle, "alert-triangle.svg", "Exclamation mark inside a triangle.");
define_icon!(alert_circle, "alert-circle.svg", "Exclamation mark inside a circle.");

/// Sizes an icon to a square of `size` logical pixels.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints an icon with a fixed color.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}

/// Tints an icon with the active theme's base text color.
pub fn themed(icon: Svg<'static>) -> Svg<'static> {
    icon.style(|theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(theme.extended_palette().background.base.text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_are_loadable() {
        // Handles are created from embedded bytes; creation must not panic.
        let _ = home();
        let _ = bell();
        let _ = cross();
        let _ = alert_triangle();
    }

    #[test]
    fn sized_icon_keeps_handle() {
        let _ = sized(search(), 16.0);
    }
}
