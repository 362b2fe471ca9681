// SPDX-License-Identifier: MPL-2.0
//! Light/Dark theme mode management.
//!
//! The shell has exactly two modes and a single involutive operation between
//! them. The mode maps onto Iced's built-in `Light`/`Dark` themes; component
//! styles read the active palette through the `Theme` they are handed, so no
//! color lives here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// The other mode. Applying this twice returns the original mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// The Iced theme backing this mode.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        match self {
            ThemeMode::Light => iced::Theme::Light,
            ThemeMode::Dark => iced::Theme::Dark,
        }
    }
}
