// SPDX-License-Identifier: MPL-2.0
//! Design tokens centralisés.
//!
//! - **Palette**: base colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Border / Radius / Shadow**: stroke and elevation scales
//!
//! Tokens are designed to stay consistent; keep ratios intact when adjusting
//! (e.g. `MD = XS * 2`).

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.16, 0.17, 0.2);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_300: Color = Color::from_rgb(0.6, 0.6, 0.6);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_200: Color = Color::from_rgb(0.7, 0.84, 0.98);
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7);

    // Sidebar surface (dark in both themes, like the brand header)
    pub const SIDEBAR_BG: Color = Color::from_rgb(0.09, 0.1, 0.13);
    pub const SIDEBAR_BG_RAISED: Color = Color::from_rgb(0.13, 0.14, 0.18);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background for semi-transparent panels and containers.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 32.0;

    // Frame components
    pub const SIDEBAR_WIDTH: f32 = 260.0;
    pub const NAVBAR_HEIGHT: f32 = 56.0;
    pub const SEARCH_FIELD_WIDTH: f32 = 320.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const TRAY_WIDTH: f32 = 320.0;
    pub const TRAY_MAX_HEIGHT: f32 = 384.0;
    pub const AVATAR: f32 = 40.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page and dialog titles.
    pub const TITLE: f32 = 24.0;
    /// Section headings.
    pub const HEADING: f32 = 18.0;
    /// Primary content text.
    pub const BODY: f32 = 14.0;
    /// Secondary, supporting text.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border & Radius
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    const SHADOW_COLOR: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.3,
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector::new(0.0, 1.0),
        blur_radius: 2.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector::new(0.0, 2.0),
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector::new(0.0, 4.0),
        blur_radius: 16.0,
    };
}
