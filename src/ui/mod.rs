// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Frame components
//!
//! - [`sidebar`] - Navigation menu with exclusive submenu expansion
//! - [`navbar`] - Top bar with search, notification tray, theme toggle
//! - [`notifications`] - Auto-expiring toast notification queue
//! - [`search`] - Relay forwarding search input to the embedding host
//! - [`pages`] - Static routed page views
//!
//! # Shared infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod design_tokens;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod pages;
pub mod search;
pub mod sidebar;
pub mod styles;
pub mod theming;
