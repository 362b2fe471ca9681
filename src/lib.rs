// SPDX-License-Identifier: MPL-2.0
//! `comet_shell` is the dashboard shell for the Comet executive agent, built
//! with the Iced GUI framework.
//!
//! The shell is the persistent frame (sidebar, top bar, notification tray)
//! around routed page views. All cross-cutting UI state — theme, sidebar
//! visibility, active navigation, ephemeral notifications — is owned by the
//! root [`app::App`] and flows down to presentation fragments as read-only
//! snapshots, while fragments send intents back up as messages.

#![doc(html_root_url = "https://docs.rs/comet_shell/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod route;
pub mod ui;
