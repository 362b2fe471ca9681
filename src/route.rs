// SPDX-License-Identifier: MPL-2.0
//! Route enumeration for client-side navigation.
//!
//! The shell does not match paths itself; it consumes the current route and
//! mounts the corresponding page view. Path strings only exist at the
//! boundaries (the launcher's startup argument and the static menu
//! definition), where [`Route::from_path`] and [`Route::path`] translate.

/// Pages the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Tasks,
    Workflows,
    Analytics,
    Settings,
}

impl Route {
    /// All routes, in sidebar order.
    pub const ALL: [Route; 5] = [
        Route::Dashboard,
        Route::Tasks,
        Route::Workflows,
        Route::Analytics,
        Route::Settings,
    ];

    /// The path this route is reachable under.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Tasks => "/tasks",
            Route::Workflows => "/workflows",
            Route::Analytics => "/analytics",
            Route::Settings => "/settings",
        }
    }

    /// Resolves a path string to a route. Exact match only; unknown paths
    /// return `None` and the caller decides the fallback.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// The i18n key for the page title shown in the window title bar.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Route::Dashboard => "page-dashboard-title",
            Route::Tasks => "page-tasks-title",
            Route::Workflows => "page-workflows-title",
            Route::Analytics => "page-analytics-title",
            Route::Settings => "page-settings-title",
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Dashboard
    }
}
