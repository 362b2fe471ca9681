// SPDX-License-Identifier: MPL-2.0
//! Routed page views.
//!
//! The pages are static declarative markup; they emit no messages and hold no
//! state, which keeps them generic over the parent's message type. Anything
//! interactive belongs to the shell frame, not here.

use crate::i18n::I18n;
use crate::route::Route;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

/// Renders the page mounted under `route`.
pub fn view<'a, M: 'a>(route: Route, i18n: &'a I18n) -> Element<'a, M> {
    let body: Element<'a, M> = match route {
        Route::Dashboard => dashboard(i18n),
        Route::Tasks => placeholder(i18n, "page-tasks-title", "page-tasks-intro"),
        Route::Workflows => placeholder(i18n, "page-workflows-title", "page-workflows-intro"),
        Route::Analytics => placeholder(i18n, "page-analytics-title", "page-analytics-intro"),
        Route::Settings => placeholder(i18n, "page-settings-title", "page-settings-intro"),
    };

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .into()
}

fn dashboard<'a, M: 'a>(i18n: &'a I18n) -> Element<'a, M> {
    let tiles = Row::new()
        .spacing(spacing::MD)
        .push(tile(i18n, "page-dashboard-tile-tasks"))
        .push(tile(i18n, "page-dashboard-tile-workflows"))
        .push(tile(i18n, "page-dashboard-tile-alerts"));

    Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("page-dashboard-title")).size(typography::TITLE))
        .push(
            Text::new(i18n.tr("page-dashboard-intro"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .push(tiles)
        .into()
}

fn tile<'a, M: 'a>(i18n: &'a I18n, label_key: &str) -> Element<'a, M> {
    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new("—").size(typography::TITLE))
            .push(
                Text::new(i18n.tr(label_key))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::panel)
    .into()
}

fn placeholder<'a, M: 'a>(i18n: &'a I18n, title_key: &str, intro_key: &str) -> Element<'a, M> {
    Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr(title_key)).size(typography::TITLE))
        .push(
            Container::new(
                Text::new(i18n.tr(intro_key))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            )
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::panel),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_renders_a_page() {
        let i18n = I18n::default();
        for route in Route::ALL {
            let _element: Element<'_, ()> = view(route, &i18n);
        }
    }
}
