// SPDX-License-Identifier: MPL-2.0
//! Blocking notice for click-path failures.
//!
//! Rendered as an opaque layer over the whole window, so the map underneath
//! receives no input until the user dismisses it.

use crate::domain::error::ResolutionError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, opaque, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Localized text for a resolution failure, naming its cause.
#[must_use]
pub fn message_for(error: &ResolutionError, i18n: &I18n) -> String {
    match error.status() {
        Some(status) => i18n.tr_with_args(error.i18n_key(), &[("status", status)]),
        None => i18n.tr(error.i18n_key()),
    }
}

/// Modal card over a dimmed backdrop; `on_dismiss` is sent by the OK button.
pub fn view<'a, Message: Clone + 'a>(
    error: &ResolutionError,
    i18n: &I18n,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("notice-title"))
        .size(typography::TITLE_MD)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::ERROR_500),
        });

    let body = Text::new(message_for(error, i18n)).size(typography::BODY_LG);

    let dismiss = button(Text::new(i18n.tr("notice-dismiss")).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .on_press(on_dismiss)
        .style(styles::button_primary);

    let card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(body)
            .push(
                Row::new()
                    .push(iced::widget::Space::new().width(Length::Fill))
                    .push(dismiss)
                    .align_y(alignment::Vertical::Center),
            ),
    )
    .width(Length::Fixed(sizing::NOTICE_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::notice);

    opaque(
        center(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn no_results_has_no_status() {
        let text = message_for(&ResolutionError::NoResults, &english());
        assert_eq!(text, "No results found");
    }

    #[test]
    fn service_errors_name_the_provider_status() {
        let i18n = english();
        assert_eq!(
            message_for(&ResolutionError::geocode_service("REQUEST_DENIED"), &i18n),
            "Geocoder failed due to: REQUEST_DENIED"
        );
        assert_eq!(
            message_for(&ResolutionError::details_service("TIMEOUT"), &i18n),
            "Place details lookup failed due to: TIMEOUT"
        );
    }
}
