// SPDX-License-Identifier: MPL-2.0
//! Search bar with autocomplete suggestions.
//!
//! Purely presentational: the text, status and suggestions come from the
//! search controller, and user actions bubble up as [`Event`]s.

use crate::domain::place::{AutocompleteStatus, Suggestion};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{Element, Length};

/// Contextual data needed to render the search bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub value: &'a str,
    pub status: &'a AutocompleteStatus,
    /// Already filtered to what should be shown.
    pub suggestions: &'a [Suggestion],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    InputChanged(String),
    SuggestionPicked(String),
    Submitted,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    InputChanged(String),
    /// Address text to forward-geocode.
    Selected(String),
}

/// Maps a search bar message to an event. `value` is the current input text.
pub fn update(message: Message, value: &str) -> Event {
    match message {
        Message::InputChanged(text) => Event::InputChanged(text),
        Message::SuggestionPicked(description) => Event::Selected(description),
        Message::Submitted => {
            let query = value.trim();
            if query.is_empty() {
                Event::None
            } else {
                Event::Selected(query.to_string())
            }
        }
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let input = text_input(&ctx.i18n.tr("search-placeholder"), ctx.value)
        .size(typography::BODY_LG)
        .padding(spacing::XS)
        .width(Length::Fill)
        .on_input(Message::InputChanged)
        .on_submit(Message::Submitted);

    let mut column = Column::new().spacing(spacing::XXS).push(input);

    if !ctx.suggestions.is_empty() {
        let list = ctx
            .suggestions
            .iter()
            .fold(Column::new(), |list, suggestion| {
                list.push(
                    button(Text::new(suggestion.description.as_str()).size(typography::BODY))
                        .width(Length::Fill)
                        .padding([spacing::XS, spacing::SM])
                        .on_press(Message::SuggestionPicked(suggestion.description.clone()))
                        .style(styles::button::suggestion),
                )
            });
        column = column.push(list);
    } else if *ctx.status == AutocompleteStatus::ZeroResults && !ctx.value.trim().is_empty() {
        column = column.push(
            Container::new(Text::new(ctx.i18n.tr("search-no-results")).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::SM]),
        );
    }

    Container::new(column)
        .width(Length::Fixed(sizing::SEARCH_WIDTH))
        .padding(spacing::XS)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::place::PlaceIdentifier;

    #[test]
    fn picking_a_suggestion_selects_its_text() {
        let event = update(
            Message::SuggestionPicked("Connaught Place, Delhi".into()),
            "conn",
        );
        assert_eq!(event, Event::Selected("Connaught Place, Delhi".into()));
    }

    #[test]
    fn submit_selects_trimmed_free_text() {
        assert_eq!(
            update(Message::Submitted, "  India Gate "),
            Event::Selected("India Gate".into())
        );
    }

    #[test]
    fn blank_submit_is_ignored() {
        assert_eq!(update(Message::Submitted, "   "), Event::None);
    }

    #[test]
    fn view_renders_suggestions_and_empty_states() {
        let i18n = I18n::default();
        let suggestions = vec![Suggestion {
            description: "Connaught Place, Delhi".into(),
            place_id: Some(PlaceIdentifier::new("CP")),
        }];

        let _element = view(ViewContext {
            i18n: &i18n,
            value: "conn",
            status: &AutocompleteStatus::Ok,
            suggestions: &suggestions,
        });
        let _element = view(ViewContext {
            i18n: &i18n,
            value: "zzz",
            status: &AutocompleteStatus::ZeroResults,
            suggestions: &[],
        });
    }

    #[test]
    fn typing_is_forwarded() {
        assert_eq!(
            update(Message::InputChanged("Del".into()), ""),
            Event::InputChanged("Del".into())
        );
    }
}
