// SPDX-License-Identifier: MPL-2.0
//! Paged photo carousel for the current place.
//!
//! The gallery mirrors the shell's photo list: [`State::reset`] is called
//! whenever the list is replaced, which returns to the first page and marks
//! every slide as loading. Downloads are matched back to slides by index and
//! by the [`Generation`] they were started for, so a download belonging to a
//! previous list is ignored.

pub mod paging;

use crate::domain::error::ResolutionError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use bytes::Bytes;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, tooltip, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Identifies one photo list; bumped on every [`State::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Generation(u64);

#[derive(Debug, Clone)]
pub enum Slide {
    Loading,
    Ready(Handle),
    Unavailable,
}

#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    GoTo(usize),
}

#[derive(Debug)]
pub struct State {
    page: usize,
    per_page: usize,
    slides: Vec<Slide>,
    generation: Generation,
}

impl State {
    #[must_use]
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 0,
            per_page: per_page.max(1),
            slides: Vec::new(),
            generation: Generation::default(),
        }
    }

    /// Starts showing a new photo list of `len` entries.
    pub fn reset(&mut self, len: usize) -> Generation {
        self.generation = Generation(self.generation.0 + 1);
        self.page = 0;
        self.slides = (0..len).map(|_| Slide::Loading).collect();
        self.generation
    }

    /// Stores a finished download. Returns `false` when it no longer applies.
    pub fn photo_loaded(
        &mut self,
        generation: Generation,
        index: usize,
        result: Result<Bytes, ResolutionError>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        let Some(slide) = self.slides.get_mut(index) else {
            return false;
        };

        *slide = match result {
            Ok(bytes) => Slide::Ready(Handle::from_bytes(bytes)),
            Err(_) => Slide::Unavailable,
        };
        true
    }

    pub fn update(&mut self, message: Message) {
        let pages = self.page_count();
        match message {
            Message::Previous => self.page = self.page.saturating_sub(1),
            Message::Next => {
                if self.page + 1 < pages {
                    self.page += 1;
                }
            }
            Message::GoTo(page) => {
                self.page = paging::clamp_page(page, self.slides.len(), self.per_page);
            }
        }
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        paging::page_count(self.slides.len(), self.per_page)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Slides on the current page.
    #[must_use]
    pub fn visible(&self) -> &[Slide] {
        &self.slides[paging::page_range(self.page, self.slides.len(), self.per_page)]
    }

    /// Renders the carousel. An empty list renders as a zero-height element.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        if self.is_empty() {
            return Column::new().height(Length::Shrink).into();
        }

        let pages = self.page_count();

        let slides = self
            .visible()
            .iter()
            .fold(Row::new().spacing(spacing::SM), |row, slide| {
                row.push(slide_view(slide, i18n))
            });

        let previous = nav_button(
            "‹",
            i18n.tr(PREVIOUS_HINT_KEY),
            (self.page > 0).then_some(Message::Previous),
        );
        let next = nav_button(
            "›",
            i18n.tr(NEXT_HINT_KEY),
            (self.page + 1 < pages).then_some(Message::Next),
        );

        let carousel = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(previous)
            .push(slides)
            .push(next);

        let dots = (0..pages).fold(Row::new().spacing(spacing::XS), |row, page| {
            row.push(
                button(Text::new(""))
                    .width(Length::Fixed(sizing::PAGE_DOT))
                    .height(Length::Fixed(sizing::PAGE_DOT))
                    .padding(0)
                    .on_press(Message::GoTo(page))
                    .style(styles::button::page_dot(page == self.page)),
            )
        });

        let current = (self.page + 1).to_string();
        let total = pages.to_string();
        let caption = Text::new(i18n.tr_with_args(
            "gallery-page",
            &[("current", current.as_str()), ("total", total.as_str())],
        ))
        .size(typography::CAPTION);

        let footer = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(dots)
            .push(caption);

        Container::new(
            Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .push(Text::new(i18n.tr("gallery-title")).size(typography::TITLE_SM))
                .push(carousel)
                .push(footer),
        )
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
    }
}

const PREVIOUS_HINT_KEY: &str = "gallery-previous";
const NEXT_HINT_KEY: &str = "gallery-next";

fn nav_button<'a>(
    glyph: &'a str,
    hint: String,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let button = button(Text::new(glyph).size(typography::TITLE_MD))
        .on_press_maybe(on_press)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button_primary);

    tooltip(
        button,
        Container::new(Text::new(hint).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(styles::overlay::indicator(radius::SM)),
        tooltip::Position::Top,
    )
    .into()
}

fn slide_view<'a>(slide: &'a Slide, i18n: &'a I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> = match slide {
        Slide::Ready(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        Slide::Loading => Text::new(i18n.tr("gallery-loading"))
            .size(typography::BODY_SM)
            .into(),
        Slide::Unavailable => Text::new(i18n.tr("gallery-unavailable"))
            .size(typography::BODY_SM)
            .into(),
    };

    Container::new(content)
        .center_x(Length::Fixed(sizing::GALLERY_SLIDE_WIDTH))
        .center_y(Length::Fixed(sizing::GALLERY_SLIDE_HEIGHT))
        .clip(true)
        .style(styles::container::slide)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    #[test]
    fn navigation_hints_are_translated() {
        for lang in ["en-US", "fr"] {
            let i18n = I18n::new(Some(lang.into()), &Config::default());
            for key in [PREVIOUS_HINT_KEY, NEXT_HINT_KEY] {
                assert!(!i18n.tr(key).starts_with("MISSING"), "{key} in {lang}");
            }
        }
    }

    #[test]
    fn new_gallery_is_collapsed() {
        let gallery = State::new(4);
        assert!(gallery.is_empty());
        assert_eq!(gallery.page_count(), 0);
        assert!(gallery.visible().is_empty());
    }

    #[test]
    fn two_photos_show_on_one_page() {
        let mut gallery = State::new(4);
        gallery.reset(2);

        assert_eq!(gallery.page_count(), 1);
        assert_eq!(gallery.visible().len(), 2);
        assert!(gallery.visible().iter().all(|s| matches!(s, Slide::Loading)));
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut gallery = State::new(4);
        gallery.reset(9);

        gallery.update(Message::Previous);
        assert_eq!(gallery.page(), 0);

        gallery.update(Message::Next);
        gallery.update(Message::Next);
        gallery.update(Message::Next);
        assert_eq!(gallery.page(), 2);
        assert_eq!(gallery.visible().len(), 1);

        gallery.update(Message::GoTo(10));
        assert_eq!(gallery.page(), 2);
        gallery.update(Message::GoTo(1));
        assert_eq!(gallery.page(), 1);
    }

    #[test]
    fn reset_returns_to_first_page() {
        let mut gallery = State::new(4);
        gallery.reset(8);
        gallery.update(Message::Next);

        gallery.reset(5);
        assert_eq!(gallery.page(), 0);
    }

    #[test]
    fn downloads_for_an_old_list_are_ignored() {
        let mut gallery = State::new(4);
        let old = gallery.reset(2);
        let current = gallery.reset(3);

        assert!(!gallery.photo_loaded(old, 0, Ok(Bytes::from_static(b"img"))));
        assert!(gallery.photo_loaded(current, 2, Err(ResolutionError::photo_service("HTTP 404"))));
        assert!(matches!(gallery.visible()[2], Slide::Unavailable));
        assert!(!gallery.photo_loaded(current, 3, Ok(Bytes::new())));
    }

    #[test]
    fn finished_download_becomes_ready() {
        let mut gallery = State::new(4);
        let generation = gallery.reset(1);

        assert!(gallery.photo_loaded(generation, 0, Ok(Bytes::from_static(b"img"))));
        assert!(matches!(gallery.visible()[0], Slide::Ready(_)));
    }
}
