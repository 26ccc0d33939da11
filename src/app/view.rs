// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: map, search bar, gallery, toasts, and the blocking
//! notice when one is open.

use super::Message;
use crate::application::controller::SearchController;
use crate::domain::error::ResolutionError;
use crate::domain::geo::Camera;
use crate::domain::place::PlaceState;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::gallery;
use crate::ui::map;
use crate::ui::notice;
use crate::ui::notifications::{self, Toast};
use crate::ui::search;
use crate::ui::theming::AppTheme;
use iced::widget::{Container, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
    pub camera: &'a Camera,
    pub place: &'a PlaceState,
    pub search: &'a SearchController,
    pub gallery: &'a gallery::State,
    pub notice: Option<&'a ResolutionError>,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let map_layer = map::view(map::ViewContext {
        i18n: ctx.i18n,
        camera: ctx.camera,
        marker: ctx.place.marker,
        colors: &ctx.theme.colors,
    })
    .map(Message::Map);

    let search_bar = search::view(search::ViewContext {
        i18n: ctx.i18n,
        value: ctx.search.value(),
        status: ctx.search.status(),
        suggestions: ctx.search.visible_suggestions(),
    })
    .map(Message::Search);

    let search_layer = Container::new(search_bar)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::MD);

    let gallery_layer = Container::new(ctx.gallery.view(ctx.i18n).map(Message::Gallery))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    let mut stack = Stack::new()
        .push(map_layer)
        .push(search_layer)
        .push(gallery_layer)
        .push(toasts);

    if let Some(error) = ctx.notice {
        stack = stack.push(notice::view(error, ctx.i18n, Message::DismissNotice));
    }

    stack.width(Length::Fill).height(Length::Fill).into()
}
