// SPDX-License-Identifier: MPL-2.0
//! Interactive map: canvas, zoom controls and marker badge.
//!
//! The map owns no state of its own. The [`Camera`] lives in the app shell and
//! is mutated through [`update`]; clicks bubble up as [`Event::Clicked`] so the
//! shell can start a click pipeline.

pub mod canvas;
pub mod controls;

use crate::domain::geo::{projection, Camera, GeoPoint};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use canvas::{MapCanvas, MapColors};
use iced::widget::{Canvas, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Data needed to render the map.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub camera: &'a Camera,
    pub marker: GeoPoint,
    pub colors: &'a ColorScheme,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Left click without dragging, already converted to a point.
    Clicked(GeoPoint),
    /// Drag by a pixel delta.
    Dragged { dx: f32, dy: f32 },
    ZoomIn,
    ZoomOut,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Clicked(GeoPoint),
}

/// Applies camera moves; clicks are handed back to the caller.
pub fn update(message: Message, camera: &mut Camera) -> Event {
    match message {
        Message::Clicked(point) => Event::Clicked(point),
        Message::Dragged { dx, dy } => {
            projection::pan_by_pixels(camera, dx, dy);
            Event::None
        }
        Message::ZoomIn => {
            camera.set_zoom(camera.zoom().zoom_in());
            Event::None
        }
        Message::ZoomOut => {
            camera.set_zoom(camera.zoom().zoom_out());
            Event::None
        }
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let map = Canvas::new(MapCanvas {
        camera: *ctx.camera,
        marker: ctx.marker,
        colors: MapColors::from(ctx.colors),
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let zoom = Container::new(controls::zoom_buttons(ctx.i18n, ctx.camera))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::MD);

    let hint = Container::new(Text::new(ctx.i18n.tr("map-hint")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::indicator(radius::SM));

    let footer = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(controls::marker_badge(ctx.i18n, ctx.marker))
            .push(hint),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Left)
    .align_y(alignment::Vertical::Bottom)
    .padding(spacing::MD);

    Stack::new()
        .push(map)
        .push(zoom)
        .push(footer)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
