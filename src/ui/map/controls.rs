// SPDX-License-Identifier: MPL-2.0
//! Zoom buttons and the marker position badge drawn over the map.

use super::Message;
use crate::domain::geo::{Camera, GeoPoint};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, tooltip, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Vertical `+` / `-` pair. A button is disabled at its zoom bound.
pub fn zoom_buttons<'a>(i18n: &'a I18n, camera: &Camera) -> Element<'a, Message> {
    let zoom = camera.zoom();
    let zoom_in = zoom_button(
        "+",
        i18n.tr("map-zoom-in"),
        (!zoom.is_max()).then_some(Message::ZoomIn),
    );
    let zoom_out = zoom_button(
        "−",
        i18n.tr("map-zoom-out"),
        (!zoom.is_min()).then_some(Message::ZoomOut),
    );

    Column::new()
        .spacing(spacing::XXS)
        .push(zoom_in)
        .push(zoom_out)
        .into()
}

fn zoom_button<'a>(
    label: &'a str,
    hint: String,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let content = Container::new(Text::new(label).size(typography::TITLE_SM))
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    let button = button(content)
        .width(Length::Fixed(sizing::ZOOM_BUTTON))
        .height(Length::Fixed(sizing::ZOOM_BUTTON))
        .padding(0)
        .on_press_maybe(on_press)
        .style(styles::button_overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ));

    tooltip(
        button,
        Container::new(Text::new(hint).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(styles::overlay::indicator(radius::SM)),
        tooltip::Position::Left,
    )
    .into()
}

/// Badge showing the marker coordinates.
pub fn marker_badge<'a>(i18n: &'a I18n, marker: GeoPoint) -> Element<'a, Message> {
    let position = marker.format();
    let label = i18n.tr_with_args("map-marker-position", &[("position", position.as_str())]);

    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .align_y(alignment::Vertical::Center)
        .style(styles::overlay::indicator(radius::SM))
        .into()
}
