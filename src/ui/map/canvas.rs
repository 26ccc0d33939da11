// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the map and turning pointer input into map messages.
//!
//! A left press followed by a release without moving more than
//! [`DRAG_THRESHOLD`] pixels is a click; anything longer is a drag that pans
//! the camera. The wheel zooms by one level per notch.

use super::Message;
use crate::domain::geo::projection::{self, ScreenPoint, ViewportSize, MAX_LATITUDE};
use crate::domain::geo::{Camera, GeoPoint};
use crate::ui::design_tokens::{palette, sizing};
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, Color, Point, Rectangle, Renderer, Theme};

/// Pointer travel (in pixels) after which a press becomes a drag.
pub const DRAG_THRESHOLD: f32 = 4.0;

/// Upper bound on graticule lines per axis, whatever the zoom.
const MAX_LINES_PER_AXIS: usize = 256;

/// Colors the canvas needs, copied out of the active [`ColorScheme`].
#[derive(Debug, Clone, Copy)]
pub struct MapColors {
    pub water: Color,
    pub grid: Color,
    pub axis: Color,
    pub marker: Color,
}

impl From<&ColorScheme> for MapColors {
    fn from(colors: &ColorScheme) -> Self {
        Self {
            water: colors.map_water,
            grid: colors.map_grid,
            axis: colors.map_axis,
            marker: colors.map_marker,
        }
    }
}

pub struct MapCanvas {
    pub camera: Camera,
    pub marker: GeoPoint,
    pub colors: MapColors,
}

/// Pointer tracking between events.
#[derive(Debug, Default)]
pub struct PointerState {
    pressed_at: Option<Point>,
    last: Option<Point>,
    dragging: bool,
}

impl PointerState {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

impl canvas::Program<Message> for MapCanvas {
    type State = PointerState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let viewport = ViewportSize::new(bounds.width, bounds.height);

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                state.pressed_at = Some(position);
                state.last = Some(position);
                state.dragging = false;
                Some(Action::capture())
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let origin = state.pressed_at?;
                let last = state.last?;
                let position = cursor.position_in(bounds)?;

                if !state.dragging && origin.distance(position) > DRAG_THRESHOLD {
                    state.dragging = true;
                }
                if !state.dragging {
                    return None;
                }

                state.last = Some(position);
                Some(
                    Action::publish(Message::Dragged {
                        dx: position.x - last.x,
                        dy: position.y - last.y,
                    })
                    .and_capture(),
                )
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let was_click = state.pressed_at.is_some() && !state.dragging;
                state.reset();

                let position = cursor.position_in(bounds)?;
                if !was_click {
                    return Some(Action::capture());
                }

                let point = projection::unproject(
                    ScreenPoint::new(position.x, position.y),
                    &self.camera,
                    viewport,
                );
                Some(Action::publish(Message::Clicked(point)).and_capture())
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                state.reset();
                None
            }
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                cursor.position_in(bounds)?;
                let y = match delta {
                    mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => *y,
                };
                let message = if y > 0.0 {
                    Message::ZoomIn
                } else if y < 0.0 {
                    Message::ZoomOut
                } else {
                    return None;
                };
                Some(Action::publish(message).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let viewport = ViewportSize::new(bounds.width, bounds.height);

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), self.colors.water);

        let visible = VisibleArea::of(&self.camera, viewport);
        let step = graticule_step(self.camera.zoom().value());
        let grid = Stroke::default()
            .with_width(1.0)
            .with_color(self.colors.grid);
        let axis = Stroke::default()
            .with_width(2.0)
            .with_color(self.colors.axis);

        for longitude in grid_values(visible.west, visible.east, step) {
            let x = self.screen_x(longitude, viewport);
            let stroke = if is_zero(longitude) { axis } else { grid };
            frame.stroke(
                &Path::line(Point::new(x, 0.0), Point::new(x, bounds.height)),
                stroke,
            );
        }

        for latitude in grid_values(visible.south, visible.north, step) {
            let y = self.screen_y(latitude, viewport);
            let stroke = if is_zero(latitude) { axis } else { grid };
            frame.stroke(
                &Path::line(Point::new(0.0, y), Point::new(bounds.width, y)),
                stroke,
            );
        }

        self.draw_marker(&mut frame, viewport);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

impl MapCanvas {
    fn screen_x(&self, longitude: f64, viewport: ViewportSize) -> f32 {
        let center = self.camera.center();
        projection::project(GeoPoint::new(center.latitude(), longitude), &self.camera, viewport).x
    }

    fn screen_y(&self, latitude: f64, viewport: ViewportSize) -> f32 {
        let center = self.camera.center();
        projection::project(GeoPoint::new(latitude, center.longitude()), &self.camera, viewport).y
    }

    fn draw_marker(&self, frame: &mut Frame, viewport: ViewportSize) {
        let tip = projection::project(self.marker, &self.camera, viewport);
        let tip = Point::new(tip.x, tip.y);
        let head = Point::new(tip.x, tip.y - sizing::MARKER_STEM);

        frame.stroke(
            &Path::line(head, tip),
            Stroke::default()
                .with_width(3.0)
                .with_color(self.colors.marker),
        );
        frame.fill(
            &Path::circle(head, sizing::MARKER_RADIUS),
            self.colors.marker,
        );
        frame.fill(
            &Path::circle(head, sizing::MARKER_RADIUS / 3.0),
            palette::WHITE,
        );
    }
}

/// Geographic extent covered by the viewport.
///
/// Longitudes are not wrapped, so `west` may be below -180 or `east` above 180
/// at low zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleArea {
    pub west: f64,
    pub east: f64,
    pub south: f64,
    pub north: f64,
}

impl VisibleArea {
    #[must_use]
    pub fn of(camera: &Camera, viewport: ViewportSize) -> Self {
        let world = projection::TILE_SIZE * camera.zoom().scale();
        let (cx, cy) = projection::world_pixels(camera.center(), camera);
        let half_w = f64::from(viewport.width) / 2.0;
        let half_h = f64::from(viewport.height) / 2.0;

        let west = (cx - half_w) / world * 360.0 - 180.0;
        let east = (cx + half_w) / world * 360.0 - 180.0;
        let north = projection::from_world_pixels(cx, cy - half_h, camera).latitude();
        let south = projection::from_world_pixels(cx, cy + half_h, camera).latitude();

        Self {
            west,
            east,
            south: south.max(-MAX_LATITUDE),
            north: north.min(MAX_LATITUDE),
        }
    }
}

/// Spacing in degrees between graticule lines at `zoom`.
#[must_use]
pub fn graticule_step(zoom: u8) -> f64 {
    match zoom {
        0..=2 => 30.0,
        3..=4 => 10.0,
        5..=6 => 5.0,
        7..=8 => 1.0,
        9..=10 => 0.25,
        11..=12 => 0.05,
        13..=15 => 0.01,
        _ => 0.001,
    }
}

/// Multiples of `step` within `[min, max]`, capped at [`MAX_LINES_PER_AXIS`].
#[must_use]
pub fn grid_values(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || step <= 0.0 || max < min {
        return Vec::new();
    }

    #[allow(clippy::cast_possible_truncation)]
    let first = (min / step).ceil() as i64;
    (0..MAX_LINES_PER_AXIS)
        .map(|i| (first + i as i64) as f64 * step)
        .take_while(|value| *value <= max)
        .collect()
}

fn is_zero(value: f64) -> bool {
    value.abs() < 1e-9
}
