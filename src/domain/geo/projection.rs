// SPDX-License-Identifier: MPL-2.0
//! Web-Mercator projection between geographic points and screen pixels.
//!
//! The world is a square of `TILE_SIZE * 2^zoom` pixels. Screen coordinates
//! are relative to the top-left corner of the viewport, with the camera center
//! at the middle of the viewport.

use super::camera::Camera;
use super::point::GeoPoint;
use std::f64::consts::PI;

/// Edge length of one map tile, in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the Web-Mercator square.
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// A position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Size of the viewport the map is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn half(self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Converts a point into absolute world pixels at the camera zoom.
#[must_use]
pub fn world_pixels(point: GeoPoint, camera: &Camera) -> (f64, f64) {
    let world = TILE_SIZE * camera.zoom().scale();
    let latitude = point.latitude().clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let sin_lat = latitude.to_radians().sin();

    let x = (point.longitude() + 180.0) / 360.0 * world;
    let y = (0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI)) * world;
    (x, y)
}

/// Converts absolute world pixels back into a point.
///
/// Longitude is wrapped into `[-180, 180)`; latitude is clamped to the
/// Mercator limit.
#[must_use]
pub fn from_world_pixels(x: f64, y: f64, camera: &Camera) -> GeoPoint {
    let world = TILE_SIZE * camera.zoom().scale();
    let longitude = wrap_longitude(x / world * 360.0 - 180.0);
    let n = PI - 2.0 * PI * y / world;
    let latitude = n.sinh().atan().to_degrees();
    GeoPoint::new(latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE), longitude)
}

/// Projects a point onto the viewport.
#[must_use]
pub fn project(point: GeoPoint, camera: &Camera, viewport: ViewportSize) -> ScreenPoint {
    let (px, py) = world_pixels(point, camera);
    let (cx, cy) = world_pixels(camera.center(), camera);
    let (half_w, half_h) = viewport.half();

    #[allow(clippy::cast_possible_truncation)]
    ScreenPoint::new((px - cx + half_w) as f32, (py - cy + half_h) as f32)
}

/// Converts a viewport position (e.g. a mouse click) into a point.
#[must_use]
pub fn unproject(screen: ScreenPoint, camera: &Camera, viewport: ViewportSize) -> GeoPoint {
    let (cx, cy) = world_pixels(camera.center(), camera);
    let (half_w, half_h) = viewport.half();
    let x = cx + f64::from(screen.x) - half_w;
    let y = cy + f64::from(screen.y) - half_h;
    from_world_pixels(x, y, camera)
}

/// Moves the camera center by a pixel delta (drag to pan).
pub fn pan_by_pixels(camera: &mut Camera, dx: f32, dy: f32) {
    let (cx, cy) = world_pixels(camera.center(), camera);
    let center = from_world_pixels(cx - f64::from(dx), cy - f64::from(dy), camera);
    camera.pan_to(center);
}

fn wrap_longitude(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}
