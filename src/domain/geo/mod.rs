// SPDX-License-Identifier: MPL-2.0
//! Geographic domain types: points, camera and projection.

mod camera;
mod point;
pub mod projection;

pub use camera::{zoom_bounds, Camera, ZoomLevel};
pub use point::GeoPoint;
pub use projection::{ScreenPoint, ViewportSize};
