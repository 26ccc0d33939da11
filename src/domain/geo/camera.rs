// SPDX-License-Identifier: MPL-2.0
//! Map camera value objects.

use super::point::GeoPoint;

// =============================================================================
// Zoom Bounds
// =============================================================================

/// Zoom level bounds supported by the map provider.
pub mod zoom_bounds {
    /// Whole-world view.
    pub const MIN: u8 = 0;
    /// Building-level view.
    pub const MAX: u8 = 21;
    /// Zoom used when the application starts.
    pub const DEFAULT: u8 = 8;
    /// Zoom applied after a successful address search.
    pub const SEARCH: u8 = 14;
}

// =============================================================================
// ZoomLevel
// =============================================================================

/// Map zoom level, guaranteed to be within the provider range (0–21).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    /// Creates a new zoom level, clamping the value to the valid range.
    #[must_use]
    pub fn new(level: u8) -> Self {
        Self(level.clamp(zoom_bounds::MIN, zoom_bounds::MAX))
    }

    /// Returns the raw zoom level.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the zoom level used after a search.
    #[must_use]
    pub fn search() -> Self {
        Self(zoom_bounds::SEARCH)
    }

    /// Returns whether the zoom is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= zoom_bounds::MIN
    }

    /// Returns whether the zoom is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= zoom_bounds::MAX
    }

    /// Zooms in by one level.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// Zooms out by one level.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }

    /// Returns `2^zoom`, the number of tiles along one world axis.
    #[must_use]
    pub fn scale(self) -> f64 {
        f64::from(1u32 << self.0)
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(zoom_bounds::DEFAULT)
    }
}

// =============================================================================
// Camera
// =============================================================================

/// Where the map is looking: a center point and a zoom level.
///
/// The shell owns exactly one `Camera` and hands it to whichever controller
/// needs to move the view, so there is no global map handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    center: GeoPoint,
    zoom: ZoomLevel,
}

impl Camera {
    #[must_use]
    pub fn new(center: GeoPoint, zoom: ZoomLevel) -> Self {
        Self { center, zoom }
    }

    #[must_use]
    pub fn center(&self) -> GeoPoint {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    /// Recenters the camera on `point`, keeping the zoom.
    pub fn pan_to(&mut self, point: GeoPoint) {
        self.center = point;
    }

    /// Changes the zoom, keeping the center.
    pub fn set_zoom(&mut self, zoom: ZoomLevel) {
        self.zoom = zoom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_level_clamps_to_provider_range() {
        assert_eq!(ZoomLevel::new(40).value(), zoom_bounds::MAX);
        assert_eq!(ZoomLevel::new(0).value(), zoom_bounds::MIN);
    }

    #[test]
    fn zoom_in_and_out_stop_at_bounds() {
        let max = ZoomLevel::new(zoom_bounds::MAX);
        assert!(max.zoom_in().is_max());

        let min = ZoomLevel::new(zoom_bounds::MIN);
        assert!(min.zoom_out().is_min());
        assert_eq!(min.zoom_in().value(), 1);
    }

    #[test]
    fn scale_doubles_per_level() {
        assert!((ZoomLevel::new(0).scale() - 1.0).abs() < f64::EPSILON);
        assert!((ZoomLevel::new(3).scale() - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pan_to_keeps_zoom_and_set_zoom_keeps_center() {
        let mut camera = Camera::new(GeoPoint::new(28.6, 77.2), ZoomLevel::default());
        let target = GeoPoint::new(28.6315, 77.2167);

        camera.pan_to(target);
        assert_eq!(camera.center(), target);
        assert_eq!(camera.zoom(), ZoomLevel::default());

        camera.set_zoom(ZoomLevel::search());
        assert_eq!(camera.center(), target);
        assert_eq!(camera.zoom().value(), 14);
    }
}
