// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Map**: Initial center and zoom levels
//! - **Provider**: Endpoint, timeout and photo size
//! - **Gallery**: Paging

use crate::domain::geo::{zoom_bounds, GeoPoint};

// ==========================================================================
// Map Defaults
// ==========================================================================

/// Initial map center and marker position (New Delhi).
pub const DEFAULT_CENTER: GeoPoint = GeoPoint::new(28.613939, 77.209023);

/// Initial map zoom.
pub const DEFAULT_MAP_ZOOM: u8 = zoom_bounds::DEFAULT;

/// Zoom applied after a search moves the camera.
pub const DEFAULT_SEARCH_ZOOM: u8 = zoom_bounds::SEARCH;

// ==========================================================================
// Provider Defaults
// ==========================================================================

/// Environment variable holding the Maps API key.
pub const ENV_API_KEY: &str = "PLACE_LENS_API_KEY";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Minimum request timeout in seconds.
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout in seconds.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Width requested for gallery photos, in pixels.
pub const DEFAULT_PHOTO_MAX_WIDTH: u32 = 400;

/// Smallest photo width the provider accepts.
pub const MIN_PHOTO_MAX_WIDTH: u32 = 1;

/// Largest photo width the provider accepts.
pub const MAX_PHOTO_MAX_WIDTH: u32 = 1600;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Photos shown per gallery page.
pub const DEFAULT_PHOTOS_PER_PAGE: usize = 4;

pub const MIN_PHOTOS_PER_PAGE: usize = 1;

pub const MAX_PHOTOS_PER_PAGE: usize = 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_bounds_are_ordered() {
        assert!(MIN_PHOTOS_PER_PAGE <= DEFAULT_PHOTOS_PER_PAGE);
        assert!(DEFAULT_PHOTOS_PER_PAGE <= MAX_PHOTOS_PER_PAGE);
    }

    #[test]
    fn provider_bounds_are_ordered() {
        assert!(MIN_REQUEST_TIMEOUT_SECS <= DEFAULT_REQUEST_TIMEOUT_SECS);
        assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
        assert!(MIN_PHOTO_MAX_WIDTH <= DEFAULT_PHOTO_MAX_WIDTH);
        assert!(DEFAULT_PHOTO_MAX_WIDTH <= MAX_PHOTO_MAX_WIDTH);
    }

    #[test]
    fn default_center_is_valid() {
        assert!(DEFAULT_CENTER.is_valid());
    }
}
