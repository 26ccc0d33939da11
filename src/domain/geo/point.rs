// SPDX-License-Identifier: MPL-2.0
//! Geographic point type.
//!
//! Pure domain type with no external dependencies.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// GeoPoint
// =============================================================================

/// A latitude/longitude pair in decimal degrees (WGS84).
///
/// Every resolution path (map click, address search) produces a `GeoPoint`,
/// and it is the only representation of "where" in the application.
///
/// No range validation happens here: out-of-range or non-finite values are
/// rejected by the provider gateways, not by this type.
///
/// # Example
///
/// ```
/// use place_lens::domain::geo::GeoPoint;
///
/// let delhi = GeoPoint::new(28.613939, 77.209023);
/// assert!(delhi.is_valid());
/// assert_eq!(delhi.format(), "28.613939° N, 77.209023° E");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a new point from decimal degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the latitude in decimal degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in decimal degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether both components are finite numbers.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Formats the point as a human-readable string.
    ///
    /// Format: "28.613939° N, 77.209023° E"
    #[must_use]
    pub fn format(&self) -> String {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        format!(
            "{:.6}° {}, {:.6}° {}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir
        )
    }

    /// Formats the point the way the provider expects it in a `latlng` query.
    #[must_use]
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_values_unclamped() {
        let point = GeoPoint::new(120.0, -400.0);
        assert!((point.latitude() - 120.0).abs() < f64::EPSILON);
        assert!((point.longitude() - -400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn is_valid_rejects_non_finite() {
        assert!(GeoPoint::new(28.6, 77.2).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 77.2).is_valid());
        assert!(!GeoPoint::new(28.6, f64::INFINITY).is_valid());
    }

    #[test]
    fn format_uses_hemispheres() {
        let sydney = GeoPoint::new(-33.8688, 151.2093);
        assert_eq!(sydney.format(), "33.868800° S, 151.209300° E");

        let nyc = GeoPoint::new(40.7128, -74.0060);
        assert_eq!(nyc.format(), "40.712800° N, 74.006000° W");
    }

    #[test]
    fn query_value_is_comma_separated() {
        let point = GeoPoint::new(28.6, 77.2);
        assert_eq!(point.to_query_value(), "28.6,77.2");
    }
}
