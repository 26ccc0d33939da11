// SPDX-License-Identifier: MPL-2.0
//! Test helpers for float comparisons.
//!
//! Re-exports the `approx` assertion macro with the tolerances the map math
//! is checked against.

pub use approx::assert_abs_diff_eq;

/// Tolerance for latitude/longitude values, in degrees (about 0.1 m).
pub const COORD_EPSILON: f64 = 1e-6;

/// Tolerance for viewport pixel positions.
pub const PIXEL_EPSILON: f32 = 1e-3;
