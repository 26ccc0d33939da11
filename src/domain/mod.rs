// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types free of UI and network concerns.
//!
//! This module contains pure domain types, value objects, and business rules.
//! The only external crate it touches is `serde`, so [`GeoPoint`](geo::GeoPoint)
//! can be read straight from the config file.
//!
//! # Modules
//!
//! - [`error`]: Resolution failures ([`ResolutionError`](error::ResolutionError))
//! - [`geo`]: Geographic types ([`GeoPoint`](geo::GeoPoint), [`Camera`](geo::Camera),
//!   [`ZoomLevel`](geo::ZoomLevel)) and the Web-Mercator [`projection`](geo::projection)
//! - [`place`]: Place types ([`PlaceIdentifier`](place::PlaceIdentifier),
//!   [`PhotoReferenceList`](place::PhotoReferenceList), [`PlaceState`](place::PlaceState))

pub mod error;
pub mod geo;
pub mod place;
