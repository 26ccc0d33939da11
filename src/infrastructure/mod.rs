// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`google`]: Geocoding, place details, autocomplete and photos via the
//!   Google Maps Platform web services
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - Provider failures are converted to domain errors at this boundary

pub mod google;

pub use google::{GoogleMapsClient, GoogleMapsSettings};
