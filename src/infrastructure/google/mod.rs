// SPDX-License-Identifier: MPL-2.0
//! Google Maps Platform adapter.
//!
//! [`GoogleMapsClient`] implements [`GeocodeGateway`], [`PlaceDetailsGateway`],
//! [`AutocompleteGateway`] and [`PhotoGateway`] over the JSON web services.
//! Provider statuses map onto [`ResolutionError`]:
//!
//! | Status | Result |
//! |--------|--------|
//! | `OK` | success |
//! | `ZERO_RESULTS` | `NoResults` (autocomplete: empty suggestions) |
//! | anything else, HTTP errors, timeouts | service error carrying the status |
//!
//! [`GeocodeGateway`]: crate::application::port::GeocodeGateway
//! [`PlaceDetailsGateway`]: crate::application::port::PlaceDetailsGateway
//! [`AutocompleteGateway`]: crate::application::port::AutocompleteGateway
//! [`PhotoGateway`]: crate::application::port::PhotoGateway
//! [`ResolutionError`]: crate::domain::error::ResolutionError

mod client;
mod geocode;
pub mod models;
mod places;

pub use client::{GoogleMapsClient, GoogleMapsSettings, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT};
