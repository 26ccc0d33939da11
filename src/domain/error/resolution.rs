// SPDX-License-Identifier: MPL-2.0
//! Failures of the place-resolution pipeline.

use std::fmt;

/// Terminal failure of one geocoding, details or photo request.
///
/// None of these are retried automatically. On the click path they become a
/// blocking notice; on the search path they are only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// Geocoding or search yielded nothing usable.
    NoResults,

    /// The geocoding provider failed; carries the provider status.
    GeocodeService { status: String },

    /// The place-details lookup failed; carries the provider status.
    DetailsService { status: String },

    /// Downloading a photo image failed; carries the provider status.
    PhotoService { status: String },
}

impl ResolutionError {
    pub fn geocode_service(status: impl Into<String>) -> Self {
        Self::GeocodeService {
            status: status.into(),
        }
    }

    pub fn details_service(status: impl Into<String>) -> Self {
        Self::DetailsService {
            status: status.into(),
        }
    }

    pub fn photo_service(status: impl Into<String>) -> Self {
        Self::PhotoService {
            status: status.into(),
        }
    }

    /// Returns the i18n message key for the user-facing notice.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::NoResults => "notice-no-results",
            Self::GeocodeService { .. } => "notice-geocode-failed",
            Self::DetailsService { .. } => "notice-details-failed",
            Self::PhotoService { .. } => "notice-photo-failed",
        }
    }

    /// Returns the provider status carried by service errors.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        match self {
            Self::NoResults => None,
            Self::GeocodeService { status }
            | Self::DetailsService { status }
            | Self::PhotoService { status } => Some(status),
        }
    }
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoResults => write!(f, "No results found"),
            Self::GeocodeService { status } => write!(f, "Geocoder failed due to: {status}"),
            Self::DetailsService { status } => {
                write!(f, "Place details lookup failed due to: {status}")
            }
            Self::PhotoService { status } => write!(f, "Photo download failed due to: {status}"),
        }
    }
}

impl std::error::Error for ResolutionError {}
