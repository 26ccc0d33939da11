// SPDX-License-Identifier: MPL-2.0
//! Serde models for the Google Maps Platform web service responses.
//!
//! Only the fields the adapters read are modelled. Every collection defaults
//! to empty so a missing array is never a parse error.

use serde::Deserialize;

/// Provider status values the adapters act on.
pub mod status {
    pub const OK: &str = "OK";
    pub const ZERO_RESULTS: &str = "ZERO_RESULTS";
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const INVALID_RESPONSE: &str = "INVALID_RESPONSE";
}

// ---------------------------------------------------------------------------
// Geocoding
// ---------------------------------------------------------------------------

/// Body of `geocode/json`.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub formatted_address: Option<String>,
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

// ---------------------------------------------------------------------------
// Place details
// ---------------------------------------------------------------------------

/// Body of `place/details/json` requested with `fields=photos`.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailsResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<DetailsResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailsResult {
    /// Absent when the place has no photos.
    #[serde(default)]
    pub photos: Option<Vec<PhotoEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoEntry {
    pub photo_reference: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl DetailsResponse {
    /// Photo references in provider order; empty when none are present.
    pub fn photo_references(self) -> Vec<String> {
        self.result
            .and_then(|result| result.photos)
            .unwrap_or_default()
            .into_iter()
            .map(|photo| photo.photo_reference)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Autocomplete
// ---------------------------------------------------------------------------

/// Body of `place/autocomplete/json`.
#[derive(Debug, Clone, Deserialize)]
pub struct AutocompleteResponse {
    pub status: String,
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    pub description: String,
    #[serde(default)]
    pub place_id: Option<String>,
}
