// SPDX-License-Identifier: MPL-2.0
//! Geocoding port definition.
//!
//! This module defines the [`GeocodeGateway`] trait and the ranking policy
//! every adapter applies to reverse-geocoding results.

use crate::domain::error::ResolutionError;
use crate::domain::geo::GeoPoint;
use crate::domain::place::PlaceIdentifier;
use async_trait::async_trait;

/// Zero-based rank of the reverse-geocoding result whose place is used.
///
/// The provider ranks the most specific match first (street address, plus
/// code). The next entry is a broader administrative area, which has far
/// better photo coverage.
pub const REVERSE_GEOCODE_RANK: usize = 1;

/// Picks the place identifier from a ranked reverse-geocoding result list.
///
/// # Errors
///
/// Returns [`ResolutionError::NoResults`] when the list has fewer than
/// `REVERSE_GEOCODE_RANK + 1` entries.
pub fn select_reverse_result(
    ranked: impl IntoIterator<Item = PlaceIdentifier>,
) -> Result<PlaceIdentifier, ResolutionError> {
    ranked
        .into_iter()
        .nth(REVERSE_GEOCODE_RANK)
        .ok_or(ResolutionError::NoResults)
}

/// Picks the top entry of a ranked forward-geocoding result list.
///
/// Lower-ranked entries are never used, even when the top one turns out to
/// be unusable.
///
/// # Errors
///
/// Returns [`ResolutionError::NoResults`] when the list is empty.
pub fn select_forward_result<T>(ranked: impl IntoIterator<Item = T>) -> Result<T, ResolutionError> {
    ranked.into_iter().next().ok_or(ResolutionError::NoResults)
}

/// Port for converting between coordinates and places.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: controllers hold them behind an
/// `Arc` and call them from futures running on the async runtime.
#[async_trait]
pub trait GeocodeGateway: Send + Sync {
    /// Resolves a point to the identifier of the place at
    /// [`REVERSE_GEOCODE_RANK`] in the provider ranking.
    ///
    /// # Errors
    ///
    /// - [`ResolutionError::NoResults`] if the provider found nothing or
    ///   fewer than two ranked entries
    /// - [`ResolutionError::GeocodeService`] for transport or provider errors
    async fn reverse_geocode(&self, point: GeoPoint) -> Result<PlaceIdentifier, ResolutionError>;

    /// Resolves free-text address to the location of the top-ranked result.
    ///
    /// # Errors
    ///
    /// - [`ResolutionError::NoResults`] if the provider found nothing
    /// - [`ResolutionError::GeocodeService`] for transport or provider errors
    async fn forward_geocode(&self, address: &str) -> Result<GeoPoint, ResolutionError>;
}
