// SPDX-License-Identifier: MPL-2.0
//! Place details, autocomplete and photo port definitions.

use crate::domain::error::ResolutionError;
use crate::domain::place::{
    AutocompleteStatus, PhotoReference, PhotoReferenceList, PlaceIdentifier, Suggestion,
};
use async_trait::async_trait;
use bytes::Bytes;

/// Port for looking up the photos attached to a place.
#[async_trait]
pub trait PlaceDetailsGateway: Send + Sync {
    /// Returns the photo references of `id`, in provider order.
    ///
    /// A place without photos yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::DetailsService`] when the lookup fails.
    async fn fetch_photo_references(
        &self,
        id: &PlaceIdentifier,
    ) -> Result<PhotoReferenceList, ResolutionError>;
}

/// Status and ranked suggestions for one autocomplete input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Predictions {
    pub status: AutocompleteStatus,
    pub suggestions: Vec<Suggestion>,
}

impl Predictions {
    #[must_use]
    pub fn ok(suggestions: Vec<Suggestion>) -> Self {
        Self {
            status: AutocompleteStatus::Ok,
            suggestions,
        }
    }

    #[must_use]
    pub fn zero_results() -> Self {
        Self {
            status: AutocompleteStatus::ZeroResults,
            suggestions: Vec::new(),
        }
    }

    #[must_use]
    pub fn failed(status: impl Into<String>) -> Self {
        Self {
            status: AutocompleteStatus::Failed(status.into()),
            suggestions: Vec::new(),
        }
    }
}

/// Port for address suggestions while the user types.
///
/// Autocomplete never fails hard: provider problems are reported through
/// [`Predictions::status`].
#[async_trait]
pub trait AutocompleteGateway: Send + Sync {
    async fn suggest(&self, input: &str) -> Predictions;
}

/// Port for downloading the image behind a photo reference.
#[async_trait]
pub trait PhotoGateway: Send + Sync {
    /// Downloads the encoded image, scaled by the provider to `max_width`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::PhotoService`] when the download fails.
    async fn fetch_photo(
        &self,
        reference: &PhotoReference,
        max_width: u32,
    ) -> Result<Bytes, ResolutionError>;
}
