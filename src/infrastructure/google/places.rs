// SPDX-License-Identifier: MPL-2.0
//! Place details, autocomplete and photo ports over the Places web service.

use super::client::GoogleMapsClient;
use super::models::{status, AutocompleteResponse, DetailsResponse};
use crate::application::port::{
    AutocompleteGateway, PhotoGateway, PlaceDetailsGateway, Predictions,
};
use crate::domain::error::ResolutionError;
use crate::domain::place::{PhotoReference, PhotoReferenceList, PlaceIdentifier, Suggestion};
use async_trait::async_trait;
use bytes::Bytes;

const DETAILS_PATH: &str = "place/details/json";
const AUTOCOMPLETE_PATH: &str = "place/autocomplete/json";
const PHOTO_PATH: &str = "place/photo";

#[async_trait]
impl PlaceDetailsGateway for GoogleMapsClient {
    async fn fetch_photo_references(
        &self,
        id: &PlaceIdentifier,
    ) -> Result<PhotoReferenceList, ResolutionError> {
        let response: DetailsResponse = self
            .get_json(
                DETAILS_PATH,
                &[
                    ("place_id", id.as_str().to_string()),
                    ("fields", "photos".to_string()),
                ],
            )
            .await
            .map_err(|err| ResolutionError::details_service(err.0))?;

        if response.status != status::OK {
            if let Some(message) = &response.error_message {
                tracing::warn!(status = %response.status, %message, "place details error");
            }
            return Err(ResolutionError::details_service(response.status));
        }

        Ok(response
            .photo_references()
            .into_iter()
            .map(PhotoReference::new)
            .collect())
    }
}

#[async_trait]
impl AutocompleteGateway for GoogleMapsClient {
    async fn suggest(&self, input: &str) -> Predictions {
        if input.trim().is_empty() {
            return Predictions::default();
        }

        let response: AutocompleteResponse = match self
            .get_json(AUTOCOMPLETE_PATH, &[("input", input.to_string())])
            .await
        {
            Ok(response) => response,
            Err(err) => return Predictions::failed(err.0),
        };

        match response.status.as_str() {
            status::OK => Predictions::ok(
                response
                    .predictions
                    .into_iter()
                    .map(|prediction| {
                        let suggestion = Suggestion::new(prediction.description);
                        match prediction.place_id {
                            Some(id) => suggestion.with_place_id(PlaceIdentifier::new(id)),
                            None => suggestion,
                        }
                    })
                    .collect(),
            ),
            status::ZERO_RESULTS => Predictions::zero_results(),
            other => Predictions::failed(other),
        }
    }
}

#[async_trait]
impl PhotoGateway for GoogleMapsClient {
    async fn fetch_photo(
        &self,
        reference: &PhotoReference,
        max_width: u32,
    ) -> Result<Bytes, ResolutionError> {
        let response = self
            .get(
                PHOTO_PATH,
                &[
                    ("maxwidth", max_width.to_string()),
                    ("photoreference", reference.as_str().to_string()),
                ],
            )
            .await
            .map_err(|err| ResolutionError::photo_service(err.0))?;

        response
            .bytes()
            .await
            .map_err(|err| ResolutionError::photo_service(err.to_string()))
    }
}
