// SPDX-License-Identifier: MPL-2.0
//! [`GeocodeGateway`] over the `geocode/json` endpoint.

use super::client::GoogleMapsClient;
use super::models::{status, GeocodeResponse};
use crate::application::port::{select_forward_result, select_reverse_result, GeocodeGateway};
use crate::domain::error::ResolutionError;
use crate::domain::geo::GeoPoint;
use crate::domain::place::PlaceIdentifier;
use async_trait::async_trait;

const PATH: &str = "geocode/json";

impl GoogleMapsClient {
    async fn geocode(&self, query: (&str, String)) -> Result<GeocodeResponse, ResolutionError> {
        let response: GeocodeResponse = self
            .get_json(PATH, &[query])
            .await
            .map_err(|err| ResolutionError::geocode_service(err.0))?;

        match response.status.as_str() {
            status::OK => Ok(response),
            status::ZERO_RESULTS => Err(ResolutionError::NoResults),
            other => {
                if let Some(message) = &response.error_message {
                    tracing::warn!(status = other, %message, "geocoder error");
                }
                Err(ResolutionError::geocode_service(other))
            }
        }
    }
}

#[async_trait]
impl GeocodeGateway for GoogleMapsClient {
    async fn reverse_geocode(&self, point: GeoPoint) -> Result<PlaceIdentifier, ResolutionError> {
        if !point.is_valid() {
            return Err(ResolutionError::geocode_service(status::INVALID_REQUEST));
        }

        let response = self.geocode(("latlng", point.to_query_value())).await?;
        let id = select_reverse_result(
            response
                .results
                .into_iter()
                .map(|result| PlaceIdentifier::new(result.place_id)),
        )?;

        if id.as_str().is_empty() {
            return Err(ResolutionError::NoResults);
        }
        Ok(id)
    }

    async fn forward_geocode(&self, address: &str) -> Result<GeoPoint, ResolutionError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ResolutionError::NoResults);
        }

        let response = self.geocode(("address", address.to_string())).await?;
        let top = select_forward_result(response.results)?;
        let geometry = top
            .geometry
            .ok_or_else(|| ResolutionError::geocode_service(status::INVALID_RESPONSE))?;

        Ok(GeoPoint::new(geometry.location.lat, geometry.location.lng))
    }
}
