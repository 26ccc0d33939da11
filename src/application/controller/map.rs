// SPDX-License-Identifier: MPL-2.0
//! Map click controller.
//!
//! Drives the [`ClickPipeline`] and hands back owned futures for every
//! provider call, so the UI layer only has to wrap them in tasks.

use super::pipeline::{ClickPipeline, PipelineStep, PipelineToken};
use crate::application::port::{GatewayFuture, GeocodeGateway, PhotoGateway, PlaceDetailsGateway};
use crate::domain::error::ResolutionError;
use crate::domain::geo::GeoPoint;
use crate::domain::place::{PhotoReference, PhotoReferenceList, PlaceIdentifier, PlaceState};
use bytes::Bytes;
use futures_util::FutureExt;
use std::sync::Arc;

/// Outcome of feeding a reverse-geocoding completion.
pub enum GeocodeOutcome {
    /// Await this details lookup next, under the same token.
    FetchDetails(GatewayFuture<PhotoReferenceList>),
    Failed(ResolutionError),
    Discarded,
}

/// Outcome of feeding a place-details completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsOutcome {
    Settled,
    Failed(ResolutionError),
    Discarded,
}

impl std::fmt::Debug for GeocodeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FetchDetails(_) => f.write_str("FetchDetails(..)"),
            Self::Failed(err) => f.debug_tuple("Failed").field(err).finish(),
            Self::Discarded => f.write_str("Discarded"),
        }
    }
}

/// One photo download, tagged with its position in the current photo list.
pub struct PhotoDownload {
    pub index: usize,
    pub reference: PhotoReference,
    pub future: GatewayFuture<Bytes>,
}

pub struct MapController {
    geocoder: Arc<dyn GeocodeGateway>,
    details: Arc<dyn PlaceDetailsGateway>,
    photos: Arc<dyn PhotoGateway>,
    pipeline: ClickPipeline,
}

impl MapController {
    pub fn new(
        geocoder: Arc<dyn GeocodeGateway>,
        details: Arc<dyn PlaceDetailsGateway>,
        photos: Arc<dyn PhotoGateway>,
    ) -> Self {
        Self {
            geocoder,
            details,
            photos,
            pipeline: ClickPipeline::new(),
        }
    }

    /// Handles a click on the map: moves the marker and starts reverse
    /// geocoding for `point`.
    pub fn click(
        &mut self,
        point: GeoPoint,
        state: &mut PlaceState,
    ) -> (PipelineToken, GatewayFuture<PlaceIdentifier>) {
        let token = self.pipeline.begin(point, state);
        tracing::debug!(%token, %point, "map click");

        let geocoder = Arc::clone(&self.geocoder);
        let future = async move { geocoder.reverse_geocode(point).await }.boxed();
        (token, future)
    }

    pub fn geocoded(
        &mut self,
        token: PipelineToken,
        result: Result<PlaceIdentifier, ResolutionError>,
    ) -> GeocodeOutcome {
        match self.pipeline.on_geocoded(token, result) {
            PipelineStep::FetchDetails(id) => {
                tracing::debug!(%token, place = %id, "reverse geocoded");
                let details = Arc::clone(&self.details);
                GeocodeOutcome::FetchDetails(
                    async move { details.fetch_photo_references(&id).await }.boxed(),
                )
            }
            PipelineStep::Failed(err) => {
                tracing::warn!(%token, error = %err, "reverse geocoding failed");
                GeocodeOutcome::Failed(err)
            }
            PipelineStep::Settled | PipelineStep::Stale => {
                tracing::debug!(%token, "discarding stale geocode result");
                GeocodeOutcome::Discarded
            }
        }
    }

    pub fn details_resolved(
        &mut self,
        token: PipelineToken,
        result: Result<PhotoReferenceList, ResolutionError>,
        state: &mut PlaceState,
    ) -> DetailsOutcome {
        match self.pipeline.on_details(token, result, state) {
            PipelineStep::Settled => {
                tracing::info!(%token, photos = state.photos.len(), "place photos updated");
                DetailsOutcome::Settled
            }
            PipelineStep::Failed(err) => {
                tracing::warn!(%token, error = %err, "place details failed");
                DetailsOutcome::Failed(err)
            }
            PipelineStep::FetchDetails(_) | PipelineStep::Stale => {
                tracing::debug!(%token, "discarding stale details result");
                DetailsOutcome::Discarded
            }
        }
    }

    /// Builds one download per photo reference, in list order.
    pub fn photo_downloads(&self, list: &PhotoReferenceList, max_width: u32) -> Vec<PhotoDownload> {
        list.iter()
            .enumerate()
            .map(|(index, reference)| {
                let photos = Arc::clone(&self.photos);
                let owned = reference.clone();
                PhotoDownload {
                    index,
                    reference: reference.clone(),
                    future: async move { photos.fetch_photo(&owned, max_width).await }.boxed(),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn is_current(&self, token: PipelineToken) -> bool {
        self.pipeline.is_current(token)
    }

    #[must_use]
    pub fn pipeline(&self) -> &ClickPipeline {
        &self.pipeline
    }
}

impl std::fmt::Debug for MapController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapController")
            .field("pipeline", &self.pipeline)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubProvider {
        places: HashMap<String, Vec<&'static str>>,
        details: HashMap<String, Result<Vec<&'static str>, ResolutionError>>,
        photo_requests: Mutex<Vec<(String, u32)>>,
    }

    fn key(point: GeoPoint) -> String {
        point.to_query_value()
    }

    #[async_trait]
    impl GeocodeGateway for StubProvider {
        async fn reverse_geocode(
            &self,
            point: GeoPoint,
        ) -> Result<PlaceIdentifier, ResolutionError> {
            let ranked = self.places.get(&key(point)).cloned().unwrap_or_default();
            crate::application::port::select_reverse_result(
                ranked.into_iter().map(PlaceIdentifier::new),
            )
        }

        async fn forward_geocode(&self, _address: &str) -> Result<GeoPoint, ResolutionError> {
            Err(ResolutionError::NoResults)
        }
    }

    #[async_trait]
    impl PlaceDetailsGateway for StubProvider {
        async fn fetch_photo_references(
            &self,
            id: &PlaceIdentifier,
        ) -> Result<PhotoReferenceList, ResolutionError> {
            match self.details.get(id.as_str()) {
                Some(Ok(refs)) => Ok(refs.iter().copied().map(PhotoReference::new).collect()),
                Some(Err(err)) => Err(err.clone()),
                None => Ok(PhotoReferenceList::default()),
            }
        }
    }

    #[async_trait]
    impl PhotoGateway for StubProvider {
        async fn fetch_photo(
            &self,
            reference: &PhotoReference,
            max_width: u32,
        ) -> Result<Bytes, ResolutionError> {
            self.photo_requests
                .lock()
                .unwrap()
                .push((reference.as_str().to_string(), max_width));
            Ok(Bytes::from(reference.as_str().to_string()))
        }
    }

    fn controller(provider: StubProvider) -> MapController {
        let provider = Arc::new(provider);
        MapController::new(provider.clone(), provider.clone(), provider)
    }

    #[tokio::test]
    async fn click_resolves_second_ranked_place_photos() {
        let delhi = GeoPoint::new(28.6, 77.2);
        let mut provider = StubProvider::default();
        provider
            .places
            .insert(key(delhi), vec!["street", "P1", "country"]);
        provider
            .details
            .insert("P1".into(), Ok(vec!["ref-A", "ref-B"]));
        let mut map = controller(provider);
        let mut state = PlaceState::new(GeoPoint::new(0.0, 0.0));

        let (token, geocode) = map.click(delhi, &mut state);
        assert_eq!(state.marker, delhi);

        let details = match map.geocoded(token, geocode.await) {
            GeocodeOutcome::FetchDetails(future) => future,
            other => panic!("unexpected outcome {other:?}"),
        };
        let outcome = map.details_resolved(token, details.await, &mut state);

        assert_eq!(outcome, DetailsOutcome::Settled);
        let refs: Vec<_> = state.photos.iter().map(PhotoReference::as_str).collect();
        assert_eq!(refs, vec!["ref-A", "ref-B"]);
    }

    #[tokio::test]
    async fn single_result_click_fails_with_no_results() {
        let ocean = GeoPoint::new(0.0, -30.0);
        let mut provider = StubProvider::default();
        provider.places.insert(key(ocean), vec!["only"]);
        let mut map = controller(provider);
        let mut state = PlaceState::new(GeoPoint::new(0.0, 0.0));
        state.photos = [PhotoReference::new("kept")].into_iter().collect();

        let (token, geocode) = map.click(ocean, &mut state);
        let outcome = map.geocoded(token, geocode.await);

        assert!(matches!(
            outcome,
            GeocodeOutcome::Failed(ResolutionError::NoResults)
        ));
        assert_eq!(state.photos.len(), 1);
    }

    #[tokio::test]
    async fn details_failure_is_reported_and_photos_kept() {
        let point = GeoPoint::new(10.0, 10.0);
        let mut provider = StubProvider::default();
        provider.places.insert(key(point), vec!["a", "P9"]);
        provider.details.insert(
            "P9".into(),
            Err(ResolutionError::details_service("NOT_FOUND")),
        );
        let mut map = controller(provider);
        let mut state = PlaceState::new(GeoPoint::new(0.0, 0.0));
        state.photos = [PhotoReference::new("kept")].into_iter().collect();

        let (token, geocode) = map.click(point, &mut state);
        let GeocodeOutcome::FetchDetails(details) = map.geocoded(token, geocode.await) else {
            panic!("expected details lookup");
        };
        let outcome = map.details_resolved(token, details.await, &mut state);

        assert_eq!(
            outcome,
            DetailsOutcome::Failed(ResolutionError::details_service("NOT_FOUND"))
        );
        assert_eq!(state.photos.as_slice()[0].as_str(), "kept");
    }

    #[tokio::test]
    async fn photo_downloads_follow_list_order_and_width() {
        let map = controller(StubProvider::default());
        let list: PhotoReferenceList = ["a", "b", "c"].into_iter().map(PhotoReference::new).collect();

        let downloads = map.photo_downloads(&list, 400);
        assert_eq!(downloads.len(), 3);

        let mut bodies = Vec::new();
        for download in downloads {
            bodies.push((download.index, download.future.await.unwrap()));
        }
        assert_eq!(bodies[2], (2, Bytes::from_static(b"c")));
    }
}
