// SPDX-License-Identifier: MPL-2.0
//! Search bar controller: autocomplete input state and suggestion selection.
//!
//! Search failures are logged only. Unlike the click path they never raise a
//! notice, and they leave the marker and camera untouched.

use crate::application::port::{AutocompleteGateway, GatewayFuture, GeocodeGateway, Predictions};
use crate::domain::error::ResolutionError;
use crate::domain::geo::{Camera, GeoPoint, ZoomLevel};
use crate::domain::place::{AutocompleteStatus, PlaceState, Suggestion};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::sync::Arc;

/// Sequence number of an autocomplete or selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchRequest(u64);

/// Result of applying a forward-geocoding completion.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Camera and marker moved to this point.
    Moved(GeoPoint),
    /// Logged and ignored.
    Failed(ResolutionError),
    /// A newer selection superseded this one.
    Discarded,
}

pub struct SearchController {
    geocoder: Arc<dyn GeocodeGateway>,
    autocomplete: Arc<dyn AutocompleteGateway>,
    value: String,
    status: AutocompleteStatus,
    suggestions: Vec<Suggestion>,
    autocomplete_seq: u64,
    selection_seq: u64,
    search_zoom: ZoomLevel,
}

impl SearchController {
    pub fn new(
        geocoder: Arc<dyn GeocodeGateway>,
        autocomplete: Arc<dyn AutocompleteGateway>,
        search_zoom: ZoomLevel,
    ) -> Self {
        Self {
            geocoder,
            autocomplete,
            value: String::new(),
            status: AutocompleteStatus::Idle,
            suggestions: Vec::new(),
            autocomplete_seq: 0,
            selection_seq: 0,
            search_zoom,
        }
    }

    /// Updates the input text and starts an autocomplete request for it.
    ///
    /// Blank input clears the suggestions without contacting the provider.
    pub fn input_changed(
        &mut self,
        text: String,
    ) -> Option<(SearchRequest, BoxFuture<'static, Predictions>)> {
        self.value = text;
        self.autocomplete_seq += 1;
        let request = SearchRequest(self.autocomplete_seq);

        let query = self.value.trim().to_string();
        if query.is_empty() {
            self.status = AutocompleteStatus::Idle;
            self.suggestions.clear();
            return None;
        }

        let autocomplete = Arc::clone(&self.autocomplete);
        let future = async move { autocomplete.suggest(&query).await }.boxed();
        Some((request, future))
    }

    /// Stores suggestions if `request` is still the latest autocomplete request.
    pub fn suggestions_loaded(&mut self, request: SearchRequest, predictions: Predictions) -> bool {
        if request.0 != self.autocomplete_seq {
            tracing::debug!(?request, "discarding stale suggestions");
            return false;
        }

        if let AutocompleteStatus::Failed(status) = &predictions.status {
            tracing::warn!(%status, "autocomplete failed");
        }
        self.status = predictions.status;
        self.suggestions = predictions.suggestions;
        true
    }

    /// Handles the choice of a suggestion (or submitted free text).
    ///
    /// The input shows the chosen text and the suggestion list closes before
    /// forward geocoding starts.
    pub fn suggestion_selected(
        &mut self,
        address: String,
    ) -> (SearchRequest, GatewayFuture<GeoPoint>) {
        self.value = address.clone();
        self.suggestions.clear();
        self.status = AutocompleteStatus::Idle;
        // Any autocomplete response still in flight is now outdated.
        self.autocomplete_seq += 1;
        self.selection_seq += 1;
        let request = SearchRequest(self.selection_seq);
        tracing::info!(%address, "search selected");

        let geocoder = Arc::clone(&self.geocoder);
        let future = async move { geocoder.forward_geocode(&address).await }.boxed();
        (request, future)
    }

    /// Applies a forward-geocoding completion.
    ///
    /// On success the camera pans to the point at search zoom and the marker
    /// moves there. Photos are never touched.
    pub fn resolved(
        &mut self,
        request: SearchRequest,
        result: Result<GeoPoint, ResolutionError>,
        camera: &mut Camera,
        state: &mut PlaceState,
    ) -> SearchOutcome {
        if request.0 != self.selection_seq {
            tracing::debug!(?request, "discarding stale search result");
            return SearchOutcome::Discarded;
        }

        match result {
            Ok(point) => {
                camera.pan_to(point);
                camera.set_zoom(self.search_zoom);
                state.marker = point;
                tracing::info!(%point, "search resolved");
                SearchOutcome::Moved(point)
            }
            Err(err) => {
                tracing::warn!(error = %err, address = %self.value, "search failed");
                SearchOutcome::Failed(err)
            }
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn status(&self) -> &AutocompleteStatus {
        &self.status
    }

    /// Suggestions to display. Empty unless the last status was `Ok`.
    #[must_use]
    pub fn visible_suggestions(&self) -> &[Suggestion] {
        if self.status == AutocompleteStatus::Ok {
            &self.suggestions
        } else {
            &[]
        }
    }
}

impl std::fmt::Debug for SearchController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchController")
            .field("value", &self.value)
            .field("status", &self.status)
            .field("suggestions", &self.suggestions.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::place::{PhotoReference, PlaceIdentifier};
    use async_trait::async_trait;

    struct Stub;

    #[async_trait]
    impl GeocodeGateway for Stub {
        async fn reverse_geocode(&self, _: GeoPoint) -> Result<PlaceIdentifier, ResolutionError> {
            Err(ResolutionError::NoResults)
        }

        async fn forward_geocode(&self, address: &str) -> Result<GeoPoint, ResolutionError> {
            match address {
                "Connaught Place, Delhi" => Ok(GeoPoint::new(28.6315, 77.2167)),
                "nowhere" => Err(ResolutionError::NoResults),
                _ => Err(ResolutionError::geocode_service("OVER_QUERY_LIMIT")),
            }
        }
    }

    #[async_trait]
    impl AutocompleteGateway for Stub {
        async fn suggest(&self, input: &str) -> Predictions {
            if input == "zzz" {
                Predictions::zero_results()
            } else {
                Predictions::ok(vec![Suggestion::new(format!("{input}, Delhi"))])
            }
        }
    }

    fn controller() -> SearchController {
        SearchController::new(Arc::new(Stub), Arc::new(Stub), ZoomLevel::search())
    }

    fn camera() -> Camera {
        Camera::new(GeoPoint::new(28.613939, 77.209023), ZoomLevel::default())
    }

    #[tokio::test]
    async fn selection_pans_camera_and_moves_marker_only() {
        let mut search = controller();
        let mut camera = camera();
        let mut state = PlaceState::new(GeoPoint::new(0.0, 0.0));
        state.photos = [PhotoReference::new("kept")].into_iter().collect();

        let (request, future) = search.suggestion_selected("Connaught Place, Delhi".into());
        let outcome = search.resolved(request, future.await, &mut camera, &mut state);

        let target = GeoPoint::new(28.6315, 77.2167);
        assert_eq!(outcome, SearchOutcome::Moved(target));
        assert_eq!(camera.center(), target);
        assert_eq!(camera.zoom(), ZoomLevel::search());
        assert_eq!(state.marker, target);
        assert_eq!(state.photos.len(), 1);
        assert_eq!(search.value(), "Connaught Place, Delhi");
    }

    #[tokio::test]
    async fn failed_selection_leaves_state_unchanged() {
        let mut search = controller();
        let mut camera = camera();
        let before = camera;
        let mut state = PlaceState::new(GeoPoint::new(1.0, 2.0));

        let (request, future) = search.suggestion_selected("nowhere".into());
        let outcome = search.resolved(request, future.await, &mut camera, &mut state);

        assert_eq!(outcome, SearchOutcome::Failed(ResolutionError::NoResults));
        assert_eq!(camera, before);
        assert_eq!(state.marker, GeoPoint::new(1.0, 2.0));
    }

    #[tokio::test]
    async fn older_selection_is_discarded() {
        let mut search = controller();
        let mut camera = camera();
        let mut state = PlaceState::new(GeoPoint::new(0.0, 0.0));

        let (first, first_future) = search.suggestion_selected("Connaught Place, Delhi".into());
        let (second, second_future) = search.suggestion_selected("nowhere".into());

        let second_result = second_future.await;
        assert!(matches!(
            search.resolved(second, second_result, &mut camera, &mut state),
            SearchOutcome::Failed(_)
        ));
        assert_eq!(
            search.resolved(first, first_future.await, &mut camera, &mut state),
            SearchOutcome::Discarded
        );
        assert_eq!(state.marker, GeoPoint::new(0.0, 0.0));
    }

    #[tokio::test]
    async fn suggestions_only_visible_when_ok() {
        let mut search = controller();

        let (request, future) = search.input_changed("Conn".into()).unwrap();
        assert!(search.suggestions_loaded(request, future.await));
        assert_eq!(search.visible_suggestions().len(), 1);

        let (request, future) = search.input_changed("zzz".into()).unwrap();
        search.suggestions_loaded(request, future.await);
        assert_eq!(search.status(), &AutocompleteStatus::ZeroResults);
        assert!(search.visible_suggestions().is_empty());
    }

    #[tokio::test]
    async fn stale_suggestions_are_ignored() {
        let mut search = controller();

        let (old, old_future) = search.input_changed("Co".into()).unwrap();
        let (new, new_future) = search.input_changed("Conn".into()).unwrap();

        assert!(search.suggestions_loaded(new, new_future.await));
        assert!(!search.suggestions_loaded(old, old_future.await));
        assert_eq!(
            search.visible_suggestions()[0].description,
            "Conn, Delhi".to_string()
        );
    }

    #[test]
    fn blank_input_clears_without_request() {
        let mut search = controller();
        assert!(search.input_changed("   ".into()).is_none());
        assert_eq!(search.status(), &AutocompleteStatus::Idle);
        assert!(search.visible_suggestions().is_empty());
    }

    #[tokio::test]
    async fn selection_closes_suggestions() {
        let mut search = controller();
        let (request, future) = search.input_changed("Conn".into()).unwrap();
        search.suggestions_loaded(request, future.await);

        let _ = search.suggestion_selected("Conn, Delhi".into());
        assert!(search.visible_suggestions().is_empty());
    }
}
