// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter tests against a local mock of the Maps web services.

use place_lens::application::port::{
    AutocompleteGateway, GeocodeGateway, PhotoGateway, PlaceDetailsGateway,
};
use place_lens::domain::error::ResolutionError;
use place_lens::domain::geo::GeoPoint;
use place_lens::domain::place::{AutocompleteStatus, PhotoReference, PlaceIdentifier};
use place_lens::infrastructure::google::{GoogleMapsClient, GoogleMapsSettings};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "test-key";

async fn client_for(server: &MockServer) -> GoogleMapsClient {
    GoogleMapsClient::new(
        GoogleMapsSettings::new(KEY)
            .with_base_url(server.uri())
            .with_request_timeout(Duration::from_millis(500)),
    )
    .expect("client builds")
}

fn geocode_results(ids: &[&str]) -> serde_json::Value {
    let results: Vec<_> = ids
        .iter()
        .map(|id| {
            json!({
                "place_id": id,
                "geometry": { "location": { "lat": 28.6315, "lng": 77.2167 } }
            })
        })
        .collect();
    json!({ "status": "OK", "results": results })
}

#[tokio::test]
async fn reverse_geocode_selects_second_ranked_place() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("latlng", "28.6,77.2"))
        .and(query_param("key", KEY))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(geocode_results(&["first", "P1", "third"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let id = client
        .reverse_geocode(GeoPoint::new(28.6, 77.2))
        .await
        .unwrap();

    assert_eq!(id, PlaceIdentifier::new("P1"));
}

#[tokio::test]
async fn reverse_geocode_single_result_is_no_results() {
    let server = MockServer::start().await;
    Mock::given(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_results(&["only"])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.reverse_geocode(GeoPoint::new(0.0, -30.0)).await;

    assert_eq!(result, Err(ResolutionError::NoResults));
}

#[tokio::test]
async fn zero_results_status_is_no_results() {
    let server = MockServer::start().await;
    Mock::given(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ZERO_RESULTS" })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(
        client.reverse_geocode(GeoPoint::new(0.0, -30.0)).await,
        Err(ResolutionError::NoResults)
    );
    assert_eq!(
        client.forward_geocode("nowhere at all").await,
        Err(ResolutionError::NoResults)
    );
}

#[tokio::test]
async fn provider_error_status_is_carried() {
    let server = MockServer::start().await;
    Mock::given(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(
        client.reverse_geocode(GeoPoint::new(28.6, 77.2)).await,
        Err(ResolutionError::geocode_service("REQUEST_DENIED"))
    );
}

#[tokio::test]
async fn http_failure_becomes_service_error() {
    let server = MockServer::start().await;
    Mock::given(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(
        client.forward_geocode("Delhi").await,
        Err(ResolutionError::geocode_service("HTTP 503"))
    );
}

#[tokio::test]
async fn malformed_body_becomes_service_error() {
    let server = MockServer::start().await;
    Mock::given(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(
        client.forward_geocode("Delhi").await,
        Err(ResolutionError::geocode_service("INVALID_RESPONSE"))
    );
}

#[tokio::test]
async fn slow_provider_times_out() {
    let server = MockServer::start().await;
    Mock::given(path("/geocode/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(geocode_results(&["a", "b"]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(
        client.reverse_geocode(GeoPoint::new(28.6, 77.2)).await,
        Err(ResolutionError::geocode_service("TIMEOUT"))
    );
}

#[tokio::test]
async fn invalid_point_is_rejected_without_request() {
    let server = MockServer::start().await;
    Mock::given(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_results(&["a", "b"])))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(
        client.reverse_geocode(GeoPoint::new(f64::NAN, 77.2)).await,
        Err(ResolutionError::geocode_service("INVALID_REQUEST"))
    );
}

#[tokio::test]
async fn forward_geocode_uses_top_result() {
    let server = MockServer::start().await;
    Mock::given(path("/geocode/json"))
        .and(query_param("address", "Connaught Place, Delhi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [
                { "place_id": "CP", "geometry": { "location": { "lat": 28.6315, "lng": 77.2167 } } },
                { "place_id": "X", "geometry": { "location": { "lat": 1.0, "lng": 2.0 } } }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let point = client.forward_geocode("Connaught Place, Delhi").await.unwrap();

    assert_eq!(point, GeoPoint::new(28.6315, 77.2167));
}

#[tokio::test]
async fn forward_geocode_never_falls_back_to_lower_ranked_result() {
    let server = MockServer::start().await;
    Mock::given(path("/geocode/json"))
        .and(query_param("address", "Janpath"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [
                { "place_id": "TOP" },
                { "place_id": "SECOND", "geometry": { "location": { "lat": 1.0, "lng": 2.0 } } }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    assert_eq!(
        client.forward_geocode("Janpath").await,
        Err(ResolutionError::geocode_service("INVALID_RESPONSE"))
    );
}

#[tokio::test]
async fn details_return_photo_references_in_order() {
    let server = MockServer::start().await;
    Mock::given(path("/place/details/json"))
        .and(query_param("place_id", "P1"))
        .and(query_param("fields", "photos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "result": { "photos": [
                { "photo_reference": "ref-A" },
                { "photo_reference": "ref-B" }
            ] }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let photos = client
        .fetch_photo_references(&PlaceIdentifier::new("P1"))
        .await
        .unwrap();

    let refs: Vec<_> = photos.iter().map(PhotoReference::as_str).collect();
    assert_eq!(refs, vec!["ref-A", "ref-B"]);
}

#[tokio::test]
async fn details_without_photos_is_empty_not_error() {
    let server = MockServer::start().await;
    Mock::given(path("/place/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "result": {}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let photos = client
        .fetch_photo_references(&PlaceIdentifier::new("P1"))
        .await
        .unwrap();

    assert!(photos.is_empty());
}

#[tokio::test]
async fn details_non_ok_status_is_details_error() {
    let server = MockServer::start().await;
    Mock::given(path("/place/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "NOT_FOUND" })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(
        client
            .fetch_photo_references(&PlaceIdentifier::new("gone"))
            .await,
        Err(ResolutionError::details_service("NOT_FOUND"))
    );
}

#[tokio::test]
async fn autocomplete_maps_statuses() {
    let server = MockServer::start().await;
    Mock::given(path("/place/autocomplete/json"))
        .and(query_param("input", "Conn"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "predictions": [
                { "description": "Connaught Place, Delhi", "place_id": "CP" },
                { "description": "Connecticut, USA" }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(path("/place/autocomplete/json"))
        .and(query_param("input", "zzzz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ZERO_RESULTS" })))
        .mount(&server)
        .await;
    Mock::given(path("/place/autocomplete/json"))
        .and(query_param("input", "denied"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "REQUEST_DENIED" })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    let ok = client.suggest("Conn").await;
    assert_eq!(ok.status, AutocompleteStatus::Ok);
    assert_eq!(ok.suggestions.len(), 2);
    assert_eq!(ok.suggestions[0].place_id, Some(PlaceIdentifier::new("CP")));
    assert_eq!(ok.suggestions[1].place_id, None);

    let empty = client.suggest("zzzz").await;
    assert_eq!(empty.status, AutocompleteStatus::ZeroResults);
    assert!(empty.suggestions.is_empty());

    let denied = client.suggest("denied").await;
    assert_eq!(
        denied.status,
        AutocompleteStatus::Failed("REQUEST_DENIED".to_string())
    );
}

#[tokio::test]
async fn photo_download_returns_image_bytes() {
    let server = MockServer::start().await;
    Mock::given(path("/place/photo"))
        .and(query_param("maxwidth", "400"))
        .and(query_param("photoreference", "ref-A"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF]))
        .mount(&server)
        .await;
    Mock::given(path("/place/photo"))
        .and(query_param("photoreference", "expired"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    let bytes = client
        .fetch_photo(&PhotoReference::new("ref-A"), 400)
        .await
        .unwrap();
    assert_eq!(bytes.as_ref(), &[0xFF, 0xD8, 0xFF]);

    assert_eq!(
        client.fetch_photo(&PhotoReference::new("expired"), 400).await,
        Err(ResolutionError::photo_service("HTTP 404"))
    );
}
