//! HTTP provider clients against mocked Nominatim, Open-Meteo and Overpass

use serde_json::json;
use std::time::Duration;
use tourism_ai::config::{GeocodingConfig, PlacesConfig, WeatherConfig};
use tourism_ai::{
    Coordinate, Geocoder, NominatimGeocoder, OpenMeteoClient, OverpassClient, Outcome,
    PlacesProvider, WeatherProvider, WeatherReading,
};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BANGALORE: Coordinate = Coordinate {
    latitude: 12.9716,
    longitude: 77.5946,
};

fn geocoder(server: &MockServer) -> NominatimGeocoder {
    NominatimGeocoder::new(&GeocodingConfig {
        base_url: server.uri(),
        ..GeocodingConfig::default()
    })
    .unwrap()
}

fn weather_client(server: &MockServer) -> OpenMeteoClient {
    OpenMeteoClient::new(&WeatherConfig {
        base_url: server.uri(),
        ..WeatherConfig::default()
    })
    .unwrap()
}

fn overpass(server: &MockServer) -> OverpassClient {
    OverpassClient::new(&PlacesConfig {
        base_url: server.uri(),
        ..PlacesConfig::default()
    })
    .unwrap()
}

fn named(names: &[&str]) -> serde_json::Value {
    let elements: Vec<_> = names
        .iter()
        .map(|name| json!({"type": "node", "id": 1, "tags": {"name": name, "tourism": "attraction"}}))
        .collect();
    json!({ "elements": elements })
}

#[tokio::test]
async fn test_nominatim_resolves_place() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Bangalore"))
        .and(query_param("format", "json"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"lat": "12.9716", "lon": "77.5946", "display_name": "Bengaluru, Karnataka, India"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = geocoder(&server).resolve("Bangalore").await;

    assert_eq!(outcome, Outcome::Success(BANGALORE));
}

#[tokio::test]
async fn test_nominatim_empty_result_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let geocoder = geocoder(&server);
    assert_eq!(geocoder.resolve("Nonexistentplaceabc123").await, Outcome::NotFound);
    assert!(!geocoder.exists("Nonexistentplaceabc123").await);
}

#[tokio::test]
async fn test_nominatim_server_error_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert_eq!(geocoder(&server).resolve("Paris").await, Outcome::NotFound);
}

#[tokio::test]
async fn test_nominatim_skips_blank_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    assert_eq!(geocoder(&server).resolve("   ").await, Outcome::NotFound);
}

#[tokio::test]
async fn test_open_meteo_current_conditions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "12.9716"))
        .and(query_param("longitude", "77.5946"))
        .and(query_param(
            "current",
            "temperature_2m,precipitation_probability,weather_code",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "latitude": 12.97,
            "longitude": 77.59,
            "current": {
                "time": "2026-10-16T12:00",
                "temperature_2m": 26.4,
                "precipitation_probability": 40,
                "weather_code": 61
            }
        })))
        .mount(&server)
        .await;

    let outcome = weather_client(&server).get_weather(BANGALORE).await;

    assert_eq!(outcome, Outcome::Success(WeatherReading::new(Some(26.4), 40, 61)));
}

#[tokio::test]
async fn test_open_meteo_missing_fields_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current": {"temperature_2m": null}
        })))
        .mount(&server)
        .await;

    let outcome = weather_client(&server).get_weather(BANGALORE).await;

    assert_eq!(outcome, Outcome::Success(WeatherReading::new(None, 0, 0)));
}

#[tokio::test]
async fn test_open_meteo_without_current_block_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"latitude": 12.97})))
        .mount(&server)
        .await;

    assert_eq!(
        weather_client(&server).get_weather(BANGALORE).await,
        Outcome::Unavailable
    );
}

#[tokio::test]
async fn test_open_meteo_error_status_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    assert_eq!(
        weather_client(&server).get_weather(BANGALORE).await,
        Outcome::Unavailable
    );
}

#[tokio::test]
async fn test_overpass_primary_fills_limit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/interpreter"))
        .and(body_string_contains("leisure"))
        .respond_with(ResponseTemplate::new(200).set_body_json(named(&[
            "Lalbagh",
            "Cubbon Park",
            "Bangalore Palace",
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/interpreter"))
        .and(body_string_contains("relation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(named(&["Unused"])))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = overpass(&server).get_attractions(BANGALORE, 2).await;

    let list = outcome.success().unwrap();
    assert_eq!(list.names(), ["Lalbagh", "Cubbon Park"]);
}

#[tokio::test]
async fn test_overpass_fallback_tops_up_without_duplicates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/interpreter"))
        .and(body_string_contains("leisure"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "elements": [
                {"type": "node", "id": 1, "tags": {"name": "Lalbagh", "leisure": "park"}},
                {"type": "way", "id": 2, "tags": {"tourism": "museum"}},
                {"type": "node", "id": 3}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/interpreter"))
        .and(body_string_contains("relation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(named(&[
            "Lalbagh",
            "Tipu Sultan's Summer Palace",
            "ISKCON Temple",
            "Vidhana Soudha",
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = overpass(&server).get_attractions(BANGALORE, 4).await;

    let list = outcome.success().unwrap();
    assert_eq!(
        list.names(),
        ["Lalbagh", "museum", "Tipu Sultan's Summer Palace", "ISKCON Temple"]
    );
}

#[tokio::test]
async fn test_overpass_nothing_nearby_is_empty_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"elements": []})))
        .mount(&server)
        .await;

    let outcome = overpass(&server).get_attractions(BANGALORE, 5).await;

    assert!(outcome.success().unwrap().is_empty());
}

#[tokio::test]
async fn test_overpass_failure_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(504))
        .mount(&server)
        .await;

    assert_eq!(
        overpass(&server).get_attractions(BANGALORE, 5).await,
        Outcome::Unavailable
    );
}

#[tokio::test]
async fn test_overpass_keeps_primary_when_fallback_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/interpreter"))
        .and(body_string_contains("leisure"))
        .respond_with(ResponseTemplate::new(200).set_body_json(named(&["Cubbon Park"])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/interpreter"))
        .and(body_string_contains("relation"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let outcome = overpass(&server).get_attractions(BANGALORE, 5).await;

    assert_eq!(outcome.success().unwrap().names(), ["Cubbon Park"]);
}

#[tokio::test]
async fn test_nominatim_timeout_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"lat": "48.8566", "lon": "2.3522"}]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let geocoder = NominatimGeocoder::new(&GeocodingConfig {
        base_url: server.uri(),
        timeout_seconds: 1,
        ..GeocodingConfig::default()
    })
    .unwrap();

    assert_eq!(geocoder.resolve("Paris").await, Outcome::NotFound);
}

#[tokio::test]
async fn test_open_meteo_timeout_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"current": {"temperature_2m": 20.0}}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = OpenMeteoClient::new(&WeatherConfig {
        base_url: server.uri(),
        timeout_seconds: 1,
        ..WeatherConfig::default()
    })
    .unwrap();

    assert_eq!(client.get_weather(BANGALORE).await, Outcome::Unavailable);
}
