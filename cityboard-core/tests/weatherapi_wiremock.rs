//! Lookup provider and board tests against a mock HTTP server.
//!
//! These verify the wire behavior of the WeatherAPI client (query
//! parameters, status handling, strict body parsing) and the board's
//! end-to-end search flow on top of it.

use cityboard_core::{Board, LOOKUP_FAILED_MSG, LookupError, WeatherApiProvider, WeatherLookup};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Current-conditions body in the shape the service actually returns.
fn sample_city_response() -> serde_json::Value {
    serde_json::json!({
        "location": {
            "name": "Paris",
            "region": "Ile-de-France",
            "country": "France"
        },
        "current": {
            "temp_c": 18.0,
            "condition": {
                "text": "Cloudy",
                "icon": "//cdn.weatherapi.com/weather/64x64/day/119.png",
                "code": 1006
            },
            "humidity": 60,
            "wind_kph": 10.0,
            "feelslike_c": 17.2
        }
    })
}

fn provider_for(server: &MockServer) -> WeatherApiProvider {
    WeatherApiProvider::with_base_url("test-key".to_string(), server.uri())
}

async fn mount_current(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(response)
        .mount(server)
        .await;
}

// ============================================================================
// Provider wire behavior
// ============================================================================

#[tokio::test]
async fn current_parses_a_success_body() {
    let server = MockServer::start().await;
    mount_current(
        &server,
        ResponseTemplate::new(200).set_body_json(sample_city_response()),
    )
    .await;

    let provider = provider_for(&server);
    let city = provider
        .current("Paris")
        .await
        .expect("success body should parse");

    assert_eq!(city.location.name, "Paris");
    assert_eq!(city.location.country, "France");
    assert_eq!(city.location.region.as_deref(), Some("Ile-de-France"));
    assert!((city.current.temp_c - 18.0).abs() < f64::EPSILON);
    assert_eq!(city.current.humidity, 60);
    assert_eq!(city.current.feelslike_c, Some(17.2));
    assert!(city.current.uv.is_none());
}

#[tokio::test]
async fn request_carries_key_and_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .and(query_param("key", "test-key"))
        .and(query_param("q", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_city_response()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider.current("New York").await;

    assert!(result.is_ok(), "expected success, got: {result:?}");
}

#[tokio::test]
async fn non_success_status_is_a_status_error() {
    let server = MockServer::start().await;
    mount_current(
        &server,
        ResponseTemplate::new(400)
            .set_body_string(r#"{"error":{"code":1006,"message":"No matching location found."}}"#),
    )
    .await;

    let provider = provider_for(&server);
    let result = provider.current("Atlantis").await;

    assert!(
        matches!(result, Err(LookupError::Status { status, .. }) if status.as_u16() == 400),
        "expected Status error, got: {result:?}"
    );
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(200).set_body_string("not json")).await;

    let provider = provider_for(&server);
    let result = provider.current("Paris").await;

    assert!(
        matches!(result, Err(LookupError::Parse(_))),
        "expected Parse error, got: {result:?}"
    );
}

#[tokio::test]
async fn body_missing_required_fields_is_a_parse_error() {
    let server = MockServer::start().await;
    mount_current(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({"location": {"name": "Paris"}})),
    )
    .await;

    let provider = provider_for(&server);
    let result = provider.current("Paris").await;

    assert!(
        matches!(result, Err(LookupError::Parse(_))),
        "expected Parse error, got: {result:?}"
    );
}

// ============================================================================
// Board end-to-end
// ============================================================================

#[tokio::test]
async fn board_search_adds_a_card() {
    let server = MockServer::start().await;
    mount_current(
        &server,
        ResponseTemplate::new(200).set_body_json(sample_city_response()),
    )
    .await;

    let provider = provider_for(&server);
    let mut board = Board::new();

    board.set_query("Paris");
    board.search(&provider).await;

    assert_eq!(board.entries().len(), 1);
    assert_eq!(board.entries()[0].location.name, "Paris");
    assert_eq!(board.query(), "");
    assert!(!board.is_loading());
    assert!(board.error().is_none());
}

#[tokio::test]
async fn board_search_dedupes_an_existing_city() {
    let server = MockServer::start().await;
    mount_current(
        &server,
        ResponseTemplate::new(200).set_body_json(sample_city_response()),
    )
    .await;

    let provider = provider_for(&server);
    let mut board = Board::new();

    board.set_query("Paris");
    board.search(&provider).await;
    board.set_query("paris");
    board.search(&provider).await;

    assert_eq!(board.entries().len(), 1);
    assert!(board.error().is_none());
}

#[tokio::test]
async fn failed_search_leaves_the_board_intact() {
    let server = MockServer::start().await;
    mount_current(
        &server,
        ResponseTemplate::new(200).set_body_json(sample_city_response()),
    )
    .await;

    let provider = provider_for(&server);
    let mut board = Board::new();

    board.set_query("Paris");
    board.search(&provider).await;
    let before = board.entries().to_vec();

    // Unmatched requests now 404, which the board reports generically.
    server.reset().await;

    board.set_query("Atlantis");
    board.search(&provider).await;

    assert_eq!(board.error(), Some(LOOKUP_FAILED_MSG));
    assert_eq!(board.entries(), before.as_slice());
    assert!(!board.is_loading());
}
