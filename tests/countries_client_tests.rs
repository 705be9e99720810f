use std::time::Duration;

use globe::api::{ApiError, CountrySource, RestCountriesClient, fetch_and_sort};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

const FIELDS: &str = "name,capital,flags,population,currencies,languages,subregion,area";

/// Client pointed at the mock server, no timeout.
fn client_for(server: &MockServer) -> RestCountriesClient {
    RestCountriesClient::new(server.uri(), "europe".to_string(), None)
}

/// Minimal record in the shape the API returns.
fn country_json(common: &str, capital: &str) -> serde_json::Value {
    json!({
        "name": {
            "common": common,
            "official": format!("Official {common}"),
            "nativeName": {}
        },
        "capital": [capital],
        "flags": { "png": "", "svg": "", "alt": "" },
        "subregion": "Somewhere",
        "population": 1000,
        "area": 12.5,
        "languages": { "eng": "English" },
        "currencies": { "EUR": { "name": "Euro", "symbol": "€" } }
    })
}

// ============================================================================
// Request Shape
// ============================================================================

#[tokio::test]
async fn test_requests_region_path_with_field_selection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/region/europe"))
        .and(query_param("fields", FIELDS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let countries = client_for(&mock_server).fetch_countries().await.unwrap();
    assert!(countries.is_empty());
}

#[tokio::test]
async fn test_other_region() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/region/asia"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([country_json("Japan", "Tokyo")])),
        )
        .mount(&mock_server)
        .await;

    let client = RestCountriesClient::new(mock_server.uri(), "asia".to_string(), None);
    let countries = client.fetch_countries().await.unwrap();
    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].first_capital(), Some("Tokyo"));
}

// ============================================================================
// Success Path
// ============================================================================

#[tokio::test]
async fn test_fetch_and_sort_orders_by_common_name() {
    let mock_server = MockServer::start().await;

    let body = json!([
        country_json("Germany", "Berlin"),
        country_json("Åland Islands", "Mariehamn"),
        country_json("Austria", "Vienna"),
        country_json("Albania", "Tirana"),
    ]);

    Mock::given(method("GET"))
        .and(path("/region/europe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let countries = fetch_and_sort(&client_for(&mock_server)).await.unwrap();
    let names: Vec<&str> = countries.iter().map(|c| c.common_name()).collect();
    assert_eq!(names, vec!["Åland Islands", "Albania", "Austria", "Germany"]);
}

#[tokio::test]
async fn test_missing_optional_fields_use_defaults() {
    let mock_server = MockServer::start().await;

    let body = json!([{
        "name": { "common": "Nowhere", "official": "Republic of Nowhere" },
        "flags": { "png": "", "svg": "" },
        "population": 0,
        "area": 0.0
    }]);

    Mock::given(method("GET"))
        .and(path("/region/europe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let countries = client_for(&mock_server).fetch_countries().await.unwrap();
    assert_eq!(countries.len(), 1);
    assert!(countries[0].capital.is_empty());
    assert!(countries[0].languages.is_empty());
    assert!(countries[0].currencies.is_empty());
}

// ============================================================================
// Error Handling
// ============================================================================

#[tokio::test]
async fn test_server_error_keeps_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/region/europe"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let result = fetch_and_sort(&client_for(&mock_server)).await;
    assert_eq!(
        result.unwrap_err(),
        ApiError::Api {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
    );
}

#[tokio::test]
async fn test_not_found_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/region/atlantis"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(r#"{"status":404,"message":"Not Found"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = RestCountriesClient::new(mock_server.uri(), "atlantis".to_string(), None);
    match client.fetch_countries().await {
        Err(ApiError::Api { status, message }) => {
            assert_eq!(status, 404);
            assert!(message.contains("Not Found"));
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_json_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/region/europe"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).fetch_countries().await;
    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[tokio::test]
async fn test_object_instead_of_array_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/region/europe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": 200})))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).fetch_countries().await;
    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/region/europe"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = RestCountriesClient::new(
        mock_server.uri(),
        "europe".to_string(),
        Some(Duration::from_millis(100)),
    );
    let result = client.fetch_countries().await;
    assert!(matches!(result, Err(ApiError::Network(_))));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Nothing listens on this port once the server is dropped
    let uri = {
        let mock_server = MockServer::start().await;
        mock_server.uri()
    };

    let client = RestCountriesClient::new(uri, "europe".to_string(), None);
    let result = client.fetch_countries().await;
    assert!(matches!(result, Err(ApiError::Network(_))));
}
