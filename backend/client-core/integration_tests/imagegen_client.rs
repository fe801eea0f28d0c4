use client_core::error::imagegen_client::ImagegenClientError;
use client_core::ImagegenClient;

use models::{GenerateRequestBuilder, HelloMessage};

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public API tests for the typed imagegen client
// ============================================================================

/// **VALUE**: Verifies hello() decodes the server payload into the typed
/// message.
#[tokio::test]
async fn given_hello_payload_when_calling_hello_then_returns_typed_message() {
    // GIVEN: A server answering the hello route
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/hello"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Hello from imagegen"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ImagegenClient::new(&server.uri()).unwrap();

    // WHEN: Calling hello
    let message = client.hello().await.unwrap();

    // THEN: Typed payload matches
    assert_eq!(message, HelloMessage::new("Hello from imagegen"));
}

/// **VALUE**: Verifies generate() sends the exact JSON body the server
/// expects, including the defaulted image count.
///
/// **BUG THIS CATCHES**: Would catch a serde rename or a builder default
/// drifting away from the wire contract - the mock only matches the exact
/// body, so any drift fails the `expect(1)`.
#[tokio::test]
async fn given_generate_request_when_calling_generate_then_posts_expected_body() {
    // GIVEN: A server matching the exact request body
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_json(
            json!({"prompt": "a lighthouse at dusk", "num_images": 1}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"images": ["AAAA"]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ImagegenClient::new(&server.uri()).unwrap();
    let request = GenerateRequestBuilder::default()
        .with_prompt("a lighthouse at dusk")
        .build()
        .unwrap();

    // WHEN: Generating
    let payload = client.generate(&request).await.unwrap();

    // THEN: Relayed payload comes back undisturbed
    assert_eq!(payload, json!({"images": ["AAAA"]}));
}

/// **VALUE**: Verifies non-2xx responses become the Server variant with
/// status and body embedded - the richer shape this client (unlike the
/// fixed-endpoint hello operation) is allowed to expose.
#[tokio::test]
async fn given_server_error_when_calling_generate_then_returns_server_error_with_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(503).set_body_string("worker busy"))
        .mount(&server)
        .await;

    let client = ImagegenClient::new(&server.uri()).unwrap();
    let request = GenerateRequestBuilder::default()
        .with_prompt("a lighthouse at dusk")
        .build()
        .unwrap();

    let error = client.generate(&request).await.unwrap_err();

    match error {
        ImagegenClientError::Server { message, .. } => {
            assert!(message.contains("503"), "status should be embedded");
            assert!(message.contains("worker busy"), "body should be embedded");
        }
        other => panic!("Expected Server variant, got: {other:?}"),
    }
}

/// **VALUE**: Verifies an invalid base URL is rejected at construction,
/// before any request can be attempted.
#[test]
fn given_invalid_base_url_when_constructing_client_then_returns_url_parse_error() {
    let result = ImagegenClient::new("not a url");

    assert!(matches!(
        result,
        Err(ImagegenClientError::UrlParse { .. })
    ));
}
