use client_core::error::gpu::GpuError;
use client_core::gpu::GpuClient;

use common::HttpStatusCode;
use models::GenerateRequestBuilder;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public API tests for the GPU relay client
// ============================================================================

fn request() -> models::GenerateRequest {
    GenerateRequestBuilder::default()
        .with_prompt("a lighthouse at dusk")
        .with_num_images(2)
        .build()
        .unwrap()
}

/// **VALUE**: Verifies the relay hop posts the request as-is and hands the
/// worker payload back undecoded beyond JSON.
#[tokio::test]
async fn given_healthy_worker_when_generating_then_relays_json_payload() {
    // GIVEN: A worker endpoint matching the exact body
    let worker = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(body_json(
            json!({"prompt": "a lighthouse at dusk", "num_images": 2}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"images": ["AAAA", "BBBB"]})))
        .expect(1)
        .mount(&worker)
        .await;

    let client = GpuClient::new(&format!("{}/generate", worker.uri())).unwrap();

    // WHEN: Generating
    let payload = client.generate(&request()).await.unwrap();

    // THEN: Payload relayed verbatim
    assert_eq!(payload, json!({"images": ["AAAA", "BBBB"]}));
}

/// **VALUE**: Verifies an upstream failure keeps its status and body.
///
/// **WHY THIS MATTERS**: The server relays worker failures verbatim to the
/// original caller. If this variant lost the status or body, every worker
/// failure would flatten into an anonymous 500 at the HTTP boundary.
#[tokio::test]
async fn given_worker_failure_when_generating_then_status_and_body_are_preserved() {
    // GIVEN: A worker answering 503 with a body
    let worker = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(503).set_body_string("out of VRAM"))
        .mount(&worker)
        .await;

    let client = GpuClient::new(&format!("{}/generate", worker.uri())).unwrap();

    // WHEN: Generating
    let error = client.generate(&request()).await.unwrap_err();

    // THEN: Status and body survive for relaying
    match error {
        GpuError::Status { status, body, .. } => {
            assert_eq!(status, HttpStatusCode(503));
            assert_eq!(body, "out of VRAM");
        }
        other => panic!("Expected Status variant, got: {other:?}"),
    }
}

/// **VALUE**: Verifies an unreachable worker is a Request error, not a
/// Status error - the two map to different HTTP responses at the server.
#[tokio::test]
async fn given_unreachable_worker_when_generating_then_returns_request_error() {
    let client = GpuClient::new("http://127.0.0.1:9/generate").unwrap();

    let error = client.generate(&request()).await.unwrap_err();

    assert!(matches!(error, GpuError::Request { .. }));
}

/// **VALUE**: Verifies a worker that answers 200 with garbage is a decode
/// error rather than a relayed payload.
#[tokio::test]
async fn given_non_json_worker_response_when_generating_then_returns_decode_error() {
    let worker = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>definitely not json"))
        .mount(&worker)
        .await;

    let client = GpuClient::new(&format!("{}/generate", worker.uri())).unwrap();

    let error = client.generate(&request()).await.unwrap_err();

    assert!(matches!(error, GpuError::Decode { .. }));
}

#[test]
fn given_invalid_endpoint_when_constructing_client_then_returns_url_parse_error() {
    assert!(matches!(
        GpuClient::new("::not-a-url::"),
        Err(GpuError::UrlParse { .. })
    ));
}
