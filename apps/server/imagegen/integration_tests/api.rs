use imagegen::config::ImagegenConfig;
use imagegen::routes::build_router;
use imagegen::state::AppState;

use client_core::gpu::GpuClient;
use client_core::hello::fetch_hello_from;

use serde_json::{json, Value};
use tokio::net::TcpListener;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// End-to-end tests: real listener, real router, wiremock GPU worker
// ============================================================================

/// Boot the app on an ephemeral port and return its base URL.
async fn spawn_app(mut config: ImagegenConfig, gpu_endpoint: &str) -> String {
    config.gpu.endpoint = gpu_endpoint.to_string();

    let gpu = GpuClient::new(&config.gpu.endpoint).unwrap();
    let router = build_router(AppState::new(config, gpu));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

async fn spawn_default_app(gpu_endpoint: &str) -> String {
    spawn_app(ImagegenConfig::default(), gpu_endpoint).await
}

/// **VALUE**: Verifies the hello route answers with the greeting payload.
#[tokio::test]
async fn given_running_server_when_getting_hello_then_returns_greeting_json() {
    // GIVEN: A running server (GPU endpoint irrelevant for this route)
    let base = spawn_default_app("http://127.0.0.1:9/generate").await;

    // WHEN: Requesting the hello route
    let response = reqwest::get(format!("{base}/api/hello")).await.unwrap();

    // THEN: 200 with the greeting payload
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"message": "Hello from imagegen"}));
}

/// **VALUE**: Verifies the fixed-contract client operation works against
/// this server end to end.
///
/// **WHY THIS MATTERS**: The hello fetch operation and the hello route are
/// developed in different crates; this is the one test where the real
/// producer and the real consumer meet.
#[tokio::test]
async fn given_running_server_when_fetching_hello_through_client_core_then_returns_body() {
    let base = spawn_default_app("http://127.0.0.1:9/generate").await;

    let body = fetch_hello_from(&format!("{base}/api/hello")).await.unwrap();

    assert_eq!(body, json!({"message": "Hello from imagegen"}));
}

/// **VALUE**: Verifies the full generate relay: request in, worker call
/// with the defaulted image count, payload back out.
///
/// **BUG THIS CATCHES**: The worker mock matches the exact relayed body,
/// so it would catch the serde default being lost between the HTTP
/// boundary and the GPU hop.
#[tokio::test]
async fn given_healthy_worker_when_posting_generate_then_relays_worker_payload() {
    // GIVEN: A GPU worker expecting the defaulted request body
    let worker = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(body_json(
            json!({"prompt": "a lighthouse at dusk", "num_images": 1}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"images": ["AAAA"]})))
        .expect(1)
        .mount(&worker)
        .await;

    let base = spawn_default_app(&format!("{}/generate", worker.uri())).await;

    // WHEN: Posting a generate request without num_images
    let response = reqwest::Client::new()
        .post(format!("{base}/api/generate"))
        .json(&json!({"prompt": "a lighthouse at dusk"}))
        .send()
        .await
        .unwrap();

    // THEN: Worker payload relayed verbatim
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"images": ["AAAA"]}));
}

/// **VALUE**: Verifies a worker error is relayed with its original status
/// and body instead of collapsing into a generic 500.
#[tokio::test]
async fn given_failing_worker_when_posting_generate_then_relays_status_and_body() {
    // GIVEN: A worker answering 503 with a body
    let worker = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(503).set_body_string("out of VRAM"))
        .mount(&worker)
        .await;

    let base = spawn_default_app(&format!("{}/generate", worker.uri())).await;

    // WHEN: Posting a generate request
    let response = reqwest::Client::new()
        .post(format!("{base}/api/generate"))
        .json(&json!({"prompt": "a lighthouse at dusk"}))
        .send()
        .await
        .unwrap();

    // THEN: Upstream status and body relayed
    assert_eq!(response.status().as_u16(), 503);
    assert_eq!(response.text().await.unwrap(), "out of VRAM");
}

/// **VALUE**: Verifies an unreachable worker maps to a 500 with the
/// documented detail prefix.
#[tokio::test]
async fn given_unreachable_worker_when_posting_generate_then_returns_500_with_detail() {
    // GIVEN: A server whose GPU endpoint has nothing listening
    let base = spawn_default_app("http://127.0.0.1:9/generate").await;

    // WHEN: Posting a generate request
    let response = reqwest::Client::new()
        .post(format!("{base}/api/generate"))
        .json(&json!({"prompt": "a lighthouse at dusk"}))
        .send()
        .await
        .unwrap();

    // THEN: 500 with the relay-failure detail
    assert_eq!(response.status().as_u16(), 500);
    let text = response.text().await.unwrap();
    assert!(text.starts_with("GPU server request failed:"), "got: {text}");
}

/// **VALUE**: Verifies the frontend bundle is served: `/` returns the
/// index page and `/assets` serves files from the configured directory.
#[tokio::test]
async fn given_static_dir_when_requesting_frontend_paths_then_serves_bundle() {
    // GIVEN: A static dir with an index page and one asset
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(static_dir.path().join("assets")).unwrap();
    std::fs::write(
        static_dir.path().join("index.html"),
        "<html>imagegen</html>",
    )
    .unwrap();
    std::fs::write(static_dir.path().join("assets").join("app.js"), "void 0;").unwrap();

    let mut config = ImagegenConfig::default();
    config.server.static_dir = static_dir.path().to_string_lossy().into_owned();
    let base = spawn_app(config, "http://127.0.0.1:9/generate").await;

    // WHEN/THEN: Index page at /
    let index = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(index.status().as_u16(), 200);
    assert_eq!(index.text().await.unwrap(), "<html>imagegen</html>");

    // WHEN/THEN: Asset under /assets
    let asset = reqwest::get(format!("{base}/assets/app.js")).await.unwrap();
    assert_eq!(asset.status().as_u16(), 200);
    assert_eq!(asset.text().await.unwrap(), "void 0;");
}

/// **VALUE**: Verifies the default permissive CORS configuration answers
/// preflight requests, since the frontend may be served from a dev server
/// on another origin.
#[tokio::test]
async fn given_default_cors_when_preflighting_generate_then_allows_any_origin() {
    let base = spawn_default_app("http://127.0.0.1:9/generate").await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{base}/api/generate"))
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("preflight response should carry allow-origin");
    assert_eq!(allow_origin, "*");
}
