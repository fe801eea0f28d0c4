pub mod generate;
pub mod hello;

use crate::state::AppState;

use std::path::Path;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use log::warn;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Assemble the full application router: API routes, the frontend bundle,
/// and CORS.
pub fn build_router(state: AppState) -> Router {
    let static_dir = Path::new(&state.config.server.static_dir).to_path_buf();
    let cors = cors_layer(&state.config.cors.allowed_origins);

    Router::new()
        .route("/api/hello", get(hello::hello_handler))
        .route("/api/generate", post(generate::generate_handler))
        .nest_service("/assets", ServeDir::new(static_dir.join("assets")))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.iter().any(|origin| origin == "*") {
        // Wildcard cannot be combined with credentials.
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring unparseable CORS origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}
