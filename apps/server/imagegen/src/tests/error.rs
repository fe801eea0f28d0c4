// Unit tests for error module
// Tests the GPU error -> HTTP response mapping the generate route relies on

use crate::error::routes::ApiError;

use client_core::error::gpu::GpuError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// **VALUE**: Verifies an upstream worker failure is relayed with its
/// original status and body.
///
/// **WHY THIS MATTERS**: The frontend surfaces worker errors to the user.
/// If the mapping flattened a 429 or 503 into a 500 with a generic body,
/// the user would lose the only actionable information the worker gave.
#[tokio::test]
async fn given_gpu_status_error_when_converted_then_relays_status_and_body() {
    // GIVEN: A worker failure with status and body
    let error = ApiError::Gpu(GpuError::Status {
        status: HttpStatusCode(503),
        body: "out of VRAM".to_string(),
        location: ErrorLocation::from(Location::caller()),
    });

    // WHEN: Converting to a response
    let response = error.into_response();

    // THEN: Status and body are relayed verbatim
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"out of VRAM");
}

/// **VALUE**: Verifies an unreachable worker maps to a 500 with the
/// documented detail prefix, distinct from a relayed worker error.
#[tokio::test]
async fn given_gpu_request_error_when_converted_then_returns_500_with_detail() {
    let error = ApiError::Gpu(GpuError::Request {
        message: "connection refused".to_string(),
        location: ErrorLocation::from(Location::caller()),
    });

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.starts_with("GPU server request failed:"));
    assert!(text.contains("connection refused"));
}

/// A status outside the valid HTTP range cannot be relayed; it degrades to
/// 502 rather than panicking inside the response mapper.
#[tokio::test]
async fn given_out_of_range_status_when_converted_then_degrades_to_bad_gateway() {
    let error = ApiError::Gpu(GpuError::Status {
        status: HttpStatusCode(99),
        body: String::new(),
        location: ErrorLocation::from(Location::caller()),
    });

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
