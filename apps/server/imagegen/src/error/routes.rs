use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use client_core::error::gpu::GpuError;

use log::{error, warn};
use thiserror::Error;

/// Route-level failure, mapped to an HTTP response at the axum boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Gpu(#[from] GpuError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Worker answered with an error: relay its status and body
            // verbatim instead of flattening into an anonymous 500.
            ApiError::Gpu(GpuError::Status {
                status,
                body,
                location,
            }) => {
                warn!("GPU worker returned HTTP {status} {location}");
                let code =
                    StatusCode::from_u16(status.0).unwrap_or(StatusCode::BAD_GATEWAY);
                (code, body).into_response()
            }

            ApiError::Gpu(GpuError::Request { message, location }) => {
                error!("GPU worker unreachable: {message} {location}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("GPU server request failed: {message}"),
                )
                    .into_response()
            }

            ApiError::Gpu(other) => {
                error!("GPU relay failed: {other}");
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response()
            }
        }
    }
}
