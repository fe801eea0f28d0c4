//! Relay client for the GPU worker.
//!
//! The API server does not generate images itself; `/api/generate` hands
//! the request to a separate GPU worker process and relays whatever comes
//! back. This client owns that hop.
//!
//! Upstream failures keep their shape: a non-2xx worker response becomes
//! [`GpuError::Status`] with the status and body preserved, so the server
//! can relay both to the original caller instead of collapsing everything
//! into a generic 500.

use crate::error::gpu::GpuError;

use common::{ErrorLocation, HttpStatusCode};
use models::GenerateRequest;

use std::panic::Location;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde_json::Value;
use url::Url;

// Image generation is slow; interactive-call timeouts do not fit here.
const GENERATE_TIMEOUT_DURATION: Duration = Duration::from_secs(300);

pub const DEFAULT_GPU_ENDPOINT: &str = "http://127.0.0.1:8001/generate";

#[derive(Clone)]
pub struct GpuClient {
    endpoint: Url,
    client: Client,
}

impl GpuClient {
    pub fn new(endpoint_str: &str) -> Result<Self, GpuError> {
        let endpoint = Url::parse(endpoint_str)?;
        let client = Client::builder()
            .timeout(GENERATE_TIMEOUT_DURATION)
            .build()
            .map_err(|e| GpuError::Request {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self { endpoint, client })
    }

    /// POST a generation request to the GPU worker and return its JSON
    /// payload.
    ///
    /// # Errors
    ///
    /// - [`GpuError::Request`] when the worker is unreachable or the
    ///   exchange fails below HTTP.
    /// - [`GpuError::Status`] when the worker answers outside 200-299;
    ///   carries the upstream status and body text for relaying.
    /// - [`GpuError::Decode`] when a successful response body is not
    ///   valid JSON.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<Value, GpuError> {
        debug!(
            "POST {} ({} image(s) for prompt of {} chars)",
            self.endpoint,
            request.num_images,
            request.prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| GpuError::Request {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let status = HttpStatusCode::from(response.status().as_u16());

        if !status.is_success() {
            return Err(GpuError::Status {
                status,
                body: response.text().await.unwrap_or_default(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let payload: Value = response.json().await.map_err(|e| GpuError::Decode {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(payload)
    }
}
