use crate::error::imagegen_client::ImagegenClientError;

use common::ErrorLocation;
use models::{GenerateRequest, HelloMessage};

use std::panic::Location;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde_json::Value;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const HELLO_ENDPOINT: &str = "api/hello";
const GENERATE_ENDPOINT: &str = "api/generate";

/// Typed client for the imagegen API server.
///
/// Unlike [`crate::hello::fetch_hello`], which is pinned to the default
/// local endpoint and a detail-free failure message, this client takes a
/// base URL and reports failures with status and body attached.
#[derive(Clone)]
pub struct ImagegenClient {
    base_url: Url,
    client: Client,
}

impl ImagegenClient {
    pub fn new(base_url_str: &str) -> Result<Self, ImagegenClientError> {
        let base_url = Url::parse(base_url_str)?;
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT_DURATION)
            .build()?;

        Ok(Self { base_url, client })
    }

    pub async fn hello(&self) -> Result<HelloMessage, ImagegenClientError> {
        let url = self.base_url.join(HELLO_ENDPOINT)?;
        debug!("GET {url}");

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ImagegenClientError::Server {
                message: format!(
                    "HTTP {} - {}",
                    response.status().as_u16(),
                    response.text().await.unwrap_or_default()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let message: HelloMessage = response.json().await?;

        Ok(message)
    }

    /// Submit a generation request and return the relayed GPU worker
    /// payload. No schema is imposed on the response body.
    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<Value, ImagegenClientError> {
        let url = self.base_url.join(GENERATE_ENDPOINT)?;
        debug!("POST {url} ({} image(s))", request.num_images);

        let response = self.client.post(url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(ImagegenClientError::Server {
                message: format!(
                    "HTTP {} - {}",
                    response.status().as_u16(),
                    response.text().await.unwrap_or_default()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let payload: Value = response.json().await?;

        Ok(payload)
    }
}
