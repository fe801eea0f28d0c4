//! The hello fetch operation.
//!
//! The smallest possible round trip against the API server: one GET, one
//! status check, one JSON decode. Used as the liveness probe by anything
//! that fronts the server.

use crate::error::hello::HelloError;
use crate::API_SERVER_BASE_URL;

use serde_json::Value;

const HELLO_ENDPOINT: &str = const_format::concatcp!(API_SERVER_BASE_URL, "/api/hello");

/// Fetch the hello payload from the fixed local API server endpoint.
///
/// Issues exactly one GET to `http://0.0.0.0:8000/api/hello` and returns
/// the decoded JSON body. No retries, no caching, no explicit timeout
/// beyond the client default.
///
/// # Errors
///
/// - [`HelloError::NotOk`] when the response status is outside 200-299.
///   By contract this error is the fixed string `Network response was not
///   ok` and carries no status code or body.
/// - [`HelloError::Decode`] when the body of a successful response is not
///   valid JSON; the parser's own message is surfaced unchanged.
/// - [`HelloError::Request`] when the request never completes (connection
///   refused, DNS, etc.).
pub async fn fetch_hello() -> Result<Value, HelloError> {
    fetch_hello_from(HELLO_ENDPOINT).await
}

/// Same contract as [`fetch_hello`], against a caller-supplied endpoint.
///
/// This is the seam used by tests and by embedders whose server is not on
/// the default host/port. [`fetch_hello`] is exactly this function applied
/// to the fixed endpoint.
pub async fn fetch_hello_from(endpoint: &str) -> Result<Value, HelloError> {
    let response = reqwest::get(endpoint).await.map_err(HelloError::Request)?;

    if !response.status().is_success() {
        return Err(HelloError::NotOk);
    }

    let body: Value = response.json().await.map_err(HelloError::Decode)?;

    Ok(body)
}
