use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum GpuError {
    /// The worker never answered (connection refused, timeout, etc.).
    #[error("GPU Request Error: {message} {location}")]
    Request {
        message: String,
        location: ErrorLocation,
    },

    /// The worker answered with a non-2xx status. Status and body are kept
    /// so the server can relay them verbatim.
    #[error("GPU Status Error: HTTP {status} - {body} {location}")]
    Status {
        status: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },

    /// Successful status, undecodable body.
    #[error("GPU Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("GPU URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for GpuError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        GpuError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
