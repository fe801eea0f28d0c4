pub mod config;
pub mod routes;

use common::ErrorLocation;

use thiserror::Error;

/// Errors that can abort server startup.
///
/// Route-level failures never reach this type - they are mapped to HTTP
/// responses at the axum boundary by [`routes::ApiError`].
#[derive(Debug, Error)]
pub enum ImagegenError {
    /// Error from this app's own wiring (log dir, listener, logger).
    #[error("Imagegen Error: {message} {location}")]
    Imagegen {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
