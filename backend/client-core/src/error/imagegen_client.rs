use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ImagegenClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Error: {message} {location}")]
    Server {
        message: String,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for ImagegenClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ImagegenClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ImagegenClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ImagegenClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
