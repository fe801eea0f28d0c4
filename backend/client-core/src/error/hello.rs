use thiserror::Error as ThisError;

/// Failure modes of the hello fetch operation.
///
/// `NotOk` deliberately carries no status code, body, or headers - the
/// fixed message is the operation's public failure contract, so callers
/// cannot (and must not start to) distinguish a 404 from a 500 through it.
/// The other variants are transparent so the underlying client or parser
/// message is what callers see.
#[derive(Debug, ThisError)]
pub enum HelloError {
    /// Response status outside 200-299.
    #[error("Network response was not ok")]
    NotOk,

    /// The request never produced a response.
    #[error(transparent)]
    Request(reqwest::Error),

    /// Successful status, but the body was not valid JSON.
    #[error(transparent)]
    Decode(reqwest::Error),
}
