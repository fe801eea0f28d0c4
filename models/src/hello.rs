use serde::{Deserialize, Serialize};

/// Payload of `GET /api/hello`.
///
/// Callers of the raw endpoint only assume valid JSON; this is the shape
/// the server actually emits and the typed client decodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HelloMessage {
    pub message: String,
}

impl HelloMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
