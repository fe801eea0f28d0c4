pub mod builder;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`.
///
/// `num_images` defaults to 1 when the field is absent from the incoming
/// JSON, matching the API's documented default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateRequest {
    pub prompt: String,

    #[serde(default = "default_num_images")]
    pub num_images: u32,
}

fn default_num_images() -> u32 {
    1
}
