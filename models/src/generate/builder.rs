use crate::error::model_error::ModelError;
use crate::GenerateRequest;

use common::ErrorLocation;

use std::panic::Location;

/// Builder for creating validated GenerateRequest instances.
///
/// Deserialization accepts whatever the wire carries; this builder is for
/// programmatic construction, where handing the GPU worker an empty prompt
/// or a zero image count is always a caller bug.
#[derive(Debug, Default)]
pub struct GenerateRequestBuilder {
    prompt: Option<String>,
    num_images: Option<u32>,
}

impl GenerateRequestBuilder {
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_num_images(mut self, num_images: u32) -> Self {
        self.num_images = Some(num_images);
        self
    }

    /// Build the GenerateRequest with validation.
    #[track_caller]
    pub fn build(self) -> Result<GenerateRequest, ModelError> {
        let prompt = self.prompt.ok_or_else(|| ModelError::Validation {
            message: String::from("Prompt is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if prompt.trim().is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Prompt cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let num_images = self.num_images.unwrap_or(1);

        if num_images == 0 {
            return Err(ModelError::Validation {
                message: String::from("Image count must be at least 1"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(GenerateRequest { prompt, num_images })
    }
}
