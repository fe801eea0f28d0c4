// Unit tests for GenerateRequest: builder validation and serde defaults

use crate::{GenerateRequest, GenerateRequestBuilder, ModelError};

/// **VALUE**: Verifies that a complete builder produces the exact request.
///
/// **BUG THIS CATCHES**: Would catch the builder dropping or swapping
/// fields during construction.
#[test]
fn given_prompt_and_count_when_building_then_returns_request() {
    // GIVEN: Builder with all fields set
    let builder = GenerateRequestBuilder::default()
        .with_prompt("a lighthouse at dusk")
        .with_num_images(4);

    // WHEN: Building
    let request = builder.build().unwrap();

    // THEN: Fields carried through unchanged
    assert_eq!(request.prompt, "a lighthouse at dusk");
    assert_eq!(request.num_images, 4);
}

/// **VALUE**: Verifies the builder default matches the wire default.
///
/// **WHY THIS MATTERS**: Requests built in code and requests deserialized
/// from JSON must agree on what "no count given" means, or the server and
/// typed client would generate different numbers of images for the same
/// logical request.
#[test]
fn given_no_image_count_when_building_then_defaults_to_one() {
    let request = GenerateRequestBuilder::default()
        .with_prompt("a lighthouse at dusk")
        .build()
        .unwrap();

    assert_eq!(request.num_images, 1);
}

#[test]
fn given_missing_prompt_when_building_then_returns_validation_error() {
    // GIVEN: Builder without a prompt
    let builder = GenerateRequestBuilder::default().with_num_images(2);

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    assert!(result.is_err());
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Prompt is required");
        }
    }
}

#[test]
fn given_whitespace_prompt_when_building_then_returns_validation_error() {
    let result = GenerateRequestBuilder::default().with_prompt("   ").build();

    assert!(result.is_err());
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Prompt cannot be empty");
        }
    }
}

#[test]
fn given_zero_image_count_when_building_then_returns_validation_error() {
    let result = GenerateRequestBuilder::default()
        .with_prompt("a lighthouse at dusk")
        .with_num_images(0)
        .build();

    assert!(result.is_err());
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Image count must be at least 1");
        }
    }
}

/// **VALUE**: Verifies serde applies the documented default of 1 when the
/// wire omits `num_images`.
///
/// **BUG THIS CATCHES**: Would catch removal of the `#[serde(default)]`
/// attribute, which would turn every count-less request into a 422 at the
/// server boundary instead of a single-image generation.
#[test]
fn given_json_without_num_images_when_deserializing_then_defaults_to_one() {
    let request: GenerateRequest =
        serde_json::from_str(r#"{"prompt": "a lighthouse at dusk"}"#).unwrap();

    assert_eq!(request.prompt, "a lighthouse at dusk");
    assert_eq!(request.num_images, 1);
}

#[test]
fn given_json_with_num_images_when_deserializing_then_uses_given_count() {
    let request: GenerateRequest =
        serde_json::from_str(r#"{"prompt": "a lighthouse at dusk", "num_images": 3}"#).unwrap();

    assert_eq!(request.num_images, 3);
}
