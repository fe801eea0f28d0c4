use crate::error::routes::ApiError;
use crate::state::AppState;

use models::GenerateRequest;

use axum::extract::State;
use axum::Json;
use log::info;
use serde_json::Value;

/// `POST /api/generate` - relay a generation request to the GPU worker and
/// hand its JSON payload back unchanged.
pub async fn generate_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<Value>, ApiError> {
    info!(
        "Generate request: {} image(s), prompt of {} chars",
        request.num_images,
        request.prompt.len()
    );

    let payload = state.gpu.generate(&request).await?;

    Ok(Json(payload))
}
