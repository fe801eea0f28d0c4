use axum::Json;

use models::HelloMessage;

pub const HELLO_GREETING: &str = "Hello from imagegen";

/// `GET /api/hello` - the liveness greeting the frontend probes on load.
pub async fn hello_handler() -> Json<HelloMessage> {
    Json(HelloMessage::new(HELLO_GREETING))
}
