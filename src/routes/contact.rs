use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::error::AppError;
use crate::models::Inquiry;
use crate::state::SharedState;

/// Accept an inquiry and relay it to the chat webhook. One outbound call
/// per request; both transport failure and webhook rejection map to the
/// same generic 500 body.
pub async fn submit(
    State(state): State<SharedState>,
    Json(inquiry): Json<Inquiry>,
) -> Result<Json<Value>, AppError> {
    state
        .relay
        .deliver(&inquiry)
        .await
        .map_err(|e| AppError::Relay(e.to_string()))?;

    Ok(Json(json!({ "success": true })))
}
