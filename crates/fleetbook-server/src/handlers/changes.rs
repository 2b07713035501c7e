//! Change requests and list key checks

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use fleetbook_domain::model::ChangeRequest;

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ValidateKeyRequest {
    pub key: Option<String>,
}

/// Relay a change request to the moderators' webhook
pub async fn request_change(
    State(state): State<AppState>,
    body: Result<JsonBody<ChangeRequest>, ApiError>,
) -> Result<Json<Value>, ApiError> {
    let JsonBody(request) = body.map_err(|e| e.with_key("message"))?;
    state
        .changes
        .submit(&request)
        .await
        .map_err(|e| ApiError::from(e).with_key("message"))?;
    Ok(Json(json!({"success": true, "message": "Change request submitted!"})))
}

pub async fn validate_key(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ValidateKeyRequest>,
) -> Json<Value> {
    let valid = state.credentials.validate_list_key(request.key.as_deref());
    Json(json!({"valid": valid}))
}
