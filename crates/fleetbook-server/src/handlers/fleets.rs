//! Fleet list API

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use fleetbook_domain::model::BulkFleetInput;
use fleetbook_types::Error;

use super::blocking;
use crate::error::ApiError;
use crate::extract::{AdminSession, JsonBody};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFleetRequest {
    pub index: Option<i64>,
    pub updated_fleet: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteFleetRequest {
    pub index: Option<i64>,
}

/// The fleets table exactly as stored; backs `/fleets.json` and `/api/fleets`
pub async fn raw_fleets(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    let fleets = state.fleets.clone();
    Ok(Json(blocking(move || fleets.raw_fleets()).await?))
}

pub async fn add_fleet(
    State(state): State<AppState>,
    _admin: AdminSession,
    JsonBody(fleet): JsonBody<Value>,
) -> Result<Json<Value>, ApiError> {
    let fleets = state.fleets.clone();
    blocking(move || fleets.add_fleet(fleet)).await?;
    Ok(Json(json!({"success": true, "message": "Fleet added successfully"})))
}

pub async fn update_fleet(
    State(state): State<AppState>,
    _admin: AdminSession,
    JsonBody(request): JsonBody<UpdateFleetRequest>,
) -> Result<Json<Value>, ApiError> {
    let (Some(index), Some(fleet)) = (request.index, request.updated_fleet) else {
        return Err(Error::MissingFleetUpdate.into());
    };
    let fleets = state.fleets.clone();
    blocking(move || fleets.update_fleet(index, fleet)).await?;
    Ok(Json(json!({"success": true, "message": "Fleet updated successfully"})))
}

pub async fn delete_fleet(
    State(state): State<AppState>,
    _admin: AdminSession,
    JsonBody(request): JsonBody<DeleteFleetRequest>,
) -> Result<Json<Value>, ApiError> {
    let index = request.index.ok_or(Error::MissingIndex)?;
    let fleets = state.fleets.clone();
    blocking(move || fleets.delete_fleet(index)).await?;
    Ok(Json(json!({"success": true, "message": "Fleet deleted successfully"})))
}

/// Parse pasted fleet text into records without storing them
pub async fn parse_bulk_fleet(
    State(state): State<AppState>,
    _admin: AdminSession,
    JsonBody(input): JsonBody<BulkFleetInput>,
) -> Result<Json<Value>, ApiError> {
    let report = state.fleets.parse_bulk(&input)?;
    Ok(Json(json!({"success": true, "fleets": report.fleets})))
}
