//! Custom table API

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use fleetbook_types::Error;

use super::blocking;
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateRowRequest {
    pub index: Option<i64>,
    pub row: Option<Value>,
}

pub async fn get_table(
    State(state): State<AppState>,
    Path(table_name): Path<String>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let tables = state.tables.clone();
    Ok(Json(blocking(move || tables.rows(&table_name)).await?))
}

pub async fn add_row(
    State(state): State<AppState>,
    Path(table_name): Path<String>,
    JsonBody(row): JsonBody<Value>,
) -> Result<Json<Value>, ApiError> {
    let tables = state.tables.clone();
    blocking(move || tables.add_row(&table_name, row)).await?;
    Ok(Json(json!({"success": true})))
}

pub async fn update_row(
    State(state): State<AppState>,
    Path(table_name): Path<String>,
    JsonBody(request): JsonBody<UpdateRowRequest>,
) -> Result<Json<Value>, ApiError> {
    let (Some(index), Some(row)) = (request.index, request.row) else {
        return Err(Error::MissingTableUpdate.into());
    };
    let tables = state.tables.clone();
    blocking(move || tables.update_row(&table_name, index, row)).await?;
    Ok(Json(json!({"success": true})))
}
