use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use roombook_core::models::settings::Settings;
use roombook_core::models::OperationResponse;

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

/// Class counts per grade; public read (the booking form needs it).
#[axum::debug_handler]
pub async fn get_settings(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Settings>, AppError> {
    let settings = state.config.settings().await?;
    Ok(Json(settings))
}

/// Wholesale settings replacement. Admin only; invalidates the read cache.
#[axum::debug_handler]
pub async fn put_settings(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<Settings>,
) -> Result<Json<OperationResponse>, AppError> {
    auth::require_admin(&headers, &state.admin_password)?;

    state.config.put_settings(&payload).await?;

    Ok(Json(OperationResponse::ok("settings saved")))
}

/// Merged assignment table (defaults overlaid by overrides). Admin only.
#[axum::debug_handler]
pub async fn get_assignments(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
) -> Result<Json<BTreeMap<NaiveDate, u8>>, AppError> {
    auth::require_admin(&headers, &state.admin_password)?;

    let assignments = state.config.assignments().await?;
    Ok(Json(assignments))
}

#[derive(Debug, Deserialize)]
pub struct PutAssignmentRequest {
    pub grade: u8,
}

/// Overrides the priority grade for one week. Admin only.
#[axum::debug_handler]
pub async fn put_assignment(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(monday): Path<NaiveDate>,
    Json(payload): Json<PutAssignmentRequest>,
) -> Result<Json<OperationResponse>, AppError> {
    auth::require_admin(&headers, &state.admin_password)?;

    state.config.put_assignment(monday, payload.grade).await?;

    Ok(Json(OperationResponse::ok("assignment saved")))
}

/// Drops a per-week override so the compiled-in default applies again.
/// Admin only.
#[axum::debug_handler]
pub async fn clear_assignment(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(monday): Path<NaiveDate>,
) -> Result<Json<OperationResponse>, AppError> {
    auth::require_admin(&headers, &state.admin_password)?;

    state.config.clear_assignment(monday).await?;

    Ok(Json(OperationResponse::ok("assignment override cleared")))
}
