use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use roombook_core::models::block::{Block, SetBlockRequest};
use roombook_core::models::slot::Slot;
use roombook_core::models::OperationResponse;

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

/// Upserts an administrative block on a slot. Admin only.
#[axum::debug_handler]
pub async fn set_block(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(slot_id): Path<String>,
    Json(payload): Json<SetBlockRequest>,
) -> Result<Json<Block>, AppError> {
    auth::require_admin(&headers, &state.admin_password)?;
    let slot = Slot::parse_id(&slot_id)?;

    let now = state.clock.now().with_timezone(&Utc);
    let block = state
        .blocks
        .set_block(&slot, &payload.reason, payload.admin.as_deref(), now)
        .await?;

    Ok(Json(block))
}

/// Removes an administrative block. Admin only; fails when the slot is
/// not blocked.
#[axum::debug_handler]
pub async fn clear_block(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(slot_id): Path<String>,
) -> Result<Json<OperationResponse>, AppError> {
    auth::require_admin(&headers, &state.admin_password)?;
    Slot::parse_id(&slot_id)?;

    state.blocks.clear_block(&slot_id).await?;

    Ok(Json(OperationResponse::ok("block cleared")))
}
