use axum::{
    routing::{delete, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/admin/blocks/:slot_id", put(handlers::block::set_block))
        .route(
            "/api/admin/blocks/:slot_id",
            delete(handlers::block::clear_block),
        )
}
