use axum::{
    routing::{delete, get, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/settings", get(handlers::admin::get_settings))
        .route("/api/admin/settings", put(handlers::admin::put_settings))
        .route(
            "/api/admin/assignments",
            get(handlers::admin::get_assignments),
        )
        .route(
            "/api/admin/assignments/:monday",
            put(handlers::admin::put_assignment),
        )
        .route(
            "/api/admin/assignments/:monday",
            delete(handlers::admin::clear_assignment),
        )
}
