use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/reservations",
            post(handlers::reservation::create_reservation),
        )
        .route(
            "/api/reservations",
            get(handlers::reservation::list_reservations),
        )
        .route(
            "/api/reservations/:slot_id",
            delete(handlers::reservation::delete_reservation),
        )
}
