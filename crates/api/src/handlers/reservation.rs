use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;

use roombook_core::calendar;
use roombook_core::eligibility;
use roombook_core::errors::BookingError;
use roombook_core::models::reservation::{
    CreateReservationRequest, NewReservation, ReservationView,
};
use roombook_core::models::slot::Slot;
use roombook_core::models::OperationResponse;

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

/// Books a slot. Admin requests (valid password header) run as forced
/// writes: the occupancy check is skipped, but blackout, Wednesday period
/// 6 and administrative blocks are still enforced by the store layer.
#[axum::debug_handler]
pub async fn create_reservation(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateReservationRequest>,
) -> Result<Json<ReservationView>, AppError> {
    let slot = Slot::parse_id(&payload.slot_id)?;
    let is_admin = auth::is_admin(&headers, &state.admin_password);
    let settings = state.config.settings().await?;

    // Week-level window check, ahead of the write. The write itself only
    // re-checks hard slot policy and occupancy.
    if !is_admin {
        let monday = calendar::week_monday(slot.day);
        let assigned = state.config.assigned_grade(monday).await?;
        let open_time = calendar::open_time_for_week(monday, state.clock.timezone());
        let decision = eligibility::can_book(
            payload.grade,
            false,
            assigned,
            open_time,
            state.clock.now(),
        );
        if !decision.allowed {
            return Err(AppError(BookingError::PolicyBlocked(decision.message)));
        }
    }

    let request = NewReservation {
        grade: payload.grade,
        class_no: payload.class_no,
        purpose: payload.purpose.clone(),
        pin: payload.pin.clone(),
    };
    let now = state.clock.now().with_timezone(&Utc);
    let reservation = state
        .reservations
        .put(&slot, &request, &settings, is_admin, now)
        .await?;

    Ok(Json(ReservationView::from_record(slot.id(), &reservation)))
}

#[derive(Debug, Deserialize)]
pub struct DeleteReservationQuery {
    pub pin: Option<String>,
}

/// Deletes a reservation: admin header deletes unconditionally, otherwise
/// the PIN chosen at booking time must match.
#[axum::debug_handler]
pub async fn delete_reservation(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(slot_id): Path<String>,
    Query(query): Query<DeleteReservationQuery>,
) -> Result<Json<OperationResponse>, AppError> {
    // Reject malformed ids before touching the store.
    Slot::parse_id(&slot_id)?;
    let admin = auth::is_admin(&headers, &state.admin_password);

    state
        .reservations
        .delete(&slot_id, query.pin.as_deref(), admin)
        .await?;

    Ok(Json(OperationResponse::ok("reservation deleted")))
}

#[derive(Debug, Deserialize)]
pub struct ListReservationsQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub grade: Option<u8>,
    pub class_no: Option<u32>,
}

/// Lists reservations in a date range, optionally filtered to one class.
/// Backs the "my reservations" lookup.
#[axum::debug_handler]
pub async fn list_reservations(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ListReservationsQuery>,
) -> Result<Json<Vec<ReservationView>>, AppError> {
    let records = state.reservations.list_range(query.from, query.to).await?;

    let views = records
        .into_iter()
        .filter(|(_, r)| query.grade.map_or(true, |g| r.grade == g))
        .filter(|(_, r)| query.class_no.map_or(true, |c| r.class_no == c))
        .map(|(slot_id, r)| ReservationView::from_record(slot_id, &r))
        .collect();

    Ok(Json(views))
}
