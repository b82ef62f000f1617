use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

use roombook_core::calendar;
use roombook_core::eligibility::{self, SlotRestriction};
use roombook_core::models::week::{
    ReservationSummary, SlotStatus, SlotView, WeekResponse,
};

use crate::{middleware::error_handling::AppError, ApiState};

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    /// Grade of the viewing user; when present the response carries an
    /// eligibility preview for that grade.
    pub grade: Option<u8>,
}

/// Read-only weekly grid. Any date inside the week resolves to its Monday.
#[axum::debug_handler]
pub async fn get_week(
    State(state): State<Arc<ApiState>>,
    Path(date): Path<NaiveDate>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<WeekResponse>, AppError> {
    let monday = calendar::week_monday(date);
    let assigned_grade = state.config.assigned_grade(monday).await?;
    let open_time = calendar::open_time_for_week(monday, state.clock.timezone());
    let now = state.clock.now();

    let slots = calendar::week_slots(monday)?;
    let mut views = Vec::with_capacity(slots.len());
    for slot in &slots {
        let id = slot.id();
        let restriction = eligibility::slot_restriction(slot.day, slot.period);
        let block = state.blocks.get(&id).await?;
        let reservation = state.reservations.get(&id).await?;

        let status = if let Some(restriction) = restriction {
            match restriction {
                SlotRestriction::Vacation => SlotStatus::Vacation,
                SlotRestriction::WednesdayLastPeriod => SlotStatus::Closed,
            }
        } else if block.is_some() {
            SlotStatus::Blocked
        } else if reservation.is_some() {
            SlotStatus::Reserved
        } else {
            SlotStatus::Open
        };

        views.push(SlotView {
            id,
            day: slot.day,
            period: slot.period,
            start: slot.start,
            end: slot.end,
            status,
            reservation: reservation.map(|r| ReservationSummary {
                grade: r.grade,
                class_no: r.class_no,
                purpose: r.purpose,
            }),
            block_reason: block.map(|b| b.reason),
        });
    }

    let preview = query
        .grade
        .map(|grade| eligibility::can_book(grade, false, assigned_grade, open_time, now));

    Ok(Json(WeekResponse {
        monday,
        assigned_grade,
        open_time: open_time.fixed_offset(),
        slots: views,
        eligibility: preview,
    }))
}
