use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::eligibility::BookingDecision;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Open,
    Reserved,
    Blocked,
    Vacation,
    /// Permanently non-bookable by schedule policy (Wednesday period 6).
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationSummary {
    pub grade: u8,
    pub class_no: u32,
    pub purpose: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotView {
    pub id: String,
    pub day: NaiveDate,
    pub period: u8,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub status: SlotStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation: Option<ReservationSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
}

/// Weekly grid plus an optional read-only eligibility preview for the
/// requesting grade. The preview may be fetched any number of times; only
/// the write call reserves anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekResponse {
    pub monday: NaiveDate,
    pub assigned_grade: Option<u8>,
    pub open_time: DateTime<FixedOffset>,
    pub slots: Vec<SlotView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<BookingDecision>,
}
