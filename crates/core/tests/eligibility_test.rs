use chrono::{NaiveDate, TimeZone};
use chrono_tz::Tz;
use pretty_assertions::assert_eq;
use rstest::rstest;
use roombook_core::eligibility::{
    blackout_range, can_book, slot_restriction, BookingReason, SlotRestriction,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seoul() -> Tz {
    "Asia/Seoul".parse().unwrap()
}

#[test]
fn test_admin_is_always_allowed() {
    let tz = seoul();
    let open = tz.with_ymd_and_hms(2025, 9, 4, 7, 0, 0).unwrap();
    let before_open = tz.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap();

    let decision = can_book(3, true, Some(1), open, before_open);
    assert!(decision.allowed);
    assert_eq!(decision.reason, BookingReason::AdminOverride);
}

#[test]
fn test_assigned_grade_books_before_open() {
    let tz = seoul();
    let open = tz.with_ymd_and_hms(2025, 9, 4, 7, 0, 0).unwrap();
    let before_open = tz.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap();

    let decision = can_book(1, false, Some(1), open, before_open);
    assert!(decision.allowed);
    assert_eq!(decision.reason, BookingReason::PriorityGrade);
}

#[test]
fn test_other_grade_waits_for_window() {
    let tz = seoul();
    let open = tz.with_ymd_and_hms(2025, 9, 4, 7, 0, 0).unwrap();
    let before_open = tz.with_ymd_and_hms(2025, 9, 4, 6, 59, 59).unwrap();

    let decision = can_book(2, false, Some(1), open, before_open);
    assert!(!decision.allowed);
    assert_eq!(decision.reason, BookingReason::NotYetOpen);
    // The caller renders "bookable after <timestamp>" from this message.
    assert!(decision.message.contains("2025-09-04 07:00"));
}

#[rstest]
#[case(seoul().with_ymd_and_hms(2025, 9, 4, 7, 0, 0).unwrap())] // exactly at open
#[case(seoul().with_ymd_and_hms(2025, 9, 5, 10, 30, 0).unwrap())] // after open
fn test_window_open_allows_any_grade(#[case] now: chrono::DateTime<Tz>) {
    let open = seoul().with_ymd_and_hms(2025, 9, 4, 7, 0, 0).unwrap();

    let decision = can_book(2, false, Some(1), open, now);
    assert!(decision.allowed);
    assert_eq!(decision.reason, BookingReason::GeneralWindow);
}

#[test]
fn test_no_assigned_grade_falls_through_to_window() {
    let tz = seoul();
    let open = tz.with_ymd_and_hms(2025, 10, 2, 7, 0, 0).unwrap();
    let now = tz.with_ymd_and_hms(2025, 10, 3, 9, 0, 0).unwrap();

    let decision = can_book(4, false, None, open, now);
    assert!(decision.allowed);
    assert_eq!(decision.reason, BookingReason::GeneralWindow);
}

#[test]
fn test_blackout_range_bounds() {
    let (start, end) = blackout_range();
    assert_eq!(start, date(2025, 9, 1));
    assert_eq!(end, date(2025, 9, 10));
}

#[rstest]
#[case(date(2025, 9, 1), 1)]
#[case(date(2025, 9, 5), 3)]
#[case(date(2025, 9, 10), 6)]
fn test_blackout_blocks_every_period(#[case] day: NaiveDate, #[case] period: u8) {
    assert_eq!(
        slot_restriction(day, period),
        Some(SlotRestriction::Vacation)
    );
}

#[test]
fn test_wednesday_period_six_is_closed() {
    // A Wednesday outside the blackout range.
    assert_eq!(
        slot_restriction(date(2025, 9, 17), 6),
        Some(SlotRestriction::WednesdayLastPeriod)
    );
    // Earlier periods on the same day are fine.
    assert_eq!(slot_restriction(date(2025, 9, 17), 5), None);
}

#[test]
fn test_wednesday_in_blackout_is_still_blocked() {
    // 2025-09-03 is a Wednesday inside the blackout; either rule alone
    // would close period 6.
    assert!(slot_restriction(date(2025, 9, 3), 6).is_some());
}

#[test]
fn test_regular_slot_has_no_restriction() {
    assert_eq!(slot_restriction(date(2025, 9, 15), 3), None);
}
