use chrono::{NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use pretty_assertions::assert_eq;
use rstest::rstest;
use roombook_core::calendar::{
    build_period_table, open_time_for_week, week_monday, week_slots, Clock, FixedClock,
};
use roombook_core::models::slot::Slot;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[rstest]
#[case(date(2025, 9, 8), date(2025, 9, 8))] // Monday maps to itself
#[case(date(2025, 9, 10), date(2025, 9, 8))] // Wednesday
#[case(date(2025, 9, 12), date(2025, 9, 8))] // Friday
#[case(date(2025, 9, 14), date(2025, 9, 8))] // Sunday still belongs to Monday's week
#[case(date(2025, 9, 15), date(2025, 9, 15))] // next Monday
fn test_week_monday(#[case] input: NaiveDate, #[case] expected: NaiveDate) {
    assert_eq!(week_monday(input), expected);
}

#[test]
fn test_period_table_schedule() {
    let table = build_period_table(6);
    assert_eq!(table.len(), 6);

    assert_eq!(table[&1], (time(8, 50), time(9, 30)));
    assert_eq!(table[&2], (time(9, 40), time(10, 20)));
    assert_eq!(table[&3], (time(10, 30), time(11, 10)));
    assert_eq!(table[&4], (time(11, 20), time(12, 0)));
    assert_eq!(table[&5], (time(12, 10), time(12, 50)));
    assert_eq!(table[&6], (time(13, 0), time(13, 40)));
}

#[test]
fn test_period_table_lesson_and_gap_lengths() {
    let table = build_period_table(6);
    for p in 1..=6u8 {
        let (start, end) = table[&p];
        assert_eq!(
            end - start,
            chrono::Duration::minutes(40),
            "period {} should last 40 minutes",
            p
        );
        if p < 6 {
            let (next_start, _) = table[&(p + 1)];
            assert_eq!(
                next_start - end,
                chrono::Duration::minutes(10),
                "gap after period {} should be 10 minutes",
                p
            );
        }
    }
}

#[test]
fn test_period_table_regenerates_for_other_lengths() {
    let table = build_period_table(4);
    assert_eq!(table.len(), 4);
    assert_eq!(table[&4], (time(11, 20), time(12, 0)));
}

#[test]
fn test_open_time_for_week() {
    let tz: Tz = "Asia/Seoul".parse().unwrap();
    let open = open_time_for_week(date(2025, 9, 8), tz);
    assert_eq!(
        open,
        tz.with_ymd_and_hms(2025, 9, 4, 7, 0, 0).unwrap(),
        "open time should be the previous Thursday at 07:00 KST"
    );
}

#[test]
fn test_week_slots_cover_weekdays_and_periods() {
    let slots = week_slots(date(2025, 9, 8)).unwrap();
    assert_eq!(slots.len(), 30);
    assert_eq!(slots.first().unwrap().id(), "2025-09-08_P1");
    assert_eq!(slots.last().unwrap().id(), "2025-09-12_P6");
}

#[test]
fn test_slot_id_round_trip_for_all_periods() {
    for p in 1..=6u8 {
        let slot = Slot::new(date(2025, 9, 15), p).unwrap();
        let parsed = Slot::parse_id(&slot.id()).unwrap();
        assert_eq!(parsed, slot);
        assert_eq!(parsed.start, build_period_table(6)[&p].0);
        assert_eq!(parsed.end, build_period_table(6)[&p].1);
    }
}

#[test]
fn test_fixed_clock_is_frozen() {
    let tz: Tz = "Asia/Seoul".parse().unwrap();
    let instant = tz.with_ymd_and_hms(2025, 9, 4, 7, 0, 0).unwrap();
    let clock = FixedClock::new(instant);
    assert_eq!(clock.now(), instant);
    assert_eq!(clock.now(), instant);
    assert_eq!(clock.timezone(), tz);
}
