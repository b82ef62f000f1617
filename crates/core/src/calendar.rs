use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::errors::BookingResult;
use crate::models::slot::{Slot, MAX_PERIODS};

/// Returns the Monday of the week containing `d` (ISO week, Monday first).
pub fn week_monday(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.weekday().num_days_from_monday() as i64)
}

/// Period timetable: period 1 starts at 08:50, each lesson runs 40 minutes,
/// with a 10-minute break after every period except the last.
pub fn build_period_table(max_periods: u8) -> BTreeMap<u8, (NaiveTime, NaiveTime)> {
    let mut table = BTreeMap::new();
    let mut cur = NaiveTime::from_hms_opt(8, 50, 0).expect("valid first period start");
    for p in 1..=max_periods {
        let lesson_end = cur + Duration::minutes(40);
        table.insert(p, (cur, lesson_end));
        cur = lesson_end + Duration::minutes(10);
    }
    table
}

/// All slots of the week starting at `monday`: Monday through Friday,
/// periods 1..=6.
pub fn week_slots(monday: NaiveDate) -> BookingResult<Vec<Slot>> {
    let mut slots = Vec::with_capacity(5 * MAX_PERIODS as usize);
    for day_offset in 0..5 {
        let day = monday + Duration::days(day_offset);
        for period in 1..=MAX_PERIODS {
            slots.push(Slot::new(day, period)?);
        }
    }
    Ok(slots)
}

/// The instant non-priority grades may begin booking for the week of
/// `monday`: the Thursday four calendar days earlier, 07:00 in `tz`.
pub fn open_time_for_week(monday: NaiveDate, tz: Tz) -> DateTime<Tz> {
    let prev_thursday = monday - Duration::days(4);
    let open = prev_thursday
        .and_hms_opt(7, 0, 0)
        .expect("valid open time of day");
    resolve_local(tz, open)
}

// 07:00 local can be ambiguous or nonexistent around a DST transition in
// some configurable zones. Take the earlier of an ambiguous pair, and
// slide forward out of a gap.
fn resolve_local(tz: Tz, local: NaiveDateTime) -> DateTime<Tz> {
    if let Some(t) = tz.from_local_datetime(&local).earliest() {
        return t;
    }
    tz.from_local_datetime(&(local + Duration::hours(1)))
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&local))
}

/// Clock source for all "now" comparisons. Production uses the configured
/// IANA timezone; tests inject a fixed instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Tz>;
    fn timezone(&self) -> Tz;
}

pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }

    fn timezone(&self) -> Tz {
        self.tz
    }
}

/// Frozen clock for tests.
pub struct FixedClock {
    now: DateTime<Tz>,
}

impl FixedClock {
    pub fn new(now: DateTime<Tz>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        self.now
    }

    fn timezone(&self) -> Tz {
        self.now.timezone()
    }
}
