use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

/// Term rotation, week 1 through 21. `None` marks weeks with no priority
/// grade, where only the general booking window applies.
pub const DEFAULT_SEQUENCE: [Option<u8>; 21] = [
    Some(1),
    Some(1),
    Some(1),
    Some(2),
    None,
    Some(2),
    Some(3),
    Some(3),
    Some(6),
    Some(5),
    Some(4),
    Some(1),
    Some(1),
    Some(2),
    Some(2),
    Some(3),
    Some(3),
    Some(4),
    Some(5),
    Some(6),
    Some(6),
];

/// First Monday of the term, anchoring week 1 of the rotation.
pub fn term_start_monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 8).expect("valid term start date")
}

/// Compiled-in assignment table: Monday -> priority grade. Gap weeks are
/// simply absent from the map.
pub fn default_assignments() -> BTreeMap<NaiveDate, u8> {
    let start = term_start_monday();
    DEFAULT_SEQUENCE
        .iter()
        .enumerate()
        .filter_map(|(i, grade)| {
            grade.map(|g| (start + Duration::weeks(i as i64), g))
        })
        .collect()
}

/// Overlays persisted overrides on the defaults. An override always wins
/// for its own Monday; defaults fill the rest.
pub fn merged_assignments(
    overrides: &BTreeMap<NaiveDate, u8>,
) -> BTreeMap<NaiveDate, u8> {
    let mut merged = default_assignments();
    for (monday, grade) in overrides {
        merged.insert(*monday, *grade);
    }
    merged
}
