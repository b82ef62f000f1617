use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

pub const DEFAULT_CLASSES_PER_GRADE: u32 = 6;

/// Per-grade class counts. Read at load, overwritten wholesale by admin
/// action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub classes_per_grade: BTreeMap<u8, u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            classes_per_grade: (1..=6).map(|g| (g, DEFAULT_CLASSES_PER_GRADE)).collect(),
        }
    }
}

impl Settings {
    pub fn classes_for(&self, grade: u8) -> u32 {
        self.classes_per_grade
            .get(&grade)
            .copied()
            .unwrap_or(DEFAULT_CLASSES_PER_GRADE)
    }

    pub fn validate(&self) -> BookingResult<()> {
        for (grade, count) in &self.classes_per_grade {
            if !(1..=6).contains(grade) {
                return Err(BookingError::Validation(format!(
                    "unknown grade {} in settings",
                    grade
                )));
            }
            if *count < 1 {
                return Err(BookingError::Validation(format!(
                    "grade {} must have at least one class",
                    grade
                )));
            }
        }
        Ok(())
    }
}
