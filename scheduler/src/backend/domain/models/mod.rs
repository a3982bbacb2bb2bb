//! Domain entities of the institute roster.
//!
//! Constructors reject empty ids and names, backwards time windows and
//! inverted date ranges, so the scheduling code never re-checks them.

pub mod batch;
pub mod faculty;
pub mod roster;
pub mod skill;
pub mod student;
pub mod time;

pub use batch::{Batch, BatchSchedule, BatchStatus};
pub use faculty::{AvailabilityWindow, EmploymentType, Faculty};
pub use roster::Roster;
pub use skill::Skill;
pub use student::Student;
pub use time::{format_date, parse_date, parse_days, DayOfWeek, TimeOfDay};

use crate::backend::domain::recurrence::RangeError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid day of week '{0}'")]
    InvalidWeekday(String),
    #[error("Start time {start} must be before end time {end}")]
    EmptyTimeRange { start: TimeOfDay, end: TimeOfDay },
    #[error(transparent)]
    DateRange(#[from] RangeError),
    #[error("Invalid employment type '{0}', expected full-time, part-time or contract")]
    InvalidEmploymentType(String),
    #[error("Invalid batch status '{0}', expected Upcoming, active or completed")]
    InvalidBatchStatus(String),
    #[error("Maximum number of students must be positive")]
    NonPositiveCapacity,
}

/// Trim `value` and reject it when nothing is left
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<String, ModelError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ModelError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}
