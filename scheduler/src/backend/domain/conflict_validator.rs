//! Advisory check of a proposed batch schedule against a faculty member's
//! availability and their other batches.
//!
//! This is the one place the rule lives; both a pre-flight check and the
//! roster service's create/update path call it. It runs over a snapshot and
//! takes no locks, so two writers can still race past it.

use chrono::NaiveDate;
use std::fmt;

use crate::backend::domain::interval::TimeInterval;
use crate::backend::domain::models::{Batch, BatchSchedule, DayOfWeek, Faculty};
use crate::backend::domain::recurrence::DateRange;

/// The existing batch a proposal collides with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClashingBatch {
    pub id: String,
    pub name: String,
    pub dates: DateRange,
    pub hours: TimeInterval,
}

impl fmt::Display for ClashingBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" which runs from {} to {} at {}",
            self.name,
            self.dates.start(),
            self.dates.end(),
            self.hours
        )
    }
}

impl From<&Batch> for ClashingBatch {
    fn from(batch: &Batch) -> Self {
        Self {
            id: batch.id.clone(),
            name: batch.name.clone(),
            dates: batch.schedule.dates,
            hours: batch.schedule.hours,
        }
    }
}

/// Why a proposed schedule cannot be accepted. Only the first problem found is
/// reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchConflict {
    #[error("Faculty {faculty_name} is not available on {weekday}.")]
    NoAvailabilityForDay { faculty_name: String, weekday: DayOfWeek },

    #[error(
        "Batch time on {weekday} is outside of faculty's available hours. \
         Available: {available}. You tried: {requested}."
    )]
    OutsideAvailableHours {
        weekday: DayOfWeek,
        available: TimeInterval,
        requested: TimeInterval,
    },

    #[error("On {weekday}, the new batch clashes with {batch}.")]
    ScheduleClash {
        weekday: DayOfWeek,
        date: NaiveDate,
        batch: ClashingBatch,
    },
}

impl BatchConflict {
    pub fn weekday(&self) -> DayOfWeek {
        match self {
            BatchConflict::NoAvailabilityForDay { weekday, .. }
            | BatchConflict::OutsideAvailableHours { weekday, .. }
            | BatchConflict::ScheduleClash { weekday, .. } => *weekday,
        }
    }
}

/// Check `proposed` for `faculty`.
///
/// Availability is checked first for every proposed weekday; only when that
/// passes are the faculty member's other batches examined. `exclude_batch_id`
/// names the batch being edited so it is not compared with itself.
pub fn validate_schedule(
    proposed: &BatchSchedule,
    faculty: &Faculty,
    existing: &[Batch],
    exclude_batch_id: Option<&str>,
) -> Result<(), BatchConflict> {
    check_availability(proposed, faculty)?;
    check_clashes(proposed, faculty, existing, exclude_batch_id)
}

fn check_availability(proposed: &BatchSchedule, faculty: &Faculty) -> Result<(), BatchConflict> {
    for &weekday in &proposed.days {
        let window = faculty
            .availability_on(weekday)
            .ok_or_else(|| BatchConflict::NoAvailabilityForDay {
                faculty_name: faculty.name.clone(),
                weekday,
            })?;

        if !window.hours.contains(&proposed.hours) {
            return Err(BatchConflict::OutsideAvailableHours {
                weekday,
                available: window.hours,
                requested: proposed.hours,
            });
        }
    }
    Ok(())
}

fn check_clashes(
    proposed: &BatchSchedule,
    faculty: &Faculty,
    existing: &[Batch],
    exclude_batch_id: Option<&str>,
) -> Result<(), BatchConflict> {
    // Date-range and time overlap do not depend on the day being examined
    let candidates: Vec<&Batch> = existing
        .iter()
        .filter(|batch| batch.faculty_id.as_deref() == Some(faculty.id.as_str()))
        .filter(|batch| exclude_batch_id != Some(batch.id.as_str()))
        .filter(|batch| batch.schedule.dates.overlaps(&proposed.dates))
        .filter(|batch| batch.schedule.hours.overlaps(&proposed.hours))
        .collect();

    if candidates.is_empty() {
        return Ok(());
    }

    for date in proposed.dates.occurrences(&proposed.days) {
        if let Some(batch) = candidates.iter().find(|batch| batch.schedule.meets_on(date)) {
            return Err(BatchConflict::ScheduleClash {
                weekday: DayOfWeek::of(date),
                date,
                batch: ClashingBatch::from(*batch),
            });
        }
    }
    Ok(())
}
