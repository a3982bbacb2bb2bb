//! Domain model for a batch (class section) and its recurring schedule.
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::{require_non_empty, DayOfWeek, ModelError};
use crate::backend::domain::interval::TimeInterval;
use crate::backend::domain::recurrence::DateRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchStatus {
    #[default]
    Upcoming,
    Active,
    Completed,
}

impl BatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BatchStatus::Upcoming => "Upcoming",
            BatchStatus::Active => "active",
            BatchStatus::Completed => "completed",
        }
    }
}

impl FromStr for BatchStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(BatchStatus::Upcoming),
            "active" => Ok(BatchStatus::Active),
            "completed" => Ok(BatchStatus::Completed),
            _ => Err(ModelError::InvalidBatchStatus(s.to_string())),
        }
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When a batch meets: the same hours on each of `days` between two dates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSchedule {
    pub dates: DateRange,
    pub hours: TimeInterval,
    pub days: BTreeSet<DayOfWeek>,
}

impl BatchSchedule {
    pub fn new(dates: DateRange, hours: TimeInterval, days: BTreeSet<DayOfWeek>) -> Self {
        Self { dates, hours, days }
    }

    pub fn parse<S: AsRef<str>>(
        start_date: &str,
        end_date: &str,
        start_time: &str,
        end_time: &str,
        days_of_week: &[S],
    ) -> Result<Self, ModelError> {
        let dates = DateRange::new(super::parse_date(start_date)?, super::parse_date(end_date)?)?;
        let hours = TimeInterval::parse(start_time, end_time)?;
        let days = super::parse_days(days_of_week)?;
        Ok(Self { dates, hours, days })
    }

    /// Whether the batch meets on `date`
    pub fn meets_on(&self, date: NaiveDate) -> bool {
        self.dates.contains(date) && self.days.contains(&DayOfWeek::of(date))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub schedule: BatchSchedule,
    pub faculty_id: Option<String>,
    pub skill_id: Option<String>,
    pub max_students: Option<u32>,
    pub status: BatchStatus,
    pub student_ids: Vec<String>,
}

impl Batch {
    pub fn new(id: &str, name: &str, schedule: BatchSchedule) -> Result<Self, ModelError> {
        Ok(Self {
            id: require_non_empty("Batch id", id)?,
            name: require_non_empty("Batch name", name)?,
            description: None,
            schedule,
            faculty_id: None,
            skill_id: None,
            max_students: None,
            status: BatchStatus::default(),
            student_ids: Vec::new(),
        })
    }

    pub fn generate_id() -> String {
        format!("batch::{}", Uuid::new_v4())
    }

    pub fn with_faculty(mut self, faculty_id: impl Into<String>) -> Self {
        self.faculty_id = Some(faculty_id.into());
        self
    }

    pub fn with_max_students(mut self, max_students: Option<u32>) -> Result<Self, ModelError> {
        if max_students == Some(0) {
            return Err(ModelError::NonPositiveCapacity);
        }
        self.max_students = max_students;
        Ok(self)
    }

    /// Whether this batch takes up `faculty_id`'s time on `date`
    pub fn occupies(&self, faculty_id: &str, date: NaiveDate) -> bool {
        self.faculty_id.as_deref() == Some(faculty_id) && self.schedule.meets_on(date)
    }
}
