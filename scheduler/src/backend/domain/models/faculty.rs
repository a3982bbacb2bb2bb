//! Domain model for a faculty member and their weekly availability.
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::{require_non_empty, DayOfWeek, ModelError};
use crate::backend::domain::interval::TimeInterval;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
}

impl EmploymentType {
    pub fn as_str(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full-time",
            EmploymentType::PartTime => "part-time",
            EmploymentType::Contract => "contract",
        }
    }
}

impl FromStr for EmploymentType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full-time" => Ok(EmploymentType::FullTime),
            "part-time" => Ok(EmploymentType::PartTime),
            "contract" => Ok(EmploymentType::Contract),
            _ => Err(ModelError::InvalidEmploymentType(s.to_string())),
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hours a faculty member can teach on one day of every week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub weekday: DayOfWeek,
    pub hours: TimeInterval,
}

impl AvailabilityWindow {
    pub fn new(weekday: DayOfWeek, hours: TimeInterval) -> Self {
        Self { weekday, hours }
    }

    /// Parse from a day name and two "HH:MM" times
    pub fn parse(day_of_week: &str, start_time: &str, end_time: &str) -> Result<Self, ModelError> {
        Ok(Self {
            weekday: day_of_week.parse()?,
            hours: TimeInterval::parse(start_time, end_time)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Faculty {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub employment_type: EmploymentType,
    pub is_active: bool,
    pub skill_ids: BTreeSet<String>,
    pub availability: Vec<AvailabilityWindow>,
}

impl Faculty {
    pub fn new(id: &str, name: &str, email: &str) -> Result<Self, ModelError> {
        Ok(Self {
            id: require_non_empty("Faculty id", id)?,
            name: require_non_empty("Faculty name", name)?,
            email: require_non_empty("Faculty email", email)?,
            phone_number: None,
            employment_type: EmploymentType::default(),
            is_active: true,
            skill_ids: BTreeSet::new(),
            availability: Vec::new(),
        })
    }

    pub fn generate_id() -> String {
        format!("faculty::{}", Uuid::new_v4())
    }

    pub fn with_skills<I, S>(mut self, skill_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skill_ids = skill_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_availability(mut self, availability: Vec<AvailabilityWindow>) -> Self {
        self.availability = availability;
        self
    }

    /// The window for `weekday`. Only the first matching window is used when
    /// several share a weekday.
    pub fn availability_on(&self, weekday: DayOfWeek) -> Option<&AvailabilityWindow> {
        self.availability.iter().find(|window| window.weekday == weekday)
    }

    pub fn has_skill(&self, skill_id: &str) -> bool {
        self.skill_ids.contains(skill_id)
    }
}
