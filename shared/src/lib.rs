use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Roster records
// ---------------------------------------------------------------------------

/// A teachable subject (e.g. "Guitar", "Python")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A recurring weekly window in which a faculty member can teach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    /// Full weekday name, case-insensitive ("Monday", "tuesday", ...)
    pub day_of_week: String,
    /// "HH:MM" (24h)
    pub start_time: String,
    /// "HH:MM" (24h)
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// "full-time", "part-time" or "contract"
    #[serde(default = "default_employment_type")]
    pub employment_type: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Ids of the skills this faculty member teaches
    #[serde(default)]
    pub skill_ids: Vec<String>,
    #[serde(default)]
    pub availability: Vec<Availability>,
}

/// A class section occupying a faculty member on some weekdays within a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// "YYYY-MM-DD", inclusive
    pub start_date: String,
    /// "YYYY-MM-DD", inclusive
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub days_of_week: Vec<String>,
    #[serde(default)]
    pub faculty_id: Option<String>,
    #[serde(default)]
    pub skill_id: Option<String>,
    #[serde(default)]
    pub max_students: Option<u32>,
    /// "Upcoming", "active" or "completed"
    #[serde(default = "default_batch_status")]
    pub status: String,
    #[serde(default)]
    pub student_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub admission_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Everything the scheduler needs for one query, as handed over by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub faculty: Vec<Faculty>,
    #[serde(default)]
    pub batches: Vec<Batch>,
    #[serde(default)]
    pub students: Vec<Student>,
}

fn default_employment_type() -> String {
    "full-time".to_string()
}

fn default_batch_status() -> String {
    "Upcoming".to_string()
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Free slots
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FreeSlotsRequest {
    /// "YYYY-MM-DD"; required
    pub start_date: Option<String>,
    /// "YYYY-MM-DD"; required
    pub end_date: Option<String>,
    /// Restrict the search to one faculty member
    #[serde(default)]
    pub faculty_id: Option<String>,
    /// Restrict the search to faculty teaching this skill
    #[serde(default)]
    pub skill_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultySummary {
    pub id: String,
    pub name: String,
    pub skill_ids: Vec<String>,
}

/// Open windows of one faculty member on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySlots {
    /// "YYYY-MM-DD"
    pub date: String,
    /// "HH:MM - HH:MM" entries in ascending order
    pub time: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyFreeSlots {
    pub faculty: FacultySummary,
    pub slots: Vec<DaySlots>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeSlotsResponse {
    pub results: Vec<FacultyFreeSlots>,
}

// ---------------------------------------------------------------------------
// Batch validation
// ---------------------------------------------------------------------------

/// The recurring schedule of a batch that is about to be created or edited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchScheduleRequest {
    pub faculty_id: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub days_of_week: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateBatchRequest {
    pub schedule: BatchScheduleRequest,
    /// Id of the batch being edited, so it does not clash with itself
    #[serde(default)]
    pub exclude_batch_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    NoAvailabilityForDay,
    OutsideAvailableHours,
    ScheduleClash,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictingBatch {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConflict {
    pub kind: ConflictKind,
    pub day_of_week: String,
    /// Human-readable explanation, ready for display
    pub message: String,
    /// "HH:MM - HH:MM" the faculty member is available, for hour violations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<String>,
    /// "HH:MM - HH:MM" that was requested, for hour violations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested: Option<String>,
    /// First date the clash occurs on, for schedule clashes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicting_batch: Option<ConflictingBatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchValidationResponse {
    pub valid: bool,
    pub conflict: Option<BatchConflict>,
}

// ---------------------------------------------------------------------------
// Roster management requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSkillRequest {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateFacultyRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default = "default_employment_type")]
    pub employment_type: String,
    #[serde(default)]
    pub skill_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateFacultyRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default = "default_employment_type")]
    pub employment_type: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub skill_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetAvailabilityRequest {
    pub faculty_id: String,
    pub availability: Vec<Availability>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveBatchRequest {
    /// Present when editing an existing batch
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub days_of_week: Vec<String>,
    #[serde(default)]
    pub faculty_id: Option<String>,
    #[serde(default)]
    pub skill_id: Option<String>,
    #[serde(default)]
    pub max_students: Option<u32>,
    #[serde(default = "default_batch_status")]
    pub status: String,
    #[serde(default)]
    pub student_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveStudentRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub admission_number: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faculty_defaults() {
        let json = r#"{"id": "f1", "name": "Asha", "email": "asha@example.com"}"#;
        let faculty: Faculty = serde_json::from_str(json).unwrap();

        assert_eq!(faculty.employment_type, "full-time");
        assert!(faculty.is_active);
        assert!(faculty.skill_ids.is_empty());
        assert!(faculty.availability.is_empty());
    }

    #[test]
    fn test_batch_defaults() {
        let json = r#"{
            "id": "b1",
            "name": "Morning Guitar",
            "start_date": "2025-01-06",
            "end_date": "2025-03-31",
            "start_time": "10:00",
            "end_time": "12:00"
        }"#;
        let batch: Batch = serde_json::from_str(json).unwrap();

        assert_eq!(batch.status, "Upcoming");
        assert_eq!(batch.faculty_id, None);
        assert!(batch.days_of_week.is_empty());
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot: RosterSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, RosterSnapshot::default());
    }

    #[test]
    fn test_conflict_omits_empty_details() {
        let conflict = BatchConflict {
            kind: ConflictKind::NoAvailabilityForDay,
            day_of_week: "Tuesday".to_string(),
            message: "not available".to_string(),
            available: None,
            requested: None,
            date: None,
            conflicting_batch: None,
        };
        let value = serde_json::to_value(&conflict).unwrap();

        assert_eq!(value["kind"], "NoAvailabilityForDay");
        assert!(value.get("available").is_none());
        assert!(value.get("conflicting_batch").is_none());
    }
}
