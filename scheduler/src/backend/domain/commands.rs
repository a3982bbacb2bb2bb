//! Domain-level command and query types.
//!
//! Services inside the domain layer take these already-parsed values. The io
//! layer maps the public DTOs from the `shared` crate onto them, so nothing in
//! here deals with raw strings for dates, times or weekdays.

pub mod slots {
    use crate::backend::domain::models::BatchSchedule;
    use crate::backend::domain::recurrence::DateRange;

    /// Which faculty to search and over which dates
    #[derive(Debug, Clone)]
    pub struct FreeSlotQuery {
        pub range: DateRange,
        pub faculty_id: Option<String>,
        pub skill_id: Option<String>,
    }

    /// A batch schedule to check before it is saved
    #[derive(Debug, Clone)]
    pub struct ValidateScheduleCommand {
        pub faculty_id: Option<String>,
        pub schedule: BatchSchedule,
        /// Batch being edited, ignored when looking for clashes
        pub exclude_batch_id: Option<String>,
    }
}

pub mod faculty {
    use crate::backend::domain::models::{AvailabilityWindow, EmploymentType};

    #[derive(Debug, Clone)]
    pub struct CreateFacultyCommand {
        pub name: String,
        pub email: String,
        pub phone_number: Option<String>,
        pub employment_type: EmploymentType,
        pub skill_ids: Vec<String>,
    }

    #[derive(Debug, Clone)]
    pub struct UpdateFacultyCommand {
        pub id: String,
        pub name: String,
        pub email: String,
        pub phone_number: Option<String>,
        pub employment_type: EmploymentType,
        pub is_active: bool,
        pub skill_ids: Vec<String>,
    }

    /// Replace all availability of one faculty member
    #[derive(Debug, Clone)]
    pub struct SetAvailabilityCommand {
        pub faculty_id: String,
        pub availability: Vec<AvailabilityWindow>,
    }
}

pub mod batch {
    use crate::backend::domain::models::{BatchSchedule, BatchStatus};

    /// Create a batch when `id` is `None`, otherwise replace the batch with that id
    #[derive(Debug, Clone)]
    pub struct SaveBatchCommand {
        pub id: Option<String>,
        pub name: String,
        pub description: Option<String>,
        pub schedule: BatchSchedule,
        pub faculty_id: Option<String>,
        pub skill_id: Option<String>,
        pub max_students: Option<u32>,
        pub status: BatchStatus,
        pub student_ids: Vec<String>,
    }
}

pub mod catalog {
    #[derive(Debug, Clone)]
    pub struct CreateSkillCommand {
        pub name: String,
        pub category: String,
        pub description: Option<String>,
    }

    /// Create a student when `id` is `None`, otherwise update that student
    #[derive(Debug, Clone)]
    pub struct SaveStudentCommand {
        pub id: Option<String>,
        pub name: String,
        pub admission_number: String,
        pub phone_number: Option<String>,
    }
}
