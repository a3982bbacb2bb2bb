#![allow(dead_code)]

use institute_scheduler::backend::config::SchedulerConfig;
use institute_scheduler::backend::{initialize_backend, AppState};
use shared::{Availability, Batch, Faculty, RosterSnapshot};

pub fn availability(day: &str, start: &str, end: &str) -> Availability {
    Availability {
        day_of_week: day.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

pub fn faculty(id: &str, skills: &[&str], availability: Vec<Availability>) -> Faculty {
    Faculty {
        id: id.to_string(),
        name: format!("Teacher {}", id),
        email: format!("{}@example.com", id),
        phone_number: None,
        employment_type: "full-time".to_string(),
        is_active: true,
        skill_ids: skills.iter().map(|s| s.to_string()).collect(),
        availability,
    }
}

pub fn batch(
    id: &str,
    faculty_id: &str,
    dates: (&str, &str),
    hours: (&str, &str),
    days: &[&str],
) -> Batch {
    Batch {
        id: id.to_string(),
        name: format!("Batch {}", id),
        description: None,
        start_date: dates.0.to_string(),
        end_date: dates.1.to_string(),
        start_time: hours.0.to_string(),
        end_time: hours.1.to_string(),
        days_of_week: days.iter().map(|d| d.to_string()).collect(),
        faculty_id: Some(faculty_id.to_string()),
        skill_id: None,
        max_students: None,
        status: "Upcoming".to_string(),
        student_ids: vec![],
    }
}

pub fn state(faculty: Vec<Faculty>, batches: Vec<Batch>) -> AppState {
    let snapshot = RosterSnapshot {
        faculty,
        batches,
        ..RosterSnapshot::default()
    };
    initialize_backend(&SchedulerConfig::default(), snapshot)
}
