mod common;

use common::{availability, batch, faculty, state};
use institute_scheduler::backend::io::handlers::batch_handlers::{
    list_batches, save_batch, validate_batch,
};
use institute_scheduler::backend::io::HandlerError;
use shared::{BatchScheduleRequest, ConflictKind, SaveBatchRequest, ValidateBatchRequest};

fn proposal(
    faculty_id: &str,
    dates: (&str, &str),
    hours: (&str, &str),
    days: &[&str],
) -> BatchScheduleRequest {
    BatchScheduleRequest {
        faculty_id: Some(faculty_id.to_string()),
        start_date: dates.0.to_string(),
        end_date: dates.1.to_string(),
        start_time: hours.0.to_string(),
        end_time: hours.1.to_string(),
        days_of_week: days.iter().map(|d| d.to_string()).collect(),
    }
}

fn validate(schedule: BatchScheduleRequest) -> ValidateBatchRequest {
    ValidateBatchRequest {
        schedule,
        exclude_batch_id: None,
    }
}

#[test]
fn outside_available_hours_is_reported_first() {
    // An existing batch would also clash, but availability is checked first
    let state = state(
        vec![faculty("f1", &[], vec![availability("Tuesday", "09:00", "17:00")])],
        vec![batch("b1", "f1", ("2025-01-01", "2025-01-31"), ("08:00", "10:00"), &["Tuesday"])],
    );

    let response = validate_batch(
        &state,
        validate(proposal("f1", ("2025-01-07", "2025-01-28"), ("08:00", "09:00"), &["Tuesday"])),
    )
    .unwrap();

    assert!(!response.valid);
    let conflict = response.conflict.unwrap();
    assert_eq!(conflict.kind, ConflictKind::OutsideAvailableHours);
    assert_eq!(conflict.available.as_deref(), Some("09:00 - 17:00"));
    assert_eq!(conflict.requested.as_deref(), Some("08:00 - 09:00"));
    assert_eq!(
        conflict.message,
        "Batch time on Tuesday is outside of faculty's available hours. \
         Available: 09:00 - 17:00. You tried: 08:00 - 09:00."
    );
}

#[test]
fn overlapping_dates_on_disjoint_weekdays_do_not_clash() {
    let state = state(
        vec![faculty(
            "f1",
            &[],
            vec![
                availability("Monday", "09:00", "17:00"),
                availability("Tuesday", "09:00", "17:00"),
            ],
        )],
        vec![batch("b1", "f1", ("2025-01-01", "2025-03-31"), ("10:00", "12:00"), &["Monday"])],
    );

    let response = validate_batch(
        &state,
        validate(proposal("f1", ("2025-02-01", "2025-02-28"), ("10:00", "12:00"), &["Tuesday"])),
    )
    .unwrap();

    assert!(response.valid);
    assert!(response.conflict.is_none());
}

#[test]
fn clash_names_the_existing_batch_and_first_date() {
    let state = state(
        vec![faculty("f1", &[], vec![availability("Wednesday", "09:00", "17:00")])],
        vec![batch("b1", "f1", ("2025-01-15", "2025-03-31"), ("10:00", "12:00"), &["Wednesday"])],
    );

    let response = validate_batch(
        &state,
        validate(proposal("f1", ("2025-01-01", "2025-01-31"), ("11:30", "13:00"), &["Wednesday"])),
    )
    .unwrap();

    let conflict = response.conflict.unwrap();
    assert_eq!(conflict.kind, ConflictKind::ScheduleClash);
    assert_eq!(conflict.date.as_deref(), Some("2025-01-15"));
    assert_eq!(conflict.conflicting_batch.unwrap().id, "b1");
}

#[test]
fn touching_times_do_not_clash() {
    let state = state(
        vec![faculty("f1", &[], vec![availability("Monday", "09:00", "17:00")])],
        vec![batch("b1", "f1", ("2025-01-01", "2025-01-31"), ("10:00", "12:00"), &["Monday"])],
    );

    let response = validate_batch(
        &state,
        validate(proposal("f1", ("2025-01-01", "2025-01-31"), ("12:00", "13:00"), &["Monday"])),
    )
    .unwrap();
    assert!(response.valid);
}

#[test]
fn unknown_faculty_is_not_found() {
    let state = state(vec![], vec![]);

    let err = validate_batch(
        &state,
        validate(proposal("f9", ("2025-01-01", "2025-01-31"), ("10:00", "12:00"), &["Monday"])),
    )
    .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[test]
fn saving_enforces_the_same_check() {
    let state = state(
        vec![faculty("f1", &[], vec![availability("Monday", "09:00", "17:00")])],
        vec![batch("b1", "f1", ("2025-01-01", "2025-01-31"), ("10:00", "12:00"), &["Monday"])],
    );

    let mut request = SaveBatchRequest {
        id: None,
        name: "Guitar 102".to_string(),
        description: None,
        start_date: "2025-01-06".to_string(),
        end_date: "2025-01-27".to_string(),
        start_time: "11:00".to_string(),
        end_time: "13:00".to_string(),
        days_of_week: vec!["Monday".to_string()],
        faculty_id: Some("f1".to_string()),
        skill_id: None,
        max_students: Some(12),
        status: "Upcoming".to_string(),
        student_ids: vec![],
    };

    let err = save_batch(&state, request.clone()).unwrap_err();
    assert_eq!(err.status_code(), 409);
    match err {
        HandlerError::Conflict(conflict) => assert_eq!(conflict.kind, ConflictKind::ScheduleClash),
        other => panic!("expected conflict, got {:?}", other),
    }

    // Editing the existing batch itself is fine
    request.id = Some("b1".to_string());
    let saved = save_batch(&state, request).unwrap();
    assert_eq!(saved.id, "b1");
    assert_eq!(saved.start_time, "11:00");
    assert_eq!(list_batches(&state).unwrap().len(), 1);
}
