//! Free-slot resolution.
//!
//! For every faculty member and every date of the query range, start from that
//! weekday's availability window and subtract the hours of each batch the
//! faculty member teaches on that date. Whatever is left is free.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::backend::domain::commands::slots::FreeSlotQuery;
use crate::backend::domain::interval::{subtract_many, TimeInterval};
use crate::backend::domain::models::{Batch, DayOfWeek, Faculty};
use crate::backend::domain::recurrence::{DateRange, RangeError};

/// Remaining open windows of one faculty member on one date
#[derive(Debug, Clone, PartialEq)]
pub struct FreeWindow {
    pub date: NaiveDate,
    /// Non-empty, non-overlapping, ascending
    pub windows: Vec<TimeInterval>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FacultyFreeSlots {
    pub faculty: Faculty,
    /// One entry per date that still has free time, ascending by date
    pub slots: Vec<FreeWindow>,
}

/// Service answering free-slot queries over a roster snapshot
#[derive(Debug, Clone)]
pub struct FreeSlotService {
    max_range_days: u32,
}

impl FreeSlotService {
    pub fn new(max_range_days: u32) -> Self {
        Self { max_range_days }
    }

    /// Free windows for every faculty member matching the query.
    ///
    /// Faculty without any free time in the range are left out.
    pub fn find_free_slots(
        &self,
        faculties: &[Faculty],
        batches: &[Batch],
        query: &FreeSlotQuery,
    ) -> Result<Vec<FacultyFreeSlots>, RangeError> {
        let days = query.range.num_days();
        if days > u64::from(self.max_range_days) {
            return Err(RangeError::TooLong {
                days,
                max: self.max_range_days,
            });
        }

        info!(
            "Resolving free slots {} to {} (faculty: {:?}, skill: {:?})",
            query.range.start(),
            query.range.end(),
            query.faculty_id,
            query.skill_id
        );

        let results = resolve_free_slots(
            faculties,
            batches,
            &query.range,
            query.faculty_id.as_deref(),
            query.skill_id.as_deref(),
        );

        info!("Found free slots for {} faculty members", results.len());
        Ok(results)
    }
}

/// Core of the free-slot search, independent of any configured limits.
///
/// Faculty are filtered by `faculty_id` first, then by `skill_id`. Each
/// faculty member is resolved on its own, so bad data on one record cannot
/// affect another's result.
pub fn resolve_free_slots(
    faculties: &[Faculty],
    batches: &[Batch],
    range: &DateRange,
    faculty_id: Option<&str>,
    skill_id: Option<&str>,
) -> Vec<FacultyFreeSlots> {
    faculties
        .iter()
        .filter(|faculty| faculty_id.map_or(true, |id| faculty.id == id))
        .filter(|faculty| skill_id.map_or(true, |id| faculty.has_skill(id)))
        .filter_map(|faculty| {
            // Only batches of this faculty that touch the range can cut anything
            let relevant: Vec<&Batch> = batches
                .iter()
                .filter(|batch| batch.faculty_id.as_deref() == Some(faculty.id.as_str()))
                .filter(|batch| batch.schedule.dates.overlaps(range))
                .collect();

            let slots: Vec<FreeWindow> = range
                .days()
                .filter_map(|date| free_windows_on(faculty, &relevant, date))
                .collect();

            if slots.is_empty() {
                None
            } else {
                Some(FacultyFreeSlots {
                    faculty: faculty.clone(),
                    slots,
                })
            }
        })
        .collect()
}

/// Free windows of `faculty` on `date`, or `None` when there are none
/// (no availability that weekday, or fully booked).
pub fn free_windows_on(
    faculty: &Faculty,
    batches: &[&Batch],
    date: NaiveDate,
) -> Option<FreeWindow> {
    let weekday = DayOfWeek::of(date);
    let Some(availability) = faculty.availability_on(weekday) else {
        debug!("{} has no availability on {} ({})", faculty.name, date, weekday);
        return None;
    };

    let cuts: Vec<&TimeInterval> = batches
        .iter()
        .filter(|batch| batch.occupies(&faculty.id, date))
        .map(|batch| &batch.schedule.hours)
        .collect();

    let windows = subtract_many(availability.hours, cuts);
    if windows.is_empty() {
        debug!("{} is fully booked on {}", faculty.name, date);
        return None;
    }

    Some(FreeWindow { date, windows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::{AvailabilityWindow, BatchSchedule};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn iv(start: &str, end: &str) -> TimeInterval {
        TimeInterval::parse(start, end).unwrap()
    }

    fn faculty(id: &str, windows: &[(&str, &str, &str)]) -> Faculty {
        let availability = windows
            .iter()
            .map(|(day, start, end)| AvailabilityWindow::parse(day, start, end).unwrap())
            .collect();
        Faculty::new(id, &format!("Teacher {}", id), &format!("{}@example.com", id))
            .unwrap()
            .with_availability(availability)
    }

    fn batch(
        id: &str,
        faculty_id: &str,
        dates: (&str, &str),
        hours: (&str, &str),
        days: &[&str],
    ) -> Batch {
        let schedule = BatchSchedule::parse(dates.0, dates.1, hours.0, hours.1, days).unwrap();
        Batch::new(id, &format!("Batch {}", id), schedule).unwrap().with_faculty(faculty_id)
    }

    fn query(start: NaiveDate, end: NaiveDate) -> FreeSlotQuery {
        FreeSlotQuery {
            range: DateRange::new(start, end).unwrap(),
            faculty_id: None,
            skill_id: None,
        }
    }

    fn monday() -> NaiveDate {
        d(2025, 1, 6)
    }

    fn on_monday(faculties: &[Faculty], batches: &[Batch]) -> Vec<FacultyFreeSlots> {
        resolve_free_slots(faculties, batches, &DateRange::single(monday()), None, None)
    }

    #[test]
    fn test_batch_splits_availability() {
        let faculties = vec![faculty("f1", &[("Monday", "09:00", "21:00")])];
        let batches = vec![batch(
            "b1",
            "f1",
            ("2025-01-01", "2025-03-31"),
            ("10:00", "12:00"),
            &["Monday"],
        )];

        let service = FreeSlotService::new(366);
        let results = service
            .find_free_slots(&faculties, &batches, &query(monday(), monday()))
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].slots.len(), 1);
        assert_eq!(results[0].slots[0].date, monday());
        assert_eq!(results[0].slots[0].windows, vec![iv("09:00", "10:00"), iv("12:00", "21:00")]);
    }

    #[test]
    fn test_fully_booked_day_is_omitted() {
        let faculties = vec![faculty("f1", &[("Monday", "09:00", "17:00")])];
        let batches = vec![batch(
            "b1",
            "f1",
            ("2025-01-06", "2025-01-06"),
            ("09:00", "17:00"),
            &["Monday"],
        )];

        let results = on_monday(&faculties, &batches);
        assert!(results.is_empty());
    }

    #[test]
    fn test_days_without_availability_are_skipped() {
        let faculties = vec![faculty(
            "f1",
            &[("Monday", "09:00", "12:00"), ("Wednesday", "13:00", "15:00")],
        )];
        let wednesday = d(2025, 1, 8);
        let range = DateRange::new(monday(), wednesday).unwrap();

        let results = resolve_free_slots(&faculties, &[], &range, None, None);

        let dates: Vec<NaiveDate> = results[0].slots.iter().map(|slot| slot.date).collect();
        assert_eq!(dates, vec![monday(), wednesday]);
    }

    #[test]
    fn test_faculty_without_availability_is_left_out() {
        let faculties = vec![faculty("f1", &[]), faculty("f2", &[("Monday", "09:00", "10:00")])];

        let results = on_monday(&faculties, &[]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].faculty.id, "f2");
    }

    #[test]
    fn test_batches_outside_date_or_weekday_do_not_cut() {
        let faculties = vec![faculty("f1", &[("Monday", "09:00", "17:00")])];
        let batches = vec![
            batch("ended", "f1", ("2024-12-01", "2025-01-05"), ("09:00", "17:00"), &["Monday"]),
            batch("tuesdays", "f1", ("2025-01-01", "2025-01-31"), ("09:00", "17:00"), &["Tuesday"]),
            batch("other", "f2", ("2025-01-01", "2025-01-31"), ("09:00", "17:00"), &["Monday"]),
        ];

        let results = on_monday(&faculties, &batches);
        assert_eq!(results[0].slots[0].windows, vec![iv("09:00", "17:00")]);
    }

    #[test]
    fn test_unassigned_batches_are_ignored() {
        let faculties = vec![faculty("f1", &[("Monday", "09:00", "17:00")])];
        let schedule =
            BatchSchedule::parse("2025-01-01", "2025-01-31", "09:00", "17:00", &["Monday"])
                .unwrap();
        let batches = vec![Batch::new("b1", "Unassigned", schedule).unwrap()];

        let results = on_monday(&faculties, &batches);
        assert_eq!(results[0].slots[0].windows, vec![iv("09:00", "17:00")]);
    }

    #[test]
    fn test_overlapping_batches() {
        let faculties = vec![faculty("f1", &[("Monday", "09:00", "18:00")])];
        let batches = vec![
            batch("b1", "f1", ("2025-01-01", "2025-01-31"), ("10:00", "13:00"), &["Monday"]),
            batch("b2", "f1", ("2025-01-01", "2025-01-31"), ("12:00", "15:00"), &["Monday"]),
            batch("b3", "f1", ("2025-01-01", "2025-01-31"), ("16:00", "17:00"), &["Monday"]),
        ];

        let results = on_monday(&faculties, &batches);
        let windows = &results[0].slots[0].windows;

        assert_eq!(
            windows,
            &vec![iv("09:00", "10:00"), iv("15:00", "16:00"), iv("17:00", "18:00")]
        );
        for pair in windows.windows(2) {
            assert!(!pair[0].overlaps(&pair[1]));
        }
    }

    #[test]
    fn test_filters() {
        let faculties = vec![
            faculty("f1", &[("Monday", "09:00", "17:00")]).with_skills(["guitar"]),
            faculty("f2", &[("Monday", "09:00", "17:00")]).with_skills(["piano"]),
        ];
        let range = DateRange::single(monday());

        assert_eq!(resolve_free_slots(&faculties, &[], &range, None, None).len(), 2);

        let by_faculty = resolve_free_slots(&faculties, &[], &range, Some("f2"), None);
        assert_eq!(by_faculty.len(), 1);
        assert_eq!(by_faculty[0].faculty.id, "f2");

        let by_skill = resolve_free_slots(&faculties, &[], &range, None, Some("guitar"));
        assert_eq!(by_skill.len(), 1);
        assert_eq!(by_skill[0].faculty.id, "f1");

        assert!(resolve_free_slots(&faculties, &[], &range, Some("f2"), Some("guitar")).is_empty());
        assert!(resolve_free_slots(&faculties, &[], &range, Some("nobody"), None).is_empty());
    }

    #[test]
    fn test_range_limit() {
        let service = FreeSlotService::new(7);
        let err = service
            .find_free_slots(&[], &[], &query(d(2025, 1, 1), d(2025, 1, 8)))
            .unwrap_err();

        assert_eq!(err, RangeError::TooLong { days: 8, max: 7 });
        assert!(service.find_free_slots(&[], &[], &query(d(2025, 1, 1), d(2025, 1, 7))).is_ok());
    }

    #[test]
    fn test_slots_are_in_date_order_across_weeks() {
        let faculties = vec![faculty(
            "f1",
            &[("Monday", "09:00", "10:00"), ("Friday", "09:00", "10:00")],
        )];

        let results = resolve_free_slots(
            &faculties,
            &[],
            &DateRange::new(monday(), d(2025, 1, 20)).unwrap(),
            None,
            None,
        );

        let dates: Vec<NaiveDate> = results[0].slots.iter().map(|slot| slot.date).collect();
        assert_eq!(
            dates,
            vec![d(2025, 1, 6), d(2025, 1, 10), d(2025, 1, 13), d(2025, 1, 17), d(2025, 1, 20)]
        );
    }
}
