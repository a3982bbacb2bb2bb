//! Day-by-day expansion of inclusive date ranges.

use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::iter::FusedIterator;

use crate::backend::domain::models::DayOfWeek;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("Start date {start} is after end date {end}")]
    Inverted { start: NaiveDate, end: NaiveDate },
    #[error("Date range covers {days} days, at most {max} are allowed")]
    TooLong { days: u64, max: u32 },
}

/// Inclusive calendar range `[start, end]` with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering a single date
    pub fn single(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether the two ranges share at least one date
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Number of dates in the range, both ends included
    pub fn num_days(&self) -> u64 {
        (self.end - self.start).num_days() as u64 + 1
    }

    /// Lazily yield every date in the range in ascending order
    pub fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }

    /// Dates in the range that fall on one of `weekdays`, ascending
    pub fn occurrences<'a>(
        &self,
        weekdays: &'a BTreeSet<DayOfWeek>,
    ) -> impl Iterator<Item = NaiveDate> + 'a {
        self.days().filter(move |date| weekdays.contains(&DayOfWeek::of(*date)))
    }
}

/// Iterator over the dates of a [`DateRange`]
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|date| *date <= self.end)?;
        // succ_opt only fails at NaiveDate::MAX, which also ends the range
        self.next = current.succ_opt();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(date) if date <= self.end => (self.end - date).num_days() as usize + 1,
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}

/// Every date from `start` to `end`, both included.
///
/// An inverted range is a caller error and is rejected rather than treated as
/// empty.
pub fn expand_dates(start: NaiveDate, end: NaiveDate) -> Result<Days, RangeError> {
    Ok(DateRange::new(start, end)?.days())
}
