//! Half-open time-of-day intervals and the subtraction used to carve batch
//! bookings out of a faculty member's availability.
//!
//! An interval `[start, end)` always satisfies `start < end`. Touching
//! intervals (`a.end == b.start`) do not overlap.

use std::fmt;

use crate::backend::domain::models::{ModelError, TimeOfDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeInterval {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeInterval {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, ModelError> {
        Self::non_empty(start, end).ok_or(ModelError::EmptyTimeRange { start, end })
    }

    /// Parse from two "HH:MM" strings
    pub fn parse(start: &str, end: &str) -> Result<Self, ModelError> {
        Self::new(start.parse()?, end.parse()?)
    }

    fn non_empty(start: TimeOfDay, end: TimeOfDay) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes_since_midnight() - self.start.minutes_since_midnight()
    }

    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely within this interval
    pub fn contains(&self, other: &TimeInterval) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Remove `cut` from this interval, returning what is left in ascending order.
    ///
    /// Yields zero pieces when `cut` covers the interval, one when it is
    /// disjoint or clips an edge, and two when it falls strictly inside.
    pub fn subtract(&self, cut: &TimeInterval) -> Vec<TimeInterval> {
        if !self.overlaps(cut) {
            return vec![*self];
        }

        let left = Self::non_empty(self.start, cut.start);
        let right = Self::non_empty(cut.end, self.end);
        left.into_iter().chain(right).collect()
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Subtract every cut from `base`.
///
/// Each cut is applied to all pieces that survived the previous cuts, so the
/// resulting set does not depend on the order of `cuts`. Pieces come back in
/// ascending order.
pub fn subtract_many<'a, I>(base: TimeInterval, cuts: I) -> Vec<TimeInterval>
where
    I: IntoIterator<Item = &'a TimeInterval>,
{
    cuts.into_iter().fold(vec![base], |pieces, cut| {
        pieces.iter().flat_map(|piece| piece.subtract(cut)).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn iv(start: &str, end: &str) -> TimeInterval {
        TimeInterval::parse(start, end).unwrap()
    }

    fn minutes(pieces: &[TimeInterval]) -> u32 {
        pieces.iter().map(|p| p.duration_minutes() as u32).sum()
    }

    #[test]
    fn test_new_rejects_empty_and_inverted() {
        assert!(TimeInterval::new(t("10:00"), t("10:00")).is_err());
        assert!(TimeInterval::new(t("11:00"), t("10:00")).is_err());
        assert!(TimeInterval::parse("10:00", "nope").is_err());
        assert_eq!(iv("09:00", "10:30").duration_minutes(), 90);
    }

    #[test]
    fn test_overlap_is_half_open() {
        let morning = iv("09:00", "12:00");

        assert!(morning.overlaps(&iv("11:00", "13:00")));
        assert!(morning.overlaps(&iv("08:00", "09:01")));
        assert!(morning.overlaps(&iv("10:00", "11:00")));
        assert!(!morning.overlaps(&iv("12:00", "13:00")));
        assert!(!morning.overlaps(&iv("08:00", "09:00")));
    }

    #[test]
    fn test_subtract_disjoint_returns_base() {
        let base = iv("09:00", "12:00");
        assert_eq!(base.subtract(&iv("12:00", "13:00")), vec![base]);
        assert_eq!(base.subtract(&iv("07:00", "09:00")), vec![base]);
    }

    #[test]
    fn test_subtract_left_edge() {
        let base = iv("09:00", "12:00");
        assert_eq!(base.subtract(&iv("08:00", "10:00")), vec![iv("10:00", "12:00")]);
        assert_eq!(base.subtract(&iv("09:00", "10:00")), vec![iv("10:00", "12:00")]);
    }

    #[test]
    fn test_subtract_right_edge() {
        let base = iv("09:00", "12:00");
        assert_eq!(base.subtract(&iv("11:00", "13:00")), vec![iv("09:00", "11:00")]);
        assert_eq!(base.subtract(&iv("11:00", "12:00")), vec![iv("09:00", "11:00")]);
    }

    #[test]
    fn test_subtract_inside_splits() {
        let base = iv("09:00", "21:00");
        assert_eq!(
            base.subtract(&iv("10:00", "12:00")),
            vec![iv("09:00", "10:00"), iv("12:00", "21:00")]
        );
    }

    #[test]
    fn test_subtract_covering_cut_leaves_nothing() {
        let base = iv("09:00", "17:00");
        assert!(base.subtract(&iv("09:00", "17:00")).is_empty());
        assert!(base.subtract(&iv("08:00", "18:00")).is_empty());
    }

    #[test]
    fn test_subtract_pieces_partition_base() {
        let marks = ["08:00", "09:00", "09:30", "10:00", "11:00", "12:00", "13:00"];
        let base = iv("09:00", "12:00");

        for (i, start) in marks.iter().enumerate() {
            for end in &marks[i + 1..] {
                let cut = iv(start, end);
                let pieces = base.subtract(&cut);

                for piece in &pieces {
                    assert!(base.contains(piece), "{} escapes {}", piece, base);
                    assert!(!piece.overlaps(&cut), "{} still overlaps {}", piece, cut);
                }
                for pair in pieces.windows(2) {
                    assert!(pair[0].end() <= pair[1].start());
                }

                let removed = if base.overlaps(&cut) {
                    let lo = base.start().max(cut.start()).minutes_since_midnight();
                    let hi = base.end().min(cut.end()).minutes_since_midnight();
                    (hi - lo) as u32
                } else {
                    0
                };
                assert_eq!(minutes(&pieces) + removed, base.duration_minutes() as u32);
            }
        }
    }

    #[test]
    fn test_subtract_many_applies_every_cut() {
        let base = iv("09:00", "21:00");
        let cuts = [iv("10:00", "12:00"), iv("14:00", "15:00"), iv("20:00", "22:00")];

        assert_eq!(
            subtract_many(base, &cuts),
            vec![iv("09:00", "10:00"), iv("12:00", "14:00"), iv("15:00", "20:00")]
        );
    }

    #[test]
    fn test_subtract_many_same_cut_twice_is_idempotent() {
        let base = iv("09:00", "17:00");
        let cut = iv("11:00", "13:00");

        assert_eq!(subtract_many(base, [&cut, &cut]), subtract_many(base, [&cut]));
    }

    #[test]
    fn test_subtract_many_order_independent() {
        let base = iv("09:00", "18:00");
        let a = iv("10:00", "13:00");
        let b = iv("12:00", "15:00");
        let c = iv("16:00", "17:00");

        let forward = subtract_many(base, [&a, &b, &c]);
        assert_eq!(forward, subtract_many(base, [&c, &b, &a]));
        assert_eq!(forward, subtract_many(base, [&b, &a, &c]));
        assert_eq!(forward, vec![iv("09:00", "10:00"), iv("15:00", "16:00"), iv("17:00", "18:00")]);
    }

    #[test]
    fn test_subtract_many_without_cuts() {
        let base = iv("09:00", "17:00");
        let no_cuts: [TimeInterval; 0] = [];
        assert_eq!(subtract_many(base, &no_cuts), vec![base]);
    }

    #[test]
    fn test_display() {
        assert_eq!(iv("09:00", "10:00").to_string(), "09:00 - 10:00");
    }
}
