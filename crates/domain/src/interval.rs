// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Closed, inclusive date intervals.
//!
//! An [`Interval`] is the unit of validity for everything on a decision
//! timeline: facts, fragments and timeline entries all carry one.
//!
//! ## Invariants
//!
//! - `start <= end`, enforced at construction and on deserialization
//! - Both bounds are inclusive
//! - Intervals are immutable; every operation returns a new value

use crate::error::DomainError;
use crate::month::Month;
use serde::{Deserialize, Serialize};
use time::Date;

/// A closed date range `[start, end]`.
///
/// Ordering is by start date, then end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    start: Date,
    end: Date,
}

#[derive(Deserialize)]
struct RawInterval {
    start: Date,
    end: Date,
}

impl TryFrom<RawInterval> for Interval {
    type Error = DomainError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl Interval {
    /// Creates a new interval.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInterval` if `start` is after `end`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// An interval covering exactly one day.
    #[must_use]
    pub const fn single_day(date: Date) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// The interval covering a whole calendar month.
    ///
    /// # Errors
    ///
    /// Returns an error if the month lies outside the supported date range.
    pub fn month(year: i32, month: time::Month) -> Result<Self, DomainError> {
        Month::new(year, month).interval()
    }

    /// The interval covering January 1st through December 31st.
    ///
    /// # Errors
    ///
    /// Returns an error if the year lies outside the supported date range.
    pub fn year(year: i32) -> Result<Self, DomainError> {
        let start: Date = Month::new(year, time::Month::January).first_day()?;
        let end: Date = Month::new(year, time::Month::December).last_day()?;
        Self::new(start, end)
    }

    /// Returns the first day (inclusive).
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day (inclusive).
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Number of days covered, counting both ends.
    #[must_use]
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).whole_days() + 1
    }

    /// Whether the two intervals share at least one day.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Whether one interval ends exactly the day before the other starts.
    #[must_use]
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        self.end.next_day() == Some(other.start) || other.end.next_day() == Some(self.start)
    }

    /// Whether `date` falls within this interval.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether `other` lies entirely within this interval.
    #[must_use]
    pub fn contains_interval(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The overlap of the two intervals, or `None` if they are disjoint.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// The parts of this interval not covered by `other`.
    ///
    /// Returns zero, one or two intervals in chronological order.
    #[must_use]
    pub fn minus(&self, other: &Self) -> Vec<Self> {
        if !self.overlaps(other) {
            return vec![*self];
        }

        let mut remainder: Vec<Self> = Vec::with_capacity(2);

        if let Some(before_end) = other
            .start
            .previous_day()
            .filter(|_| self.start < other.start)
        {
            remainder.push(Self {
                start: self.start,
                end: before_end,
            });
        }

        if let Some(after_start) = other.end.next_day().filter(|_| other.end < self.end) {
            remainder.push(Self {
                start: after_start,
                end: self.end,
            });
        }

        remainder
    }

    /// Joins two intervals that overlap or touch.
    ///
    /// Returns `None` if there is a gap between them.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Option<Self> {
        if self.overlaps(other) || self.is_adjacent_to(other) {
            Some(Self {
                start: self.start.min(other.start),
                end: self.end.max(other.end),
            })
        } else {
            None
        }
    }

    /// Every calendar month this interval touches, in order.
    ///
    /// Partially covered months at either end are included.
    #[must_use]
    pub fn months(&self) -> Vec<Month> {
        let last: Month = Month::of(self.end);
        let mut current: Month = Month::of(self.start);
        let mut months: Vec<Month> = Vec::new();

        while current <= last {
            months.push(current);
            current = current.next();
        }

        months
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// The tightest interval enclosing every interval in the slice.
///
/// The input may be unsorted and contain gaps. Returns `None` for an empty slice.
#[must_use]
pub fn min_and_max_of(intervals: &[Interval]) -> Option<Interval> {
    let start: Date = intervals.iter().map(Interval::start).min()?;
    let end: Date = intervals.iter().map(Interval::end).max()?;
    Some(Interval { start, end })
}

/// Reduces a set of intervals to the smallest number of contiguous intervals.
///
/// Overlapping and adjacent intervals are merged. The result is sorted.
#[must_use]
pub fn coalesce(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = intervals.to_vec();
    sorted.sort();

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        if let Some(joined) = merged.last().and_then(|last| last.merge(&interval)) {
            merged.pop();
            merged.push(joined);
        } else {
            merged.push(interval);
        }
    }
    merged
}

/// Removes every interval in `removed` from every interval in `intervals`.
///
/// The remainder is coalesced and sorted.
#[must_use]
pub fn subtract_all(intervals: &[Interval], removed: &[Interval]) -> Vec<Interval> {
    let mut remaining: Vec<Interval> = coalesce(intervals);
    for cut in removed {
        remaining = remaining
            .iter()
            .flat_map(|interval| interval.minus(cut))
            .collect();
    }
    coalesce(&remaining)
}

/// Whether the intervals together cover one unbroken stretch of days.
///
/// The input may be unsorted and overlapping. An empty slice is contiguous.
#[must_use]
pub fn is_contiguous(intervals: &[Interval]) -> bool {
    coalesce(intervals).len() <= 1
}

/// Whether any two intervals share a day.
#[must_use]
pub fn has_overlapping(intervals: &[Interval]) -> bool {
    let mut sorted: Vec<Interval> = intervals.to_vec();
    sorted.sort();
    sorted.windows(2).any(|pair| pair[0].overlaps(&pair[1]))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_minus_inner_interval_leaves_two_pieces() {
        let year = Interval::year(2021).unwrap();
        let april = Interval::month(2021, time::Month::April).unwrap();

        let pieces = year.minus(&april);

        assert_eq!(
            pieces,
            vec![
                Interval::new(date!(2021 - 01 - 01), date!(2021 - 03 - 31)).unwrap(),
                Interval::new(date!(2021 - 05 - 01), date!(2021 - 12 - 31)).unwrap(),
            ]
        );
    }

    #[test]
    fn test_minus_covering_interval_leaves_nothing() {
        let april = Interval::month(2021, time::Month::April).unwrap();
        let year = Interval::year(2021).unwrap();

        assert!(april.minus(&year).is_empty());
    }

    #[test]
    fn test_minus_disjoint_interval_is_identity() {
        let april = Interval::month(2021, time::Month::April).unwrap();
        let june = Interval::month(2021, time::Month::June).unwrap();

        assert_eq!(april.minus(&june), vec![april]);
    }

    #[test]
    fn test_minus_at_date_bounds_does_not_overflow() {
        let everything = Interval::new(Date::MIN, Date::MAX).unwrap();
        let first = Interval::single_day(Date::MIN);

        let pieces = everything.minus(&first);
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].end(), Date::MAX);
    }
}
