// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::interval::Interval;
use serde::{Deserialize, Serialize};
use time::Date;

/// A calendar month, e.g. April 2021.
///
/// Used as the reporting granularity for per-month attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Month {
    year: i32,
    month: time::Month,
}

impl Month {
    /// Creates a month from a year and a calendar month.
    #[must_use]
    pub const fn new(year: i32, month: time::Month) -> Self {
        Self { year, month }
    }

    /// The month containing `date`.
    #[must_use]
    pub const fn of(date: Date) -> Self {
        Self::new(date.year(), date.month())
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the calendar month.
    #[must_use]
    pub const fn month(&self) -> time::Month {
        self.month
    }

    /// The month after this one.
    #[must_use]
    pub fn next(&self) -> Self {
        match self.month {
            time::Month::December => Self::new(self.year.saturating_add(1), time::Month::January),
            other => Self::new(self.year, other.next()),
        }
    }

    /// The month before this one.
    #[must_use]
    pub fn previous(&self) -> Self {
        match self.month {
            time::Month::January => Self::new(self.year.saturating_sub(1), time::Month::December),
            other => Self::new(self.year, other.previous()),
        }
    }

    /// The first day of the month.
    ///
    /// # Errors
    ///
    /// Returns an error if the month lies outside the supported date range.
    pub fn first_day(&self) -> Result<Date, DomainError> {
        Date::from_calendar_date(self.year, self.month, 1).map_err(|_| {
            DomainError::DateArithmeticOverflow {
                operation: format!("calculating first day of {self}"),
            }
        })
    }

    /// The last day of the month.
    ///
    /// # Errors
    ///
    /// Returns an error if the month lies outside the supported date range.
    pub fn last_day(&self) -> Result<Date, DomainError> {
        let overflow = || DomainError::DateArithmeticOverflow {
            operation: format!("calculating last day of {self}"),
        };

        if self.year == Date::MAX.year() && self.month == time::Month::December {
            return Ok(Date::MAX);
        }

        self.next()
            .first_day()
            .map_err(|_| overflow())?
            .previous_day()
            .ok_or_else(overflow)
    }

    /// The interval covering the whole month.
    ///
    /// # Errors
    ///
    /// Returns an error if the month lies outside the supported date range.
    pub fn interval(&self) -> Result<Interval, DomainError> {
        Interval::new(self.first_day()?, self.last_day()?)
    }
}

impl PartialOrd for Month {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Month {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, u8::from(self.month)).cmp(&(other.year, u8::from(other.month)))
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, u8::from(self.month))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_next_rolls_over_year() {
        let december = Month::new(2021, time::Month::December);
        assert_eq!(december.next(), Month::new(2022, time::Month::January));
        assert_eq!(december.next().previous(), december);
    }

    #[test]
    fn test_last_day_handles_leap_year() {
        assert_eq!(
            Month::new(2024, time::Month::February).last_day().unwrap(),
            date!(2024 - 02 - 29)
        );
        assert_eq!(
            Month::new(2021, time::Month::February).last_day().unwrap(),
            date!(2021 - 02 - 28)
        );
    }

    #[test]
    fn test_months_are_ordered_chronologically() {
        let mut months = vec![
            Month::new(2022, time::Month::January),
            Month::new(2021, time::Month::December),
            Month::new(2021, time::Month::March),
        ];
        months.sort();
        assert_eq!(months[0], Month::new(2021, time::Month::March));
        assert_eq!(months[2], Month::new(2022, time::Month::January));
    }

    #[test]
    fn test_display() {
        assert_eq!(Month::new(2021, time::Month::April).to_string(), "2021-04");
    }
}
