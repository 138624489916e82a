// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{interval, month, months};
use crate::{
    DomainError, Interval, Month, coalesce, has_overlapping, is_contiguous, min_and_max_of,
    subtract_all,
};
use time::Month::{April, August, December, February, January, July, June, March, May};
use time::macros::date;

#[test]
fn test_construction_rejects_start_after_end() {
    let result = Interval::new(date!(2021 - 02 - 01), date!(2021 - 01 - 31));

    assert_eq!(
        result,
        Err(DomainError::InvalidInterval {
            start: date!(2021 - 02 - 01),
            end: date!(2021 - 01 - 31),
        })
    );
}

#[test]
fn test_single_day_interval_is_valid() {
    let day = Interval::new(date!(2021 - 02 - 01), date!(2021 - 02 - 01)).unwrap();
    assert_eq!(day, Interval::single_day(date!(2021 - 02 - 01)));
    assert_eq!(day.day_count(), 1);
}

#[test]
fn test_year_covers_whole_year() {
    let year = Interval::year(2021).unwrap();
    assert_eq!(year.start(), date!(2021 - 01 - 01));
    assert_eq!(year.end(), date!(2021 - 12 - 31));
    assert_eq!(year.day_count(), 365);
}

#[test]
fn test_overlaps_is_inclusive_at_bounds() {
    let a = interval(date!(2021 - 01 - 01), date!(2021 - 03 - 31));
    let b = interval(date!(2021 - 03 - 31), date!(2021 - 06 - 30));
    let c = interval(date!(2021 - 04 - 01), date!(2021 - 06 - 30));

    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
    assert!(!a.overlaps(&c));
}

#[test]
fn test_adjacency_requires_exactly_one_day_between_end_and_start() {
    let q1 = months(2021, January, March);
    let q2 = months(2021, April, June);
    let may = month(2021, May);

    assert!(q1.is_adjacent_to(&q2));
    assert!(q2.is_adjacent_to(&q1));
    assert!(!q1.is_adjacent_to(&may));
    assert!(!q1.is_adjacent_to(&q1));
}

#[test]
fn test_intersect_returns_tightest_overlap() {
    let a = months(2021, January, July);
    let b = months(2021, April, December);

    assert_eq!(a.intersect(&b), Some(months(2021, April, July)));
    assert_eq!(month(2021, January).intersect(&month(2021, March)), None);
}

#[test]
fn test_contains_date() {
    let april = month(2021, April);
    assert!(april.contains(date!(2021 - 04 - 01)));
    assert!(april.contains(date!(2021 - 04 - 30)));
    assert!(!april.contains(date!(2021 - 05 - 01)));
}

#[test]
fn test_merge_joins_adjacent_and_overlapping() {
    assert_eq!(
        month(2021, January).merge(&month(2021, February)),
        Some(months(2021, January, February))
    );
    assert_eq!(
        months(2021, January, April).merge(&months(2021, March, June)),
        Some(months(2021, January, June))
    );
    assert_eq!(month(2021, January).merge(&month(2021, March)), None);
}

#[test]
fn test_months_includes_partial_months() {
    let span = interval(date!(2021 - 01 - 15), date!(2021 - 03 - 02));

    assert_eq!(
        span.months(),
        vec![
            Month::new(2021, January),
            Month::new(2021, February),
            Month::new(2021, March),
        ]
    );
}

#[test]
fn test_min_and_max_of_unsorted_with_gaps() {
    let intervals = vec![month(2021, May), month(2021, January), month(2021, March)];

    assert_eq!(
        min_and_max_of(&intervals),
        Some(months(2021, January, May))
    );
    assert_eq!(min_and_max_of(&[]), None);
}

#[test]
fn test_coalesce_merges_to_minimum_number_of_intervals() {
    let intervals = vec![
        month(2021, March),
        month(2021, January),
        month(2021, February),
        months(2021, June, August),
        month(2021, July),
    ];

    assert_eq!(
        coalesce(&intervals),
        vec![months(2021, January, March), months(2021, June, August)]
    );
}

#[test]
fn test_subtract_all_removes_every_cut() {
    let remaining = subtract_all(
        &[Interval::year(2021).unwrap()],
        &[month(2021, February), months(2021, May, December)],
    );

    assert_eq!(
        remaining,
        vec![month(2021, January), months(2021, March, April)]
    );
}

#[test]
fn test_is_contiguous() {
    assert!(is_contiguous(&[]));
    assert!(is_contiguous(&[month(2021, February), month(2021, January)]));
    assert!(!is_contiguous(&[month(2021, January), month(2021, March)]));
}

#[test]
fn test_has_overlapping() {
    assert!(!has_overlapping(&[month(2021, January), month(2021, February)]));
    assert!(has_overlapping(&[
        Interval::year(2021).unwrap(),
        months(2021, June, July)
    ]));
}
