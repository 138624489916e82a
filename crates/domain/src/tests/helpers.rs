// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Category, DecisionFragment, DecisionId, Deduction, DisabilityDegree, IncomeOwner, Interval,
    Outcome, Payload, VersionedFact,
};
use time::macros::datetime;
use time::{Date, OffsetDateTime};

pub fn created() -> OffsetDateTime {
    datetime!(2021-01-05 10:00 UTC)
}

pub fn interval(start: Date, end: Date) -> Interval {
    Interval::new(start, end).unwrap()
}

pub fn month(year: i32, month: time::Month) -> Interval {
    Interval::month(year, month).unwrap()
}

pub fn months(year: i32, from: time::Month, to: time::Month) -> Interval {
    let start = Interval::month(year, from).unwrap().start();
    let end = Interval::month(year, to).unwrap().end();
    Interval::new(start, end).unwrap()
}

pub fn assessment(category: Category, outcome: Outcome, interval: Interval) -> VersionedFact {
    VersionedFact::new(created(), interval, category, Payload::Assessment { outcome }).unwrap()
}

pub fn disability(degree: u8, interval: Interval) -> VersionedFact {
    VersionedFact::new(
        created(),
        interval,
        Category::Disability,
        Payload::Disability {
            outcome: Outcome::Granted,
            degree: DisabilityDegree::new(degree).unwrap(),
            expected_annual_income: 12_000,
        },
    )
    .unwrap()
}

pub fn income(monthly_amount: u32, interval: Interval) -> VersionedFact {
    VersionedFact::new(
        created(),
        interval,
        Category::Income,
        Payload::Income {
            deductions: vec![Deduction {
                kind: String::from("Arbeidsinntekt"),
                monthly_amount,
                owner: IncomeOwner::Applicant,
            }],
        },
    )
    .unwrap()
}

pub fn fragment(interval: Interval, facts: Vec<VersionedFact>) -> DecisionFragment {
    DecisionFragment::new(DecisionId::generate(), created(), interval, facts).unwrap()
}
