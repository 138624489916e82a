// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Decision, DecisionKind};
use su_vedtak_audit::{Actor, ActorRole, Cause, Provenance};
use su_vedtak_domain::{
    Category, DecisionFragment, DecisionId, Deduction, DisabilityDegree, IncomeOwner, Interval,
    Outcome, Payload, VersionedFact,
};
use time::macros::datetime;
use time::{Date, Duration, OffsetDateTime};

/// The creation instant of the `n`th decision in a test case.
pub fn instant(n: i64) -> OffsetDateTime {
    datetime!(2021-01-01 12:00 UTC) + Duration::days(n)
}

pub fn interval(start: Date, end: Date) -> Interval {
    Interval::new(start, end).unwrap()
}

pub fn months(year: i32, from: time::Month, to: time::Month) -> Interval {
    let start = Interval::month(year, from).unwrap().start();
    let end = Interval::month(year, to).unwrap().end();
    Interval::new(start, end).unwrap()
}

pub fn create_test_provenance() -> Provenance {
    Provenance::new(
        Actor::new(String::from("Z990001"), ActorRole::CaseHandler),
        Actor::new(String::from("Z990002"), ActorRole::Attestant),
        Cause::new(String::from("sak-2021-0042"), String::from("Søknad mottatt")),
    )
}

pub fn assessment(
    category: Category,
    outcome: Outcome,
    created_at: OffsetDateTime,
    interval: Interval,
) -> VersionedFact {
    VersionedFact::new(created_at, interval, category, Payload::Assessment { outcome }).unwrap()
}

pub fn disability(degree: u8, created_at: OffsetDateTime, interval: Interval) -> VersionedFact {
    VersionedFact::new(
        created_at,
        interval,
        Category::Disability,
        Payload::Disability {
            outcome: Outcome::Granted,
            degree: DisabilityDegree::new(degree).unwrap(),
            expected_annual_income: 0,
        },
    )
    .unwrap()
}

pub fn income(monthly_amount: u32, created_at: OffsetDateTime, interval: Interval) -> VersionedFact {
    VersionedFact::new(
        created_at,
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

/// A decision carrying a disability fact of `degree` over its whole interval.
pub fn decision_with_degree(
    kind: DecisionKind,
    created_at: OffsetDateTime,
    governed: Interval,
    degree: u8,
) -> Decision {
    decision(
        kind,
        created_at,
        governed,
        vec![disability(degree, created_at, governed)],
    )
}

pub fn decision(
    kind: DecisionKind,
    created_at: OffsetDateTime,
    governed: Interval,
    facts: Vec<VersionedFact>,
) -> Decision {
    let fragment =
        DecisionFragment::new(DecisionId::generate(), created_at, governed, facts).unwrap();
    Decision::new(kind, fragment, Some(create_test_provenance()))
}

pub fn degree_at(fragment: &DecisionFragment) -> Option<u8> {
    match fragment.fact(Category::Disability)?.payload() {
        Payload::Disability { degree, .. } => Some(degree.percent()),
        _ => None,
    }
}
