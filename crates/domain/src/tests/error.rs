// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::month;
use crate::{Category, DomainError};
use time::macros::date;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidInterval {
        start: date!(2021 - 05 - 01),
        end: date!(2021 - 04 - 30),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid interval: start 2021-05-01 is after end 2021-04-30"
    );

    let err: DomainError = DomainError::IllegalSliceRequest {
        source_interval: month(2021, time::Month::April),
        requested: month(2021, time::Month::May),
    };
    assert_eq!(
        format!("{err}"),
        "Illegal slice request: [2021-05-01, 2021-05-31] is not contained in [2021-04-01, 2021-04-30]"
    );

    let err: DomainError = DomainError::DuplicateCategory(Category::Wealth);
    assert_eq!(format!("{err}"), "Duplicate fact for category Wealth");

    let err: DomainError = DomainError::PayloadCategoryMismatch {
        category: Category::Income,
        payload: "Assessment",
    };
    assert_eq!(
        format!("{err}"),
        "Payload of kind 'Assessment' cannot describe category Income"
    );

    let err: DomainError = DomainError::InvalidDisabilityDegree(120);
    assert_eq!(
        format!("{err}"),
        "Invalid disability degree: 120. Must be between 0 and 100"
    );

    let err: DomainError = DomainError::DateArithmeticOverflow {
        operation: String::from("calculating last day of 9999-12"),
    };
    assert_eq!(
        format!("{err}"),
        "Date arithmetic overflow while calculating last day of 9999-12"
    );
}
