// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::category::Category;
use crate::interval::Interval;
use time::Date;

/// Errors raised while constructing or narrowing periods, facts and fragments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// An interval was constructed with its start after its end.
    #[error("Invalid interval: start {start} is after end {end}")]
    InvalidInterval {
        /// The requested start date.
        start: Date,
        /// The requested end date.
        end: Date,
    },
    /// A slice was requested outside the bounds of the source interval.
    ///
    /// This is a programming error: the reconciler only ever slices to
    /// intervals it derived from the source.
    #[error("Illegal slice request: {requested} is not contained in {source_interval}")]
    IllegalSliceRequest {
        /// The interval of the value being sliced.
        source_interval: Interval,
        /// The interval that was requested.
        requested: Interval,
    },
    /// A fragment was given two facts for the same category.
    #[error("Duplicate fact for category {0}")]
    DuplicateCategory(Category),
    /// A fact does not overlap the fragment it was attached to.
    #[error("Fact for category {category} covering {fact_interval} lies outside fragment {fragment_interval}")]
    FactOutsideFragment {
        /// The category of the offending fact.
        category: Category,
        /// The fact's interval.
        fact_interval: Interval,
        /// The fragment's interval.
        fragment_interval: Interval,
    },
    /// A payload was attached to a category it does not describe.
    #[error("Payload of kind '{payload}' cannot describe category {category}")]
    PayloadCategoryMismatch {
        /// The category the fact was created for.
        category: Category,
        /// The payload kind that was supplied.
        payload: &'static str,
    },
    /// Disability degree outside 0..=100.
    #[error("Invalid disability degree: {0}. Must be between 0 and 100")]
    InvalidDisabilityDegree(u8),
    /// Date arithmetic overflow.
    #[error("Date arithmetic overflow while {operation}")]
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}
