// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use su_vedtak_domain::{DecisionId, DomainError, Interval};
use time::OffsetDateTime;

/// Errors that can occur while reconciling decisions or projecting facts.
///
/// All of these are local and synchronous. No partial timeline or
/// projection is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// Two decisions for the same case share a creation instant.
    #[error(
        "Ambiguous decision ordering: decisions {first} and {second} were both created at {created_at}"
    )]
    AmbiguousDecisionOrdering {
        /// The shared creation instant.
        created_at: OffsetDateTime,
        /// The first decision with that instant.
        first: DecisionId,
        /// The second decision with that instant.
        second: DecisionId,
    },
    /// The timeline has a gap at the very start of the query interval.
    #[error("No contiguous coverage from the start of {query}")]
    NoContiguousCoverage {
        /// The requested interval.
        query: Interval,
    },
    /// Timeline entries overlap or are out of order.
    #[error("Timeline has entries with overlapping periods: {first} and {second}")]
    OverlappingTimeline {
        /// The earlier entry's interval.
        first: Interval,
        /// The entry that overlaps it.
        second: Interval,
    },
    /// A timeline entry reaches outside the query interval.
    #[error("Timeline entry {entry} lies outside the query interval {query}")]
    EntryOutsideQuery {
        /// The entry's interval.
        entry: Interval,
        /// The query interval.
        query: Interval,
    },
}
