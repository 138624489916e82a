// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The reconciled, non-overlapping view of which decision is in force when.
//!
//! A [`Timeline`] is derived on demand and never persisted. It is only ever
//! constructed through the validator, so every instance holds:
//!
//! - Entries sorted chronologically
//! - No two entries sharing a day
//! - Every entry within the query interval
//!
//! Gaps are allowed; detecting them is up to the caller (see
//! [`crate::FactProjector`]).

use crate::decision::DecisionKind;
use crate::error::CoreError;
use serde::Serialize;
use su_vedtak_audit::Provenance;
use su_vedtak_domain::{
    DecisionFragment, DecisionId, DomainError, Interval, Month, coalesce,
};
use time::{Date, OffsetDateTime};

/// One stretch of the timeline governed by a single decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    kind: DecisionKind,
    fragment: DecisionFragment,
    provenance: Option<Provenance>,
}

impl TimelineEntry {
    pub(crate) const fn new(
        kind: DecisionKind,
        fragment: DecisionFragment,
        provenance: Option<Provenance>,
    ) -> Self {
        Self {
            kind,
            fragment,
            provenance,
        }
    }

    /// Returns the stretch of time this entry covers.
    #[must_use]
    pub const fn interval(&self) -> Interval {
        self.fragment.interval()
    }

    /// Returns the identity of the decision in force.
    #[must_use]
    pub const fn decision_id(&self) -> DecisionId {
        self.fragment.decision_id()
    }

    /// Returns the creation instant of the decision in force.
    #[must_use]
    pub const fn created_at(&self) -> OffsetDateTime {
        self.fragment.created_at()
    }

    /// Returns the kind of the decision in force.
    #[must_use]
    pub const fn kind(&self) -> DecisionKind {
        self.kind
    }

    /// Returns the decision's fragment, sliced to this entry's interval.
    #[must_use]
    pub const fn fragment(&self) -> &DecisionFragment {
        &self.fragment
    }

    /// Returns the decision's provenance, if recorded.
    #[must_use]
    pub const fn provenance(&self) -> Option<&Provenance> {
        self.provenance.as_ref()
    }

    fn slice(&self, interval: Interval) -> Result<Self, DomainError> {
        Ok(Self {
            kind: self.kind,
            fragment: self.fragment.slice(interval)?,
            provenance: self.provenance.clone(),
        })
    }
}

/// The decisions in force within a query interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    query: Interval,
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Builds a timeline after checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two entries overlap or are out of order
    /// - An entry reaches outside `query`
    pub(crate) fn new(query: Interval, entries: Vec<TimelineEntry>) -> Result<Self, CoreError> {
        validate(query, &entries)?;
        Ok(Self { query, entries })
    }

    /// Returns the interval this timeline was requested for.
    #[must_use]
    pub const fn query(&self) -> Interval {
        self.query
    }

    /// Returns the entries in chronological order.
    #[must_use]
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Whether no decision is in force anywhere in the query interval.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the entry covering `date`, if any.
    #[must_use]
    pub fn entry_at(&self, date: Date) -> Option<&TimelineEntry> {
        let index: usize = self
            .entries
            .partition_point(|entry| entry.interval().end() < date);
        self.entries
            .get(index)
            .filter(|entry| entry.interval().contains(date))
    }

    /// Returns the fragment in force on `date`, if any.
    #[must_use]
    pub fn fragment_at(&self, date: Date) -> Option<&DecisionFragment> {
        self.entry_at(date).map(TimelineEntry::fragment)
    }

    /// The covered parts of the query interval, as the fewest contiguous intervals.
    #[must_use]
    pub fn covered(&self) -> Vec<Interval> {
        let intervals: Vec<Interval> = self.entries.iter().map(TimelineEntry::interval).collect();
        coalesce(&intervals)
    }

    /// The decisions in force somewhere on the timeline, in order of first appearance.
    #[must_use]
    pub fn decision_ids(&self) -> Vec<DecisionId> {
        let mut ids: Vec<DecisionId> = Vec::new();
        for entry in &self.entries {
            if !ids.contains(&entry.decision_id()) {
                ids.push(entry.decision_id());
            }
        }
        ids
    }

    /// Restricts the timeline to a narrower interval.
    ///
    /// Entries crossing the new bounds are sliced; entries outside are dropped.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IllegalSliceRequest` (as a domain violation) if
    /// `interval` is not within the current query interval.
    pub fn shrink_to(&self, interval: Interval) -> Result<Self, CoreError> {
        if !self.query.contains_interval(&interval) {
            return Err(DomainError::IllegalSliceRequest {
                source_interval: self.query,
                requested: interval,
            }
            .into());
        }

        let entries: Vec<TimelineEntry> = self
            .entries
            .iter()
            .filter_map(|entry| {
                entry
                    .interval()
                    .intersect(&interval)
                    .map(|visible| entry.slice(visible))
            })
            .collect::<Result<_, _>>()?;

        Self::new(interval, entries)
    }

    /// Removes everything before the first day of `month`.
    ///
    /// Returns `None` if `month` starts after the query interval ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the month lies outside the supported date range.
    pub fn drop_months_before(&self, month: Month) -> Result<Option<Self>, CoreError> {
        let cutoff: Date = month.first_day()?;

        if cutoff <= self.query.start() {
            return Ok(Some(self.clone()));
        }
        if cutoff > self.query.end() {
            return Ok(None);
        }

        let remaining: Interval = Interval::new(cutoff, self.query.end())?;
        self.shrink_to(remaining).map(Some)
    }
}

fn validate(query: Interval, entries: &[TimelineEntry]) -> Result<(), CoreError> {
    if let Some(outside) = entries
        .iter()
        .find(|entry| !query.contains_interval(&entry.interval()))
    {
        return Err(CoreError::EntryOutsideQuery {
            entry: outside.interval(),
            query,
        });
    }

    if let Some(pair) = entries
        .windows(2)
        .find(|pair| pair[0].interval().end() >= pair[1].interval().start())
    {
        return Err(CoreError::OverlappingTimeline {
            first: pair[0].interval(),
            second: pair[1].interval(),
        });
    }

    Ok(())
}
