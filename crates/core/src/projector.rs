// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries over a reconciled [`Timeline`].
//!
//! The projector never alters the timeline. Everything it returns is
//! either borrowed from the timeline or freshly derived from it.

use crate::decision::DecisionKind;
use crate::error::CoreError;
use crate::timeline::Timeline;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use su_vedtak_domain::{
    Category, DecisionFragment, DecisionId, Interval, Month, VersionedFact, subtract_all,
};
use time::{Date, OffsetDateTime};
use tracing::trace;

/// Options controlling how facts are projected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Merge adjacent facts of the same category whose content is equal.
    ///
    /// Off by default, so every projected fact maps back to exactly one
    /// timeline entry.
    pub coalesce_equal_facts: bool,
}

/// Per-category facts derived from a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    query: Interval,
    by_category: BTreeMap<Category, Vec<VersionedFact>>,
}

impl Projection {
    /// Returns the interval the underlying timeline was requested for.
    #[must_use]
    pub const fn query(&self) -> Interval {
        self.query
    }

    /// Iterates over the categories with at least one fact.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.by_category.keys().copied()
    }

    /// Returns the facts for `category` in chronological order.
    ///
    /// Empty if no entry carried the category.
    #[must_use]
    pub fn facts(&self, category: Category) -> &[VersionedFact] {
        self.by_category.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Returns the fact for `category` valid on `date`, if any.
    #[must_use]
    pub fn fact_at(&self, category: Category, date: Date) -> Option<&VersionedFact> {
        self.facts(category)
            .iter()
            .find(|fact| fact.interval().contains(date))
    }

    /// The facts the calculation engine consumes, by category.
    #[must_use]
    pub fn entitlement_basis(&self) -> BTreeMap<Category, &[VersionedFact]> {
        self.by_category
            .iter()
            .filter(|(category, _)| category.is_entitlement_basis())
            .map(|(category, facts)| (*category, facts.as_slice()))
            .collect()
    }
}

/// Queries over a timeline.
#[derive(Debug, Clone, Copy)]
pub struct FactProjector<'a> {
    timeline: &'a Timeline,
    config: ProjectionConfig,
}

impl<'a> FactProjector<'a> {
    /// Creates a projector with the default configuration.
    #[must_use]
    pub fn new(timeline: &'a Timeline) -> Self {
        Self::with_config(timeline, ProjectionConfig::default())
    }

    /// Creates a projector with an explicit configuration.
    #[must_use]
    pub const fn with_config(timeline: &'a Timeline, config: ProjectionConfig) -> Self {
        Self { timeline, config }
    }

    /// Returns the timeline being projected.
    #[must_use]
    pub const fn timeline(&self) -> &'a Timeline {
        self.timeline
    }

    /// Whether every day of the query interval is covered by some entry.
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        self.gaps().is_empty()
    }

    /// The parts of the query interval no decision covers, in order.
    #[must_use]
    pub fn gaps(&self) -> Vec<Interval> {
        subtract_all(&[self.timeline.query()], &self.timeline.covered())
    }

    /// The longest unbroken stretch starting at the query's first day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NoContiguousCoverage` if no entry covers the
    /// first day of the query interval.
    pub fn guaranteed_contiguous_sub_interval(&self) -> Result<Interval, CoreError> {
        let query: Interval = self.timeline.query();
        self.timeline
            .covered()
            .first()
            .filter(|run| run.start() == query.start())
            .copied()
            .ok_or(CoreError::NoContiguousCoverage { query })
    }

    /// Whether a suspension is in force anywhere within the query interval.
    ///
    /// Only suspensions that survived reconciliation count; one fully
    /// overridden by a later decision does not.
    #[must_use]
    pub fn has_suspension(&self) -> bool {
        self.timeline
            .entries()
            .iter()
            .any(|entry| entry.kind() == DecisionKind::Suspension)
    }

    /// The fragment in force on `date`, if any.
    #[must_use]
    pub fn facts_at(&self, date: Date) -> Option<&'a DecisionFragment> {
        self.timeline.fragment_at(date)
    }

    /// Attributes each touched month to a single decision.
    ///
    /// A month goes to the entry covering the most of its days within the
    /// query interval. On a tie the later-created decision wins. Months
    /// with no coverage at all are absent.
    #[must_use]
    pub fn per_month_breakdown(&self) -> BTreeMap<Month, DecisionId> {
        let mut best: BTreeMap<Month, (i64, OffsetDateTime, DecisionId)> = BTreeMap::new();

        for entry in self.timeline.entries() {
            let interval: Interval = entry.interval();
            for month in interval.months() {
                let days: i64 = days_within(interval, month);
                let candidate = (days, entry.created_at(), entry.decision_id());
                best.entry(month)
                    .and_modify(|current| {
                        if (candidate.0, candidate.1) > (current.0, current.1) {
                            *current = candidate;
                        }
                    })
                    .or_insert(candidate);
            }
        }

        best.into_iter()
            .map(|(month, (_, _, decision_id))| (month, decision_id))
            .collect()
    }

    /// Runs of consecutive months attributed to the same decision.
    ///
    /// Each run's interval is clipped to the query interval.
    ///
    /// # Errors
    ///
    /// Returns an error if a month lies outside the supported date range.
    pub fn grouped_breakdown(&self) -> Result<Vec<(Interval, DecisionId)>, CoreError> {
        let query: Interval = self.timeline.query();
        let mut runs: Vec<(Month, Month, DecisionId)> = Vec::new();

        for (month, decision_id) in self.per_month_breakdown() {
            match runs.last_mut() {
                Some((_, last, id)) if *id == decision_id && last.next() == month => {
                    *last = month;
                }
                _ => runs.push((month, month, decision_id)),
            }
        }

        runs.into_iter()
            .map(|(first, last, decision_id)| -> Result<(Interval, DecisionId), CoreError> {
                let start: Date = first.first_day()?.max(query.start());
                let end: Date = last.last_day()?.min(query.end());
                Ok((Interval::new(start, end)?, decision_id))
            })
            .collect()
    }

    /// Collects every entry's facts per category.
    ///
    /// Entries are disjoint and every fact lies within its entry, so each
    /// category's facts come out chronological and non-overlapping.
    #[must_use]
    pub fn project(&self) -> Projection {
        let mut by_category: BTreeMap<Category, Vec<VersionedFact>> = BTreeMap::new();

        for fact in self
            .timeline
            .entries()
            .iter()
            .flat_map(|entry| entry.fragment().facts())
        {
            by_category
                .entry(fact.category())
                .or_default()
                .push(fact.clone());
        }

        for (category, facts) in &mut by_category {
            if self.config.coalesce_equal_facts {
                *facts = coalesce_equal(facts);
            }
            trace!(%category, facts = facts.len(), "Projected category");
        }

        Projection {
            query: self.timeline.query(),
            by_category,
        }
    }
}

fn days_within(interval: Interval, month: Month) -> i64 {
    month
        .interval()
        .ok()
        .and_then(|month_span| interval.intersect(&month_span))
        .as_ref()
        .map_or(0, Interval::day_count)
}

/// Merges adjacent facts with equal content. Input must be sorted and disjoint.
fn coalesce_equal(facts: &[VersionedFact]) -> Vec<VersionedFact> {
    let mut merged: Vec<VersionedFact> = Vec::with_capacity(facts.len());
    for fact in facts {
        let joined: Option<VersionedFact> = merged.last().and_then(|last| {
            if !last.same_content(fact) || !last.interval().is_adjacent_to(&fact.interval()) {
                return None;
            }
            let span: Interval = last.interval().merge(&fact.interval())?;
            Some(last.respan(last.created_at().min(fact.created_at()), span))
        });

        if let Some(joined) = joined {
            merged.pop();
            merged.push(joined);
        } else {
            merged.push(fact.clone());
        }
    }
    merged
}
