// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::category::Category;
use crate::error::DomainError;
use crate::fact::VersionedFact;
use crate::ids::DecisionId;
use crate::interval::{Interval, subtract_all};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// The eligibility and entitlement data a decision establishes for one interval.
///
/// Holds at most one fact per category. Every fact lies within the
/// fragment's interval; facts supplied with a wider interval are sliced to
/// fit at construction.
///
/// Deserialization goes through [`DecisionFragment::new`]. Stored facts are
/// re-keyed by their own category, and the same duplicate and containment
/// rules apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFragment")]
pub struct DecisionFragment {
    decision_id: DecisionId,
    created_at: OffsetDateTime,
    interval: Interval,
    facts: BTreeMap<Category, VersionedFact>,
}

#[derive(Deserialize)]
struct RawFragment {
    decision_id: DecisionId,
    created_at: OffsetDateTime,
    interval: Interval,
    facts: BTreeMap<Category, VersionedFact>,
}

impl TryFrom<RawFragment> for DecisionFragment {
    type Error = DomainError;

    fn try_from(raw: RawFragment) -> Result<Self, Self::Error> {
        Self::new(
            raw.decision_id,
            raw.created_at,
            raw.interval,
            raw.facts.into_values().collect(),
        )
    }
}

impl DecisionFragment {
    /// Creates a fragment for a decision.
    ///
    /// # Arguments
    ///
    /// * `decision_id` - The decision this fragment belongs to
    /// * `created_at` - The decision's creation instant
    /// * `interval` - The period the decision governs
    /// * `facts` - At most one fact per category
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two facts share a category
    /// - A fact does not overlap `interval` at all
    pub fn new(
        decision_id: DecisionId,
        created_at: OffsetDateTime,
        interval: Interval,
        facts: Vec<VersionedFact>,
    ) -> Result<Self, DomainError> {
        let mut by_category: BTreeMap<Category, VersionedFact> = BTreeMap::new();

        for fact in facts {
            let category: Category = fact.category();
            if by_category.contains_key(&category) {
                return Err(DomainError::DuplicateCategory(category));
            }

            let overlap: Interval =
                fact.interval()
                    .intersect(&interval)
                    .ok_or(DomainError::FactOutsideFragment {
                        category,
                        fact_interval: fact.interval(),
                        fragment_interval: interval,
                    })?;

            let fitted: VersionedFact = if overlap == fact.interval() {
                fact
            } else {
                fact.narrowed(overlap)
            };
            by_category.insert(category, fitted);
        }

        Ok(Self {
            decision_id,
            created_at,
            interval,
            facts: by_category,
        })
    }

    /// Returns the identity of the decision that produced this fragment.
    #[must_use]
    pub const fn decision_id(&self) -> DecisionId {
        self.decision_id
    }

    /// Returns the creation instant of the producing decision.
    #[must_use]
    pub const fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    /// Returns the governed interval.
    #[must_use]
    pub const fn interval(&self) -> Interval {
        self.interval
    }

    /// Returns the fact for `category`, if the fragment carries one.
    #[must_use]
    pub fn fact(&self, category: Category) -> Option<&VersionedFact> {
        self.facts.get(&category)
    }

    /// Iterates over all facts in category order.
    pub fn facts(&self) -> impl Iterator<Item = &VersionedFact> {
        self.facts.values()
    }

    /// Iterates over the categories present.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.facts.keys().copied()
    }

    /// Whether both fragments carry the same business content per category.
    ///
    /// Identities, creation times and intervals are ignored.
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.facts.len() == other.facts.len()
            && self.facts.iter().all(|(category, fact)| {
                other
                    .facts
                    .get(category)
                    .is_some_and(|theirs| fact.same_content(theirs))
            })
    }

    /// Narrows the fragment to a sub-interval.
    ///
    /// Facts entirely outside `interval` are dropped; facts crossing its
    /// bounds are sliced. Facts already inside are kept as they are. Slicing
    /// to the fragment's own interval returns an identical copy.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IllegalSliceRequest` if `interval` is not
    /// contained in the fragment's interval.
    pub fn slice(&self, interval: Interval) -> Result<Self, DomainError> {
        if !self.interval.contains_interval(&interval) {
            return Err(DomainError::IllegalSliceRequest {
                source_interval: self.interval,
                requested: interval,
            });
        }
        if interval == self.interval {
            return Ok(self.clone());
        }
        Ok(self.narrowed(interval))
    }

    /// Masks out the given intervals.
    ///
    /// Returns one fragment per remaining contiguous stretch, in
    /// chronological order.
    #[must_use]
    pub fn remove_intervals(&self, removed: &[Interval]) -> Vec<Self> {
        if !removed.iter().any(|cut| cut.overlaps(&self.interval)) {
            return vec![self.clone()];
        }

        subtract_all(&[self.interval], removed)
            .into_iter()
            .map(|interval| self.narrowed(interval))
            .collect()
    }

    fn narrowed(&self, interval: Interval) -> Self {
        let facts: BTreeMap<Category, VersionedFact> = self
            .facts
            .iter()
            .filter_map(|(category, fact)| {
                let overlap: Interval = fact.interval().intersect(&interval)?;
                let fitted: VersionedFact = if overlap == fact.interval() {
                    fact.clone()
                } else {
                    fact.narrowed(overlap)
                };
                Some((*category, fitted))
            })
            .collect();

        Self {
            decision_id: self.decision_id,
            created_at: self.created_at,
            interval,
            facts,
        }
    }
}
