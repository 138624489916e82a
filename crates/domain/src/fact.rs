// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Versioned facts: immutable, identity-bearing eligibility data tied to one interval.
//!
//! ## Invariants
//!
//! - A fact is never mutated after creation
//! - Narrowing a fact (slicing or masking) yields new facts with fresh
//!   identities; the creation timestamp is copied from the source so
//!   provenance is preserved
//! - Amounts inside the payload are never recomputed when the interval
//!   narrows; a monthly amount stays a monthly amount

use crate::category::{Category, Payload};
use crate::error::DomainError;
use crate::ids::FactId;
use crate::interval::{Interval, subtract_all};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A single piece of eligibility or entitlement data valid for one interval.
///
/// Deserialization goes through [`VersionedFact::with_id`], so stored facts
/// are checked the same way as freshly built ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFact")]
pub struct VersionedFact {
    id: FactId,
    created_at: OffsetDateTime,
    interval: Interval,
    category: Category,
    payload: Payload,
}

#[derive(Deserialize)]
struct RawFact {
    id: FactId,
    created_at: OffsetDateTime,
    interval: Interval,
    category: Category,
    payload: Payload,
}

impl TryFrom<RawFact> for VersionedFact {
    type Error = DomainError;

    fn try_from(raw: RawFact) -> Result<Self, Self::Error> {
        Self::with_id(
            raw.id,
            raw.created_at,
            raw.interval,
            raw.category,
            raw.payload,
        )
    }
}

impl VersionedFact {
    /// Creates a new fact with a freshly generated identity.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PayloadCategoryMismatch` if the payload cannot
    /// describe the category.
    pub fn new(
        created_at: OffsetDateTime,
        interval: Interval,
        category: Category,
        payload: Payload,
    ) -> Result<Self, DomainError> {
        Self::with_id(FactId::generate(), created_at, interval, category, payload)
    }

    /// Creates a fact with a known identity, e.g. when loading from storage.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PayloadCategoryMismatch` if the payload cannot
    /// describe the category.
    pub fn with_id(
        id: FactId,
        created_at: OffsetDateTime,
        interval: Interval,
        category: Category,
        payload: Payload,
    ) -> Result<Self, DomainError> {
        if !payload.describes(category) {
            return Err(DomainError::PayloadCategoryMismatch {
                category,
                payload: payload.kind(),
            });
        }

        Ok(Self {
            id,
            created_at,
            interval,
            category,
            payload,
        })
    }

    /// Returns the fact's identity.
    #[must_use]
    pub const fn id(&self) -> FactId {
        self.id
    }

    /// Returns when the fact was originally created.
    #[must_use]
    pub const fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    /// Returns the interval the fact is valid for.
    #[must_use]
    pub const fn interval(&self) -> Interval {
        self.interval
    }

    /// Returns the fact's category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the business payload.
    #[must_use]
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Whether two facts carry the same business content.
    ///
    /// Identity, creation time and interval are ignored.
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.category == other.category && self.payload == other.payload
    }

    /// Narrows the fact to a sub-interval.
    ///
    /// The result has a new identity, the same creation time and payload,
    /// and `interval` as its validity.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IllegalSliceRequest` if `interval` is not
    /// contained in the fact's own interval.
    pub fn slice(&self, interval: Interval) -> Result<Self, DomainError> {
        if !self.interval.contains_interval(&interval) {
            return Err(DomainError::IllegalSliceRequest {
                source_interval: self.interval,
                requested: interval,
            });
        }
        Ok(self.narrowed(interval))
    }

    /// Masks out the given intervals.
    ///
    /// Returns one sliced fact per remaining contiguous stretch, in
    /// chronological order. If nothing overlaps, the fact itself is returned
    /// unchanged (same identity).
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

    /// Builds a copy valid for `interval` without checking containment.
    pub(crate) fn narrowed(&self, interval: Interval) -> Self {
        Self {
            id: FactId::generate(),
            created_at: self.created_at,
            interval,
            category: self.category,
            payload: self.payload.clone(),
        }
    }

    /// Builds a copy valid for `interval` with a new identity and creation time.
    ///
    /// Used when coalescing adjacent facts with equal content.
    #[must_use]
    pub fn respan(&self, created_at: OffsetDateTime, interval: Interval) -> Self {
        Self {
            id: FactId::generate(),
            created_at,
            interval,
            category: self.category,
            payload: self.payload.clone(),
        }
    }
}
