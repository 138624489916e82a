// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use su_vedtak_audit::Provenance;
use su_vedtak_domain::{DecisionFragment, DecisionId, Interval};
use time::OffsetDateTime;

/// What kind of outcome a decision records.
///
/// The kind is metadata for surrounding workflows. Reconciliation treats
/// every kind the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionKind {
    /// First grant for a benefit period (innvilget søknadsbehandling).
    InitialGrant,
    /// Revision of earlier decisions (revurdering), granting or terminating.
    Revision,
    /// Payments suspended (stans).
    Suspension,
    /// Payments resumed after a suspension (gjenopptak).
    Resumption,
    /// Revision without consequences for payments.
    NoChange,
    /// Yearly rate adjustment (regulering).
    Regulation,
}

impl DecisionKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InitialGrant => "InitialGrant",
            Self::Revision => "Revision",
            Self::Suspension => "Suspension",
            Self::Resumption => "Resumption",
            Self::NoChange => "NoChange",
            Self::Regulation => "Regulation",
        }
    }
}

impl FromStr for DecisionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "InitialGrant" => Ok(Self::InitialGrant),
            "Revision" => Ok(Self::Revision),
            "Suspension" => Ok(Self::Suspension),
            "Resumption" => Ok(Self::Resumption),
            "NoChange" => Ok(Self::NoChange),
            "Regulation" => Ok(Self::Regulation),
            _ => Err(format!("Unknown decision kind: {s}")),
        }
    }
}

impl std::fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable decision (vedtak) produced by case processing.
///
/// The decision's identity, creation instant and governed interval all
/// come from its fragment, so they can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    kind: DecisionKind,
    fragment: DecisionFragment,
    provenance: Option<Provenance>,
}

impl Decision {
    /// Creates a decision.
    ///
    /// # Arguments
    ///
    /// * `kind` - What the decision records
    /// * `fragment` - The data it establishes and the interval it governs
    /// * `provenance` - Who made it and why, if known
    #[must_use]
    pub const fn new(
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

    /// Returns the decision's identity.
    #[must_use]
    pub const fn id(&self) -> DecisionId {
        self.fragment.decision_id()
    }

    /// Returns the instant the decision was created.
    ///
    /// This alone determines precedence between overlapping decisions.
    #[must_use]
    pub const fn created_at(&self) -> OffsetDateTime {
        self.fragment.created_at()
    }

    /// Returns the interval the decision governs.
    #[must_use]
    pub const fn interval(&self) -> Interval {
        self.fragment.interval()
    }

    /// Returns the decision kind.
    #[must_use]
    pub const fn kind(&self) -> DecisionKind {
        self.kind
    }

    /// Returns the decision's fragment.
    #[must_use]
    pub const fn fragment(&self) -> &DecisionFragment {
        &self.fragment
    }

    /// Returns the decision's provenance, if recorded.
    #[must_use]
    pub const fn provenance(&self) -> Option<&Provenance> {
        self.provenance.as_ref()
    }
}
