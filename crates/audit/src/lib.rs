// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Provenance of decisions: who decided, who attested, and why.
//!
//! Provenance is carried through reconciliation untouched. It never
//! influences which decision is in force for a period.

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// The role an actor played in producing a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorRole {
    /// The case handler who prepared the decision (saksbehandler).
    CaseHandler,
    /// The second party who approved it (attestant).
    Attestant,
    /// An automated process, e.g. the yearly rate adjustment.
    System,
}

/// Represents an entity that took part in producing a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The unique identifier for this actor, e.g. a NAV ident.
    pub id: String,
    /// The role the actor played.
    pub role: ActorRole,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role the actor played
    #[must_use]
    pub const fn new(id: String, role: ActorRole) -> Self {
        Self { id, role }
    }
}

/// Represents the reason a decision was made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    /// Identifier of the case-processing step (behandling) that produced the decision.
    pub id: String,
    /// A description of the cause, e.g. "Endring i inntekt".
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier of the producing case-processing step
    /// * `description` - A description of what triggered the decision
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Who produced a decision and why.
///
/// Manual decisions are prepared by one actor and attested by another.
/// Automated decisions carry a single system actor in both positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// The actor who prepared the decision.
    pub decided_by: Actor,
    /// The actor who approved it.
    pub attested_by: Actor,
    /// The reason for the decision.
    pub cause: Cause,
}

impl Provenance {
    /// Creates a new `Provenance`.
    ///
    /// # Arguments
    ///
    /// * `decided_by` - The actor who prepared the decision
    /// * `attested_by` - The actor who approved it
    /// * `cause` - The reason for the decision
    #[must_use]
    pub const fn new(decided_by: Actor, attested_by: Actor, cause: Cause) -> Self {
        Self {
            decided_by,
            attested_by,
            cause,
        }
    }

    /// Creates provenance for a decision made without human involvement.
    #[must_use]
    pub fn automatic(system_id: &str, cause: Cause) -> Self {
        let system: Actor = Actor::new(system_id.to_string(), ActorRole::System);
        Self::new(system.clone(), system, cause)
    }

    /// Whether no human took part in the decision.
    #[must_use]
    pub fn is_automatic(&self) -> bool {
        self.decided_by.role == ActorRole::System && self.attested_by.role == ActorRole::System
    }

    /// Whether the decision was attested by someone other than the one who prepared it.
    #[must_use]
    pub fn has_independent_attestation(&self) -> bool {
        self.attested_by.role == ActorRole::Attestant && self.decided_by.id != self.attested_by.id
    }
}
