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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod decision;
mod error;
mod projector;
mod reconcile;
mod timeline;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use decision::{Decision, DecisionKind};
pub use error::CoreError;
pub use projector::{FactProjector, Projection, ProjectionConfig};
pub use reconcile::reconcile;
pub use timeline::{Timeline, TimelineEntry};

/// Validates that a set of decisions can be ordered unambiguously.
///
/// This is a read-only check, suitable for running before a new decision
/// is stored alongside existing ones.
///
/// # Arguments
///
/// * `decisions` - Every decision for a single case
///
/// # Errors
///
/// Returns `CoreError::AmbiguousDecisionOrdering` if two decisions share a
/// creation instant.
pub fn validate_unique_creation_instants(decisions: &[Decision]) -> Result<(), CoreError> {
    reconcile::order_by_creation(decisions).map(|_| ())
}
