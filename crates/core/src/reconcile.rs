// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reconciliation of overlapping decisions into a single timeline.
//!
//! Decisions are laid over each other in creation order. Each one masks
//! whatever earlier decisions governed within its interval; the start of
//! the governed interval plays no part in precedence. The surviving
//! stretches are then restricted to the query interval and each decision's
//! fragment is sliced to fit.

use crate::decision::Decision;
use crate::error::CoreError;
use crate::timeline::{Timeline, TimelineEntry};
use su_vedtak_domain::Interval;
use tracing::{debug, instrument, trace};

/// A stretch of time and the decision currently governing it.
#[derive(Debug, Clone, Copy)]
struct Segment<'a> {
    interval: Interval,
    decision: &'a Decision,
}

/// Reconciles a case's decisions into the timeline for `query`.
///
/// Input order does not matter. The result is deterministic for a given
/// set of decisions and query.
///
/// # Arguments
///
/// * `decisions` - Every decision for a single case, in any order
/// * `query` - The interval to reconcile over
///
/// # Errors
///
/// Returns an error if:
/// - Two decisions share a creation instant
/// - Slicing a fragment violates a domain rule
pub fn reconcile(decisions: &[Decision], query: Interval) -> Result<Timeline, CoreError> {
    let ordered: Vec<&Decision> = order_by_creation(decisions)?;
    reconcile_ordered(&ordered, query)
}

#[instrument(level = "debug", skip_all, fields(decisions = ordered.len(), query = %query))]
fn reconcile_ordered(ordered: &[&Decision], query: Interval) -> Result<Timeline, CoreError> {
    let mut overlay: Vec<Segment<'_>> = Vec::new();
    for &decision in ordered {
        overlay = lay_over(overlay, decision);
        trace!(
            decision_id = %decision.id(),
            created_at = %decision.created_at(),
            interval = %decision.interval(),
            segments = overlay.len(),
            "Laid decision over timeline"
        );
    }

    let entries: Vec<TimelineEntry> = restrict(&overlay, query)?;
    debug!(entries = entries.len(), "Reconciled timeline");

    Timeline::new(query, entries)
}

/// Orders decisions by creation instant, ties broken by identity.
///
/// # Errors
///
/// Returns `CoreError::AmbiguousDecisionOrdering` if two decisions share a
/// creation instant.
pub(crate) fn order_by_creation(decisions: &[Decision]) -> Result<Vec<&Decision>, CoreError> {
    let mut ordered: Vec<&Decision> = decisions.iter().collect();
    ordered.sort_by(|a, b| {
        a.created_at()
            .cmp(&b.created_at())
            .then_with(|| a.id().cmp(&b.id()))
    });

    if let Some(pair) = ordered
        .windows(2)
        .find(|pair| pair[0].created_at() == pair[1].created_at())
    {
        return Err(CoreError::AmbiguousDecisionOrdering {
            created_at: pair[0].created_at(),
            first: pair[0].id(),
            second: pair[1].id(),
        });
    }

    Ok(ordered)
}

fn lay_over<'a>(overlay: Vec<Segment<'a>>, decision: &'a Decision) -> Vec<Segment<'a>> {
    let governed: Interval = decision.interval();

    let mut next: Vec<Segment<'a>> = overlay
        .into_iter()
        .flat_map(|segment| {
            segment
                .interval
                .minus(&governed)
                .into_iter()
                .map(move |remaining| Segment {
                    interval: remaining,
                    decision: segment.decision,
                })
        })
        .collect();

    next.push(Segment {
        interval: governed,
        decision,
    });
    next.sort_by_key(|segment| segment.interval);
    next
}

fn restrict(overlay: &[Segment<'_>], query: Interval) -> Result<Vec<TimelineEntry>, CoreError> {
    overlay
        .iter()
        .filter_map(|segment| {
            segment
                .interval
                .intersect(&query)
                .map(|visible| (segment.decision, visible))
        })
        .map(|(decision, visible)| -> Result<TimelineEntry, CoreError> {
            let fragment = decision.fragment().slice(visible)?;
            Ok(TimelineEntry::new(
                decision.kind(),
                fragment,
                decision.provenance().cloned(),
            ))
        })
        .collect()
}
