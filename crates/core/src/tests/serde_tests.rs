// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{assessment, decision, decision_with_degree, instant, months};
use crate::{Decision, DecisionKind, FactProjector, ProjectionConfig, reconcile};
use su_vedtak_domain::{Category, Interval, Outcome, VersionedFact};
use time::Month::{December, January, June, March};
use time::macros::datetime;

#[test]
fn test_decision_round_trip_preserves_creation_instant() {
    let created = datetime!(2021-03-04 13:37:00.123456789 +01:00);
    let original: Decision =
        decision_with_degree(DecisionKind::Revision, created, months(2021, January, June), 75);

    let json: String = serde_json::to_string(&original).unwrap();
    let restored: Decision = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, original);
    assert_eq!(restored.created_at(), created);
}

#[test]
fn test_reconciling_restored_decisions_gives_same_timeline() {
    let grant = decision_with_degree(
        DecisionKind::InitialGrant,
        datetime!(2021-01-01 09:00:00.000000001 UTC),
        Interval::year(2021).unwrap(),
        100,
    );
    let revision = decision_with_degree(
        DecisionKind::Revision,
        datetime!(2021-01-01 09:00:00.000000002 UTC),
        months(2021, June, December),
        50,
    );
    let stored: String = serde_json::to_string(&vec![grant, revision]).unwrap();
    let restored: Vec<Decision> = serde_json::from_str(&stored).unwrap();

    let timeline = reconcile(&restored, Interval::year(2021).unwrap()).unwrap();

    assert_eq!(timeline.len(), 2);
}

#[test]
fn test_projection_config_defaults() {
    let config: ProjectionConfig = serde_json::from_str("{}").unwrap();

    assert_eq!(config, ProjectionConfig::default());
    assert!(!config.coalesce_equal_facts);

    let explicit: ProjectionConfig =
        serde_json::from_str(r#"{"coalesce_equal_facts": true}"#).unwrap();
    assert!(explicit.coalesce_equal_facts);
}

#[test]
fn test_restored_decision_cannot_leak_facts_outside_its_interval() {
    let quarter: Interval = months(2021, January, March);
    let grant: Decision = decision(
        DecisionKind::InitialGrant,
        instant(0),
        quarter,
        vec![assessment(Category::Residency, Outcome::Granted, instant(0), quarter)],
    );
    let mut stored = serde_json::to_value(&grant).unwrap();
    let facts = stored["fragment"]["facts"].as_object_mut().unwrap();
    let mut residency = facts.remove("Residency").unwrap();
    residency["interval"] = serde_json::to_value(Interval::year(2021).unwrap()).unwrap();
    facts.insert(String::from("Income"), residency);

    let restored: Decision = serde_json::from_value(stored).unwrap();
    let timeline = reconcile(&[restored], quarter).unwrap();
    let projection = FactProjector::new(&timeline).project();

    assert!(projection.facts(Category::Income).is_empty());
    let residency_periods: Vec<Interval> = projection
        .facts(Category::Residency)
        .iter()
        .map(VersionedFact::interval)
        .collect();
    assert_eq!(residency_periods, vec![quarter]);
}
