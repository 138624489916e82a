// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Actor, ActorRole, Cause, Provenance};

fn case_handler() -> Actor {
    Actor::new(String::from("Z990001"), ActorRole::CaseHandler)
}

fn attestant() -> Actor {
    Actor::new(String::from("Z990002"), ActorRole::Attestant)
}

fn cause() -> Cause {
    Cause::new(
        String::from("behandling-123"),
        String::from("Endring i inntekt"),
    )
}

#[test]
fn test_actor_creation_requires_all_fields() {
    let actor: Actor = case_handler();

    assert_eq!(actor.id, "Z990001");
    assert_eq!(actor.role, ActorRole::CaseHandler);
}

#[test]
fn test_cause_creation_requires_all_fields() {
    let cause: Cause = cause();

    assert_eq!(cause.id, "behandling-123");
    assert_eq!(cause.description, "Endring i inntekt");
}

#[test]
fn test_manual_provenance_has_independent_attestation() {
    let provenance: Provenance = Provenance::new(case_handler(), attestant(), cause());

    assert!(provenance.has_independent_attestation());
    assert!(!provenance.is_automatic());
}

#[test]
fn test_self_attestation_is_not_independent() {
    let same_person: Actor = Actor::new(String::from("Z990001"), ActorRole::Attestant);
    let provenance: Provenance = Provenance::new(case_handler(), same_person, cause());

    assert!(!provenance.has_independent_attestation());
}

#[test]
fn test_automatic_provenance() {
    let provenance: Provenance = Provenance::automatic("regulering", cause());

    assert!(provenance.is_automatic());
    assert!(!provenance.has_independent_attestation());
    assert_eq!(provenance.decided_by, provenance.attested_by);
}

#[test]
fn test_provenance_survives_round_trip() {
    let provenance: Provenance = Provenance::new(case_handler(), attestant(), cause());

    let json: String = serde_json::to_string(&provenance).unwrap();
    let restored: Provenance = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, provenance);
}
