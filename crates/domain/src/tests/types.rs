// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AssignmentMap, DomainError, EmailAddress, Pairing, Participant, ParticipantSet,
    PriorAssignments, PriorReceiver,
};

fn abc() -> Vec<Participant> {
    vec![
        Participant::new("Alice", "a@x"),
        Participant::new("Bob", "b@x"),
        Participant::new("Carol", "c@x"),
    ]
}

#[test]
fn test_email_address_is_trimmed() {
    let email: EmailAddress = EmailAddress::new("  a@x \t");
    assert_eq!(email.value(), "a@x");
    assert_eq!(format!("{email}"), "a@x");
}

#[test]
fn test_email_address_comparison_is_case_sensitive() {
    assert_ne!(EmailAddress::new("A@x"), EmailAddress::new("a@x"));
}

#[test]
fn test_participant_fields_are_trimmed() {
    let participant: Participant = Participant::new("  Alice ", " a@x ");
    assert_eq!(participant.name, "Alice");
    assert_eq!(participant.email, EmailAddress::new("a@x"));
}

#[test]
fn test_participant_set_preserves_order() {
    let set: ParticipantSet = ParticipantSet::new(abc()).unwrap();

    let names: Vec<&str> = set.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    assert_eq!(set.len(), 3);
    assert!(!set.is_empty());
}

#[test]
fn test_participant_set_lookup_by_email() {
    let set: ParticipantSet = ParticipantSet::new(abc()).unwrap();

    let bob: &Participant = set.get(&EmailAddress::new("b@x")).unwrap();
    assert_eq!(bob.name, "Bob");
    assert!(set.contains(&EmailAddress::new("c@x")));
    assert!(!set.contains(&EmailAddress::new("z@x")));
}

#[test]
fn test_participant_set_rejects_invalid_input() {
    let result: Result<ParticipantSet, DomainError> = ParticipantSet::new(vec![
        Participant::new("Alice", "a@x"),
        Participant::new("Bob", "b@x"),
    ]);
    assert!(matches!(
        result,
        Err(DomainError::TooFewParticipants { count: 2 })
    ));
}

#[test]
fn test_prior_assignments_later_entry_replaces_earlier() {
    let mut prior: PriorAssignments = PriorAssignments::new();
    prior.insert(EmailAddress::new("a@x"), PriorReceiver::new("Bob", "b@x"));
    prior.insert(EmailAddress::new("a@x"), PriorReceiver::new("Carol", "c@x"));

    assert_eq!(prior.len(), 1);
    assert_eq!(
        prior.receiver_of(&EmailAddress::new("a@x")),
        Some(&EmailAddress::new("c@x"))
    );
    assert_eq!(prior.get(&EmailAddress::new("a@x")).unwrap().name, "Carol");
}

#[test]
fn test_prior_assignments_missing_giver_has_no_receiver() {
    let prior: PriorAssignments = [(EmailAddress::new("a@x"), PriorReceiver::new("Bob", "b@x"))]
        .into_iter()
        .collect();

    assert!(prior.receiver_of(&EmailAddress::new("d@x")).is_none());
    assert!(!prior.is_empty());
    assert!(PriorAssignments::new().is_empty());
}

#[test]
fn test_assignment_map_lookup_and_order() {
    let people: Vec<Participant> = abc();
    let map: AssignmentMap = AssignmentMap::from_pairings(vec![
        Pairing {
            giver: people[0].clone(),
            receiver: people[2].clone(),
        },
        Pairing {
            giver: people[1].clone(),
            receiver: people[0].clone(),
        },
        Pairing {
            giver: people[2].clone(),
            receiver: people[1].clone(),
        },
    ]);

    assert_eq!(map.len(), 3);
    assert_eq!(
        map.receiver_of(&EmailAddress::new("a@x")).unwrap().name,
        "Carol"
    );
    assert_eq!(
        map.receiver_of(&EmailAddress::new("b@x")).unwrap().name,
        "Alice"
    );
    assert!(map.receiver_of(&EmailAddress::new("z@x")).is_none());

    let givers: Vec<&str> = map.iter().map(|p| p.giver.name.as_str()).collect();
    assert_eq!(givers, vec!["Alice", "Bob", "Carol"]);
}
