// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{DomainError, PairingViolation};
use crate::types::{AssignmentMap, EmailAddress, Participant, ParticipantSet, PriorAssignments};
use std::collections::HashSet;

/// The smallest participant count a draw accepts.
pub const MIN_PARTICIPANTS: usize = 3;

/// Validates a participant list before any draw is attempted.
///
/// This function is pure and deterministic: validating the same input twice
/// always gives the same answer.
///
/// # Arguments
///
/// * `participants` - The participants in input order
///
/// # Errors
///
/// Returns, in this order of precedence:
/// - `EmptyParticipantList` if no participants were given
/// - `TooFewParticipants` if two or fewer were given
/// - `MissingField` for the first row with an empty name or email
/// - `DuplicateEmail` for the first row whose email was already seen
pub fn validate_participants(participants: &[Participant]) -> Result<(), DomainError> {
    if participants.is_empty() {
        return Err(DomainError::EmptyParticipantList);
    }

    // Rule: a draw needs more than two people
    if participants.len() < MIN_PARTICIPANTS {
        return Err(DomainError::TooFewParticipants {
            count: participants.len(),
        });
    }

    let mut seen_emails: HashSet<&EmailAddress> = HashSet::new();
    for (idx, participant) in participants.iter().enumerate() {
        let row: usize = idx + 1;

        if participant.name.is_empty() {
            return Err(DomainError::MissingField { field: "name", row });
        }

        if participant.email.is_empty() {
            return Err(DomainError::MissingField {
                field: "email",
                row,
            });
        }

        // Rule: emails are unique within the participant list
        if !seen_emails.insert(&participant.email) {
            return Err(DomainError::DuplicateEmail {
                email: participant.email.clone(),
                row,
            });
        }
    }

    Ok(())
}

/// Checks a single giver → receiver pairing against the draw rules.
///
/// Returns `None` if the pairing is allowed.
#[must_use]
pub fn pairing_violation(
    giver: &EmailAddress,
    receiver: &EmailAddress,
    prior: Option<&PriorAssignments>,
) -> Option<PairingViolation> {
    if giver == receiver {
        return Some(PairingViolation::SelfAssignment);
    }

    if prior.and_then(|p| p.receiver_of(giver)) == Some(receiver) {
        return Some(PairingViolation::RepeatOfPriorYear);
    }

    None
}

/// Validates a complete assignment against the participant set.
///
/// # Arguments
///
/// * `participants` - The participants the assignment was drawn for
/// * `prior` - Last cycle's assignments, if any
/// * `assignment` - The assignment to check
///
/// # Errors
///
/// Returns an error if:
/// - the givers or receivers are not each participant exactly once
///   (`NotAPermutation`)
/// - any pairing is a self-assignment or repeats the prior cycle
///   (`InvalidPairing`)
pub fn validate_assignment(
    participants: &ParticipantSet,
    prior: Option<&PriorAssignments>,
    assignment: &AssignmentMap,
) -> Result<(), DomainError> {
    if assignment.len() != participants.len() {
        return Err(DomainError::NotAPermutation {
            reason: format!(
                "expected {} pairings, found {}",
                participants.len(),
                assignment.len()
            ),
        });
    }

    if assignment.distinct_givers() != assignment.len() {
        return Err(DomainError::NotAPermutation {
            reason: String::from("a giver appears more than once"),
        });
    }

    let mut seen_receivers: HashSet<&EmailAddress> = HashSet::new();
    for pairing in assignment {
        let giver: &EmailAddress = &pairing.giver.email;
        let receiver: &EmailAddress = &pairing.receiver.email;

        if !participants.contains(giver) {
            return Err(DomainError::NotAPermutation {
                reason: format!("giver '{giver}' is not a participant"),
            });
        }

        if !participants.contains(receiver) {
            return Err(DomainError::NotAPermutation {
                reason: format!("receiver '{receiver}' is not a participant"),
            });
        }

        if !seen_receivers.insert(receiver) {
            return Err(DomainError::NotAPermutation {
                reason: format!("receiver '{receiver}' is drawn more than once"),
            });
        }

        if let Some(violation) = pairing_violation(giver, receiver, prior) {
            return Err(DomainError::InvalidPairing {
                giver: giver.clone(),
                receiver: receiver.clone(),
                violation,
            });
        }
    }

    Ok(())
}
