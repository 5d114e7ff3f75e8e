// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::EmailAddress;

/// The rule a single giver → receiver pairing breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairingViolation {
    /// The giver was assigned to themselves.
    SelfAssignment,
    /// The giver was assigned the same receiver as in the prior cycle.
    RepeatOfPriorYear,
}

impl std::fmt::Display for PairingViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelfAssignment => write!(f, "giver is assigned to themselves"),
            Self::RepeatOfPriorYear => write!(f, "receiver repeats last year's assignment"),
        }
    }
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No participants were supplied.
    EmptyParticipantList,
    /// Too few participants for a draw.
    TooFewParticipants {
        /// The number of participants supplied.
        count: usize,
    },
    /// A required participant field is empty.
    MissingField {
        /// The name of the empty field.
        field: &'static str,
        /// The 1-based row of the participant.
        row: usize,
    },
    /// The same email appears twice in the participant list.
    DuplicateEmail {
        /// The repeated email.
        email: EmailAddress,
        /// The 1-based row of the second occurrence.
        row: usize,
    },
    /// An assignment does not cover every participant exactly once.
    NotAPermutation {
        /// Description of the mismatch.
        reason: String,
    },
    /// An assignment contains a forbidden pairing.
    InvalidPairing {
        /// The giver of the pairing.
        giver: EmailAddress,
        /// The receiver of the pairing.
        receiver: EmailAddress,
        /// The rule that was broken.
        violation: PairingViolation,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyParticipantList => write!(f, "The participant list is empty"),
            Self::TooFewParticipants { count } => {
                write!(
                    f,
                    "The number of participants must be more than 2 for Secret Santa, got {count}"
                )
            }
            Self::MissingField { field, row } => {
                write!(f, "Participant {field} is missing or empty at row {row}")
            }
            Self::DuplicateEmail { email, row } => {
                write!(f, "Duplicate email found: '{email}' at row {row}")
            }
            Self::NotAPermutation { reason } => {
                write!(f, "Assignment is not a permutation of the participants: {reason}")
            }
            Self::InvalidPairing {
                giver,
                receiver,
                violation,
            } => {
                write!(f, "Invalid pairing '{giver}' -> '{receiver}': {violation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
