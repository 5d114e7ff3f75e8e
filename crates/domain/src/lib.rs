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

mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::{DomainError, PairingViolation};
pub use types::{
    AssignmentMap, EmailAddress, Pairing, Participant, ParticipantSet, PriorAssignments,
    PriorReceiver,
};
pub use validation::{
    MIN_PARTICIPANTS, pairing_violation, validate_assignment, validate_participants,
};
