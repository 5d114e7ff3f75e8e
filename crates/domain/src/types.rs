// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::validate_participants;
use serde::Serialize;
use std::collections::BTreeMap;

/// A participant's email address, the key that identifies them.
///
/// Surrounding whitespace is removed on construction. Comparison is exact,
/// so `Alice@x` and `alice@x` are different participants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress {
    value: String,
}

impl EmailAddress {
    /// Creates a new email address from the given value.
    ///
    /// Emptiness is checked by validation, not here.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the email as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if the address is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// A member of the group taking part in the draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Participant {
    /// The participant's display name.
    pub name: String,
    /// The participant's email, unique within a participant set.
    pub email: EmailAddress,
}

impl Participant {
    /// Creates a new participant. Both fields are trimmed.
    #[must_use]
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: EmailAddress::new(email),
        }
    }
}

/// An ordered, validated list of participants.
///
/// Construction enforces the preconditions of the draw: more than two
/// participants, no empty fields, unique emails. Row order is preserved and
/// determines the order of the resulting assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantSet {
    participants: Vec<Participant>,
}

impl ParticipantSet {
    /// Validates and wraps the given participants.
    ///
    /// # Errors
    ///
    /// Returns the first `DomainError` reported by [`validate_participants`].
    pub fn new(participants: Vec<Participant>) -> Result<Self, DomainError> {
        validate_participants(&participants)?;
        Ok(Self { participants })
    }

    /// Returns the number of participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Always false for a validated set; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Returns the participants in input order.
    #[must_use]
    pub fn as_slice(&self) -> &[Participant] {
        &self.participants
    }

    /// Iterates over the participants in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.participants.iter()
    }

    /// Looks up a participant by email.
    #[must_use]
    pub fn get(&self, email: &EmailAddress) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.email == email)
    }

    /// Returns true if a participant with this email is in the set.
    #[must_use]
    pub fn contains(&self, email: &EmailAddress) -> bool {
        self.get(email).is_some()
    }
}

impl<'a> IntoIterator for &'a ParticipantSet {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.participants.iter()
    }
}

/// The receiver a giver had in the previous cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorReceiver {
    /// The receiver's display name at the time.
    pub name: String,
    /// The receiver's email.
    pub email: EmailAddress,
}

impl PriorReceiver {
    /// Creates a new prior receiver. Both fields are trimmed.
    #[must_use]
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: EmailAddress::new(email),
        }
    }
}

/// Last cycle's giver → receiver mapping.
///
/// Need not cover the current participants: givers without an entry have no
/// repeat restriction, and entries for people no longer taking part are never
/// consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorAssignments {
    by_giver: BTreeMap<EmailAddress, PriorReceiver>,
}

impl PriorAssignments {
    /// Creates an empty prior mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `giver` gave to `receiver` last cycle.
    ///
    /// A later entry for the same giver replaces the earlier one.
    pub fn insert(&mut self, giver: EmailAddress, receiver: PriorReceiver) {
        self.by_giver.insert(giver, receiver);
    }

    /// Returns the email of the giver's prior receiver, if any.
    #[must_use]
    pub fn receiver_of(&self, giver: &EmailAddress) -> Option<&EmailAddress> {
        self.by_giver.get(giver).map(|r| &r.email)
    }

    /// Returns the full prior receiver record for the giver, if any.
    #[must_use]
    pub fn get(&self, giver: &EmailAddress) -> Option<&PriorReceiver> {
        self.by_giver.get(giver)
    }

    /// Returns the number of recorded givers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_giver.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_giver.is_empty()
    }
}

impl FromIterator<(EmailAddress, PriorReceiver)> for PriorAssignments {
    fn from_iter<I: IntoIterator<Item = (EmailAddress, PriorReceiver)>>(iter: I) -> Self {
        Self {
            by_giver: iter.into_iter().collect(),
        }
    }
}

/// One giver and the receiver they were drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    /// The participant giving the gift.
    pub giver: Participant,
    /// The participant receiving the gift.
    pub receiver: Participant,
}

/// The result of a draw: one pairing per giver.
///
/// Pairings are kept in the giver order of the participant set they were drawn
/// from; lookups by giver go through a key-ordered index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentMap {
    pairings: Vec<Pairing>,
    index: BTreeMap<EmailAddress, usize>,
}

impl AssignmentMap {
    /// Builds a map from pairings in giver order.
    ///
    /// No rules are checked here; see [`crate::validate_assignment`].
    #[must_use]
    pub fn from_pairings(pairings: Vec<Pairing>) -> Self {
        let index: BTreeMap<EmailAddress, usize> = pairings
            .iter()
            .enumerate()
            .map(|(idx, pairing)| (pairing.giver.email.clone(), idx))
            .collect();
        Self { pairings, index }
    }

    /// Returns the receiver drawn for the given giver.
    #[must_use]
    pub fn receiver_of(&self, giver: &EmailAddress) -> Option<&Participant> {
        self.index
            .get(giver)
            .and_then(|&idx| self.pairings.get(idx))
            .map(|pairing| &pairing.receiver)
    }

    /// Returns the pairings in giver order.
    #[must_use]
    pub fn pairings(&self) -> &[Pairing] {
        &self.pairings
    }

    /// Iterates over the pairings in giver order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pairing> {
        self.pairings.iter()
    }

    /// Returns the number of pairings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    /// Returns true if the map holds no pairings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    /// Returns the number of distinct givers in the index.
    pub(crate) fn distinct_givers(&self) -> usize {
        self.index.len()
    }
}

impl<'a> IntoIterator for &'a AssignmentMap {
    type Item = &'a Pairing;
    type IntoIter = std::slice::Iter<'a, Pairing>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairings.iter()
    }
}
