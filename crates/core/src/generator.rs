// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::shuffle::ReceiverShuffler;
use santa_draw_domain::{
    AssignmentMap, Pairing, Participant, ParticipantSet, PriorAssignments, validate_assignment,
};
use tracing::{debug, info, warn};

/// How many candidates are drawn before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Draws assignments by reshuffling until a candidate satisfies every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentGenerator {
    max_attempts: u32,
}

impl Default for AssignmentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl AssignmentGenerator {
    /// Creates a generator with the default attempt cap.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Returns a generator with the given attempt cap.
    ///
    /// A cap of zero makes every call report exhaustion.
    #[must_use]
    pub const fn with_max_attempts(self, max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Returns the attempt cap.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Draws a receiver for every participant.
    ///
    /// Each attempt shuffles a fresh identity order, pairs giver `i` (in
    /// participant order) with the participant at shuffled position `i`, and
    /// accepts the candidate only if it is a full permutation in which no giver
    /// draws themselves or their prior receiver. A rejected candidate is
    /// discarded whole, including one built from a shuffler that broke the
    /// permutation contract.
    ///
    /// # Arguments
    ///
    /// * `participants` - The validated participants, in giver order
    /// * `prior` - Last cycle's assignments, if any
    /// * `shuffler` - The source of randomness
    ///
    /// # Errors
    ///
    /// Returns `CoreError::GenerationExhausted` if no candidate passed within
    /// the attempt cap. No partial assignment is ever returned.
    pub fn generate<S: ReceiverShuffler + ?Sized>(
        &self,
        participants: &ParticipantSet,
        prior: Option<&PriorAssignments>,
        shuffler: &mut S,
    ) -> Result<AssignmentMap, CoreError> {
        let people: &[Participant] = participants.as_slice();

        for attempt in 1..=self.max_attempts {
            let mut order: Vec<usize> = (0..people.len()).collect();
            shuffler.shuffle(&mut order);

            let Some(candidate) = build_assignment(people, &order) else {
                debug!(attempt, ?order, "Rejected out-of-range receiver order");
                continue;
            };

            match validate_assignment(participants, prior, &candidate) {
                Ok(()) => {
                    info!(
                        attempt,
                        participants = people.len(),
                        "Found a valid assignment"
                    );
                    return Ok(candidate);
                }
                Err(reason) => {
                    debug!(attempt, %reason, "Rejected candidate assignment");
                }
            }
        }

        warn!(
            attempts = self.max_attempts,
            "No valid assignment found within the attempt cap"
        );
        Err(CoreError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }
}

/// Draws with the default attempt cap.
///
/// # Errors
///
/// Returns `CoreError::GenerationExhausted` if no valid assignment was found.
pub fn generate_assignments<S: ReceiverShuffler + ?Sized>(
    participants: &ParticipantSet,
    prior: Option<&PriorAssignments>,
    shuffler: &mut S,
) -> Result<AssignmentMap, CoreError> {
    AssignmentGenerator::new().generate(participants, prior, shuffler)
}

/// Pairs giver `i` with `people[order[i]]`.
///
/// Returns `None` if the order points past the end of the participant list.
fn build_assignment(people: &[Participant], order: &[usize]) -> Option<AssignmentMap> {
    let pairings: Vec<Pairing> = people
        .iter()
        .zip(order)
        .map(|(giver, &receiver)| {
            people.get(receiver).map(|receiver| Pairing {
                giver: giver.clone(),
                receiver: receiver.clone(),
            })
        })
        .collect::<Option<_>>()?;
    Some(AssignmentMap::from_pairings(pairings))
}
