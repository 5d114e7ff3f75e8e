// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ReceiverShuffler;
use santa_draw_domain::{
    EmailAddress, Participant, ParticipantSet, PriorAssignments, PriorReceiver,
};
use std::collections::VecDeque;

/// Plays back fixed receiver orders, one per attempt.
///
/// Once the script runs out the order is left as the identity, which every
/// giver fails by drawing themselves.
pub struct ScriptedShuffler {
    script: VecDeque<Vec<usize>>,
    pub calls: usize,
    /// The order handed in on each call, before it was overwritten.
    pub seen: Vec<Vec<usize>>,
}

impl ScriptedShuffler {
    pub fn new(script: Vec<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            calls: 0,
            seen: Vec::new(),
        }
    }
}

impl ReceiverShuffler for ScriptedShuffler {
    fn shuffle(&mut self, order: &mut [usize]) {
        self.calls += 1;
        self.seen.push(order.to_vec());
        if let Some(next) = self.script.pop_front() {
            order.copy_from_slice(&next);
        }
    }
}

/// Counts calls while delegating to another shuffler.
pub struct CountingShuffler<S> {
    inner: S,
    pub calls: usize,
}

impl<S> CountingShuffler<S> {
    pub const fn new(inner: S) -> Self {
        Self { inner, calls: 0 }
    }
}

impl<S: ReceiverShuffler> ReceiverShuffler for CountingShuffler<S> {
    fn shuffle(&mut self, order: &mut [usize]) {
        self.calls += 1;
        self.inner.shuffle(order);
    }
}

pub fn email(value: &str) -> EmailAddress {
    EmailAddress::new(value)
}

/// Alice, Bob, Carol and Dave at `a@x`..`d@x`.
pub fn create_test_participants(count: usize) -> ParticipantSet {
    let all: [(&str, &str); 4] = [
        ("Alice", "a@x"),
        ("Bob", "b@x"),
        ("Carol", "c@x"),
        ("Dave", "d@x"),
    ];
    ParticipantSet::new(
        all[..count]
            .iter()
            .map(|(name, email)| Participant::new(name, email))
            .collect(),
    )
    .unwrap()
}

/// Participants `p0@x`, `p1@x`, ... in order.
pub fn numbered_participants(count: usize) -> ParticipantSet {
    ParticipantSet::new(
        (0..count)
            .map(|i| Participant::new(&format!("Person {i}"), &format!("p{i}@x")))
            .collect(),
    )
    .unwrap()
}

pub fn prior_from(pairs: &[(&str, &str)]) -> PriorAssignments {
    pairs
        .iter()
        .map(|(giver, receiver)| (email(giver), PriorReceiver::new(receiver, receiver)))
        .collect()
}
