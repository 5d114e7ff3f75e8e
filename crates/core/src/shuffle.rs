// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sources of randomness for the draw.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Reorders the receiver positions for one attempt.
///
/// The generator hands over the identity order `0..n` and reads position `i`
/// as the index of giver `i`'s receiver. Implementations must leave the slice
/// a permutation of its input.
pub trait ReceiverShuffler {
    /// Shuffles `order` in place.
    fn shuffle(&mut self, order: &mut [usize]);
}

/// Shuffles with the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadShuffler;

impl ReceiverShuffler for ThreadShuffler {
    fn shuffle(&mut self, order: &mut [usize]) {
        order.shuffle(&mut rand::rng());
    }
}

/// Shuffles with a generator seeded from a fixed value.
///
/// The same seed and input always produce the same draw.
#[derive(Debug)]
pub struct SeededShuffler {
    rng: StdRng,
}

impl SeededShuffler {
    /// Creates a shuffler from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ReceiverShuffler for SeededShuffler {
    fn shuffle(&mut self, order: &mut [usize]) {
        order.shuffle(&mut self.rng);
    }
}
