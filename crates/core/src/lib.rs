// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Secret Santa assignment generation.
//!
//! Draws a receiver for every participant such that nobody draws themselves
//! and, when last cycle's assignments are supplied, nobody draws the same
//! person again. Candidates are produced by shuffling the whole receiver list
//! and rejected wholesale until one passes or the attempt cap is reached.

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
mod generator;
mod shuffle;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::CoreError;
pub use generator::{AssignmentGenerator, DEFAULT_MAX_ATTEMPTS, generate_assignments};
pub use shuffle::{ReceiverShuffler, SeededShuffler, ThreadShuffler};
