// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV input and output for the Secret Santa draw.
//!
//! Reads the participant list and last cycle's assignments, and writes the
//! drawn assignment back out. Headers are matched case-insensitively with
//! spaces treated as underscores; column order does not matter and extra
//! columns are ignored.

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
mod reader;
mod writer;

pub use error::RosterError;
pub use reader::{
    load_participants, load_prior_assignments, parse_participants, parse_prior_assignments,
};
pub use writer::{DEFAULT_OUTPUT_PATH, save_assignments, write_assignments};

/// Column holding a giver's display name.
pub const EMPLOYEE_NAME: &str = "Employee_Name";
/// Column holding a giver's email.
pub const EMPLOYEE_EMAIL: &str = "Employee_EmailID";
/// Column holding a receiver's display name.
pub const SECRET_CHILD_NAME: &str = "Secret_Child_Name";
/// Column holding a receiver's email.
pub const SECRET_CHILD_EMAIL: &str = "Secret_Child_EmailID";
