// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use santa_draw_domain::{AssignmentMap, EmailAddress, Pairing};
use serde::Serialize;
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::info;

use crate::error::RosterError;

/// Where the result goes when no output path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "secret_santa_result.csv";

/// One output row. Field names match the prior-year input format so a result
/// can be fed back in next cycle.
#[derive(Debug, Serialize)]
struct AssignmentRow<'a> {
    #[serde(rename = "Employee_Name")]
    giver_name: &'a str,
    #[serde(rename = "Employee_EmailID")]
    giver_email: &'a EmailAddress,
    #[serde(rename = "Secret_Child_Name")]
    receiver_name: &'a str,
    #[serde(rename = "Secret_Child_EmailID")]
    receiver_email: &'a EmailAddress,
}

impl<'a> From<&'a Pairing> for AssignmentRow<'a> {
    fn from(pairing: &'a Pairing) -> Self {
        Self {
            giver_name: &pairing.giver.name,
            giver_email: &pairing.giver.email,
            receiver_name: &pairing.receiver.name,
            receiver_email: &pairing.receiver.email,
        }
    }
}

/// Writes the assignment as CSV, one row per giver in giver order.
///
/// # Errors
///
/// Returns `EmptyAssignments` if there is nothing to write, or `Csv` if
/// serialization or the underlying writer fails.
pub fn write_assignments<W: io::Write>(
    writer: W,
    assignments: &AssignmentMap,
) -> Result<(), RosterError> {
    if assignments.is_empty() {
        return Err(RosterError::EmptyAssignments);
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    for pairing in assignments {
        csv_writer.serialize(AssignmentRow::from(pairing))?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;

    Ok(())
}

/// Writes the assignment to a CSV file at `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be created, otherwise any error from
/// [`write_assignments`].
pub fn save_assignments(path: &Path, assignments: &AssignmentMap) -> Result<(), RosterError> {
    if assignments.is_empty() {
        return Err(RosterError::EmptyAssignments);
    }

    let file: File = File::create(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_assignments(file, assignments)?;

    info!(
        path = %path.display(),
        pairings = assignments.len(),
        "Saved assignments"
    );
    Ok(())
}
