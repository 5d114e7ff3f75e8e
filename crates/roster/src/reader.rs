// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use csv::StringRecord;
use santa_draw_domain::{EmailAddress, Participant, ParticipantSet, PriorAssignments, PriorReceiver};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::RosterError;
use crate::{EMPLOYEE_EMAIL, EMPLOYEE_NAME, SECRET_CHILD_EMAIL, SECRET_CHILD_NAME};

const PARTICIPANT_HEADERS: &[&str] = &[EMPLOYEE_NAME, EMPLOYEE_EMAIL];

const PRIOR_HEADERS: &[&str] = &[
    EMPLOYEE_NAME,
    EMPLOYEE_EMAIL,
    SECRET_CHILD_NAME,
    SECRET_CHILD_EMAIL,
];

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Maps each normalized header to its column, failing if a required one is absent.
fn header_positions(
    headers: &StringRecord,
    required: &[&str],
) -> Result<HashMap<String, usize>, RosterError> {
    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| (normalize_header(header), idx))
        .collect();

    let missing: Vec<String> = required
        .iter()
        .filter(|name| !header_map.contains_key(&normalize_header(name)))
        .map(|name| String::from(*name))
        .collect();

    if !missing.is_empty() {
        return Err(RosterError::MissingHeaders { missing });
    }

    Ok(header_map)
}

/// Returns the trimmed value of a named column, or an empty string.
fn field<'r>(
    record: &'r StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> &'r str {
    header_map
        .get(&normalize_header(name))
        .and_then(|&idx| record.get(idx))
        .map_or("", str::trim)
}

fn csv_reader(csv_content: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(csv_content.as_bytes())
}

/// Parses and validates a participant list.
///
/// Expects `Employee_Name` and `Employee_EmailID` columns. A file with no
/// content at all is treated as an empty list.
///
/// # Errors
///
/// Returns an error if:
/// - the CSV is malformed or a required header is missing
/// - the participants fail validation (empty list, two or fewer rows,
///   empty fields, duplicate emails)
pub fn parse_participants(csv_content: &str) -> Result<ParticipantSet, RosterError> {
    let mut reader = csv_reader(csv_content);
    let headers: StringRecord = reader.headers()?.clone();

    let mut participants: Vec<Participant> = Vec::new();
    if !headers.is_empty() {
        let header_map: HashMap<String, usize> = header_positions(&headers, PARTICIPANT_HEADERS)?;

        for result in reader.records() {
            let record: StringRecord = result?;
            participants.push(Participant::new(
                field(&record, &header_map, EMPLOYEE_NAME),
                field(&record, &header_map, EMPLOYEE_EMAIL),
            ));
        }
    }

    debug!(rows = participants.len(), "Read participant rows");
    Ok(ParticipantSet::new(participants)?)
}

/// Parses last cycle's assignments.
///
/// Expects `Employee_Name`, `Employee_EmailID`, `Secret_Child_Name` and
/// `Secret_Child_EmailID` columns. A file without rows yields an empty map and
/// a warning. When a giver appears on several rows the last one wins.
///
/// # Errors
///
/// Returns an error if the CSV is malformed, a required header is missing, or
/// any row has an empty field.
pub fn parse_prior_assignments(csv_content: &str) -> Result<PriorAssignments, RosterError> {
    let mut reader = csv_reader(csv_content);
    let headers: StringRecord = reader.headers()?.clone();

    let mut prior: PriorAssignments = PriorAssignments::new();
    let mut rows: usize = 0;
    if !headers.is_empty() {
        let header_map: HashMap<String, usize> = header_positions(&headers, PRIOR_HEADERS)?;

        for (idx, result) in reader.records().enumerate() {
            let record: StringRecord = result?;
            let row: usize = idx + 1;
            rows = row;

            for name in PRIOR_HEADERS {
                if field(&record, &header_map, name).is_empty() {
                    return Err(RosterError::MissingPriorField { field: *name, row });
                }
            }

            prior.insert(
                EmailAddress::new(field(&record, &header_map, EMPLOYEE_EMAIL)),
                PriorReceiver::new(
                    field(&record, &header_map, SECRET_CHILD_NAME),
                    field(&record, &header_map, SECRET_CHILD_EMAIL),
                ),
            );
        }
    }

    if rows == 0 {
        warn!("Last year's assignment file is empty");
    }

    debug!(rows, givers = prior.len(), "Read prior assignment rows");
    Ok(prior)
}

fn read_file(path: &Path) -> Result<String, RosterError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            RosterError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RosterError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Reads and validates the participant list at `path`.
///
/// # Errors
///
/// Returns `FileNotFound` or `Io` if the file cannot be read, otherwise any
/// error from [`parse_participants`].
pub fn load_participants(path: &Path) -> Result<ParticipantSet, RosterError> {
    let participants: ParticipantSet = parse_participants(&read_file(path)?)?;
    info!(
        path = %path.display(),
        participants = participants.len(),
        "Loaded participants"
    );
    Ok(participants)
}

/// Reads last cycle's assignments at `path`.
///
/// # Errors
///
/// Returns `FileNotFound` or `Io` if the file cannot be read, otherwise any
/// error from [`parse_prior_assignments`].
pub fn load_prior_assignments(path: &Path) -> Result<PriorAssignments, RosterError> {
    let prior: PriorAssignments = parse_prior_assignments(&read_file(path)?)?;
    info!(
        path = %path.display(),
        givers = prior.len(),
        "Loaded last year's assignments"
    );
    Ok(prior)
}
