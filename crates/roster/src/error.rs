// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use santa_draw_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing roster files.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The input file does not exist.
    #[error("The file '{}' was not found", .path.display())]
    FileNotFound { path: PathBuf },

    /// The file could not be opened, read or written.
    #[error("Failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not well-formed CSV.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Required columns are absent from the header row.
    #[error("Missing required headers: {}", .missing.join(", "))]
    MissingHeaders { missing: Vec<String> },

    /// A prior-year row has an empty field.
    #[error("'{field}' is missing or empty in last year's assignment file at row {row}")]
    MissingPriorField { field: &'static str, row: usize },

    /// There are no pairings to write.
    #[error("No assignments to write")]
    EmptyAssignments,

    /// The participant list breaks a draw precondition.
    #[error(transparent)]
    Validation(#[from] DomainError),
}
