// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while generating an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Every attempt produced a candidate that broke a rule.
    ///
    /// Either no valid assignment exists for the input or none was found
    /// within the attempt cap.
    GenerationExhausted {
        /// The number of attempts made.
        attempts: u32,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GenerationExhausted { attempts } => write!(
                f,
                "No valid Secret Santa assignment exists after {attempts} attempts"
            ),
        }
    }
}

impl std::error::Error for CoreError {}
