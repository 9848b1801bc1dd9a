// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use timecard_domain::DomainError;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The requested timecard was not found.
    NotFound(String),
    /// A timecard with the same identity is already stored.
    DuplicateTimecard(String),
    /// The timecard was changed by someone else since it was loaded.
    VersionConflict {
        /// The timecard identity.
        identity: String,
        /// The version the caller loaded.
        expected: i64,
        /// The version currently stored.
        found: i64,
    },
    /// A stored record could not be turned back into a timecard.
    ReconstructionError(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(identity) => write!(f, "Timecard not found: {identity}"),
            Self::DuplicateTimecard(identity) => {
                write!(f, "Timecard already exists: {identity}")
            }
            Self::VersionConflict {
                identity,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Timecard {identity} was modified concurrently (loaded version {expected}, stored version {found})"
                )
            }
            Self::ReconstructionError(msg) => write!(f, "State reconstruction error: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::ReconstructionError(err.to_string())
    }
}
