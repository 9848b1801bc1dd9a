// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use thiserror::Error;
use timecard::CoreError;
use timecard_domain::DomainError;
use timecard_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain, core and persistence errors and represent
/// the contract clients see.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },

    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },

    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },

    /// The request lost a race with another writer.
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::LineNotFound { line_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Line"),
            message: format!("Line '{line_id}' does not exist"),
        },
        DomainError::MalformedIdentifier { kind, .. } => ApiError::InvalidInput {
            field: format!("{kind}_id"),
            message,
        },
        DomainError::ActionNotPermitted { .. } => ApiError::DomainRuleViolation {
            rule: String::from("status_permits_action"),
            message,
        },
        DomainError::InvalidWeek(_) | DomainError::InvalidWorkDate { .. } => {
            ApiError::InvalidInput {
                field: String::from("week"),
                message,
            }
        }
        DomainError::InvalidYear(_) => ApiError::InvalidInput {
            field: String::from("year"),
            message,
        },
        DomainError::InvalidHours(msg) => ApiError::InvalidInput {
            field: String::from("hours"),
            message: msg,
        },
        DomainError::InvalidProject(msg) => ApiError::InvalidInput {
            field: String::from("project"),
            message: msg,
        },
        DomainError::InvalidDay(_) => ApiError::InvalidInput {
            field: String::from("day"),
            message,
        },
        DomainError::InvalidStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message,
        },
        DomainError::InvalidResource(_) => ApiError::InvalidInput {
            field: String::from("resource"),
            message,
        },
        DomainError::EmptyTransitionLog => ApiError::Internal { message },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    let message: String = err.to_string();
    match err {
        PersistenceError::NotFound(identity) => ApiError::ResourceNotFound {
            resource_type: String::from("Timecard"),
            message: format!("Timecard '{identity}' does not exist"),
        },
        PersistenceError::DuplicateTimecard(_) | PersistenceError::VersionConflict { .. } => {
            ApiError::Conflict { message }
        }
        PersistenceError::ReconstructionError(_) => ApiError::Internal { message },
    }
}
