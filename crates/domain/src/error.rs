// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::{TimecardAction, TimecardStatus};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No line with the given identifier exists on the timecard.
    LineNotFound {
        /// The identifier that was looked up.
        line_id: String,
    },
    /// An identifier string could not be parsed.
    MalformedIdentifier {
        /// What kind of identifier was expected (e.g. "line", "timecard").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
    /// A transition log was hydrated without any entries.
    ///
    /// Every timecard is created with an `Entered` transition, so an empty
    /// log can only come from corrupt persisted data.
    EmptyTransitionLog,
    /// The requested action is not available in the current status.
    ActionNotPermitted {
        /// The status the timecard was in.
        status: TimecardStatus,
        /// The action that was attempted.
        action: TimecardAction,
    },
    /// Week number is outside the ISO range.
    InvalidWeek(u8),
    /// Year is outside the supported range.
    InvalidYear(i32),
    /// Hours are not a finite value in `(0, 24]`.
    InvalidHours(String),
    /// Project code is empty or invalid.
    InvalidProject(String),
    /// Day name could not be parsed.
    InvalidDay(String),
    /// The week/day combination does not exist in the given year.
    InvalidWorkDate {
        /// The year.
        year: i32,
        /// The ISO week.
        week: u8,
        /// The weekday.
        day: time::Weekday,
    },
    /// Status string could not be parsed.
    InvalidStatus(String),
    /// Resource identifier is not valid.
    InvalidResource(i64),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LineNotFound { line_id } => write!(f, "Line '{line_id}' not found"),
            Self::MalformedIdentifier { kind, value } => {
                write!(f, "Malformed {kind} identifier: '{value}'")
            }
            Self::EmptyTransitionLog => {
                write!(f, "Transition log is empty; a timecard must have been entered")
            }
            Self::ActionNotPermitted { status, action } => {
                write!(f, "Action '{action}' is not permitted while timecard is {status}")
            }
            Self::InvalidWeek(week) => {
                write!(f, "Invalid week: {week}. Must be between 1 and 53")
            }
            Self::InvalidYear(year) => {
                write!(f, "Invalid year: {year}. Must be between 2000 and 2200")
            }
            Self::InvalidHours(msg) => write!(f, "Invalid hours: {msg}"),
            Self::InvalidProject(msg) => write!(f, "Invalid project: {msg}"),
            Self::InvalidDay(day) => write!(f, "Invalid day: '{day}'"),
            Self::InvalidWorkDate { year, week, day } => {
                write!(f, "Week {week} of {year} has no {day}")
            }
            Self::InvalidStatus(status) => write!(f, "Invalid timecard status: '{status}'"),
            Self::InvalidResource(resource) => {
                write!(f, "Invalid resource: {resource}. Must be positive")
            }
        }
    }
}

impl std::error::Error for DomainError {}
