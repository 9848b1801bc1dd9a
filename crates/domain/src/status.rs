// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timecard status and the actions each status permits.
//!
//! The permitted-action table is the single source of truth for both the
//! hypermedia affordances and the server-side precondition check.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a timecard.
///
/// Status is never stored; it is derived from the transition log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimecardStatus {
    /// Lines may be recorded, replaced and updated.
    Draft,
    /// Waiting for approval or rejection.
    Submitted,
    /// Accepted. Terminal.
    Approved,
    /// Withdrawn. Terminal.
    Cancelled,
}

/// Something a client may do to a timecard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimecardAction {
    Cancel,
    Submit,
    RecordLine,
    Replace,
    Update,
    DeleteTimeSheet,
    Reject,
    Approve,
}

const DRAFT_ACTIONS: &[TimecardAction] = &[
    TimecardAction::Cancel,
    TimecardAction::Submit,
    TimecardAction::RecordLine,
    TimecardAction::Replace,
    TimecardAction::Update,
    TimecardAction::DeleteTimeSheet,
];

const SUBMITTED_ACTIONS: &[TimecardAction] = &[
    TimecardAction::Cancel,
    TimecardAction::Reject,
    TimecardAction::Approve,
];

impl TimecardStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Submitted => "Submitted",
            Self::Approved => "Approved",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Returns true if no further actions are offered from this status.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Cancelled)
    }

    /// The actions available in this status, in advertisement order.
    #[must_use]
    pub const fn permitted_actions(&self) -> &'static [TimecardAction] {
        match self {
            Self::Draft => DRAFT_ACTIONS,
            Self::Submitted => SUBMITTED_ACTIONS,
            Self::Approved | Self::Cancelled => &[],
        }
    }

    /// Checks whether `action` is available in this status.
    #[must_use]
    pub fn permits(&self, action: TimecardAction) -> bool {
        self.permitted_actions().contains(&action)
    }

    /// Validates that `action` may be performed in this status.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ActionNotPermitted` if the status does not
    /// offer the action.
    pub fn validate_action(&self, action: TimecardAction) -> Result<(), DomainError> {
        if self.permits(action) {
            Ok(())
        } else {
            Err(DomainError::ActionNotPermitted {
                status: *self,
                action,
            })
        }
    }
}

impl FromStr for TimecardStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draft" => Ok(Self::Draft),
            "Submitted" => Ok(Self::Submitted),
            "Approved" => Ok(Self::Approved),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for TimecardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TimecardAction {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cancel => "Cancel",
            Self::Submit => "Submit",
            Self::RecordLine => "RecordLine",
            Self::Replace => "Replace",
            Self::Update => "Update",
            Self::DeleteTimeSheet => "DeleteTimeSheet",
            Self::Reject => "Reject",
            Self::Approve => "Approve",
        }
    }
}

impl std::fmt::Display for TimecardAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        for status in [
            TimecardStatus::Draft,
            TimecardStatus::Submitted,
            TimecardStatus::Approved,
            TimecardStatus::Cancelled,
        ] {
            match status.as_str().parse::<TimecardStatus>() {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {status}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        let result = "Rejected".parse::<TimecardStatus>();
        assert_eq!(
            result,
            Err(DomainError::InvalidStatus(String::from("Rejected")))
        );
    }

    #[test]
    fn test_terminal_states() {
        assert!(!TimecardStatus::Draft.is_terminal());
        assert!(!TimecardStatus::Submitted.is_terminal());
        assert!(TimecardStatus::Approved.is_terminal());
        assert!(TimecardStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_terminal_states_permit_nothing() {
        assert!(TimecardStatus::Approved.permitted_actions().is_empty());
        assert!(TimecardStatus::Cancelled.permitted_actions().is_empty());
    }

    #[test]
    fn test_draft_permits_line_editing() {
        let draft = TimecardStatus::Draft;

        assert!(draft.permits(TimecardAction::RecordLine));
        assert!(draft.permits(TimecardAction::Replace));
        assert!(draft.permits(TimecardAction::Update));
        assert!(draft.permits(TimecardAction::DeleteTimeSheet));
        assert!(!draft.permits(TimecardAction::Approve));
        assert!(!draft.permits(TimecardAction::Reject));
    }

    #[test]
    fn test_submitted_permits_review_only() {
        assert_eq!(
            TimecardStatus::Submitted.permitted_actions(),
            &[
                TimecardAction::Cancel,
                TimecardAction::Reject,
                TimecardAction::Approve
            ]
        );
    }

    #[test]
    fn test_validate_action_rejects_approving_cancelled() {
        let result = TimecardStatus::Cancelled.validate_action(TimecardAction::Approve);
        assert_eq!(
            result,
            Err(DomainError::ActionNotPermitted {
                status: TimecardStatus::Cancelled,
                action: TimecardAction::Approve,
            })
        );
    }
}
