// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use timecard_domain::{LineId, ResourceId, TimecardAction, TimecardLine};

/// A command represents caller intent as data only.
///
/// Commands are the only way to request state changes through `apply`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Record a new line.
    RecordLine {
        /// The line to record.
        line: TimecardLine,
    },
    /// Swap an existing line for a new one.
    ReplaceLine {
        /// The line being replaced.
        line_id: LineId,
        /// The new line.
        line: TimecardLine,
    },
    /// Overwrite the attributes of an existing line.
    UpdateLine {
        /// The line being updated.
        line_id: LineId,
        /// The new attributes.
        line: TimecardLine,
    },
    /// Hand the timecard in for review.
    Submit {
        /// Who is submitting.
        resource: ResourceId,
    },
    /// Send a submitted timecard back to draft.
    Reject {
        /// The reviewer.
        resource: ResourceId,
        /// Why it is being sent back.
        reason: String,
    },
    /// Accept a submitted timecard.
    Approve {
        /// The reviewer.
        resource: ResourceId,
    },
    /// Withdraw the timecard.
    Cancel {
        /// Who is withdrawing it.
        resource: ResourceId,
        /// Why it is being withdrawn.
        reason: String,
    },
    /// Discard a draft timecard entirely.
    Delete {
        /// Who is deleting it.
        resource: ResourceId,
    },
}

impl Command {
    /// The affordance this command corresponds to.
    #[must_use]
    pub const fn action(&self) -> TimecardAction {
        match self {
            Self::RecordLine { .. } => TimecardAction::RecordLine,
            Self::ReplaceLine { .. } => TimecardAction::Replace,
            Self::UpdateLine { .. } => TimecardAction::Update,
            Self::Submit { .. } => TimecardAction::Submit,
            Self::Reject { .. } => TimecardAction::Reject,
            Self::Approve { .. } => TimecardAction::Approve,
            Self::Cancel { .. } => TimecardAction::Cancel,
            Self::Delete { .. } => TimecardAction::DeleteTimeSheet,
        }
    }
}
