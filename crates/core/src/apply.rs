// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::timecard::Timecard;
use time::OffsetDateTime;
use timecard_audit::{Transition, TransitionEvent};
use timecard_domain::{AnnotatedTimecardLine, LineId, TimecardAction, TimecardStatus};

/// What a successfully applied command changed.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// A new line was recorded.
    LineRecorded(AnnotatedTimecardLine),
    /// A line was swapped for a newly identified one.
    LineReplaced {
        /// The identifier that no longer resolves.
        previous: LineId,
        /// The replacement as stored.
        line: AnnotatedTimecardLine,
    },
    /// A line's attributes were overwritten.
    LineUpdated(AnnotatedTimecardLine),
    /// A status change was appended to the history.
    Transitioned(Transition),
    /// The timecard should be removed by the storage layer.
    Deleted,
}

/// The result of a successful command.
///
/// Commands are atomic: they either succeed completely or leave the input
/// timecard as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyResult {
    /// The timecard after the command.
    pub new_timecard: Timecard,
    /// What changed.
    pub effect: Effect,
}

/// Applies a command to a timecard, producing the updated timecard.
///
/// The command must be one of the actions the current status offers; the
/// same table drives the advertised affordances, so a client that only
/// follows links never sees this check fail.
///
/// # Arguments
///
/// * `timecard` - The current timecard (immutable)
/// * `command` - The command to apply
/// * `occurred_at` - Timestamp for any recorded line or transition. A
///   transition is never stamped earlier than the current latest one.
///
/// # Errors
///
/// Returns an error if:
/// - The current status does not permit the command
/// - A referenced line does not exist
pub fn apply(
    timecard: &Timecard,
    command: Command,
    occurred_at: OffsetDateTime,
) -> Result<ApplyResult, CoreError> {
    let status: TimecardStatus = timecard.status();
    let action: TimecardAction = command.action();
    status.validate_action(action)?;

    let mut new_timecard: Timecard = timecard.clone();

    let effect: Effect = match command {
        Command::RecordLine { line } => {
            Effect::LineRecorded(new_timecard.add_line(line, occurred_at).clone())
        }
        Command::ReplaceLine { line_id, line } => {
            let replacement: AnnotatedTimecardLine = new_timecard
                .replace_line(line, &line_id, occurred_at)?
                .clone();
            Effect::LineReplaced {
                previous: line_id,
                line: replacement,
            }
        }
        Command::UpdateLine { line_id, line } => {
            Effect::LineUpdated(new_timecard.update_line(line, &line_id)?.clone())
        }
        Command::Submit { resource } => {
            transition(&mut new_timecard, TransitionEvent::Submitted { resource }, occurred_at)
        }
        Command::Reject { resource, reason } => transition(
            &mut new_timecard,
            TransitionEvent::Rejected { resource, reason },
            occurred_at,
        ),
        Command::Approve { resource } => {
            transition(&mut new_timecard, TransitionEvent::Approved { resource }, occurred_at)
        }
        Command::Cancel { resource, reason } => transition(
            &mut new_timecard,
            TransitionEvent::Cancelled { resource, reason },
            occurred_at,
        ),
        Command::Delete { .. } => Effect::Deleted,
    };

    Ok(ApplyResult {
        new_timecard,
        effect,
    })
}

/// Appends a transition that is guaranteed to become the latest.
///
/// A timestamp earlier than the current latest transition is clamped up to
/// it; equal timestamps resolve to the last appended entry.
fn transition(
    timecard: &mut Timecard,
    event: TransitionEvent,
    occurred_at: OffsetDateTime,
) -> Effect {
    let latest: OffsetDateTime = timecard.transitions().latest().occurred_at();
    let transition: Transition = Transition::new(event, occurred_at.max(latest));
    timecard.append_transition(transition.clone());
    Effect::Transitioned(transition)
}
