// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command boundary handlers.
//!
//! Every mutating handler follows the same path: parse identifiers, load the
//! timecard, apply the command through the core, then save (or delete) and
//! project the result. Nothing is written unless the command succeeds.

use time::OffsetDateTime;
use timecard::{ApplyResult, Command, Effect, Timecard, apply, find_line};
use timecard_audit::{Transition, TransitionEvent};
use timecard_domain::{AnnotatedTimecardLine, LineId, ResourceId, TimecardIdentity, TimecardLine};
use timecard_persistence::TimecardStore;
use tracing::{debug, info, warn};

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    ApprovalRequest, CancellationRequest, CreateTimecardRequest, DeletionRequest, LineResponse,
    RejectionRequest, SubmittalRequest, TimecardLineRequest, TimecardResponse,
    TransitionResponse, parse_resource,
};

/// Opens a new timecard for a resource.
///
/// The timecard starts in `Draft` with a single `Entered` transition.
///
/// # Errors
///
/// Returns an error if:
/// - The resource is not positive
/// - The store refuses the new timecard
pub fn create_timecard<S: TimecardStore>(
    store: &mut S,
    request: &CreateTimecardRequest,
) -> Result<TimecardResponse, ApiError> {
    let resource: ResourceId = parse_resource(request.resource).map_err(translate_domain_error)?;

    let timecard: Timecard = Timecard::new(resource);
    let stored: Timecard = store
        .insert(&timecard)
        .map_err(translate_persistence_error)?;

    info!(
        timecard_id = %stored.identity(),
        rec_id = stored.record_identity(),
        resource = %resource,
        "Created timecard"
    );

    TimecardResponse::from_timecard(&stored)
}

/// Returns the representation of a single timecard.
///
/// # Errors
///
/// Returns an error if the identifier is malformed or unknown.
pub fn get_timecard<S: TimecardStore>(
    store: &S,
    timecard_id: &str,
) -> Result<TimecardResponse, ApiError> {
    let timecard: Timecard = load_timecard(store, timecard_id)?;
    TimecardResponse::from_timecard(&timecard)
}

/// Returns every stored timecard in creation order.
///
/// # Errors
///
/// Returns an error if a stored timecard cannot be reconstructed.
pub fn list_timecards<S: TimecardStore>(store: &S) -> Result<Vec<TimecardResponse>, ApiError> {
    let timecards: Vec<Timecard> = store.list().map_err(translate_persistence_error)?;
    debug!(count = timecards.len(), "Listing timecards");
    timecards.iter().map(TimecardResponse::from_timecard).collect()
}

/// Records a new line on a draft timecard.
///
/// # Errors
///
/// Returns an error if:
/// - The timecard identifier is malformed or unknown
/// - The line is invalid
/// - The timecard is not in `Draft`
/// - The timecard was modified concurrently
pub fn record_line<S: TimecardStore>(
    store: &mut S,
    timecard_id: &str,
    request: &TimecardLineRequest,
) -> Result<LineResponse, ApiError> {
    let line: TimecardLine = request.to_line().map_err(translate_domain_error)?;
    let (timecard, effect): (Timecard, Effect) =
        execute(store, timecard_id, Command::RecordLine { line })?;

    let response: LineResponse = line_from_effect(&effect)?;
    info!(
        timecard_id = %timecard.identity(),
        line_id = %response.unique_identifier,
        project = %response.project,
        hours = response.hours,
        "Recorded line"
    );
    Ok(response)
}

/// Replaces a line with a newly identified one at the same position.
///
/// The old line identifier stops resolving.
///
/// # Errors
///
/// Returns an error if:
/// - Either identifier is malformed
/// - The timecard or line does not exist
/// - The line is invalid
/// - The timecard is not in `Draft`
/// - The timecard was modified concurrently
pub fn replace_line<S: TimecardStore>(
    store: &mut S,
    timecard_id: &str,
    line_id: &str,
    request: &TimecardLineRequest,
) -> Result<LineResponse, ApiError> {
    let line_id: LineId = line_id.parse().map_err(translate_domain_error)?;
    let line: TimecardLine = request.to_line().map_err(translate_domain_error)?;
    let (timecard, effect): (Timecard, Effect) =
        execute(store, timecard_id, Command::ReplaceLine { line_id, line })?;

    let response: LineResponse = line_from_effect(&effect)?;
    info!(
        timecard_id = %timecard.identity(),
        previous_line_id = %line_id,
        line_id = %response.unique_identifier,
        "Replaced line"
    );
    Ok(response)
}

/// Overwrites a line's attributes, keeping its identifier.
///
/// # Errors
///
/// Returns an error if:
/// - Either identifier is malformed
/// - The timecard or line does not exist
/// - The line is invalid
/// - The timecard is not in `Draft`
/// - The timecard was modified concurrently
pub fn update_line<S: TimecardStore>(
    store: &mut S,
    timecard_id: &str,
    line_id: &str,
    request: &TimecardLineRequest,
) -> Result<LineResponse, ApiError> {
    let line_id: LineId = line_id.parse().map_err(translate_domain_error)?;
    let line: TimecardLine = request.to_line().map_err(translate_domain_error)?;
    let (timecard, effect): (Timecard, Effect) =
        execute(store, timecard_id, Command::UpdateLine { line_id, line })?;

    let response: LineResponse = line_from_effect(&effect)?;
    info!(
        timecard_id = %timecard.identity(),
        line_id = %line_id,
        "Updated line"
    );
    Ok(response)
}

/// Returns a single line document.
///
/// # Errors
///
/// Returns an error if either identifier is malformed or unknown.
pub fn get_line<S: TimecardStore>(
    store: &S,
    timecard_id: &str,
    line_id: &str,
) -> Result<LineResponse, ApiError> {
    let timecard: Timecard = load_timecard(store, timecard_id)?;
    let line: &AnnotatedTimecardLine = find_line(&timecard, line_id).map_err(translate_domain_error)?;
    LineResponse::from_line(line)
}

/// Returns all lines on a timecard in recorded order.
///
/// # Errors
///
/// Returns an error if the timecard identifier is malformed or unknown.
pub fn list_lines<S: TimecardStore>(
    store: &S,
    timecard_id: &str,
) -> Result<Vec<LineResponse>, ApiError> {
    let timecard: Timecard = load_timecard(store, timecard_id)?;
    timecard.lines().iter().map(LineResponse::from_line).collect()
}

/// Returns the full transition history in append order.
///
/// # Errors
///
/// Returns an error if the timecard identifier is malformed or unknown.
pub fn list_transitions<S: TimecardStore>(
    store: &S,
    timecard_id: &str,
) -> Result<Vec<TransitionResponse>, ApiError> {
    let timecard: Timecard = load_timecard(store, timecard_id)?;
    timecard
        .transitions()
        .iter()
        .map(TransitionResponse::from_transition)
        .collect()
}

/// Returns the most recent submittal of a timecard.
///
/// # Errors
///
/// Returns an error if the timecard is unknown or was never submitted.
pub fn get_submittal<S: TimecardStore>(
    store: &S,
    timecard_id: &str,
) -> Result<TransitionResponse, ApiError> {
    let timecard: Timecard = load_timecard(store, timecard_id)?;
    let submittal: &Transition = timecard
        .transitions()
        .iter()
        .filter(|transition| matches!(transition.event(), TransitionEvent::Submitted { .. }))
        .last()
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Submittal"),
            message: format!("Timecard '{}' has not been submitted", timecard.identity()),
        })?;
    TransitionResponse::from_transition(submittal)
}

/// Submits a draft timecard for approval.
///
/// # Errors
///
/// Returns an error if the timecard is unknown, not in `Draft`, or was
/// modified concurrently.
pub fn submit_timecard<S: TimecardStore>(
    store: &mut S,
    timecard_id: &str,
    request: &SubmittalRequest,
) -> Result<TransitionResponse, ApiError> {
    let resource: ResourceId = parse_resource(request.resource).map_err(translate_domain_error)?;
    let (timecard, effect): (Timecard, Effect) =
        execute(store, timecard_id, Command::Submit { resource })?;

    info!(timecard_id = %timecard.identity(), resource = %resource, "Submitted timecard");
    transition_from_effect(&effect)
}

/// Sends a submitted timecard back to `Draft`.
///
/// # Errors
///
/// Returns an error if the timecard is unknown, not in `Submitted`, or was
/// modified concurrently.
pub fn reject_timecard<S: TimecardStore>(
    store: &mut S,
    timecard_id: &str,
    request: &RejectionRequest,
) -> Result<TransitionResponse, ApiError> {
    let resource: ResourceId = parse_resource(request.resource).map_err(translate_domain_error)?;
    let command: Command = Command::Reject {
        resource,
        reason: request.reason.clone(),
    };
    let (timecard, effect): (Timecard, Effect) = execute(store, timecard_id, command)?;

    info!(
        timecard_id = %timecard.identity(),
        resource = %resource,
        reason = %request.reason,
        "Rejected timecard"
    );
    transition_from_effect(&effect)
}

/// Approves a submitted timecard.
///
/// # Errors
///
/// Returns an error if the timecard is unknown, not in `Submitted`, or was
/// modified concurrently.
pub fn approve_timecard<S: TimecardStore>(
    store: &mut S,
    timecard_id: &str,
    request: &ApprovalRequest,
) -> Result<TransitionResponse, ApiError> {
    let resource: ResourceId = parse_resource(request.resource).map_err(translate_domain_error)?;
    let (timecard, effect): (Timecard, Effect) =
        execute(store, timecard_id, Command::Approve { resource })?;

    info!(timecard_id = %timecard.identity(), resource = %resource, "Approved timecard");
    transition_from_effect(&effect)
}

/// Cancels a draft or submitted timecard.
///
/// # Errors
///
/// Returns an error if the timecard is unknown, already terminal, or was
/// modified concurrently.
pub fn cancel_timecard<S: TimecardStore>(
    store: &mut S,
    timecard_id: &str,
    request: &CancellationRequest,
) -> Result<TransitionResponse, ApiError> {
    let resource: ResourceId = parse_resource(request.resource).map_err(translate_domain_error)?;
    let command: Command = Command::Cancel {
        resource,
        reason: request.reason.clone(),
    };
    let (timecard, effect): (Timecard, Effect) = execute(store, timecard_id, command)?;

    info!(
        timecard_id = %timecard.identity(),
        resource = %resource,
        reason = %request.reason,
        "Cancelled timecard"
    );
    transition_from_effect(&effect)
}

/// Deletes a draft timecard.
///
/// # Errors
///
/// Returns an error if the timecard is unknown or not in `Draft`.
pub fn delete_timecard<S: TimecardStore>(
    store: &mut S,
    timecard_id: &str,
    request: &DeletionRequest,
) -> Result<(), ApiError> {
    let resource: ResourceId = parse_resource(request.resource).map_err(translate_domain_error)?;
    let (timecard, _effect): (Timecard, Effect) =
        execute(store, timecard_id, Command::Delete { resource })?;

    info!(timecard_id = %timecard.identity(), resource = %resource, "Deleted timecard");
    Ok(())
}

fn parse_timecard_id(timecard_id: &str) -> Result<TimecardIdentity, ApiError> {
    timecard_id.parse().map_err(translate_domain_error)
}

fn load_timecard<S: TimecardStore>(store: &S, timecard_id: &str) -> Result<Timecard, ApiError> {
    let identity: TimecardIdentity = parse_timecard_id(timecard_id)?;
    store.load(&identity).map_err(translate_persistence_error)
}

/// Loads, applies and persists a command.
///
/// Returns the timecard as stored (or as it was just before deletion) and
/// the effect of the command.
fn execute<S: TimecardStore>(
    store: &mut S,
    timecard_id: &str,
    command: Command,
) -> Result<(Timecard, Effect), ApiError> {
    let identity: TimecardIdentity = parse_timecard_id(timecard_id)?;
    let timecard: Timecard = store
        .load(&identity)
        .map_err(translate_persistence_error)?;

    let ApplyResult {
        new_timecard,
        effect,
    } = apply(&timecard, command, OffsetDateTime::now_utc()).map_err(|err| {
        warn!(timecard_id = %identity, error = %err, "Command refused");
        translate_core_error(err)
    })?;

    match effect {
        Effect::Deleted => {
            store
                .delete(&identity)
                .map_err(translate_persistence_error)?;
            Ok((new_timecard, effect))
        }
        Effect::LineRecorded(_)
        | Effect::LineReplaced { .. }
        | Effect::LineUpdated(_)
        | Effect::Transitioned(_) => {
            let saved: Timecard = store
                .save(&new_timecard)
                .map_err(translate_persistence_error)?;
            Ok((saved, effect))
        }
    }
}

fn line_from_effect(effect: &Effect) -> Result<LineResponse, ApiError> {
    match effect {
        Effect::LineRecorded(line) | Effect::LineUpdated(line) | Effect::LineReplaced { line, .. } => {
            LineResponse::from_line(line)
        }
        Effect::Transitioned(_) | Effect::Deleted => Err(ApiError::Internal {
            message: String::from("Line command produced no line"),
        }),
    }
}

fn transition_from_effect(effect: &Effect) -> Result<TransitionResponse, ApiError> {
    match effect {
        Effect::Transitioned(transition) => TransitionResponse::from_transition(transition),
        Effect::LineRecorded(_)
        | Effect::LineReplaced { .. }
        | Effect::LineUpdated(_)
        | Effect::Deleted => Err(ApiError::Internal {
            message: String::from("Status command produced no transition"),
        }),
    }
}
