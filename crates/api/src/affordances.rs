// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hypermedia affordances for timecard representations.
//!
//! Links are computed from the timecard's identity, status and line count
//! alone. They are regenerated on every read and never stored.

use crate::request_response::{
    ActionLink, ContentType, DocumentLink, DocumentRelationship, Method,
};
use timecard_domain::{TimecardAction, TimecardIdentity, TimecardStatus};

/// Computes the actions a client may take on a timecard.
///
/// The actions are exactly those the status permits, in the same order, so
/// a client that follows only advertised links never has a command refused
/// for its status.
///
/// # Arguments
///
/// * `identity` - The timecard identity
/// * `status` - The current status
#[must_use]
pub fn compute_action_links(
    identity: &TimecardIdentity,
    status: TimecardStatus,
) -> Vec<ActionLink> {
    status
        .permitted_actions()
        .iter()
        .map(|action| action_link(identity, *action))
        .collect()
}

/// Computes the related documents a client may read.
///
/// Order is transitions, then lines when any exist, then the submittal
/// while the timecard is submitted.
///
/// # Arguments
///
/// * `identity` - The timecard identity
/// * `status` - The current status
/// * `line_count` - Number of lines on the timecard
#[must_use]
pub fn compute_document_links(
    identity: &TimecardIdentity,
    status: TimecardStatus,
    line_count: usize,
) -> Vec<DocumentLink> {
    let mut links: Vec<DocumentLink> = vec![DocumentLink {
        method: Method::Get,
        content_type: ContentType::Transitions,
        relationship: DocumentRelationship::Transitions,
        reference: format!("/timesheets/{identity}/transitions"),
    }];

    if line_count > 0 {
        links.push(DocumentLink {
            method: Method::Get,
            content_type: ContentType::TimesheetLine,
            relationship: DocumentRelationship::Lines,
            reference: format!("/timesheets/{identity}/lines"),
        });
    }

    match status {
        TimecardStatus::Submitted => links.push(DocumentLink {
            method: Method::Get,
            content_type: ContentType::Transitions,
            relationship: DocumentRelationship::Submittal,
            reference: format!("/timesheets/{identity}/submittal"),
        }),
        TimecardStatus::Draft | TimecardStatus::Approved | TimecardStatus::Cancelled => {}
    }

    links
}

fn action_link(identity: &TimecardIdentity, action: TimecardAction) -> ActionLink {
    let (method, content_type, path): (Method, ContentType, &str) = match action {
        TimecardAction::Cancel => (Method::Post, ContentType::Cancellation, "/cancellation"),
        TimecardAction::Submit => (Method::Post, ContentType::Submittal, "/submittal"),
        TimecardAction::RecordLine => (Method::Post, ContentType::TimesheetLine, "/lines"),
        TimecardAction::Replace => (
            Method::Post,
            ContentType::TimesheetLine,
            "/lines/{lineId}",
        ),
        TimecardAction::Update => (
            Method::Patch,
            ContentType::TimesheetLine,
            "/lines/{lineId}",
        ),
        TimecardAction::DeleteTimeSheet => (Method::Delete, ContentType::Timesheet, ""),
        TimecardAction::Reject => (Method::Post, ContentType::Rejection, "/rejection"),
        TimecardAction::Approve => (Method::Post, ContentType::Approval, "/approval"),
    };

    ActionLink {
        method,
        content_type,
        relationship: action,
        reference: format!("/timesheets/{identity}{path}"),
    }
}
