// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the timecard command boundary.
//!
//! Responses are regenerated on every read. Lines and transitions are never
//! embedded in a timecard representation; clients follow the document links.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use timecard::Timecard;
use timecard_audit::Transition;
use timecard_domain::{
    AnnotatedTimecardLine, DomainError, ResourceId, TimecardAction, TimecardLine,
    TimecardStatus, parse_day,
};

use crate::affordances::{compute_action_links, compute_document_links};
use crate::error::ApiError;

// ========================================================================
// Hypermedia
// ========================================================================

/// HTTP method advertised by a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// Media type a link expects or returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "application/timesheet+json")]
    Timesheet,
    #[serde(rename = "application/timesheet-line+json")]
    TimesheetLine,
    #[serde(rename = "application/timesheet-transitions+json")]
    Transitions,
    #[serde(rename = "application/timesheet-cancellation+json")]
    Cancellation,
    #[serde(rename = "application/timesheet-submittal+json")]
    Submittal,
    #[serde(rename = "application/timesheet-rejection+json")]
    Rejection,
    #[serde(rename = "application/timesheet-approval+json")]
    Approval,
}

impl ContentType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Timesheet => "application/timesheet+json",
            Self::TimesheetLine => "application/timesheet-line+json",
            Self::Transitions => "application/timesheet-transitions+json",
            Self::Cancellation => "application/timesheet-cancellation+json",
            Self::Submittal => "application/timesheet-submittal+json",
            Self::Rejection => "application/timesheet-rejection+json",
            Self::Approval => "application/timesheet-approval+json",
        }
    }
}

/// The role of a related document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentRelationship {
    Transitions,
    Lines,
    Submittal,
}

/// An action the client may take right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLink {
    pub method: Method,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub relationship: TimecardAction,
    pub reference: String,
}

/// A related document the client may read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLink {
    pub method: Method,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub relationship: DocumentRelationship,
    pub reference: String,
}

// ========================================================================
// Requests
// ========================================================================

/// Request to open a timecard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTimecardRequest {
    /// The resource the timecard belongs to.
    pub resource: i64,
}

/// A line as sent by a client, for record, replace and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimecardLineRequest {
    pub week: u8,
    pub year: i32,
    /// Day name, e.g. `"Monday"` or `"mon"`.
    pub day: String,
    pub hours: f32,
    pub project: String,
}

impl TimecardLineRequest {
    /// Validates the request into a domain line.
    ///
    /// # Errors
    ///
    /// Returns an error if the day cannot be parsed or the line is invalid.
    pub fn to_line(&self) -> Result<TimecardLine, DomainError> {
        let day = parse_day(&self.day)?;
        TimecardLine::new(self.week, self.year, day, self.hours, &self.project)
    }
}

/// Request to submit a timecard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittalRequest {
    pub resource: i64,
}

/// Request to send a submitted timecard back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectionRequest {
    pub resource: i64,
    #[serde(default)]
    pub reason: String,
}

/// Request to accept a submitted timecard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalRequest {
    pub resource: i64,
}

/// Request to withdraw a timecard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationRequest {
    pub resource: i64,
    #[serde(default)]
    pub reason: String,
}

/// Request to discard a draft timecard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletionRequest {
    pub resource: i64,
}

/// Validates a resource number from a request.
///
/// # Errors
///
/// Returns `DomainError::InvalidResource` unless the value is positive.
pub const fn parse_resource(resource: i64) -> Result<ResourceId, DomainError> {
    ResourceId::new(resource)
}

// ========================================================================
// Responses
// ========================================================================

/// The external representation of a timecard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimecardResponse {
    pub id: String,
    #[serde(rename = "recId")]
    pub record_identity: i64,
    #[serde(rename = "recVersion")]
    pub record_version: i64,
    pub version: String,
    pub resource: i64,
    pub status: TimecardStatus,
    pub opened: String,
    pub unique_identifier: String,
    pub actions: Vec<ActionLink>,
    pub documentation: Vec<DocumentLink>,
}

impl TimecardResponse {
    /// Projects a timecard into its representation.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if the opened timestamp cannot be
    /// formatted.
    pub fn from_timecard(timecard: &Timecard) -> Result<Self, ApiError> {
        let status: TimecardStatus = timecard.status();
        Ok(Self {
            id: timecard.identity().to_string(),
            record_identity: timecard.record_identity(),
            record_version: timecard.record_version(),
            version: timecard.version().to_string(),
            resource: timecard.resource().value(),
            status,
            opened: format_timestamp(timecard.opened())?,
            unique_identifier: timecard.unique_identifier().to_string(),
            actions: compute_action_links(&timecard.identity(), status),
            documentation: compute_document_links(
                &timecard.identity(),
                status,
                timecard.lines().len(),
            ),
        })
    }
}

/// A line document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineResponse {
    pub unique_identifier: String,
    pub week: u8,
    pub year: i32,
    pub day: String,
    pub hours: f32,
    pub project: String,
    pub work_date: String,
    pub period_from: String,
    pub period_to: String,
    pub recorded: String,
    pub version: String,
}

impl LineResponse {
    /// Projects a stored line into its representation.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if the recorded timestamp cannot be
    /// formatted.
    pub fn from_line(annotated: &AnnotatedTimecardLine) -> Result<Self, ApiError> {
        let line: &TimecardLine = annotated.line();
        Ok(Self {
            unique_identifier: annotated.unique_identifier().to_string(),
            week: line.week(),
            year: line.year(),
            day: line.day().to_string(),
            hours: line.hours(),
            project: line.project().to_string(),
            work_date: line.work_date().to_string(),
            period_from: line.period_from().to_string(),
            period_to: line.period_to().to_string(),
            recorded: format_timestamp(annotated.recorded())?,
            version: annotated.version().to_string(),
        })
    }
}

/// A transition document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionResponse {
    pub occurred_at: String,
    pub transitioned_to: TimecardStatus,
    pub kind: String,
    pub resource: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl TransitionResponse {
    /// Projects a transition into its representation.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if the timestamp cannot be formatted.
    pub fn from_transition(transition: &Transition) -> Result<Self, ApiError> {
        Ok(Self {
            occurred_at: format_timestamp(transition.occurred_at())?,
            transitioned_to: transition.transitioned_to(),
            kind: transition.event().kind().to_string(),
            resource: transition.event().resource().value(),
            reason: transition.event().reason().map(str::to_string),
        })
    }
}

fn format_timestamp(timestamp: OffsetDateTime) -> Result<String, ApiError> {
    timestamp.format(&Rfc3339).map_err(|e| ApiError::Internal {
        message: format!("Failed to format timestamp: {e}"),
    })
}
