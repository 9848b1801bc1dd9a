// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command boundary and external representation for timecards.
//!
//! Handlers are generic over a [`TimecardStore`](timecard_persistence::TimecardStore)
//! and return serde-serializable responses. Every timecard representation
//! carries hypermedia links computed from its current status.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod affordances;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use affordances::{compute_action_links, compute_document_links};
pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    approve_timecard, cancel_timecard, create_timecard, delete_timecard, get_line,
    get_submittal, get_timecard, list_lines, list_timecards, list_transitions, record_line,
    reject_timecard, replace_line, submit_timecard, update_line,
};
pub use request_response::{
    ActionLink, ApprovalRequest, CancellationRequest, ContentType, CreateTimecardRequest,
    DeletionRequest, DocumentLink, DocumentRelationship, LineResponse, Method,
    RejectionRequest, SubmittalRequest, TimecardLineRequest, TimecardResponse,
    TransitionResponse, parse_resource,
};
