// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use timecard_domain::{TimecardAction, TimecardIdentity, TimecardStatus};
use timecard_persistence::TimecardStore;

use super::helpers::{
    TEST_RESOURCE, TEST_REVIEWER, create_test_line_request, create_test_store,
    create_test_timecard, submit_test_timecard,
};
use crate::{
    ApiError, ApprovalRequest, CancellationRequest, CreateTimecardRequest, DeletionRequest,
    DocumentRelationship, RejectionRequest, approve_timecard, cancel_timecard, create_timecard,
    delete_timecard, get_line, get_submittal, get_timecard, list_lines, list_timecards,
    list_transitions, record_line, reject_timecard, replace_line, update_line,
};

#[test]
fn test_create_timecard_returns_draft_representation() {
    let mut store = create_test_store();

    let response = create_test_timecard(&mut store);

    assert_eq!(response.status, TimecardStatus::Draft);
    assert_eq!(response.version, "timecard-0.1");
    assert_eq!(response.resource, TEST_RESOURCE);
    assert_eq!(response.record_identity, 1);
    assert_eq!(response.record_version, 1);
    assert_eq!(response.actions.len(), 6);
    assert_eq!(response.documentation.len(), 1);
    assert_ne!(response.id, response.unique_identifier);
}

#[test]
fn test_create_timecard_rejects_non_positive_resource() {
    let mut store = create_test_store();

    let result = create_timecard(&mut store, &CreateTimecardRequest { resource: 0 });

    match result {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "resource"),
        other => panic!("Expected InvalidInput, got: {other:?}"),
    }
    assert!(store.is_empty());
}

#[test]
fn test_get_timecard_rejects_malformed_identifier() {
    let store = create_test_store();

    match get_timecard(&store, "timecard-1") {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "timecard_id"),
        other => panic!("Expected InvalidInput, got: {other:?}"),
    }
}

#[test]
fn test_get_timecard_reports_unknown_identifier() {
    let store = create_test_store();
    let unknown = TimecardIdentity::generate().to_string();

    match get_timecard(&store, &unknown) {
        Err(ApiError::ResourceNotFound { resource_type, .. }) => {
            assert_eq!(resource_type, "Timecard");
        }
        other => panic!("Expected ResourceNotFound, got: {other:?}"),
    }
}

#[test]
fn test_record_line_adds_lines_document() {
    let mut store = create_test_store();
    let created = create_test_timecard(&mut store);

    let line = record_line(
        &mut store,
        &created.id,
        &create_test_line_request("Monday", 8.0, "ALPHA"),
    )
    .unwrap();
    let reread = get_timecard(&store, &created.id).unwrap();

    assert_eq!(line.work_date, "2026-03-02");
    assert_eq!(line.project, "ALPHA");
    assert_eq!(reread.record_version, 2);
    assert_eq!(reread.documentation.len(), 2);
    assert_eq!(
        reread.documentation[1].relationship,
        DocumentRelationship::Lines
    );
}

#[test]
fn test_record_line_rejects_unknown_day() {
    let mut store = create_test_store();
    let created = create_test_timecard(&mut store);

    let result = record_line(
        &mut store,
        &created.id,
        &create_test_line_request("Funday", 8.0, "ALPHA"),
    );

    match result {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "day"),
        other => panic!("Expected InvalidInput, got: {other:?}"),
    }
    assert!(list_lines(&store, &created.id).unwrap().is_empty());
}

#[test]
fn test_record_line_rejects_excess_hours() {
    let mut store = create_test_store();
    let created = create_test_timecard(&mut store);

    let result = record_line(
        &mut store,
        &created.id,
        &create_test_line_request("Tuesday", 25.0, "ALPHA"),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "hours"
    ));
}

#[test]
fn test_replace_line_issues_new_identifier() {
    let mut store = create_test_store();
    let created = create_test_timecard(&mut store);
    let original = record_line(
        &mut store,
        &created.id,
        &create_test_line_request("Monday", 8.0, "ALPHA"),
    )
    .unwrap();

    let replacement = replace_line(
        &mut store,
        &created.id,
        &original.unique_identifier,
        &create_test_line_request("Tuesday", 6.0, "BETA"),
    )
    .unwrap();

    assert_ne!(replacement.unique_identifier, original.unique_identifier);
    match get_line(&store, &created.id, &original.unique_identifier) {
        Err(ApiError::ResourceNotFound { resource_type, .. }) => {
            assert_eq!(resource_type, "Line");
        }
        other => panic!("Expected ResourceNotFound, got: {other:?}"),
    }
    let fetched = get_line(&store, &created.id, &replacement.unique_identifier).unwrap();
    assert_eq!(fetched.project, "BETA");
}

#[test]
fn test_update_line_keeps_identifier() {
    let mut store = create_test_store();
    let created = create_test_timecard(&mut store);
    let original = record_line(
        &mut store,
        &created.id,
        &create_test_line_request("Monday", 8.0, "ALPHA"),
    )
    .unwrap();

    let updated = update_line(
        &mut store,
        &created.id,
        &original.unique_identifier,
        &create_test_line_request("Wednesday", 4.5, "ALPHA"),
    )
    .unwrap();

    assert_eq!(updated.unique_identifier, original.unique_identifier);
    let fetched = get_line(&store, &created.id, &original.unique_identifier).unwrap();
    assert_eq!(fetched.hours, 4.5);
    assert_eq!(fetched.day, "Wednesday");
    assert_eq!(fetched.work_date, "2026-03-04");
}

#[test]
fn test_update_line_rejects_malformed_line_identifier() {
    let mut store = create_test_store();
    let created = create_test_timecard(&mut store);

    let result = update_line(
        &mut store,
        &created.id,
        "line-one",
        &create_test_line_request("Monday", 8.0, "ALPHA"),
    );

    match result {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "line_id"),
        other => panic!("Expected InvalidInput, got: {other:?}"),
    }
}

#[test]
fn test_list_lines_preserves_recorded_order() {
    let mut store = create_test_store();
    let created = create_test_timecard(&mut store);
    for (day, project) in [("Monday", "A"), ("Tuesday", "B"), ("Wednesday", "C")] {
        record_line(
            &mut store,
            &created.id,
            &create_test_line_request(day, 8.0, project),
        )
        .unwrap();
    }

    let projects: Vec<String> = list_lines(&store, &created.id)
        .unwrap()
        .into_iter()
        .map(|line| line.project)
        .collect();

    assert_eq!(projects, vec!["A", "B", "C"]);
}

#[test]
fn test_submit_switches_affordances() {
    let mut store = create_test_store();
    let created = create_test_timecard(&mut store);

    submit_test_timecard(&mut store, &created.id);
    let reread = get_timecard(&store, &created.id).unwrap();

    assert_eq!(reread.status, TimecardStatus::Submitted);
    let actions: Vec<TimecardAction> = reread
        .actions
        .iter()
        .map(|link| link.relationship)
        .collect();
    assert_eq!(
        actions,
        vec![
            TimecardAction::Cancel,
            TimecardAction::Reject,
            TimecardAction::Approve,
        ]
    );
    assert_eq!(
        reread.documentation.last().map(|link| link.relationship),
        Some(DocumentRelationship::Submittal)
    );
}

#[test]
fn test_get_submittal_returns_latest_submission() {
    let mut store = create_test_store();
    let created = create_test_timecard(&mut store);

    assert!(matches!(
        get_submittal(&store, &created.id),
        Err(ApiError::ResourceNotFound { .. })
    ));

    submit_test_timecard(&mut store, &created.id);
    let submittal = get_submittal(&store, &created.id).unwrap();

    assert_eq!(submittal.kind, "Submitted");
    assert_eq!(submittal.transitioned_to, TimecardStatus::Submitted);
    assert_eq!(submittal.resource, TEST_RESOURCE);
}

#[test]
fn test_submitted_timecard_refuses_new_lines() {
    let mut store = create_test_store();
    let created = create_test_timecard(&mut store);
    submit_test_timecard(&mut store, &created.id);
    let before = get_timecard(&store, &created.id).unwrap();

    let result = record_line(
        &mut store,
        &created.id,
        &create_test_line_request("Monday", 8.0, "ALPHA"),
    );

    match result {
        Err(ApiError::DomainRuleViolation { rule, .. }) => {
            assert_eq!(rule, "status_permits_action");
        }
        other => panic!("Expected DomainRuleViolation, got: {other:?}"),
    }
    let after = get_timecard(&store, &created.id).unwrap();
    assert_eq!(after, before);
}

#[test]
fn test_rejection_returns_to_draft() {
    let mut store = create_test_store();
    let created = create_test_timecard(&mut store);
    submit_test_timecard(&mut store, &created.id);

    let rejection = reject_timecard(
        &mut store,
        &created.id,
        &RejectionRequest {
            resource: TEST_REVIEWER,
            reason: String::from("missing Friday"),
        },
    )
    .unwrap();
    let reread = get_timecard(&store, &created.id).unwrap();
    let history = list_transitions(&store, &created.id).unwrap();

    assert_eq!(rejection.transitioned_to, TimecardStatus::Draft);
    assert_eq!(rejection.reason.as_deref(), Some("missing Friday"));
    assert_eq!(reread.status, TimecardStatus::Draft);
    assert_eq!(reread.actions.len(), 6);
    let kinds: Vec<&str> = history.iter().map(|t| t.kind.as_str()).collect();
    assert_eq!(kinds, vec!["Entered", "Submitted", "Rejected"]);
}

#[test]
fn test_approved_timecard_is_terminal() {
    let mut store = create_test_store();
    let created = create_test_timecard(&mut store);
    submit_test_timecard(&mut store, &created.id);

    approve_timecard(
        &mut store,
        &created.id,
        &ApprovalRequest {
            resource: TEST_REVIEWER,
        },
    )
    .unwrap();
    let reread = get_timecard(&store, &created.id).unwrap();

    assert_eq!(reread.status, TimecardStatus::Approved);
    assert!(reread.actions.is_empty());
    assert_eq!(reread.documentation.len(), 1);

    let cancel = cancel_timecard(
        &mut store,
        &created.id,
        &CancellationRequest {
            resource: TEST_RESOURCE,
            reason: String::from("too late"),
        },
    );
    assert!(matches!(cancel, Err(ApiError::DomainRuleViolation { .. })));
}

#[test]
fn test_cancel_draft_records_reason() {
    let mut store = create_test_store();
    let created = create_test_timecard(&mut store);

    let cancellation = cancel_timecard(
        &mut store,
        &created.id,
        &CancellationRequest {
            resource: TEST_RESOURCE,
            reason: String::from("duplicate"),
        },
    )
    .unwrap();

    assert_eq!(cancellation.transitioned_to, TimecardStatus::Cancelled);
    assert_eq!(cancellation.reason.as_deref(), Some("duplicate"));
    assert_eq!(
        get_timecard(&store, &created.id).unwrap().status,
        TimecardStatus::Cancelled
    );
}

#[test]
fn test_delete_draft_removes_timecard() {
    let mut store = create_test_store();
    let created = create_test_timecard(&mut store);

    delete_timecard(
        &mut store,
        &created.id,
        &DeletionRequest {
            resource: TEST_RESOURCE,
        },
    )
    .unwrap();

    assert!(matches!(
        get_timecard(&store, &created.id),
        Err(ApiError::ResourceNotFound { .. })
    ));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_delete_submitted_is_refused() {
    let mut store = create_test_store();
    let created = create_test_timecard(&mut store);
    submit_test_timecard(&mut store, &created.id);

    let result = delete_timecard(
        &mut store,
        &created.id,
        &DeletionRequest {
            resource: TEST_RESOURCE,
        },
    );

    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));
    assert!(get_timecard(&store, &created.id).is_ok());
}

#[test]
fn test_list_timecards_in_creation_order() {
    let mut store = create_test_store();
    let first = create_test_timecard(&mut store);
    let second = create_test_timecard(&mut store);

    let listed: Vec<String> = list_timecards(&store)
        .unwrap()
        .into_iter()
        .map(|timecard| timecard.id)
        .collect();

    assert_eq!(listed, vec![first.id, second.id]);
}

#[test]
fn test_get_submittal_follows_resubmission() {
    let mut store = create_test_store();
    let created = create_test_timecard(&mut store);
    submit_test_timecard(&mut store, &created.id);
    reject_timecard(
        &mut store,
        &created.id,
        &RejectionRequest {
            resource: TEST_REVIEWER,
            reason: String::from("hours missing"),
        },
    )
    .unwrap();
    submit_test_timecard(&mut store, &created.id);

    let history = list_transitions(&store, &created.id).unwrap();
    let submittal = get_submittal(&store, &created.id).unwrap();

    assert_eq!(history.len(), 4);
    assert_eq!(submittal, history[3]);
    assert_eq!(submittal.kind, "Submitted");
    assert!(submittal.reason.is_none());
}
