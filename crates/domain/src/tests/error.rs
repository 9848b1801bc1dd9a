// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, TimecardAction, TimecardStatus};
use time::Weekday;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::LineNotFound {
        line_id: String::from("5f0c6f38-0d7b-4b7e-8d0a-1f1f3b6c2a10"),
    };
    assert_eq!(
        format!("{err}"),
        "Line '5f0c6f38-0d7b-4b7e-8d0a-1f1f3b6c2a10' not found"
    );

    let err: DomainError = DomainError::MalformedIdentifier {
        kind: "line",
        value: String::from("abc"),
    };
    assert_eq!(format!("{err}"), "Malformed line identifier: 'abc'");

    let err: DomainError = DomainError::ActionNotPermitted {
        status: TimecardStatus::Cancelled,
        action: TimecardAction::Approve,
    };
    assert_eq!(
        format!("{err}"),
        "Action 'Approve' is not permitted while timecard is Cancelled"
    );

    let err: DomainError = DomainError::InvalidWeek(54);
    assert_eq!(
        format!("{err}"),
        "Invalid week: 54. Must be between 1 and 53"
    );

    let err: DomainError = DomainError::InvalidWorkDate {
        year: 2025,
        week: 53,
        day: Weekday::Friday,
    };
    assert_eq!(format!("{err}"), "Week 53 of 2025 has no Friday");

    let err: DomainError = DomainError::InvalidDay(String::from("Funday"));
    assert_eq!(format!("{err}"), "Invalid day: 'Funday'");

    let err: DomainError = DomainError::InvalidResource(0);
    assert_eq!(format!("{err}"), "Invalid resource: 0. Must be positive");
}

#[test]
fn test_empty_transition_log_display_mentions_entry() {
    let err: DomainError = DomainError::EmptyTransitionLog;
    assert!(format!("{err}").contains("entered"));
}
