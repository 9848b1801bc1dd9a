// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use timecard_persistence::InMemoryPersistence;

use crate::{
    CreateTimecardRequest, SubmittalRequest, TimecardLineRequest, TimecardResponse,
    create_timecard, submit_timecard,
};

pub const TEST_RESOURCE: i64 = 7;
pub const TEST_REVIEWER: i64 = 42;

pub fn create_test_store() -> InMemoryPersistence {
    InMemoryPersistence::new()
}

/// A line in ISO week 10 of 2026 (2 March to 8 March).
pub fn create_test_line_request(day: &str, hours: f32, project: &str) -> TimecardLineRequest {
    TimecardLineRequest {
        week: 10,
        year: 2026,
        day: day.to_string(),
        hours,
        project: project.to_string(),
    }
}

pub fn create_test_timecard(store: &mut InMemoryPersistence) -> TimecardResponse {
    create_timecard(
        store,
        &CreateTimecardRequest {
            resource: TEST_RESOURCE,
        },
    )
    .expect("creating a timecard should succeed")
}

pub fn submit_test_timecard(store: &mut InMemoryPersistence, timecard_id: &str) {
    submit_timecard(
        store,
        timecard_id,
        &SubmittalRequest {
            resource: TEST_RESOURCE,
        },
    )
    .expect("submitting a draft should succeed");
}
