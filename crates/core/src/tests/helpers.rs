// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::datetime;
use time::{Duration, OffsetDateTime, Weekday};
use timecard_domain::{ResourceId, TimecardLine};

use crate::{Command, Timecard, apply};

pub const OPENED: OffsetDateTime = datetime!(2026-03-02 08:00 UTC);

pub fn create_test_resource() -> ResourceId {
    ResourceId::new(7).unwrap()
}

pub fn create_test_reviewer() -> ResourceId {
    ResourceId::new(42).unwrap()
}

pub fn create_test_line(day: Weekday, hours: f32, project: &str) -> TimecardLine {
    TimecardLine::new(10, 2026, day, hours, project).unwrap()
}

pub fn create_test_timecard() -> Timecard {
    Timecard::opened_at(create_test_resource(), OPENED)
}

/// Minutes after the timecard was opened.
pub fn at(minutes: i64) -> OffsetDateTime {
    OPENED + Duration::minutes(minutes)
}

/// Applies a command that is expected to succeed.
pub fn applied(timecard: &Timecard, command: Command, minutes: i64) -> Timecard {
    apply(timecard, command, at(minutes))
        .expect("command should be permitted")
        .new_timecard
}

pub fn create_submitted_timecard() -> Timecard {
    let timecard = create_test_timecard();
    let with_line = applied(
        &timecard,
        Command::RecordLine {
            line: create_test_line(Weekday::Monday, 8.0, "ALPHA"),
        },
        1,
    );
    applied(
        &with_line,
        Command::Submit {
            resource: create_test_resource(),
        },
        2,
    )
}
