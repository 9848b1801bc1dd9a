// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use time::OffsetDateTime;
use time::macros::datetime;
use timecard_domain::ResourceId;

use crate::{Transition, TransitionEvent};

pub const ENTERED_AT: OffsetDateTime = datetime!(2026-03-02 08:00 UTC);

pub fn create_test_resource() -> ResourceId {
    ResourceId::new(7).unwrap()
}

pub fn create_entered_transition() -> Transition {
    Transition::new(
        TransitionEvent::Entered {
            resource: create_test_resource(),
        },
        ENTERED_AT,
    )
}
