// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use timecard_domain::{ResourceId, TimecardStatus};

/// What happened to a timecard, and who initiated it.
///
/// Each event kind moves the timecard into exactly one status. `Entered`
/// and `Rejected` both lead to `Draft`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionEvent {
    /// The timecard was opened for a resource.
    Entered {
        /// The resource the timecard belongs to.
        resource: ResourceId,
    },
    /// The timecard was handed in for review.
    Submitted {
        /// The resource that submitted it.
        resource: ResourceId,
    },
    /// A reviewer sent the timecard back for correction.
    Rejected {
        /// The reviewer.
        resource: ResourceId,
        /// Why it was sent back.
        reason: String,
    },
    /// A reviewer accepted the timecard.
    Approved {
        /// The reviewer.
        resource: ResourceId,
    },
    /// The timecard was withdrawn.
    Cancelled {
        /// Who withdrew it.
        resource: ResourceId,
        /// Why it was withdrawn.
        reason: String,
    },
}

impl TransitionEvent {
    /// The status this event moves the timecard into.
    #[must_use]
    pub const fn transitioned_to(&self) -> TimecardStatus {
        match self {
            Self::Entered { .. } | Self::Rejected { .. } => TimecardStatus::Draft,
            Self::Submitted { .. } => TimecardStatus::Submitted,
            Self::Approved { .. } => TimecardStatus::Approved,
            Self::Cancelled { .. } => TimecardStatus::Cancelled,
        }
    }

    /// The resource that initiated the event.
    #[must_use]
    pub const fn resource(&self) -> ResourceId {
        match self {
            Self::Entered { resource }
            | Self::Submitted { resource }
            | Self::Rejected { resource, .. }
            | Self::Approved { resource }
            | Self::Cancelled { resource, .. } => *resource,
        }
    }

    /// The free-text reason, for event kinds that carry one.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Rejected { reason, .. } | Self::Cancelled { reason, .. } => Some(reason),
            Self::Entered { .. } | Self::Submitted { .. } | Self::Approved { .. } => None,
        }
    }

    /// The event kind name.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Entered { .. } => "Entered",
            Self::Submitted { .. } => "Submitted",
            Self::Rejected { .. } => "Rejected",
            Self::Approved { .. } => "Approved",
            Self::Cancelled { .. } => "Cancelled",
        }
    }
}

/// An immutable, timestamped record of a status change.
///
/// Fields are private: once a transition exists it cannot be altered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    occurred_at: OffsetDateTime,
    event: TransitionEvent,
}

impl Transition {
    /// Creates a transition that occurred at `occurred_at`.
    #[must_use]
    pub const fn new(event: TransitionEvent, occurred_at: OffsetDateTime) -> Self {
        Self { occurred_at, event }
    }

    #[must_use]
    pub const fn occurred_at(&self) -> OffsetDateTime {
        self.occurred_at
    }

    #[must_use]
    pub const fn event(&self) -> &TransitionEvent {
        &self.event
    }

    #[must_use]
    pub const fn transitioned_to(&self) -> TimecardStatus {
        self.event.transitioned_to()
    }
}
