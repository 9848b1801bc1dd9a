// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use timecard_audit::{Transition, TransitionEvent, TransitionLog};
use timecard_domain::{
    AnnotatedTimecardLine, DomainError, LineCollection, LineId, ResourceId, TimecardIdentity,
    TimecardLine, TimecardStatus,
};
use uuid::Uuid;

/// The schema marker exposed with every timecard representation.
pub const TIMECARD_VERSION: &str = "timecard-0.1";

/// A timecard together with its lines and transition history.
///
/// The timecard is one consistency boundary. Its status is not stored: it
/// is read from the transition log on every access.
///
/// A `Timecard` performs no locking. Callers that share one timecard
/// between concurrent command handlers must serialize access themselves;
/// the persistence layer detects conflicting writes through
/// `record_identity` and `record_version`.
#[derive(Debug, Clone, PartialEq)]
pub struct Timecard {
    resource: ResourceId,
    identity: TimecardIdentity,
    unique_identifier: Uuid,
    record_identity: i64,
    record_version: i64,
    opened: OffsetDateTime,
    lines: LineCollection,
    transitions: TransitionLog,
}

/// The persisted form of a timecard.
///
/// This is what a storage backend reads and writes. It is turned back into
/// a `Timecard` with `Timecard::hydrate`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimecardRecord {
    pub resource: ResourceId,
    pub identity: TimecardIdentity,
    pub unique_identifier: Uuid,
    pub record_identity: i64,
    pub record_version: i64,
    pub opened: OffsetDateTime,
    pub lines: Vec<AnnotatedTimecardLine>,
    /// Transitions in append order.
    pub transitions: Vec<Transition>,
}

impl Timecard {
    /// Opens a new draft timecard for `resource`, timestamped now.
    #[must_use]
    pub fn new(resource: ResourceId) -> Self {
        Self::opened_at(resource, OffsetDateTime::now_utc())
    }

    /// Opens a new draft timecard for `resource` at a given instant.
    ///
    /// The transition log is seeded with a single `Entered` transition at
    /// `opened`; this is the only way a timecard comes into being.
    #[must_use]
    pub fn opened_at(resource: ResourceId, opened: OffsetDateTime) -> Self {
        let entered: Transition = Transition::new(TransitionEvent::Entered { resource }, opened);

        Self {
            resource,
            identity: TimecardIdentity::generate(),
            unique_identifier: Uuid::new_v4(),
            record_identity: 0,
            record_version: 0,
            opened,
            lines: LineCollection::new(),
            transitions: TransitionLog::new(entered),
        }
    }

    /// Rebuilds a timecard from its persisted form.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyTransitionLog` if the record carries no
    /// transitions.
    pub fn hydrate(record: TimecardRecord) -> Result<Self, DomainError> {
        let transitions: TransitionLog = TransitionLog::from_entries(record.transitions)?;

        Ok(Self {
            resource: record.resource,
            identity: record.identity,
            unique_identifier: record.unique_identifier,
            record_identity: record.record_identity,
            record_version: record.record_version,
            opened: record.opened,
            lines: LineCollection::from_lines(record.lines),
            transitions,
        })
    }

    /// Converts the timecard to its persisted form.
    #[must_use]
    pub fn to_record(&self) -> TimecardRecord {
        TimecardRecord {
            resource: self.resource,
            identity: self.identity,
            unique_identifier: self.unique_identifier,
            record_identity: self.record_identity,
            record_version: self.record_version,
            opened: self.opened,
            lines: self.lines.iter().cloned().collect(),
            transitions: self.transitions.iter().cloned().collect(),
        }
    }

    #[must_use]
    pub const fn resource(&self) -> ResourceId {
        self.resource
    }

    #[must_use]
    pub const fn identity(&self) -> TimecardIdentity {
        self.identity
    }

    #[must_use]
    pub const fn unique_identifier(&self) -> Uuid {
        self.unique_identifier
    }

    #[must_use]
    pub const fn record_identity(&self) -> i64 {
        self.record_identity
    }

    #[must_use]
    pub const fn record_version(&self) -> i64 {
        self.record_version
    }

    #[must_use]
    pub const fn opened(&self) -> OffsetDateTime {
        self.opened
    }

    #[must_use]
    pub const fn lines(&self) -> &LineCollection {
        &self.lines
    }

    #[must_use]
    pub const fn transitions(&self) -> &TransitionLog {
        &self.transitions
    }

    #[must_use]
    pub const fn version(&self) -> &'static str {
        TIMECARD_VERSION
    }

    /// The current status, derived from the transition log.
    #[must_use]
    pub fn status(&self) -> TimecardStatus {
        self.transitions.current_status()
    }

    /// Records a line. No status check is made here; see `apply`.
    pub fn add_line(
        &mut self,
        line: TimecardLine,
        recorded: OffsetDateTime,
    ) -> &AnnotatedTimecardLine {
        self.lines.add(line, recorded)
    }

    /// Replaces the line with `line_id` by a newly identified line.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LineNotFound` if no line has `line_id`.
    pub fn replace_line(
        &mut self,
        line: TimecardLine,
        line_id: &LineId,
        recorded: OffsetDateTime,
    ) -> Result<&AnnotatedTimecardLine, DomainError> {
        self.lines.replace(line, line_id, recorded)
    }

    /// Updates the line with `line_id` in place.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LineNotFound` if no line has `line_id`.
    pub fn update_line(
        &mut self,
        line: TimecardLine,
        line_id: &LineId,
    ) -> Result<&AnnotatedTimecardLine, DomainError> {
        self.lines.update(line, line_id)
    }

    /// Appends a status change to the history.
    pub fn append_transition(&mut self, transition: Transition) {
        self.transitions.append(transition);
    }

    pub const fn set_record_identity(&mut self, record_identity: i64) {
        self.record_identity = record_identity;
    }

    pub const fn set_record_version(&mut self, record_version: i64) {
        self.record_version = record_version;
    }
}
