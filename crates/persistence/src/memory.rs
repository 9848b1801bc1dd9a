// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;

use timecard::{Timecard, TimecardRecord};
use timecard_domain::TimecardIdentity;
use tracing::{debug, info};

use crate::error::PersistenceError;
use crate::store::TimecardStore;

/// A process-local timecard store.
///
/// Records are kept in their persisted form and hydrated on every load, so
/// the store exercises the same path a database backend would.
#[derive(Debug, Default)]
pub struct InMemoryPersistence {
    records: HashMap<TimecardIdentity, TimecardRecord>,
    next_record_identity: i64,
}

impl InMemoryPersistence {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored timecards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn stored(&self, identity: &TimecardIdentity) -> Result<&TimecardRecord, PersistenceError> {
        self.records
            .get(identity)
            .ok_or_else(|| PersistenceError::NotFound(identity.to_string()))
    }
}

impl TimecardStore for InMemoryPersistence {
    fn insert(&mut self, timecard: &Timecard) -> Result<Timecard, PersistenceError> {
        let identity: TimecardIdentity = timecard.identity();
        if self.records.contains_key(&identity) {
            return Err(PersistenceError::DuplicateTimecard(identity.to_string()));
        }

        self.next_record_identity += 1;
        let mut record: TimecardRecord = timecard.to_record();
        record.record_identity = self.next_record_identity;
        record.record_version = 1;

        info!(
            identity = %identity,
            record_identity = record.record_identity,
            "Stored new timecard"
        );

        let stored: Timecard = Timecard::hydrate(record.clone())?;
        self.records.insert(identity, record);
        Ok(stored)
    }

    fn load(&self, identity: &TimecardIdentity) -> Result<Timecard, PersistenceError> {
        let record: &TimecardRecord = self.stored(identity)?;
        debug!(
            identity = %identity,
            record_version = record.record_version,
            "Loaded timecard"
        );
        Ok(Timecard::hydrate(record.clone())?)
    }

    fn save(&mut self, timecard: &Timecard) -> Result<Timecard, PersistenceError> {
        let identity: TimecardIdentity = timecard.identity();
        let found: i64 = self.stored(&identity)?.record_version;

        if found != timecard.record_version() {
            return Err(PersistenceError::VersionConflict {
                identity: identity.to_string(),
                expected: timecard.record_version(),
                found,
            });
        }

        let mut record: TimecardRecord = timecard.to_record();
        record.record_version = found + 1;

        debug!(
            identity = %identity,
            record_version = record.record_version,
            lines = record.lines.len(),
            transitions = record.transitions.len(),
            "Saved timecard"
        );

        let saved: Timecard = Timecard::hydrate(record.clone())?;
        self.records.insert(identity, record);
        Ok(saved)
    }

    fn delete(&mut self, identity: &TimecardIdentity) -> Result<(), PersistenceError> {
        self.records
            .remove(identity)
            .ok_or_else(|| PersistenceError::NotFound(identity.to_string()))?;
        info!(identity = %identity, "Deleted timecard");
        Ok(())
    }

    fn list(&self) -> Result<Vec<Timecard>, PersistenceError> {
        let mut records: Vec<&TimecardRecord> = self.records.values().collect();
        records.sort_by_key(|record| record.record_identity);
        records
            .into_iter()
            .map(|record| Timecard::hydrate(record.clone()).map_err(PersistenceError::from))
            .collect()
    }
}
