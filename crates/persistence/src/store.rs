// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use timecard::Timecard;
use timecard_domain::TimecardIdentity;

/// Loads and saves timecards.
///
/// Implementations own the optimistic-concurrency scheme: a timecard's
/// `record_identity` is assigned on insert and its `record_version` is
/// compared and advanced on every save.
pub trait TimecardStore {
    /// Stores a new timecard and returns it with its record identity set.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DuplicateTimecard` if the identity is
    /// already stored.
    fn insert(&mut self, timecard: &Timecard) -> Result<Timecard, PersistenceError>;

    /// Loads a timecard by identity.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if nothing is stored under
    /// `identity`.
    fn load(&self, identity: &TimecardIdentity) -> Result<Timecard, PersistenceError>;

    /// Saves a timecard that was previously loaded.
    ///
    /// Returns the timecard with its new record version.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::VersionConflict` if the stored version no
    /// longer matches `timecard.record_version()`.
    fn save(&mut self, timecard: &Timecard) -> Result<Timecard, PersistenceError>;

    /// Removes a timecard.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if nothing is stored under
    /// `identity`.
    fn delete(&mut self, identity: &TimecardIdentity) -> Result<(), PersistenceError>;

    /// Lists every stored timecard in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored record cannot be reconstructed.
    fn list(&self) -> Result<Vec<Timecard>, PersistenceError>;
}
