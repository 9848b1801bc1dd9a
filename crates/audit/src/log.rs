// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Append-only transition history.

use crate::transition::Transition;
use timecard_domain::{DomainError, TimecardStatus};

/// The ordered history of status changes of one timecard.
///
/// The log always holds at least one transition: it can only be built from
/// an initial transition, and entries are never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionLog {
    initial: Transition,
    appended: Vec<Transition>,
}

#[allow(clippy::len_without_is_empty)]
impl TransitionLog {
    /// Starts a log with its first transition.
    #[must_use]
    pub const fn new(initial: Transition) -> Self {
        Self {
            initial,
            appended: Vec::new(),
        }
    }

    /// Rebuilds a log from persisted entries, in append order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyTransitionLog` if `entries` is empty.
    pub fn from_entries(entries: Vec<Transition>) -> Result<Self, DomainError> {
        let mut entries = entries.into_iter();
        let initial: Transition = entries.next().ok_or(DomainError::EmptyTransitionLog)?;
        Ok(Self {
            initial,
            appended: entries.collect(),
        })
    }

    /// Appends a transition. Existing entries are left untouched.
    pub fn append(&mut self, transition: Transition) {
        self.appended.push(transition);
    }

    /// The transition with the latest `occurred_at`.
    ///
    /// When several transitions share the latest timestamp, the one appended
    /// last wins.
    #[must_use]
    pub fn latest(&self) -> &Transition {
        self.appended
            .iter()
            .fold(&self.initial, |latest, candidate| {
                if candidate.occurred_at() >= latest.occurred_at() {
                    candidate
                } else {
                    latest
                }
            })
    }

    /// The status the timecard is currently in.
    #[must_use]
    pub fn current_status(&self) -> TimecardStatus {
        self.latest().transitioned_to()
    }

    /// Iterates over transitions in append order.
    pub fn iter(&self) -> impl Iterator<Item = &Transition> {
        std::iter::once(&self.initial).chain(self.appended.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.appended.len()
    }
}
