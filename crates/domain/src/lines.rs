// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The ordered, identity-keyed set of lines on a timecard.
//!
//! Lookups are a linear scan. Timecards hold a handful of lines per week,
//! so an index by identifier would not pay for itself.

use crate::error::DomainError;
use crate::identifiers::LineId;
use crate::line::{AnnotatedTimecardLine, TimecardLine};
use time::OffsetDateTime;

/// Lines in the order they were recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineCollection {
    lines: Vec<AnnotatedTimecardLine>,
}

impl LineCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Rebuilds a collection from lines that already carry identifiers.
    #[must_use]
    pub const fn from_lines(lines: Vec<AnnotatedTimecardLine>) -> Self {
        Self { lines }
    }

    /// Records a new line under a fresh identifier.
    ///
    /// Returns the stored line.
    pub fn add(&mut self, line: TimecardLine, recorded: OffsetDateTime) -> &AnnotatedTimecardLine {
        let index: usize = self.lines.len();
        self.lines.push(AnnotatedTimecardLine::new(line, recorded));
        &self.lines[index]
    }

    /// Returns the position of the line with `line_id`, or `None`.
    #[must_use]
    pub fn index_of(&self, line_id: &LineId) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.unique_identifier() == *line_id)
    }

    /// Swaps the line with `line_id` for a newly identified one at the same
    /// position.
    ///
    /// The replacement is a different logical line: external references to
    /// `line_id` no longer resolve afterwards.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LineNotFound` if no line has `line_id`.
    pub fn replace(
        &mut self,
        line: TimecardLine,
        line_id: &LineId,
        recorded: OffsetDateTime,
    ) -> Result<&AnnotatedTimecardLine, DomainError> {
        let index: usize = self.require_index(line_id)?;
        self.lines.remove(index);
        self.lines
            .insert(index, AnnotatedTimecardLine::new(line, recorded));
        Ok(&self.lines[index])
    }

    /// Overwrites the attributes of the line with `line_id`, keeping its
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LineNotFound` if no line has `line_id`.
    pub fn update(
        &mut self,
        line: TimecardLine,
        line_id: &LineId,
    ) -> Result<&AnnotatedTimecardLine, DomainError> {
        let index: usize = self.require_index(line_id)?;
        self.lines[index].update_from(line);
        Ok(&self.lines[index])
    }

    /// Looks up a line by identifier.
    #[must_use]
    pub fn get(&self, line_id: &LineId) -> Option<&AnnotatedTimecardLine> {
        self.index_of(line_id).map(|index| &self.lines[index])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnnotatedTimecardLine> {
        self.lines.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn require_index(&self, line_id: &LineId) -> Result<usize, DomainError> {
        self.index_of(line_id)
            .ok_or_else(|| DomainError::LineNotFound {
                line_id: line_id.to_string(),
            })
    }
}

impl<'a> IntoIterator for &'a LineCollection {
    type Item = &'a AnnotatedTimecardLine;
    type IntoIter = std::slice::Iter<'a, AnnotatedTimecardLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
