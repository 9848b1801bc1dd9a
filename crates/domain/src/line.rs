// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timecard line value objects.

use crate::error::DomainError;
use crate::identifiers::LineId;
use crate::validation::{validate_hours, validate_project, validate_week, validate_year};
use time::{Date, Duration, OffsetDateTime, Weekday};

/// The schema marker carried by every annotated line.
pub const LINE_VERSION: &str = "line-0.1";

/// The hours a resource worked on one project on one day.
///
/// A `TimecardLine` can only be constructed from valid input, so every
/// line held by a timecard resolves to a real calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct TimecardLine {
    week: u8,
    year: i32,
    day: Weekday,
    hours: f32,
    project: String,
    work_date: Date,
}

impl TimecardLine {
    /// Creates a validated timecard line.
    ///
    /// # Arguments
    ///
    /// * `week` - ISO week number
    /// * `year` - ISO week-numbering year
    /// * `day` - Day within the week
    /// * `hours` - Hours worked
    /// * `project` - Project code (trimmed)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The week is outside 1..=53
    /// - The year is outside 2000..=2200
    /// - The hours are not finite or outside `(0, 24]`
    /// - The project is blank
    /// - The week does not exist in that year
    pub fn new(
        week: u8,
        year: i32,
        day: Weekday,
        hours: f32,
        project: &str,
    ) -> Result<Self, DomainError> {
        validate_week(week)?;
        validate_year(year)?;
        validate_hours(hours)?;
        validate_project(project)?;

        let work_date: Date = Date::from_iso_week_date(year, week, day)
            .map_err(|_| DomainError::InvalidWorkDate { year, week, day })?;

        Ok(Self {
            week,
            year,
            day,
            hours,
            project: project.trim().to_string(),
            work_date,
        })
    }

    #[must_use]
    pub const fn week(&self) -> u8 {
        self.week
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn day(&self) -> Weekday {
        self.day
    }

    #[must_use]
    pub const fn hours(&self) -> f32 {
        self.hours
    }

    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// The calendar date the hours were worked on.
    #[must_use]
    pub const fn work_date(&self) -> Date {
        self.work_date
    }

    /// Monday of the line's ISO week.
    #[must_use]
    pub fn period_from(&self) -> Date {
        self.work_date
            .saturating_sub(Duration::days(i64::from(self.day.number_days_from_monday())))
    }

    /// Sunday of the line's ISO week.
    #[must_use]
    pub fn period_to(&self) -> Date {
        self.work_date
            .saturating_add(Duration::days(6 - i64::from(self.day.number_days_from_monday())))
    }
}

/// A line as stored on a timecard: the attributes plus an identity.
///
/// The identifier survives updates but not replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedTimecardLine {
    unique_identifier: LineId,
    recorded: OffsetDateTime,
    line: TimecardLine,
}

impl AnnotatedTimecardLine {
    /// Annotates a line with a newly generated identifier.
    #[must_use]
    pub fn new(line: TimecardLine, recorded: OffsetDateTime) -> Self {
        Self {
            unique_identifier: LineId::generate(),
            recorded,
            line,
        }
    }

    /// Rebuilds a line whose identifier was assigned earlier.
    #[must_use]
    pub const fn with_id(
        unique_identifier: LineId,
        line: TimecardLine,
        recorded: OffsetDateTime,
    ) -> Self {
        Self {
            unique_identifier,
            recorded,
            line,
        }
    }

    #[must_use]
    pub const fn unique_identifier(&self) -> LineId {
        self.unique_identifier
    }

    #[must_use]
    pub const fn recorded(&self) -> OffsetDateTime {
        self.recorded
    }

    #[must_use]
    pub const fn line(&self) -> &TimecardLine {
        &self.line
    }

    #[must_use]
    pub const fn version(&self) -> &'static str {
        LINE_VERSION
    }

    /// Overwrites week, day, year, hours and project in place.
    pub(crate) fn update_from(&mut self, line: TimecardLine) {
        self.line = line;
    }
}
