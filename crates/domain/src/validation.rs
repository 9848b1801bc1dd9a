// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::Weekday;

/// Maximum hours that can be booked on a single line.
pub const MAX_LINE_HOURS: f32 = 24.0;

/// Validates that a week is a possible ISO week number.
///
/// Whether week 53 exists in a particular year is checked when the work
/// date is resolved.
///
/// # Errors
///
/// Returns `DomainError::InvalidWeek` if the week is outside 1..=53.
pub fn validate_week(week: u8) -> Result<(), DomainError> {
    if !(1..=53).contains(&week) {
        return Err(DomainError::InvalidWeek(week));
    }
    Ok(())
}

/// Validates that a year is a reasonable calendar year.
///
/// # Errors
///
/// Returns `DomainError::InvalidYear` if the year is outside 2000..=2200.
pub fn validate_year(year: i32) -> Result<(), DomainError> {
    if !(2000..=2200).contains(&year) {
        return Err(DomainError::InvalidYear(year));
    }
    Ok(())
}

/// Validates the hours booked on a line.
///
/// # Errors
///
/// Returns `DomainError::InvalidHours` if the value is not finite, not
/// positive, or larger than a day.
pub fn validate_hours(hours: f32) -> Result<(), DomainError> {
    if !hours.is_finite() {
        return Err(DomainError::InvalidHours(String::from(
            "Hours must be a finite number",
        )));
    }

    if hours <= 0.0 || hours > MAX_LINE_HOURS {
        return Err(DomainError::InvalidHours(format!(
            "Hours must be greater than 0 and at most {MAX_LINE_HOURS}, got {hours}"
        )));
    }

    Ok(())
}

/// Validates a project code.
///
/// # Errors
///
/// Returns `DomainError::InvalidProject` if the project is blank.
pub fn validate_project(project: &str) -> Result<(), DomainError> {
    if project.trim().is_empty() {
        return Err(DomainError::InvalidProject(String::from(
            "Project cannot be empty",
        )));
    }
    Ok(())
}

/// Parses a day name such as `"monday"` or `"Mon"`.
///
/// Matching is case-insensitive and accepts full names and three letter
/// abbreviations.
///
/// # Errors
///
/// Returns `DomainError::InvalidDay` for anything else.
pub fn parse_day(value: &str) -> Result<Weekday, DomainError> {
    let normalized: String = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "monday" | "mon" => Ok(Weekday::Monday),
        "tuesday" | "tue" => Ok(Weekday::Tuesday),
        "wednesday" | "wed" => Ok(Weekday::Wednesday),
        "thursday" | "thu" => Ok(Weekday::Thursday),
        "friday" | "fri" => Ok(Weekday::Friday),
        "saturday" | "sat" => Ok(Weekday::Saturday),
        "sunday" | "sun" => Ok(Weekday::Sunday),
        _ => Err(DomainError::InvalidDay(value.to_string())),
    }
}
