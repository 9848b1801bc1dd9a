// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod timecard;

#[cfg(test)]
mod tests;

use timecard_domain::{AnnotatedTimecardLine, DomainError, LineId};

// Re-export public types and functions
pub use apply::{ApplyResult, Effect, apply};
pub use command::Command;
pub use error::CoreError;
pub use timecard::{TIMECARD_VERSION, Timecard, TimecardRecord};

/// Looks up a line on a timecard by its identifier string.
///
/// This is a read-only lookup used when serving a single line document.
///
/// # Arguments
///
/// * `timecard` - The timecard to search
/// * `line_id` - The line identifier as received from a client
///
/// # Errors
///
/// Returns an error if:
/// - `line_id` is not a well-formed identifier
/// - No line on the timecard has that identifier
pub fn find_line<'a>(
    timecard: &'a Timecard,
    line_id: &str,
) -> Result<&'a AnnotatedTimecardLine, DomainError> {
    let parsed: LineId = line_id.parse()?;
    timecard
        .lines()
        .get(&parsed)
        .ok_or_else(|| DomainError::LineNotFound {
            line_id: parsed.to_string(),
        })
}
