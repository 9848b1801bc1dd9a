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

mod error;
mod identifiers;
mod line;
mod lines;
mod status;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use identifiers::{LineId, ResourceId, TimecardIdentity};
pub use line::{AnnotatedTimecardLine, LINE_VERSION, TimecardLine};
pub use lines::LineCollection;
pub use status::{TimecardAction, TimecardStatus};
pub use validation::{
    MAX_LINE_HOURS, parse_day, validate_hours, validate_project, validate_week, validate_year,
};
