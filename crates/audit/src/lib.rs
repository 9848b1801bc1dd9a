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
    clippy::all
)]

//! Timecard status history.
//!
//! Transitions are the audit trail of a timecard: every status change is
//! recorded as an immutable, timestamped entry, and the current status is
//! always read back from this history rather than stored separately.

mod log;
mod transition;

#[cfg(test)]
mod tests;

pub use log::TransitionLog;
pub use transition::{Transition, TransitionEvent};
