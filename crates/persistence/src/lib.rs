// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the timecard service.
//!
//! Storage is an external collaborator of the timecard core. This crate
//! defines the contract (`TimecardStore`) and ships a process-local
//! implementation used by tests and the command-line driver.
//!
//! ## Optimistic concurrency
//!
//! - `insert` assigns `record_identity` and starts `record_version` at 1
//! - `save` fails with `VersionConflict` when the stored version differs
//!   from the one the caller loaded, and otherwise increments it
//! - The timecard core never interprets either value

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
#![allow(clippy::multiple_crate_versions)]

mod error;
mod memory;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use memory::InMemoryPersistence;
pub use store::TimecardStore;
