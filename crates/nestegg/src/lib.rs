//! Command-line driver for the nestegg profile composer
//!
//! The heavy lifting lives in `nestegg_core`; this crate wires it to the
//! outside world: the engine HTTP client, profile documents on disk, logging,
//! and the report printed after a run.

#![warn(clippy::all)]

pub mod client;
pub mod logging;
pub mod profile;
pub mod report;
