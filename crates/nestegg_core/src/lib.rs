//! Profile composition for a remote Monte Carlo retirement projection engine
//!
//! This crate owns the structured input state that the engine consumes:
//! - Six account categories (savings, growth, three IRA flavors, real estate)
//!   plus income/expense streams active over age ranges
//! - A profile store with typed add/update/remove commands dispatched by
//!   collection identity
//! - The wire contract for `POST /v1/simulation/run` and conversions between
//!   the domain model and the engine's JSON shapes
//! - Single-flight submission bookkeeping (the in-flight gate and the last
//!   outcome slot)
//!
//! The projection math itself runs in the external engine; results come back
//! as a [`model::SimulationSummary`] and are held read-only for display.

#![warn(clippy::all)]

pub mod error;
pub mod model;
pub mod ops;
pub mod store;
pub mod wire;

#[cfg(test)]
mod tests;

pub use store::{FlowKind, ProfileStore};
