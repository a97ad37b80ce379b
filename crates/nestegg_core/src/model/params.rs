//! Scalar simulation knobs

use serde::{Deserialize, Serialize};

/// Upper bound on requested iterations, protecting the projection engine
/// from runaway requests.
pub const MAX_ITERATIONS: u32 = 100_000;

/// Per-run parameters sent alongside the account collections.
///
/// `current_age < retirement_age` is expected but not enforced; the engine
/// owns correctness checks across fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationParameters {
    pub current_age: u32,
    pub retirement_age: u32,
    /// Annual fractional rate.
    pub inflation_rate: f64,
    /// Applied where a holding does not carry its own rate.
    pub default_tax_rate: f64,
    /// Monte Carlo iteration count, clamped to [`MAX_ITERATIONS`] on mutation.
    pub iterations: u32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            current_age: 30,
            retirement_age: 65,
            inflation_rate: 0.03,
            default_tax_rate: 0.25,
            iterations: 1000,
        }
    }
}
