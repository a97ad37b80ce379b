//! Projection results returned by the engine
//!
//! Produced externally and consumed read-only; the store keeps an immutable
//! copy of the last summary for display.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Aggregate outcome of one Monte Carlo projection run.
///
/// `percent_success` must be present; a payload without it fails to decode.
/// Series the engine omits decode as empty, and fields this client does not
/// model are retained verbatim in `extra` so they can be displayed without
/// reshaping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    /// Share of iterations that did not exhaust wealth, in [0, 100].
    pub percent_success: f64,
    /// Per-iteration wealth trajectories, `[iteration][year]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<Vec<f64>>,
    /// Mean wealth per projection year.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub average_results: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub percentile_10: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub percentile_25: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub percentile_50: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub percentile_75: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub percentile_90: Vec<f64>,
    #[serde(default)]
    pub average_final_balance: f64,
    /// Fields outside the modeled set, kept as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SimulationSummary {
    /// Number of projection years covered by the percentile series.
    pub fn projection_years(&self) -> usize {
        self.percentile_50
            .len()
            .max(self.average_results.len())
    }

    /// Coarse health bucket for the success rate.
    pub fn rating(&self) -> SuccessRating {
        if self.percent_success >= 80.0 {
            SuccessRating::Good
        } else if self.percent_success >= 60.0 {
            SuccessRating::Caution
        } else {
            SuccessRating::Poor
        }
    }
}

/// Display bucket for a success rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessRating {
    /// 80% or better
    Good,
    /// 60% to 80%
    Caution,
    /// Below 60%
    Poor,
}

impl SuccessRating {
    pub fn label(&self) -> &'static str {
        match self {
            SuccessRating::Good => "good outlook",
            SuccessRating::Caution => "needs attention",
            SuccessRating::Poor => "at risk",
        }
    }
}
