//! Integration tests for the profile store and wire contract
//!
//! Tests are organized by topic:
//! - `defaults` - value synthesis at creation time
//! - `store` - collection mutations, dispatch, and cascades
//! - `submission` - the single-flight gate and outcome bookkeeping
//! - `wire` - request shape, key names, and round-trips

mod store;

use crate::model::SimulationSummary;

/// Summary with just a success rate, as the engine minimally returns.
pub(crate) fn summary(percent_success: f64) -> SimulationSummary {
    serde_json::from_value(serde_json::json!({ "percentSuccess": percent_success }))
        .expect("minimal summary decodes")
}
