mod flows;
mod holdings;
mod ids;
mod input;
mod params;
mod results;

pub use flows::{FlowCategory, RangeFlow};
pub use holdings::{
    AccountHolding, AccountKind, DEFAULT_EXPECTED_RETURN, DEFAULT_RETURN_STD_DEV, PropertyDetail,
};
pub use ids::HoldingId;
pub use input::SimulationInput;
pub use params::{MAX_ITERATIONS, SimulationParameters};
pub use results::{SimulationSummary, SuccessRating};
