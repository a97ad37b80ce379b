//! Range-based cash flows

use serde::{Deserialize, Serialize};

use super::ids::HoldingId;
use super::params::SimulationParameters;

/// What a [`RangeFlow`] represents to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowCategory {
    Income,
    Expense,
    /// Scheduled deposit into a specific holding.
    Contribution,
}

impl FlowCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FlowCategory::Income => "income",
            FlowCategory::Expense => "expense",
            FlowCategory::Contribution => "contribution",
        }
    }
}

/// A named cash amount active over an inclusive age interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeFlow {
    pub category: FlowCategory,
    pub name: String,
    pub start_age: u32,
    /// Inclusive; `start_age <= end_age` is expected but not enforced here.
    pub end_age: u32,
    /// Annual amount, signed by category convention.
    pub amount: f64,
    /// Inactive flows stay in the profile but are skipped by the engine.
    pub active: bool,
    /// Real-estate holding this flow is tied to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_holding: Option<HoldingId>,
}

impl RangeFlow {
    /// A freshly defaulted flow spanning the years from the current age to
    /// retirement, named for its position in the owning collection.
    pub fn new(category: FlowCategory, position: usize, params: &SimulationParameters) -> Self {
        Self {
            category,
            name: format!("New {} {}", category.label(), position + 1),
            start_age: params.current_age,
            end_age: params.retirement_age,
            amount: 0.0,
            active: true,
            linked_holding: None,
        }
    }
}
