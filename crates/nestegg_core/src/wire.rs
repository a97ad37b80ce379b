//! Wire contract with the projection engine
//!
//! One endpoint, JSON over HTTP: `POST /v1/simulation/run` carrying a
//! [`SimulationRequest`]. The key names here ARE the protocol; they stay
//! fixed even where the domain model shapes the same data differently
//! (stable ids, property sub-struct, contributions owned by their holding).
//!
//! Conversions are lossless for profiles built through the store: rendering
//! to the wire form and rebuilding reproduces the same wire form.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::model::{
    AccountHolding, AccountKind, FlowCategory, HoldingId, PropertyDetail, RangeFlow,
    SimulationInput, SimulationParameters, SimulationSummary,
};

/// Path of the single engine endpoint.
pub const RUN_ENDPOINT: &str = "/v1/simulation/run";

/// Request body for a projection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub input: WireInput,
}

/// Response body from the engine.
///
/// `success: false` or a missing `data` object is a failed submission
/// regardless of HTTP status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SimulationSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The aggregate profile as the engine expects it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireInput {
    pub savings_accounts: Vec<WireHolding>,
    pub growth_accounts: Vec<WireHolding>,
    pub ira_trad_accounts: Vec<WireHolding>,
    pub ira_esp_accounts: Vec<WireHolding>,
    pub ira_roth_accounts: Vec<WireHolding>,
    pub real_estate_holdings: Vec<WireHolding>,
    pub incomes: Vec<WireFlow>,
    pub expenses: Vec<WireFlow>,
    pub savings_contributions: FxHashMap<String, Vec<WireFlow>>,
    pub growth_contributions: FxHashMap<String, Vec<WireFlow>>,
    pub ira_trad_contributions: FxHashMap<String, Vec<WireFlow>>,
    pub ira_esp_contributions: FxHashMap<String, Vec<WireFlow>>,
    pub ira_roth_contributions: FxHashMap<String, Vec<WireFlow>>,
    pub simulation_params: WireParams,
}

/// One account or property on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireHolding {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    pub balance: f64,
    pub returns: f64,
    pub std_dev: f64,
    pub tax_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_basis: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawn: Option<bool>,
    #[serde(default)]
    pub contributions: Vec<WireFlow>,
}

/// One cash flow on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireFlow {
    #[serde(rename = "type")]
    pub category: FlowCategory,
    pub name: String,
    pub start_age: u32,
    pub end_age: u32,
    pub amount: f64,
    pub activated: bool,
    /// Name of the linked real-estate holding, or empty.
    #[serde(default)]
    pub linked_real_estate: String,
}

/// Scalar knobs on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireParams {
    pub current_age: u32,
    pub retirement_age: u32,
    pub inflation_rate: f64,
    pub tax_rate: f64,
    pub number_of_simulations: u32,
}

impl Default for WireParams {
    fn default() -> Self {
        SimulationParameters::default().into()
    }
}

impl From<SimulationParameters> for WireParams {
    fn from(params: SimulationParameters) -> Self {
        Self {
            current_age: params.current_age,
            retirement_age: params.retirement_age,
            inflation_rate: params.inflation_rate,
            tax_rate: params.default_tax_rate,
            number_of_simulations: params.iterations,
        }
    }
}

impl From<WireParams> for SimulationParameters {
    fn from(params: WireParams) -> Self {
        Self {
            current_age: params.current_age,
            retirement_age: params.retirement_age,
            inflation_rate: params.inflation_rate,
            default_tax_rate: params.tax_rate,
            iterations: params.number_of_simulations,
        }
    }
}

impl WireInput {
    /// Render a profile into the engine's shape.
    ///
    /// Holding links resolve to the holding's current name, and every
    /// holding's scheduled contributions appear both inline and in its
    /// kind's name-keyed map, as the engine expects.
    pub fn from_input(input: &SimulationInput) -> Self {
        let holdings = |kind: AccountKind| -> Vec<WireHolding> {
            input
                .holdings(kind)
                .iter()
                .map(|holding| WireHolding::from_holding(holding, input))
                .collect()
        };
        let contributions = |kind: AccountKind| -> FxHashMap<String, Vec<WireFlow>> {
            input
                .holdings(kind)
                .iter()
                .filter(|holding| !holding.contributions.is_empty())
                .map(|holding| {
                    let flows = holding
                        .contributions
                        .iter()
                        .map(|flow| WireFlow::from_flow(flow, input))
                        .collect();
                    (holding.name.clone(), flows)
                })
                .collect()
        };
        Self {
            savings_accounts: holdings(AccountKind::Savings),
            growth_accounts: holdings(AccountKind::Growth),
            ira_trad_accounts: holdings(AccountKind::IraTrad),
            ira_esp_accounts: holdings(AccountKind::IraEsp),
            ira_roth_accounts: holdings(AccountKind::IraRoth),
            real_estate_holdings: holdings(AccountKind::RealEstate),
            incomes: input
                .incomes
                .iter()
                .map(|flow| WireFlow::from_flow(flow, input))
                .collect(),
            expenses: input
                .expenses
                .iter()
                .map(|flow| WireFlow::from_flow(flow, input))
                .collect(),
            savings_contributions: contributions(AccountKind::Savings),
            growth_contributions: contributions(AccountKind::Growth),
            ira_trad_contributions: contributions(AccountKind::IraTrad),
            ira_esp_contributions: contributions(AccountKind::IraEsp),
            ira_roth_contributions: contributions(AccountKind::IraRoth),
            simulation_params: input.simulation_params.into(),
        }
    }

    /// Rebuild a profile from the engine shape.
    ///
    /// Fresh stable ids are assigned; `linkedRealEstate` names resolve
    /// against the rebuilt real-estate collection, and a name with no match
    /// degrades to an unlinked flow. Contribution-map entries only fill
    /// holdings whose inline list arrived empty, so payloads produced by
    /// [`WireInput::from_input`] do not double up.
    pub fn into_input(self) -> SimulationInput {
        let mut input = SimulationInput {
            simulation_params: self.simulation_params.into(),
            ..SimulationInput::default()
        };

        // Holdings first; flows wait until every link target exists.
        let mut next_id = 1u32;
        let mut inline: Vec<(AccountKind, usize, Vec<WireFlow>)> = Vec::new();
        let collections = [
            (AccountKind::Savings, self.savings_accounts),
            (AccountKind::Growth, self.growth_accounts),
            (AccountKind::IraTrad, self.ira_trad_accounts),
            (AccountKind::IraEsp, self.ira_esp_accounts),
            (AccountKind::IraRoth, self.ira_roth_accounts),
            (AccountKind::RealEstate, self.real_estate_holdings),
        ];
        for (kind, wire_holdings) in collections {
            for (position, mut wire) in wire_holdings.into_iter().enumerate() {
                let flows = std::mem::take(&mut wire.contributions);
                if !flows.is_empty() {
                    inline.push((kind, position, flows));
                }
                let holding = wire.into_holding(kind, HoldingId(next_id));
                next_id += 1;
                input.holdings_mut(kind).push(holding);
            }
        }

        let property_ids: FxHashMap<String, HoldingId> = input
            .holdings(AccountKind::RealEstate)
            .iter()
            .map(|holding| (holding.name.clone(), holding.id))
            .collect();

        for (kind, position, flows) in inline {
            input.holdings_mut(kind)[position].contributions = flows
                .into_iter()
                .map(|flow| flow.into_flow(&property_ids))
                .collect();
        }

        input.incomes = self
            .incomes
            .into_iter()
            .map(|flow| flow.into_flow(&property_ids))
            .collect();
        input.expenses = self
            .expenses
            .into_iter()
            .map(|flow| flow.into_flow(&property_ids))
            .collect();

        let maps = [
            (AccountKind::Savings, self.savings_contributions),
            (AccountKind::Growth, self.growth_contributions),
            (AccountKind::IraTrad, self.ira_trad_contributions),
            (AccountKind::IraEsp, self.ira_esp_contributions),
            (AccountKind::IraRoth, self.ira_roth_contributions),
        ];
        for (kind, map) in maps {
            for (name, flows) in map {
                attach_mapped_contributions(&mut input, kind, &name, flows, &property_ids);
            }
        }

        input
    }
}

fn attach_mapped_contributions(
    input: &mut SimulationInput,
    kind: AccountKind,
    name: &str,
    flows: Vec<WireFlow>,
    property_ids: &FxHashMap<String, HoldingId>,
) {
    let Some(holding) = input
        .holdings_mut(kind)
        .iter_mut()
        .find(|holding| holding.name == name)
    else {
        tracing::warn!(kind = kind.label(), name, "contribution map entry has no holding; dropped");
        return;
    };
    if holding.contributions.is_empty() {
        holding.contributions = flows
            .into_iter()
            .map(|flow| flow.into_flow(property_ids))
            .collect();
    }
}

impl WireHolding {
    fn from_holding(holding: &AccountHolding, input: &SimulationInput) -> Self {
        let property = holding.property.as_ref();
        Self {
            name: holding.name.clone(),
            kind: holding.kind,
            balance: holding.balance,
            returns: holding.expected_return,
            std_dev: holding.return_std_dev,
            tax_rate: holding.tax_rate,
            cost_basis: property.map(|p| p.cost_basis),
            liability: property.map(|p| p.liability),
            withdrawn: property.map(|p| p.withdrawn),
            contributions: holding
                .contributions
                .iter()
                .map(|flow| WireFlow::from_flow(flow, input))
                .collect(),
        }
    }

    /// Build the domain holding; contributions are attached by the caller
    /// once link targets exist. The owning collection decides the kind.
    fn into_holding(self, kind: AccountKind, id: HoldingId) -> AccountHolding {
        let property = kind.is_real_estate().then(|| PropertyDetail {
            cost_basis: self.cost_basis.unwrap_or(0.0),
            liability: self.liability.unwrap_or(0.0),
            withdrawn: self.withdrawn.unwrap_or(false),
        });
        AccountHolding {
            id,
            name: self.name,
            kind,
            balance: self.balance,
            expected_return: self.returns,
            return_std_dev: self.std_dev,
            tax_rate: self.tax_rate,
            property,
            contributions: Vec::new(),
        }
    }
}

impl WireFlow {
    fn from_flow(flow: &RangeFlow, input: &SimulationInput) -> Self {
        let linked_real_estate = flow
            .linked_holding
            .and_then(|id| input.find_holding(id))
            .map(|holding| holding.name.clone())
            .unwrap_or_default();
        Self {
            category: flow.category,
            name: flow.name.clone(),
            start_age: flow.start_age,
            end_age: flow.end_age,
            amount: flow.amount,
            activated: flow.active,
            linked_real_estate,
        }
    }

    fn into_flow(self, property_ids: &FxHashMap<String, HoldingId>) -> RangeFlow {
        let linked_holding = if self.linked_real_estate.is_empty() {
            None
        } else {
            let resolved = property_ids.get(&self.linked_real_estate).copied();
            if resolved.is_none() {
                tracing::warn!(name = %self.linked_real_estate, "linked holding not found; flow unlinked");
            }
            resolved
        };
        RangeFlow {
            category: self.category,
            name: self.name,
            start_age: self.start_age,
            end_age: self.end_age,
            amount: self.amount,
            active: self.activated,
            linked_holding,
        }
    }
}
