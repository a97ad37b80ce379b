//! The aggregate profile
//!
//! [`SimulationInput`] owns every collection the engine consumes and is
//! always submitted as a whole. Empty collections are valid and mean "no
//! holdings of this kind".

use serde::{Deserialize, Serialize};

use super::flows::RangeFlow;
use super::holdings::{AccountHolding, AccountKind};
use super::ids::HoldingId;
use super::params::SimulationParameters;

/// Everything one projection run needs, owned by value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationInput {
    pub savings_accounts: Vec<AccountHolding>,
    pub growth_accounts: Vec<AccountHolding>,
    pub ira_trad_accounts: Vec<AccountHolding>,
    pub ira_esp_accounts: Vec<AccountHolding>,
    pub ira_roth_accounts: Vec<AccountHolding>,
    pub real_estate_holdings: Vec<AccountHolding>,
    pub incomes: Vec<RangeFlow>,
    pub expenses: Vec<RangeFlow>,
    pub simulation_params: SimulationParameters,
}

impl SimulationInput {
    /// The holding collection for `kind`.
    pub fn holdings(&self, kind: AccountKind) -> &[AccountHolding] {
        match kind {
            AccountKind::Savings => &self.savings_accounts,
            AccountKind::Growth => &self.growth_accounts,
            AccountKind::IraTrad => &self.ira_trad_accounts,
            AccountKind::IraEsp => &self.ira_esp_accounts,
            AccountKind::IraRoth => &self.ira_roth_accounts,
            AccountKind::RealEstate => &self.real_estate_holdings,
        }
    }

    pub(crate) fn holdings_mut(&mut self, kind: AccountKind) -> &mut Vec<AccountHolding> {
        match kind {
            AccountKind::Savings => &mut self.savings_accounts,
            AccountKind::Growth => &mut self.growth_accounts,
            AccountKind::IraTrad => &mut self.ira_trad_accounts,
            AccountKind::IraEsp => &mut self.ira_esp_accounts,
            AccountKind::IraRoth => &mut self.ira_roth_accounts,
            AccountKind::RealEstate => &mut self.real_estate_holdings,
        }
    }

    /// Look a holding up by its stable id, across all kinds.
    pub fn find_holding(&self, id: HoldingId) -> Option<&AccountHolding> {
        AccountKind::ALL
            .iter()
            .flat_map(|kind| self.holdings(*kind))
            .find(|holding| holding.id == id)
    }

    /// Total number of holdings across all kinds.
    pub fn holding_count(&self) -> usize {
        AccountKind::ALL
            .iter()
            .map(|kind| self.holdings(*kind).len())
            .sum()
    }

    /// Next free surrogate id.
    ///
    /// Ids of removed holdings may be reassigned; removal clears every link
    /// to the departing id first, so a reissued id cannot resurrect one.
    pub(crate) fn next_holding_id(&self) -> HoldingId {
        let highest = AccountKind::ALL
            .iter()
            .flat_map(|kind| self.holdings(*kind))
            .map(|holding| holding.id.0)
            .max();
        HoldingId(highest.map_or(1, |id| id + 1))
    }
}
