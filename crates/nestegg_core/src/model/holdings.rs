//! Account holdings and their categories
//!
//! A holding is one financial account or property: a balance, a return
//! profile, and (for real estate) the property-specific facts. Scheduled
//! future deposits live on the holding itself so they are created, renamed,
//! and destroyed together with it.

use serde::{Deserialize, Serialize};

use super::flows::RangeFlow;
use super::ids::HoldingId;

/// Expected annual return assigned to a freshly created holding.
pub const DEFAULT_EXPECTED_RETURN: f64 = 0.05;

/// Return standard deviation assigned to a freshly created holding.
pub const DEFAULT_RETURN_STD_DEV: f64 = 0.10;

/// The six account categories a profile can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountKind {
    /// Cash-like, no tax on withdrawal
    Savings,
    /// Taxable brokerage investments
    Growth,
    /// Traditional IRA, taxed on withdrawal
    IraTrad,
    /// Employer-sponsored plan, taxed on withdrawal
    IraEsp,
    /// Roth IRA, tax-free withdrawal
    IraRoth,
    /// Property with cost basis and outstanding liability
    RealEstate,
}

impl AccountKind {
    pub const ALL: [AccountKind; 6] = [
        AccountKind::Savings,
        AccountKind::Growth,
        AccountKind::IraTrad,
        AccountKind::IraEsp,
        AccountKind::IraRoth,
        AccountKind::RealEstate,
    ];

    /// Human label used in synthesized names and reports.
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Savings => "savings",
            AccountKind::Growth => "growth",
            AccountKind::IraTrad => "IRA traditional",
            AccountKind::IraEsp => "IRA ESP",
            AccountKind::IraRoth => "IRA Roth",
            AccountKind::RealEstate => "real estate",
        }
    }

    /// Key of this kind's holding collection in the engine request.
    pub fn collection_key(&self) -> &'static str {
        match self {
            AccountKind::Savings => "savingsAccounts",
            AccountKind::Growth => "growthAccounts",
            AccountKind::IraTrad => "iraTradAccounts",
            AccountKind::IraEsp => "iraEspAccounts",
            AccountKind::IraRoth => "iraRothAccounts",
            AccountKind::RealEstate => "realEstateHoldings",
        }
    }

    /// Key of this kind's scheduled-contribution map in the engine request.
    ///
    /// Real estate takes no scheduled deposits; its flows are modeled as
    /// linked incomes/expenses instead.
    pub fn contributions_key(&self) -> Option<&'static str> {
        match self {
            AccountKind::Savings => Some("savingsContributions"),
            AccountKind::Growth => Some("growthContributions"),
            AccountKind::IraTrad => Some("iraTradContributions"),
            AccountKind::IraEsp => Some("iraEspContributions"),
            AccountKind::IraRoth => Some("iraRothContributions"),
            AccountKind::RealEstate => None,
        }
    }

    pub fn is_real_estate(&self) -> bool {
        matches!(self, AccountKind::RealEstate)
    }
}

/// Facts that only exist for real-estate holdings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetail {
    pub cost_basis: f64,
    /// Outstanding debt against the property.
    pub liability: f64,
    /// Whether the property has been liquidated and left the projection.
    pub withdrawn: bool,
}

/// One financial account or property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHolding {
    pub id: HoldingId,
    /// Display name; user-editable and not required to be unique.
    pub name: String,
    pub kind: AccountKind,
    pub balance: f64,
    /// Annualized fractional rate.
    pub expected_return: f64,
    pub return_std_dev: f64,
    /// Rate in [0, 1]; the engine ignores it for savings and Roth holdings
    /// but the value is stored as given.
    pub tax_rate: f64,
    /// Present iff `kind` is [`AccountKind::RealEstate`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<PropertyDetail>,
    /// Scheduled future deposits into this holding.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contributions: Vec<RangeFlow>,
}

impl AccountHolding {
    /// A freshly defaulted holding, named for its position in the owning
    /// collection.
    pub fn new(id: HoldingId, kind: AccountKind, position: usize) -> Self {
        Self {
            id,
            name: format!("New {} {}", kind.label(), position + 1),
            kind,
            balance: 0.0,
            expected_return: DEFAULT_EXPECTED_RETURN,
            return_std_dev: DEFAULT_RETURN_STD_DEV,
            tax_rate: 0.0,
            property: kind.is_real_estate().then(PropertyDetail::default),
            contributions: Vec::new(),
        }
    }
}
