//! Typed mutation commands
//!
//! Every editable field has a dedicated command variant carrying its concrete
//! type, so an illegal field/value pairing cannot be constructed. The store
//! dispatches these against a collection and a position; application itself
//! lives here next to the command definitions.

use crate::error::ParamParseError;
use crate::model::{
    AccountHolding, HoldingId, MAX_ITERATIONS, RangeFlow, SimulationParameters,
};

/// One-field update to [`SimulationParameters`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamUpdate {
    CurrentAge(u32),
    RetirementAge(u32),
    InflationRate(f64),
    DefaultTaxRate(f64),
    Iterations(u32),
}

impl ParamUpdate {
    /// Parse a wire-named key and a raw value into a typed command.
    ///
    /// Accepts the engine's key spellings (`taxRate`, `numberOfSimulations`)
    /// as well as the domain names.
    pub fn parse(key: &str, raw: &str) -> Result<Self, ParamParseError> {
        match key {
            "currentAge" => Ok(Self::CurrentAge(parse_value("currentAge", raw)?)),
            "retirementAge" => Ok(Self::RetirementAge(parse_value("retirementAge", raw)?)),
            "inflationRate" => Ok(Self::InflationRate(parse_value("inflationRate", raw)?)),
            "taxRate" | "defaultTaxRate" => {
                Ok(Self::DefaultTaxRate(parse_value("defaultTaxRate", raw)?))
            }
            "iterations" | "numberOfSimulations" => {
                Ok(Self::Iterations(parse_value("iterations", raw)?))
            }
            other => Err(ParamParseError::UnknownKey(other.to_string())),
        }
    }

    pub(crate) fn apply(self, params: &mut SimulationParameters) {
        match self {
            ParamUpdate::CurrentAge(age) => params.current_age = age,
            ParamUpdate::RetirementAge(age) => params.retirement_age = age,
            ParamUpdate::InflationRate(rate) => params.inflation_rate = rate,
            ParamUpdate::DefaultTaxRate(rate) => params.default_tax_rate = rate,
            ParamUpdate::Iterations(count) => {
                if count > MAX_ITERATIONS {
                    tracing::warn!(requested = count, max = MAX_ITERATIONS, "iteration count clamped");
                }
                params.iterations = count.min(MAX_ITERATIONS);
            }
        }
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ParamParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParamParseError::EmptyValue { key });
    }
    trimmed.parse().map_err(|_| ParamParseError::InvalidValue {
        key,
        raw: raw.to_string(),
    })
}

/// One-field update to an [`AccountHolding`].
///
/// The last three variants exist only on real-estate holdings; the store
/// rejects them for every other kind.
#[derive(Debug, Clone, PartialEq)]
pub enum HoldingUpdate {
    Name(String),
    Balance(f64),
    ExpectedReturn(f64),
    ReturnStdDev(f64),
    TaxRate(f64),
    CostBasis(f64),
    Liability(f64),
    Withdrawn(bool),
}

impl HoldingUpdate {
    /// Apply to one holding. Returns false without touching the holding when
    /// the field does not exist on its kind.
    pub(crate) fn apply(self, holding: &mut AccountHolding) -> bool {
        match self {
            HoldingUpdate::Name(name) => holding.name = name,
            HoldingUpdate::Balance(balance) => holding.balance = balance,
            HoldingUpdate::ExpectedReturn(rate) => holding.expected_return = rate,
            HoldingUpdate::ReturnStdDev(rate) => holding.return_std_dev = rate,
            HoldingUpdate::TaxRate(rate) => holding.tax_rate = rate,
            HoldingUpdate::CostBasis(value) => {
                let Some(property) = holding.property.as_mut() else {
                    return false;
                };
                property.cost_basis = value;
            }
            HoldingUpdate::Liability(value) => {
                let Some(property) = holding.property.as_mut() else {
                    return false;
                };
                property.liability = value;
            }
            HoldingUpdate::Withdrawn(flag) => {
                let Some(property) = holding.property.as_mut() else {
                    return false;
                };
                property.withdrawn = flag;
            }
        }
        true
    }
}

/// One-field update to a [`RangeFlow`].
#[derive(Debug, Clone, PartialEq)]
pub enum FlowUpdate {
    Name(String),
    StartAge(u32),
    EndAge(u32),
    Amount(f64),
    Active(bool),
    /// Tie the flow to a real-estate holding, or clear the tie with `None`.
    LinkedHolding(Option<HoldingId>),
}

impl FlowUpdate {
    pub(crate) fn apply(self, flow: &mut RangeFlow) {
        match self {
            FlowUpdate::Name(name) => flow.name = name,
            FlowUpdate::StartAge(age) => flow.start_age = age,
            FlowUpdate::EndAge(age) => flow.end_age = age,
            FlowUpdate::Amount(amount) => flow.amount = amount,
            FlowUpdate::Active(flag) => flow.active = flag,
            FlowUpdate::LinkedHolding(link) => flow.linked_holding = link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_wire_and_domain_spellings() {
        assert_eq!(
            ParamUpdate::parse("numberOfSimulations", "5000"),
            Ok(ParamUpdate::Iterations(5000))
        );
        assert_eq!(
            ParamUpdate::parse("iterations", "5000"),
            Ok(ParamUpdate::Iterations(5000))
        );
        assert_eq!(
            ParamUpdate::parse("taxRate", "0.22"),
            Ok(ParamUpdate::DefaultTaxRate(0.22))
        );
    }

    #[test]
    fn parse_distinguishes_empty_from_zero() {
        assert_eq!(
            ParamUpdate::parse("inflationRate", "0"),
            Ok(ParamUpdate::InflationRate(0.0))
        );
        assert_eq!(
            ParamUpdate::parse("inflationRate", "  "),
            Err(crate::error::ParamParseError::EmptyValue {
                key: "inflationRate"
            })
        );
    }

    #[test]
    fn parse_rejects_garbage_and_unknown_keys() {
        assert!(matches!(
            ParamUpdate::parse("currentAge", "thirty"),
            Err(crate::error::ParamParseError::InvalidValue { key: "currentAge", .. })
        ));
        assert!(matches!(
            ParamUpdate::parse("numberOfYachts", "2"),
            Err(crate::error::ParamParseError::UnknownKey(_))
        ));
    }
}
