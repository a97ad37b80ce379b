//! Profile documents on disk
//!
//! A document is a YAML rendering of one [`SimulationInput`] and is one-shot
//! input to the driver; the store itself never persists an editing session.

use std::fs;
use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::{bail, eyre};
use nestegg_core::ProfileStore;
use nestegg_core::model::{AccountKind, SimulationInput};
use nestegg_core::ops::{FlowUpdate, HoldingUpdate, ParamUpdate};
use nestegg_core::store::FlowKind;

/// Load a profile document into a fresh store.
pub fn load(path: &Path) -> Result<ProfileStore> {
    let raw = fs::read_to_string(path)
        .map_err(|err| eyre!("reading profile {}: {err}", path.display()))?;
    let input: SimulationInput = serde_saphyr::from_str(&raw)
        .map_err(|err| eyre!("parsing profile {}: {err}", path.display()))?;
    tracing::info!(
        profile = %path.display(),
        holdings = input.holding_count(),
        "profile loaded"
    );
    Ok(ProfileStore::with_input(input))
}

/// Write a profile document, refusing to clobber an existing file unless
/// `force` is set.
pub fn save(path: &Path, input: &SimulationInput, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists; pass --force to overwrite", path.display());
    }
    let yaml = serde_saphyr::to_string(input)
        .map_err(|err| eyre!("serializing profile: {err}"))?;
    fs::write(path, yaml).map_err(|err| eyre!("writing {}: {err}", path.display()))?;
    tracing::info!(profile = %path.display(), "profile written");
    Ok(())
}

/// A starter profile with one holding of each common kind, a salary, and
/// living expenses, built entirely through the mutation API.
pub fn starter_profile() -> SimulationInput {
    let mut store = ProfileStore::new();

    store.set_param(ParamUpdate::CurrentAge(30));
    store.set_param(ParamUpdate::RetirementAge(65));
    store.set_param(ParamUpdate::InflationRate(0.03));
    store.set_param(ParamUpdate::DefaultTaxRate(0.25));
    store.set_param(ParamUpdate::Iterations(1_000));

    store.add_holding(AccountKind::Savings);
    store.update_holding(AccountKind::Savings, 0, HoldingUpdate::Name("Emergency fund".into()));
    store.update_holding(AccountKind::Savings, 0, HoldingUpdate::Balance(25_000.0));
    store.update_holding(AccountKind::Savings, 0, HoldingUpdate::ExpectedReturn(0.02));
    store.update_holding(AccountKind::Savings, 0, HoldingUpdate::ReturnStdDev(0.01));

    store.add_holding(AccountKind::Growth);
    store.update_holding(AccountKind::Growth, 0, HoldingUpdate::Name("Brokerage".into()));
    store.update_holding(AccountKind::Growth, 0, HoldingUpdate::Balance(120_000.0));
    store.update_holding(AccountKind::Growth, 0, HoldingUpdate::ExpectedReturn(0.07));
    store.update_holding(AccountKind::Growth, 0, HoldingUpdate::ReturnStdDev(0.18));
    store.update_holding(AccountKind::Growth, 0, HoldingUpdate::TaxRate(0.15));
    store.add_contribution(AccountKind::Growth, 0);
    store.update_contribution(AccountKind::Growth, 0, 0, FlowUpdate::Name("Monthly investing".into()));
    store.update_contribution(AccountKind::Growth, 0, 0, FlowUpdate::Amount(12_000.0));

    store.add_holding(AccountKind::IraTrad);
    store.update_holding(AccountKind::IraTrad, 0, HoldingUpdate::Name("Rollover IRA".into()));
    store.update_holding(AccountKind::IraTrad, 0, HoldingUpdate::Balance(85_000.0));
    store.update_holding(AccountKind::IraTrad, 0, HoldingUpdate::ExpectedReturn(0.06));
    store.update_holding(AccountKind::IraTrad, 0, HoldingUpdate::ReturnStdDev(0.15));
    store.update_holding(AccountKind::IraTrad, 0, HoldingUpdate::TaxRate(0.22));

    let home = store.add_holding(AccountKind::RealEstate);
    store.update_holding(AccountKind::RealEstate, 0, HoldingUpdate::Name("Home".into()));
    store.update_holding(AccountKind::RealEstate, 0, HoldingUpdate::Balance(450_000.0));
    store.update_holding(AccountKind::RealEstate, 0, HoldingUpdate::ExpectedReturn(0.03));
    store.update_holding(AccountKind::RealEstate, 0, HoldingUpdate::ReturnStdDev(0.05));
    store.update_holding(AccountKind::RealEstate, 0, HoldingUpdate::CostBasis(300_000.0));
    store.update_holding(AccountKind::RealEstate, 0, HoldingUpdate::Liability(210_000.0));

    store.add_flow(FlowKind::Incomes);
    store.update_flow(FlowKind::Incomes, 0, FlowUpdate::Name("Salary".into()));
    store.update_flow(FlowKind::Incomes, 0, FlowUpdate::Amount(95_000.0));

    store.add_flow(FlowKind::Expenses);
    store.update_flow(FlowKind::Expenses, 0, FlowUpdate::Name("Living expenses".into()));
    store.update_flow(FlowKind::Expenses, 0, FlowUpdate::Amount(60_000.0));
    store.update_flow(FlowKind::Expenses, 0, FlowUpdate::EndAge(95));

    store.add_flow(FlowKind::Expenses);
    store.update_flow(FlowKind::Expenses, 1, FlowUpdate::Name("Mortgage".into()));
    store.update_flow(FlowKind::Expenses, 1, FlowUpdate::Amount(28_000.0));
    store.update_flow(FlowKind::Expenses, 1, FlowUpdate::EndAge(55));
    store.update_flow(FlowKind::Expenses, 1, FlowUpdate::LinkedHolding(Some(home)));

    store.into_input()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_profile_is_fully_linked() {
        let input = starter_profile();
        assert_eq!(input.holding_count(), 4);

        let home = &input.holdings(AccountKind::RealEstate)[0];
        assert_eq!(home.name, "Home");
        assert_eq!(input.expenses[1].linked_holding, Some(home.id));
        assert_eq!(
            input.holdings(AccountKind::Growth)[0].contributions[0].amount,
            12_000.0
        );
    }

    #[test]
    fn documents_round_trip_through_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("plan.yaml");
        let input = starter_profile();

        save(&path, &input, false).expect("profile saves");
        let loaded = load(&path).expect("profile loads");
        assert_eq!(loaded.input(), &input);
    }

    #[test]
    fn save_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("plan.yaml");
        let input = starter_profile();

        save(&path, &input, false).expect("first save succeeds");
        assert!(save(&path, &input, false).is_err());
        save(&path, &input, true).expect("forced save succeeds");
    }
}
