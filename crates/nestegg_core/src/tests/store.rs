//! Tests for collection mutations, dispatch, and cascades

use crate::model::{AccountKind, MAX_ITERATIONS};
use crate::ops::{FlowUpdate, HoldingUpdate, ParamUpdate};
use crate::store::{FlowKind, ProfileStore};

fn store_with_one_of_each() -> ProfileStore {
    let mut store = ProfileStore::new();
    for kind in AccountKind::ALL {
        store.add_holding(kind);
    }
    store.add_flow(FlowKind::Incomes);
    store.add_flow(FlowKind::Expenses);
    store
}

#[test]
fn add_holding_touches_only_its_own_collection() {
    for kind in AccountKind::ALL {
        let mut store = store_with_one_of_each();
        let before = store.input().clone();

        store.add_holding(kind);

        let after = store.input();
        assert_eq!(after.holdings(kind).len(), before.holdings(kind).len() + 1);
        for other in AccountKind::ALL.into_iter().filter(|k| *k != kind) {
            assert_eq!(after.holdings(other), before.holdings(other));
        }
        assert_eq!(after.incomes, before.incomes);
        assert_eq!(after.expenses, before.expenses);
        assert_eq!(after.simulation_params, before.simulation_params);
    }
}

#[test]
fn update_holding_changes_exactly_one_field() {
    let mut store = store_with_one_of_each();
    store.add_holding(AccountKind::Growth);
    let before = store.input().clone();

    assert!(store.update_holding(AccountKind::Growth, 0, HoldingUpdate::Balance(50_000.0)));

    let after = store.input();
    let updated = &after.holdings(AccountKind::Growth)[0];
    assert_eq!(updated.balance, 50_000.0);

    // Everything else is byte-for-byte the previous state.
    let mut expected = before.clone();
    expected.growth_accounts[0].balance = 50_000.0;
    assert_eq!(after, &expected);
}

#[test]
fn update_holding_out_of_range_is_a_noop() {
    let mut store = store_with_one_of_each();
    let before = store.input().clone();

    assert!(!store.update_holding(AccountKind::Savings, 5, HoldingUpdate::Balance(1.0)));
    assert_eq!(store.input(), &before);
}

#[test]
fn real_estate_fields_are_rejected_for_other_kinds() {
    let mut store = store_with_one_of_each();
    let before = store.input().clone();

    assert!(!store.update_holding(AccountKind::Savings, 0, HoldingUpdate::CostBasis(100.0)));
    assert!(!store.update_holding(AccountKind::Growth, 0, HoldingUpdate::Liability(100.0)));
    assert!(!store.update_holding(AccountKind::IraRoth, 0, HoldingUpdate::Withdrawn(true)));
    assert_eq!(store.input(), &before);

    assert!(store.update_holding(AccountKind::RealEstate, 0, HoldingUpdate::CostBasis(250_000.0)));
    let property = store.input().holdings(AccountKind::RealEstate)[0]
        .property
        .expect("real estate keeps its property detail");
    assert_eq!(property.cost_basis, 250_000.0);
}

#[test]
fn remove_holding_shifts_later_entries_down() {
    let mut store = ProfileStore::new();
    for _ in 0..4 {
        store.add_holding(AccountKind::IraTrad);
    }
    let before = store.input().holdings(AccountKind::IraTrad).to_vec();

    assert!(store.remove_holding(AccountKind::IraTrad, 1));

    let after = store.input().holdings(AccountKind::IraTrad);
    assert_eq!(after.len(), 3);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], before[2]);
    assert_eq!(after[2], before[3]);
}

#[test]
fn remove_holding_out_of_range_is_a_noop() {
    let mut store = store_with_one_of_each();
    let before = store.input().clone();

    assert!(!store.remove_holding(AccountKind::Growth, 1));
    assert_eq!(store.input(), &before);
}

#[test]
fn removing_a_property_unlinks_its_flows() {
    let mut store = ProfileStore::new();
    let home = store.add_holding(AccountKind::RealEstate);
    store.add_flow(FlowKind::Incomes);
    store.add_flow(FlowKind::Expenses);
    assert!(store.update_flow(FlowKind::Incomes, 0, FlowUpdate::LinkedHolding(Some(home))));
    assert!(store.update_flow(FlowKind::Expenses, 0, FlowUpdate::LinkedHolding(Some(home))));

    assert!(store.remove_holding(AccountKind::RealEstate, 0));

    assert!(store.input().incomes[0].linked_holding.is_none());
    assert!(store.input().expenses[0].linked_holding.is_none());
}

#[test]
fn contributions_die_with_their_holding() {
    let mut store = ProfileStore::new();
    store.add_holding(AccountKind::Growth);
    assert!(store.add_contribution(AccountKind::Growth, 0));
    assert!(store.remove_holding(AccountKind::Growth, 0));
    assert!(store.input().holdings(AccountKind::Growth).is_empty());
}

#[test]
fn renaming_a_property_keeps_links_current() {
    let mut store = ProfileStore::new();
    let home = store.add_holding(AccountKind::RealEstate);
    store.add_flow(FlowKind::Incomes);
    assert!(store.update_flow(FlowKind::Incomes, 0, FlowUpdate::LinkedHolding(Some(home))));

    assert!(store.update_holding(
        AccountKind::RealEstate,
        0,
        HoldingUpdate::Name("Lake house".to_string())
    ));

    // The link survives the rename and resolves to the new name on the wire.
    assert_eq!(store.input().incomes[0].linked_holding, Some(home));
    let wire = crate::wire::WireInput::from_input(store.input());
    assert_eq!(wire.incomes[0].linked_real_estate, "Lake house");
}

#[test]
fn flow_links_must_point_at_real_estate() {
    let mut store = ProfileStore::new();
    let brokerage = store.add_holding(AccountKind::Growth);
    store.add_flow(FlowKind::Incomes);
    let before = store.input().clone();

    assert!(!store.update_flow(FlowKind::Incomes, 0, FlowUpdate::LinkedHolding(Some(brokerage))));
    assert_eq!(store.input(), &before);
}

#[test]
fn second_flow_survives_removing_the_first() {
    let mut store = ProfileStore::new();
    store.add_flow(FlowKind::Incomes);
    store.add_flow(FlowKind::Incomes);
    let second = store.input().incomes[1].clone();

    assert!(store.remove_flow(FlowKind::Incomes, 0));

    assert_eq!(store.input().incomes.len(), 1);
    assert_eq!(store.input().incomes[0], second);
}

#[test]
fn flow_updates_address_one_entry() {
    let mut store = ProfileStore::new();
    store.add_flow(FlowKind::Expenses);
    store.add_flow(FlowKind::Expenses);
    let untouched = store.input().expenses[0].clone();

    assert!(store.update_flow(FlowKind::Expenses, 1, FlowUpdate::Amount(-1_200.0)));
    assert!(store.update_flow(FlowKind::Expenses, 1, FlowUpdate::Active(false)));

    assert_eq!(store.input().expenses[0], untouched);
    assert_eq!(store.input().expenses[1].amount, -1_200.0);
    assert!(!store.input().expenses[1].active);
}

#[test]
fn flow_update_out_of_range_is_a_noop() {
    let mut store = ProfileStore::new();
    store.add_flow(FlowKind::Incomes);
    let before = store.input().clone();

    assert!(!store.update_flow(FlowKind::Incomes, 3, FlowUpdate::Amount(10.0)));
    assert!(!store.remove_flow(FlowKind::Incomes, 3));
    assert_eq!(store.input(), &before);
}

#[test]
fn contribution_entries_can_be_edited_and_removed() {
    let mut store = ProfileStore::new();
    store.add_holding(AccountKind::IraEsp);
    assert!(store.add_contribution(AccountKind::IraEsp, 0));
    assert!(store.add_contribution(AccountKind::IraEsp, 0));

    assert!(store.update_contribution(
        AccountKind::IraEsp,
        0,
        1,
        FlowUpdate::Amount(23_000.0)
    ));
    let holding = &store.input().holdings(AccountKind::IraEsp)[0];
    assert_eq!(holding.contributions.len(), 2);
    assert_eq!(holding.contributions[1].amount, 23_000.0);
    assert_eq!(holding.contributions[0].amount, 0.0);

    assert!(store.remove_contribution(AccountKind::IraEsp, 0, 0));
    let holding = &store.input().holdings(AccountKind::IraEsp)[0];
    assert_eq!(holding.contributions.len(), 1);
    assert_eq!(holding.contributions[0].amount, 23_000.0);
}

#[test]
fn contribution_ops_reject_missing_targets() {
    let mut store = ProfileStore::new();
    assert!(!store.add_contribution(AccountKind::Savings, 0));

    store.add_holding(AccountKind::Savings);
    assert!(!store.update_contribution(AccountKind::Savings, 0, 0, FlowUpdate::Amount(1.0)));
    assert!(!store.remove_contribution(AccountKind::Savings, 0, 0));
}

#[test]
fn set_param_replaces_one_scalar() {
    let mut store = ProfileStore::new();
    store.set_param(ParamUpdate::InflationRate(0.021));

    let params = store.input().simulation_params;
    assert_eq!(params.inflation_rate, 0.021);
    assert_eq!(params.current_age, 30);
    assert_eq!(params.retirement_age, 65);
}

#[test]
fn iteration_count_is_clamped() {
    let mut store = ProfileStore::new();
    store.set_param(ParamUpdate::Iterations(MAX_ITERATIONS + 1));
    assert_eq!(store.input().simulation_params.iterations, MAX_ITERATIONS);

    store.set_param(ParamUpdate::Iterations(2_500));
    assert_eq!(store.input().simulation_params.iterations, 2_500);
}

#[test]
fn cross_field_ordering_is_not_validated() {
    // The engine owns cross-field checks; the store keeps what it is given.
    let mut store = ProfileStore::new();
    store.set_param(ParamUpdate::CurrentAge(70));
    store.set_param(ParamUpdate::RetirementAge(60));

    assert_eq!(store.input().simulation_params.current_age, 70);
    assert_eq!(store.input().simulation_params.retirement_age, 60);
}
