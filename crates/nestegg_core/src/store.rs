//! The profile store and its mutation engine
//!
//! [`ProfileStore`] owns exactly one live [`SimulationInput`] plus the
//! submission bookkeeping around it. Every mutation is total: a bad position
//! or a field that does not exist on the addressed kind is a logged no-op,
//! never a panic, and the aggregate is fully consistent after each call.
//! Mutations take `&mut self`, so a partially applied update is never
//! observable.

use crate::model::{
    AccountHolding, AccountKind, FlowCategory, HoldingId, RangeFlow, SimulationInput,
    SimulationSummary,
};
use crate::ops::{FlowUpdate, HoldingUpdate, ParamUpdate};

/// Collection identity for the top-level cash-flow lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Incomes,
    Expenses,
}

impl FlowKind {
    pub const ALL: [FlowKind; 2] = [FlowKind::Incomes, FlowKind::Expenses];

    fn category(&self) -> FlowCategory {
        match self {
            FlowKind::Incomes => FlowCategory::Income,
            FlowKind::Expenses => FlowCategory::Expense,
        }
    }

    /// Key of this collection in the engine request.
    pub fn collection_key(&self) -> &'static str {
        match self {
            FlowKind::Incomes => "incomes",
            FlowKind::Expenses => "expenses",
        }
    }
}

/// Owns the live profile, the in-flight gate, and the last outcome.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    input: SimulationInput,
    submitting: bool,
    last_outcome: Option<Result<SimulationSummary, String>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing profile, e.g. one loaded from a document.
    pub fn with_input(input: SimulationInput) -> Self {
        Self {
            input,
            submitting: false,
            last_outcome: None,
        }
    }

    pub fn input(&self) -> &SimulationInput {
        &self.input
    }

    pub fn into_input(self) -> SimulationInput {
        self.input
    }

    // === Parameters ===

    pub fn set_param(&mut self, update: ParamUpdate) {
        update.apply(&mut self.input.simulation_params);
    }

    // === Holdings ===

    /// Append a freshly defaulted holding to the `kind` collection.
    pub fn add_holding(&mut self, kind: AccountKind) -> HoldingId {
        let id = self.input.next_holding_id();
        let position = self.input.holdings(kind).len();
        self.input
            .holdings_mut(kind)
            .push(AccountHolding::new(id, kind, position));
        id
    }

    /// Replace one field of the holding at `index`.
    ///
    /// Returns false (and changes nothing) for an out-of-range index or a
    /// real-estate-only field on another kind.
    pub fn update_holding(&mut self, kind: AccountKind, index: usize, update: HoldingUpdate) -> bool {
        let Some(holding) = self.input.holdings_mut(kind).get_mut(index) else {
            tracing::debug!(kind = kind.label(), index, "update for missing holding ignored");
            return false;
        };
        let applied = update.apply(holding);
        if !applied {
            tracing::debug!(
                kind = kind.label(),
                index,
                "real-estate field rejected for non-property holding"
            );
        }
        applied
    }

    /// Remove the holding at `index`; later entries shift down one position.
    ///
    /// The holding's scheduled contributions are destroyed with it, and any
    /// flow still tied to its id is unlinked.
    pub fn remove_holding(&mut self, kind: AccountKind, index: usize) -> bool {
        if index >= self.input.holdings(kind).len() {
            tracing::debug!(kind = kind.label(), index, "remove for missing holding ignored");
            return false;
        }
        let removed = self.input.holdings_mut(kind).remove(index);
        self.unlink_flows(removed.id, &removed.name);
        true
    }

    fn unlink_flows(&mut self, id: HoldingId, name: &str) {
        let mut orphaned = 0usize;
        let mut unlink = |flow: &mut RangeFlow| {
            if flow.linked_holding == Some(id) {
                flow.linked_holding = None;
                orphaned += 1;
            }
        };
        self.input.incomes.iter_mut().for_each(&mut unlink);
        self.input.expenses.iter_mut().for_each(&mut unlink);
        for kind in AccountKind::ALL {
            for holding in self.input.holdings_mut(kind) {
                holding.contributions.iter_mut().for_each(&mut unlink);
            }
        }
        if orphaned > 0 {
            tracing::warn!(holding = name, count = orphaned, "unlinked flows of removed holding");
        }
    }

    // === Top-level cash flows ===

    /// Append a freshly defaulted flow, spanning the current working years.
    pub fn add_flow(&mut self, flows: FlowKind) {
        let params = self.input.simulation_params;
        let list = self.flows_mut(flows);
        let flow = RangeFlow::new(flows.category(), list.len(), &params);
        list.push(flow);
    }

    /// Replace one field of the flow at `index`.
    ///
    /// Linking is validated here: the target must be an existing real-estate
    /// holding, otherwise the update is rejected.
    pub fn update_flow(&mut self, flows: FlowKind, index: usize, update: FlowUpdate) -> bool {
        if let FlowUpdate::LinkedHolding(Some(id)) = &update
            && !self.is_real_estate_holding(*id)
        {
            tracing::debug!(?id, "flow link to non-property holding rejected");
            return false;
        }
        let Some(flow) = self.flows_mut(flows).get_mut(index) else {
            tracing::debug!(list = flows.collection_key(), index, "update for missing flow ignored");
            return false;
        };
        update.apply(flow);
        true
    }

    /// Remove the flow at `index`; later entries shift down one position.
    pub fn remove_flow(&mut self, flows: FlowKind, index: usize) -> bool {
        let list = self.flows_mut(flows);
        if index >= list.len() {
            tracing::debug!(list = flows.collection_key(), index, "remove for missing flow ignored");
            return false;
        }
        list.remove(index);
        true
    }

    pub fn flows(&self, flows: FlowKind) -> &[RangeFlow] {
        match flows {
            FlowKind::Incomes => &self.input.incomes,
            FlowKind::Expenses => &self.input.expenses,
        }
    }

    fn flows_mut(&mut self, flows: FlowKind) -> &mut Vec<RangeFlow> {
        match flows {
            FlowKind::Incomes => &mut self.input.incomes,
            FlowKind::Expenses => &mut self.input.expenses,
        }
    }

    fn is_real_estate_holding(&self, id: HoldingId) -> bool {
        self.input
            .find_holding(id)
            .is_some_and(|holding| holding.kind.is_real_estate())
    }

    // === Scheduled contributions ===

    /// Append a defaulted contribution to the holding at `holding_index`.
    pub fn add_contribution(&mut self, kind: AccountKind, holding_index: usize) -> bool {
        let params = self.input.simulation_params;
        let Some(holding) = self.input.holdings_mut(kind).get_mut(holding_index) else {
            tracing::debug!(kind = kind.label(), holding_index, "contribution for missing holding ignored");
            return false;
        };
        let flow = RangeFlow::new(FlowCategory::Contribution, holding.contributions.len(), &params);
        holding.contributions.push(flow);
        true
    }

    /// Replace one field of a holding's contribution at `entry_index`.
    pub fn update_contribution(
        &mut self,
        kind: AccountKind,
        holding_index: usize,
        entry_index: usize,
        update: FlowUpdate,
    ) -> bool {
        if let FlowUpdate::LinkedHolding(Some(id)) = &update
            && !self.is_real_estate_holding(*id)
        {
            tracing::debug!(?id, "contribution link to non-property holding rejected");
            return false;
        }
        let Some(flow) = self
            .input
            .holdings_mut(kind)
            .get_mut(holding_index)
            .and_then(|holding| holding.contributions.get_mut(entry_index))
        else {
            tracing::debug!(
                kind = kind.label(),
                holding_index,
                entry_index,
                "update for missing contribution ignored"
            );
            return false;
        };
        update.apply(flow);
        true
    }

    /// Remove a holding's contribution at `entry_index`.
    pub fn remove_contribution(
        &mut self,
        kind: AccountKind,
        holding_index: usize,
        entry_index: usize,
    ) -> bool {
        let Some(holding) = self.input.holdings_mut(kind).get_mut(holding_index) else {
            return false;
        };
        if entry_index >= holding.contributions.len() {
            tracing::debug!(
                kind = kind.label(),
                holding_index,
                entry_index,
                "remove for missing contribution ignored"
            );
            return false;
        }
        holding.contributions.remove(entry_index);
        true
    }

    // === Submission bookkeeping ===

    /// Open the single-flight gate and take a by-value snapshot to submit.
    ///
    /// Returns `None` while a submission is outstanding; at most one payload
    /// can be in flight at a time. Opening the gate clears the previous
    /// outcome. Later edits apply to the live profile, never to the snapshot
    /// already handed out.
    pub fn begin_submission(&mut self) -> Option<SimulationInput> {
        if self.submitting {
            tracing::warn!("submission already in flight; request ignored");
            return None;
        }
        self.submitting = true;
        self.last_outcome = None;
        Some(self.input.clone())
    }

    /// Close the gate and record the outcome.
    ///
    /// Must be called on every path out of a submission, success or failure,
    /// so the store can never be left submitting forever.
    pub fn complete_submission(&mut self, outcome: Result<SimulationSummary, String>) {
        debug_assert!(self.submitting, "completion without a begun submission");
        self.submitting = false;
        match &outcome {
            Ok(summary) => {
                tracing::info!(percent_success = summary.percent_success, "projection run completed")
            }
            Err(message) => tracing::error!(error = %message, "projection run failed"),
        }
        self.last_outcome = Some(outcome);
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    /// The last successful summary, if the most recent submission succeeded.
    pub fn last_summary(&self) -> Option<&SimulationSummary> {
        match &self.last_outcome {
            Some(Ok(summary)) => Some(summary),
            _ => None,
        }
    }

    /// The last failure description, if the most recent submission failed.
    pub fn last_error(&self) -> Option<&str> {
        match &self.last_outcome {
            Some(Err(message)) => Some(message.as_str()),
            _ => None,
        }
    }
}
