//! Budget input and calculation output types
//!
//! `BudgetData` is the pure input record a tactic supplies;
//! `TableBudgetCalculations` is the pure output record both the bulk
//! table and the detail editor render. Keeping them separate keeps the
//! engine stateless: outputs never feed back into inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::fee::FeeAssignment;
use crate::ids::FeeId;

/// Which amount the user typed: the media spend or the all-in amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetChoice {
    /// `budget_input` is the media budget; client budget is derived
    Media,
    /// `budget_input` is the client (all-in) budget; media budget is
    /// backed out through the fee cascade
    Client,
}

/// Budget inputs for one tactic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetData {
    pub budget_choice: BudgetChoice,
    /// The typed amount, interpreted per `budget_choice`
    pub budget_input: Decimal,
    /// Free-form unit label from the catalog ("CPM", "click", ...)
    pub unit_type: String,
    pub unit_price: Decimal,
    /// Stated market value of the media, when negotiated above spend
    pub media_value: Option<Decimal>,
    /// Per-fee state, keyed by fee id (order comes from the catalog)
    pub fee_assignments: Vec<FeeAssignment>,
}

impl BudgetData {
    /// Find the assignment for a given fee, if the tactic carries one
    pub fn assignment(&self, fee_id: &FeeId) -> Option<&FeeAssignment> {
        self.fee_assignments.iter().find(|a| &a.fee_id == fee_id)
    }
}

/// Computed figures for one tactic
///
/// Monetary fields are rounded to 2 decimals; `fee_amounts` iterates in
/// fee-id order so independent consumers serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableBudgetCalculations {
    pub media_budget: Decimal,
    pub client_budget: Decimal,
    pub total_fees: Decimal,
    pub unit_volume: u64,
    pub bonification: Decimal,
    pub fee_amounts: BTreeMap<FeeId, Decimal>,
}
