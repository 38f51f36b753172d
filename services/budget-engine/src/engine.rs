//! Budget engine — orchestrator
//!
//! Ties together input resolution, the fee cascade, and client-budget
//! reconciliation into the single entry point both display consumers
//! call. One invocation per tactic; no state survives between calls.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use types::budget::{BudgetChoice, BudgetData, TableBudgetCalculations};
use types::fee::ClientFee;

use crate::cascade::{evaluate_cascade, CascadeResult};
use crate::inputs;
use crate::reconcile::reconcile_client_budget;
use crate::rounding::round_money;

/// Budget engine configuration
#[derive(Debug, Clone)]
pub struct BudgetEngineConfig {
    /// Seed ratio for the client-mode media budget bootstrap
    pub client_seed_ratio: Decimal,
    /// Per-thousand multiplier for CPM-style unit types
    pub cpm_multiplier: Decimal,
}

impl Default for BudgetEngineConfig {
    fn default() -> Self {
        Self {
            client_seed_ratio: Decimal::from_str_exact("0.8").unwrap(),
            cpm_multiplier: Decimal::from(1_000),
        }
    }
}

/// Budget & fee calculation service
#[derive(Debug, Clone)]
pub struct BudgetEngine {
    config: BudgetEngineConfig,
}

impl BudgetEngine {
    /// Create a new engine with default configuration
    pub fn new() -> Self {
        Self {
            config: BudgetEngineConfig::default(),
        }
    }

    /// Create a new engine with custom configuration
    pub fn with_config(config: BudgetEngineConfig) -> Self {
        Self { config }
    }

    /// Compute every figure a consumer renders for one tactic.
    ///
    /// Never fails: malformed sub-inputs degrade to zero-valued outputs
    /// so one bad fee or row cannot abort a batch.
    pub fn calculate(
        &self,
        budget: &BudgetData,
        catalog: &[ClientFee],
    ) -> TableBudgetCalculations {
        let unit_volume = inputs::unit_volume(
            budget.budget_input,
            budget.unit_price,
            &budget.unit_type,
            budget.media_value,
            self.config.cpm_multiplier,
        );

        let (media_budget, client_budget, cascade) = match budget.budget_choice {
            BudgetChoice::Media => {
                let media_budget = inputs::provisional_media_budget(
                    BudgetChoice::Media,
                    budget.budget_input,
                    self.config.client_seed_ratio,
                );
                let cascade = evaluate_cascade(
                    media_budget,
                    unit_volume,
                    catalog,
                    &budget.fee_assignments,
                );
                let client_budget = media_budget + cascade.total_fees;
                (media_budget, client_budget, cascade)
            }
            BudgetChoice::Client => {
                let reconciled = reconcile_client_budget(
                    budget.budget_input,
                    unit_volume,
                    catalog,
                    &budget.fee_assignments,
                    self.config.client_seed_ratio,
                );
                (
                    reconciled.media_budget,
                    reconciled.client_budget,
                    reconciled.cascade,
                )
            }
        };

        let bonification = inputs::bonification(budget.media_value, media_budget);

        assemble(media_budget, client_budget, unit_volume, bonification, cascade)
    }
}

impl Default for BudgetEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble the output record with final monetary rounding.
///
/// `total_fees` is already the exact sum of rounded per-fee amounts and
/// is deliberately not re-rounded.
fn assemble(
    media_budget: Decimal,
    client_budget: Decimal,
    unit_volume: Decimal,
    bonification: Decimal,
    cascade: CascadeResult,
) -> TableBudgetCalculations {
    TableBudgetCalculations {
        media_budget: round_money(media_budget),
        client_budget: round_money(client_budget),
        total_fees: cascade.total_fees,
        unit_volume: unit_volume.to_u64().unwrap_or(0),
        bonification,
        fee_amounts: cascade.fee_amounts,
    }
}
