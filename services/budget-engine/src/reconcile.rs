//! Client-budget reconciliation
//!
//! In Client mode the typed amount is the all-in budget, but the fee
//! cascade needs a media budget to run against — a circular dependency
//! resolved with a fixed two-pass approximation:
//!
//! 1. Seed the media budget at `budget_input × seed_ratio`, run the
//!    cascade once.
//! 2. Correct: `media_budget = max(0, budget_input − total_fees₁)`.
//! 3. If the first pass billed anything, re-run the cascade on the
//!    corrected budget; its amounts are the ones reported.
//!
//! There is deliberately no third pass and no convergence loop, even
//! though DirectOnMediaBudget fees can leave `media_budget + total_fees`
//! short of the client budget. Both display consumers share this exact
//! arithmetic, which is what has to agree.

use rust_decimal::Decimal;
use types::budget::BudgetChoice;
use types::fee::{ClientFee, FeeAssignment};

use crate::cascade::{evaluate_cascade, CascadeResult};
use crate::inputs::provisional_media_budget;

/// A media/client budget pair with the cascade that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledBudget {
    pub media_budget: Decimal,
    pub client_budget: Decimal,
    pub cascade: CascadeResult,
}

/// Back out the media budget from an all-in client amount.
pub fn reconcile_client_budget(
    budget_input: Decimal,
    unit_volume: Decimal,
    catalog: &[ClientFee],
    assignments: &[FeeAssignment],
    seed_ratio: Decimal,
) -> ReconciledBudget {
    let seed = provisional_media_budget(BudgetChoice::Client, budget_input, seed_ratio);
    let first_pass = evaluate_cascade(seed, unit_volume, catalog, assignments);

    let media_budget = (budget_input - first_pass.total_fees).max(Decimal::ZERO);

    let cascade = if first_pass.total_fees > Decimal::ZERO {
        evaluate_cascade(media_budget, unit_volume, catalog, assignments)
    } else {
        first_pass
    };

    ReconciledBudget {
        media_budget,
        // The typed all-in amount is authoritative in this mode
        client_budget: budget_input,
        cascade,
    }
}
