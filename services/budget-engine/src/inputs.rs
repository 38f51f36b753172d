//! Budget input resolution
//!
//! Derives the provisional media budget, unit volume, and bonification
//! from a tactic's raw inputs. Pure functions; the fee cascade and the
//! client-budget reconciliation build on these.

use rust_decimal::Decimal;
use types::budget::BudgetChoice;

use crate::rounding::{round_money, round_volume};

/// Whether a unit type is priced per thousand (CPM-style).
///
/// The unit type is a free-form catalog string, so detection is a
/// case-insensitive substring match.
pub fn is_cpm_unit(unit_type: &str) -> bool {
    let lower = unit_type.to_lowercase();
    lower.contains("cpm") || lower.contains("impression")
}

/// Derive the delivered unit volume from budget and unit price.
///
/// `effective_budget = budget_input + max(0, media_value − budget_input)`
/// — added-value media beyond what was paid is folded in. CPM-style
/// units multiply by `cpm_multiplier` (priced per thousand).
///
/// Returns a non-negative integral Decimal; 0 when `unit_price ≤ 0`.
pub fn unit_volume(
    budget_input: Decimal,
    unit_price: Decimal,
    unit_type: &str,
    media_value: Option<Decimal>,
    cpm_multiplier: Decimal,
) -> Decimal {
    if unit_price <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let stated_value = media_value.unwrap_or(Decimal::ZERO);
    let added_value = (stated_value - budget_input).max(Decimal::ZERO);
    let effective_budget = budget_input + added_value;

    let raw = if is_cpm_unit(unit_type) {
        effective_budget / unit_price * cpm_multiplier
    } else {
        effective_budget / unit_price
    };

    round_volume(raw).max(Decimal::ZERO)
}

/// Media budget before reconciliation.
///
/// In Media mode the typed amount IS the media budget. In Client mode
/// it is seeded at `budget_input × seed_ratio` and refined by the
/// two-pass reconciliation.
pub fn provisional_media_budget(
    budget_choice: BudgetChoice,
    budget_input: Decimal,
    client_seed_ratio: Decimal,
) -> Decimal {
    match budget_choice {
        BudgetChoice::Media => budget_input,
        BudgetChoice::Client => budget_input * client_seed_ratio,
    }
}

/// Added-value media secured beyond the amount paid.
///
/// `bonification = max(0, media_value − reference_budget)`; zero when
/// no market value is stated or it is non-positive. The reference is
/// `budget_input` in Media mode and the reconciled media budget in
/// Client mode.
pub fn bonification(media_value: Option<Decimal>, reference_budget: Decimal) -> Decimal {
    match media_value {
        Some(stated) if stated > Decimal::ZERO => {
            round_money((stated - reference_budget).max(Decimal::ZERO))
        }
        _ => Decimal::ZERO,
    }
}
