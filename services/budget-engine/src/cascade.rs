//! Fee cascade evaluation
//!
//! Applies the ordered fee list against a media budget baseline. Fees
//! run strictly in ascending `order`; a running cumulative base starts
//! at the media budget and grows by every positive fee amount, so a fee
//! in OnPreviousFees mode is computed on top of everything billed
//! before it. Every amount is rounded to 2 decimals before it is
//! accumulated, and the total is the plain sum of those rounded
//! amounts — never re-rounded.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::warn;
use types::fee::{CalculationMode, CalculationType, ClientFee, FeeAssignment, FeeOption};
use types::ids::FeeId;

use crate::rounding::round_money;

/// Output of one cascade pass
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeResult {
    /// Rounded amount per fee, keyed by fee id (zero for unconfigured fees)
    pub fee_amounts: BTreeMap<FeeId, Decimal>,
    /// Exact sum of the rounded per-fee amounts
    pub total_fees: Decimal,
}

impl CascadeResult {
    /// An empty result (no fees configured)
    pub fn empty() -> Self {
        Self {
            fee_amounts: BTreeMap::new(),
            total_fees: Decimal::ZERO,
        }
    }
}

/// Evaluate the fee cascade for one tactic.
///
/// The catalog is re-sorted by `order` here rather than trusting input
/// order; assignments are matched by fee id. A fee with no assignment,
/// a disabled assignment, or an unmatched option contributes exactly
/// zero and leaves the cumulative base untouched.
pub fn evaluate_cascade(
    media_budget: Decimal,
    unit_volume: Decimal,
    catalog: &[ClientFee],
    assignments: &[FeeAssignment],
) -> CascadeResult {
    let mut ordered: Vec<&ClientFee> = catalog.iter().collect();
    ordered.sort_by_key(|fee| fee.order);

    let mut fee_amounts = BTreeMap::new();
    let mut total_fees = Decimal::ZERO;
    let mut cumulative_base = media_budget;

    for fee in ordered {
        let amount = fee_amount(fee, assignments, media_budget, cumulative_base, unit_volume);

        fee_amounts.insert(fee.id.clone(), amount);
        total_fees += amount;
        if amount > Decimal::ZERO {
            cumulative_base += amount;
        }
    }

    CascadeResult {
        fee_amounts,
        total_fees,
    }
}

/// Compute one fee's rounded amount. Malformed sub-inputs degrade to zero.
fn fee_amount(
    fee: &ClientFee,
    assignments: &[FeeAssignment],
    media_budget: Decimal,
    cumulative_base: Decimal,
    unit_volume: Decimal,
) -> Decimal {
    let Some(assignment) = assignments.iter().find(|a| a.fee_id == fee.id) else {
        return Decimal::ZERO;
    };
    if !assignment.enabled {
        return Decimal::ZERO;
    }
    let Some(option_id) = &assignment.selected_option_id else {
        return Decimal::ZERO;
    };
    let Some(option) = fee.option(option_id) else {
        return Decimal::ZERO;
    };

    // Overrides are honored only on editable options
    let override_value = if option.editable {
        assignment.custom_override
    } else {
        None
    };

    let base_value = effective_base_value(fee.calculation_type, option, override_value);
    let final_value = base_value * (Decimal::ONE + option.buffer / Decimal::ONE_HUNDRED);

    let amount = match fee.calculation_type {
        CalculationType::PercentageBudget => {
            let base = match fee.calculation_mode {
                CalculationMode::DirectOnMediaBudget => media_budget,
                CalculationMode::OnPreviousFees => cumulative_base,
            };
            final_value * base
        }
        CalculationType::VolumeUnit => {
            let volume = match override_value {
                Some(v) if v > Decimal::ZERO => v,
                _ => unit_volume,
            };
            final_value * volume
        }
        CalculationType::Units => {
            let count = match override_value {
                Some(v) if v > Decimal::ZERO => v,
                _ => Decimal::ONE,
            };
            final_value * count
        }
        CalculationType::FixedFee => final_value,
        CalculationType::Unknown => {
            warn!(fee_id = %fee.id, "unrecognized calculation type, fee contributes zero");
            Decimal::ZERO
        }
    };

    round_money(amount)
}

/// Resolve the base value, reinterpreting an override per calculation type.
///
/// PercentageBudget overrides arrive as percentage numbers (12 → 0.12);
/// FixedFee overrides replace the amount when non-negative; VolumeUnit
/// and Units overrides do not touch the rate — they replace the
/// multiplier in the amount step instead.
fn effective_base_value(
    calculation_type: CalculationType,
    option: &FeeOption,
    override_value: Option<Decimal>,
) -> Decimal {
    match (calculation_type, override_value) {
        (CalculationType::PercentageBudget, Some(pct)) => pct / Decimal::ONE_HUNDRED,
        (CalculationType::FixedFee, Some(amount)) if amount >= Decimal::ZERO => amount,
        _ => option.value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::OptionId;

    fn make_fee(
        id: &str,
        order: u32,
        calculation_type: CalculationType,
        calculation_mode: CalculationMode,
        value: &str,
        buffer: &str,
        editable: bool,
    ) -> ClientFee {
        ClientFee {
            id: FeeId::new(id),
            name: id.to_string(),
            calculation_type,
            calculation_mode,
            order,
            options: vec![FeeOption {
                id: OptionId::new("default"),
                label: "Default".to_string(),
                value: Decimal::from_str_exact(value).unwrap(),
                buffer: Decimal::from_str_exact(buffer).unwrap(),
                editable,
            }],
        }
    }

    fn select(id: &str) -> FeeAssignment {
        FeeAssignment::selected(FeeId::new(id), OptionId::new("default"))
    }

    fn select_with_override(id: &str, override_value: &str) -> FeeAssignment {
        FeeAssignment {
            custom_override: Some(Decimal::from_str_exact(override_value).unwrap()),
            ..select(id)
        }
    }

    fn amount_of(result: &CascadeResult, id: &str) -> Decimal {
        result.fee_amounts[&FeeId::new(id)]
    }

    // ── basic amounts per calculation type ──

    #[test]
    fn test_percentage_direct_on_media_budget() {
        let catalog = vec![make_fee(
            "commission", 1,
            CalculationType::PercentageBudget,
            CalculationMode::DirectOnMediaBudget,
            "0.10", "0", false,
        )];
        let result = evaluate_cascade(
            Decimal::from(1_000),
            Decimal::ZERO,
            &catalog,
            &[select("commission")],
        );
        assert_eq!(amount_of(&result, "commission"), Decimal::from(100));
        assert_eq!(result.total_fees, Decimal::from(100));
    }

    #[test]
    fn test_volume_unit_fee() {
        let catalog = vec![make_fee(
            "adserving", 1,
            CalculationType::VolumeUnit,
            CalculationMode::DirectOnMediaBudget,
            "0.05", "0", false,
        )];
        // 0.05 per unit × 2000 units = 100
        let result = evaluate_cascade(
            Decimal::from(1_000),
            Decimal::from(2_000),
            &catalog,
            &[select("adserving")],
        );
        assert_eq!(amount_of(&result, "adserving"), Decimal::from(100));
    }

    #[test]
    fn test_units_fee_defaults_to_one() {
        let catalog = vec![make_fee(
            "setup", 1,
            CalculationType::Units,
            CalculationMode::DirectOnMediaBudget,
            "250", "0", false,
        )];
        let result = evaluate_cascade(
            Decimal::from(1_000),
            Decimal::ZERO,
            &catalog,
            &[select("setup")],
        );
        assert_eq!(amount_of(&result, "setup"), Decimal::from(250));
    }

    #[test]
    fn test_fixed_fee() {
        let catalog = vec![make_fee(
            "flat", 1,
            CalculationType::FixedFee,
            CalculationMode::DirectOnMediaBudget,
            "50", "0", false,
        )];
        let result = evaluate_cascade(
            Decimal::from(1_000),
            Decimal::ZERO,
            &catalog,
            &[select("flat")],
        );
        assert_eq!(amount_of(&result, "flat"), Decimal::from(50));
    }

    #[test]
    fn test_unknown_type_contributes_zero() {
        let catalog = vec![make_fee(
            "mystery", 1,
            CalculationType::Unknown,
            CalculationMode::DirectOnMediaBudget,
            "0.10", "0", false,
        )];
        let result = evaluate_cascade(
            Decimal::from(1_000),
            Decimal::ZERO,
            &catalog,
            &[select("mystery")],
        );
        assert_eq!(amount_of(&result, "mystery"), Decimal::ZERO);
        assert_eq!(result.total_fees, Decimal::ZERO);
    }

    // ── cumulative base mechanics ──

    #[test]
    fn test_on_previous_fees_sees_cumulative_base() {
        let catalog = vec![
            make_fee(
                "commission", 1,
                CalculationType::PercentageBudget,
                CalculationMode::DirectOnMediaBudget,
                "0.10", "0", false,
            ),
            make_fee(
                "markup", 2,
                CalculationType::PercentageBudget,
                CalculationMode::OnPreviousFees,
                "0.10", "0", false,
            ),
        ];
        let result = evaluate_cascade(
            Decimal::from(1_000),
            Decimal::ZERO,
            &catalog,
            &[select("commission"), select("markup")],
        );
        // commission: 1000 × 0.10 = 100; base grows to 1100
        // markup: 1100 × 0.10 = 110
        assert_eq!(amount_of(&result, "commission"), Decimal::from(100));
        assert_eq!(amount_of(&result, "markup"), Decimal::from(110));
        assert_eq!(result.total_fees, Decimal::from(210));
    }

    #[test]
    fn test_fixed_fee_grows_base_for_later_fees() {
        // Every positive amount feeds the base, regardless of mode
        let catalog = vec![
            make_fee(
                "flat", 1,
                CalculationType::FixedFee,
                CalculationMode::DirectOnMediaBudget,
                "200", "0", false,
            ),
            make_fee(
                "markup", 2,
                CalculationType::PercentageBudget,
                CalculationMode::OnPreviousFees,
                "0.10", "0", false,
            ),
        ];
        let result = evaluate_cascade(
            Decimal::from(1_000),
            Decimal::ZERO,
            &catalog,
            &[select("flat"), select("markup")],
        );
        // markup: (1000 + 200) × 0.10 = 120
        assert_eq!(amount_of(&result, "markup"), Decimal::from(120));
    }

    #[test]
    fn test_catalog_order_field_wins_over_slice_order() {
        let catalog = vec![
            make_fee(
                "markup", 2,
                CalculationType::PercentageBudget,
                CalculationMode::OnPreviousFees,
                "0.10", "0", false,
            ),
            make_fee(
                "flat", 1,
                CalculationType::FixedFee,
                CalculationMode::DirectOnMediaBudget,
                "200", "0", false,
            ),
        ];
        let result = evaluate_cascade(
            Decimal::from(1_000),
            Decimal::ZERO,
            &catalog,
            &[select("markup"), select("flat")],
        );
        // flat runs first despite slice position
        assert_eq!(amount_of(&result, "markup"), Decimal::from(120));
    }

    #[test]
    fn test_disabled_fee_leaves_base_untouched() {
        let catalog = vec![
            make_fee(
                "flat", 1,
                CalculationType::FixedFee,
                CalculationMode::DirectOnMediaBudget,
                "200", "0", false,
            ),
            make_fee(
                "markup", 2,
                CalculationType::PercentageBudget,
                CalculationMode::OnPreviousFees,
                "0.10", "0", false,
            ),
        ];
        let result = evaluate_cascade(
            Decimal::from(1_000),
            Decimal::ZERO,
            &catalog,
            &[
                FeeAssignment::disabled(FeeId::new("flat")),
                select("markup"),
            ],
        );
        assert_eq!(amount_of(&result, "flat"), Decimal::ZERO);
        // markup sees the untouched base of 1000
        assert_eq!(amount_of(&result, "markup"), Decimal::from(100));
    }

    #[test]
    fn test_missing_assignment_and_unmatched_option() {
        let mut catalog = vec![make_fee(
            "commission", 1,
            CalculationType::PercentageBudget,
            CalculationMode::DirectOnMediaBudget,
            "0.10", "0", false,
        )];
        catalog.push(make_fee(
            "orphan", 2,
            CalculationType::FixedFee,
            CalculationMode::DirectOnMediaBudget,
            "50", "0", false,
        ));

        let ghost_option = FeeAssignment {
            selected_option_id: Some(OptionId::new("ghost")),
            ..select("commission")
        };
        // "orphan" has no assignment at all
        let result = evaluate_cascade(
            Decimal::from(1_000),
            Decimal::ZERO,
            &catalog,
            &[ghost_option],
        );
        assert_eq!(amount_of(&result, "commission"), Decimal::ZERO);
        assert_eq!(amount_of(&result, "orphan"), Decimal::ZERO);
        assert_eq!(result.total_fees, Decimal::ZERO);
    }

    // ── buffers and overrides ──

    #[test]
    fn test_buffer_applies_before_amount() {
        let catalog = vec![make_fee(
            "commission", 1,
            CalculationType::PercentageBudget,
            CalculationMode::DirectOnMediaBudget,
            "0.10", "10", false,
        )];
        // 0.10 × 1.10 = 0.11 → 110 on a 1000 budget
        let result = evaluate_cascade(
            Decimal::from(1_000),
            Decimal::ZERO,
            &catalog,
            &[select("commission")],
        );
        assert_eq!(amount_of(&result, "commission"), Decimal::from(110));
    }

    #[test]
    fn test_percentage_override_is_a_percentage_number() {
        let catalog = vec![make_fee(
            "commission", 1,
            CalculationType::PercentageBudget,
            CalculationMode::DirectOnMediaBudget,
            "0.10", "0", true,
        )];
        // Override 12 means 12%, not ×12
        let result = evaluate_cascade(
            Decimal::from(1_000),
            Decimal::ZERO,
            &catalog,
            &[select_with_override("commission", "12")],
        );
        assert_eq!(amount_of(&result, "commission"), Decimal::from(120));
    }

    #[test]
    fn test_fixed_override_replaces_amount() {
        let catalog = vec![make_fee(
            "flat", 1,
            CalculationType::FixedFee,
            CalculationMode::DirectOnMediaBudget,
            "50", "0", true,
        )];
        let result = evaluate_cascade(
            Decimal::from(1_000),
            Decimal::ZERO,
            &catalog,
            &[select_with_override("flat", "75")],
        );
        assert_eq!(amount_of(&result, "flat"), Decimal::from(75));
    }

    #[test]
    fn test_fixed_override_negative_ignored() {
        let catalog = vec![make_fee(
            "flat", 1,
            CalculationType::FixedFee,
            CalculationMode::DirectOnMediaBudget,
            "50", "0", true,
        )];
        let result = evaluate_cascade(
            Decimal::from(1_000),
            Decimal::ZERO,
            &catalog,
            &[select_with_override("flat", "-75")],
        );
        assert_eq!(amount_of(&result, "flat"), Decimal::from(50));
    }

    #[test]
    fn test_volume_override_replaces_multiplier_not_rate() {
        let catalog = vec![make_fee(
            "adserving", 1,
            CalculationType::VolumeUnit,
            CalculationMode::DirectOnMediaBudget,
            "0.05", "0", true,
        )];
        // Override 500 is a volume: 0.05 × 500 = 25
        let result = evaluate_cascade(
            Decimal::from(1_000),
            Decimal::from(2_000),
            &catalog,
            &[select_with_override("adserving", "500")],
        );
        assert_eq!(amount_of(&result, "adserving"), Decimal::from(25));
    }

    #[test]
    fn test_units_override_replaces_count() {
        let catalog = vec![make_fee(
            "setup", 1,
            CalculationType::Units,
            CalculationMode::DirectOnMediaBudget,
            "250", "0", true,
        )];
        let result = evaluate_cascade(
            Decimal::from(1_000),
            Decimal::ZERO,
            &catalog,
            &[select_with_override("setup", "3")],
        );
        assert_eq!(amount_of(&result, "setup"), Decimal::from(750));
    }

    #[test]
    fn test_override_ignored_on_non_editable_option() {
        let catalog = vec![make_fee(
            "commission", 1,
            CalculationType::PercentageBudget,
            CalculationMode::DirectOnMediaBudget,
            "0.10", "0", false,
        )];
        let result = evaluate_cascade(
            Decimal::from(1_000),
            Decimal::ZERO,
            &catalog,
            &[select_with_override("commission", "12")],
        );
        assert_eq!(amount_of(&result, "commission"), Decimal::from(100));
    }

    // ── rounding ──

    #[test]
    fn test_amount_rounded_before_accumulation() {
        let catalog = vec![
            make_fee(
                "commission", 1,
                CalculationType::PercentageBudget,
                CalculationMode::DirectOnMediaBudget,
                "0.333333", "0", false,
            ),
            make_fee(
                "markup", 2,
                CalculationType::PercentageBudget,
                CalculationMode::OnPreviousFees,
                "0.10", "0", false,
            ),
        ];
        let result = evaluate_cascade(
            Decimal::from(100),
            Decimal::ZERO,
            &catalog,
            &[select("commission"), select("markup")],
        );
        // commission: 33.3333 → 33.33 rounded BEFORE feeding the base
        assert_eq!(
            amount_of(&result, "commission"),
            Decimal::from_str_exact("33.33").unwrap()
        );
        // markup: (100 + 33.33) × 0.10 = 13.333 → 13.33
        assert_eq!(
            amount_of(&result, "markup"),
            Decimal::from_str_exact("13.33").unwrap()
        );
        assert_eq!(
            result.total_fees,
            Decimal::from_str_exact("46.66").unwrap()
        );
    }

    #[test]
    fn test_total_is_sum_of_rounded_amounts() {
        let catalog = vec![
            make_fee(
                "a", 1,
                CalculationType::FixedFee,
                CalculationMode::DirectOnMediaBudget,
                "10.005", "0", false,
            ),
            make_fee(
                "b", 2,
                CalculationType::FixedFee,
                CalculationMode::DirectOnMediaBudget,
                "10.005", "0", false,
            ),
        ];
        let result = evaluate_cascade(
            Decimal::from(1_000),
            Decimal::ZERO,
            &catalog,
            &[select("a"), select("b")],
        );
        // Each rounds to 10.01 first; 20.02, not round(20.01)
        assert_eq!(
            result.total_fees,
            Decimal::from_str_exact("20.02").unwrap()
        );
    }

    #[test]
    fn test_empty_catalog() {
        let result = evaluate_cascade(Decimal::from(1_000), Decimal::ZERO, &[], &[]);
        assert!(result.fee_amounts.is_empty());
        assert_eq!(result.total_fees, Decimal::ZERO);
    }
}
