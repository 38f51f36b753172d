//! Edit-to-recompute dependency resolution
//!
//! Maps an edited input field to the set of computed fields a caller
//! must refresh. There is no incremental state machine behind this:
//! a non-empty set means "re-run the full engine for this tactic", the
//! set just tells the consumer which cells to repaint.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An editable input field on the tactic form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditedField {
    BudgetChoice,
    BudgetInput,
    UnitPrice,
    UnitType,
    MediaValue,
    /// A fee assignment's enabled toggle
    FeeEnabled,
    /// A fee assignment's selected option
    FeeSelectedOption,
    /// A fee assignment's custom override
    FeeOverride,
    /// Any tactic field outside the budget section
    Unrelated,
}

/// A computed output field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComputedField {
    UnitVolume,
    MediaBudget,
    ClientBudget,
    Bonification,
    TotalFees,
    /// Every per-fee amount, collectively
    FeeAmounts,
}

/// Computed fields invalidated by an edit to `changed`.
///
/// Root budget inputs invalidate everything. Fee assignment edits are
/// handled conservatively: the resolver does not know which fees sit
/// downstream of the edited one in evaluation order, so every fee
/// amount is invalidated rather than only later ones.
pub fn downstream_fields(changed: EditedField) -> BTreeSet<ComputedField> {
    match changed {
        EditedField::BudgetChoice
        | EditedField::BudgetInput
        | EditedField::UnitPrice
        | EditedField::UnitType
        | EditedField::MediaValue => BTreeSet::from([
            ComputedField::UnitVolume,
            ComputedField::MediaBudget,
            ComputedField::ClientBudget,
            ComputedField::Bonification,
            ComputedField::TotalFees,
            ComputedField::FeeAmounts,
        ]),
        EditedField::FeeEnabled
        | EditedField::FeeSelectedOption
        | EditedField::FeeOverride => BTreeSet::from([
            ComputedField::MediaBudget,
            ComputedField::ClientBudget,
            ComputedField::TotalFees,
            ComputedField::FeeAmounts,
        ]),
        EditedField::Unrelated => BTreeSet::new(),
    }
}
