//! Fee catalog types
//!
//! A client's fee configuration is an ordered list of `ClientFee`
//! entries; each tactic attaches a `FeeAssignment` per configured fee,
//! keyed by fee id. The catalog length is unbounded and evaluation
//! order comes from the `order` field alone.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{FeeId, OptionId};

/// How a fee's amount is computed from its base value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalculationType {
    /// Percentage of a budget base (media budget or cumulative base)
    PercentageBudget,
    /// Rate × delivered unit volume
    VolumeUnit,
    /// Rate × a unit count (defaults to 1)
    Units,
    /// Flat amount, base-independent
    FixedFee,
    /// Unrecognized wire value — evaluates to zero, never fails the catalog
    #[serde(other)]
    Unknown,
}

/// Which base a percentage fee is computed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalculationMode {
    /// Always the media budget, regardless of earlier fees
    DirectOnMediaBudget,
    /// The running cumulative base built up by earlier fees
    OnPreviousFees,
}

/// One selectable rate for a fee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeOption {
    pub id: OptionId,
    pub label: String,
    /// Base rate or amount, interpreted per the fee's calculation type
    pub value: Decimal,
    /// Percentage markup/markdown applied to `value` before use
    pub buffer: Decimal,
    /// Whether a per-tactic override of this option is allowed
    pub editable: bool,
}

/// A configured client fee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientFee {
    pub id: FeeId,
    pub name: String,
    pub calculation_type: CalculationType,
    pub calculation_mode: CalculationMode,
    /// Evaluation position — unique, ascending within a catalog
    pub order: u32,
    pub options: Vec<FeeOption>,
}

impl ClientFee {
    /// Look up an option by id
    pub fn option(&self, option_id: &OptionId) -> Option<&FeeOption> {
        self.options.iter().find(|o| &o.id == option_id)
    }
}

/// Per-tactic state for one configured fee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeAssignment {
    pub fee_id: FeeId,
    pub enabled: bool,
    pub selected_option_id: Option<OptionId>,
    /// Editable-option override, reinterpreted per calculation type:
    /// a percentage number for PercentageBudget, a replacement amount
    /// for FixedFee, a multiplier for VolumeUnit/Units
    pub custom_override: Option<Decimal>,
}

impl FeeAssignment {
    /// An enabled assignment with a selected option and no override
    pub fn selected(fee_id: FeeId, option_id: OptionId) -> Self {
        Self {
            fee_id,
            enabled: true,
            selected_option_id: Some(option_id),
            custom_override: None,
        }
    }

    /// A disabled assignment (contributes exactly zero)
    pub fn disabled(fee_id: FeeId) -> Self {
        Self {
            fee_id,
            enabled: false,
            selected_option_id: None,
            custom_override: None,
        }
    }
}
