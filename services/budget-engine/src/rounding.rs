//! Deterministic rounding helpers
//!
//! Both display consumers (bulk table, detail editor) must agree to the
//! cent, so every monetary value is rounded here and nowhere else.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a monetary amount to 2 decimal places (half-up).
pub(crate) fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a unit volume to a whole count (half-up).
pub(crate) fn round_volume(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
