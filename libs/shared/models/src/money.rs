use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for every monetary aggregate.
pub const MONEY_SCALE: u32 = 2;

/// Banker's rounding to [`MONEY_SCALE`] places.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// `percent` of `amount`, unrounded.
pub fn percent_of(amount: Decimal, percent: u32) -> Decimal {
    amount * Decimal::from(percent) / Decimal::ONE_HUNDRED
}
