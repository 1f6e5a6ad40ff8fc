use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal scale for rupee amounts (2 decimal places, paise precision)
pub const SCALE: u32 = 2;

/// Rounds a decimal value half-up at the currency scale.
///
/// Used at every presentation-rounding point (subtotal, tax components,
/// grand total). Intermediate ratios stay at full precision until they reach
/// one of these points.
pub fn round_half_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Truncates a decimal value toward zero at the currency scale.
///
/// Discounts use this instead of half-up so a rounded discount can never
/// exceed its exact value (10% of 299.97 is 29.997 and rounds to 29.99,
/// not 30.00).
pub fn truncate(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(SCALE, RoundingStrategy::ToZero)
}

/// Splits an already-rounded amount into two halves in whole paise.
///
/// When the amount holds an odd number of paise the extra paisa goes to the
/// first half, so the halves always sum back to the input exactly.
pub fn split_halves(amount: Decimal) -> (Decimal, Decimal) {
    let paise = amount * Decimal::ONE_HUNDRED;
    let second = (paise / Decimal::TWO).round_dp_with_strategy(0, RoundingStrategy::ToZero);
    let first = paise - second;
    let mut first = first / Decimal::ONE_HUNDRED;
    let mut second = second / Decimal::ONE_HUNDRED;
    first.rescale(SCALE);
    second.rescale(SCALE);
    (first, second)
}

/// Formats an amount for display with two decimal places
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}
