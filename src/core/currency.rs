use rust_decimal::{Decimal, RoundingStrategy};

/// Indian Rupee sign used on every amount shown to the user
pub const RUPEE_SYMBOL: &str = "₹";

/// Amounts are kept at full precision and only rounded for display
pub const DISPLAY_SCALE: u32 = 2;

/// Rounds an amount to the display scale, halves away from zero
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as a fixed 2-decimal string, e.g. `118.00`
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = round_for_display(amount);
    rounded.rescale(DISPLAY_SCALE);
    rounded.to_string()
}

/// Formats an amount as a rupee string, e.g. `₹ 118.00`
pub fn format_inr(amount: Decimal) -> String {
    format!("{} {}", RUPEE_SYMBOL, format_amount(amount))
}

/// Formats a rate as a percentage label, e.g. `18%` or `2.5%`
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", rate.normalize())
}
