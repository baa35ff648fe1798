//! Human-readable rendering of currency amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Abbreviation steps, largest first.
const MAGNITUDES: [(Decimal, &str); 3] = [
    (dec!(1000000000), "Mrd"),
    (dec!(1000000), "Mio"),
    (dec!(1000), "K"),
];

/// Abbreviates an amount by magnitude: `1500` → `"1.5 K"`, `2300000` → `"2.3 Mio"`,
/// `4560000000` → `"4.6 Mrd"`.
///
/// Thresholds are compared against the absolute value and the sign is kept,
/// so `-1500` → `"-1.5 K"`. Amounts below one thousand are printed as-is
/// without trailing zeros (`999`, `12.5`, `0`). Abbreviated forms always carry
/// one decimal place; ties round to the even digit, so `1250` → `"1.2 K"`.
pub fn format_magnitude(value: Decimal) -> String {
    let magnitude = value.abs();

    for (threshold, suffix) in MAGNITUDES {
        if magnitude >= threshold {
            let scaled = (value / threshold)
                .round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven);
            return format!("{scaled:.1} {suffix}");
        }
    }

    value.normalize().to_string()
}

/// Rounds to a whole number (ties to even) and groups digits in threes:
/// `1234567.8` → `"1,234,568"`.
pub fn format_thousands(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    let digits = rounded.abs().trunc().normalize().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Full amount with currency suffix, e.g. `"1,234,568 €"`.
pub fn format_currency(value: Decimal) -> String {
    format!("{} €", format_thousands(value))
}
