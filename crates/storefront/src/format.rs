//! Price display formatting.
//!
//! Presentation only - the stores expose exact `Decimal` values. Amounts
//! are floored to whole currency units (never rounded up) and grouped in
//! thousands with spaces: `1234567.89` renders as `1 234 567`.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Format `amount` as whole currency units with space-separated thousands.
///
/// Negative amounts keep their sign; the fractional part is floored away.
#[must_use]
pub fn format_sum(amount: Decimal) -> String {
    let whole = amount.floor().to_i128().unwrap_or(0);
    group_thousands(whole)
}

fn group_thousands(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
