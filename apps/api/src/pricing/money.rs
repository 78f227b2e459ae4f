//! Currency rounding helpers.
//!
//! Every figure shown to a customer is rounded to cents exactly once, and the
//! rounded value is what feeds any further arithmetic. Totals are therefore
//! built from the per-sticker price the customer sees, not the raw formula.
//!
//! Rounding works on the exact binary value of the amount, so 0.734999… (the
//! nearest double to 0.735) rounds to 0.73. Scaling by 100 first would round
//! it up to 0.74.

/// Rounds a rand amount to two decimal places.
///
/// Exact half-cent values round away from zero. Everything else rounds to the
/// nearest cent of the amount's exact value.
pub fn round_cents(amount: f64) -> f64 {
    // A double sits exactly on a half cent only when it is an odd number of eighths.
    let eighths = amount * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return (amount * 100.0).round() / 100.0;
    }
    // `{:.2}` formats from the exact value; ties were handled above.
    format!("{amount:.2}").parse().unwrap_or(amount)
}

/// Formats an already-rounded amount with exactly two decimals (e.g. `6.80`).
pub fn format_rands(amount: f64) -> String {
    format!("{amount:.2}")
}
