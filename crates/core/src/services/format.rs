//! Display formatting for money and percentages.
//!
//! Pure functions — the core computes the strings, the frontend only
//! renders them.

/// Format a value with thousands separators and exactly two decimals,
/// e.g. `1234567.891` → `"1,234,567.89"`.
#[must_use]
pub fn format_money(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((i, f)) => (i, f),
        None => (rounded.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && rounded != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Fixed-point percentage with two decimals, no separator or sign
/// normalization: `12.345` → `"12.35"`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}")
}

/// Gain/loss display: explicit `+`/`-` sign and a `$` prefix,
/// e.g. `-1234.5` → `"-$1,234.50"`.
#[must_use]
pub fn format_signed_money(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "-" };
    format!("{sign}${}", format_money(value.abs()))
}
