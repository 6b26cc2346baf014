//! Number formatting for amounts, quantities and percentages.

/// Formats an amount with two decimals and `,` thousands separators.
///
/// `1234.5` becomes `1,234.50`; negative values keep a leading `-`.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 {
        out.push('-');
    }
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push('.');
    out.push_str(frac_part);
    out
}

/// An amount followed by the currency label, e.g. `1,234.50 USD`.
pub fn format_money(value: f64, currency: &str) -> String {
    if currency.is_empty() {
        format_amount(value)
    } else {
        format!("{} {}", format_amount(value), currency)
    }
}

/// Shortest decimal form, used for quantities and percentages (`2`, `2.5`).
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}
