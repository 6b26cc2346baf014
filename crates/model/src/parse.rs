/// Parses a numeric form field, mapping anything unusable to `0.0`.
///
/// Quantity, unit price and discount inputs are free text. Surrounding
/// whitespace is ignored. Text that is not a number, and numbers that are not
/// finite (`inf`, `NaN`), all yield `0.0` instead of an error. Range checks
/// (e.g. negative quantities) are left to the caller.
pub fn parse_lenient(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        Ok(value) => {
            log::debug!("Non-finite numeric input '{}' ({}) treated as 0", input, value);
            0.0
        }
        Err(_) => {
            if !input.trim().is_empty() {
                log::debug!("Malformed numeric input '{}' treated as 0", input);
            }
            0.0
        }
    }
}
