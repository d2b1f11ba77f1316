use crate::render::{base10, base16};

/// Renders the decomposition of the input into its whole and fractional
/// parts, e.g. `(26.5)₁₀ = (26)₁₀ + (0.5)₁₀`.
#[must_use]
pub fn render_input_summary(value: f64, whole: u64, fraction: f64) -> String {
    format!("{} = {} + {}", base10(value), base10(whole), base10(fraction))
}

/// Renders the final result line, e.g. `(26.5)₁₀ = (1A.8)₁₆`.
///
/// The fractional half (and its separating point) is omitted when the
/// fractional digit string is empty.
#[must_use]
pub fn render_result(value: f64, whole_digits: &str, fraction_digits: &str) -> String {
    let hex = if fraction_digits.is_empty() {
        base16(whole_digits)
    } else {
        base16(format!("{whole_digits}.{fraction_digits}"))
    };

    format!("{} = {}", base10(value), hex)
}
