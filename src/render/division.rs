use crate::{
    convert::whole::DivisionStep,
    render::{base10, base16, column_width, DIGIT_ARROW},
};

/// Renders a division trace, one line per step.
///
/// Each line shows the dividend, divisor, quotient, decimal remainder, and
/// the extracted hexadecimal digit. The dividend and quotient columns are
/// padded to the widest entry across the whole trace so every line's
/// separators fall in the same column.
#[must_use]
pub fn render_division_trace(steps: &[DivisionStep]) -> Vec<String> {
    let dividends: Vec<String> = steps.iter().map(|step| base10(step.dividend)).collect();
    let quotients: Vec<String> = steps.iter().map(|step| base10(step.quotient)).collect();
    let remainders: Vec<String> = steps.iter()
                                       .map(|step| format!("R{}", base10(step.remainder)))
                                       .collect();

    let dividend_width = column_width(dividends.iter().map(String::as_str));
    let quotient_width = column_width(quotients.iter().map(String::as_str));
    let remainder_width = column_width(remainders.iter().map(String::as_str));

    steps.iter()
         .enumerate()
         .map(|(i, step)| {
             format!("{:>dividend_width$} : {} = {:<quotient_width$}{:<remainder_width$} {DIGIT_ARROW} {}",
                     dividends[i],
                     base10(step.divisor),
                     quotients[i],
                     remainders[i],
                     base16(step.digit))
         })
         .collect()
}
