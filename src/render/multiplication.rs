use crate::{
    convert::fraction::FractionConversion,
    render::{base10, base16, column_width, DIGIT_ARROW},
};

/// Renders a multiplication trace, one line per step.
///
/// Each line shows the multiplier, multiplicand, product, and the extracted
/// hexadecimal digit, with the multiplier and product columns padded to the
/// widest entry across the trace. A truncated conversion gets a trailing
/// note naming the digit count, so a cut-off expansion is never presented as
/// an exact result.
#[must_use]
pub fn render_multiplication_trace(conversion: &FractionConversion) -> Vec<String> {
    let multipliers: Vec<String> = conversion.steps
                                             .iter()
                                             .map(|step| base10(step.multiplier))
                                             .collect();
    let products: Vec<String> = conversion.steps
                                          .iter()
                                          .map(|step| base10(step.product))
                                          .collect();

    let multiplier_width = column_width(multipliers.iter().map(String::as_str));
    let product_width = column_width(products.iter().map(String::as_str));

    let mut lines: Vec<String> =
        conversion.steps
                  .iter()
                  .enumerate()
                  .map(|(i, step)| {
                      format!("{:>multiplier_width$} \u{00B7} {} = {:<product_width$} {DIGIT_ARROW} {}",
                              multipliers[i],
                              base10(step.multiplicand),
                              products[i],
                              base16(step.digit))
                  })
                  .collect();

    if conversion.truncated {
        lines.push(format!("(cut off after {} digits; the result is a truncated approximation)",
                           conversion.steps.len()));
    }

    lines
}
