//! # hexplain
//!
//! hexplain demonstrates, step by step, how a non-negative decimal number is
//! converted into hexadecimal: repeated division by 16 for the whole part,
//! repeated multiplication by 16 for the fractional part. Every intermediate
//! quotient, remainder, and product is recorded and rendered, so a learner
//! sees the same work a manual conversion produces, not just the answer.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    convert::{fraction::convert_fraction, split::split_real, whole::convert_whole},
    error::ConvertResult,
    render::{
        division::render_division_trace,
        multiplication::render_multiplication_trace,
        summary::{render_input_summary, render_result},
    },
};

/// The conversion engine: splitting, repeated division, and repeated
/// multiplication, each step recorded as trace data.
///
/// # Responsibilities
/// - Validates inputs at each component's boundary.
/// - Produces ordered traces of division and multiplication steps.
/// - Assembles the hexadecimal digit strings from those steps.
pub mod convert;
/// Provides the unified error type for input validation.
///
/// Every rejection names the offending value and the violated constraint.
/// Validation failures propagate to the caller untouched; nothing is
/// silently corrected.
///
/// # Responsibilities
/// - Defines `ConvertError` and the `ConvertResult` alias.
/// - Attaches the rejected value to each variant for diagnostics.
pub mod error;
/// Practice utilities that sit beside the converter: binary-addition and
/// hex-digit drills driven by an explicitly passed, seedable random number
/// generator.
pub mod quiz;
/// Turns trace data into aligned, human-readable text.
///
/// Purely presentational: column widths are computed from the longest entry
/// of each trace, and the truncation note is appended when the fractional
/// conversion hit its digit bound.
pub mod render;
/// Numeric conversion helpers shared across the crate.
pub mod util;

/// Runs a full conversion and returns the formatted report.
///
/// The report contains, in order: the decomposition of the input into whole
/// and fractional parts, the division trace, the multiplication trace (with
/// a truncation note when `max_digits` cut it off), and the final summary
/// line. Sections are separated by blank lines; the multiplication section
/// is omitted entirely when the input has no fractional part.
///
/// # Errors
/// Returns a `ConvertError` if the value is negative, NaN, infinite, or has
/// a whole part too large to represent exactly. A failed conversion produces
/// no partial report.
///
/// # Example
/// ```
/// let report = hexplain::convert_report(26.5, 32).unwrap();
///
/// assert!(report.contains("1A.8"));
/// assert!(report.contains("R(10)"));
/// ```
pub fn convert_report(value: f64, max_digits: usize) -> ConvertResult<String> {
    let (whole, fraction) = split_real(value)?;

    let whole_conversion = convert_whole(whole);
    let fraction_conversion = convert_fraction(fraction, max_digits)?;

    let mut lines = vec![render_input_summary(value, whole, fraction), String::new()];
    lines.extend(render_division_trace(&whole_conversion.steps));

    if !fraction_conversion.steps.is_empty() || fraction_conversion.truncated {
        lines.push(String::new());
        lines.extend(render_multiplication_trace(&fraction_conversion));
    }

    lines.push(String::new());
    lines.push(render_result(value, &whole_conversion.digits, &fraction_conversion.digits));

    Ok(lines.join("\n"))
}
