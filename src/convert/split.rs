use crate::{
    error::{ConvertError, ConvertResult},
    util::num::f64_to_u64_exact,
};

/// Splits a non-negative real number into its whole and fractional parts.
///
/// The fractional part is always in `[0, 1)`, and the two parts sum back to
/// the input exactly (both are taken from the same floating-point value, so
/// no rounding is introduced).
///
/// # Errors
/// - `ConvertError::NotFinite`: The value is NaN or infinite.
/// - `ConvertError::Negative`: The value is below zero.
/// - `ConvertError::WholeTooLarge`: The whole part exceeds `2^53 - 1` and
///   cannot be represented exactly as an integer.
///
/// # Example
/// ```
/// use hexplain::convert::split::split_real;
///
/// assert_eq!(split_real(26.5).unwrap(), (26, 0.5));
/// assert_eq!(split_real(0.25).unwrap(), (0, 0.25));
/// assert!(split_real(-5.0).is_err());
/// ```
pub fn split_real(value: f64) -> ConvertResult<(u64, f64)> {
    if !value.is_finite() {
        return Err(ConvertError::NotFinite { value });
    }
    if value < 0.0 {
        return Err(ConvertError::Negative { value });
    }

    let whole = f64_to_u64_exact(value.trunc())?;

    Ok((whole, value.fract()))
}
