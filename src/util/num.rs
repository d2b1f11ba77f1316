use crate::error::{ConvertError, ConvertResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// whole, and exactly representable.
///
/// # Errors
/// - `ConvertError::NotFinite`: The value is NaN or infinite.
/// - `ConvertError::Negative`: The value is below zero.
/// - `ConvertError::WholeTooLarge`: The value exceeds `MAX_SAFE_INT`.
/// - `ConvertError::NotWhole`: The value has a fractional part.
///
/// # Example
/// ```
/// use hexplain::util::num::f64_to_u64_exact;
///
/// assert_eq!(f64_to_u64_exact(26.0).unwrap(), 26);
/// assert!(f64_to_u64_exact(-1.0).is_err());
/// assert!(f64_to_u64_exact(26.5).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_exact(value: f64) -> ConvertResult<u64> {
    if !value.is_finite() {
        return Err(ConvertError::NotFinite { value });
    }
    if value < 0.0 {
        return Err(ConvertError::Negative { value });
    }
    if value > MAX_SAFE_INT as f64 {
        return Err(ConvertError::WholeTooLarge { value });
    }
    if value.fract() != 0.0 {
        return Err(ConvertError::NotWhole { value });
    }
    Ok(value as u64)
}

/// Returns the uppercase hexadecimal character for a digit value in `0..16`.
///
/// # Example
/// ```
/// use hexplain::util::num::hex_digit;
///
/// assert_eq!(hex_digit(10), 'A');
/// assert_eq!(hex_digit(15), 'F');
/// assert_eq!(hex_digit(7), '7');
/// ```
#[must_use]
pub fn hex_digit(value: u8) -> char {
    debug_assert!(value < 16, "digit value out of range: {value}");

    char::from_digit(u32::from(value) % 16, 16).map_or('0', |c| c.to_ascii_uppercase())
}
