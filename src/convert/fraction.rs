use crate::{
    convert::RADIX,
    error::{ConvertError, ConvertResult},
    util::num::hex_digit,
};

/// Default bound on the number of fractional digits produced.
///
/// Every `f64` fraction is a binary fraction, so the expansion does end
/// eventually, but values with extreme exponents can take hundreds of steps
/// to get there. 32 digits covers the full 13-14 digit expansion of everyday
/// inputs while keeping the trace readable.
pub const DEFAULT_MAX_DIGITS: usize = 32;

/// One recorded step of the repeated-multiplication method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplicationStep {
    /// The fractional value multiplied in this step.
    pub multiplier:   f64,
    /// The radix, always 16.
    pub multiplicand: u64,
    /// `multiplier * 16`.
    pub product:      f64,
    /// The whole part of `product`, in `0..16`; the extracted digit value.
    pub digit_value:  u8,
    /// The hexadecimal character for `digit_value`.
    pub digit:        char,
}

/// Produces the multiplication steps of a fractional conversion, one at a
/// time.
///
/// The caller supplies the digit bound; the sequence ends when the remaining
/// fraction reaches exactly zero or the bound is exhausted, whichever comes
/// first. The bound is the hard termination guarantee: it caps the trace
/// regardless of how many digits the stored fraction needs.
#[derive(Debug, Clone)]
pub struct MultiplicationSteps {
    fraction:  f64,
    remaining: usize,
}

impl MultiplicationSteps {
    /// Creates the step sequence for a fraction in `[0, 1)`.
    ///
    /// The value is assumed validated; [`convert_fraction`] performs the
    /// range checks.
    #[must_use]
    pub const fn new(value: f64, max_digits: usize) -> Self {
        Self { fraction:  value,
               remaining: max_digits, }
    }

    /// The fraction still unconverted; nonzero after exhaustion means the
    /// digit bound cut the expansion short.
    #[must_use]
    pub const fn remainder(&self) -> f64 {
        self.fraction
    }
}

impl Iterator for MultiplicationSteps {
    type Item = MultiplicationStep;

    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_precision_loss)]
    #[allow(clippy::cast_sign_loss)]
    fn next(&mut self) -> Option<MultiplicationStep> {
        if self.remaining == 0 || self.fraction == 0.0 {
            return None;
        }

        let multiplier = self.fraction;
        let product = multiplier * RADIX as f64;
        // multiplier < 1, so the product's whole part fits a single digit.
        let digit_value = product as u8;

        self.fraction = product.fract();
        self.remaining -= 1;

        Some(MultiplicationStep { multiplier,
                                  multiplicand: RADIX,
                                  product,
                                  digit_value,
                                  digit: hex_digit(digit_value) })
    }
}

/// The full result of a fractional-part conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct FractionConversion {
    /// Every multiplication performed, in execution order.
    pub steps:     Vec<MultiplicationStep>,
    /// The hexadecimal digits, most-significant first (no reversal, unlike
    /// the whole-part case).
    pub digits:    String,
    /// True when the digit bound ended the conversion while a nonzero
    /// fraction remained; the digits are then a truncated approximation.
    pub truncated: bool,
}

/// Converts a fraction in `[0, 1)` to hexadecimal, recording every
/// multiplication.
///
/// An input of exactly `0.0` yields no steps and an empty digit string.
///
/// # Errors
/// - `ConvertError::NotFinite`: The value is NaN or infinite.
/// - `ConvertError::FractionOutOfRange`: The value is negative or `>= 1`.
///
/// # Example
/// ```
/// use hexplain::convert::fraction::convert_fraction;
///
/// let conversion = convert_fraction(0.5, 32).unwrap();
/// assert_eq!(conversion.digits, "8");
/// assert_eq!(conversion.steps.len(), 1);
/// assert!(!conversion.truncated);
///
/// // The stored value of 0.1 expands in 14 digits, the last rounded up.
/// let conversion = convert_fraction(0.1, 32).unwrap();
/// assert_eq!(conversion.digits, "1999999999999A");
/// assert!(!conversion.truncated);
///
/// // A tighter bound cuts the expansion short.
/// let conversion = convert_fraction(0.1, 5).unwrap();
/// assert_eq!(conversion.digits, "19999");
/// assert!(conversion.truncated);
/// ```
pub fn convert_fraction(value: f64, max_digits: usize) -> ConvertResult<FractionConversion> {
    if !value.is_finite() {
        return Err(ConvertError::NotFinite { value });
    }
    if !(0.0..1.0).contains(&value) {
        return Err(ConvertError::FractionOutOfRange { value });
    }

    let mut producer = MultiplicationSteps::new(value, max_digits);
    let steps: Vec<MultiplicationStep> = producer.by_ref().collect();
    let truncated = producer.remainder() != 0.0;
    let digits = steps.iter().map(|step| step.digit).collect();

    Ok(FractionConversion { steps, digits, truncated })
}
