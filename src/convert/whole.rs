use crate::{convert::RADIX, util::num::hex_digit};

/// One recorded step of the repeated-division method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionStep {
    /// The value divided in this step.
    pub dividend:  u64,
    /// The radix, always 16.
    pub divisor:   u64,
    /// `dividend / 16`; the next step's dividend.
    pub quotient:  u64,
    /// `dividend % 16`, in `0..16`.
    pub remainder: u8,
    /// The hexadecimal character for `remainder`.
    pub digit:     char,
}

/// Produces the division steps of a whole-number conversion, one at a time.
///
/// The sequence is finite and restartable: a fresh iterator (or a clone taken
/// before iteration) replays the same steps. Every starting value yields at
/// least one step, so converting `0` records the single step
/// `0 ÷ 16 = 0 R 0` instead of an empty trace.
///
/// # Example
/// ```
/// use hexplain::convert::whole::DivisionSteps;
///
/// let mut steps = DivisionSteps::new(255);
///
/// let first = steps.next().unwrap();
/// assert_eq!((first.dividend, first.quotient, first.remainder), (255, 15, 15));
///
/// let second = steps.next().unwrap();
/// assert_eq!((second.dividend, second.quotient, second.remainder), (15, 0, 15));
///
/// assert!(steps.next().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct DivisionSteps {
    next_dividend: Option<u64>,
}

impl DivisionSteps {
    /// Creates the step sequence for the given whole number.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self { next_dividend: Some(value) }
    }
}

impl Iterator for DivisionSteps {
    type Item = DivisionStep;

    #[allow(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<DivisionStep> {
        let dividend = self.next_dividend.take()?;
        let quotient = dividend / RADIX;
        let remainder = (dividend % RADIX) as u8;

        if quotient != 0 {
            self.next_dividend = Some(quotient);
        }

        Some(DivisionStep { dividend,
                            divisor: RADIX,
                            quotient,
                            remainder,
                            digit: hex_digit(remainder) })
    }
}

/// The full result of a whole-part conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WholeConversion {
    /// Every division performed, in execution order.
    pub steps:  Vec<DivisionStep>,
    /// The hexadecimal digits, most-significant first.
    pub digits: String,
}

/// Converts a whole number to hexadecimal, recording every division.
///
/// Remainders fall out least-significant digit first, so the digit string is
/// the recorded sequence reversed. The input type already guarantees a
/// non-negative whole number; negative or fractional values are rejected
/// earlier, at the floating-point boundary.
///
/// # Example
/// ```
/// use hexplain::convert::whole::convert_whole;
///
/// let conversion = convert_whole(255);
/// assert_eq!(conversion.digits, "FF");
/// assert_eq!(conversion.steps.len(), 2);
///
/// // Zero still yields a digit.
/// assert_eq!(convert_whole(0).digits, "0");
/// ```
#[must_use]
pub fn convert_whole(value: u64) -> WholeConversion {
    let steps: Vec<DivisionStep> = DivisionSteps::new(value).collect();
    let digits = steps.iter().rev().map(|step| step.digit).collect();

    WholeConversion { steps, digits }
}
