use rand::Rng;

use crate::util::num::hex_digit;

/// One practice round: name the 4-bit binary form of a hexadecimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexDigitRound {
    /// The digit value in `0..16`.
    pub value: u8,
}

impl HexDigitRound {
    /// Draws a fresh round with a digit value in `0..16`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self { value: rng.gen_range(0..16) }
    }

    /// The question shown to the learner, e.g. `A in binary is:`.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{} in binary is:\t", hex_digit(self.value))
    }

    /// The expected answer: the digit as four binary characters, zero padded.
    ///
    /// # Example
    /// ```
    /// use hexplain::quiz::hex_digits::HexDigitRound;
    ///
    /// assert_eq!(HexDigitRound { value: 10 }.expected(), "1010");
    /// assert_eq!(HexDigitRound { value: 0 }.expected(), "0000");
    /// ```
    #[must_use]
    pub fn expected(&self) -> String {
        format!("{:04b}", self.value)
    }

    /// Checks a learner's answer, ignoring surrounding whitespace.
    #[must_use]
    pub fn check(&self, answer: &str) -> bool {
        answer.trim() == self.expected()
    }
}
