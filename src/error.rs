#[derive(Debug, Clone, Copy, PartialEq)]
/// Represents all ways an input value can be rejected before conversion.
///
/// Every variant carries the offending value so the diagnostic can name it.
/// Validation happens at the boundary of each component; once a value passes,
/// the conversion itself cannot fail.
pub enum ConvertError {
    /// The input was NaN or infinite.
    NotFinite {
        /// The value that was rejected.
        value: f64,
    },
    /// The input was negative.
    Negative {
        /// The value that was rejected.
        value: f64,
    },
    /// A whole number was expected, but the value had a fractional part.
    NotWhole {
        /// The value that was rejected.
        value: f64,
    },
    /// The whole part is too large to be represented exactly as an integer.
    WholeTooLarge {
        /// The value that was rejected.
        value: f64,
    },
    /// A fractional value in `[0, 1)` was expected.
    FractionOutOfRange {
        /// The value that was rejected.
        value: f64,
    },
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFinite { value } => {
                write!(f, "Invalid input: expected a finite number, but got {value}.")
            },
            Self::Negative { value } => {
                write!(f, "Invalid input: expected a non-negative number, but got {value}.")
            },
            Self::NotWhole { value } => {
                write!(f, "Invalid input: expected a whole number, but got {value}.")
            },
            Self::WholeTooLarge { value } => {
                write!(f,
                       "Invalid input: the whole part of {value} is too large to convert exactly (maximum is 2^53 - 1).")
            },
            Self::FractionOutOfRange { value } => {
                write!(f, "Invalid input: expected a fractional value in [0, 1), but got {value}.")
            },
        }
    }
}

impl std::error::Error for ConvertError {}

/// Shorthand for results produced by input validation and conversion.
pub type ConvertResult<T> = Result<T, ConvertError>;
