/// Splits a real number into its whole and fractional components.
///
/// This is the first stage of a conversion: every input passes through the
/// splitter, which is also where negative, non-finite, and oversized values
/// are rejected before any digits are produced.
///
/// # Responsibilities
/// - Validates that the input is a finite, non-negative number.
/// - Returns the whole part as an integer and the fractional part in [0, 1).
pub mod split;

/// Converts the whole part by repeated division.
///
/// Implements the classical pencil-and-paper method: divide by 16, record the
/// remainder as a digit, continue with the quotient. Steps are produced one
/// at a time by an iterator so the trace can be consumed incrementally or
/// collected in full.
///
/// # Responsibilities
/// - Produces one `DivisionStep` per division performed.
/// - Assembles the digit string, most-significant digit first.
pub mod whole;

/// Converts the fractional part by repeated multiplication.
///
/// Implements the mirror method: multiply by 16, record the whole part of the
/// product as a digit, continue with the product's fraction. Because a
/// fraction with an extreme exponent can take hundreds of steps to reach
/// exactly zero, the iterator enforces a digit bound and reports whether it
/// was hit.
///
/// # Responsibilities
/// - Produces one `MultiplicationStep` per multiplication performed.
/// - Assembles the digit string and flags truncated conversions.
pub mod fraction;

/// The target radix of every conversion.
pub const RADIX: u64 = 16;
