/// Numeric conversion helpers.
///
/// This module provides safe functions for moving between floating-point and
/// integer representations without silent data loss, plus the hexadecimal
/// digit lookup shared by both converters.
///
/// All fallible functions return a `Result`, which is `Ok` if the conversion
/// is lossless and valid, or an error if the value is out of range, not
/// finite, or not a whole number.
pub mod num;
