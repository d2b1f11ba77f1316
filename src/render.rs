/// Renders the division trace as an aligned table.
pub mod division;
/// Renders the multiplication trace as an aligned table, with the truncation
/// note when the digit bound was hit.
pub mod multiplication;
/// Renders the input decomposition line and the final result line.
pub mod summary;

/// Wraps a value in the base-10 subscript notation, e.g. `(26)₁₀`.
pub(crate) fn base10<T: std::fmt::Display>(value: T) -> String {
    format!("({value})\u{2081}\u{2080}")
}

/// Wraps a value in the base-16 subscript notation, e.g. `(1A)₁₆`.
pub(crate) fn base16<T: std::fmt::Display>(value: T) -> String {
    format!("({value})\u{2081}\u{2086}")
}

/// Arrow separating a step's operands from its extracted digit.
pub(crate) const DIGIT_ARROW: &str = "\u{2192}";

/// Width of a column holding the given cells, with breathing room.
pub(crate) fn column_width<'a, I>(cells: I) -> usize
    where I: IntoIterator<Item = &'a str>
{
    cells.into_iter().map(|cell| cell.chars().count()).max().unwrap_or(0) + 4
}
