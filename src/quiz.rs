/// Binary-addition practice rounds.
///
/// Generates two random operands and renders the side-by-side binary/decimal
/// worksheet plus its solution row. All logic is pure over an explicitly
/// passed random number generator, so a seeded generator replays the same
/// problems.
pub mod addition;

/// Hexadecimal-digit-to-binary practice rounds.
///
/// Generates a random digit value and checks a learner's 4-bit binary answer
/// against it. Like the addition rounds, generation takes the generator as an
/// argument so sessions are reproducible under test.
pub mod hex_digits;
