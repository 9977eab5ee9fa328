/// Dispatch from a binary operator to its handler.
pub mod core;
/// Arithmetic on numbers and strings.
pub mod scalar;
/// Equality and ordering.
pub mod comparison;
/// `and` and `or`.
pub mod logic;
