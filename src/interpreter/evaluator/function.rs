/// The built-in table and call dispatch.
pub mod core;
/// The `lang` function implementation.
///
/// Prints its arguments as one output line.
pub mod print;
/// The `put` function implementation.
///
/// A placeholder that hands back its first argument.
pub mod put;
