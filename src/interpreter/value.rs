/// Runtime value representation.
///
/// Defines the `Value` enum, the truthiness rule used by conditions and
/// logical operators, and the printed form of every value.
pub mod core;
