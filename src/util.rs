/// Numeric conversion and formatting helpers.
///
/// This module provides the conversions between integers and reals that the
/// evaluator performs implicitly (mixed arithmetic, loop counts) and the
/// textual rendering of reals used when printing.
pub mod num;
