/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: arithmetic
/// with string concatenation and repetition, comparisons and the logical
/// operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical `not`.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, the expression and statement dispatch, and
/// the collected output.
pub mod core;

/// Evaluation of conditionals.
///
/// Picks the first branch of an `ifnex` chain whose condition is truthy.
pub mod conditional;

/// Evaluation of both loop forms.
///
/// Runs counted loops and condition loops, the latter with an iteration cap.
pub mod loops;

/// Utility functions for evaluation.
///
/// Provides literal conversion and variable lookup.
pub mod utils;

/// Function evaluation.
///
/// Handles built-in function lookup, argument evaluation and dispatch.
pub mod function;
