/// Entry points of the parser.
///
/// Defines the `ParseResult` alias, the whole-program entry point and the
/// generic expression entry point shared by every other submodule.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles `not`, unary minus, literals, variables, calls and parenthesized
/// expressions.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence ladder from `or` down to `*` and `/`.
pub mod binary;

/// Brace-delimited block parsing.
pub mod block;

/// Helpers shared by the parser submodules.
pub mod utils;

/// Keyword-led statement parsing: assignments, conditionals and loops.
pub mod statement;

/// Cursor over the lexed token sequence.
pub mod stream;
