//! # nexlang
//!
//! nexlang is a small imperative scripting language written in Rust.
//! It lexes, parses and evaluates short programs and returns the lines they
//! print, which makes it suitable for running untrusted snippets submitted by
//! learners.
//!
//! ```
//! let output = nexlang::run("nex x = 2\nloop 2 { lang(\"x is\", x) }").unwrap();
//! assert_eq!(output, "x is 2\nx is 2");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{Failure, ParseError},
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of a program as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing or
/// evaluating code, and the `Failure` that a whole run reports. Every message
/// names the source line it refers to.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The JSON request/response boundary.
///
/// Wraps [`run`] into the serializable payload handed to transport layers,
/// and turns unexpected internal failures into the same payload shape.
pub mod response;
/// General numeric conversion and formatting helpers.
pub mod util;

/// Lexes and parses a program without running it.
///
/// # Examples
/// ```
/// use nexlang::parse;
///
/// let program = parse("nex x = 1\nlang(x)").unwrap();
/// assert_eq!(program.body.statements.len(), 2);
///
/// assert!(parse("lang(1").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    parse_program(&tokens)
}

/// Runs a program and returns everything it printed.
///
/// Every call gets a fresh evaluation context: no variables or output carry
/// over between runs.
///
/// # Returns
/// - `Ok(String)`: the printed lines joined with `\n` (empty if nothing was
///   printed).
/// - `Err(Failure)`: the first lexing, parsing or runtime error, along with
///   the output printed before a runtime error occurred.
///
/// # Examples
/// ```
/// use nexlang::run;
///
/// assert_eq!(run("lang(\"a\" + \"b\")").unwrap(), "ab");
///
/// let failure = run("lang(1)\nlang(y)\nlang(2)").unwrap_err();
/// assert_eq!(failure.to_string(), "Error on line 2: Variable not defined: 'y'.");
/// assert_eq!(failure.partial_output, "1");
/// ```
pub fn run(source: &str) -> Result<String, Failure> {
    let program = parse(source).map_err(|error| Failure::new(error, String::new()))?;

    let mut context = Context::new();
    match context.run(&program) {
        Ok(_) => {
            tracing::debug!(lines = context.output().len(), "run finished");
            Ok(context.output_text())
        },
        Err(error) => {
            tracing::debug!(%error, lines = context.output().len(), "run failed");
            Err(Failure::new(error, context.output_text()))
        },
    }
}
