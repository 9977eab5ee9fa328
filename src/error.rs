/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unknown characters, malformed literals, and grammar violations such
/// as a missing closing brace.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: reads of
/// unassigned variables, calls to unknown functions, operators applied to
/// operands they cannot combine, and integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The first failure of a run, from whichever stage produced it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Lexing or parsing failed; nothing was evaluated.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation stopped at a runtime error.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// A failed run: the error plus whatever output was produced before it.
///
/// Parse failures always have empty partial output, since evaluation never
/// starts.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct Failure {
    /// The error that stopped the run.
    #[source]
    pub error:          Error,
    /// Output lines printed before the error, newline-joined.
    pub partial_output: String,
}

impl Failure {
    /// Wraps an error with the output collected so far.
    pub fn new(error: impl Into<Error>, partial_output: String) -> Self {
        Self { error: error.into(),
               partial_output }
    }
}
