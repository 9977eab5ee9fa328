/// Represents all errors that can occur during evaluation and runtime.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    #[error("Error on line {line}: Variable not defined: '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that is not a built-in.
    #[error("Error on line {line}: Function not found: '{name}'.")]
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was applied to operands it cannot combine.
    #[error("Error on line {line}: Type error: {details}.")]
    TypeMismatch {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Integer arithmetic or string repetition exceeded what can be
    /// represented.
    #[error("Error on line {line}: Overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}
