use crate::interpreter::lexer::Token;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The lexer met a character that starts no token.
    #[error("Error on line {line}: Unexpected character {character:?}.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal contained a malformed escape sequence.
    #[error("Error on line {line}: Invalid escape sequence in string literal {literal}.")]
    InvalidEscape {
        /// The full literal, quotes included.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An integer literal was too large to be represented safely.
    #[error("Error on line {line}: Integer literal {literal} is too large.")]
    LiteralTooLarge {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The parser required one token but found another.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    Expected {
        /// Description of what the grammar required here.
        expected: String,
        /// The token actually found.
        found:    Token,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A token that cannot start an expression appeared where one was
    /// required.
    #[error("Error on line {line}: Unexpected token {token} in expression.")]
    UnexpectedToken {
        /// The token encountered.
        token: Token,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A `loop` keyword was followed by neither a count nor a condition.
    #[error("Error on line {line}: Invalid loop syntax: expected a number or '(' after 'loop', found {found}.")]
    InvalidLoop {
        /// The token found after `loop`.
        found: Token,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Expressions or blocks were nested beyond the supported depth.
    #[error("Error on line {line}: Nesting is deeper than {limit} levels.")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}
