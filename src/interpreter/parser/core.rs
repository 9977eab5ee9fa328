use crate::{
    ast::{Block, Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical_or, statement::parse_statement, stream::TokenStream},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// Top-level statements are separated by newlines; blank lines are skipped.
/// Parsing consumes every token up to [`Token::Eof`] and stops at the first
/// grammar violation.
///
/// Grammar: `program := (NEWLINE | statement)* EOF`
///
/// # Parameters
/// - `tokens`: The lexed token sequence, as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The [`Program`] whose body is the top-level block.
///
/// # Example
/// ```
/// use nexlang::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("\nnex x = 1\n\nlang(x)\n").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.body.statements.len(), 2);
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let mut stream = TokenStream::new(tokens);
    let mut statements = Vec::new();

    loop {
        stream.skip_newlines();
        if stream.at(&Token::Eof) {
            break;
        }
        statements.push(parse_statement(&mut stream)?);
    }

    tracing::debug!(statements = statements.len(), "parsed program");
    Ok(Program { body: Block { statements } })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy. Each entry counts as one
/// nesting level.
///
/// Grammar: `expression := logical_or`
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    tokens.nested(parse_logical_or)
}

/// Parses a parenthesized condition: `"(" expression ")"`.
///
/// Used by the headers of `ifnex`, `nexlf` and condition loops.
pub fn parse_condition(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    tokens.expect(&Token::LParen)?;
    let condition = parse_expression(tokens)?;
    tokens.expect(&Token::RParen)?;
    Ok(condition)
}
