use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            stream::TokenStream,
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`   (numeric negation)
/// - `not` (logical not)
///
/// Unary operators are right-associative, so `not -x` is parsed as
/// `not (-x)`. Each prefix counts as one nesting level.
///
/// Grammar:
/// ```text
///     unary := ("-" | "not") unary
///            | primary
/// ```
pub(crate) fn parse_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let op = if tokens.at_keyword("not") {
        UnaryOperator::Not
    } else if tokens.at(&Token::Minus) {
        UnaryOperator::Negate
    } else {
        return parse_primary(tokens);
    };

    let (_, line) = tokens.advance();
    let expr = tokens.nested(parse_unary)?;

    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       line })
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER | STRING | BOOL
///              | NAME "(" arguments ")"
///              | NAME
///              | "(" expression ")"
/// ```
///
/// # Errors
/// `UnexpectedToken` if the current token cannot start an expression.
pub(crate) fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let (token, line) = tokens.advance();

    let value = match token {
        Token::Integer(n) => LiteralValue::Integer(*n),
        Token::Real(r) => LiteralValue::Real(*r),
        Token::Str(s) => LiteralValue::Str(s.clone()),
        Token::Bool(b) => LiteralValue::Bool(*b),
        Token::Name(name) => return parse_identifier_or_call(tokens, name, line),
        Token::LParen => {
            let expr = parse_expression(tokens)?;
            tokens.expect(&Token::RParen)?;
            return Ok(expr);
        },
        other => {
            return Err(ParseError::UnexpectedToken { token: other.clone(),
                                                     line });
        },
    };

    Ok(Expr::Literal { value, line })
}

/// Parses what follows an identifier: a call if `(` comes next, otherwise a
/// variable reference.
///
/// Grammar: `call := NAME "(" (expression ("," expression)*)? ")"`
fn parse_identifier_or_call(tokens: &mut TokenStream<'_>,
                            name: &str,
                            line: usize)
                            -> ParseResult<Expr> {
    if !tokens.at(&Token::LParen) {
        return Ok(Expr::Variable { name: name.to_string(),
                                   line });
    }

    tokens.advance();
    let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;

    Ok(Expr::FunctionCall { name: name.to_string(),
                            arguments,
                            line })
}
