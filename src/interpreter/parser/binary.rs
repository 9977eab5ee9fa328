use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, stream::TokenStream, unary::parse_unary},
    },
};

/// Parser for one precedence level.
type Level = fn(&mut TokenStream<'_>) -> ParseResult<Expr>;

/// Parses a left-associative chain of operators from `operators`.
///
/// The rule is: `level := operand (op operand)*`, so `a - b - c` parses as
/// `(a - b) - c`. Each absorbed operator makes the tree one level deeper,
/// so it is charged against the stream's tree depth.
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `operand`: Parser for the next tighter level.
/// - `operators`: Operators that belong to this level.
fn parse_left_associative(tokens: &mut TokenStream<'_>,
                          operand: Level,
                          operators: &[BinaryOperator])
                          -> ParseResult<Expr> {
    let mut left = operand(tokens)?;
    let mut absorbed = 0;

    while let Some(op) = token_to_binary_operator(tokens.peek())
          && operators.contains(&op)
    {
        tokens.deepen(1)?;
        absorbed += 1;
        let (_, line) = tokens.advance();
        let right = operand(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }

    tokens.release(absorbed);
    Ok(left)
}

/// Parses logical OR expressions.
///
/// Grammar: `or := and ("or" and)*`
pub fn parse_logical_or(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_logical_and, &[BinaryOperator::Or])
}

/// Parses logical AND expressions.
///
/// Precedence is higher than OR.
///
/// Grammar: `and := equality ("and" equality)*`
pub fn parse_logical_and(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_equality, &[BinaryOperator::And])
}

/// Parses `==` and `!=`.
///
/// Grammar: `equality := relational (("==" | "!=") relational)*`
pub fn parse_equality(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens,
                           parse_relational,
                           &[BinaryOperator::Equal, BinaryOperator::NotEqual])
}

/// Parses ordering comparisons.
///
/// Grammar: `relational := additive (("<" | ">" | "<=" | ">=") additive)*`
pub fn parse_relational(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens,
                           parse_additive,
                           &[BinaryOperator::Less,
                             BinaryOperator::Greater,
                             BinaryOperator::LessEqual,
                             BinaryOperator::GreaterEqual])
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens,
                           parse_multiplicative,
                           &[BinaryOperator::Add, BinaryOperator::Sub])
}

/// Parses multiplication and division expressions.
///
/// Grammar: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_unary, &[BinaryOperator::Mul, BinaryOperator::Div])
}

/// Maps a token to its corresponding binary operator.
///
/// The logical operators are names (`and`, `or`) rather than symbols, so
/// they are recognised by their text here.
///
/// # Example
/// ```
/// use nexlang::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Name("and".into())),
///            Some(BinaryOperator::And));
/// assert_eq!(token_to_binary_operator(&Token::Name("x".into())), None);
/// ```
#[must_use]
pub fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Name(name) if name == "and" => Some(BinaryOperator::And),
        Token::Name(name) if name == "or" => Some(BinaryOperator::Or),
        _ => None,
    }
}
