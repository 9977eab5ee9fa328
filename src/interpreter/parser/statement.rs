use crate::{
    ast::{ElseIf, LiteralValue, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_condition, parse_expression},
            stream::TokenStream,
            utils::parse_identifier,
        },
    },
};

/// Keyword introducing an assignment.
pub const ASSIGN_KEYWORD: &str = "nex";
/// Keyword introducing a conditional.
pub const IF_KEYWORD: &str = "ifnex";
/// Keyword introducing an else-if clause.
pub const ELSE_IF_KEYWORD: &str = "nexlf";
/// Keyword introducing the else clause.
pub const ELSE_KEYWORD: &str = "nexls";
/// Keyword introducing both loop forms.
pub const LOOP_KEYWORD: &str = "loop";

/// Parses a single statement.
///
/// A statement may be one of:
/// - an assignment (`nex`),
/// - a conditional (`ifnex`),
/// - a counted or condition loop (`loop`),
/// - an expression used as a statement.
///
/// Keywords are plain names; the statement kind is chosen by peeking at the
/// text of the leading name. Anything else is parsed as an expression.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    if tokens.at_keyword(ASSIGN_KEYWORD) {
        return parse_assignment(tokens);
    }
    if tokens.at_keyword(IF_KEYWORD) {
        return parse_if(tokens);
    }
    if tokens.at_keyword(LOOP_KEYWORD) {
        return parse_loop(tokens);
    }

    let line = tokens.line();
    let expr = parse_expression(tokens)?;
    skip_terminator(tokens);

    Ok(Statement::Expression { expr, line })
}

/// Consumes one optional newline ending a simple statement.
fn skip_terminator(tokens: &mut TokenStream<'_>) {
    if tokens.at(&Token::NewLine) {
        tokens.advance();
    }
}

/// Parses an assignment statement.
///
/// Grammar: `assignment := "nex" NAME "=" expression NEWLINE?`
///
/// # Errors
/// Returns a `ParseError` if the name or `=` is missing or the expression is
/// malformed.
fn parse_assignment(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    let (_, line) = tokens.advance();

    let name = parse_identifier(tokens)?;
    tokens.expect(&Token::Equals)?;
    let value = parse_expression(tokens)?;
    skip_terminator(tokens);

    Ok(Statement::Assignment { name, value, line })
}

/// Parses a conditional with its optional clauses.
///
/// Syntax:
/// ```text
///     ifnex (<condition>) { ... }
///     nexlf (<condition>) { ... }     (any number)
///     nexls { ... }                   (at most one, always last)
/// ```
/// Clauses may start on a later line than the closing brace before them,
/// which earlier nex interpreters rejected.
/// Clause scanning stops right after `nexls`.
///
/// # Errors
/// Returns a `ParseError` for a missing parenthesis or brace in any header,
/// and propagates errors from the bodies.
fn parse_if(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    let (_, line) = tokens.advance();

    let condition = parse_condition(tokens)?;
    let then_branch = parse_block(tokens)?;

    let mut else_ifs = Vec::new();
    let mut else_branch = None;

    loop {
        tokens.skip_newlines();
        if tokens.at_keyword(ELSE_IF_KEYWORD) {
            tokens.advance();
            let condition = parse_condition(tokens)?;
            let body = parse_block(tokens)?;
            else_ifs.push(ElseIf { condition, body });
        } else if tokens.at_keyword(ELSE_KEYWORD) {
            tokens.advance();
            else_branch = Some(parse_block(tokens)?);
            break;
        } else {
            break;
        }
    }

    Ok(Statement::If { condition,
                       then_branch,
                       else_ifs,
                       else_branch,
                       line })
}

/// Parses either loop form.
///
/// Grammar:
/// ```text
///     loop := "loop" NUMBER block
///           | "loop" "(" expression ")" block
/// ```
/// The count of a counted loop must be a number literal, not an expression.
///
/// # Errors
/// `InvalidLoop` if `loop` is followed by neither a number nor `(`.
fn parse_loop(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    let (_, line) = tokens.advance();

    let count = match tokens.peek() {
        Token::Integer(n) => Some(LiteralValue::Integer(*n)),
        Token::Real(r) => Some(LiteralValue::Real(*r)),
        Token::LParen => None,
        found => {
            return Err(ParseError::InvalidLoop { found: found.clone(),
                                                 line:  tokens.line(), });
        },
    };

    if let Some(count) = count {
        tokens.advance();
        let body = parse_block(tokens)?;
        return Ok(Statement::LoopCount { count, body, line });
    }

    let condition = parse_condition(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Statement::LoopCondition { condition,
                                  body,
                                  line })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{BinaryOperator, Block, Expr},
        interpreter::{lexer::tokenize, parser::core::parse_program},
    };

    fn statements(source: &str) -> ParseResult<Vec<Statement>> {
        let tokens = tokenize(source)?;
        Ok(parse_program(&tokens)?.body.statements)
    }

    fn single(source: &str) -> Statement {
        let mut all = statements(source).unwrap();
        assert_eq!(all.len(), 1, "expected one statement in {source:?}");
        all.remove(0)
    }

    #[test]
    fn assignment_without_trailing_newline() {
        assert_eq!(single("nex x = 3"),
                   Statement::Assignment { name:  "x".into(),
                                           value: Expr::Literal { value: 3_i64.into(),
                                                                  line:  1, },
                                           line:  1, });
    }

    #[test]
    fn statements_may_share_a_line() {
        assert_eq!(statements("nex a = 1 lang(a)").unwrap().len(), 2);
    }

    #[test]
    fn assignment_requires_equals() {
        let err = statements("nex x 3").unwrap_err();
        assert_eq!(err.to_string(), "Error on line 1: Expected '=', found number 3.");
    }

    #[test]
    fn assignment_requires_a_name() {
        assert!(matches!(statements("nex 3 = 3"),
                         Err(ParseError::Expected { found: Token::Integer(3), .. })));
    }

    #[test]
    fn conditional_collects_clauses_in_order() {
        let Statement::If { else_ifs,
                            else_branch,
                            .. } = single("ifnex (a) { }\nnexlf (b) { }\nnexlf (c) { }\nnexls { lang(1) }")
        else {
            panic!("expected a conditional");
        };

        let names: Vec<_> = else_ifs.iter()
                                    .map(|clause| match &clause.condition {
                                        Expr::Variable { name, .. } => name.as_str(),
                                        _ => "",
                                    })
                                    .collect();
        assert_eq!(names, ["b", "c"]);
        assert_eq!(else_branch.map(|b| b.statements.len()), Some(1));
    }

    #[test]
    fn else_must_come_last() {
        let err = statements("ifnex (a) { } nexls { } nexlf (b) { }").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { token: Token::LBrace, .. }));
    }

    #[test]
    fn counted_loop_keeps_literal_kind() {
        assert!(matches!(single("loop 2.5 { }"),
                         Statement::LoopCount { count: LiteralValue::Real(_), .. }));
        assert_eq!(single("loop 3 { }"),
                   Statement::LoopCount { count: LiteralValue::Integer(3),
                                          body:  Block::default(),
                                          line:  1, });
    }

    #[test]
    fn condition_loop_parses_header() {
        let Statement::LoopCondition { condition, .. } = single("loop (i < 3) {\n}") else {
            panic!("expected a condition loop");
        };
        assert!(matches!(condition, Expr::BinaryOp { op: BinaryOperator::Less, .. }));
    }

    #[test]
    fn loop_needs_count_or_condition() {
        assert!(matches!(statements("loop x { }"),
                         Err(ParseError::InvalidLoop { found: Token::Name(_), .. })));
        assert!(matches!(statements("loop -3 { }"),
                         Err(ParseError::InvalidLoop { found: Token::Minus, .. })));
    }

    #[test]
    fn unterminated_block_reports_end_of_input() {
        let err = statements("loop 3 {\n  lang(1)\n").unwrap_err();
        assert_eq!(err.to_string(), "Error on line 3: Expected '}', found end of input.");
    }

    #[test]
    fn stray_closing_brace_is_rejected() {
        assert!(matches!(statements("lang(1)\n}"),
                         Err(ParseError::UnexpectedToken { token: Token::RBrace, line: 2 })));
    }

    #[test]
    fn arithmetic_is_left_associative() {
        let Statement::Expression { expr, .. } = single("a - b - c") else {
            panic!("expected an expression");
        };
        let Expr::BinaryOp { left, op, right, .. } = expr else {
            panic!("expected a binary operation");
        };
        assert_eq!(op, BinaryOperator::Sub);
        assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Sub, .. }));
        assert!(matches!(*right, Expr::Variable { .. }));
    }

    #[test]
    fn precedence_ladder_orders_operators() {
        let Statement::Expression { expr, .. } = single("a or b and c == d < e + f * g") else {
            panic!("expected an expression");
        };

        let mut ops = Vec::new();
        let mut node = &expr;
        while let Expr::BinaryOp { op, right, .. } = node {
            ops.push(*op);
            node = right;
        }
        assert_eq!(ops,
                   [BinaryOperator::Or,
                    BinaryOperator::And,
                    BinaryOperator::Equal,
                    BinaryOperator::Less,
                    BinaryOperator::Add,
                    BinaryOperator::Mul]);
    }

    #[test]
    fn parsing_is_deterministic() {
        let source = "nex i = 0\nloop (i < 3) {\n  ifnex (i == 1) { lang(\"one\") } nexls { lang(i) }\n  nex i = i + 1\n}\n";
        assert_eq!(statements(source).unwrap(), statements(source).unwrap());
    }
}
