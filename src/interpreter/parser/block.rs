use crate::{
    ast::Block,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement, stream::TokenStream},
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements, optionally separated by
/// newlines. Parsing continues until a closing `}` token is encountered.
/// Leading and trailing newlines inside the block are ignored. Each block
/// counts as one nesting level.
///
/// Grammar: `block := "{" (NEWLINE | statement)* "}"`
///
/// # Errors
/// `Expected` if the opening brace is missing or input ends before the
/// closing brace.
pub fn parse_block(tokens: &mut TokenStream<'_>) -> ParseResult<Block> {
    tokens.expect(&Token::LBrace)?;

    tokens.nested(|tokens| {
              let mut statements = Vec::new();

              loop {
                  tokens.skip_newlines();
                  if tokens.at(&Token::RBrace) || tokens.at(&Token::Eof) {
                      break;
                  }
                  statements.push(parse_statement(tokens)?);
              }

              tokens.expect(&Token::RBrace)?;
              Ok(Block { statements })
          })
}
