use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, stream::TokenStream},
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// The opening delimiter must already be consumed. It repeatedly calls
/// `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
/// A trailing comma is not accepted.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or anything other than a
/// comma or the closing token follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    tokens: &mut TokenStream<'_>,
    parse_item: impl Fn(&mut TokenStream<'_>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if tokens.at(closing) {
        tokens.advance();
        return Ok(items);
    }

    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Token::Comma => {
                tokens.advance();
            },
            tok if tok == closing => {
                tokens.advance();
                break;
            },
            tok => {
                return Err(ParseError::Expected { expected: format!("',' or {closing}"),
                                                  found:    tok.clone(),
                                                  line:     tokens.line(), });
            },
        }
    }

    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// Keywords are names too, so this accepts them; callers decide what is
/// allowed.
///
/// # Errors
/// `Expected` if the next token is not a name.
pub(in crate::interpreter::parser) fn parse_identifier(tokens: &mut TokenStream<'_>)
                                                       -> ParseResult<String> {
    match tokens.peek() {
        Token::Name(name) => {
            tokens.advance();
            Ok(name.clone())
        },
        tok => Err(ParseError::Expected { expected: "identifier".to_string(),
                                          found:    tok.clone(),
                                          line:     tokens.line(), }),
    }
}
