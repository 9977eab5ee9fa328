use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Maximum nesting of expressions and blocks accepted by the parser.
///
/// The parser recurses once per nesting level, so this bounds its stack use.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Maximum depth of the syntax tree the parser may build.
///
/// Counts nesting levels plus every operator absorbed into a
/// left-associative chain, since `1 + 1 + 1` nests to the left. The
/// evaluator and the tree's destructor recurse once per level.
pub const MAX_TREE_DEPTH: usize = 500;

static END: (Token, usize) = (Token::Eof, 0);

/// A forward-only cursor over `(Token, line)` pairs.
///
/// The cursor never moves past the final [`Token::Eof`]; peeking at or past
/// the end keeps returning it. It also tracks how deeply the parser has
/// recursed so pathological input fails with a parse error instead of
/// exhausting the stack.
pub struct TokenStream<'a> {
    tokens:     &'a [(Token, usize)],
    position:   usize,
    depth:      usize,
    tree_depth: usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a cursor at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [(Token, usize)]) -> Self {
        Self { tokens,
               position: 0,
               depth: 0,
               tree_depth: 0 }
    }

    fn current(&self) -> &'a (Token, usize) {
        self.tokens
            .get(self.position)
            .or_else(|| self.tokens.last())
            .unwrap_or(&END)
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub fn peek(&self) -> &'a Token {
        &self.current().0
    }

    /// Returns the line of the current token.
    #[must_use]
    pub fn line(&self) -> usize {
        self.current().1
    }

    /// Consumes and returns the current token and its line.
    pub fn advance(&mut self) -> (&'a Token, usize) {
        let (token, line) = self.current();
        if self.position < self.tokens.len() && *token != Token::Eof {
            self.position += 1;
        }
        (token, *line)
    }

    /// Returns `true` if the current token is the name `keyword`.
    #[must_use]
    pub fn at_keyword(&self, keyword: &str) -> bool {
        self.peek().is_keyword(keyword)
    }

    /// Returns `true` if the current token equals `token`.
    #[must_use]
    pub fn at(&self, token: &Token) -> bool {
        self.peek() == token
    }

    /// Consumes any run of newline tokens.
    pub fn skip_newlines(&mut self) {
        while self.at(&Token::NewLine) {
            self.advance();
        }
    }

    /// Consumes the current token if it equals `expected`, otherwise fails
    /// naming both.
    ///
    /// Returns the line of the consumed token.
    ///
    /// # Errors
    /// `Expected` if the current token differs.
    pub fn expect(&mut self, expected: &Token) -> ParseResult<usize> {
        if self.at(expected) {
            return Ok(self.advance().1);
        }
        Err(ParseError::Expected { expected: expected.to_string(),
                                   found:    self.peek().clone(),
                                   line:     self.line(), })
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// # Errors
    /// `NestingTooDeep` once [`MAX_NESTING_DEPTH`] or [`MAX_TREE_DEPTH`] is
    /// exceeded; otherwise whatever `parse` returns.
    pub fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                    line:  self.line(), });
        }
        self.deepen(1)?;
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        self.release(1);
        result
    }

    /// Adds `levels` to the depth of the tree being built.
    ///
    /// # Errors
    /// `NestingTooDeep` if the tree would exceed [`MAX_TREE_DEPTH`].
    pub fn deepen(&mut self, levels: usize) -> ParseResult<()> {
        if self.tree_depth + levels > MAX_TREE_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_TREE_DEPTH,
                                                    line:  self.line(), });
        }
        self.tree_depth += levels;
        Ok(())
    }

    /// Gives back tree depth taken with [`deepen`](Self::deepen).
    pub fn release(&mut self, levels: usize) {
        self.tree_depth -= levels;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_stops_at_eof() {
        let tokens = [(Token::Comma, 1), (Token::Eof, 1)];
        let mut stream = TokenStream::new(&tokens);

        assert_eq!(stream.advance(), (&Token::Comma, 1));
        assert_eq!(stream.advance(), (&Token::Eof, 1));
        assert_eq!(stream.advance(), (&Token::Eof, 1));
        assert_eq!(stream.peek(), &Token::Eof);
    }

    #[test]
    fn empty_input_peeks_eof() {
        let stream = TokenStream::new(&[]);
        assert_eq!(stream.peek(), &Token::Eof);
    }

    #[test]
    fn expect_reports_found_token() {
        let tokens = [(Token::RBrace, 4), (Token::Eof, 4)];
        let mut stream = TokenStream::new(&tokens);

        let err = stream.expect(&Token::LParen).unwrap_err();
        assert_eq!(err.to_string(), "Error on line 4: Expected '(', found '}'.");
    }

    #[test]
    fn nesting_is_bounded() {
        fn dive(stream: &mut TokenStream<'_>) -> ParseResult<()> {
            stream.nested(dive)
        }

        let mut stream = TokenStream::new(&[]);
        assert!(matches!(dive(&mut stream),
                         Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH, .. })));
    }

    #[test]
    fn tree_depth_is_bounded_and_released() {
        let mut stream = TokenStream::new(&[]);

        stream.deepen(MAX_TREE_DEPTH).unwrap();
        assert!(matches!(stream.deepen(1),
                         Err(ParseError::NestingTooDeep { limit: MAX_TREE_DEPTH, .. })));
        assert!(stream.nested(|_| Ok(())).is_err());

        stream.release(MAX_TREE_DEPTH);
        assert!(stream.nested(|_| Ok(())).is_ok());
    }
}
