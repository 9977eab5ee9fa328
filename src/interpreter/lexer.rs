use std::fmt;

use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
///
/// Keywords (`nex`, `ifnex`, `loop`, `and`, ...) are not separate tokens:
/// they arrive as [`Token::Name`] and the parser decides from context whether
/// a name is a keyword.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Real literal tokens, such as `3.0` or `0.25`.
    #[regex(r"[0-9]+\.[0-9]+", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens in single or double quotes, already unescaped.
    #[regex(r#""([^"\\]|\\[^\n])*""#, parse_string)]
    #[regex(r"'([^'\\]|\\[^\n])*'", parse_string)]
    Str(String),
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// Identifiers and keywords, such as `x`, `lang` or `ifnex`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Name(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Statement separator.
    #[token("\n", |lex| {
        lex.extras.line += 1;
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
    /// End of input. Never produced by the logos automaton; [`tokenize`]
    /// appends exactly one as the final token.
    Eof,
}

impl Token {
    /// Returns `true` if the token is the name `keyword`.
    ///
    /// # Example
    /// ```
    /// use nexlang::interpreter::lexer::Token;
    ///
    /// assert!(Token::Name("nex".into()).is_keyword("nex"));
    /// assert!(!Token::Name("nexus".into()).is_keyword("nex"));
    /// assert!(!Token::Str("nex".into()).is_keyword("nex"));
    /// ```
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Self::Name(name) if name == keyword)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(r) => write!(f, "number {r}"),
            Self::Integer(n) => write!(f, "number {n}"),
            Self::Str(s) => write!(f, "string {s:?}"),
            Self::Bool(b) => write!(f, "boolean {b}"),
            Self::Name(name) => write!(f, "name '{name}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Equals => write!(f, "'='"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::BangEqual => write!(f, "'!='"),
            Self::Less => write!(f, "'<'"),
            Self::Greater => write!(f, "'>'"),
            Self::LessEqual => write!(f, "'<='"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::Comma => write!(f, "','"),
            Self::Semicolon => write!(f, "';'"),
            Self::NewLine => write!(f, "newline"),
            Self::Ignored => write!(f, "whitespace"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Converts source text into the full token sequence.
///
/// Every token is paired with the line it starts on. The returned vector
/// always ends with exactly one [`Token::Eof`]. Lexing stops at the first
/// character that matches no token rule.
///
/// # Errors
/// - `UnexpectedCharacter` for input that matches no token rule.
/// - `InvalidEscape` for a string literal with a malformed escape sequence.
/// - `LiteralTooLarge` for an integer literal that does not fit in 64 bits.
///
/// # Example
/// ```
/// use nexlang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("nex x = 3.0\n").unwrap();
/// let kinds: Vec<&Token> = tokens.iter().map(|(t, _)| t).collect();
///
/// assert_eq!(kinds,
///            [&Token::Name("nex".into()),
///             &Token::Name("x".into()),
///             &Token::Equals,
///             &Token::Real(3.0),
///             &Token::NewLine,
///             &Token::Eof]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());

    loop {
        let line = lexer.extras.line;
        match lexer.next() {
            Some(Ok(token)) => tokens.push((token, line)),
            Some(Err(())) => return Err(classify_error(lexer.slice(), line)),
            None => break,
        }
    }

    tokens.push((Token::Eof, lexer.extras.line));
    tracing::debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// Works out which lexical rule rejected `slice`.
///
/// Only the callbacks for numbers and strings can reject text that matched
/// their pattern; everything else is an unknown character.
fn classify_error(slice: &str, line: usize) -> ParseError {
    let first = slice.chars().next().unwrap_or('\0');

    if first.is_ascii_digit() && slice.chars().all(|c| c.is_ascii_digit()) {
        return ParseError::LiteralTooLarge { literal: slice.to_string(),
                                             line };
    }

    if (first == '"' || first == '\'') && slice.len() >= 2 && slice.ends_with(first) {
        return ParseError::InvalidEscape { literal: slice.to_string(),
                                           line };
    }

    ParseError::UnexpectedCharacter { character: first,
                                      line }
}

/// Parses a real literal from the current token slice.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Parses a boolean literal from the current token slice.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Strips the quotes from a string literal and decodes its escapes.
///
/// Newlines inside the literal advance the line counter.
fn parse_string(lex: &mut logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    lex.extras.line += slice.matches('\n').count();

    unescape(&slice[1..slice.len() - 1])
}

/// Decodes C-style backslash escapes.
///
/// Recognised escapes are `\n \t \r \\ \' \" \a \b \f \v`, octal `\0`-`\777`,
/// `\xHH`, `\uHHHH` and `\UHHHHHHHH`. Any other escaped character is kept
/// verbatim together with its backslash.
///
/// Returns `None` if a hexadecimal escape is truncated or names an invalid
/// code point.
///
/// # Example
/// ```
/// use nexlang::interpreter::lexer::unescape;
///
/// assert_eq!(unescape(r"a\tb\n").as_deref(), Some("a\tb\n"));
/// assert_eq!(unescape(r"\x41é\101").as_deref(), Some("AéA"));
/// assert_eq!(unescape(r"\q").as_deref(), Some(r"\q"));
/// assert_eq!(unescape(r"\x4"), None);
/// ```
#[must_use]
pub fn unescape(body: &str) -> Option<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let Some(escaped) = chars.next() else {
            out.push('\\');
            break;
        };

        match escaped {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0C}'),
            'v' => out.push('\u{0B}'),
            '0'..='7' => {
                let mut code = escaped.to_digit(8)?;
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            code = code * 8 + digit;
                            chars.next();
                        },
                        None => break,
                    }
                }
                out.push(char::from_u32(code)?);
            },
            'x' => out.push(read_hex(&mut chars, 2)?),
            'u' => out.push(read_hex(&mut chars, 4)?),
            'U' => out.push(read_hex(&mut chars, 8)?),
            other => {
                out.push('\\');
                out.push(other);
            },
        }
    }

    Some(out)
}

/// Reads exactly `digits` hexadecimal digits and converts them to a `char`.
fn read_hex(chars: &mut impl Iterator<Item = char>, digits: usize) -> Option<char> {
    let mut code = 0u32;
    for _ in 0..digits {
        code = code * 16 + chars.next()?.to_digit(16)?;
    }
    char::from_u32(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn integer_and_real_literals_are_distinct() {
        assert_eq!(kinds("3 3.0"), [Token::Integer(3), Token::Real(3.0), Token::Eof]);
    }

    #[test]
    fn booleans_win_over_names_only_for_exact_text() {
        assert_eq!(kinds("true false trueish"),
                   [Token::Bool(true),
                    Token::Bool(false),
                    Token::Name("trueish".into()),
                    Token::Eof]);
    }

    #[test]
    fn strings_accept_both_quotes_and_escapes() {
        assert_eq!(kinds(r#""a\"b" 'c\'d' "x\ny""#),
                   [Token::Str("a\"b".into()),
                    Token::Str("c'd".into()),
                    Token::Str("x\ny".into()),
                    Token::Eof]);
    }

    #[test]
    fn two_character_operators_take_precedence() {
        assert_eq!(kinds("== != <= >= = < >"),
                   [Token::EqualEqual,
                    Token::BangEqual,
                    Token::LessEqual,
                    Token::GreaterEqual,
                    Token::Equals,
                    Token::Less,
                    Token::Greater,
                    Token::Eof]);
    }

    #[test]
    fn newlines_are_tokens_and_advance_lines() {
        let tokens = tokenize("a\n\tb\r\n").unwrap();
        assert_eq!(tokens,
                   [(Token::Name("a".into()), 1),
                    (Token::NewLine, 1),
                    (Token::Name("b".into()), 2),
                    (Token::NewLine, 2),
                    (Token::Eof, 3)]);
    }

    #[test]
    fn multi_line_string_keeps_line_count_in_sync() {
        let tokens = tokenize("\"a\nb\" x").unwrap();
        assert_eq!(tokens[1], (Token::Name("x".into()), 2));
    }

    #[test]
    fn unknown_character_is_reported() {
        let err = tokenize("nex x = 1\nnex y = @").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedCharacter { character: '@', line: 2 }));
    }

    #[test]
    fn oversized_integer_is_reported() {
        let err = tokenize("99999999999999999999").unwrap_err();
        assert!(matches!(err, ParseError::LiteralTooLarge { .. }));
    }

    #[test]
    fn malformed_escape_is_reported() {
        let err = tokenize(r#"lang("\xZZ")"#).unwrap_err();
        assert!(matches!(err, ParseError::InvalidEscape { line: 1, .. }));
    }

    #[test]
    fn octal_escapes_read_at_most_three_digits() {
        assert_eq!(unescape(r"\1011").as_deref(), Some("A1"));
        assert_eq!(unescape(r"\0").as_deref(), Some("\0"));
    }
}
