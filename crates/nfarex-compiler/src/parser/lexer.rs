//! Lexer for pattern syntax.
//!
//! Produces span-based tokens; text is sliced from the source when needed.
//! Inside a bracketed set most tokens lose their meaning, so the parser
//! reinterprets them from their text.
//!
//! Consecutive lexer errors (only a trailing lone `\` can fail) are
//! coalesced into a single `Garbage` token.

use std::ops::Range;

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    #[token("(?:")]
    NonCapturingOpen,
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token("[^")]
    SetNegatedOpen,
    #[token("[")]
    SetOpen,
    #[token("]")]
    SetClose,
    #[token("|")]
    Pipe,
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    #[token("?")]
    Question,
    /// `{m}`, `{m,}` or `{m,n}`. A lone brace is an ordinary `Char`.
    #[regex(r"\{[0-9]+(,[0-9]*)?\}")]
    Braces,
    #[token("^")]
    Caret,
    #[token("$")]
    Dollar,
    #[token(".")]
    Dot,
    #[token("-")]
    Dash,
    #[regex(r"\\(.|\n)")]
    Escape,
    #[regex(r"[^\\()\[\]|*+?^$.\-]")]
    Char,
    /// Unlexable input.
    Garbage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }
}

pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(TokenKind::Garbage, start..end));
                }
                tokens.push(Token::new(kind, lexer.span()));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(TokenKind::Garbage, start..source.len()));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token.
#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[token.span.clone()]
}
