//! Pattern parser.
//!
//! Grammar (informal):
//! ```text
//! pattern     = alternation
//! alternation = sequence ("|" sequence)*
//! sequence    = item*
//! item        = anchor | atom quantifier?
//! anchor      = "^" | "$" | "\b" | "\B"
//! atom        = "(" pattern ")" | "(?:" pattern ")" | set | "." | escape | CHAR
//! set         = "[" "^"? (set_atom ("-" set_atom)?)* "]"
//! quantifier  = ("*" | "+" | "?" | "{m}" | "{m,}" | "{m,n}") "?"?
//! ```
//!
//! Capture groups are numbered from 1 in order of their opening parenthesis.
//! Parsing stops at the first error; the error is reported as a single
//! diagnostic with the offending span.

mod atoms;
mod core;
mod lexer;

#[cfg(test)]
mod parser_tests;

pub use self::core::MAX_REPEAT;
pub use lexer::{Token, TokenKind, lex, token_text};

use crate::ast::Node;
use self::core::Parser;

/// Group nesting limit. Every `(` costs a recursion frame.
pub const DEFAULT_MAX_DEPTH: u32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    pub max_depth: u32,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

pub fn parse(source: &str) -> crate::Result<Node> {
    parse_with(source, ParseConfig::default())
}

pub fn parse_with(source: &str, config: ParseConfig) -> crate::Result<Node> {
    Parser::new(source, lex(source), config.max_depth).parse()
}
