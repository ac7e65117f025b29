//! Core parser state and the expression grammar.
//!
//! - Token access and lookahead
//! - Error construction
//! - Recursion depth limiting
//! - Alternation, sequence and quantifier rules

use std::ops::Range;

use super::lexer::{Token, TokenKind, token_text};
use crate::ast::{Anchor, Node, QuantifierKind};
use crate::diagnostics::{Diagnostic, DiagnosticKind};

/// Largest `m` or `n` accepted in `{m,n}`.
pub const MAX_REPEAT: u32 = 1000;

pub(super) enum Failure {
    Syntax(Diagnostic),
    RecursionLimit,
}

impl From<Failure> for crate::Error {
    fn from(failure: Failure) -> Self {
        match failure {
            Failure::Syntax(diagnostic) => crate::Error::ParseError(diagnostic.into()),
            Failure::RecursionLimit => crate::Error::RecursionLimitExceeded,
        }
    }
}

pub(super) type PResult<T> = Result<T, Failure>;

pub(super) struct Parser<'src> {
    pub(super) source: &'src str,
    tokens: Vec<Token>,
    /// Current position in `tokens`. Monotonically increases.
    pos: usize,
    depth: u32,
    max_depth: u32,
    /// Index handed to the most recent capturing group.
    pub(super) last_group: u32,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>, max_depth: u32) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            depth: 0,
            max_depth,
            last_group: 0,
        }
    }

    pub fn parse(mut self) -> crate::Result<Node> {
        let node = self.parse_alternation()?;
        if !self.eof() {
            // The sequence rule stops only at `|`, `)` and end of input.
            let span = self.current_span();
            return Err(self.error(DiagnosticKind::UnmatchedParen, span).into());
        }
        Ok(node)
    }

    /// Current token kind, `None` at end of input.
    pub(super) fn current(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    pub(super) fn current_span(&self) -> Range<usize> {
        self.tokens
            .get(self.pos)
            .map_or(self.source.len()..self.source.len(), |t| t.span.clone())
    }

    pub(super) fn current_text(&self) -> &'src str {
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(self.source, t))
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn at(&self, kind: TokenKind) -> bool {
        self.current() == Some(kind)
    }

    pub(super) fn bump(&mut self) {
        debug_assert!(!self.eof(), "bump past end of input");
        self.pos += 1;
    }

    pub(super) fn error(&self, kind: DiagnosticKind, range: Range<usize>) -> Failure {
        Failure::Syntax(Diagnostic::new(kind, range))
    }

    pub(super) fn enter_recursion(&mut self) -> PResult<()> {
        if self.depth >= self.max_depth {
            return Err(Failure::RecursionLimit);
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(super) fn parse_alternation(&mut self) -> PResult<Node> {
        let mut branches = vec![self.parse_sequence()?];
        while self.at(TokenKind::Pipe) {
            self.bump();
            branches.push(self.parse_sequence()?);
        }

        if branches.len() == 1 {
            return Ok(branches.swap_remove(0));
        }
        Ok(Node::Alternation(branches))
    }

    fn parse_sequence(&mut self) -> PResult<Node> {
        let mut items = Vec::new();
        while !matches!(
            self.current(),
            None | Some(TokenKind::Pipe) | Some(TokenKind::ParenClose)
        ) {
            items.push(self.parse_item()?);
        }

        if items.len() == 1 {
            return Ok(items.swap_remove(0));
        }
        Ok(Node::Sequence(items))
    }

    fn parse_item(&mut self) -> PResult<Node> {
        if let Some(anchor) = self.current_anchor() {
            self.bump();
            self.reject_quantifier()?;
            return Ok(Node::Anchor(anchor));
        }

        let atom = self.parse_atom()?;
        let Some(kind) = self.parse_quantifier_kind()? else {
            return Ok(atom);
        };

        let greedy = if self.at(TokenKind::Question) {
            self.bump();
            false
        } else {
            true
        };

        // `a**` and `a+*` have nothing for the second quantifier to repeat.
        self.reject_quantifier()?;
        Ok(Node::quantified(atom, kind, greedy))
    }

    fn current_anchor(&self) -> Option<Anchor> {
        match self.current()? {
            TokenKind::Caret => Some(Anchor::Start),
            TokenKind::Dollar => Some(Anchor::End),
            TokenKind::Escape => match self.current_text() {
                "\\b" => Some(Anchor::WordBoundary),
                "\\B" => Some(Anchor::NotWordBoundary),
                _ => None,
            },
            _ => None,
        }
    }

    pub(super) fn at_quantifier(&self) -> bool {
        matches!(
            self.current(),
            Some(TokenKind::Star | TokenKind::Plus | TokenKind::Question | TokenKind::Braces)
        )
    }

    fn reject_quantifier(&self) -> PResult<()> {
        if self.at_quantifier() {
            return Err(self.error(DiagnosticKind::NothingToRepeat, self.current_span()));
        }
        Ok(())
    }

    fn parse_quantifier_kind(&mut self) -> PResult<Option<QuantifierKind>> {
        let kind = match self.current() {
            Some(TokenKind::Star) => QuantifierKind::ZeroOrMore,
            Some(TokenKind::Plus) => QuantifierKind::OneOrMore,
            Some(TokenKind::Question) => QuantifierKind::ZeroOrOne,
            Some(TokenKind::Braces) => self.parse_braces()?,
            _ => return Ok(None),
        };
        self.bump();
        Ok(Some(kind))
    }

    /// `{m}` | `{m,}` | `{m,n}`; the lexer guarantees the digit layout.
    fn parse_braces(&self) -> PResult<QuantifierKind> {
        let span = self.current_span();
        let text = self.current_text();
        let inner = &text[1..text.len() - 1];

        let bound = |digits: &str| {
            digits
                .parse::<u32>()
                .ok()
                .filter(|&n| n <= MAX_REPEAT)
                .ok_or_else(|| self.error(DiagnosticKind::BoundTooLarge, span.clone()))
        };

        let (min, max) = match inner.split_once(',') {
            None => {
                let n = bound(inner)?;
                (n, Some(n))
            }
            Some((min, "")) => (bound(min)?, None),
            Some((min, max)) => (bound(min)?, Some(bound(max)?)),
        };

        if let Some(max) = max
            && max < min
        {
            return Err(self.error(DiagnosticKind::BoundsOutOfOrder, span));
        }

        Ok(QuantifierKind::Range { min, max })
    }
}
