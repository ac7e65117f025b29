//! Atoms: groups, bracketed sets, escapes and single characters.

use std::ops::Range;

use super::core::{PResult, Parser};
use super::lexer::TokenKind;
use crate::ast::{CharGroup, ClassKind, Group, Node, SetItem};
use crate::diagnostics::DiagnosticKind;

/// One element of a bracketed set before ranges are assembled.
#[derive(Debug, Clone, Copy)]
enum SetAtom {
    Char(char),
    Class(ClassKind),
    Dash,
}

impl Parser<'_> {
    pub(super) fn parse_atom(&mut self) -> PResult<Node> {
        let span = self.current_span();
        let Some(kind) = self.current() else {
            unreachable!("parse_atom: sequence stops at end of input");
        };

        match kind {
            TokenKind::ParenOpen | TokenKind::NonCapturingOpen => self.parse_group(),
            TokenKind::SetOpen | TokenKind::SetNegatedOpen => self.parse_set(),
            TokenKind::Dot => {
                self.bump();
                Ok(Node::Class(ClassKind::Any))
            }
            TokenKind::Escape => {
                let c = escaped_char(self.current_text());
                self.bump();
                Ok(match class_escape(c) {
                    Some(class) => Node::Class(class),
                    None => Node::Literal(control_escape(c)),
                })
            }
            TokenKind::Char | TokenKind::Dash | TokenKind::SetClose => {
                let c = first_char(self.current_text());
                self.bump();
                Ok(Node::Literal(c))
            }
            TokenKind::Star | TokenKind::Plus | TokenKind::Question | TokenKind::Braces => {
                Err(self.error(DiagnosticKind::NothingToRepeat, span))
            }
            TokenKind::Garbage => Err(self.error(DiagnosticKind::DanglingBackslash, span)),
            TokenKind::ParenClose | TokenKind::Pipe | TokenKind::Caret | TokenKind::Dollar => {
                unreachable!("parse_atom: {kind:?} is handled by the sequence rule")
            }
        }
    }

    /// `(` pattern `)` | `(?:` pattern `)`
    fn parse_group(&mut self) -> PResult<Node> {
        let open = self.current_span();
        let capture = if self.at(TokenKind::ParenOpen) {
            self.last_group += 1;
            Some(self.last_group)
        } else {
            None
        };
        self.bump();

        self.enter_recursion()?;
        let body = self.parse_alternation()?;
        self.exit_recursion();

        if !self.at(TokenKind::ParenClose) {
            return Err(self.error(DiagnosticKind::UnclosedGroup, open));
        }
        self.bump();

        Ok(Node::Group(Box::new(Group { body, capture })))
    }

    /// `[` items `]` | `[^` items `]`
    ///
    /// Inside a set only `]`, `-` and escapes are special; every other
    /// token is read back as the characters it was lexed from.
    fn parse_set(&mut self) -> PResult<Node> {
        let open = self.current_span();
        let negated = self.at(TokenKind::SetNegatedOpen);
        self.bump();

        let mut atoms: Vec<(SetAtom, Range<usize>)> = Vec::new();
        loop {
            let span = self.current_span();
            match self.current() {
                None => return Err(self.error(DiagnosticKind::UnclosedSet, open)),
                Some(TokenKind::SetClose) => {
                    self.bump();
                    break;
                }
                Some(TokenKind::Dash) => atoms.push((SetAtom::Dash, span)),
                Some(TokenKind::Escape) => {
                    let c = escaped_char(self.current_text());
                    let atom = match class_escape(c) {
                        Some(class) => SetAtom::Class(class),
                        None => SetAtom::Char(control_escape(c)),
                    };
                    atoms.push((atom, span));
                }
                Some(TokenKind::Garbage) => {
                    return Err(self.error(DiagnosticKind::DanglingBackslash, span));
                }
                Some(_) => {
                    for (offset, c) in self.current_text().char_indices() {
                        let start = span.start + offset;
                        atoms.push((SetAtom::Char(c), start..start + c.len_utf8()));
                    }
                }
            }
            self.bump();
        }

        let items = self.assemble_set(&atoms)?;
        Ok(Node::Set(CharGroup { negated, items }))
    }

    /// Joins `a - b` triples into ranges; a dash anywhere else is literal.
    fn assemble_set(&self, atoms: &[(SetAtom, Range<usize>)]) -> PResult<Vec<SetItem>> {
        let mut items = Vec::with_capacity(atoms.len());
        let mut i = 0;
        while i < atoms.len() {
            let (atom, span) = &atoms[i];
            if let (SetAtom::Char(lo), Some((SetAtom::Dash, _)), Some((SetAtom::Char(hi), hi_span))) =
                (atom, atoms.get(i + 1), atoms.get(i + 2))
            {
                let range = span.start..hi_span.end;
                if lo > hi {
                    return Err(self.error(DiagnosticKind::RangeOutOfOrder, range));
                }
                if !hi.is_ascii() {
                    return Err(self.error(DiagnosticKind::NonAsciiInSet, range));
                }
                items.push(SetItem::Range(*lo, *hi));
                i += 3;
                continue;
            }

            items.push(match atom {
                SetAtom::Char(c) if !c.is_ascii() => {
                    return Err(self.error(DiagnosticKind::NonAsciiInSet, span.clone()));
                }
                SetAtom::Char(c) => SetItem::Literal(*c),
                SetAtom::Class(class) => SetItem::Class(*class),
                SetAtom::Dash => SetItem::Literal('-'),
            });
            i += 1;
        }
        Ok(items)
    }
}

fn first_char(text: &str) -> char {
    text.chars().next().unwrap_or_default()
}

/// The character after the backslash of an `Escape` token.
fn escaped_char(text: &str) -> char {
    text.chars().nth(1).unwrap_or_default()
}

fn class_escape(c: char) -> Option<ClassKind> {
    match c {
        'd' | 'D' | 's' | 'S' | 'w' | 'W' => ClassKind::from_letter(c),
        _ => None,
    }
}

/// `\f \n \r \t \v` map to control characters; anything else stands for itself.
fn control_escape(c: char) -> char {
    match c {
        'f' => '\x0c',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0b',
        other => other,
    }
}
