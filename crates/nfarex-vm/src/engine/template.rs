//! Replacement templates.
//!
//! Scanned left to right:
//! - `$$` is a literal `$`
//! - `$` followed by digits is the group with that index (the longest run of
//!   digits is taken); `$0` is the whole match
//! - any other `$` is literal
//!
//! A reference to a group the pattern does not have expands to nothing.

use super::captures::Match;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Piece<'a> {
    Literal(&'a str),
    /// `None` when the index does not fit in `usize`.
    Group(Option<usize>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template<'a> {
    pieces: Vec<Piece<'a>>,
}

impl<'a> Template<'a> {
    pub fn parse(source: &'a str) -> Self {
        let bytes = source.as_bytes();
        let mut pieces = Vec::new();
        let mut literal_start = 0;
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] != b'$' {
                i += 1;
                continue;
            }

            match bytes.get(i + 1) {
                Some(b'$') => {
                    // Keep the first `$`, drop the second.
                    pieces.push(Piece::Literal(&source[literal_start..i + 1]));
                    i += 2;
                    literal_start = i;
                }
                Some(b) if b.is_ascii_digit() => {
                    pieces.push(Piece::Literal(&source[literal_start..i]));
                    let digits_start = i + 1;
                    let mut end = digits_start;
                    while end < bytes.len() && bytes[end].is_ascii_digit() {
                        end += 1;
                    }
                    pieces.push(Piece::Group(source[digits_start..end].parse().ok()));
                    i = end;
                    literal_start = i;
                }
                _ => i += 1,
            }
        }
        pieces.push(Piece::Literal(&source[literal_start..]));
        pieces.retain(|p| !matches!(p, Piece::Literal("")));

        Self { pieces }
    }

    /// Whether expansion never depends on the match.
    pub fn is_literal(&self) -> bool {
        self.pieces.iter().all(|p| matches!(p, Piece::Literal(_)))
    }

    pub fn expand(&self, m: &Match<'_>) -> String {
        let mut out = String::new();
        self.expand_into(m, &mut out);
        out
    }

    pub fn expand_into(&self, m: &Match<'_>, out: &mut String) {
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Group(Some(index)) => out.push_str(m.group(*index).unwrap_or("")),
                Piece::Group(None) => {}
            }
        }
    }
}
