//! Transition labels.

use nfarex_core::{ClassKind, char_at, char_before, is_word};
use serde::{Deserialize, Serialize};

use crate::charset::CharSet;
use crate::ids::StateId;

/// Zero-width condition attached to an epsilon edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    /// `^`
    Start,
    /// `$`
    End,
    /// `\b`
    WordBoundary,
    /// `\B`
    NotWordBoundary,
}

impl Anchor {
    /// Evaluate the anchor at `offset` by peeking one character either side.
    pub fn holds(self, text: &str, offset: usize, multiline: bool) -> bool {
        match self {
            Anchor::Start => {
                offset == 0 || (multiline && char_before(text, offset) == Some('\n'))
            }
            Anchor::End => {
                offset == text.len() || (multiline && char_at(text, offset) == Some('\n'))
            }
            Anchor::WordBoundary => at_word_boundary(text, offset),
            Anchor::NotWordBoundary => !at_word_boundary(text, offset),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Anchor::Start => "^",
            Anchor::End => "$",
            Anchor::WordBoundary => "b",
            Anchor::NotWordBoundary => "B",
        }
    }
}

fn at_word_boundary(text: &str, offset: usize) -> bool {
    let before = char_before(text, offset).is_some_and(is_word);
    let after = char_at(text, offset).is_some_and(is_word);
    before != after
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Consumes nothing; gated by the anchor if present.
    Epsilon(Option<Anchor>),
    Literal(char),
    /// Inclusive range.
    Range(char, char),
    Class(ClassKind),
    Set(CharSet),
}

impl TransitionKind {
    pub fn is_epsilon(&self) -> bool {
        matches!(self, TransitionKind::Epsilon(_))
    }

    /// Whether a consuming label accepts `c`. Always false for epsilon edges.
    pub fn accepts(&self, c: char, dotall: bool) -> bool {
        match self {
            TransitionKind::Epsilon(_) => false,
            TransitionKind::Literal(l) => *l == c,
            TransitionKind::Range(lo, hi) => (*lo..=*hi).contains(&c),
            TransitionKind::Class(class) => class.matches(c, dotall),
            TransitionKind::Set(set) => set.contains(c),
        }
    }
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionKind::Epsilon(None) => f.write_str("\\e"),
            TransitionKind::Epsilon(Some(anchor)) => write!(f, "\\{}", anchor.symbol()),
            TransitionKind::Literal(c) => write!(f, "{c}"),
            TransitionKind::Range(lo, hi) => write!(f, "{lo}-{hi}"),
            TransitionKind::Class(class) => write!(f, "\\{}", class.letter()),
            TransitionKind::Set(set) => write!(f, "{set}"),
        }
    }
}

/// Directed, labeled edge.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub kind: TransitionKind,
    pub target: StateId,
}

impl Transition {
    pub fn new(kind: TransitionKind, target: StateId) -> Self {
        Self { kind, target }
    }

    pub fn epsilon(target: StateId) -> Self {
        Self::new(TransitionKind::Epsilon(None), target)
    }
}
