//! Named character classes.

use serde::{Deserialize, Serialize};

/// `0-9`.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Space, form feed, newline, carriage return, tab, vertical tab.
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\x0c' | '\n' | '\r' | '\t' | '\x0b')
}

/// `[A-Za-z0-9_]`.
#[inline]
pub fn is_word(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// A character predicate addressed by a single letter (`\d`, `\W`, `.`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Digit,
    NotDigit,
    Space,
    NotSpace,
    Word,
    NotWord,
    /// `.`: everything except line terminators, unless dot-all is set.
    Any,
}

impl ClassKind {
    /// Resolve the letter following a backslash (`.` for `Any`).
    pub fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'd' => Self::Digit,
            'D' => Self::NotDigit,
            's' => Self::Space,
            'S' => Self::NotSpace,
            'w' => Self::Word,
            'W' => Self::NotWord,
            '.' => Self::Any,
            _ => return None,
        })
    }

    pub fn letter(self) -> char {
        match self {
            Self::Digit => 'd',
            Self::NotDigit => 'D',
            Self::Space => 's',
            Self::NotSpace => 'S',
            Self::Word => 'w',
            Self::NotWord => 'W',
            Self::Any => '.',
        }
    }

    /// Whether this class is the complement of a positive class.
    pub fn is_negated(self) -> bool {
        matches!(self, Self::NotDigit | Self::NotSpace | Self::NotWord)
    }

    pub fn matches(self, c: char, dotall: bool) -> bool {
        match self {
            Self::Digit => is_digit(c),
            Self::NotDigit => !is_digit(c),
            Self::Space => is_space(c),
            Self::NotSpace => !is_space(c),
            Self::Word => is_word(c),
            Self::NotWord => !is_word(c),
            Self::Any => dotall || !matches!(c, '\n' | '\r'),
        }
    }
}

impl std::fmt::Display for ClassKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => f.write_str("."),
            other => write!(f, "\\{}", other.letter()),
        }
    }
}
