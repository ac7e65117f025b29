//! Membership table for bracketed character sets.
//!
//! The table has 129 slots: one per 7-bit ASCII character plus one slot that
//! stands for every non-ASCII character. Items are applied by toggling, so an
//! item listed twice cancels itself; group negation is applied on lookup.

use nfarex_core::ClassKind;
use serde::{Deserialize, Serialize};

/// Number of table slots, including the shared non-ASCII slot.
pub const SLOTS: usize = 129;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharSet {
    ascii: [u64; 2],
    other: bool,
    negated: bool,
}

impl CharSet {
    pub fn new(negated: bool) -> Self {
        Self {
            ascii: [0; 2],
            other: false,
            negated,
        }
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Flip one ASCII slot. Returns `false` for characters outside the table.
    pub fn toggle(&mut self, c: char) -> bool {
        if !c.is_ascii() {
            return false;
        }
        let slot = c as usize;
        self.ascii[slot / 64] ^= 1 << (slot % 64);
        true
    }

    /// Flip every slot in `lo..=hi`. Both ends must be ASCII.
    pub fn toggle_range(&mut self, lo: char, hi: char) -> bool {
        if !lo.is_ascii() || !hi.is_ascii() {
            return false;
        }
        for b in (lo as u8)..=(hi as u8) {
            self.toggle(b as char);
        }
        true
    }

    /// Flip every slot whose characters satisfy `class`.
    pub fn toggle_class(&mut self, class: ClassKind) {
        for b in 0u8..128 {
            if class.matches(b as char, false) {
                self.toggle(b as char);
            }
        }
        // All non-ASCII characters are non-digit, non-space and non-word.
        if class.is_negated() || class == ClassKind::Any {
            self.other = !self.other;
        }
    }

    /// Raw table lookup, before negation.
    pub fn in_table(&self, c: char) -> bool {
        if c.is_ascii() {
            let slot = c as usize;
            self.ascii[slot / 64] & (1 << (slot % 64)) != 0
        } else {
            self.other
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.in_table(c) != self.negated
    }

    /// Whether the shared non-ASCII slot is set.
    pub fn has_other(&self) -> bool {
        self.other
    }

    /// ASCII runs set in the table, as inclusive ranges.
    pub fn ranges(&self) -> Vec<(char, char)> {
        let mut out = Vec::new();
        let mut run: Option<(u8, u8)> = None;
        for b in 0u8..128 {
            if self.in_table(b as char) {
                run = Some(match run {
                    Some((lo, _)) => (lo, b),
                    None => (b, b),
                });
            } else if let Some((lo, hi)) = run.take() {
                out.push((lo as char, hi as char));
            }
        }
        if let Some((lo, hi)) = run {
            out.push((lo as char, hi as char));
        }
        out
    }
}

impl std::fmt::Display for CharSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use nfarex_core::escape_char;

        f.write_str(if self.negated { "[^" } else { "[" })?;
        for (lo, hi) in self.ranges() {
            if lo == hi {
                write!(f, "{}", escape_char(lo))?;
            } else {
                write!(f, "{}-{}", escape_char(lo), escape_char(hi))?;
            }
        }
        if self.other {
            f.write_str("\\u{80}-\\u{10ffff}")?;
        }
        f.write_str("]")
    }
}
