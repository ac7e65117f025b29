//! Result of a single search.

use nfarex_automaton::StateId;

/// The states visited by an accepting search, with the offset at which each
/// was entered. Between two consecutive states lies the consumed text:
/// empty for an epsilon hop, one character otherwise.
///
/// A rejected search is an empty path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<'t> {
    text: &'t str,
    states: Vec<StateId>,
    offsets: Vec<usize>,
}

impl<'t> Path<'t> {
    /// The rejection sentinel.
    pub fn reject(text: &'t str) -> Self {
        Self {
            text,
            states: Vec::new(),
            offsets: Vec::new(),
        }
    }

    pub(crate) fn from_trail(text: &'t str, trail: &[(StateId, usize)]) -> Self {
        let (states, offsets) = trail.iter().copied().unzip();
        Self {
            text,
            states,
            offsets,
        }
    }

    /// The searched text.
    pub fn text(&self) -> &'t str {
        self.text
    }

    pub fn is_reject(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[StateId] {
        &self.states
    }

    /// Offset at which each state in `states()` was entered.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Text consumed by each hop; one entry fewer than `states()`.
    pub fn consumed(&self) -> Vec<&'t str> {
        self.offsets
            .windows(2)
            .map(|w| &self.text[w[0]..w[1]])
            .collect()
    }

    /// Offset of the first state, or `None` for a rejection.
    pub fn start(&self) -> Option<usize> {
        self.offsets.first().copied()
    }

    /// Offset of the accepting state, or `None` for a rejection.
    pub fn end(&self) -> Option<usize> {
        self.offsets.last().copied()
    }

    /// The matched text; empty for a rejection.
    pub fn as_str(&self) -> &'t str {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => &self.text[start..end],
            _ => "",
        }
    }

    /// Index of the last occurrence of `state`.
    pub(crate) fn rposition(&self, state: StateId) -> Option<usize> {
        self.states.iter().rposition(|&s| s == state)
    }

    /// Index of the first occurrence of `state` at or after `from`.
    pub(crate) fn position_from(&self, state: StateId, from: usize) -> Option<usize> {
        self.states[from..]
            .iter()
            .position(|&s| s == state)
            .map(|i| from + i)
    }
}
