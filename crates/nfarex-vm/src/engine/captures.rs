//! Capture extraction from an accepting path.

use std::ops::Range;

use nfarex_automaton::{Automaton, GroupSpan};

use super::path::Path;

/// One match: the whole span plus one optional span per capture group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match<'t> {
    text: &'t str,
    /// Slot 0 is the whole match; slot `i` is group `i`.
    spans: Vec<Option<Range<usize>>>,
}

#[allow(clippy::len_without_is_empty)]
impl<'t> Match<'t> {
    /// Build a match from an accepting path. Returns `None` for a rejection.
    pub fn from_path(path: &Path<'t>, automaton: &Automaton) -> Option<Self> {
        let whole = path.start()?..path.end()?;
        let mut spans = Vec::with_capacity(automaton.group_count() + 1);
        spans.push(Some(whole));
        for index in 1..=automaton.group_count() as u32 {
            spans.push(locate(path, automaton.group_spans(index)));
        }
        Some(Self {
            text: path.text(),
            spans,
        })
    }

    pub fn start(&self) -> usize {
        self.range().start
    }

    pub fn end(&self) -> usize {
        self.range().end
    }

    pub fn range(&self) -> Range<usize> {
        self.spans[0].clone().unwrap_or_default()
    }

    pub fn as_str(&self) -> &'t str {
        &self.text[self.range()]
    }

    /// Text of group `index` (0 is the whole match). `None` when the group
    /// did not take part in the match or does not exist.
    pub fn group(&self, index: usize) -> Option<&'t str> {
        let span = self.spans.get(index)?.clone()?;
        Some(&self.text[span])
    }

    /// Byte range of group `index`.
    pub fn span(&self, index: usize) -> Option<Range<usize>> {
        self.spans.get(index)?.clone()
    }

    /// Every group in order, starting with the whole match.
    pub fn groups(&self) -> impl Iterator<Item = Option<&'t str>> + '_ {
        (0..self.spans.len()).map(|i| self.group(i))
    }

    /// Number of slots, counting the whole match.
    pub fn len(&self) -> usize {
        self.spans.len()
    }
}

/// The latest compiled occurrence whose entry appears in the path, paired
/// with the first exit after that entry.
fn locate(path: &Path<'_>, spans: &[GroupSpan]) -> Option<Range<usize>> {
    let offsets = path.offsets();
    spans.iter().rev().find_map(|span| {
        let entry = path.rposition(span.entry)?;
        let exit = path.position_from(span.exit, entry)?;
        Some(offsets[entry]..offsets[exit])
    })
}
