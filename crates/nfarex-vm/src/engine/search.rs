//! Scanning searches built on `VM::exec`.

use super::captures::Match;
use super::error::RuntimeError;
use super::template::Template;
use super::trace::{NoopTracer, Tracer};
use super::vm::VM;

/// First char boundary strictly after `offset`.
fn next_boundary(text: &str, offset: usize) -> usize {
    let mut next = offset + 1;
    while next < text.len() && !text.is_char_boundary(next) {
        next += 1;
    }
    next
}

impl<'a> VM<'a> {
    /// Leftmost match, trying start offsets from 0.
    pub fn find<'t>(&self, text: &'t str) -> Result<Option<Match<'t>>, RuntimeError> {
        self.find_at(text, 0)
    }

    /// Leftmost match at or after `start`.
    pub fn find_at<'t>(
        &self,
        text: &'t str,
        start: usize,
    ) -> Result<Option<Match<'t>>, RuntimeError> {
        self.find_at_with(text, start, &mut NoopTracer)
    }

    /// Like `find_at`, reporting every attempted offset to `tracer`.
    ///
    /// Start offsets run over `start..text.len()`; the end of the text is
    /// never tried as a start, so empty text has no matches.
    pub fn find_at_with<'t, T: Tracer>(
        &self,
        text: &'t str,
        start: usize,
        tracer: &mut T,
    ) -> Result<Option<Match<'t>>, RuntimeError> {
        let mut offset = start;
        while offset < text.len() && !text.is_char_boundary(offset) {
            offset += 1;
        }

        while offset < text.len() {
            let path = self.exec_with(text, offset, tracer)?;
            if let Some(m) = Match::from_path(&path, self.automaton) {
                return Ok(Some(m));
            }
            offset = next_boundary(text, offset);
        }
        Ok(None)
    }

    /// Successive non-overlapping matches, left to right.
    ///
    /// Scanning resumes at the end of each match; after an empty match it
    /// resumes one character later.
    pub fn find_all<'t>(&self, text: &'t str) -> Result<Vec<Match<'t>>, RuntimeError> {
        let mut matches = Vec::new();
        let mut offset = 0;
        while let Some(m) = self.find_at(text, offset)? {
            offset = if m.end() > m.start() {
                m.end()
            } else {
                next_boundary(text, m.end())
            };
            matches.push(m);
        }
        Ok(matches)
    }

    /// Replace every match found by `find_all` with the expanded template.
    ///
    /// Replacements are spliced from the last match to the first so the
    /// offsets of earlier matches stay valid.
    pub fn replace_all(&self, text: &str, template: &str) -> Result<String, RuntimeError> {
        let template = Template::parse(template);
        let matches = self.find_all(text)?;

        let mut out = text.to_string();
        for m in matches.iter().rev() {
            out.replace_range(m.range(), &template.expand(m));
        }
        Ok(out)
    }
}
