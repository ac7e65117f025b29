//! Line-based textual automaton format.
//!
//! ```text
//! type: nfa
//! states: 3
//! final: 2
//! rules:
//! 0->1 a b
//! 1->2 \e
//! ```
//!
//! `states` must come before `final` and `rules`. Labels on one rule line, and
//! rule lines for the same source state, are listed in priority order.
//! Lines starting with `#` are comments.

use nfarex_core::ClassKind;

use crate::automaton::Automaton;
use crate::builder::{AutomatonBuilder, Priority};
use crate::flags::Flags;
use crate::ids::StateId;
use crate::transition::{Anchor, TransitionKind};

/// Malformed textual automaton. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("line {line}: unsupported automaton type `{found}`")]
    UnsupportedType { line: usize, found: String },

    #[error("line {line}: invalid state count `{text}`")]
    InvalidStateCount { line: usize, text: String },

    #[error("line {line}: `states` must precede `final` and `rules`")]
    StatesNotDeclared { line: usize },

    #[error("line {line}: state {id} is out of range (0..{count})")]
    StateOutOfRange { line: usize, id: u64, count: usize },

    #[error("line {line}: cannot parse `{text}`")]
    Malformed { line: usize, text: String },

    #[error("line {line}: unknown label `{label}`")]
    UnknownLabel { line: usize, label: String },

    #[error("missing `states` declaration")]
    Empty,
}

impl Automaton {
    /// Parse the textual format. The result carries default [`Flags`].
    pub fn from_text(text: &str) -> Result<Automaton, LoadError> {
        Loader::default().run(text)
    }
}

#[derive(Default)]
struct Loader {
    builder: Option<AutomatonBuilder>,
    in_rules: bool,
}

impl Loader {
    fn run(mut self, text: &str) -> Result<Automaton, LoadError> {
        for (i, raw) in text.lines().enumerate() {
            let line = i + 1;
            let content = raw.strip_suffix('\r').unwrap_or(raw);
            if content.trim().is_empty() || content.starts_with('#') {
                continue;
            }
            self.line(line, content)?;
        }
        self.builder.map(|b| b.build()).ok_or(LoadError::Empty)
    }

    fn line(&mut self, line: usize, content: &str) -> Result<(), LoadError> {
        if let Some(rest) = content.strip_prefix("type:") {
            let found = rest.trim();
            if found != "nfa" {
                return Err(LoadError::UnsupportedType {
                    line,
                    found: found.to_string(),
                });
            }
            return Ok(());
        }

        if let Some(rest) = content.strip_prefix("states:") {
            let count = rest
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| LoadError::InvalidStateCount {
                    line,
                    text: rest.trim().to_string(),
                })?;
            self.builder = Some(AutomatonBuilder::with_states(count, Flags::default()));
            self.in_rules = false;
            return Ok(());
        }

        if let Some(rest) = content.strip_prefix("final:") {
            let builder = self.declared(line)?;
            for token in rest.split_whitespace() {
                let id = parse_state(builder, line, token)?;
                builder.set_final(id);
            }
            self.in_rules = false;
            return Ok(());
        }

        if content.starts_with("rules:") {
            self.declared(line)?;
            self.in_rules = true;
            return Ok(());
        }

        if self.in_rules {
            let builder = self.declared(line)?;
            return parse_rule(builder, line, content);
        }

        Err(LoadError::Malformed {
            line,
            text: content.to_string(),
        })
    }

    fn declared(&mut self, line: usize) -> Result<&mut AutomatonBuilder, LoadError> {
        self.builder
            .as_mut()
            .ok_or(LoadError::StatesNotDeclared { line })
    }
}

fn parse_state(builder: &AutomatonBuilder, line: usize, token: &str) -> Result<StateId, LoadError> {
    let id = token.trim().parse::<u64>().map_err(|_| LoadError::Malformed {
        line,
        text: token.to_string(),
    })?;
    let count = builder.state_count();
    if id >= count as u64 {
        return Err(LoadError::StateOutOfRange { line, id, count });
    }
    Ok(StateId(id as u32))
}

/// `<src>-><dst> <label> <label> ...`
fn parse_rule(builder: &mut AutomatonBuilder, line: usize, content: &str) -> Result<(), LoadError> {
    let malformed = || LoadError::Malformed {
        line,
        text: content.to_string(),
    };

    let (src, rest) = content.split_once("->").ok_or_else(malformed)?;
    let (dst, labels) = match rest.split_once(' ') {
        Some((dst, labels)) => (dst, labels),
        None => (rest, ""),
    };
    if src.is_empty() || dst.is_empty() {
        return Err(malformed());
    }
    let from = parse_state(builder, line, src)?;
    let to = parse_state(builder, line, dst)?;

    if labels.is_empty() {
        builder.add_epsilon(from, to, Priority::Last);
        return Ok(());
    }

    let mut rest = labels;
    while !rest.is_empty() {
        // A leading space is itself the label; it must be followed by a
        // separator or the end of the line.
        let len = match rest.find(' ') {
            Some(0) => {
                if rest.len() > 1 && !rest[1..].starts_with(' ') {
                    return Err(malformed());
                }
                1
            }
            Some(p) => p,
            None => rest.len(),
        };
        let kind = parse_label(line, &rest[..len])?;
        builder.add_transition(from, kind, to, Priority::Last);
        rest = &rest[(len + 1).min(rest.len())..];
    }
    Ok(())
}

fn parse_label(line: usize, label: &str) -> Result<TransitionKind, LoadError> {
    let unknown = || LoadError::UnknownLabel {
        line,
        label: label.to_string(),
    };
    let chars: Vec<char> = label.chars().collect();
    match chars.as_slice() {
        [c] => Ok(TransitionKind::Literal(*c)),
        ['\\', 'e'] => Ok(TransitionKind::Epsilon(None)),
        ['\\', '^'] => Ok(TransitionKind::Epsilon(Some(Anchor::Start))),
        ['\\', '$'] => Ok(TransitionKind::Epsilon(Some(Anchor::End))),
        ['\\', 'b'] => Ok(TransitionKind::Epsilon(Some(Anchor::WordBoundary))),
        ['\\', 'B'] => Ok(TransitionKind::Epsilon(Some(Anchor::NotWordBoundary))),
        ['\\', letter] => ClassKind::from_letter(*letter)
            .map(TransitionKind::Class)
            .ok_or_else(unknown),
        [lo, '-', hi] if lo <= hi => Ok(TransitionKind::Range(*lo, *hi)),
        _ => Err(unknown()),
    }
}
