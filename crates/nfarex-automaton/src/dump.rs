//! Human-readable dump in the textual automaton format.
//!
//! Flags and group spans are emitted as `#` comments, so the output of an
//! automaton without character sets loads back with `Automaton::from_text`.

use std::fmt::Write as _;

use nfarex_core::Colors;

use crate::automaton::Automaton;
use crate::transition::TransitionKind;

pub fn dump(automaton: &Automaton, colors: Colors) -> String {
    let mut out = String::new();
    let c = &colors;

    let flags = automaton.flags();
    if flags != Default::default() {
        writeln!(out, "{}# flags: {flags}{}", c.dim, c.reset).unwrap();
    }

    for (index, spans) in automaton.groups() {
        let spans: Vec<String> = spans
            .iter()
            .map(|s| format!("{}-{}", s.entry, s.exit))
            .collect();
        let spans = if spans.is_empty() {
            "(none)".to_string()
        } else {
            spans.join(" ")
        };
        writeln!(out, "{}# group {index}: {spans}{}", c.dim, c.reset).unwrap();
    }

    writeln!(out, "states: {}", automaton.state_count()).unwrap();

    let finals: Vec<String> = automaton
        .finals()
        .iter()
        .map(|id| format!("{}{id}{}", c.blue, c.reset))
        .collect();
    writeln!(out, "final: {}", finals.join(" ")).unwrap();

    out.push_str("rules:\n");
    for (from, state) in automaton.states() {
        for t in state.transitions() {
            let label = match &t.kind {
                TransitionKind::Epsilon(_) => format!("{}{}{}", c.dim, t.kind, c.reset),
                kind => format!("{}{kind}{}", c.green, c.reset),
            };
            writeln!(
                out,
                "{}{from}{}->{}{}{} {label}",
                c.blue, c.reset, c.blue, t.target, c.reset
            )
            .unwrap();
        }
    }

    out
}
