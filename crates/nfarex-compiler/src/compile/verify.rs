//! Debug-only structural checks on freshly compiled automata.
//!
//! Zero-cost in release builds.

#[cfg(debug_assertions)]
use nfarex_automaton::Automaton;

/// Panics when the compiler produced a malformed automaton.
#[cfg(debug_assertions)]
pub(super) fn debug_verify(automaton: &Automaton) {
    let dangling = automaton.dangling_ids();
    assert!(
        dangling.is_empty(),
        "compiler emitted edges to missing states: {dangling:?}"
    );
    assert!(
        !automaton.finals().is_empty(),
        "compiled automaton has no final state"
    );

    let count = automaton.state_count();
    for (index, spans) in automaton.groups() {
        for span in spans {
            assert!(
                span.entry.index() < count && span.exit.index() < count,
                "group {index} span {span:?} points past {count} states"
            );
        }
    }
}
