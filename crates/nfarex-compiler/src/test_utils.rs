//! Test helpers shared by the parser and compiler tests.

use nfarex_automaton::{Flags, dump};
use nfarex_core::Colors;

use crate::diagnostics::Diagnostic;
use crate::{Error, compile, parse};

/// Parse `source` and render the tree.
pub fn ast(source: &str) -> String {
    match parse(source) {
        Ok(node) => node.dump(),
        Err(err) => panic!("expected {source:?} to parse, got {err}"),
    }
}

/// Parse `source`, expecting exactly one diagnostic.
pub fn parse_error(source: &str) -> Diagnostic {
    match parse(source) {
        Err(Error::ParseError(diagnostics)) => {
            assert_eq!(diagnostics.len(), 1, "{diagnostics:?}");
            diagnostics.iter().next().cloned().unwrap()
        }
        other => panic!("expected a parse error for {source:?}, got {other:?}"),
    }
}

/// Parse and compile `source`, then dump the automaton without colors.
pub fn automaton(source: &str, flags: Flags) -> String {
    let tree = parse(source).unwrap();
    let automaton = compile(&tree, flags).unwrap();
    dump(&automaton, Colors::OFF)
}
