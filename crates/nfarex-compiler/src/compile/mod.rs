//! Thompson-style construction of the automaton from the syntax tree.
//!
//! Every fragment is compiled from an entry state and returns its exit
//! state. Edge order encodes preference: the executor tries a state's
//! edges front to back, so greedy loops put the repeat edge first and
//! lazy loops put it last.
//!
//! # Module Organization
//!
//! - `compiler`: entry point, dispatch and capture groups
//! - `expressions`: literals, classes, sets and anchors
//! - `quantifier`: `?`, `*`, `+` and counted repetition
//! - `sequences`: sequence and alternation
//! - `verify`: debug-only structural checks

mod compiler;
mod error;
mod expressions;
mod quantifier;
mod sequences;
mod verify;

#[cfg(test)]
mod compile_tests;

pub use compiler::{Compiler, compile};
pub use error::{CompileError, CompileResult};
