//! Backtracking executor for nfarex automata.
//!
//! This crate provides the virtual machine that runs a compiled or loaded
//! automaton against text, producing paths, matches and substitutions.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

#[cfg(test)]
mod test_utils;

// Re-export commonly used items at crate root
pub use engine::{
    Frame, FuelLimits, Match, NoopTracer, Path, PrintTracer, RuntimeError, Template, Tracer, VM,
    VMBuilder, Verbosity,
};
