//! nfarex compiler: pattern parser and automaton construction.
//!
//! This crate provides the compilation pipeline for patterns:
//! - `parser` - lexer and recursive-descent parser producing the syntax tree
//! - `ast` - the syntax tree consumed by the compiler
//! - `compile` - syntax tree to automaton
//! - `diagnostics` - error reporting

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod compile;
pub mod diagnostics;
pub mod parser;

#[cfg(test)]
pub mod test_utils;

pub use ast::Node;
pub use compile::{CompileError, Compiler, compile};
pub use diagnostics::{Diagnostic, Diagnostics, DiagnosticsPrinter};
pub use parser::{ParseConfig, parse, parse_with};

/// Errors that can occur while turning a pattern into an automaton.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Group nesting deeper than `ParseConfig::max_depth`.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("pattern parsing failed with {} errors", .0.error_count())]
    ParseError(Diagnostics),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

pub type Result<T> = std::result::Result<T, Error>;
