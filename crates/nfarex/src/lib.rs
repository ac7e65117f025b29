//! nfarex: backtracking regular expressions over an explicit NFA.
//!
//! Patterns are parsed, compiled into an automaton whose transition order
//! encodes match priority, and executed by a depth-first backtracking VM.
//!
//! # Example
//!
//! ```
//! use nfarex::Regex;
//!
//! let re = Regex::new(r"(\w+)@(\w+)").unwrap();
//! assert_eq!(re.replace_all("user@host", "$2:$1").unwrap(), "host:user");
//!
//! let m = re.find("mail: me@example").unwrap().unwrap();
//! assert_eq!(m.group(2), Some("example"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod regex;

#[cfg(test)]
mod regex_tests;

pub use regex::{Regex, RegexBuilder};

pub use nfarex_automaton::{Automaton, Flags, LoadError, UnknownFlag};
pub use nfarex_compiler::{Diagnostics, DiagnosticsPrinter, ParseConfig};
pub use nfarex_core::Colors;
pub use nfarex_vm::{FuelLimits, Match, Path, RuntimeError, Verbosity};

/// Errors from building or running a `Regex`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The pattern failed to parse or compile.
    #[error(transparent)]
    Pattern(#[from] nfarex_compiler::Error),

    /// A textual automaton failed to load.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A search ran out of fuel or stack.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    UnknownFlag(#[from] UnknownFlag),
}

/// Result type for regex operations.
pub type Result<T> = std::result::Result<T, Error>;
