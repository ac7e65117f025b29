//! Runtime engine for executing automata.
//!
//! `VM::exec` runs one anchored search from a start offset and yields a
//! `Path`; `find`, `find_all` and `replace_all` scan the text by calling it
//! at successive offsets.

mod captures;
mod error;
mod frame;
mod path;
mod search;
mod template;
mod trace;
mod visited;
mod vm;

#[cfg(test)]
mod template_tests;

pub use captures::Match;
pub use error::RuntimeError;
pub use frame::Frame;
pub use path::Path;
pub use template::Template;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use vm::{FuelLimits, VM, VMBuilder};
