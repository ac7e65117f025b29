//! Automaton model for nfarex.
//!
//! This crate contains:
//! - the state/transition graph produced by the compiler (`Automaton`)
//! - `AutomatonBuilder`, which makes transition priority an explicit parameter
//! - the line-based textual format (`Automaton::from_text`) and `dump`

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod automaton;
mod builder;
mod charset;
mod dump;
mod flags;
mod ids;
mod load;
mod transition;

#[cfg(test)]
mod charset_tests;
#[cfg(test)]
mod load_tests;

pub use automaton::{Automaton, GroupSpan, State};
pub use builder::{AutomatonBuilder, Priority};
pub use charset::CharSet;
pub use dump::dump;
pub use flags::{Flags, UnknownFlag};
pub use ids::StateId;
pub use load::LoadError;
pub use transition::{Anchor, Transition, TransitionKind};

pub use nfarex_core::ClassKind;
