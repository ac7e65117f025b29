//! Core data structures shared by the nfarex crates.
//!
//! - `ClassKind`: named character predicates (`\d`, `\w`, `.`, ...)
//! - text helpers for stepping through UTF-8 text by byte offset
//! - `Colors`: ANSI palette used by dumps and traces

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod class;
mod colors;
mod text;


pub use class::{ClassKind, is_digit, is_space, is_word};
pub use colors::Colors;
pub use text::{char_at, char_before, escape_char};
