//! Errors raised while lowering a syntax tree.
//!
//! Parsed patterns are already checked for most of these; they matter for
//! trees built by hand.

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("alternation has no branches")]
    EmptyAlternation,

    #[error("quantifier bounds out of order: {{{min},{max}}}")]
    BoundsOutOfOrder { min: u32, max: u32 },

    #[error("character range out of order: {lo:?}-{hi:?}")]
    RangeOutOfOrder { lo: char, hi: char },

    #[error("character {0:?} cannot appear in a character set")]
    UnsupportedSetMember(char),

    #[error("capture group indices start at 1")]
    ZeroGroupIndex,

    #[error("counted repetition needs more than {limit} states")]
    TooManyStates { limit: usize },
}

pub type CompileResult<T> = Result<T, CompileError>;
