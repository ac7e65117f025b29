//! Parse diagnostics and their rendering.

mod printer;


use std::fmt;
use std::ops::Range;

pub use printer::DiagnosticsPrinter;

/// Diagnostic kinds, each with a default message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    // Delimiters left open at end of input
    UnclosedGroup,
    UnclosedSet,

    UnmatchedParen,
    NothingToRepeat,
    DanglingBackslash,

    // Valid syntax, invalid values
    BoundsOutOfOrder,
    BoundTooLarge,
    RangeOutOfOrder,
    NonAsciiInSet,
}

impl DiagnosticKind {
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::UnclosedGroup => "missing closing `)`",
            Self::UnclosedSet => "missing closing `]`",
            Self::UnmatchedParen => "unmatched `)`",
            Self::NothingToRepeat => "quantifier has nothing to repeat",
            Self::DanglingBackslash => "pattern ends with a lone `\\`",
            Self::BoundsOutOfOrder => "quantifier bounds out of order",
            Self::BoundTooLarge => "quantifier bound exceeds 1000",
            Self::RangeOutOfOrder => "character range out of order",
            Self::NonAsciiInSet => "character sets only hold ASCII characters",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub range: Range<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, range: Range<usize>) -> Self {
        Self {
            kind,
            range,
            message: kind.default_message().to_string(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            self.range.start, self.range.end, self.message
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.messages.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Every diagnostic is an error; patterns have no warnings.
    pub fn error_count(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter()
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            messages: vec![diagnostic],
        }
    }
}
