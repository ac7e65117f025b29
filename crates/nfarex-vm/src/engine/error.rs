//! Errors that can occur during execution.
//!
//! A search that finds no match is not an error; it yields a rejected `Path`.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Execution fuel exhausted (too many frames popped in one search).
    #[error("runtime execution limit of {0} steps exceeded")]
    ExecFuelExhausted(u32),

    /// Too many pending frames on the backtracking stack.
    #[error("backtracking stack limit of {0} frames exceeded")]
    StackLimitExceeded(u32),
}
