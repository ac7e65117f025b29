//! Backtracking stack.
//!
//! Each frame is one pending configuration: a state, the text offset at
//! which it is entered, and its depth in the current path.

use nfarex_automaton::StateId;

use super::error::RuntimeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub state: StateId,
    /// Byte offset into the text.
    pub offset: usize,
    /// Position of this frame's state in the path.
    pub step: usize,
}

impl Frame {
    pub fn new(state: StateId, offset: usize, step: usize) -> Self {
        Self {
            state,
            offset,
            step,
        }
    }
}

/// LIFO stack with an optional size limit.
#[derive(Debug)]
pub(crate) struct FrameStack {
    frames: Vec<Frame>,
    limit: Option<u32>,
}

impl FrameStack {
    pub fn new(limit: Option<u32>) -> Self {
        Self {
            frames: Vec::new(),
            limit,
        }
    }

    pub fn push(&mut self, frame: Frame) -> Result<(), RuntimeError> {
        if let Some(limit) = self.limit
            && self.frames.len() >= limit as usize
        {
            return Err(RuntimeError::StackLimitExceeded(limit));
        }
        self.frames.push(frame);
        Ok(())
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }
}
