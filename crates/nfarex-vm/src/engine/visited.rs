//! Per-search record of `(state, offset)` pairs entered through epsilon edges.
//!
//! One set per state, allocated fresh for every search so concurrent
//! searches over the same automaton never share it.

use std::collections::HashSet;

use nfarex_automaton::StateId;

#[derive(Debug)]
pub(crate) struct Visited {
    offsets: Vec<HashSet<usize>>,
}

impl Visited {
    pub fn new(state_count: usize) -> Self {
        Self {
            offsets: vec![HashSet::new(); state_count],
        }
    }

    /// Record the pair; `false` when it was already recorded.
    #[inline]
    pub fn insert(&mut self, state: StateId, offset: usize) -> bool {
        self.offsets[state.index()].insert(offset)
    }
}
