//! Incremental construction with explicit edge priority.
//!
//! The executor explores a state's edges in list order, so where an edge is
//! inserted decides when it is tried. Every insertion names its [`Priority`].

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::automaton::{Automaton, GroupSpan, State};
use crate::flags::Flags;
use crate::ids::StateId;
use crate::transition::{Transition, TransitionKind};

/// Where a new edge lands in its source state's priority list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    /// Tried before every edge already present.
    First,
    /// Tried after every edge already present.
    Last,
}

#[derive(Debug)]
pub struct AutomatonBuilder {
    states: Vec<State>,
    finals: BTreeSet<StateId>,
    group_spans: IndexMap<u32, Vec<GroupSpan>>,
    flags: Flags,
}

impl AutomatonBuilder {
    /// Start with a single state, the start state.
    pub fn new(flags: Flags) -> Self {
        Self {
            states: vec![State::default()],
            finals: BTreeSet::new(),
            group_spans: IndexMap::new(),
            flags,
        }
    }

    /// Start with `count` states (at least one).
    pub fn with_states(count: usize, flags: Flags) -> Self {
        let mut builder = Self::new(flags);
        builder
            .states
            .resize_with(count.max(1), State::default);
        builder
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn add_state(&mut self) -> StateId {
        let id = StateId(self.states.len() as u32);
        self.states.push(State::default());
        id
    }

    pub fn add_transition(
        &mut self,
        from: StateId,
        kind: TransitionKind,
        to: StateId,
        priority: Priority,
    ) {
        let edges = &mut self.states[from.index()].transitions;
        let transition = Transition::new(kind, to);
        match priority {
            Priority::First => edges.insert(0, transition),
            Priority::Last => edges.push(transition),
        }
    }

    pub fn add_epsilon(&mut self, from: StateId, to: StateId, priority: Priority) {
        self.add_transition(from, TransitionKind::Epsilon(None), to, priority);
    }

    pub fn transitions(&self, id: StateId) -> &[Transition] {
        &self.states[id.index()].transitions
    }

    pub fn set_final(&mut self, id: StateId) {
        self.finals.insert(id);
    }

    /// Make sure `index` has an entry even if no occurrence gets compiled.
    pub fn declare_group(&mut self, index: u32) {
        self.group_spans.entry(index).or_default();
    }

    pub fn add_group_span(&mut self, index: u32, span: GroupSpan) {
        self.group_spans.entry(index).or_default().push(span);
    }

    pub fn build(mut self) -> Automaton {
        self.group_spans.sort_keys();
        Automaton {
            states: self.states,
            finals: self.finals,
            group_spans: self.group_spans,
            flags: self.flags,
        }
    }
}
