//! The compiled state graph.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::flags::Flags;
use crate::ids::StateId;
use crate::transition::Transition;

/// A state and its outgoing edges.
///
/// Edge order is search priority: the executor explores `transitions[0]`
/// before `transitions[1]`, and so on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub(crate) transitions: Vec<Transition>,
}

impl State {
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }
}

/// Entry/exit states of one compiled occurrence of a capture group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupSpan {
    pub entry: StateId,
    pub exit: StateId,
}

impl GroupSpan {
    pub fn new(entry: StateId, exit: StateId) -> Self {
        Self { entry, exit }
    }
}

/// Immutable NFA: dense states, final set, capture spans and matching flags.
///
/// Built by [`crate::AutomatonBuilder`] or loaded with [`Automaton::from_text`].
/// State 0 is the start state. Every transition target is a valid state id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Automaton {
    pub(crate) states: Vec<State>,
    pub(crate) finals: BTreeSet<StateId>,
    /// Group index (1-based) → spans in compilation order.
    pub(crate) group_spans: IndexMap<u32, Vec<GroupSpan>>,
    pub(crate) flags: Flags,
}

impl Automaton {
    #[inline]
    pub fn start(&self) -> StateId {
        StateId::START
    }

    #[inline]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (StateId(i as u32), s))
    }

    #[inline]
    pub fn transitions(&self, id: StateId) -> &[Transition] {
        &self.states[id.index()].transitions
    }

    #[inline]
    pub fn is_final(&self, id: StateId) -> bool {
        self.finals.contains(&id)
    }

    pub fn finals(&self) -> &BTreeSet<StateId> {
        &self.finals
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Same graph, different matching modes.
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Highest capture group index, 0 when there are none.
    pub fn group_count(&self) -> usize {
        self.group_spans.keys().copied().max().unwrap_or(0) as usize
    }

    /// Spans of group `index` in compilation order; empty for unknown groups.
    pub fn group_spans(&self, index: u32) -> &[GroupSpan] {
        self.group_spans.get(&index).map_or(&[], |v| v.as_slice())
    }

    pub fn groups(&self) -> impl Iterator<Item = (u32, &[GroupSpan])> {
        self.group_spans.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    pub fn transition_count(&self) -> usize {
        self.states.iter().map(|s| s.transitions.len()).sum()
    }

    /// Ids referenced by edges, the final set or group spans that name no
    /// state. Empty for every well-formed automaton.
    pub fn dangling_ids(&self) -> Vec<StateId> {
        let n = self.states.len() as u32;
        let mut bad: BTreeSet<StateId> = BTreeSet::new();
        for state in &self.states {
            for t in &state.transitions {
                if t.target.get() >= n {
                    bad.insert(t.target);
                }
            }
        }
        for id in &self.finals {
            if id.get() >= n {
                bad.insert(*id);
            }
        }
        for span in self.group_spans.values().flatten() {
            for id in [span.entry, span.exit] {
                if id.get() >= n {
                    bad.insert(id);
                }
            }
        }
        bad.into_iter().collect()
    }
}
