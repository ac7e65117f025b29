//! Leaf expressions: one consuming or anchored edge each.

use nfarex_automaton::{Anchor, CharSet, Priority, StateId, TransitionKind};
use nfarex_core::ClassKind;

use crate::ast::{CharGroup, SetItem};

use super::compiler::Compiler;
use super::error::{CompileError, CompileResult};

impl Compiler {
    fn compile_edge(&mut self, kind: TransitionKind, entry: StateId) -> StateId {
        let exit = self.builder.add_state();
        self.builder
            .add_transition(entry, kind, exit, Priority::Last);
        exit
    }

    pub(super) fn compile_literal(&mut self, c: char, entry: StateId) -> StateId {
        self.compile_edge(TransitionKind::Literal(c), entry)
    }

    pub(super) fn compile_class(&mut self, class: ClassKind, entry: StateId) -> StateId {
        self.compile_edge(TransitionKind::Class(class), entry)
    }

    pub(super) fn compile_anchor(&mut self, anchor: Anchor, entry: StateId) -> StateId {
        self.compile_edge(TransitionKind::Epsilon(Some(anchor)), entry)
    }

    /// Members toggle their slots, so a character listed twice cancels out.
    /// Negation applies at lookup time.
    pub(super) fn compile_set(
        &mut self,
        group: &CharGroup,
        entry: StateId,
    ) -> CompileResult<StateId> {
        let mut set = CharSet::new(group.negated);
        for item in &group.items {
            match *item {
                SetItem::Literal(c) => {
                    if !set.toggle(c) {
                        return Err(CompileError::UnsupportedSetMember(c));
                    }
                }
                SetItem::Range(lo, hi) => {
                    if lo > hi {
                        return Err(CompileError::RangeOutOfOrder { lo, hi });
                    }
                    if !set.toggle_range(lo, hi) {
                        return Err(CompileError::UnsupportedSetMember(hi));
                    }
                }
                SetItem::Class(class) => set.toggle_class(class),
            }
        }
        Ok(self.compile_edge(TransitionKind::Set(set), entry))
    }
}
