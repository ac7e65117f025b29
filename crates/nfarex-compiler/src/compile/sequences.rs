//! Sequence and alternation compilation.

use nfarex_automaton::{Priority, StateId};

use crate::ast::Node;

use super::compiler::Compiler;
use super::error::{CompileError, CompileResult};

impl Compiler {
    /// Chain items exit to entry. An empty sequence is its own entry.
    pub(super) fn compile_sequence(
        &mut self,
        items: &[Node],
        entry: StateId,
    ) -> CompileResult<StateId> {
        items
            .iter()
            .try_fold(entry, |current, item| self.compile_node(item, current))
    }

    /// Fan out from `entry` to one fresh start per branch, in branch order,
    /// and join every branch exit into a fresh state.
    pub(super) fn compile_alternation(
        &mut self,
        branches: &[Node],
        entry: StateId,
    ) -> CompileResult<StateId> {
        if branches.is_empty() {
            return Err(CompileError::EmptyAlternation);
        }

        let mut exits = Vec::with_capacity(branches.len());
        for branch in branches {
            let start = self.builder.add_state();
            self.builder.add_epsilon(entry, start, Priority::Last);
            exits.push(self.compile_node(branch, start)?);
        }

        let join = self.builder.add_state();
        for exit in exits {
            self.builder.add_epsilon(exit, join, Priority::Last);
        }
        Ok(join)
    }
}
