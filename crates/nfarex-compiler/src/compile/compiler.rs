//! Core compiler state and entry points.

use nfarex_automaton::{Automaton, AutomatonBuilder, Flags, GroupSpan, Priority, StateId};

use crate::ast::{Group, Node};

use super::error::{CompileError, CompileResult};

/// Compiler state for Thompson construction.
pub struct Compiler {
    pub(super) builder: AutomatonBuilder,
}

impl Compiler {
    pub fn new(flags: Flags) -> Self {
        Self {
            builder: AutomatonBuilder::new(flags),
        }
    }

    /// Compile `tree` starting at state 0 and mark its exit final.
    pub fn compile(mut self, tree: &Node) -> CompileResult<Automaton> {
        let captures = tree.captures();
        if captures.contains(&0) {
            return Err(CompileError::ZeroGroupIndex);
        }
        // Indices with no compiled occurrence (e.g. inside `{0}`) still exist.
        let highest = captures.iter().copied().max().unwrap_or(0);
        for index in 1..=highest {
            self.builder.declare_group(index);
        }

        let exit = self.compile_node(tree, StateId::START)?;
        self.builder.set_final(exit);

        let automaton = self.builder.build();

        #[cfg(debug_assertions)]
        super::verify::debug_verify(&automaton);

        Ok(automaton)
    }

    /// Compile `node` from `entry`, returning the fragment's exit state.
    pub(super) fn compile_node(&mut self, node: &Node, entry: StateId) -> CompileResult<StateId> {
        match node {
            Node::Alternation(branches) => self.compile_alternation(branches, entry),
            Node::Sequence(items) => self.compile_sequence(items, entry),
            Node::Quantified(q) => self.compile_quantified(q, entry),
            Node::Group(g) => self.compile_group(g, entry),
            Node::Anchor(anchor) => Ok(self.compile_anchor(*anchor, entry)),
            Node::Literal(c) => Ok(self.compile_literal(*c, entry)),
            Node::Class(class) => Ok(self.compile_class(*class, entry)),
            Node::Set(group) => self.compile_set(group, entry),
        }
    }

    /// Capturing groups get their own entry and exit states, recorded as a
    /// span. Every compiled copy of the group adds one more span.
    fn compile_group(&mut self, group: &Group, entry: StateId) -> CompileResult<StateId> {
        let Some(index) = group.capture else {
            return self.compile_node(&group.body, entry);
        };

        let group_entry = self.builder.add_state();
        self.builder.add_epsilon(entry, group_entry, Priority::Last);

        let body_exit = self.compile_node(&group.body, group_entry)?;

        let group_exit = self.builder.add_state();
        self.builder.add_epsilon(body_exit, group_exit, Priority::Last);

        self.builder
            .add_group_span(index, GroupSpan::new(group_entry, group_exit));
        Ok(group_exit)
    }
}

/// Compile a parsed pattern with the given flags.
pub fn compile(tree: &Node, flags: Flags) -> CompileResult<Automaton> {
    Compiler::new(flags).compile(tree)
}
