//! Quantifier compilation (`?`, `*`, `+`, `{m,n}`).
//!
//! Each optional or repeating copy of the body is wrapped in a loop block:
//!
//! ```text
//! entry -> start -> body_in ~body~> body_out -> end -> next
//!          start -> end     (skip, when the body may be absent)
//!          end   -> start   (repeat, when the body may recur)
//! ```
//!
//! Greedy blocks try the body before skipping and repeating before
//! leaving; lazy blocks do the opposite.

use nfarex_automaton::{Priority, StateId};

use crate::ast::{Node, Quantified, QuantifierKind};

use super::compiler::Compiler;
use super::error::{CompileError, CompileResult};

/// Upper bound on automaton size while unrolling `{m,n}`.
const MAX_STATES: usize = 1 << 20;

#[derive(Clone, Copy, Debug)]
struct LoopShape {
    skip: bool,
    repeat: bool,
}

impl LoopShape {
    const OPTIONAL: Self = Self {
        skip: true,
        repeat: false,
    };
    const STAR: Self = Self {
        skip: true,
        repeat: true,
    };
    const PLUS: Self = Self {
        skip: false,
        repeat: true,
    };
}

impl Compiler {
    pub(super) fn compile_quantified(
        &mut self,
        quantified: &Quantified,
        entry: StateId,
    ) -> CompileResult<StateId> {
        let body = &quantified.body;
        let greedy = quantified.greedy;

        match quantified.kind {
            QuantifierKind::ZeroOrOne => self.compile_loop(body, entry, LoopShape::OPTIONAL, greedy),
            QuantifierKind::ZeroOrMore => self.compile_loop(body, entry, LoopShape::STAR, greedy),
            QuantifierKind::OneOrMore => self.compile_loop(body, entry, LoopShape::PLUS, greedy),
            QuantifierKind::Range { min, max } => self.compile_counted(body, entry, min, max, greedy),
        }
    }

    /// `min` plain copies, then either `max - min` optional blocks or one
    /// unbounded `*` block.
    fn compile_counted(
        &mut self,
        body: &Node,
        entry: StateId,
        min: u32,
        max: Option<u32>,
        greedy: bool,
    ) -> CompileResult<StateId> {
        if let Some(max) = max
            && max < min
        {
            return Err(CompileError::BoundsOutOfOrder { min, max });
        }

        let mut current = entry;
        for _ in 0..min {
            current = self.compile_node(body, current)?;
            self.check_size()?;
        }

        match max {
            None => self.compile_loop(body, current, LoopShape::STAR, greedy),
            Some(max) => {
                for _ in min..max {
                    current = self.compile_loop(body, current, LoopShape::OPTIONAL, greedy)?;
                    self.check_size()?;
                }
                Ok(current)
            }
        }
    }

    fn check_size(&self) -> CompileResult<()> {
        if self.builder.state_count() > MAX_STATES {
            return Err(CompileError::TooManyStates { limit: MAX_STATES });
        }
        Ok(())
    }

    fn compile_loop(
        &mut self,
        body: &Node,
        entry: StateId,
        shape: LoopShape,
        greedy: bool,
    ) -> CompileResult<StateId> {
        let start = self.builder.add_state();
        self.builder.add_epsilon(entry, start, Priority::Last);

        let body_in = self.builder.add_state();
        self.builder.add_epsilon(start, body_in, Priority::Last);
        let body_out = self.compile_node(body, body_in)?;

        let end = self.builder.add_state();
        self.builder.add_epsilon(body_out, end, Priority::Last);

        let next = self.builder.add_state();
        self.builder.add_epsilon(end, next, Priority::Last);

        let (preferred, fallback) = if greedy {
            (Priority::First, Priority::Last)
        } else {
            (Priority::Last, Priority::First)
        };

        if shape.skip {
            // Greedy: body first, skip second.
            self.builder.add_epsilon(start, end, fallback);
        }
        if shape.repeat {
            // Greedy: repeat first, leave second.
            self.builder.add_epsilon(end, start, preferred);
        }

        Ok(next)
    }
}
