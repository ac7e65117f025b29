//! Virtual machine for executing automata.

use nfarex_automaton::{Automaton, StateId, TransitionKind};
use nfarex_core::char_at;

use super::error::RuntimeError;
use super::frame::{Frame, FrameStack};
use super::path::Path;
use super::trace::{NoopTracer, Tracer};
use super::visited::Visited;

/// Runtime limits for a single search. Both are unset by default, so a
/// search runs until it accepts or exhausts the automaton.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FuelLimits {
    /// Maximum frames popped per search.
    pub(crate) exec_fuel: Option<u32>,
    /// Maximum pending frames.
    pub(crate) stack_limit: Option<u32>,
}

impl FuelLimits {
    /// Create new fuel limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = Some(fuel);
        self
    }

    /// Set the stack limit.
    pub fn stack_limit(mut self, limit: u32) -> Self {
        self.stack_limit = Some(limit);
        self
    }

    pub fn get_exec_fuel(&self) -> Option<u32> {
        self.exec_fuel
    }

    pub fn get_stack_limit(&self) -> Option<u32> {
        self.stack_limit
    }
}

/// Executor bound to one automaton.
///
/// Holds no per-search state: every call to `exec` allocates its own stack,
/// path buffer and visited sets, so one `VM` can serve many searches.
#[derive(Clone, Copy, Debug)]
pub struct VM<'a> {
    pub(crate) automaton: &'a Automaton,
    pub(crate) limits: FuelLimits,
}

/// Builder for VM instances.
pub struct VMBuilder<'a> {
    automaton: &'a Automaton,
    limits: FuelLimits,
}

impl<'a> VMBuilder<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Self {
            automaton,
            limits: FuelLimits::default(),
        }
    }

    /// Set the fuel limits.
    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.limits = self.limits.exec_fuel(fuel);
        self
    }

    /// Set the stack limit.
    pub fn stack_limit(mut self, limit: u32) -> Self {
        self.limits = self.limits.stack_limit(limit);
        self
    }

    pub fn build(self) -> VM<'a> {
        VM {
            automaton: self.automaton,
            limits: self.limits,
        }
    }
}

impl<'a> VM<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Self::builder(automaton).build()
    }

    pub fn builder(automaton: &'a Automaton) -> VMBuilder<'a> {
        VMBuilder::new(automaton)
    }

    pub fn automaton(&self) -> &'a Automaton {
        self.automaton
    }

    pub fn limits(&self) -> FuelLimits {
        self.limits
    }

    /// Search for a match starting exactly at `start`.
    ///
    /// This is a convenience method that uses `NoopTracer`, which gets
    /// completely optimized away at compile time.
    pub fn exec<'t>(&self, text: &'t str, start: usize) -> Result<Path<'t>, RuntimeError> {
        self.exec_with(text, start, &mut NoopTracer)
    }

    /// Search for a match starting exactly at `start`, reporting to `tracer`.
    ///
    /// Depth-first over an explicit stack. A state's edges are pushed in
    /// reverse so the first-listed edge is popped, and so tried, first.
    /// The first final state popped ends the search.
    pub fn exec_with<'t, T: Tracer>(
        &self,
        text: &'t str,
        start: usize,
        tracer: &mut T,
    ) -> Result<Path<'t>, RuntimeError> {
        let automaton = self.automaton;
        let flags = automaton.flags();

        let mut stack = FrameStack::new(self.limits.stack_limit);
        let mut visited = Visited::new(automaton.state_count());
        let mut trail: Vec<(StateId, usize)> = Vec::new();
        let mut spent: u32 = 0;

        tracer.trace_scan(start);
        let seed = Frame::new(automaton.start(), start, 0);
        visited.insert(seed.state, seed.offset);
        stack.push(seed)?;

        while let Some(frame) = stack.pop() {
            if let Some(limit) = self.limits.exec_fuel
                && spent >= limit
            {
                return Err(RuntimeError::ExecFuelExhausted(limit));
            }
            spent = spent.saturating_add(1);
            tracer.trace_pop(&frame);

            // Frames deeper than `step` belong to abandoned branches.
            trail.truncate(frame.step);
            trail.push((frame.state, frame.offset));

            if automaton.is_final(frame.state) {
                let path = Path::from_trail(text, &trail);
                tracer.trace_accept(&path);
                return Ok(path);
            }

            for transition in automaton.transitions(frame.state).iter().rev() {
                let next = match &transition.kind {
                    TransitionKind::Epsilon(anchor) => {
                        if let Some(anchor) = anchor
                            && !anchor.holds(text, frame.offset, flags.multiline)
                        {
                            tracer.trace_anchor_failure(frame.state, *anchor, frame.offset);
                            continue;
                        }
                        if !visited.insert(transition.target, frame.offset) {
                            tracer.trace_revisit(transition.target, frame.offset);
                            continue;
                        }
                        Frame::new(transition.target, frame.offset, frame.step + 1)
                    }
                    kind => {
                        let Some(c) = char_at(text, frame.offset) else {
                            continue;
                        };
                        if !kind.accepts(c, flags.dotall) {
                            continue;
                        }
                        Frame::new(transition.target, frame.offset + c.len_utf8(), frame.step + 1)
                    }
                };
                stack.push(next)?;
                tracer.trace_push(frame.state, transition, &next);
            }
        }

        tracer.trace_reject(start);
        Ok(Path::reject(text))
    }
}
