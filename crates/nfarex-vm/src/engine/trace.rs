//! Tracing infrastructure for debugging execution.
//!
//! When `NoopTracer` is used every method is an `#[inline(always)]` empty
//! function and the calls vanish from the compiled search loop.
//! `PrintTracer` collects one formatted line per event instead.

use nfarex_automaton::{Anchor, StateId, Transition, TransitionKind};
use nfarex_core::{Colors, escape_char};

use super::frame::Frame;
use super::path::Path;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Scan starts, popped frames, accept and reject.
    #[default]
    Default,
    /// Also pushed frames and failed anchors.
    Verbose,
    /// Also epsilon edges skipped because their target was already entered.
    VeryVerbose,
}

/// Tracer trait for execution instrumentation.
///
/// Each method is called at a specific point of `VM::exec_with`:
/// - `trace_scan` - once, before the first frame is pushed
/// - `trace_pop` - after a frame is taken off the stack
/// - `trace_push` - after a successor frame is pushed
/// - `trace_anchor_failure` - when an anchored epsilon edge does not hold
/// - `trace_revisit` - when an epsilon edge leads to an already entered pair
/// - `trace_accept` / `trace_reject` - once, at the end of a search
pub trait Tracer {
    fn trace_scan(&mut self, offset: usize);

    fn trace_pop(&mut self, frame: &Frame);

    fn trace_push(&mut self, from: StateId, transition: &Transition, frame: &Frame);

    fn trace_anchor_failure(&mut self, from: StateId, anchor: Anchor, offset: usize);

    fn trace_revisit(&mut self, state: StateId, offset: usize);

    fn trace_accept(&mut self, path: &Path<'_>);

    fn trace_reject(&mut self, offset: usize);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_scan(&mut self, _offset: usize) {}

    #[inline(always)]
    fn trace_pop(&mut self, _frame: &Frame) {}

    #[inline(always)]
    fn trace_push(&mut self, _from: StateId, _transition: &Transition, _frame: &Frame) {}

    #[inline(always)]
    fn trace_anchor_failure(&mut self, _from: StateId, _anchor: Anchor, _offset: usize) {}

    #[inline(always)]
    fn trace_revisit(&mut self, _state: StateId, _offset: usize) {}

    #[inline(always)]
    fn trace_accept(&mut self, _path: &Path<'_>) {}

    #[inline(always)]
    fn trace_reject(&mut self, _offset: usize) {}
}

/// Tracer that collects an execution trace for debugging.
pub struct PrintTracer<'s> {
    /// Searched text, for showing the character under each frame.
    text: &'s str,
    verbosity: Verbosity,
    lines: Vec<String>,
    colors: Colors,
}

impl<'s> PrintTracer<'s> {
    pub fn new(text: &'s str, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            text,
            verbosity,
            lines: Vec::new(),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined with newlines.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn enabled(&self, level: Verbosity) -> bool {
        self.verbosity >= level
    }

    /// Character at `offset`, or `$` past the end.
    fn lookahead(&self, offset: usize) -> String {
        match self.text.get(offset..).and_then(|rest| rest.chars().next()) {
            Some(c) => escape_char(c),
            None => "$".to_string(),
        }
    }

    fn state(&self, id: StateId) -> String {
        let c = &self.colors;
        format!("{}{id}{}", c.blue, c.reset)
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_scan(&mut self, offset: usize) {
        let c = self.colors;
        self.lines
            .push(format!("{}scan @{offset}{}", c.dim, c.reset));
    }

    fn trace_pop(&mut self, frame: &Frame) {
        let c = self.colors;
        let line = format!(
            "  pop {} @{} #{} {}{}{}",
            self.state(frame.state),
            frame.offset,
            frame.step,
            c.green,
            self.lookahead(frame.offset),
            c.reset
        );
        self.lines.push(line);
    }

    fn trace_push(&mut self, from: StateId, transition: &Transition, frame: &Frame) {
        if !self.enabled(Verbosity::Verbose) {
            return;
        }
        let c = self.colors;
        let label = match &transition.kind {
            TransitionKind::Epsilon(_) => format!("{}{}{}", c.dim, transition.kind, c.reset),
            kind => format!("{}{kind}{}", c.green, c.reset),
        };
        let line = format!(
            "    push {}->{} {label} @{}",
            self.state(from),
            self.state(frame.state),
            frame.offset
        );
        self.lines.push(line);
    }

    fn trace_anchor_failure(&mut self, from: StateId, anchor: Anchor, offset: usize) {
        if !self.enabled(Verbosity::Verbose) {
            return;
        }
        let kind = TransitionKind::Epsilon(Some(anchor));
        let line = format!("    fail {} {kind} @{offset}", self.state(from));
        self.lines.push(line);
    }

    fn trace_revisit(&mut self, state: StateId, offset: usize) {
        if !self.enabled(Verbosity::VeryVerbose) {
            return;
        }
        let line = format!("    seen {} @{offset}", self.state(state));
        self.lines.push(line);
    }

    fn trace_accept(&mut self, path: &Path<'_>) {
        let c = self.colors;
        let (start, end) = (path.start().unwrap_or(0), path.end().unwrap_or(0));
        self.lines.push(format!(
            "accept {start}..{end} {}{:?}{}",
            c.green,
            path.as_str(),
            c.reset
        ));
    }

    fn trace_reject(&mut self, offset: usize) {
        self.lines.push(format!("reject @{offset}"));
    }
}
