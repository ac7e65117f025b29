//! Compiled pattern plus the limits it runs under.

use nfarex_automaton::{Automaton, Flags, dump};
use nfarex_compiler::ParseConfig;
use nfarex_core::Colors;
use nfarex_vm::{FuelLimits, Match, Path, PrintTracer, VM, Verbosity};

use crate::{Error, Result};

/// A compiled pattern. Immutable; searches never modify it.
#[derive(Clone, Debug)]
pub struct Regex {
    automaton: Automaton,
    limits: FuelLimits,
}

/// Builder for `Regex`.
#[derive(Clone, Debug)]
pub struct RegexBuilder {
    pattern: String,
    flags: Flags,
    flag_text: Option<String>,
    parse_config: ParseConfig,
    limits: FuelLimits,
}

impl RegexBuilder {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            flags: Flags::default(),
            flag_text: None,
            parse_config: ParseConfig::default(),
            limits: FuelLimits::default(),
        }
    }

    /// `^`/`$` also match at line boundaries.
    pub fn multiline(mut self, value: bool) -> Self {
        self.flags = self.flags.multiline(value);
        self
    }

    /// `.` also matches `\n` and `\r`.
    pub fn dotall(mut self, value: bool) -> Self {
        self.flags = self.flags.dotall(value);
        self
    }

    /// Flag letters (`m`, `s`), checked by `build`. Added to any flags set
    /// through `multiline` or `dotall`.
    pub fn flags(mut self, text: &str) -> Self {
        self.flag_text = Some(text.to_string());
        self
    }

    /// Set the group nesting limit.
    pub fn max_depth(mut self, depth: u32) -> Self {
        self.parse_config = self.parse_config.with_max_depth(depth);
        self
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

    pub fn build(self) -> Result<Regex> {
        let mut flags = self.flags;
        if let Some(text) = &self.flag_text {
            let parsed: Flags = text.parse()?;
            flags.multiline |= parsed.multiline;
            flags.dotall |= parsed.dotall;
        }

        let tree = nfarex_compiler::parse_with(&self.pattern, self.parse_config)?;
        let automaton =
            nfarex_compiler::compile(&tree, flags).map_err(nfarex_compiler::Error::from)?;

        Ok(Regex {
            automaton,
            limits: self.limits,
        })
    }
}

impl Regex {
    /// Compile `pattern` with default flags and limits.
    pub fn new(pattern: &str) -> Result<Self> {
        RegexBuilder::new(pattern).build()
    }

    pub fn builder(pattern: &str) -> RegexBuilder {
        RegexBuilder::new(pattern)
    }

    /// Run an automaton built elsewhere, e.g. loaded from text.
    pub fn from_automaton(automaton: Automaton) -> Self {
        Self {
            automaton,
            limits: FuelLimits::default(),
        }
    }

    /// Load an automaton from the textual format.
    pub fn from_text(source: &str) -> Result<Self> {
        Ok(Self::from_automaton(Automaton::from_text(source)?))
    }

    pub fn with_limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Run the same automaton under other matching modes. Loaded automata
    /// start with default flags.
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.automaton = self.automaton.with_flags(flags);
        self
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn flags(&self) -> Flags {
        self.automaton.flags()
    }

    /// Number of capture groups, not counting the whole match.
    pub fn group_count(&self) -> usize {
        self.automaton.group_count()
    }

    fn vm(&self) -> VM<'_> {
        VM::builder(&self.automaton).limits(self.limits).build()
    }

    /// Search anchored at `start`.
    pub fn exec<'t>(&self, text: &'t str, start: usize) -> Result<Path<'t>> {
        Ok(self.vm().exec(text, start)?)
    }

    pub fn is_match(&self, text: &str) -> Result<bool> {
        Ok(self.find(text)?.is_some())
    }

    pub fn find<'t>(&self, text: &'t str) -> Result<Option<Match<'t>>> {
        Ok(self.vm().find(text)?)
    }

    pub fn find_at<'t>(&self, text: &'t str, start: usize) -> Result<Option<Match<'t>>> {
        Ok(self.vm().find_at(text, start)?)
    }

    pub fn find_all<'t>(&self, text: &'t str) -> Result<Vec<Match<'t>>> {
        Ok(self.vm().find_all(text)?)
    }

    /// Replace every match with `template` (`$N` group, `$$` dollar).
    pub fn replace_all(&self, text: &str, template: &str) -> Result<String> {
        Ok(self.vm().replace_all(text, template)?)
    }

    /// Run `find` under a `PrintTracer` and return the collected trace.
    pub fn trace(&self, text: &str, verbosity: Verbosity, colors: Colors) -> Result<String> {
        let mut tracer = PrintTracer::new(text, verbosity, colors);
        self.vm().find_at_with(text, 0, &mut tracer)?;
        Ok(tracer.render())
    }

    /// Render the automaton in the textual format.
    pub fn dump(&self, colors: Colors) -> String {
        dump(&self.automaton, colors)
    }
}

impl std::str::FromStr for Regex {
    type Err = Error;

    fn from_str(pattern: &str) -> Result<Self> {
        Self::new(pattern)
    }
}

impl TryFrom<&str> for Regex {
    type Error = Error;

    fn try_from(pattern: &str) -> Result<Self> {
        Self::new(pattern)
    }
}
