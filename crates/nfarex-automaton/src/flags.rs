//! Matching mode flags.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Compile-time flags stored on the automaton and read by the executor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    /// `m`: `^`/`$` also match after/before `\n`.
    pub multiline: bool,
    /// `s`: `.` also matches `\n` and `\r`.
    pub dotall: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown flag '{0}'")]
pub struct UnknownFlag(pub char);

impl Flags {
    pub fn multiline(mut self, value: bool) -> Self {
        self.multiline = value;
        self
    }

    pub fn dotall(mut self, value: bool) -> Self {
        self.dotall = value;
        self
    }
}

impl FromStr for Flags {
    type Err = UnknownFlag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::default();
        for c in s.chars() {
            match c {
                'm' => flags.multiline = true,
                's' => flags.dotall = true,
                other => return Err(UnknownFlag(other)),
            }
        }
        Ok(flags)
    }
}

impl std::fmt::Display for Flags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.multiline {
            f.write_str("m")?;
        }
        if self.dotall {
            f.write_str("s")?;
        }
        Ok(())
    }
}
