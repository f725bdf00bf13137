//! Birth/survival rules in `"<alive>.<dead>"` notation.
//!
//! The alive component lists the neighbor counts at which a live cell
//! survives, the dead component the counts at which a dead cell is born.
//! Standard Life is `"23.3"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LifeError, LifeResult, RuleSyntax};

/// Rule string used when none is configured.
pub const DEFAULT_RULE: &str = "23.3";

/// Number of possible neighbor counts (0 through 8).
const COUNTS: usize = 9;

/// A parsed birth/survival rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleSet {
    alive_survives: [bool; COUNTS],
    dead_births: [bool; COUNTS],
}

impl RuleSet {
    /// Parse a rule string such as `"23.3"`.
    ///
    /// An empty component is allowed: `"23."` never gives birth and `".3"`
    /// never lets a cell survive.
    pub fn parse(rule: &str) -> LifeResult<Self> {
        let invalid = |reason| LifeError::InvalidRule {
            rule: rule.to_string(),
            reason,
        };

        let (alive, dead) = rule
            .split_once('.')
            .ok_or_else(|| invalid(RuleSyntax::MissingSeparator))?;
        if dead.contains('.') {
            return Err(invalid(RuleSyntax::ExtraSeparator));
        }

        Ok(Self {
            alive_survives: digit_set(alive).map_err(invalid)?,
            dead_births: digit_set(dead).map_err(invalid)?,
        })
    }

    /// Standard Conway rule (`23.3`).
    pub fn conway() -> Self {
        Self {
            alive_survives: flags(&[2, 3]),
            dead_births: flags(&[3]),
        }
    }

    /// Whether a cell is alive in the next generation.
    ///
    /// Counts above 8 cannot occur on a Moore neighborhood and yield `false`.
    pub fn classify(&self, alive: bool, neighbors: u8) -> bool {
        let table = if alive {
            &self.alive_survives
        } else {
            &self.dead_births
        };
        table.get(neighbors as usize).copied().unwrap_or(false)
    }

    /// Neighbor counts at which a live cell survives.
    pub fn survival_counts(&self) -> impl Iterator<Item = u8> + '_ {
        set_members(&self.alive_survives)
    }

    /// Neighbor counts at which a dead cell is born.
    pub fn birth_counts(&self) -> impl Iterator<Item = u8> + '_ {
        set_members(&self.dead_births)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::conway()
    }
}

impl FromStr for RuleSet {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in self.survival_counts() {
            write!(f, "{n}")?;
        }
        f.write_str(".")?;
        for n in self.birth_counts() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

fn digit_set(component: &str) -> Result<[bool; COUNTS], RuleSyntax> {
    let mut set = [false; COUNTS];
    for ch in component.chars() {
        match ch.to_digit(10) {
            Some(d) if (d as usize) < COUNTS => set[d as usize] = true,
            _ => return Err(RuleSyntax::InvalidDigit(ch)),
        }
    }
    Ok(set)
}

fn flags(counts: &[usize]) -> [bool; COUNTS] {
    let mut set = [false; COUNTS];
    for &n in counts {
        set[n] = true;
    }
    set
}

fn set_members(set: &[bool; COUNTS]) -> impl Iterator<Item = u8> + '_ {
    set.iter()
        .enumerate()
        .filter(|&(_, &on)| on)
        .map(|(n, _)| n as u8)
}
