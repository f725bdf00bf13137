//! Engine configuration.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::grid::MIN_SIZE;
use crate::rule::DEFAULT_RULE;

/// Smallest generation budget a simulation can have.
pub const MIN_GENERATION_BUDGET: u64 = 2;

/// Size, budget and rule of a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Grid width in cells.
    pub width: usize,

    /// Grid height in cells.
    pub height: usize,

    /// Generation at which the simulation stops if it has not stabilized.
    pub generation_budget: u64,

    /// Birth/survival rule in `"<alive>.<dead>"` notation.
    pub rule: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            generation_budget: 2000,
            rule: DEFAULT_RULE.to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a config with the default rule.
    pub fn new(width: usize, height: usize, generation_budget: u64) -> Self {
        Self {
            width,
            height,
            generation_budget,
            ..Default::default()
        }
    }

    /// Set the rule string (builder pattern).
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = rule.into();
        self
    }

    /// Raise any value below its minimum to that minimum.
    pub fn clamped(mut self) -> Self {
        if self.width < MIN_SIZE || self.height < MIN_SIZE {
            info!(
                width = self.width,
                height = self.height,
                min = MIN_SIZE,
                "config_clamped"
            );
            self.width = self.width.max(MIN_SIZE);
            self.height = self.height.max(MIN_SIZE);
        }
        if self.generation_budget < MIN_GENERATION_BUDGET {
            info!(
                generation_budget = self.generation_budget,
                min = MIN_GENERATION_BUDGET,
                "config_clamped"
            );
            self.generation_budget = MIN_GENERATION_BUDGET;
        }
        self
    }
}
