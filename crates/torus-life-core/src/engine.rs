//! Simulation engine that advances a grid generation by generation.
//!
//! The engine has two strictly separated phases. During setup patterns are
//! placed onto an empty grid. The first [`SimulationEngine::tick`] closes
//! setup; from then on every tick computes the complete next generation
//! before the caller can observe it, until the grid reaches a fixed point or
//! the generation budget runs out.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::{LifeError, LifeResult};
use crate::grid::Grid;
use crate::neighbors::NeighborCounts;
use crate::pattern::{self, Modifiers, Placement};
use crate::rule::RuleSet;

/// Where the simulation stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationState {
    /// Still advancing.
    Running,
    /// The last tick produced a generation identical to the current one.
    Stabilized,
    /// The generation counter reached the budget.
    BudgetExhausted,
}

impl SimulationState {
    /// Whether no further generations will be computed.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SimulationState::Running)
    }
}

/// Statistics of a single tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickResult {
    /// Generation shown after this tick.
    pub generation: u64,

    /// State after this tick.
    pub state: SimulationState,

    /// Number of cells that changed.
    pub changed: usize,

    /// Number of live cells after this tick.
    pub population: usize,

    /// Wall-clock time spent computing the tick.
    pub duration: Duration,
}

/// A settled generation handed out for rendering.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    pub generation: u64,
    pub state: SimulationState,
}

/// Game of Life simulation on a toroidal grid.
pub struct SimulationEngine {
    /// Current generation.
    grid: Grid,

    rule: RuleSet,

    generation_budget: u64,

    generation: u64,

    state: SimulationState,

    /// Free-text label shown by drivers.
    description: String,

    placements: Vec<Placement>,

    tick_history: Vec<TickResult>,
}

impl SimulationEngine {
    /// Create an engine from `config`.
    ///
    /// Undersized dimensions and budgets are raised to their minimum. A rule
    /// string that does not parse is rejected.
    pub fn new(config: EngineConfig) -> LifeResult<Self> {
        let config = config.clamped();
        let rule = RuleSet::parse(&config.rule)?;

        info!(
            width = config.width,
            height = config.height,
            generation_budget = config.generation_budget,
            rule = %rule,
            "simulation_created"
        );

        Ok(Self {
            grid: Grid::new(config.width, config.height),
            rule,
            generation_budget: config.generation_budget,
            generation: 0,
            state: SimulationState::Running,
            description: String::new(),
            placements: Vec::new(),
            tick_history: Vec::new(),
        })
    }

    /// Set the description (builder pattern).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Start over with an empty grid of the same size.
    pub fn reset(&mut self, description: impl Into<String>) {
        self.grid.clear();
        self.generation = 0;
        self.state = SimulationState::Running;
        self.description = description.into();
        self.placements.clear();
        self.tick_history.clear();
        debug!("simulation_reset");
    }

    /// Stamp a text-art pattern with its top-left corner at `(x, y)`.
    ///
    /// Only allowed before the first tick.
    pub fn place(
        &mut self,
        x: i64,
        y: i64,
        text: &str,
        modifiers: impl Into<Modifiers>,
    ) -> LifeResult<&Placement> {
        if self.setup_closed() {
            return Err(LifeError::SetupClosed {
                generation: self.generation,
            });
        }

        let placement = pattern::place(&mut self.grid, x, y, text, modifiers.into());
        self.placements.push(placement);
        Ok(&self.placements[self.placements.len() - 1])
    }

    /// Advance one generation.
    ///
    /// Once the state is terminal this returns the final generation again
    /// without computing anything.
    pub fn tick(&mut self) -> Snapshot<'_> {
        if self.state.is_terminal() {
            debug!(generation = self.generation, state = ?self.state, "simulation_halted");
            return self.snapshot();
        }

        let started = Instant::now();
        debug!(generation = self.generation, "simulation_tick_start");

        let next = self.next_generation();
        let changed = next.diff_count(&self.grid);

        if changed == 0 {
            self.state = SimulationState::Stabilized;
            info!(generation = self.generation, "simulation_stabilized");
        } else {
            self.grid = next;
            self.generation += 1;
            if self.generation >= self.generation_budget {
                self.state = SimulationState::BudgetExhausted;
                info!(
                    generation = self.generation,
                    budget = self.generation_budget,
                    "generation_budget_exhausted"
                );
            }
        }

        let duration = started.elapsed();
        let result = TickResult {
            generation: self.generation,
            state: self.state,
            changed,
            population: self.grid.population(),
            duration,
        };

        debug!(
            generation = result.generation,
            changed = result.changed,
            population = result.population,
            duration_us = duration.as_micros() as u64,
            "simulation_tick_complete"
        );

        self.tick_history.push(result);
        self.snapshot()
    }

    /// Tick until the simulation stabilizes or exhausts its budget.
    pub fn run(&mut self) -> Vec<TickResult> {
        info!(
            generation = self.generation,
            budget = self.generation_budget,
            "simulation_run_start"
        );

        let first = self.tick_history.len();
        while !self.state.is_terminal() {
            self.tick();
        }

        info!(
            generation = self.generation,
            state = ?self.state,
            "simulation_run_complete"
        );
        self.tick_history[first..].to_vec()
    }

    /// The current generation without advancing.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: &self.grid,
            generation: self.generation,
            state: self.state,
        }
    }

    /// Whether the cell at `(x, y)` is alive, with wraparound addressing.
    pub fn cell_alive(&self, x: i64, y: i64) -> bool {
        self.grid.is_alive(x, y)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rule(&self) -> &RuleSet {
        &self.rule
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn generation_budget(&self) -> u64 {
        self.generation_budget
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Every placement made since creation or the last reset.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn tick_history(&self) -> &[TickResult] {
        &self.tick_history
    }

    fn setup_closed(&self) -> bool {
        !self.tick_history.is_empty()
    }

    fn next_generation(&self) -> Grid {
        let counts = NeighborCounts::compute(&self.grid);
        let cells = self
            .grid
            .cells()
            .iter()
            .zip(counts.as_slice())
            .map(|(&alive, &neighbors)| self.rule.classify(alive, neighbors))
            .collect();
        Grid::from_cells(self.grid.width(), self.grid.height(), cells)
    }
}

impl std::fmt::Debug for SimulationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationEngine")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("rule", &self.rule.to_string())
            .field("generation", &self.generation)
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuleSyntax;

    fn engine(width: usize, height: usize, budget: u64) -> SimulationEngine {
        SimulationEngine::new(EngineConfig::new(width, height, budget)).unwrap()
    }

    #[test]
    fn test_engine_creation() {
        let engine = engine(20, 16, 10).with_description("demo");
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.state(), SimulationState::Running);
        assert_eq!(engine.grid().width(), 20);
        assert_eq!(engine.description(), "demo");
        assert_eq!(engine.rule().to_string(), "23.3");
    }

    #[test]
    fn test_config_is_clamped() {
        let engine = engine(2, 5, 0);
        assert_eq!(engine.grid().width(), 12);
        assert_eq!(engine.grid().height(), 12);
        assert_eq!(engine.generation_budget(), 2);
    }

    #[test]
    fn test_bad_rule_rejected() {
        let err = SimulationEngine::new(EngineConfig::default().with_rule("23")).unwrap_err();
        assert!(matches!(
            err,
            LifeError::InvalidRule {
                reason: RuleSyntax::MissingSeparator,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_grid_stabilizes_at_generation_zero() {
        let mut engine = engine(12, 12, 10);
        let snap = engine.tick();
        assert_eq!(snap.state, SimulationState::Stabilized);
        assert_eq!(snap.generation, 0);
        assert_eq!(engine.tick_history()[0].changed, 0);
    }

    #[test]
    fn test_terminal_tick_is_idempotent() {
        let mut engine = engine(12, 12, 10);
        engine.place(3, 3, "##\n##", "").unwrap();
        engine.tick();
        let snap = engine.tick();
        assert_eq!(snap.state, SimulationState::Stabilized);
        assert_eq!(snap.generation, 0);
        assert_eq!(engine.tick_history().len(), 1);
    }

    #[test]
    fn test_placement_after_tick_rejected() {
        let mut engine = engine(12, 12, 10);
        engine.place(0, 0, "###", "").unwrap();
        engine.tick();
        let err = engine.place(5, 5, "#", "").unwrap_err();
        assert_eq!(err, LifeError::SetupClosed { generation: 1 });
        assert_eq!(engine.placements().len(), 1);
    }

    #[test]
    fn test_reset_reopens_setup() {
        let mut engine = engine(12, 12, 10);
        engine.place(0, 0, "###", "").unwrap();
        engine.tick();
        engine.reset("second run");

        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.state(), SimulationState::Running);
        assert!(engine.grid().is_empty());
        assert!(engine.placements().is_empty());
        assert_eq!(engine.description(), "second run");
        assert!(engine.place(1, 1, "#", "").is_ok());
    }

    #[test]
    fn test_run_stops_at_budget() {
        let mut engine = engine(12, 12, 4);
        engine.place(4, 4, "###", "").unwrap();
        let results = engine.run();
        assert_eq!(results.len(), 4);
        assert_eq!(engine.generation(), 4);
        assert_eq!(engine.state(), SimulationState::BudgetExhausted);
        assert!(results.iter().all(|r| r.changed == 4));
        assert_eq!(results.last().map(|r| r.state), Some(SimulationState::BudgetExhausted));
    }

    #[test]
    fn test_custom_rule_without_births() {
        let mut engine =
            SimulationEngine::new(EngineConfig::new(12, 12, 10).with_rule("23.")).unwrap();
        engine.place(4, 4, "###", "").unwrap();
        // ends die, center survives with two neighbors, nothing is born
        let snap = engine.tick();
        assert_eq!(snap.grid.population(), 1);
        assert!(snap.grid.is_alive(5, 4));
    }
}
