//! Conway's Game of Life on a finite toroidal grid.
//!
//! The crate holds the simulation core only. Rendering, pacing and the
//! library of named patterns belong to the driver.
//!
//! ## Core Concepts
//!
//! - **Grid**: width x height live/dead cells, every coordinate wrapped
//!   around both axes
//! - **RuleSet**: birth/survival neighbor counts in `"<alive>.<dead>"`
//!   notation, e.g. `"23.3"` for standard Life
//! - **Pattern**: text art stamped onto the grid, optionally rotated or
//!   flipped
//! - **SimulationEngine**: advances the grid one generation per tick until
//!   it reaches a fixed point or a generation budget
//!
//! ```no_run
//! use torus_life_core::{EngineConfig, SimulationEngine};
//!
//! let mut engine = SimulationEngine::new(EngineConfig::default())?;
//! engine.place(10, 10, " #\n  #\n###", "")?;
//! while !engine.state().is_terminal() {
//!     let snapshot = engine.tick();
//!     println!("generation {}: {} alive", snapshot.generation, snapshot.grid.population());
//! }
//! # Ok::<(), torus_life_core::LifeError>(())
//! ```

mod config;
mod engine;
mod error;
mod grid;
mod neighbors;
pub mod pattern;
mod rule;

pub use config::{EngineConfig, MIN_GENERATION_BUDGET};
pub use engine::{SimulationEngine, SimulationState, Snapshot, TickResult};
pub use error::{LifeError, LifeResult, RuleSyntax};
pub use grid::{Grid, MIN_SIZE};
pub use neighbors::NeighborCounts;
pub use pattern::{Modifiers, PatternBlock, Placement, ALIVE_GLYPHS};
pub use rule::{RuleSet, DEFAULT_RULE};
