//! Paced playback: render a generation, wait, tick, repeat.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use torus_life_core::{SimulationEngine, SimulationState};
use tracing::debug;

use crate::render;

/// Playback options.
#[derive(Debug, Clone, Copy)]
pub struct Playback {
    /// Pause after every rendered generation.
    pub delay: Duration,
    /// Clear the screen before each generation.
    pub clear: bool,
}

/// Play `engine` to its end or until `interrupted` is raised.
///
/// Generation 0 and every generation after it are rendered exactly once.
/// The flag is checked after the intro pause and before every tick.
/// Returns the state the simulation was left in.
pub fn play(
    engine: &mut SimulationEngine,
    options: Playback,
    out: &mut impl Write,
    interrupted: &AtomicBool,
) -> Result<SimulationState> {
    render::intro(out, engine)?;
    out.flush()?;
    thread::sleep(options.delay * 10);
    if interrupted.load(Ordering::SeqCst) {
        return stop(engine, out);
    }

    render::generation(out, &engine.snapshot(), options.clear)?;
    out.flush()?;

    loop {
        thread::sleep(options.delay);

        if interrupted.load(Ordering::SeqCst) {
            return stop(engine, out);
        }

        let snapshot = engine.tick();
        match snapshot.state {
            SimulationState::Running => {
                render::generation(out, &snapshot, options.clear)?;
            }
            SimulationState::Stabilized => {
                render::tranquility(out, snapshot.generation)?;
                out.flush()?;
                return Ok(snapshot.state);
            }
            SimulationState::BudgetExhausted => {
                render::generation(out, &snapshot, options.clear)?;
                render::budget_exhausted(out, snapshot.generation)?;
                out.flush()?;
                return Ok(snapshot.state);
            }
        }
        out.flush()?;
    }
}

fn stop(engine: &SimulationEngine, out: &mut impl Write) -> Result<SimulationState> {
    render::interrupted(out, engine.generation())?;
    out.flush()?;
    debug!(generation = engine.generation(), "playback_interrupted");
    Ok(engine.state())
}
