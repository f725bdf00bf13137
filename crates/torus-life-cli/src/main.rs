//! torus-life CLI - Conway's Game of Life in the terminal.
//!
//! Seeds a toroidal grid from named patterns or scenario presets and plays
//! it until it stabilizes or runs out of generations.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use torus_life_core::{Modifiers, PatternBlock, SimulationEngine};
use tracing::{info, Level};

mod config;
mod library;
mod playback;
mod render;

use config::Config;
use library::{PlacementRequest, DEFAULT_SCENARIO, PATTERNS, SCENARIOS};
use playback::Playback;

/// torus-life - Conway's Game of Life on a wrapping grid.
///
/// Run `torus-life` to play the default scenario.
#[derive(Parser, Debug)]
#[command(name = "torus-life", author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a simulation (default command).
    Run(RunArgs),

    /// List available patterns and scenarios.
    List,

    /// Print a single pattern, optionally transformed.
    Show {
        /// Pattern name.
        name: String,

        /// Transforms: R (rotate), H (flip horizontally), V (flip vertically).
        #[arg(short, long, default_value = "")]
        modifiers: String,
    },
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Scenario preset to play.
    #[arg(short, long, conflicts_with = "place")]
    scenario: Option<String>,

    /// Place a pattern: NAME@X,Y[:MODS], repeatable.
    #[arg(short, long)]
    place: Vec<String>,

    /// Grid width (minimum 12).
    #[arg(long)]
    width: Option<usize>,

    /// Grid height (minimum 12).
    #[arg(long)]
    height: Option<usize>,

    /// Generation budget (minimum 2).
    #[arg(short, long)]
    generations: Option<u64>,

    /// Pause between generations in milliseconds.
    #[arg(short, long)]
    delay_ms: Option<u64>,

    /// Birth/survival rule as ALIVE.DEAD digit sets, e.g. 23.3.
    #[arg(short, long)]
    rule: Option<String>,

    /// Description shown above the simulation.
    #[arg(long)]
    description: Option<String>,

    /// Read settings from this JSON file instead of the user config.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Run(RunArgs::default())) {
        Commands::Run(args) => run(args),
        Commands::List => list(),
        Commands::Show { name, modifiers } => show(&name, &modifiers),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(generations) = args.generations {
        config.generations = generations;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.delay_ms = delay_ms;
    }
    if let Some(rule) = args.rule {
        config.rule = rule;
    }

    let (description, requests) = if args.place.is_empty() {
        let name = args.scenario.as_deref().unwrap_or(DEFAULT_SCENARIO);
        let scenario = library::find_scenario(name).with_context(|| {
            format!("unknown scenario '{name}' (run `torus-life list` to see available scenarios)")
        })?;
        (scenario.description.to_string(), scenario.requests())
    } else {
        let requests = args
            .place
            .iter()
            .map(|arg| arg.parse::<PlacementRequest>())
            .collect::<Result<Vec<_>>>()?;
        (String::from("Custom placement"), requests)
    };
    let description = args.description.unwrap_or(description);

    let mut engine = SimulationEngine::new(config.engine_config())
        .context("Invalid simulation configuration")?
        .with_description(description);

    for request in &requests {
        let pattern = request.resolve()?;
        engine.place(request.x, request.y, pattern.text, request.modifiers)?;
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    })
    .context("Failed to install Ctrl+C handler")?;

    let options = Playback {
        delay: Duration::from_millis(config.delay_ms),
        clear: io::stdout().is_terminal(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let state = playback::play(&mut engine, options, &mut out, &interrupted)?;
    info!(generation = engine.generation(), state = ?state, "playback_finished");

    Ok(())
}

fn list() -> Result<()> {
    let mut out = io::stdout().lock();

    writeln!(out, "Patterns:")?;
    for pattern in PATTERNS {
        let block = PatternBlock::parse(pattern.text);
        writeln!(
            out,
            "  {:<20} {:<12} {}x{}",
            pattern.name,
            pattern.category,
            block.width(),
            block.height()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Scenarios:")?;
    for scenario in SCENARIOS {
        writeln!(out, "  {:<24} {}", scenario.name, scenario.description)?;
    }
    Ok(())
}

fn show(name: &str, modifiers: &str) -> Result<()> {
    let pattern = library::find_pattern(name)
        .with_context(|| format!("unknown pattern '{name}' (run `torus-life list`)"))?;
    let block = PatternBlock::parse(pattern.text).transformed(Modifiers::parse(modifiers));

    let mut out = io::stdout().lock();
    for line in block.transcript() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
