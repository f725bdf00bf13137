//! Plain-text terminal rendering.

use std::io::{self, Write};

use torus_life_core::{Grid, Placement, SimulationEngine, Snapshot};

const BANNER: &str = r"
  #####  ####  ##   ## ######    #####  ######   #     #  ##### #####
 #      #    # # # # # #        #     # #        #     #  #     #
 #      #    # #  #  # #        #     # #        #     #  #     #
 # #### ###### #     # ####     #     # ####     #     #  ####  ####
 #    # #    # #     # #        #     # #        #     #  #     #
 #    # #    # #     # #        #     # #        #     #  #     #
  ####  #    # #     # ######    #####  #        ##### #  #     #####
";

/// Clears the terminal and homes the cursor.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Banner, description, rule and every placement transcript.
pub fn intro(out: &mut impl Write, engine: &SimulationEngine) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    if !engine.description().is_empty() {
        writeln!(out, "     {}", engine.description())?;
    }
    let grid = engine.grid();
    writeln!(
        out,
        "     {}x{} torus, rule {}, up to {} generations",
        grid.width(),
        grid.height(),
        engine.rule(),
        engine.generation_budget()
    )?;
    for placement in engine.placements() {
        writeln!(out)?;
        placement_transcript(out, placement)?;
    }
    writeln!(out)
}

pub fn placement_transcript(out: &mut impl Write, placement: &Placement) -> io::Result<()> {
    writeln!(out, "{placement}")
}

/// Header plus grid for one generation.
pub fn generation(out: &mut impl Write, snapshot: &Snapshot<'_>, clear: bool) -> io::Result<()> {
    if clear {
        write!(out, "{CLEAR_SCREEN}")?;
    }
    writeln!(out, "======GENERATION {:04}======", snapshot.generation)?;
    grid(out, snapshot.grid)
}

/// Every row as ` .` for dead and ` #` for live cells.
pub fn grid(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    let mut line = String::with_capacity(grid.width() * 2);
    for y in 0..grid.height() as i64 {
        line.clear();
        for x in 0..grid.width() as i64 {
            line.push_str(if grid.is_alive(x, y) { " #" } else { " ." });
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn tranquility(out: &mut impl Write, generation: u64) -> io::Result<()> {
    writeln!(out, " {}", "=".repeat(26))?;
    writeln!(
        out,
        " reached tranquility after {} generation{}",
        generation,
        if generation == 1 { "" } else { "s" }
    )
}

pub fn budget_exhausted(out: &mut impl Write, generation: u64) -> io::Result<()> {
    writeln!(out, " {}", "=".repeat(26))?;
    writeln!(out, " generation budget exhausted after {generation} generations")
}

pub fn interrupted(out: &mut impl Write, generation: u64) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, " interrupted at generation {generation}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use torus_life_core::{EngineConfig, SimulationEngine};

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_grid_rows() {
        let mut grid = Grid::new(12, 12);
        grid.set(1, 0, true);
        let text = rendered(|out| super::grid(out, &grid));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], format!(" . #{}", " .".repeat(10)));
        assert_eq!(lines[1], " .".repeat(12));
    }

    #[test]
    fn test_generation_header() {
        let engine = SimulationEngine::new(EngineConfig::new(12, 12, 5)).unwrap();
        let text = rendered(|out| generation(out, &engine.snapshot(), false));
        assert!(text.starts_with("======GENERATION 0000======\n"));
        assert!(!text.contains('\x1B'));
    }

    #[test]
    fn test_tranquility_pluralization() {
        assert!(rendered(|out| tranquility(out, 1)).contains("after 1 generation\n"));
        assert!(rendered(|out| tranquility(out, 0)).contains("after 0 generations\n"));
    }

    #[test]
    fn test_intro_lists_placements() {
        let mut engine = SimulationEngine::new(EngineConfig::new(20, 20, 5))
            .unwrap()
            .with_description("demo run");
        engine.place(3, 4, "##\n##", "").unwrap();
        let text = rendered(|out| intro(out, &engine));
        assert!(text.contains("demo run"));
        assert!(text.contains("20x20 torus, rule 23.3"));
        assert!(text.contains("Pattern at (3, 4):\n # #\n # #"));
    }
}
