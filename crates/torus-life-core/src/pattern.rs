//! Text-art patterns and their placement onto a grid.
//!
//! A pattern is plain text where `#`, `*`, `+`, `x` or `X` marks a live cell
//! and anything else (usually a space) leaves the grid untouched. Blank lines
//! above and below the drawing are ignored, blank lines inside it are kept as
//! empty rows.
//!
//! ```text
//!  #
//!   #
//! ###
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grid::Grid;

/// Characters that mark a live cell.
pub const ALIVE_GLYPHS: &[char] = &['#', '*', '+', 'x', 'X'];

/// Geometric transforms applied to a pattern before it is stamped.
///
/// Transforms run in a fixed order: rotate, then flip horizontally, then flip
/// vertically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    /// Rotate the block by 90 degrees.
    pub rotate: bool,
    /// Reverse the order of rows.
    pub flip_horizontal: bool,
    /// Reverse every row.
    pub flip_vertical: bool,
}

impl Modifiers {
    /// Parse a modifier string such as `"RV"`.
    ///
    /// Letters are case-insensitive and order does not matter. Unknown
    /// characters are ignored.
    pub fn parse(letters: &str) -> Self {
        let mut mods = Self::default();
        for ch in letters.chars() {
            match ch.to_ascii_uppercase() {
                'R' => mods.rotate = true,
                'H' => mods.flip_horizontal = true,
                'V' => mods.flip_vertical = true,
                _ => {}
            }
        }
        mods
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&str> for Modifiers {
    fn from(letters: &str) -> Self {
        Self::parse(letters)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rotate {
            f.write_str("R")?;
        }
        if self.flip_horizontal {
            f.write_str("H")?;
        }
        if self.flip_vertical {
            f.write_str("V")?;
        }
        Ok(())
    }
}

/// A rectangular block of pattern characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternBlock {
    rows: Vec<Vec<char>>,
}

impl PatternBlock {
    /// Normalize raw pattern text into a rectangular block.
    ///
    /// Leading and trailing blank lines are dropped and every remaining line
    /// is right-padded with spaces to the longest line.
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.trim_end_matches('\r'))
            .collect();

        let first = lines.iter().position(|line| !is_blank(line));
        let last = lines.iter().rposition(|line| !is_blank(line));
        let lines = match (first, last) {
            (Some(first), Some(last)) => &lines[first..=last],
            _ => &[][..],
        };

        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let rows = lines
            .iter()
            .map(|line| {
                let mut row: Vec<char> = line.chars().collect();
                row.resize(width, ' ');
                row
            })
            .collect();

        Self { rows }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Rotate by 90 degrees: column `p` becomes row `width - 1 - p`, read
    /// top to bottom into left to right.
    pub fn rotated(&self) -> Self {
        let width = self.width();
        let rows = (0..width)
            .rev()
            .map(|p| self.rows.iter().map(|row| row[p]).collect())
            .collect();
        Self { rows }
    }

    /// Reverse the order of rows.
    pub fn flipped_horizontal(&self) -> Self {
        let mut rows = self.rows.clone();
        rows.reverse();
        Self { rows }
    }

    /// Reverse every row independently.
    pub fn flipped_vertical(&self) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().rev().copied().collect())
            .collect();
        Self { rows }
    }

    /// Apply `mods` in order and drop blank rows left at the top.
    pub fn transformed(&self, mods: Modifiers) -> Self {
        let mut block = self.clone();
        if mods.rotate {
            block = block.rotated();
        }
        if mods.flip_horizontal {
            block = block.flipped_horizontal();
        }
        if mods.flip_vertical {
            block = block.flipped_vertical();
        }
        let leading_blank = block
            .rows
            .iter()
            .take_while(|row| row.iter().all(|c| c.is_whitespace()))
            .count();
        block.rows.drain(..leading_blank);
        block
    }

    /// Offsets `(column, row)` of every live glyph.
    pub fn live_offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(m, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, c)| ALIVE_GLYPHS.contains(c))
                .map(move |(n, _)| (n, m))
        })
    }

    /// Human-readable rows: every character preceded by a space, blanks as `.`.
    pub fn transcript(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .flat_map(|&c| [' ', if c == ' ' { '.' } else { c }])
                    .collect()
            })
            .collect()
    }
}

/// Record of one pattern stamped onto a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Anchor column of the block's top-left corner.
    pub x: i64,
    /// Anchor row of the block's top-left corner.
    pub y: i64,
    pub modifiers: Modifiers,
    /// Block width after transforms.
    pub width: usize,
    /// Block height after transforms.
    pub height: usize,
    /// Number of live glyphs stamped.
    pub live_cells: usize,
    /// Printable rendition of the placed block.
    pub transcript: Vec<String>,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern at ({}, {}):", self.x, self.y)?;
        for line in &self.transcript {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

/// Stamp `text` onto `grid` with its top-left corner at `(x, y)`.
///
/// Placement is additive: glyphs set cells alive, nothing is ever cleared.
/// Coordinates wrap around the torus. Blank input places nothing.
pub fn place(grid: &mut Grid, x: i64, y: i64, text: &str, modifiers: Modifiers) -> Placement {
    let block = PatternBlock::parse(text).transformed(modifiers);

    // Wrap the anchor first so offsets never overflow near the i64 limits.
    let x0 = x.rem_euclid(grid.width() as i64);
    let y0 = y.rem_euclid(grid.height() as i64);

    let mut live_cells = 0;
    for (n, m) in block.live_offsets() {
        grid.set(x0 + n as i64, y0 + m as i64, true);
        live_cells += 1;
    }

    debug!(
        x,
        y,
        modifiers = %modifiers,
        width = block.width(),
        height = block.height(),
        live_cells,
        "pattern_placed"
    );

    Placement {
        x,
        y,
        modifiers,
        width: block.width(),
        height: block.height(),
        live_cells,
        transcript: block.transcript(),
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
