//! Toroidal cell grid.
//!
//! Cells live in one contiguous buffer laid out column by column
//! (`x * height + y`), so a column is a contiguous slice. Every coordinate
//! is taken modulo the grid size: there are no edges.

use std::fmt;

/// Smallest width or height a grid can have.
pub const MIN_SIZE: usize = 12;

/// A width x height matrix of live/dead cells with wraparound addressing.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an empty grid. Sizes below [`MIN_SIZE`] are raised to it.
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(MIN_SIZE);
        let height = height.max(MIN_SIZE);
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell at `(x, y)` is alive. Any integer coordinate is valid.
    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Set the cell at `(x, y)`, wrapping the coordinate onto the torus.
    pub fn set(&mut self, x: i64, y: i64, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    /// Column `x` (already wrapped) as a slice of `height` cells.
    pub fn column(&self, x: usize) -> &[bool] {
        let start = (x % self.width) * self.height;
        &self.cells[start..start + self.height]
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Whether no cell is alive.
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }

    /// Coordinates of every live cell, column by column.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let height = self.height;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i / height, i % height))
    }

    /// Number of cells whose state differs between two grids of equal size.
    pub fn diff_count(&self, other: &Grid) -> usize {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        self.cells
            .iter()
            .zip(&other.cells)
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Cells in column-major order.
    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    fn index(&self, x: i64, y: i64) -> usize {
        let x = x.rem_euclid(self.width as i64) as usize;
        let y = y.rem_euclid(self.height as i64) as usize;
        x * self.height + y
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("population", &self.population())
            .finish()
    }
}
