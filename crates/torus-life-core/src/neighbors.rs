//! Moore-neighborhood live counts over a toroidal grid.
//!
//! Each column is reduced to vertical three-cell window sums once, then each
//! cell's count is the window sums of its left and right columns plus its own
//! column's window minus itself. Three column sums are kept alive while
//! sliding across the grid, so a full pass is O(width * height).

use crate::grid::Grid;

/// Live-neighbor count (0..=8) of every cell for a single generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborCounts {
    width: usize,
    height: usize,
    counts: Vec<u8>,
}

impl NeighborCounts {
    /// Count live neighbors for every cell of `grid`.
    pub fn compute(grid: &Grid) -> Self {
        let width = grid.width();
        let height = grid.height();
        let mut counts = Vec::with_capacity(width * height);

        let mut prev = vec![0; height];
        let mut this = vec![0; height];
        let mut next = vec![0; height];
        fill_window_sums(grid.column(width - 1), &mut prev);
        fill_window_sums(grid.column(0), &mut this);
        fill_window_sums(grid.column(1 % width), &mut next);

        for x in 0..width {
            let own = grid.column(x);
            counts.extend(
                (0..height).map(|y| prev[y] + this[y] + next[y] - u8::from(own[y])),
            );

            // Rotate the three buffers left and refill the freed one.
            std::mem::swap(&mut prev, &mut this);
            std::mem::swap(&mut this, &mut next);
            fill_window_sums(grid.column((x + 2) % width), &mut next);
        }

        Self {
            width,
            height,
            counts,
        }
    }

    /// Count at `(x, y)`, wrapping the coordinate like [`Grid::is_alive`].
    pub fn get(&self, x: i64, y: i64) -> u8 {
        let x = x.rem_euclid(self.width as i64) as usize;
        let y = y.rem_euclid(self.height as i64) as usize;
        self.counts[x * self.height + y]
    }

    /// Counts in the grid's column-major cell order.
    pub fn as_slice(&self) -> &[u8] {
        &self.counts
    }
}

/// Write into `sums` each cell plus its vertical neighbors, wrapping top and
/// bottom. The window slides down the column: one cell enters and one leaves
/// per step.
fn fill_window_sums(column: &[bool], sums: &mut [u8]) {
    let height = column.len();
    let cell = |y: usize| u8::from(column[y % height]);

    let mut window = cell(height - 1) + cell(0) + cell(1);
    sums[0] = window;
    for y in 1..height {
        window = window + cell(y + 1) - cell(y + height - 2);
        sums[y] = window;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Straightforward eight-neighbor count for cross-checking.
    fn naive_count(grid: &Grid, x: i64, y: i64) -> u8 {
        let mut count = 0;
        for dx in -1..=1 {
            for dy in -1..=1 {
                if (dx, dy) != (0, 0) && grid.is_alive(x + dx, y + dy) {
                    count += 1;
                }
            }
        }
        count
    }

    fn assert_single_cell_counts(width: usize, height: usize, cx: i64, cy: i64) {
        let mut grid = Grid::new(width, height);
        grid.set(cx, cy, true);
        let counts = NeighborCounts::compute(&grid);

        for x in 0..width as i64 {
            for y in 0..height as i64 {
                let dx = (x - cx).rem_euclid(width as i64);
                let dy = (y - cy).rem_euclid(height as i64);
                let near_x = dx == 0 || dx == 1 || dx == width as i64 - 1;
                let near_y = dy == 0 || dy == 1 || dy == height as i64 - 1;
                let expected = u8::from(near_x && near_y && (dx, dy) != (0, 0));
                assert_eq!(
                    counts.get(x, y),
                    expected,
                    "cell ({x}, {y}) around live cell ({cx}, {cy})"
                );
            }
        }
    }

    #[test]
    fn test_single_interior_cell() {
        assert_single_cell_counts(12, 12, 5, 6);
    }

    #[test]
    fn test_single_edge_cell() {
        assert_single_cell_counts(15, 12, 0, 6);
        assert_single_cell_counts(15, 12, 7, 11);
    }

    #[test]
    fn test_single_corner_cells() {
        assert_single_cell_counts(13, 17, 0, 0);
        assert_single_cell_counts(13, 17, 12, 0);
        assert_single_cell_counts(13, 17, 0, 16);
        assert_single_cell_counts(13, 17, 12, 16);
    }

    #[test]
    fn test_full_grid_counts_eight() {
        let mut grid = Grid::new(12, 12);
        for x in 0..12 {
            for y in 0..12 {
                grid.set(x, y, true);
            }
        }
        let counts = NeighborCounts::compute(&grid);
        assert!(counts.as_slice().iter().all(|&n| n == 8));
    }

    #[test]
    fn test_matches_naive_count_on_irregular_grid() {
        let mut grid = Grid::new(14, 13);
        // deterministic scatter touching every edge
        let mut seed: u64 = 0x2545_f491;
        for x in 0..14 {
            for y in 0..13 {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                grid.set(x, y, (seed >> 33) % 3 == 0);
            }
        }

        let counts = NeighborCounts::compute(&grid);
        for x in 0..14 {
            for y in 0..13 {
                assert_eq!(counts.get(x, y), naive_count(&grid, x, y), "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_window_sums_wrap_top_and_bottom() {
        let mut column = [false; 12];
        column[0] = true;
        column[11] = true;
        column[5] = true;
        let mut sums = [9; 12];
        fill_window_sums(&column, &mut sums);
        assert_eq!(sums, [2, 1, 0, 0, 1, 1, 1, 0, 0, 0, 1, 2]);
    }
}
