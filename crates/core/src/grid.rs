//! The static tile map: wall queries, directional helpers, adjacency rings,
//! and dot placement. All randomness comes from a caller-supplied RNG.

use std::collections::BTreeMap;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::state::Dot;
use crate::types::{Cell, Direction, GRID_COLS, GRID_ROWS, Tile};

pub type WallGrid = [[u8; GRID_COLS as usize]; GRID_ROWS as usize];

/// 22×19 wall matrix, row-major. 1 = wall. The outer border is solid, the
/// middle row is the wrap tunnel, and the four-cell ghost house sits at the
/// center (rows 9–10).
const WALLS: WallGrid = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 1, 0, 1],
    [1, 0, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 1, 1, 1],
    [1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1],
    [1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1],
    [1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1],
    [1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 1, 0, 1],
    [1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1],
    [1, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 1],
    [1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

#[derive(Clone)]
pub struct Grid {
    walls: WallGrid,
}

impl Default for Grid {
    fn default() -> Self {
        Self { walls: WALLS }
    }
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn walls(&self) -> &WallGrid {
        &self.walls
    }

    /// Indices wrap on both axes, mirroring the matrix's toroidal reading.
    pub fn is_wall(&self, tile: Tile) -> bool {
        let row = tile.row.rem_euclid(GRID_ROWS) as usize;
        let col = tile.col.rem_euclid(GRID_COLS) as usize;
        self.walls[row][col] != 0
    }

    /// Unit step in `direction`; the column wraps through the tunnel, the row
    /// does not. `None` is "not moving" and returns the input unchanged.
    pub fn next_cell(&self, cell: Cell, direction: Option<Direction>) -> Cell {
        let Some(direction) = direction else {
            return cell;
        };
        let mut col = cell.col;
        let mut row = cell.row;
        match direction {
            Direction::Up => row -= 1,
            Direction::Right => col += 1,
            Direction::Down => row += 1,
            Direction::Left => col -= 1,
        }
        Cell { col: col.rem_euclid(GRID_COLS), row }
    }

    /// Steps up to `n` cells ahead of `cell`, stopping early on the last open
    /// cell before a wall.
    pub fn cell_in_front(&self, cell: Cell, direction: Direction, n: u32) -> Cell {
        if n == 0 {
            return cell;
        }
        let next = self.next_cell(cell, Some(direction));
        if self.is_wall(next.tile()) {
            return cell;
        }
        self.cell_in_front(next, direction, n - 1)
    }

    /// Perimeter ring of cells at Chebyshev distance `radius`, both axes
    /// wrapped. With `open_only`, wall cells are filtered out.
    pub fn adjacent_ring(&self, cell: Cell, radius: i32, open_only: bool) -> Vec<Cell> {
        let mut ring = Vec::new();
        for dcol in -radius..=radius {
            for drow in -radius..=radius {
                if dcol.abs() != radius && drow.abs() != radius {
                    continue;
                }
                let candidate = Cell {
                    col: (cell.col + dcol).rem_euclid(GRID_COLS),
                    row: (cell.row + drow).rem_euclid(GRID_ROWS),
                };
                if !open_only || !self.is_wall(candidate.tile()) {
                    ring.push(candidate);
                }
            }
        }
        ring
    }

    /// Uniform-ish random open tile: rejection-sample a row with at least one
    /// open cell, then walk the column forward past wall streaks. The walk
    /// biases toward the first open cell after a streak; flee targets don't
    /// need better.
    pub fn random_open_tile(&self, rng: &mut ChaCha8Rng) -> Tile {
        let mut row = (rng.next_u64() % GRID_ROWS as u64) as i32;
        while self.row_is_solid(row) {
            row = (rng.next_u64() % GRID_ROWS as u64) as i32;
        }
        let mut col = (rng.next_u64() % GRID_COLS as u64) as i32;
        while self.is_wall(Tile { row, col }) {
            col = (col + 1) % GRID_COLS;
        }
        Tile { row, col }
    }

    fn row_is_solid(&self, row: i32) -> bool {
        self.walls[row as usize].iter().all(|&w| w != 0)
    }

    /// One dot per open cell; cells listed in `pellets` become large dots.
    pub fn init_dots(&self, pellets: &[Cell]) -> BTreeMap<Tile, Dot> {
        let mut dots = BTreeMap::new();
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let tile = Tile { row, col };
                if !self.is_wall(tile) {
                    let is_pellet = pellets.contains(&tile.cell());
                    dots.insert(tile, Dot { is_pellet });
                }
            }
        }
        dots
    }
}
