//! The toggleable debug overlay: the whole board reduced to one small
//! integer matrix per frame.

use pacman_core::types::{Cell, GRID_COLS, GRID_ROWS};
use pacman_core::{Grid, RenderSnapshot};

pub type DebugMatrix = [[u8; GRID_COLS as usize]; GRID_ROWS as usize];

pub const EMPTY: u8 = 0;
pub const WALL: u8 = 1;
pub const DOT: u8 = 2;
pub const PELLET: u8 = 3;
pub const ENEMY: u8 = 4;
pub const FEARED_ENEMY: u8 = 5;
pub const PLAYER: u8 = 6;

/// Encodes one frame. Enemies overwrite the player on shared cells, and an
/// enemy reads as feared only while the fear window is open and it is away
/// from home.
pub fn debug_matrix(grid: &Grid, snapshot: &RenderSnapshot) -> DebugMatrix {
    let mut matrix = [[EMPTY; GRID_COLS as usize]; GRID_ROWS as usize];
    for (row, wall_row) in grid.walls().iter().enumerate() {
        for (col, &wall) in wall_row.iter().enumerate() {
            matrix[row][col] = if wall != 0 { WALL } else { EMPTY };
        }
    }

    for dot in &snapshot.dots {
        matrix[dot.tile.row as usize][dot.tile.col as usize] =
            if dot.is_pellet { PELLET } else { DOT };
    }

    let player = Cell::from_position(snapshot.player.pos);
    matrix[player.row as usize][player.col as usize] = PLAYER;

    for enemy in &snapshot.enemies {
        let cell = Cell::from_position(enemy.pos);
        let code = if snapshot.fear_active && !enemy.at_home { FEARED_ENEMY } else { ENEMY };
        matrix[cell.row as usize][cell.col as usize] = code;
    }

    matrix
}
