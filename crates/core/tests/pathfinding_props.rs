//! Property tests for the pathfinder on obstacle-free regions.

use pacman_core::game::astar::find_path;
use pacman_core::{Tile, WallGrid};
use proptest::prelude::*;

fn open_grid() -> WallGrid {
    [[0; 19]; 22]
}

fn manhattan(a: Tile, b: Tile) -> usize {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as usize
}

proptest! {
    #[test]
    fn path_length_equals_manhattan_distance_without_walls(
        start_row in 0_i32..22,
        start_col in 0_i32..19,
        goal_row in 0_i32..22,
        goal_col in 0_i32..19,
    ) {
        let walls = open_grid();
        let start = Tile { row: start_row, col: start_col };
        let goal = Tile { row: goal_row, col: goal_col };
        let path = find_path(&walls, start, goal);

        prop_assert_eq!(path.len(), manhattan(start, goal));
        if start != goal {
            prop_assert_eq!(*path.last().unwrap(), goal);
            prop_assert!(!path.contains(&start));
        }
    }

    #[test]
    fn consecutive_path_cells_are_orthogonal_neighbors(
        start_row in 0_i32..22,
        start_col in 0_i32..19,
        goal_row in 0_i32..22,
        goal_col in 0_i32..19,
    ) {
        let walls = open_grid();
        let start = Tile { row: start_row, col: start_col };
        let goal = Tile { row: goal_row, col: goal_col };
        let path = find_path(&walls, start, goal);

        let mut previous = start;
        for &tile in &path {
            let step = previous.row.abs_diff(tile.row) + previous.col.abs_diff(tile.col);
            prop_assert_eq!(step, 1, "non-unit step from {:?} to {:?}", previous, tile);
            previous = tile;
        }
    }
}
