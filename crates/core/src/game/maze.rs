//! Per-query view of the wall grid with the ghost house unlocked.

use crate::grid::{Grid, WallGrid};
use crate::types::{Cell, Tile};

/// The four ghost-house tiles. Wall in the base grid; opened for residents.
pub const GHOST_HOUSE: [Tile; 4] = [
    Tile { row: 9, col: 9 },
    Tile { row: 10, col: 8 },
    Tile { row: 10, col: 9 },
    Tile { row: 10, col: 10 },
];

/// Copy of the wall grid as seen by an actor standing at `actor`.
///
/// An actor inside the house sees all four house tiles open so it can path
/// out. The door is one-way in visibility only: outsiders see the house as
/// wall, but nothing later re-checks entry, so this is a soft rule.
pub fn effective_walls(grid: &Grid, actor: Cell) -> WallGrid {
    let mut walls = *grid.walls();
    if GHOST_HOUSE.contains(&actor.tile()) {
        for tile in GHOST_HOUSE {
            walls[tile.row as usize][tile.col as usize] = 0;
        }
    }
    walls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resident_sees_all_four_house_tiles_open() {
        let grid = Grid::new();
        for house_tile in GHOST_HOUSE {
            let walls = effective_walls(&grid, house_tile.cell());
            for tile in GHOST_HOUSE {
                assert_eq!(walls[tile.row as usize][tile.col as usize], 0);
            }
        }
    }

    #[test]
    fn outsider_sees_the_base_grid_unchanged() {
        let grid = Grid::new();
        let walls = effective_walls(&grid, Cell { col: 1, row: 1 });
        assert_eq!(&walls, grid.walls());
        for tile in GHOST_HOUSE {
            assert_eq!(walls[tile.row as usize][tile.col as usize], 1);
        }
    }

    #[test]
    fn house_tiles_are_wall_in_the_base_grid() {
        let grid = Grid::new();
        for tile in GHOST_HOUSE {
            assert!(grid.is_wall(tile));
        }
    }
}
