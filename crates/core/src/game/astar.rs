//! A* over a binary wall grid.
//!
//! Two behaviors are load-bearing and intentionally preserved from the
//! pursuit tuning this crate reimplements: the heuristic is the *squared*
//! Euclidean distance (inadmissible, so paths can be suboptimal), and a
//! neighbor already discovered is never relaxed — first discovery wins.
//! Changing either reroutes every enemy.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use crate::grid::WallGrid;
use crate::types::Tile;

/// Open-list entry. Ordering is by total cost `f`, then by discovery order,
/// so ties pop FIFO.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenNode {
    f: i64,
    seq: u64,
    row: i32,
    col: i32,
}

/// Shortest path from `start` to `goal`, excluding `start` itself.
///
/// Returns an empty path when `start == goal` or when the goal is
/// unreachable; callers treat "no path" as "hold position". Wraparound is
/// not applied here — the caller pre-processes the grid instead.
pub fn find_path(walls: &WallGrid, start: Tile, goal: Tile) -> Vec<Tile> {
    if start == goal {
        return Vec::new();
    }

    let rows = walls.len() as i32;
    let cols = walls[0].len() as i32;

    let mut heap = BinaryHeap::new();
    let mut open: BTreeSet<Tile> = BTreeSet::new();
    let mut closed: BTreeSet<Tile> = BTreeSet::new();
    let mut came_from: BTreeMap<Tile, Tile> = BTreeMap::new();
    let mut g_score: BTreeMap<Tile, i64> = BTreeMap::new();
    let mut seq = 0_u64;

    heap.push(Reverse(OpenNode {
        f: heuristic(start, goal),
        seq,
        row: start.row,
        col: start.col,
    }));
    open.insert(start);
    g_score.insert(start, 0);

    while let Some(Reverse(node)) = heap.pop() {
        let current = Tile { row: node.row, col: node.col };
        open.remove(&current);
        closed.insert(current);

        if current == goal {
            return reconstruct_path(&came_from, start, goal);
        }

        let current_g = g_score[&current];
        for neighbor in neighbors(current) {
            if neighbor.row < 0 || neighbor.row >= rows || neighbor.col < 0 || neighbor.col >= cols
            {
                continue;
            }
            if walls[neighbor.row as usize][neighbor.col as usize] != 0 {
                continue;
            }
            // First discovery wins: nodes already seen are never re-costed.
            if closed.contains(&neighbor) || open.contains(&neighbor) {
                continue;
            }

            let g = current_g + 1;
            seq += 1;
            came_from.insert(neighbor, current);
            g_score.insert(neighbor, g);
            heap.push(Reverse(OpenNode {
                f: g + heuristic(neighbor, goal),
                seq,
                row: neighbor.row,
                col: neighbor.col,
            }));
            open.insert(neighbor);
        }
    }

    Vec::new()
}

fn heuristic(from: Tile, goal: Tile) -> i64 {
    let dr = (from.row - goal.row) as i64;
    let dc = (from.col - goal.col) as i64;
    dr * dr + dc * dc
}

fn neighbors(tile: Tile) -> [Tile; 4] {
    [
        Tile { row: tile.row - 1, col: tile.col },
        Tile { row: tile.row, col: tile.col + 1 },
        Tile { row: tile.row + 1, col: tile.col },
        Tile { row: tile.row, col: tile.col - 1 },
    ]
}

fn reconstruct_path(came_from: &BTreeMap<Tile, Tile>, start: Tile, goal: Tile) -> Vec<Tile> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        current = *came_from.get(&current).expect("path must be reconstructible");
        path.push(current);
    }
    path.reverse();
    path.remove(0);
    path
}
