//! Enemy behavior: four pursuit variants plus the shared feared mode.
//!
//! Every variant reduces to "pick a target cell, unlock the ghost house for
//! yourself, run A*, walk the path". The variants differ only in how the
//! target is chosen. Collisions are resolved here but their consequences
//! (lives, restart) belong to the session, which reacts to the returned
//! [`Collision`].

use rand_chacha::ChaCha8Rng;

use crate::game::astar::find_path;
use crate::game::maze::effective_walls;
use crate::game::motion::Body;
use crate::grid::Grid;
use crate::state::PlayerView;
use crate::types::{Cell, EnemyVariant, FearPhase, MovePattern, TILE_SIZE, Tile, Vec2};

/// Points credited to an enemy's own counter when the player eats it.
pub const EATEN_BONUS: i64 = 100;

/// Clyde retreats to this corner when the player gets close.
const CLYDE_CORNER: Tile = Tile { row: 20, col: 1 };
/// Clyde switches to the corner within this pixel distance of the player.
const CLYDE_RETREAT_RANGE: f32 = 5.5 * TILE_SIZE as f32;
/// Inky's projected target sits this much above the mirrored player point.
const INKY_TARGET_Y_OFFSET: f32 = 30.0;

pub const ENEMY_SPAWNS: [(EnemyVariant, Cell); 4] = [
    (EnemyVariant::Blinky, Cell { col: 9, row: 9 }),
    (EnemyVariant::Pinky, Cell { col: 9, row: 10 }),
    (EnemyVariant::Inky, Cell { col: 8, row: 10 }),
    (EnemyVariant::Clyde, Cell { col: 10, row: 10 }),
];

/// What an enemy update did to the player this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    /// Feared enemy was eaten; it already teleported home and scored itself.
    EnemyEaten,
    /// Enemy reached the player; the session decides lives and restarts.
    PlayerCaught,
}

/// Per-frame inputs shared by all enemy updates.
pub struct EnemyContext<'a> {
    pub rng: &'a mut ChaCha8Rng,
    pub speed: f32,
    pub width: f32,
    pub elapsed_secs: f64,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub variant: EnemyVariant,
    pub body: Body,
    home: Vec2,
    pub fear_phase: FearPhase,
    pub path: Vec<Tile>,
    /// Points this enemy has earned for the player by being eaten.
    pub score: i64,
}

impl Enemy {
    pub fn new(variant: EnemyVariant) -> Self {
        let spawn = ENEMY_SPAWNS
            .iter()
            .find(|(v, _)| *v == variant)
            .map(|(_, cell)| cell.center())
            .expect("every variant has a spawn cell");
        Self {
            variant,
            body: Body::at(spawn),
            home: spawn,
            fear_phase: FearPhase::Normal,
            path: Vec::new(),
            score: 0,
        }
    }

    pub fn cell(&self) -> Cell {
        self.body.cell()
    }

    pub fn at_home(&self) -> bool {
        self.body.pos == self.home
    }

    /// One behavior frame: fear bookkeeping, target selection, pathfinding,
    /// collision, movement.
    pub fn update(
        &mut self,
        grid: &Grid,
        player: &PlayerView,
        blinky_pos: Vec2,
        pattern: MovePattern,
        ctx: &mut EnemyContext<'_>,
    ) -> Option<Collision> {
        match pattern {
            MovePattern::Feared => {
                if self.fear_phase == FearPhase::Normal {
                    self.fear_phase = FearPhase::Entering;
                }
            }
            MovePattern::Pursue(_) => self.fear_phase = FearPhase::Normal,
        }

        let path = match pattern {
            MovePattern::Pursue(variant) => self.pursuit_path(variant, grid, player, blinky_pos),
            MovePattern::Feared => {
                if self.fear_phase == FearPhase::Eaten {
                    // Waiting out the fear window at home; nothing to do.
                    return None;
                }
                self.flee_path(grid, ctx.rng)
            }
        };

        if player.cell == self.cell() {
            if pattern == MovePattern::Feared {
                self.fear_phase = FearPhase::Eaten;
                self.reset_to_home();
                self.score += EATEN_BONUS;
                // The freshly planned path is dropped on purpose: the stored
                // one is stale but the eaten enemy won't use it.
                return Some(Collision::EnemyEaten);
            }
            return Some(Collision::PlayerCaught);
        }

        // No route this frame: hold position.
        if path.is_empty() {
            return None;
        }

        self.follow(&path, pattern, ctx);
        self.path = path;
        None
    }

    fn pursuit_path(
        &self,
        variant: EnemyVariant,
        grid: &Grid,
        player: &PlayerView,
        blinky_pos: Vec2,
    ) -> Vec<Tile> {
        let own_cell = self.cell();
        match variant {
            EnemyVariant::Blinky => {
                let walls = effective_walls(grid, own_cell);
                find_path(&walls, own_cell.tile(), player.cell.tile())
            }
            EnemyVariant::Pinky => {
                let ambush = match player.facing {
                    Some(direction) => grid.cell_in_front(player.cell, direction, 2),
                    None => player.cell,
                };
                let mut walls = effective_walls(grid, own_cell);
                if ambush != player.cell {
                    // Close the player's own cell so the route bends around
                    // the player toward the ambush point.
                    walls[player.cell.row as usize][player.cell.col as usize] = 1;
                }
                find_path(&walls, own_cell.tile(), ambush.tile())
            }
            EnemyVariant::Inky => {
                let mut projected = player.pos - blinky_pos + player.pos;
                projected.y -= INKY_TARGET_Y_OFFSET;
                let anchor = Cell {
                    col: (((projected.x - 10.0) / TILE_SIZE as f32) as i32).clamp(0, 18),
                    row: (((projected.y - 10.0) / TILE_SIZE as f32) as i32).clamp(0, 21),
                };

                let mut radius = 1;
                let mut candidates = grid.adjacent_ring(anchor, radius, true);
                while candidates.is_empty() {
                    radius += 1;
                    candidates = grid.adjacent_ring(anchor, radius, true);
                }

                let mut best = candidates[0];
                let mut best_distance = f32::INFINITY;
                for candidate in candidates {
                    let distance = (candidate.center() - self.body.pos).length();
                    if distance < best_distance {
                        best = candidate;
                        best_distance = distance;
                    }
                }

                let walls = effective_walls(grid, own_cell);
                find_path(&walls, own_cell.tile(), best.tile())
            }
            EnemyVariant::Clyde => {
                let walls = effective_walls(grid, own_cell);
                if (player.pos - self.body.pos).length() <= CLYDE_RETREAT_RANGE {
                    find_path(&walls, own_cell.tile(), CLYDE_CORNER)
                } else {
                    find_path(&walls, own_cell.tile(), player.cell.tile())
                }
            }
        }
    }

    /// Feared target logic: pick a fresh random destination when entering
    /// fear or after finishing the previous flight; otherwise re-path to the
    /// stored endpoint and only adopt a strictly shorter route.
    fn flee_path(&mut self, grid: &Grid, rng: &mut ChaCha8Rng) -> Vec<Tile> {
        let own_cell = self.cell();
        let reached_end = self.path.last() == Some(&own_cell.tile());

        if self.fear_phase < FearPhase::Fleeing || reached_end {
            self.fear_phase = FearPhase::Fleeing;
            let target = grid.random_open_tile(rng);
            let walls = effective_walls(grid, own_cell);
            find_path(&walls, own_cell.tile(), target)
        } else if let Some(&endpoint) = self.path.last() {
            let walls = effective_walls(grid, own_cell);
            let fresh = find_path(&walls, own_cell.tile(), endpoint);
            if fresh.len() >= self.path.len() {
                // Not an improvement; keeping the old route avoids
                // oscillating between equivalent recomputes.
                self.path.clone()
            } else {
                fresh
            }
        } else {
            Vec::new()
        }
    }

    /// Aims the body at the right path cell, encoding tunnel wraps as
    /// out-of-range aim columns whose centers sit past the grid edge.
    fn follow(&mut self, path: &[Tile], pattern: MovePattern, ctx: &mut EnemyContext<'_>) {
        let throttle = (pattern == MovePattern::Feared).then_some(ctx.elapsed_secs);
        let aim = if path.len() > 1 {
            let d_row = path[0].row - path[1].row;
            let d_col = path[0].col - path[1].col;
            if d_row + d_col > 1 {
                // Wrap forward: step out past the right edge.
                Tile { row: path[0].row + d_row, col: path[0].col + d_col }
            } else if d_row + d_col < -1 {
                // Wrap backward: step out past the left edge.
                Tile { row: path[0].row - d_row.abs(), col: path[0].col - d_col.abs() }
            } else if self.cell().tile() == path[0] {
                path[1]
            } else {
                path[0]
            }
        } else {
            path[0]
        };
        self.body.step_toward(aim, ctx.speed, ctx.width, throttle);
    }

    fn reset_to_home(&mut self) {
        self.body = Body::at(self.home);
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use super::*;
    use crate::types::{Direction, PIXEL_WIDTH};

    fn ctx(rng: &mut ChaCha8Rng) -> EnemyContext<'_> {
        EnemyContext { rng, speed: 1.0, width: PIXEL_WIDTH, elapsed_secs: 0.01 }
    }

    fn player_at(cell: Cell) -> PlayerView {
        PlayerView { pos: cell.center(), cell, facing: Some(Direction::Left) }
    }

    fn far_player() -> PlayerView {
        player_at(Cell { col: 9, row: 16 })
    }

    #[test]
    fn blinky_paths_straight_at_the_player() {
        let grid = Grid::new();
        let mut blinky = Enemy::new(EnemyVariant::Blinky);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let player = far_player();

        let out = blinky.update(
            &grid,
            &player,
            blinky.body.pos,
            MovePattern::Pursue(EnemyVariant::Blinky),
            &mut ctx(&mut rng),
        );
        assert_eq!(out, None);
        assert_eq!(blinky.path.last(), Some(&player.cell.tile()));
    }

    #[test]
    fn enemy_inside_house_finds_a_way_out() {
        let grid = Grid::new();
        let mut pinky = Enemy::new(EnemyVariant::Pinky);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        pinky.update(
            &grid,
            &far_player(),
            Vec2::ZERO,
            MovePattern::Pursue(EnemyVariant::Pinky),
            &mut ctx(&mut rng),
        );
        assert!(!pinky.path.is_empty(), "house resident must be able to path out");
    }

    #[test]
    fn clyde_retreats_to_the_corner_when_close() {
        let grid = Grid::new();
        let mut clyde = Enemy::new(EnemyVariant::Clyde);
        clyde.body = Body::at(Cell { col: 4, row: 16 }.center());
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        // Player five cells away: inside retreat range.
        let player = player_at(Cell { col: 9, row: 16 });
        clyde.update(
            &grid,
            &player,
            Vec2::ZERO,
            MovePattern::Pursue(EnemyVariant::Clyde),
            &mut ctx(&mut rng),
        );
        assert_eq!(clyde.path.last(), Some(&CLYDE_CORNER));
    }

    #[test]
    fn clyde_chases_when_far_away() {
        let grid = Grid::new();
        let mut clyde = Enemy::new(EnemyVariant::Clyde);
        clyde.body = Body::at(Cell { col: 1, row: 1 }.center());
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let player = player_at(Cell { col: 9, row: 16 });
        clyde.update(
            &grid,
            &player,
            Vec2::ZERO,
            MovePattern::Pursue(EnemyVariant::Clyde),
            &mut ctx(&mut rng),
        );
        assert_eq!(clyde.path.last(), Some(&player.cell.tile()));
    }

    #[test]
    fn feared_enemy_eaten_on_contact_scores_and_goes_home() {
        let grid = Grid::new();
        let mut blinky = Enemy::new(EnemyVariant::Blinky);
        let contact = Cell { col: 4, row: 16 };
        blinky.body = Body::at(contact.center());
        blinky.fear_phase = FearPhase::Fleeing;
        blinky.path = vec![Tile { row: 16, col: 5 }];
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let out = blinky.update(
            &grid,
            &player_at(contact),
            Vec2::ZERO,
            MovePattern::Feared,
            &mut ctx(&mut rng),
        );
        assert_eq!(out, Some(Collision::EnemyEaten));
        assert_eq!(blinky.fear_phase, FearPhase::Eaten);
        assert_eq!(blinky.score, EATEN_BONUS);
        assert!(blinky.at_home());
    }

    #[test]
    fn eaten_enemy_ignores_updates_until_fear_ends() {
        let grid = Grid::new();
        let mut blinky = Enemy::new(EnemyVariant::Blinky);
        blinky.fear_phase = FearPhase::Eaten;
        let before = blinky.body;
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        // Even a player on the same cell does nothing while eaten.
        let player = player_at(blinky.cell());
        let out = blinky.update(&grid, &player, Vec2::ZERO, MovePattern::Feared, &mut ctx(&mut rng));
        assert_eq!(out, None);
        assert_eq!(blinky.body, before);
        assert_eq!(blinky.fear_phase, FearPhase::Eaten);
    }

    #[test]
    fn fear_phase_resets_when_pattern_returns_to_pursuit() {
        let grid = Grid::new();
        let mut blinky = Enemy::new(EnemyVariant::Blinky);
        blinky.fear_phase = FearPhase::Eaten;
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        blinky.update(
            &grid,
            &far_player(),
            blinky.body.pos,
            MovePattern::Pursue(EnemyVariant::Blinky),
            &mut ctx(&mut rng),
        );
        assert_eq!(blinky.fear_phase, FearPhase::Normal);
    }

    #[test]
    fn non_feared_contact_reports_player_caught() {
        let grid = Grid::new();
        let mut blinky = Enemy::new(EnemyVariant::Blinky);
        let contact = Cell { col: 4, row: 16 };
        blinky.body = Body::at(contact.center());
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let out = blinky.update(
            &grid,
            &player_at(contact),
            Vec2::ZERO,
            MovePattern::Pursue(EnemyVariant::Blinky),
            &mut ctx(&mut rng),
        );
        assert_eq!(out, Some(Collision::PlayerCaught));
    }

    #[test]
    fn fleeing_path_is_kept_when_recompute_is_not_shorter() {
        let grid = Grid::new();
        let mut blinky = Enemy::new(EnemyVariant::Blinky);
        // Park on an open corridor cell, already fleeing along a fixed path.
        blinky.body = Body::at(Cell { col: 1, row: 1 }.center());
        blinky.fear_phase = FearPhase::Fleeing;
        let walls = effective_walls(&grid, blinky.cell());
        let stored = find_path(&walls, Tile { row: 1, col: 1 }, Tile { row: 1, col: 8 });
        assert!(!stored.is_empty());
        blinky.path = stored.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        blinky.update(&grid, &far_player(), Vec2::ZERO, MovePattern::Feared, &mut ctx(&mut rng));
        assert_eq!(blinky.path, stored, "equal-length recompute must not replace the path");
    }

    #[test]
    fn fleeing_path_updates_when_recompute_is_strictly_shorter() {
        let grid = Grid::new();
        let mut blinky = Enemy::new(EnemyVariant::Blinky);
        blinky.body = Body::at(Cell { col: 1, row: 1 }.center());
        blinky.fear_phase = FearPhase::Fleeing;
        // Stored route to (1, 4) with a detour; the direct route is shorter.
        let endpoint = Tile { row: 1, col: 4 };
        blinky.path = vec![
            Tile { row: 2, col: 1 },
            Tile { row: 3, col: 1 },
            Tile { row: 4, col: 1 },
            Tile { row: 4, col: 2 },
            Tile { row: 4, col: 3 },
            Tile { row: 4, col: 4 },
            Tile { row: 3, col: 4 },
            Tile { row: 2, col: 4 },
            endpoint,
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        blinky.update(&grid, &far_player(), Vec2::ZERO, MovePattern::Feared, &mut ctx(&mut rng));
        assert_eq!(blinky.path.last(), Some(&endpoint));
        assert_eq!(blinky.path.len(), 3, "direct corridor route wins");
    }

    #[test]
    fn tunnel_wrap_aims_past_the_grid_edge() {
        let grid = Grid::new();
        let mut blinky = Enemy::new(EnemyVariant::Blinky);
        // Sitting at the right tunnel mouth with a path wrapping to col 0.
        blinky.body = Body::at(Cell { col: 18, row: 10 }.center());
        let path = vec![Tile { row: 10, col: 18 }, Tile { row: 10, col: 0 }];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut context = ctx(&mut rng);

        blinky.follow(&path, MovePattern::Pursue(EnemyVariant::Blinky), &mut context);
        assert!(blinky.body.vel.x > 0.0, "wrap-forward continues rightward through the tunnel");
    }
}
