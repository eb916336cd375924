//! Player movement: buffered direction changes and wall sliding.
//!
//! A requested turn is held until the player is pixel-aligned on the axis
//! the turn needs; until then the previous direction continues. Running into
//! a wall stops the body exactly on the cell center.

use crate::game::motion::Body;
use crate::grid::Grid;
use crate::state::PlayerView;
use crate::types::{Cell, Direction, DirectionKeys, TILE_SIZE};

pub const PLAYER_SPAWN: Cell = Cell { col: 9, row: 16 };

#[derive(Clone, Debug)]
pub struct Player {
    pub body: Body,
    /// Latest direction the player asked for; sticky across frames.
    requested: Option<Direction>,
    /// Direction the body is actually traveling.
    travel: Option<Direction>,
    turn_pending: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            body: Body::at(PLAYER_SPAWN.center()),
            requested: None,
            travel: None,
            turn_pending: false,
        }
    }

    pub fn cell(&self) -> Cell {
        self.body.cell()
    }

    pub fn facing(&self) -> Option<Direction> {
        self.requested
    }

    pub fn view(&self) -> PlayerView {
        PlayerView { pos: self.body.pos, cell: self.cell(), facing: self.requested }
    }

    /// Records held keys; the last key in reading order wins on conflicts.
    pub fn apply_keys(&mut self, keys: &DirectionKeys) {
        if keys.left {
            self.requested = Some(Direction::Left);
        }
        if keys.right {
            self.requested = Some(Direction::Right);
        }
        if keys.up {
            self.requested = Some(Direction::Up);
        }
        if keys.down {
            self.requested = Some(Direction::Down);
        }
        if self.requested != self.travel {
            self.turn_pending = true;
        }
    }

    /// One frame of movement against the grid.
    pub fn step(&mut self, grid: &Grid, speed: f32, width: f32) {
        let cell = self.cell();
        let ahead_requested = grid.next_cell(cell, self.requested);
        let ahead_travel = grid.next_cell(cell, self.travel);
        let requested_open = !grid.is_wall(ahead_requested.tile());

        if self.turn_pending && requested_open {
            if let Some(direction) = self.requested
                && self.turn_aligned(direction)
            {
                self.body.set_velocity(direction, speed);
                self.travel = Some(direction);
                self.turn_pending = false;
                self.body.advance(width);
            } else {
                self.move_along(self.travel, speed, width);
            }
        } else if self.turn_pending {
            // Requested direction is walled; keep sliding, stop if the
            // current corridor also ends.
            if grid.is_wall(ahead_travel.tile()) {
                self.stop_or_continue(speed, width);
            } else {
                self.move_along(self.travel, speed, width);
            }
        } else if grid.is_wall(ahead_requested.tile()) {
            self.stop_or_continue(speed, width);
        } else {
            self.move_along(self.travel, speed, width);
        }
    }

    fn stop_or_continue(&mut self, speed: f32, width: f32) {
        match self.travel {
            Some(direction) if self.travel_aligned(direction) => self.body.stop(),
            _ => self.move_along(self.travel, speed, width),
        }
    }

    fn move_along(&mut self, direction: Option<Direction>, speed: f32, width: f32) {
        if let Some(direction) = direction {
            self.body.set_velocity(direction, speed);
        }
        self.body.advance(width);
    }

    /// Turning onto a vertical corridor needs the column center; onto a
    /// horizontal corridor, the row center.
    fn turn_aligned(&self, direction: Direction) -> bool {
        if direction.is_vertical() { self.x_centered() } else { self.y_centered() }
    }

    /// Stopping happens on the center of the axis being traveled.
    fn travel_aligned(&self, direction: Direction) -> bool {
        if direction.is_vertical() { self.y_centered() } else { self.x_centered() }
    }

    fn x_centered(&self) -> bool {
        self.body.pos.x.rem_euclid(TILE_SIZE as f32) == (TILE_SIZE / 2) as f32
    }

    fn y_centered(&self) -> bool {
        self.body.pos.y.rem_euclid(TILE_SIZE as f32) == (TILE_SIZE / 2) as f32
    }
}
