//! Continuous-position movement shared by the player and enemies.

use crate::types::{Cell, Direction, Tile, Vec2};

/// Position and velocity of an actor in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Body {
    pub fn at(pos: Vec2) -> Self {
        Self { pos, vel: Vec2::ZERO }
    }

    pub fn cell(&self) -> Cell {
        Cell::from_position(self.pos)
    }

    pub fn set_velocity(&mut self, direction: Direction, speed: f32) {
        self.vel = match direction {
            Direction::Up => Vec2 { x: 0.0, y: -speed },
            Direction::Right => Vec2 { x: speed, y: 0.0 },
            Direction::Down => Vec2 { x: 0.0, y: speed },
            Direction::Left => Vec2 { x: -speed, y: 0.0 },
        };
    }

    pub fn stop(&mut self) {
        self.vel = Vec2::ZERO;
    }

    /// Applies the current velocity and wraps horizontally across `width`.
    pub fn advance(&mut self, width: f32) {
        self.pos += self.vel;
        if self.pos.x > width {
            self.pos.x = 0.0;
        }
        if self.pos.x < 0.0 {
            self.pos.x = width;
        }
    }

    /// One movement step toward the center of `target`.
    ///
    /// Velocity is re-aimed only when the direction to the target is exactly
    /// one of the four axis units; any other direction leaves the previous
    /// velocity in place (and the body still advances with it). Callers keep
    /// actors pixel-aligned to the relevant axis, so off-axis directions only
    /// occur transiently.
    ///
    /// `throttle` carries the elapsed run time while the actor is feared:
    /// frames whose hundredths-of-a-second digit is even are skipped, halving
    /// apparent speed without touching the velocity magnitude.
    pub fn step_toward(&mut self, target: Tile, speed: f32, width: f32, throttle: Option<f64>) {
        let delta = self.pos - target.cell().center();
        // Already centered on the target; a routine occurrence, not an error.
        if delta.length() == 0.0 {
            return;
        }
        let direction = delta.normalized();

        if let Some(elapsed) = throttle
            && hundredths_digit(elapsed) % 2 == 0
        {
            return;
        }

        if direction == (Vec2 { x: 1.0, y: 0.0 }) {
            self.vel = Vec2 { x: -speed, y: 0.0 };
        } else if direction == (Vec2 { x: -1.0, y: 0.0 }) {
            self.vel = Vec2 { x: speed, y: 0.0 };
        } else if direction == (Vec2 { x: 0.0, y: 1.0 }) {
            self.vel = Vec2 { x: 0.0, y: -speed };
        } else if direction == (Vec2 { x: 0.0, y: -1.0 }) {
            self.vel = Vec2 { x: 0.0, y: speed };
        }

        self.advance(width);
    }
}

/// Second decimal digit of `elapsed` seconds.
fn hundredths_digit(elapsed: f64) -> u32 {
    ((elapsed.fract() * 100.0) % 10.0) as u32
}
