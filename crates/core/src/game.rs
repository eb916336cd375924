//! The per-frame session orchestrator.
//!
//! `Game` owns every mutable piece of a run — player, enemies, dots, timers,
//! score, lives — and advances them one fixed-rate frame at a time. The
//! presentation layer only feeds it key snapshots and reads back
//! [`RenderSnapshot`]s.

pub mod astar;
pub mod enemy;
pub mod maze;
pub mod motion;
pub mod player;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::grid::Grid;
use crate::state::{DotField, DotSnapshot, EnemySnapshot, PlayerSnapshot, RenderSnapshot};
use crate::timer::Timer;
use crate::types::{
    Cell, DirectionKeys, EnemyVariant, FRAME_DT, FrameOutcome, GameConfig, GameEvent, MovePattern,
    PIXEL_WIDTH,
};

use self::enemy::{Collision, Enemy, EnemyContext};
use self::player::Player;

/// Large-dot positions in cell coordinates.
pub const PELLETS: [Cell; 4] = [
    Cell { col: 1, row: 3 },
    Cell { col: 17, row: 3 },
    Cell { col: 1, row: 16 },
    Cell { col: 17, row: 16 },
];

const DOT_POINTS: i64 = 100;

pub struct Game {
    seed: u64,
    config: GameConfig,
    rng: ChaCha8Rng,
    grid: Grid,
    player: Player,
    enemies: [Enemy; 4],
    dots: DotField,
    max_points: i64,
    lives: u32,
    score: i64,
    frames: u64,
    run_timer: Timer,
    fear_timer: Timer,
    release_timer: Timer,
    /// Seconds after which each enemy starts acting, indexed like `enemies`.
    release_delays: [f64; 4],
    log: Vec<GameEvent>,
    paused: bool,
    /// Terminal outcome, latched so further frames are inert.
    finished: Option<FrameOutcome>,
}

impl Game {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = Grid::new();
        let dots = grid.init_dots(&PELLETS);
        let max_points = (dots.len() as i64 - 1) * DOT_POINTS;
        let release_delays = draw_release_delays(&mut rng);

        let mut run_timer = Timer::new();
        run_timer.start();
        let mut release_timer = Timer::new();
        release_timer.start();

        let mut game = Self {
            seed,
            config,
            rng,
            grid,
            player: Player::new(),
            enemies: EnemyVariant::ALL.map(Enemy::new),
            dots,
            max_points,
            lives: config.lives,
            score: 0,
            frames: 0,
            run_timer,
            fear_timer: Timer::new(),
            release_timer,
            release_delays,
            log: Vec::new(),
            paused: false,
            finished: None,
        };
        game.refresh_score();
        game
    }

    /// Advances the session by one frame.
    pub fn frame(&mut self, keys: &DirectionKeys) -> FrameOutcome {
        if let Some(outcome) = self.finished {
            return outcome;
        }
        if self.paused {
            return FrameOutcome::Continue;
        }
        self.frames += 1;
        self.run_timer.tick(FRAME_DT);
        self.release_timer.tick(FRAME_DT);
        self.fear_timer.tick(FRAME_DT);

        self.player.apply_keys(keys);
        self.player.step(&self.grid, self.config.base_speed, PIXEL_WIDTH);

        if let Some(dot) = self.dots.remove(&self.player.cell().tile()) {
            if dot.is_pellet {
                self.fear_timer.start();
                self.log.push(GameEvent::PelletEaten { tile: self.player.cell().tile() });
            }
        }

        self.refresh_score();
        if self.dots.is_empty() {
            self.score += time_bonus(self.run_timer.elapsed_secs());
            self.log.push(GameEvent::LevelComplete { score: self.score });
            let outcome = FrameOutcome::LevelComplete { score: self.score };
            self.finished = Some(outcome);
            return outcome;
        }

        if self.fear_timer.is_running()
            && self.fear_timer.elapsed_secs() > self.config.fear_duration_secs
        {
            self.fear_timer.stop().expect("fear timer was running");
        }
        let fear_active = self.fear_timer.is_running();

        let player_view = self.player.view();
        let blinky_pos = self.enemies[0].body.pos;
        let enemy_speed = self.config.base_speed * self.config.enemy_speed_factor;
        let elapsed_secs = self.run_timer.elapsed_secs();
        let released = self.release_timer.elapsed_secs();

        for index in 0..self.enemies.len() {
            if released <= self.release_delays[index] {
                continue;
            }
            let variant = self.enemies[index].variant;
            let pattern =
                if fear_active { MovePattern::Feared } else { MovePattern::Pursue(variant) };
            let mut context = EnemyContext {
                rng: &mut self.rng,
                speed: enemy_speed,
                width: PIXEL_WIDTH,
                elapsed_secs,
            };
            match self.enemies[index].update(
                &self.grid,
                &player_view,
                blinky_pos,
                pattern,
                &mut context,
            ) {
                Some(Collision::EnemyEaten) => {
                    self.log.push(GameEvent::EnemyEaten { variant });
                }
                Some(Collision::PlayerCaught) => {
                    self.lives -= 1;
                    self.refresh_score();
                    if self.lives == 0 {
                        self.log.push(GameEvent::GameOver { score: self.score });
                        let outcome = FrameOutcome::GameOver { score: self.score };
                        self.finished = Some(outcome);
                        return outcome;
                    }
                    self.reset_after_life_lost();
                    self.log.push(GameEvent::LifeLost { lives_left: self.lives });
                    return FrameOutcome::LifeLost { lives_left: self.lives };
                }
                None => {}
            }
        }

        self.refresh_score();
        FrameOutcome::Continue
    }

    /// Pausing freezes the run clock, release stagger, and any active fear
    /// window; resuming restarts exactly those that were running.
    pub fn set_paused(&mut self, paused: bool) {
        if paused == self.paused {
            return;
        }
        self.paused = paused;
        if paused {
            if self.run_timer.is_running() {
                self.run_timer.pause().expect("running timer pauses");
            }
            if self.release_timer.is_running() {
                self.release_timer.pause().expect("running timer pauses");
            }
            if self.fear_timer.is_running() {
                self.fear_timer.pause().expect("running timer pauses");
            }
        } else {
            self.run_timer.resume();
            self.release_timer.resume();
            self.fear_timer.resume();
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Rebuilds the cast after a lost life. Dots, score base, lives, and the
    /// run clock carry over; actors, release stagger, and fear state do not
    /// (per-enemy eat bonuses reset with their owners).
    fn reset_after_life_lost(&mut self) {
        self.player = Player::new();
        self.enemies = EnemyVariant::ALL.map(Enemy::new);
        self.release_delays = draw_release_delays(&mut self.rng);
        self.release_timer.start();
        self.fear_timer = Timer::new();
    }

    fn refresh_score(&mut self) {
        let bonuses: i64 = self.enemies.iter().map(|enemy| enemy.score).sum();
        self.score = self.max_points - self.dots.len() as i64 * DOT_POINTS + bonuses;
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            player: PlayerSnapshot { pos: self.player.body.pos, facing: self.player.facing() },
            enemies: self
                .enemies
                .iter()
                .map(|enemy| EnemySnapshot {
                    variant: enemy.variant,
                    pos: enemy.body.pos,
                    fear_phase: enemy.fear_phase,
                    at_home: enemy.at_home(),
                    path: enemy.path.clone(),
                })
                .collect(),
            dots: self
                .dots
                .iter()
                .map(|(&tile, dot)| DotSnapshot { tile, is_pellet: dot.is_pellet })
                .collect(),
            lives: self.lives,
            score: self.score,
            elapsed_secs: self.run_timer.elapsed_secs(),
            fear_active: self.fear_timer.is_running(),
        }
    }

    /// xxh3 over the canonical session state, for determinism checks.
    pub fn snapshot_hash(&self) -> u64 {
        use std::hash::Hasher;
        use xxhash_rust::xxh3::Xxh3;

        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.frames);
        hasher.write_u32(self.lives);
        hasher.write_i64(self.score);
        hasher.write_u64(self.dots.len() as u64);
        hasher.write_u32(self.player.body.pos.x.to_bits());
        hasher.write_u32(self.player.body.pos.y.to_bits());
        for enemy in &self.enemies {
            hasher.write_u32(enemy.body.pos.x.to_bits());
            hasher.write_u32(enemy.body.pos.y.to_bits());
            hasher.write_u8(enemy.fear_phase as u8);
            hasher.write_i64(enemy.score);
        }
        hasher.finish()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy; 4] {
        &self.enemies
    }

    pub fn dots(&self) -> &DotField {
        &self.dots
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.run_timer.elapsed_secs()
    }

    pub fn fear_active(&self) -> bool {
        self.fear_timer.is_running()
    }

    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    pub fn log(&self) -> &[GameEvent] {
        &self.log
    }
}

/// Four distinct release delays in whole seconds from 0..10, assigned in
/// ascending order to blinky, pinky, inky, clyde.
fn draw_release_delays(rng: &mut ChaCha8Rng) -> [f64; 4] {
    let mut picks: Vec<u64> = Vec::with_capacity(4);
    while picks.len() < 4 {
        let value = rng.next_u64() % 10;
        if !picks.contains(&value) {
            picks.push(value);
        }
    }
    picks.sort_unstable();
    [picks[0] as f64, picks[1] as f64, picks[2] as f64, picks[3] as f64]
}

/// Completion bonus scaled by how fast the run finished.
fn time_bonus(elapsed_secs: f64) -> i64 {
    let time = elapsed_secs as i64;
    if time < 30 {
        600 + 500
    } else if time < 150 {
        (120 - (time - 30)) * 5 + 500
    } else {
        500
    }
}
