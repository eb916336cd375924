//! Shared session data: dots, and the per-frame snapshot handed to
//! presentation layers.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{Cell, Direction, EnemyVariant, FearPhase, Tile, Vec2};

/// A collectible keyed by its tile. Pellets open the fear window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Dot {
    pub is_pellet: bool,
}

pub type DotField = BTreeMap<Tile, Dot>;

/// Read-only view of the player for enemy target selection.
#[derive(Clone, Copy, Debug)]
pub struct PlayerView {
    pub pos: Vec2,
    pub cell: Cell,
    pub facing: Option<Direction>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PlayerSnapshot {
    pub pos: Vec2,
    pub facing: Option<Direction>,
}

#[derive(Clone, Debug, Serialize)]
pub struct EnemySnapshot {
    pub variant: EnemyVariant,
    pub pos: Vec2,
    pub fear_phase: FearPhase,
    pub at_home: bool,
    pub path: Vec<Tile>,
}

#[derive(Clone, Debug, Serialize)]
pub struct DotSnapshot {
    pub tile: Tile,
    pub is_pellet: bool,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, Serialize)]
pub struct RenderSnapshot {
    pub player: PlayerSnapshot,
    pub enemies: Vec<EnemySnapshot>,
    pub dots: Vec<DotSnapshot>,
    pub lives: u32,
    pub score: i64,
    pub elapsed_secs: f64,
    pub fear_active: bool,
}
