pub mod game;
pub mod grid;
pub mod state;
pub mod timer;
pub mod types;

pub use game::enemy::{Collision, Enemy, EnemyContext};
pub use game::player::{PLAYER_SPAWN, Player};
pub use game::{Game, PELLETS};
pub use grid::{Grid, WallGrid};
pub use state::{Dot, DotField, EnemySnapshot, PlayerSnapshot, RenderSnapshot};
pub use timer::{Timer, TimerError};
pub use types::*;
