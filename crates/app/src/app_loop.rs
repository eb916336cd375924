//! Frame glue between captured input and the core session.

use pacman_core::{DirectionKeys, FrameOutcome, Game};

/// Input captured from the window for one rendered frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct AppInput {
    pub keys: DirectionKeys,
    pub pause_toggle: bool,
    pub debug_toggle: bool,
    pub highlight_toggle: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    #[default]
    Running,
    Paused,
    Finished(FrameOutcome),
}

#[derive(Debug, Default)]
pub struct AppState {
    pub mode: AppMode,
    pub show_debug_overlay: bool,
    pub highlight_paths: bool,
    /// Set once the final score has been appended to the high-score file.
    pub score_recorded: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes one frame of input and, unless paused or finished, advances
    /// the game by one frame.
    pub fn tick(&mut self, game: &mut Game, input: &AppInput) {
        if input.debug_toggle {
            self.show_debug_overlay = !self.show_debug_overlay;
        }
        if input.highlight_toggle {
            self.highlight_paths = !self.highlight_paths;
        }

        match self.mode {
            AppMode::Running => {
                if input.pause_toggle {
                    game.set_paused(true);
                    self.mode = AppMode::Paused;
                    return;
                }
                match game.frame(&input.keys) {
                    FrameOutcome::Continue | FrameOutcome::LifeLost { .. } => {}
                    done => self.mode = AppMode::Finished(done),
                }
            }
            AppMode::Paused => {
                if input.pause_toggle {
                    game.set_paused(false);
                    self.mode = AppMode::Running;
                }
            }
            AppMode::Finished(_) => {}
        }
    }

    pub fn final_score(&self) -> Option<i64> {
        match self.mode {
            AppMode::Finished(
                FrameOutcome::GameOver { score } | FrameOutcome::LevelComplete { score },
            ) => Some(score),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pacman_core::GameConfig;

    use super::*;

    fn game() -> Game {
        Game::new(1, GameConfig::default())
    }

    fn pause_input() -> AppInput {
        AppInput { pause_toggle: true, ..Default::default() }
    }

    #[test]
    fn pause_toggle_freezes_and_releases_the_game() {
        let mut game = game();
        let mut app = AppState::new();

        app.tick(&mut game, &pause_input());
        assert_eq!(app.mode, AppMode::Paused);
        assert!(game.is_paused());
        let frames = game.frames();

        app.tick(&mut game, &AppInput::default());
        assert_eq!(game.frames(), frames, "paused app must not advance the game");

        app.tick(&mut game, &pause_input());
        assert_eq!(app.mode, AppMode::Running);
        assert!(!game.is_paused());
    }

    #[test]
    fn overlay_toggles_are_edge_triggered() {
        let mut game = game();
        let mut app = AppState::new();
        let toggle = AppInput { debug_toggle: true, highlight_toggle: true, ..Default::default() };

        app.tick(&mut game, &toggle);
        assert!(app.show_debug_overlay);
        assert!(app.highlight_paths);

        app.tick(&mut game, &toggle);
        assert!(!app.show_debug_overlay);
        assert!(!app.highlight_paths);
    }

    #[test]
    fn terminal_outcome_moves_the_app_to_finished() {
        let mut game = game();
        let mut app = AppState::new();

        // An idle player loses all three lives to pursuit eventually.
        let keys = AppInput::default();
        for _ in 0..30_000 {
            app.tick(&mut game, &keys);
            if matches!(app.mode, AppMode::Finished(_)) {
                break;
            }
        }
        assert!(matches!(app.mode, AppMode::Finished(FrameOutcome::GameOver { .. })));
        assert_eq!(app.final_score(), Some(game.score()));

        let frames = game.frames();
        app.tick(&mut game, &keys);
        assert_eq!(game.frames(), frames, "finished app must stop ticking the game");
    }
}
