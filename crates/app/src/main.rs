mod frame_input;
mod render;
mod window_config;

use macroquad::prelude::*;
use pacman_app::app_loop::{AppMode, AppState};
use pacman_app::high_scores::{self, ScoreRecord};
use pacman_app::seed::{generate_runtime_seed, parse_cli};
use pacman_core::{Game, GameConfig};

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_cli(&args, generate_runtime_seed()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    let mut game = Game::new(options.seed.value(), GameConfig::default());
    let mut app = AppState::new();

    loop {
        let input = frame_input::capture_frame_input();
        app.tick(&mut game, &input);

        if let Some(score) = app.final_score()
            && !app.score_recorded
        {
            app.score_recorded = true;
            record_high_score(&options.name, score);
        }

        // Esc leaves the game once the run has ended.
        if matches!(app.mode, AppMode::Finished(_)) && is_key_pressed(KeyCode::Escape) {
            break;
        }

        render::draw_frame(&game, &app);
        next_frame().await
    }
}

fn record_high_score(name: &str, score: i64) {
    let Some(path) = high_scores::default_path() else {
        eprintln!("no writable data directory; high score not recorded");
        return;
    };
    let record = ScoreRecord { name: name.to_string(), value: score };
    if let Err(error) = high_scores::append(&path, record) {
        eprintln!("failed to record high score: {error}");
    }
}
