//! Rendering for the maze, actors, HUD, and the debug overlay.

use macroquad::prelude::*;
use pacman_app::app_loop::{AppMode, AppState};
use pacman_app::debug_view::{self, DebugMatrix};
use pacman_app::format_score;
use pacman_core::game::maze::GHOST_HOUSE;
use pacman_core::types::{Direction, EnemyVariant, PIXEL_HEIGHT, PIXEL_WIDTH, TILE_SIZE, Tile};
use pacman_core::{EnemySnapshot, FrameOutcome, Game, RenderSnapshot};

const WALL_COLOR: Color = Color { r: 0.0, g: 0.0, b: 1.0, a: 1.0 };
const DOOR_COLOR: Color = Color { r: 1.0, g: 0.65, b: 0.0, a: 1.0 };
const PLAYER_COLOR: Color = Color { r: 1.0, g: 1.0, b: 0.0, a: 1.0 };
const FEAR_BLUE: Color = Color { r: 0.0, g: 0.5, b: 1.0, a: 1.0 };
const FEAR_PATH_COLOR: Color = Color { r: 0.5, g: 0.5, b: 0.5, a: 1.0 };
/// Blinky's path highlight uses a muted red so it reads apart from its body.
const BLINKY_PATH_COLOR: Color = Color { r: 0.78, g: 0.2, b: 0.2, a: 1.0 };
/// Body color pulse period while feared, in seconds.
const FEAR_BLINK_PERIOD: f64 = 0.4;

const TILE: f32 = TILE_SIZE as f32;

pub fn draw_frame(game: &Game, app: &AppState) {
    let snapshot = game.snapshot();
    clear_background(BLACK);

    draw_maze(game);
    if app.highlight_paths {
        draw_path_highlights(&snapshot);
    }
    draw_dots(&snapshot);
    draw_enemies(&snapshot);
    draw_player(&snapshot);
    draw_hud(&snapshot);

    if app.show_debug_overlay {
        draw_debug_overlay(&debug_view::debug_matrix(game.grid(), &snapshot));
    }
    draw_mode_banner(app);
}

fn cell_origin(col: i32, row: i32) -> (f32, f32) {
    (col as f32 * TILE, row as f32 * TILE)
}

fn draw_maze(game: &Game) {
    for (row, wall_row) in game.grid().walls().iter().enumerate() {
        for (col, &wall) in wall_row.iter().enumerate() {
            if wall == 0 {
                continue;
            }
            let tile = Tile { row: row as i32, col: col as i32 };
            if GHOST_HOUSE.contains(&tile) {
                continue; // house interior renders black
            }
            let (x, y) = cell_origin(col as i32, row as i32);
            draw_rectangle(x + 0.5, y + 0.5, TILE - 1.0, TILE - 1.0, WALL_COLOR);
        }
    }
    // The house door sits on the top edge of the entrance tile.
    let (door_x, door_y) = cell_origin(9, 9);
    draw_rectangle(door_x, door_y - 1.5, TILE, 3.0, DOOR_COLOR);
}

fn draw_dots(snapshot: &RenderSnapshot) {
    for dot in &snapshot.dots {
        let center = dot.tile.cell().center();
        let radius = if dot.is_pellet { 5.0 } else { 2.0 };
        draw_circle(center.x, center.y, radius, WHITE);
    }
}

fn draw_path_highlights(snapshot: &RenderSnapshot) {
    for enemy in &snapshot.enemies {
        let color = if snapshot.fear_active && !enemy.at_home {
            FEAR_PATH_COLOR
        } else {
            path_color(enemy.variant)
        };
        for tile in &enemy.path {
            let (x, y) = cell_origin(tile.col, tile.row);
            draw_rectangle_lines(x + 6.0, y + 6.0, 9.0, 9.0, 1.0, color);
        }
    }
}

fn draw_enemies(snapshot: &RenderSnapshot) {
    for enemy in &snapshot.enemies {
        let color = enemy_body_color(snapshot, enemy);
        // Round head over a square skirt.
        draw_circle(enemy.pos.x, enemy.pos.y, 9.0, color);
        draw_rectangle(enemy.pos.x - 9.0, enemy.pos.y, 18.0, 9.0, color);
    }
}

fn enemy_body_color(snapshot: &RenderSnapshot, enemy: &EnemySnapshot) -> Color {
    if snapshot.fear_active && !enemy.at_home {
        let blink = (get_time() / FEAR_BLINK_PERIOD) as i64 % 2 == 0;
        if blink { FEAR_BLUE } else { WHITE }
    } else {
        body_color(enemy.variant)
    }
}

fn body_color(variant: EnemyVariant) -> Color {
    match variant {
        EnemyVariant::Blinky => Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 },
        EnemyVariant::Pinky => Color { r: 1.0, g: 0.41, b: 0.71, a: 1.0 },
        EnemyVariant::Inky => Color { r: 0.0, g: 1.0, b: 1.0, a: 1.0 },
        EnemyVariant::Clyde => Color { r: 0.98, g: 0.73, b: 0.33, a: 1.0 },
    }
}

fn path_color(variant: EnemyVariant) -> Color {
    match variant {
        EnemyVariant::Blinky => BLINKY_PATH_COLOR,
        other => body_color(other),
    }
}

fn draw_player(snapshot: &RenderSnapshot) {
    let pos = snapshot.player.pos;
    draw_circle(pos.x, pos.y, 7.5, PLAYER_COLOR);
    // Mouth wedge pointing along the current facing.
    let (tip, upper, lower) = match snapshot.player.facing {
        Some(Direction::Right) | None => ((9.0, 0.0), (0.0, -3.5), (0.0, 3.5)),
        Some(Direction::Left) => ((-9.0, 0.0), (0.0, -3.5), (0.0, 3.5)),
        Some(Direction::Up) => ((0.0, -9.0), (-3.5, 0.0), (3.5, 0.0)),
        Some(Direction::Down) => ((0.0, 9.0), (-3.5, 0.0), (3.5, 0.0)),
    };
    draw_triangle(
        vec2(pos.x + tip.0, pos.y + tip.1),
        vec2(pos.x + upper.0, pos.y + upper.1),
        vec2(pos.x + lower.0, pos.y + lower.1),
        BLACK,
    );
}

fn draw_hud(snapshot: &RenderSnapshot) {
    let hud_y = PIXEL_HEIGHT + 20.0;
    for life in 0..snapshot.lives {
        draw_circle(14.0 + life as f32 * 20.0, hud_y, 7.0, PLAYER_COLOR);
    }
    let score = format_score(snapshot.score);
    draw_text(&score, PIXEL_WIDTH - 90.0, hud_y + 6.0, 22.0, WHITE);
    let clock = format!("{:>4.0}s", snapshot.elapsed_secs);
    draw_text(&clock, PIXEL_WIDTH / 2.0 - 24.0, hud_y + 6.0, 22.0, GRAY);
}

fn draw_debug_overlay(matrix: &DebugMatrix) {
    const SCALE: f32 = 6.0;
    let width = matrix[0].len() as f32 * SCALE;
    let height = matrix.len() as f32 * SCALE;
    draw_rectangle(0.0, 0.0, width, height, Color { r: 0.0, g: 0.0, b: 0.0, a: 0.8 });

    for (row, codes) in matrix.iter().enumerate() {
        for (col, &code) in codes.iter().enumerate() {
            let color = match code {
                debug_view::WALL => DARKBLUE,
                debug_view::DOT => GRAY,
                debug_view::PELLET => WHITE,
                debug_view::ENEMY => RED,
                debug_view::FEARED_ENEMY => SKYBLUE,
                debug_view::PLAYER => YELLOW,
                _ => continue,
            };
            draw_rectangle(col as f32 * SCALE, row as f32 * SCALE, SCALE, SCALE, color);
        }
    }
}

fn draw_mode_banner(app: &AppState) {
    let text = match app.mode {
        AppMode::Running => return,
        AppMode::Paused => "PAUSE - ESC RESUMES",
        AppMode::Finished(FrameOutcome::GameOver { .. }) => "GAME OVER",
        AppMode::Finished(FrameOutcome::LevelComplete { .. }) => "LEVEL CLEAR",
        AppMode::Finished(_) => return,
    };
    let size = 32.0;
    let measured = measure_text(text, None, size as u16, 1.0);
    draw_text(text, (PIXEL_WIDTH - measured.width) / 2.0, PIXEL_HEIGHT * 0.4, size, WHITE);
}
