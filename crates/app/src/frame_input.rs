//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};
use pacman_app::app_loop::AppInput;
use pacman_core::DirectionKeys;

pub fn capture_frame_input() -> AppInput {
    AppInput {
        keys: DirectionKeys {
            up: is_key_down(KeyCode::Up),
            right: is_key_down(KeyCode::Right),
            down: is_key_down(KeyCode::Down),
            left: is_key_down(KeyCode::Left),
        },
        pause_toggle: is_key_pressed(KeyCode::Escape),
        debug_toggle: is_key_pressed(KeyCode::T),
        highlight_toggle: is_key_pressed(KeyCode::H),
    }
}
