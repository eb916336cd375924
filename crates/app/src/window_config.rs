//! Window configuration for the desktop app.

use macroquad::window::Conf;
use pacman_app::APP_NAME;
use pacman_core::types::{PIXEL_HEIGHT, PIXEL_WIDTH};

/// Extra vertical space under the maze for lives and score.
pub const HUD_HEIGHT: f32 = 30.0;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: PIXEL_WIDTH as i32,
        window_height: (PIXEL_HEIGHT + HUD_HEIGHT) as i32,
        high_dpi: true,
        window_resizable: false,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_matches_the_grid_plus_hud() {
        let conf = build_window_conf();
        assert_eq!(conf.window_width, 380);
        assert_eq!(conf.window_height, 470);
        assert!(!conf.window_resizable);
    }
}
