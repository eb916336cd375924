//! Long scripted runs asserting session-level invariants every frame.

use pacman_core::game::maze::GHOST_HOUSE;
use pacman_core::{DirectionKeys, FrameOutcome, Game, GameConfig, GameEvent};

fn scripted_keys(frame: u32) -> DirectionKeys {
    match (frame / 45) % 4 {
        0 => DirectionKeys { left: true, ..Default::default() },
        1 => DirectionKeys { down: true, ..Default::default() },
        2 => DirectionKeys { right: true, ..Default::default() },
        _ => DirectionKeys { up: true, ..Default::default() },
    }
}

fn assert_invariants(game: &Game) {
    let player_tile = game.player().cell().tile();
    assert!(!game.grid().is_wall(player_tile), "player inside wall at {player_tile:?}");

    for enemy in game.enemies() {
        let tile = enemy.cell().tile();
        let in_house = GHOST_HOUSE.contains(&tile);
        assert!(
            !game.grid().is_wall(tile) || in_house,
            "{} inside wall at {tile:?}",
            enemy.variant.name()
        );
    }

    assert!(game.lives() <= GameConfig::default().lives);
}

#[test]
fn two_thousand_frames_hold_invariants() {
    let mut game = Game::new(99, GameConfig::default());
    for frame in 0..2000 {
        let outcome = game.frame(&scripted_keys(frame));
        assert_invariants(&game);
        if !matches!(outcome, FrameOutcome::Continue | FrameOutcome::LifeLost { .. }) {
            break;
        }
    }
}

#[test]
fn idle_player_eventually_loses_every_life() {
    // Standing still at spawn: pursuit ends the run once enemies release.
    let mut game = Game::new(3, GameConfig::default());
    let keys = DirectionKeys::default();
    let mut outcome = FrameOutcome::Continue;
    for _ in 0..20_000 {
        outcome = game.frame(&keys);
        if matches!(outcome, FrameOutcome::GameOver { .. }) {
            break;
        }
    }
    assert!(matches!(outcome, FrameOutcome::GameOver { .. }), "run should end, got {outcome:?}");
    assert_eq!(game.lives(), 0);
    let losses =
        game.log().iter().filter(|e| matches!(e, GameEvent::LifeLost { .. })).count();
    assert_eq!(losses, GameConfig::default().lives as usize - 1);
}

#[test]
fn event_log_orders_losses_before_game_over() {
    let mut game = Game::new(3, GameConfig::default());
    let keys = DirectionKeys::default();
    for _ in 0..20_000 {
        if game.is_finished() {
            break;
        }
        game.frame(&keys);
    }
    let log = game.log();
    let game_over_index = log
        .iter()
        .position(|e| matches!(e, GameEvent::GameOver { .. }))
        .expect("idle run ends in game over");
    for (index, event) in log.iter().enumerate() {
        if matches!(event, GameEvent::LifeLost { .. }) {
            assert!(index < game_over_index);
        }
    }
}
