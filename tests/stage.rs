use elsa::constants::outro::{APPROACH_FRAMES, FADE_STEPS, MESSAGE_HOLD_TICKS, PAUSE_TICKS, STEP_HOLD_TICKS};
use elsa::game::Game;
use elsa::systems::{DeathStep, FinishSequence, GlobalState, RunPhase};
use glam::Vec2;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

const DEATH_SEQUENCE_TICKS: u32 =
    APPROACH_FRAMES * STEP_HOLD_TICKS + FADE_STEPS * STEP_HOLD_TICKS + PAUSE_TICKS + MESSAGE_HOLD_TICKS;

fn exit_requested(game: &Game) -> bool {
    game.world.resource::<GlobalState>().exit
}

#[test]
fn test_death_sequence_length() {
    assert_eq!(DEATH_SEQUENCE_TICKS, 352);
}

#[test]
fn test_running_into_first_obstacle_starts_death() {
    let mut game = Game::headless();
    common::hold(&mut game, elsa::systems::PressedKeys::RIGHT);

    let ticks = common::tick_until(&mut game, 200, |game| !common::phase(game).is_running());
    assert_that(&ticks).is_equal_to(Some(52));

    let player = common::player(&game);
    assert_that(&player.position.x).is_equal_to(258.0);
    assert_that(&player.alive).is_false();

    match common::phase(&game) {
        RunPhase::Dying(sequence) => {
            assert_eq!(
                sequence.step,
                DeathStep::Approach {
                    frame: 0,
                    remaining_ticks: STEP_HOLD_TICKS
                }
            );
            assert_eq!(sequence.shadow_to, Vec2::new(178.0, 50.0));
        }
        other => panic!("expected death sequence, got {other:?}"),
    }
}

#[test]
fn test_death_is_entered_once_and_plays_forward() {
    let mut game = Game::headless();
    common::hold(&mut game, elsa::systems::PressedKeys::RIGHT);
    common::tick_until(&mut game, 200, |game| !common::phase(game).is_running()).expect("player should hit an obstacle");

    for _ in 0..10 {
        game.tick();
        // Input no longer moves the player, and the overlap is not re-detected.
        assert_that(&common::player(&game).position.x).is_equal_to(258.0);
    }

    match common::phase(&game) {
        RunPhase::Dying(sequence) => assert_eq!(
            sequence.step,
            DeathStep::Approach {
                frame: 5,
                remaining_ticks: STEP_HOLD_TICKS
            }
        ),
        other => panic!("expected death sequence, got {other:?}"),
    }
}

#[test]
fn test_death_sequence_exits_after_full_outro() {
    let mut game = Game::headless();
    common::hold(&mut game, elsa::systems::PressedKeys::RIGHT);
    common::tick_until(&mut game, 200, |game| !common::phase(game).is_running()).expect("player should hit an obstacle");

    for _ in 1..DEATH_SEQUENCE_TICKS {
        assert_that(&game.tick()).is_false();
        assert_that(&common::phase(&game).is_running()).is_false();
    }

    assert_that(&game.tick()).is_true();
    assert_that(&exit_requested(&game)).is_true();
    assert_that(&common::phase(&game).is_complete()).is_true();
}

#[test]
fn test_crossing_finish_line() {
    let mut game = Game::headless();
    common::place_player(&mut game, Vec2::new(660.0, elsa::constants::player::GROUND_LEVEL));
    common::hold(&mut game, elsa::systems::PressedKeys::RIGHT);

    let ticks = common::tick_until(&mut game, 100, |game| !common::phase(game).is_running());
    assert_that(&ticks).is_equal_to(Some(10));
    assert_that(&common::player(&game).position.x).is_equal_to(700.0);
    assert_that(&common::player(&game).alive).is_true();
    assert_eq!(common::phase(&game), RunPhase::Finished(FinishSequence::new()));

    for _ in 1..MESSAGE_HOLD_TICKS {
        assert_that(&game.tick()).is_false();
    }
    assert_that(&game.tick()).is_true();
    assert_eq!(common::phase(&game), RunPhase::Finished(FinishSequence::Complete));
}

#[test]
fn test_phase_is_frozen_after_exit() {
    let mut game = Game::headless();
    game.world.resource_mut::<GlobalState>().exit = true;
    common::hold(&mut game, elsa::systems::PressedKeys::RIGHT);

    assert_that(&game.tick()).is_true();
    assert_that(&common::player(&game).position.x).is_equal_to(elsa::constants::player::START.x);
}
