use bevy_ecs::system::RunSystemOnce;
use elsa::constants::player::{GROUND_LEVEL, JUMP_IMPULSE, SPEED, START};
use elsa::game::Game;
use elsa::systems::{
    apply_input, integrate_physics, player_control_system, update_pose, Player, PlayerPose, PressedKeys, RunPhase,
    DeathSequence,
};
use glam::Vec2;
use speculoos::prelude::*;

mod common;

#[test]
fn test_player_starts_grounded() {
    let player = Player::default();
    assert_that(&player.position).is_equal_to(START);
    assert_that(&player.on_ground).is_true();
    assert_that(&player.alive).is_true();
    assert_that(&player.pose).is_equal_to(PlayerPose::Idle);
}

#[test]
fn test_horizontal_movement() {
    let mut player = Player::default();
    apply_input(&mut player, PressedKeys::RIGHT);
    assert_that(&player.position.x).is_equal_to(START.x + SPEED);

    apply_input(&mut player, PressedKeys::LEFT);
    assert_that(&player.position.x).is_equal_to(START.x);

    apply_input(&mut player, PressedKeys::LEFT | PressedKeys::RIGHT);
    assert_that(&player.position.x).is_equal_to(START.x);
}

#[test]
fn test_jump_requires_ground() {
    let mut player = Player::default();
    apply_input(&mut player, PressedKeys::JUMP);
    assert_that(&player.velocity_y).is_equal_to(JUMP_IMPULSE);
    assert_that(&player.on_ground).is_false();

    integrate_physics(&mut player);
    let airborne_velocity = player.velocity_y;
    apply_input(&mut player, PressedKeys::JUMP);
    assert_that(&player.velocity_y).is_equal_to(airborne_velocity);
}

#[test]
fn test_physics_never_sinks_below_ground() {
    let mut player = Player {
        position: Vec2::new(100.0, GROUND_LEVEL - 1.0),
        velocity_y: 30.0,
        on_ground: false,
        ..Player::default()
    };
    integrate_physics(&mut player);
    assert_that(&player.position.y).is_equal_to(GROUND_LEVEL);
    assert_that(&player.velocity_y).is_equal_to(0.0);
    assert_that(&player.on_ground).is_true();
}

#[test]
fn test_jump_arc_lands_after_26_frames() {
    let mut game = Game::headless();
    common::hold(&mut game, PressedKeys::JUMP);
    game.tick();
    common::hold(&mut game, PressedKeys::empty());

    let mut highest = common::player(&game).position.y;
    let mut frames = 1;
    while !common::player(&game).on_ground {
        let player = common::player(&game);
        assert_that(&player.position.y).is_less_than_or_equal_to(GROUND_LEVEL);
        assert_that(&player.pose).is_equal_to(PlayerPose::Jump);
        highest = highest.min(player.position.y);

        game.tick();
        frames += 1;
        assert_that(&frames).is_less_than(100);
    }

    assert_that(&frames).is_equal_to(26);
    assert_that(&common::player(&game).position.y).is_equal_to(GROUND_LEVEL);
    assert_that(&common::player(&game).velocity_y).is_equal_to(0.0);
    assert_that(&highest).is_greater_than(180.0);
    assert_that(&highest).is_less_than(190.0);
}

#[test]
fn test_walk_pose_alternates_every_ten_frames() {
    let mut player = Player::default();
    let poses: Vec<PlayerPose> = (0..20)
        .map(|_| {
            update_pose(&mut player, true);
            player.pose
        })
        .collect();

    assert_that(&poses[..9].iter().all(|pose| *pose == PlayerPose::Walk1)).is_true();
    assert_that(&poses[9..19].iter().all(|pose| *pose == PlayerPose::Walk2)).is_true();
    assert_that(&poses[19]).is_equal_to(PlayerPose::Walk1);

    update_pose(&mut player, false);
    assert_that(&player.pose).is_equal_to(PlayerPose::Idle);
}

#[test]
fn test_control_ignored_after_death() {
    let mut world = common::create_test_world();
    world.insert_resource(PressedKeys::RIGHT | PressedKeys::JUMP);
    world.insert_resource(RunPhase::Dying(DeathSequence::new(Vec2::ZERO, START)));

    world
        .run_system_once(player_control_system)
        .expect("System should run successfully");

    let player = world.resource::<Player>();
    assert_that(&player.position).is_equal_to(START);
    assert_that(&player.on_ground).is_true();
}
