#![allow(dead_code)]

use bevy_ecs::world::World;
use elsa::{
    game::Game,
    systems::{Player, PressedKeys, RunPhase},
};
use glam::Vec2;
use sdl2::{
    render::{Canvas, TextureCreator},
    video::{Window, WindowContext},
    Sdl,
};

/// A hidden window with a software canvas. Uses the dummy video driver unless another one is set.
///
/// SDL can only be initialised from one thread per process, so call this at most once per test binary.
pub fn setup_sdl() -> Result<(Canvas<Window>, TextureCreator<WindowContext>, Sdl), String> {
    if std::env::var_os("SDL_VIDEODRIVER").is_none() {
        std::env::set_var("SDL_VIDEODRIVER", "dummy");
    }

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let window = video_subsystem
        .window("test", 800, 400)
        .hidden()
        .build()
        .map_err(|e| e.to_string())?;
    let canvas = window.into_canvas().software().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    Ok((canvas, texture_creator, sdl_context))
}

/// A world holding every simulation resource in its starting state.
pub fn create_test_world() -> World {
    let mut world = World::default();
    Game::insert_state_resources(&mut world);
    world
}

pub fn hold(game: &mut Game, keys: PressedKeys) {
    *game.world.resource_mut::<PressedKeys>() = keys;
}

pub fn place_player(game: &mut Game, position: Vec2) {
    game.world.resource_mut::<Player>().position = position;
}

pub fn player(game: &Game) -> Player {
    *game.world.resource::<Player>()
}

pub fn phase(game: &Game) -> RunPhase {
    *game.world.resource::<RunPhase>()
}

/// Ticks until `done` holds, returning the number of ticks taken, or `None` after `limit` ticks.
pub fn tick_until(game: &mut Game, limit: u32, mut done: impl FnMut(&Game) -> bool) -> Option<u32> {
    for tick in 1..=limit {
        game.tick();
        if done(game) {
            return Some(tick);
        }
    }
    None
}
