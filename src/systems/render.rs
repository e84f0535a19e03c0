use bevy_ecs::system::{NonSend, NonSendMut, Res};
use glam::Vec2;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, Texture};
use sdl2::video::Window;
use tracing::warn;

use crate::asset::{Asset, Banners, Sprites};
use crate::constants::{color, level, outro::MESSAGE_POSITION, CANVAS_SIZE};
use crate::systems::{
    collision::{Hitbox, Obstacles},
    player::Player,
    shadow::Shadow,
    stage::{DeathSequence, DeathStep, FinishSequence, RunPhase},
};

fn to_rect(hitbox: &Hitbox) -> Rect {
    Rect::new(
        hitbox.position.x as i32,
        hitbox.position.y as i32,
        hitbox.size.x as u32,
        hitbox.size.y as u32,
    )
}

/// Copies a texture at its natural size with its top-left corner at `position`.
fn blit(canvas: &mut Canvas<Window>, texture: &Texture, position: Vec2) -> Result<(), String> {
    let query = texture.query();
    let dest = Rect::new(position.x as i32, position.y as i32, query.width, query.height);
    canvas.copy(texture, None, dest)
}

fn blit_asset(canvas: &mut Canvas<Window>, sprites: &Sprites, asset: Asset, position: Vec2) -> Result<(), String> {
    match sprites.get(asset) {
        Some(texture) => blit(canvas, texture, position),
        None => Ok(()),
    }
}

fn draw_running(
    canvas: &mut Canvas<Window>,
    sprites: &Sprites,
    player: &Player,
    shadow: &Shadow,
    obstacles: &Obstacles,
) -> Result<(), String> {
    canvas.set_draw_color(color::CLEAR);
    canvas.clear();
    blit_asset(canvas, sprites, Asset::Background, Vec2::ZERO)?;

    if shadow.visible {
        blit_asset(canvas, sprites, Asset::Shadow, shadow.screen_position())?;
    }

    canvas.set_draw_color(color::OBSTACLE);
    for obstacle in obstacles.iter() {
        canvas.fill_rect(to_rect(obstacle))?;
    }

    blit_asset(canvas, sprites, Asset::from(player.pose), player.sprite_position())?;

    canvas.set_draw_color(color::GROUND);
    canvas.fill_rect(to_rect(&level::GROUND))?;

    canvas.set_draw_color(color::FINISH_MARKER);
    canvas.fill_rect(Rect::new(
        level::FINISH_X as i32,
        0,
        level::FINISH_MARKER_WIDTH,
        CANVAS_SIZE.y,
    ))
}

/// Black screen with the banner on it. A missing banner leaves the screen black.
fn draw_message(canvas: &mut Canvas<Window>, banner: Option<&Texture>) -> Result<(), String> {
    canvas.set_draw_color(Color::BLACK);
    canvas.clear();
    match banner {
        Some(texture) => blit(canvas, texture, MESSAGE_POSITION),
        None => Ok(()),
    }
}

fn draw_death(
    canvas: &mut Canvas<Window>,
    sprites: &Sprites,
    banners: &Banners,
    sequence: &DeathSequence,
) -> Result<(), String> {
    match sequence.step {
        DeathStep::Approach { .. } | DeathStep::Fade { .. } => {
            canvas.set_draw_color(Color::BLACK);
            canvas.clear();
            blit_asset(canvas, sprites, Asset::Background, Vec2::ZERO)?;
            blit_asset(canvas, sprites, Asset::Shadow, sequence.shadow_position())?;

            if let Some(alpha) = sequence.fade_alpha() {
                canvas.set_blend_mode(BlendMode::Blend);
                canvas.set_draw_color(Color::RGBA(0, 0, 0, alpha));
                canvas.fill_rect(None)?;
                canvas.set_blend_mode(BlendMode::None);
            }
            Ok(())
        }
        DeathStep::Pause { .. } | DeathStep::Complete => {
            canvas.set_draw_color(Color::BLACK);
            canvas.clear();
            Ok(())
        }
        DeathStep::Message { .. } => draw_message(canvas, banners.death()),
    }
}

fn draw_finish(canvas: &mut Canvas<Window>, banners: &Banners, sequence: &FinishSequence) -> Result<(), String> {
    match sequence {
        FinishSequence::Message { .. } => draw_message(canvas, banners.finish()),
        FinishSequence::Complete => {
            canvas.set_draw_color(Color::BLACK);
            canvas.clear();
            Ok(())
        }
    }
}

/// Draws the current frame. Failures are logged and the rest of the frame is skipped.
pub fn render_system(
    mut canvas: NonSendMut<&mut Canvas<Window>>,
    sprites: NonSend<Sprites>,
    banners: NonSend<Banners>,
    phase: Res<RunPhase>,
    player: Res<Player>,
    shadow: Res<Shadow>,
    obstacles: Res<Obstacles>,
) {
    let result = match &*phase {
        RunPhase::Running => draw_running(&mut canvas, &sprites, &player, &shadow, &obstacles),
        RunPhase::Dying(sequence) => draw_death(&mut canvas, &sprites, &banners, sequence),
        RunPhase::Finished(sequence) => draw_finish(&mut canvas, &banners, sequence),
    };

    if let Err(e) = result {
        warn!(error = %e, "Failed to render frame");
    }
}

pub fn present_system(mut canvas: NonSendMut<&mut Canvas<Window>>) {
    canvas.present();
}
