//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::UVec2;

/// Target frame rate of the game loop.
pub const FRAMES_PER_SECOND: u32 = 60;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / FRAMES_PER_SECOND as f64) as u64);

/// The logical size of the canvas, in pixels.
pub const CANVAS_SIZE: UVec2 = UVec2::new(800, 400);

pub const WINDOW_TITLE: &str = "Elsa - Sad Girl Game";

/// Converts a wall-clock duration into the number of loop ticks that cover it, rounding up.
pub const fn ticks_for(duration: Duration) -> u32 {
    (duration.as_nanos() * FRAMES_PER_SECOND as u128).div_ceil(1_000_000_000) as u32
}

/// Player movement and physics tuning.
pub mod player {
    use glam::Vec2;

    /// Where the player spawns; `y` is already resting on the ground.
    pub const START: Vec2 = Vec2::new(50.0, GROUND_LEVEL);
    /// Horizontal movement per frame while a direction key is held.
    pub const SPEED: f32 = 4.0;
    /// Vertical velocity applied on the frame a jump starts (negative is up).
    pub const JUMP_IMPULSE: f32 = -12.0;
    /// Added to the vertical velocity every frame.
    pub const GRAVITY: f32 = 0.9;
    /// The lowest the player's `y` may go.
    pub const GROUND_LEVEL: f32 = 260.0;
    /// Size of the collision box anchored at the player's position.
    pub const HITBOX_SIZE: Vec2 = Vec2::new(64.0, 96.0);
    /// The sprite is drawn this far above the hitbox.
    pub const SPRITE_OFFSET_Y: f32 = -40.0;
    /// Length of a full walk cycle, in moving frames.
    pub const WALK_CYCLE_FRAMES: u32 = 20;
}

/// Shadow pursuit and tension ramp.
pub mod shadow {
    /// Horizontal coordinate the shadow starts at, well off-screen.
    pub const START_FAR_X: f32 = super::CANVAS_SIZE.x as f32 + 200.0;
    /// The pursuit starts once the player is strictly past this x.
    pub const TRIGGER_X: f32 = 300.0;
    pub const APPROACH_PER_FRAME: f32 = 0.4;
    pub const TENSION_PER_FRAME: f32 = 0.003;
    /// Once the shadow is closer than this, tension ramps faster.
    pub const CLOSE_FAR_X: f32 = 400.0;
    pub const CLOSE_TENSION_PER_FRAME: f32 = 0.01;
    pub const MAX_TENSION: f32 = 1.0;
    /// How far the shadow is pulled toward the player at full tension, in pixels.
    pub const TENSION_OFFSET: f32 = 200.0;
    pub const DRAW_Y: f32 = 40.0;
}

/// Static level layout.
pub mod level {
    use glam::Vec2;

    use crate::systems::Hitbox;

    pub const FINISH_X: f32 = 700.0;
    pub const FINISH_MARKER_WIDTH: u32 = 6;

    pub const GROUND: Hitbox = Hitbox::new(Vec2::new(0.0, 330.0), Vec2::new(800.0, 70.0));

    pub const OBSTACLES: [Hitbox; 3] = [
        Hitbox::new(Vec2::new(320.0, 300.0), Vec2::new(40.0, 30.0)),
        Hitbox::new(Vec2::new(520.0, 300.0), Vec2::new(40.0, 30.0)),
        Hitbox::new(Vec2::new(600.0, 270.0), Vec2::new(40.0, 60.0)),
    ];
}

/// Timings and layout for the scripted endings.
pub mod outro {
    use std::time::Duration;

    use glam::Vec2;

    use super::ticks_for;

    /// Number of frames the shadow takes to close in on the player.
    pub const APPROACH_FRAMES: u32 = 30;
    /// How long each approach frame and each fade step stays on screen.
    pub const STEP_HOLD: Duration = Duration::from_millis(30);
    pub const STEP_HOLD_TICKS: u32 = ticks_for(STEP_HOLD);
    /// Where the shadow ends up relative to the player at the end of the approach.
    pub const SHADOW_ANCHOR_OFFSET: Vec2 = Vec2::new(-80.0, 0.0);
    pub const SHADOW_ANCHOR_Y: f32 = 50.0;

    pub const FADE_ALPHA_STEP: u8 = 15;
    /// Alpha values 0, 15, ... 240.
    pub const FADE_STEPS: u32 = 255 / FADE_ALPHA_STEP as u32;

    pub const PAUSE: Duration = Duration::from_millis(800);
    pub const PAUSE_TICKS: u32 = ticks_for(PAUSE);

    pub const MESSAGE_HOLD: Duration = Duration::from_millis(3500);
    pub const MESSAGE_HOLD_TICKS: u32 = ticks_for(MESSAGE_HOLD);
    /// Top-left corner of the end-of-game banner.
    pub const MESSAGE_POSITION: Vec2 = Vec2::new(120.0, 180.0);

    /// Whether a quit request cuts a running outro short.
    pub const OUTRO_HONORS_QUIT: bool = false;
}

/// End-of-game banner text. Kept verbatim; both endings share the same taunt.
pub mod messages {
    pub const DEATH: &str = "رکب خوردی کیومرث... بازم مردودی!";
    pub const FINISH: &str = "رکب خوردی کیومرث... بازم مردودی!";
}

/// Background music acquisition and playback.
pub mod music {
    use std::time::Duration;

    use super::ticks_for;

    pub const DEFAULT_URL: &str = "https://dl.musicdel.ir/tag/music/1400/08/14/%20-%20Tarsnak%2012%20(320).mp3";
    pub const DEFAULT_CACHE_PATH: &str = "sad.mp3";
    /// Delay between startup and the single playback attempt.
    pub const START_DELAY: Duration = Duration::from_millis(2000);
    pub const START_DELAY_TICKS: u32 = ticks_for(START_DELAY);
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
}

/// Flat colors used when drawing.
pub mod color {
    use sdl2::pixels::Color;

    pub const CLEAR: Color = Color::RGB(10, 10, 12);
    pub const OBSTACLE: Color = Color::RGB(120, 120, 120);
    pub const GROUND: Color = Color::RGB(25, 25, 30);
    pub const FINISH_MARKER: Color = Color::RGB(200, 200, 200);
    pub const BANNER_TEXT: Color = Color::RGB(255, 255, 255);
    pub const PLACEHOLDER: Color = Color::RGB(200, 0, 0);
}

pub const DEFAULT_ASSET_DIR: &str = "assets";
pub const FONT_FILE: &str = "font.ttf";
pub const FONT_POINT_SIZE: u16 = 36;
