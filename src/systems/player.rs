use bevy_ecs::{
    resource::Resource,
    system::{Res, ResMut},
};
use glam::Vec2;

use crate::constants::player::{
    GRAVITY, GROUND_LEVEL, HITBOX_SIZE, JUMP_IMPULSE, SPEED, SPRITE_OFFSET_Y, START, WALK_CYCLE_FRAMES,
};
use crate::systems::{collision::Hitbox, input::PressedKeys, stage::RunPhase};

/// Which sprite the player is currently drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerPose {
    #[default]
    Idle,
    Walk1,
    Walk2,
    Jump,
}

/// The player's kinematic state.
///
/// `position` is the top-left corner of the hitbox; `y` grows downward and never
/// exceeds [`GROUND_LEVEL`].
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Vec2,
    pub velocity_y: f32,
    pub on_ground: bool,
    /// Counts grounded moving frames, wrapping every walk cycle
    pub walk_frame: u32,
    pub pose: PlayerPose,
    pub alive: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: START,
            velocity_y: 0.0,
            on_ground: true,
            walk_frame: 0,
            pose: PlayerPose::Idle,
            alive: true,
        }
    }
}

impl Player {
    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.position, HITBOX_SIZE)
    }

    /// Where the sprite's top-left corner goes; the artwork extends above the hitbox.
    pub fn sprite_position(&self) -> Vec2 {
        self.position + Vec2::new(0.0, SPRITE_OFFSET_Y)
    }
}

/// Applies one frame of held keys: horizontal movement, and a jump if standing on the ground.
pub fn apply_input(player: &mut Player, keys: PressedKeys) {
    if keys.contains(PressedKeys::LEFT) {
        player.position.x -= SPEED;
    }
    if keys.contains(PressedKeys::RIGHT) {
        player.position.x += SPEED;
    }
    if keys.contains(PressedKeys::JUMP) && player.on_ground {
        player.velocity_y = JUMP_IMPULSE;
        player.on_ground = false;
    }
}

/// Applies gravity and lands the player when they reach the ground.
pub fn integrate_physics(player: &mut Player) {
    player.velocity_y += GRAVITY;
    player.position.y += player.velocity_y;

    if player.position.y >= GROUND_LEVEL {
        player.position.y = GROUND_LEVEL;
        player.velocity_y = 0.0;
        player.on_ground = true;
    }
}

/// Picks the sprite for this frame, advancing the walk cycle while moving on the ground.
pub fn update_pose(player: &mut Player, moving: bool) {
    player.pose = if !player.on_ground {
        PlayerPose::Jump
    } else if moving {
        player.walk_frame = (player.walk_frame + 1) % WALK_CYCLE_FRAMES;
        if player.walk_frame < WALK_CYCLE_FRAMES / 2 {
            PlayerPose::Walk1
        } else {
            PlayerPose::Walk2
        }
    } else {
        PlayerPose::Idle
    };
}

/// Moves the player according to the held keys. Input is ignored once the run has ended.
pub fn player_control_system(keys: Res<PressedKeys>, phase: Res<RunPhase>, mut player: ResMut<Player>) {
    if phase.is_running() {
        apply_input(&mut player, *keys);
    }
}

/// Gravity keeps acting regardless of the run phase.
pub fn player_physics_system(mut player: ResMut<Player>) {
    integrate_physics(&mut player);
}

pub fn player_animation_system(keys: Res<PressedKeys>, mut player: ResMut<Player>) {
    let moving = keys.intersects(PressedKeys::LEFT | PressedKeys::RIGHT);
    update_pose(&mut player, moving);
}
