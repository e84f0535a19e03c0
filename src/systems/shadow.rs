use bevy_ecs::{
    resource::Resource,
    system::{Res, ResMut},
};
use glam::Vec2;
use tracing::debug;

use crate::constants::shadow::{
    APPROACH_PER_FRAME, CLOSE_FAR_X, CLOSE_TENSION_PER_FRAME, DRAW_Y, MAX_TENSION, START_FAR_X, TENSION_OFFSET,
    TENSION_PER_FRAME, TRIGGER_X,
};
use crate::systems::player::Player;

/// The pursuer. It stays hidden and inert until the player passes [`TRIGGER_X`],
/// after which it creeps closer every frame and `tension` only ever rises.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub far_x: f32,
    pub visible: bool,
    /// Pursuit intensity in `[0, 1]`
    pub tension: f32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            far_x: START_FAR_X,
            visible: false,
            tension: 0.0,
        }
    }
}

impl Shadow {
    /// On-screen x, pulled toward the player as tension builds.
    pub fn draw_x(&self) -> f32 {
        self.far_x - self.tension * TENSION_OFFSET
    }

    pub fn screen_position(&self) -> Vec2 {
        Vec2::new(self.draw_x(), DRAW_Y)
    }

    fn raise_tension(&mut self, amount: f32) {
        self.tension = (self.tension + amount).min(MAX_TENSION);
    }
}

/// Advances the pursuit by one frame given the player's horizontal position.
pub fn update_shadow(shadow: &mut Shadow, player_x: f32) {
    if player_x > TRIGGER_X {
        shadow.far_x -= APPROACH_PER_FRAME;
        shadow.visible = true;
        shadow.raise_tension(TENSION_PER_FRAME);
    }
    if shadow.far_x < CLOSE_FAR_X {
        shadow.raise_tension(CLOSE_TENSION_PER_FRAME);
    }
}

pub fn shadow_system(player: Res<Player>, mut shadow: ResMut<Shadow>) {
    let was_visible = shadow.visible;
    update_shadow(&mut shadow, player.position.x);

    if shadow.visible && !was_visible {
        debug!(player_x = player.position.x, "Shadow pursuit triggered");
    }
}
