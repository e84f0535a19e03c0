use bevy_ecs::{
    resource::Resource,
    system::{Res, ResMut},
};
use glam::Vec2;
use smallvec::SmallVec;
use tracing::info;

use crate::constants::level;
use crate::systems::{
    player::Player,
    shadow::Shadow,
    stage::{DeathSequence, FinishSequence, RunPhase},
};

/// An axis-aligned rectangle in canvas coordinates, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub position: Vec2,
    pub size: Vec2,
}

impl Hitbox {
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn min(&self) -> Vec2 {
        self.position
    }

    pub fn max(&self) -> Vec2 {
        self.position + self.size
    }

    /// Returns true if the interiors overlap. Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Hitbox) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }
}

/// The fixed obstacle set. Read-only once the game starts.
#[derive(Resource, Debug, Clone)]
pub struct Obstacles(pub SmallVec<[Hitbox; 4]>);

impl Default for Obstacles {
    fn default() -> Self {
        Self(SmallVec::from_slice(&level::OBSTACLES))
    }
}

impl Obstacles {
    pub fn iter(&self) -> impl Iterator<Item = &Hitbox> {
        self.0.iter()
    }
}

/// Returns the first obstacle the player overlaps, if any.
pub fn check_collisions<'a>(player: &Hitbox, obstacles: &'a Obstacles) -> Option<&'a Hitbox> {
    obstacles.iter().find(|obstacle| player.intersects(obstacle))
}

/// Returns true once the player's left edge has reached the finish line.
pub fn check_finish(player_x: f32, finish_x: f32) -> bool {
    player_x >= finish_x
}

/// Ends the run when the player hits an obstacle or crosses the finish line.
///
/// Only acts while the run is still in progress, so each ending can be entered at most
/// once. Obstacles are checked first: a frame that both collides and finishes is a death.
pub fn collision_system(
    mut phase: ResMut<RunPhase>,
    mut player: ResMut<Player>,
    shadow: Res<Shadow>,
    obstacles: Res<Obstacles>,
) {
    if !phase.is_running() {
        return;
    }

    let hitbox = player.hitbox();
    if let Some(obstacle) = check_collisions(&hitbox, &obstacles) {
        info!(
            player = ?player.position,
            obstacle = ?obstacle.position,
            "Player hit an obstacle, starting death sequence"
        );
        player.alive = false;
        *phase = RunPhase::Dying(DeathSequence::new(shadow.screen_position(), player.position));
        return;
    }

    if check_finish(player.position.x, level::FINISH_X) {
        info!(x = player.position.x, "Player crossed the finish line");
        *phase = RunPhase::Finished(FinishSequence::new());
    }
}
