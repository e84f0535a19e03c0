use std::mem::discriminant;

use bevy_ecs::{resource::Resource, system::ResMut};
use glam::Vec2;
use tracing::{debug, info};

use crate::constants::outro::{
    APPROACH_FRAMES, FADE_ALPHA_STEP, FADE_STEPS, MESSAGE_HOLD_TICKS, PAUSE_TICKS, SHADOW_ANCHOR_OFFSET, SHADOW_ANCHOR_Y,
    STEP_HOLD_TICKS,
};

/// Loop-wide flags shared between systems and the driver.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GlobalState {
    pub exit: bool,
}

/// Where the run is. `Dying` and `Finished` are terminal: they are entered from
/// `Running` only and play out until they request exit.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub enum RunPhase {
    #[default]
    Running,
    Dying(DeathSequence),
    Finished(FinishSequence),
}

impl RunPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, RunPhase::Running)
    }

    /// True once a terminal sequence has played all the way through.
    pub fn is_complete(&self) -> bool {
        matches!(
            self,
            RunPhase::Dying(DeathSequence {
                step: DeathStep::Complete,
                ..
            }) | RunPhase::Finished(FinishSequence::Complete)
        )
    }
}

/// Individual stages of the death outro. Every variant holds its frame for `remaining_ticks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathStep {
    /// The shadow closes in on the player, one position per frame
    Approach { frame: u32, remaining_ticks: u32 },
    /// The last approach frame darkens in fixed alpha steps
    Fade { step: u32, remaining_ticks: u32 },
    /// Black screen
    Pause { remaining_ticks: u32 },
    /// Losing banner
    Message { remaining_ticks: u32 },
    Complete,
}

impl DeathStep {
    /// Advances by one tick.
    ///
    /// # Returns
    /// The `(from, to)` pair when the step moved to a new frame or stage.
    pub fn tick(&mut self) -> Option<(DeathStep, DeathStep)> {
        let from = *self;
        let next = match *self {
            DeathStep::Approach { frame, remaining_ticks } if remaining_ticks > 1 => DeathStep::Approach {
                frame,
                remaining_ticks: remaining_ticks - 1,
            },
            DeathStep::Approach { frame, .. } if frame + 1 < APPROACH_FRAMES => DeathStep::Approach {
                frame: frame + 1,
                remaining_ticks: STEP_HOLD_TICKS,
            },
            DeathStep::Approach { .. } => DeathStep::Fade {
                step: 0,
                remaining_ticks: STEP_HOLD_TICKS,
            },
            DeathStep::Fade { step, remaining_ticks } if remaining_ticks > 1 => DeathStep::Fade {
                step,
                remaining_ticks: remaining_ticks - 1,
            },
            DeathStep::Fade { step, .. } if step + 1 < FADE_STEPS => DeathStep::Fade {
                step: step + 1,
                remaining_ticks: STEP_HOLD_TICKS,
            },
            DeathStep::Fade { .. } => DeathStep::Pause {
                remaining_ticks: PAUSE_TICKS,
            },
            DeathStep::Pause { remaining_ticks } if remaining_ticks > 1 => DeathStep::Pause {
                remaining_ticks: remaining_ticks - 1,
            },
            DeathStep::Pause { .. } => DeathStep::Message {
                remaining_ticks: MESSAGE_HOLD_TICKS,
            },
            DeathStep::Message { remaining_ticks } if remaining_ticks > 1 => DeathStep::Message {
                remaining_ticks: remaining_ticks - 1,
            },
            DeathStep::Message { .. } | DeathStep::Complete => DeathStep::Complete,
        };

        *self = next;
        let changed = match (from, next) {
            (DeathStep::Approach { frame: a, .. }, DeathStep::Approach { frame: b, .. }) => a != b,
            (DeathStep::Fade { step: a, .. }, DeathStep::Fade { step: b, .. }) => a != b,
            _ => discriminant(&from) != discriminant(&next),
        };
        changed.then_some((from, next))
    }
}

/// The death outro, plus the path the shadow takes toward the fallen player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathSequence {
    pub step: DeathStep,
    /// Shadow position at the moment of death
    pub shadow_from: Vec2,
    /// Where the shadow comes to rest, next to the player
    pub shadow_to: Vec2,
}

impl DeathSequence {
    pub fn new(shadow_from: Vec2, player_position: Vec2) -> Self {
        Self {
            step: DeathStep::Approach {
                frame: 0,
                remaining_ticks: STEP_HOLD_TICKS,
            },
            shadow_from,
            shadow_to: Vec2::new(player_position.x + SHADOW_ANCHOR_OFFSET.x, SHADOW_ANCHOR_Y),
        }
    }

    /// Shadow position for the current frame; it reaches its anchor on the last approach frame.
    pub fn shadow_position(&self) -> Vec2 {
        match self.step {
            DeathStep::Approach { frame, .. } => {
                let t = (frame + 1) as f32 / APPROACH_FRAMES as f32;
                self.shadow_from.lerp(self.shadow_to, t)
            }
            _ => self.shadow_to,
        }
    }

    /// Opacity of the black overlay while fading.
    pub fn fade_alpha(&self) -> Option<u8> {
        match self.step {
            DeathStep::Fade { step, .. } => Some((step * FADE_ALPHA_STEP as u32).min(u8::MAX as u32) as u8),
            _ => None,
        }
    }
}

/// The win outro: a banner, then exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishSequence {
    Message { remaining_ticks: u32 },
    Complete,
}

impl FinishSequence {
    pub fn new() -> Self {
        FinishSequence::Message {
            remaining_ticks: MESSAGE_HOLD_TICKS,
        }
    }

    pub fn tick(&mut self) -> Option<(FinishSequence, FinishSequence)> {
        let from = *self;
        *self = match *self {
            FinishSequence::Message { remaining_ticks } if remaining_ticks > 1 => FinishSequence::Message {
                remaining_ticks: remaining_ticks - 1,
            },
            FinishSequence::Message { .. } | FinishSequence::Complete => FinishSequence::Complete,
        };
        (discriminant(&from) != discriminant(self)).then_some((from, *self))
    }
}

impl Default for FinishSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Plays the active terminal sequence forward by one tick and requests exit once it completes.
///
/// Runs before the gameplay systems, so a sequence entered this frame is shown for its
/// full first frame before it starts counting down.
pub fn stage_system(mut phase: ResMut<RunPhase>, mut state: ResMut<GlobalState>) {
    if phase.is_running() {
        return;
    }

    match &mut *phase {
        RunPhase::Running => {}
        RunPhase::Dying(sequence) => {
            if let Some((from, to)) = sequence.step.tick() {
                debug!(?from, ?to, "Death sequence transition");
            }
        }
        RunPhase::Finished(sequence) => {
            if let Some((from, to)) = sequence.tick() {
                debug!(?from, ?to, "Finish sequence transition");
            }
        }
    }

    if phase.is_complete() && !state.exit {
        info!("Outro finished, requesting exit");
        state.exit = true;
    }
}
