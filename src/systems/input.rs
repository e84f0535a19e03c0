use std::collections::HashMap;

use bevy_ecs::{
    resource::Resource,
    system::{NonSendMut, Res, ResMut},
};
use bitflags::bitflags;
use sdl2::{event::Event, keyboard::Scancode, EventPump};
use tracing::{debug, info};

use crate::constants::outro::OUTRO_HONORS_QUIT;
use crate::systems::stage::{GlobalState, RunPhase};

bitflags! {
    /// Snapshot of the gameplay keys held down this frame.
    #[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct PressedKeys: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const JUMP = 1 << 2;
    }
}

#[derive(Debug, Clone, Resource)]
pub struct Bindings {
    key_bindings: HashMap<Scancode, PressedKeys>,
}

impl Default for Bindings {
    fn default() -> Self {
        let key_bindings = HashMap::from([
            (Scancode::Left, PressedKeys::LEFT),
            (Scancode::Right, PressedKeys::RIGHT),
            (Scancode::Space, PressedKeys::JUMP),
        ]);

        Self { key_bindings }
    }
}

impl Bindings {
    /// Folds the currently held scancodes into a key snapshot, ignoring unbound keys.
    pub fn snapshot(&self, held: impl IntoIterator<Item = Scancode>) -> PressedKeys {
        held.into_iter()
            .filter_map(|scancode| self.key_bindings.get(&scancode).copied())
            .fold(PressedKeys::empty(), |keys, key| keys | key)
    }
}

/// Whether a window close should end the process right now.
///
/// During a terminal sequence the outro plays to the end unless [`OUTRO_HONORS_QUIT`] is set.
pub fn should_honor_quit(phase: &RunPhase) -> bool {
    phase.is_running() || OUTRO_HONORS_QUIT
}

pub fn is_quit_event(event: &Event) -> bool {
    matches!(event, Event::Quit { .. })
}

/// Drains pending window events, handles quit requests, and snapshots the held keys.
pub fn input_system(
    mut pump: NonSendMut<EventPump>,
    bindings: Res<Bindings>,
    phase: Res<RunPhase>,
    mut keys: ResMut<PressedKeys>,
    mut state: ResMut<GlobalState>,
) {
    for event in pump.poll_iter() {
        if !is_quit_event(&event) {
            continue;
        }

        if should_honor_quit(&phase) {
            info!("Exit requested. Exiting...");
            state.exit = true;
        } else {
            debug!("Ignoring exit request while the outro plays");
        }
    }

    let snapshot = bindings.snapshot(pump.keyboard_state().pressed_scancodes());
    if *keys != snapshot {
        *keys = snapshot;
    }
}
