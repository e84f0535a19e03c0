//! This module contains the main game logic and state.

use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::system::Res;
use bevy_ecs::world::World;
use sdl2::event::EventType;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use tracing::{debug, info};

use crate::asset::{Banners, Sprites};
use crate::audio::Audio;
use crate::config::Config;
use crate::constants::music::START_DELAY_TICKS;
use crate::error::GameResult;
use crate::fetch::MusicFetch;
use crate::systems::{
    collision_system, input_system, music_system, player_animation_system, player_control_system, player_physics_system,
    present_system, render_system, shadow_system, stage_system, AudioResource, Bindings, GlobalState, MusicTimer,
    Obstacles, Player, PressedKeys, RunPhase, Shadow,
};

/// System set for all gameplay systems to ensure they run after input processing
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameplaySet {
    /// Window events and keyboard snapshot
    Input,
    /// Advances the simulation by one frame
    Update,
}

/// System set for all rendering systems to ensure they run after gameplay logic
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum RenderSet {
    Draw,
    Present,
}

fn not_exiting(state: Res<GlobalState>) -> bool {
    !state.exit
}

/// Game state and the per-frame system pipeline, built on the Bevy ECS.
///
/// All mutable state lives in resources; SDL2 handles are stored as non-send
/// resources since they must stay on the main thread.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Loads assets and wires the window, input, audio and music fetch into a fresh world.
    ///
    /// # Errors
    ///
    /// Returns `GameError` if a texture cannot be created. Missing files are not errors;
    /// they are replaced with placeholders.
    pub fn new(
        canvas: Canvas<Window>,
        ttf_context: Sdl2TtfContext,
        texture_creator: TextureCreator<WindowContext>,
        mut event_pump: EventPump,
        audio: Audio,
        fetch: Option<MusicFetch>,
        config: &Config,
    ) -> GameResult<Game> {
        info!("Starting game initialization");

        debug!("Disabling unnecessary SDL events");
        Self::disable_sdl_events(&mut event_pump);

        debug!(asset_dir = %config.asset_dir.display(), "Loading sprites and banners");
        let sprites = Sprites::load(&texture_creator, config)?;
        let banners = Banners::load(&ttf_context, &texture_creator, config);

        let mut world = World::default();
        Self::insert_state_resources(&mut world);
        if let Some(fetch) = fetch {
            world.insert_resource(fetch);
        }

        world.insert_non_send_resource(event_pump);
        // Leaked so the renderer outlives every texture created from it.
        world.insert_non_send_resource::<&mut Canvas<Window>>(Box::leak(Box::new(canvas)));
        world.insert_non_send_resource(texture_creator);
        world.insert_non_send_resource(sprites);
        world.insert_non_send_resource(banners);
        world.insert_non_send_resource(AudioResource(audio));

        let mut schedule = Schedule::default();
        Self::configure_schedule(&mut schedule);

        info!("Game initialization completed successfully");
        Ok(Game { world, schedule })
    }

    /// A game with no window, audio or input device. Keys are driven through the
    /// [`PressedKeys`] resource directly.
    pub fn headless() -> Game {
        let mut world = World::default();
        Self::insert_state_resources(&mut world);

        let mut schedule = Schedule::default();
        Self::add_simulation_systems(&mut schedule);

        Game { world, schedule }
    }

    fn disable_sdl_events(event_pump: &mut EventPump) {
        for event_type in [
            EventType::JoyAxisMotion,
            EventType::JoyBallMotion,
            EventType::JoyHatMotion,
            EventType::JoyButtonDown,
            EventType::JoyButtonUp,
            EventType::ControllerAxisMotion,
            EventType::ControllerButtonDown,
            EventType::ControllerButtonUp,
            EventType::MouseMotion,
            EventType::MouseWheel,
            EventType::TextInput,
            EventType::TextEditing,
            EventType::DropFile,
            EventType::DropText,
        ] {
            event_pump.disable_event(event_type);
        }
    }

    /// Inserts every resource the simulation reads or writes, in its starting state.
    pub fn insert_state_resources(world: &mut World) {
        world.insert_resource(GlobalState::default());
        world.insert_resource(RunPhase::default());
        world.insert_resource(Player::default());
        world.insert_resource(Shadow::default());
        world.insert_resource(Obstacles::default());
        world.insert_resource(PressedKeys::default());
        world.insert_resource(Bindings::default());
        world.insert_resource(MusicTimer::new(START_DELAY_TICKS));
    }

    /// Adds the systems that advance the game by one frame, independent of any SDL device.
    ///
    /// The terminal sequence is stepped before gameplay, so a sequence entered on a
    /// frame is drawn for that frame before it starts counting down.
    pub fn add_simulation_systems(schedule: &mut Schedule) {
        schedule
            .add_systems(
                (
                    music_system,
                    stage_system,
                    player_control_system,
                    player_physics_system,
                    shadow_system,
                    collision_system,
                    player_animation_system,
                )
                    .chain()
                    .in_set(GameplaySet::Update),
            )
            .configure_sets(GameplaySet::Update.run_if(not_exiting));
    }

    fn configure_schedule(schedule: &mut Schedule) {
        Self::add_simulation_systems(schedule);

        schedule
            .add_systems((
                input_system.in_set(GameplaySet::Input),
                render_system.in_set(RenderSet::Draw),
                present_system.in_set(RenderSet::Present),
            ))
            .configure_sets(
                (
                    GameplaySet::Input,
                    GameplaySet::Update,
                    RenderSet::Draw.run_if(not_exiting),
                    RenderSet::Present.run_if(not_exiting),
                )
                    .chain(),
            );
    }

    /// Executes one frame of game logic by running all scheduled ECS systems.
    ///
    /// # Returns
    ///
    /// `true` if the game should terminate, `false` to continue
    pub fn tick(&mut self) -> bool {
        self.schedule.run(&mut self.world);

        self.world
            .get_resource::<GlobalState>()
            .is_none_or(|state| state.exit)
    }
}
