use std::time::{Duration, Instant};

use sdl2::{AudioSubsystem, Sdl};
use tracing::{debug, info, trace, warn};

use crate::audio::Audio;
use crate::config::Config;
use crate::constants::{CANVAS_SIZE, LOOP_TIME, WINDOW_TITLE};
use crate::error::{GameError, GameResult};
use crate::fetch::MusicFetch;
use crate::formatter;
use crate::game::Game;
use crate::platform;

/// Main application wrapper that manages SDL initialization, window lifecycle, and the game loop.
pub struct App {
    pub game: Game,
    // Keep SDL alive for the app lifetime so subsystems (audio) are not shut down
    _sdl_context: Sdl,
    _audio_subsystem: Option<AudioSubsystem>,
}

impl App {
    /// Initializes SDL subsystems, starts the music fetch, creates the window and sets up the game state.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any video initialization step fails, or propagates
    /// errors from `Game::new()`. Audio problems are not fatal; the game runs silently.
    pub fn new(config: &Config) -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;

        debug!("Initializing SDL2 subsystems");
        let ttf_context = sdl2::ttf::init().map_err(|e| GameError::Sdl(e.to_string()))?;
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        let (audio_subsystem, audio, fetch) = if config.muted {
            info!("Music muted by configuration");
            (None, Audio::disabled(), None)
        } else {
            let fetch = MusicFetch::spawn(config.music_url.clone(), config.music_path.clone());
            match sdl_context.audio() {
                Ok(subsystem) => (Some(subsystem), Audio::new(), Some(fetch)),
                Err(e) => {
                    warn!(error = %e, "No audio subsystem, music will not play");
                    (None, Audio::disabled(), Some(fetch))
                }
            }
        };

        trace!(width = CANVAS_SIZE.x, height = CANVAS_SIZE.y, "Creating game window");
        let window = video_subsystem
            .window(WINDOW_TITLE, CANVAS_SIZE.x, CANVAS_SIZE.y)
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        trace!("Creating canvas");
        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        canvas
            .set_logical_size(CANVAS_SIZE.x, CANVAS_SIZE.y)
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        debug!(renderer_info = ?canvas.info(), "Canvas renderer initialized");

        let texture_creator = canvas.texture_creator();
        let game = Game::new(canvas, ttf_context, texture_creator, event_pump, audio, fetch, config)?;

        info!("Application initialization completed successfully");
        Ok(App {
            game,
            _sdl_context: sdl_context,
            _audio_subsystem: audio_subsystem,
        })
    }

    /// Executes a single frame of the game loop, then sleeps off whatever is left of `LOOP_TIME`.
    ///
    /// # Returns
    ///
    /// `true` if the game should continue running, `false` if the game requested exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        formatter::increment_frame();

        if self.game.tick() {
            return false;
        }

        let elapsed = start.elapsed();
        if elapsed < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(elapsed);
            if time != Duration::ZERO {
                platform::sleep(time);
            }
        } else {
            warn!("Game loop behind schedule by: {:?}", elapsed - LOOP_TIME);
        }

        true
    }
}
