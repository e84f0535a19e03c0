//! This module handles music playback for the game.
use std::path::Path;

use anyhow::{anyhow, Result};
use sdl2::mixer::{self, InitFlag, Music, DEFAULT_FORMAT};

use crate::error::AudioError;

const AUDIO_FREQUENCY: i32 = 44_100;
const AUDIO_CHANNELS: i32 = 2;
const CHUNK_SIZE: i32 = 1024;
/// Passed to `Music::play` to loop forever.
const LOOP_FOREVER: i32 = -1;

/// The audio system for the game.
///
/// If the mixer fails to initialize, audio is disabled and playback requests fail
/// softly with [`AudioError::Mixer`].
pub struct Audio {
    _mixer_context: Option<mixer::Sdl2MixerContext>,
    music: Option<Music<'static>>,
    state: AudioState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AudioState {
    Enabled,
    Disabled,
}

impl Default for Audio {
    fn default() -> Self {
        Self::new()
    }
}

impl Audio {
    /// Creates a new `Audio` instance, falling back to a disabled one on failure.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(audio) => audio,
            Err(e) => {
                tracing::warn!("Failed to initialize audio: {}. Audio will be disabled.", e);
                Self::disabled()
            }
        }
    }

    /// An audio system that never plays anything.
    pub fn disabled() -> Self {
        Self {
            _mixer_context: None,
            music: None,
            state: AudioState::Disabled,
        }
    }

    fn try_new() -> Result<Self> {
        mixer::open_audio(AUDIO_FREQUENCY, DEFAULT_FORMAT, AUDIO_CHANNELS, CHUNK_SIZE)
            .map_err(|e| anyhow!("Failed to open audio: {}", e))?;

        let mixer_context =
            mixer::init(InitFlag::MP3 | InitFlag::OGG).map_err(|e| anyhow!("Failed to initialize SDL2_mixer: {}", e))?;

        Ok(Audio {
            _mixer_context: Some(mixer_context),
            music: None,
            state: AudioState::Enabled,
        })
    }

    /// Loads the track at `path` and loops it until the process exits.
    pub fn play_looped(&mut self, path: &Path) -> Result<(), AudioError> {
        if self.is_disabled() {
            return Err(AudioError::Mixer("audio is disabled".to_string()));
        }

        let music = Music::from_file(path).map_err(AudioError::Mixer)?;
        music.play(LOOP_FOREVER).map_err(AudioError::Mixer)?;
        tracing::info!(path = %path.display(), "Playing music");

        // The mixer stops the track as soon as it is dropped.
        self.music = Some(music);
        Ok(())
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self.state, AudioState::Disabled)
    }
}
