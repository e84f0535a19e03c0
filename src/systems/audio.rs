//! Delayed start of the background music.
//!
//! The track is played at most once per process: when the start timer fires, the
//! fetch outcome is checked a single time and playback either begins or is skipped
//! for good.

use std::path::PathBuf;

use bevy_ecs::{
    resource::Resource,
    system::{NonSendMut, Res, ResMut},
};
use tracing::{debug, info, warn};

use crate::{audio::Audio, error::AudioError, fetch::MusicFetch};

/// One-shot countdown to the playback attempt.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MusicTimer {
    remaining_ticks: Option<u32>,
}

impl MusicTimer {
    pub fn new(ticks: u32) -> Self {
        Self {
            remaining_ticks: Some(ticks),
        }
    }

    /// Counts down one tick.
    ///
    /// # Returns
    /// `true` on the tick the timer fires; never again afterwards.
    pub fn tick(&mut self) -> bool {
        match self.remaining_ticks {
            Some(remaining) if remaining > 1 => {
                self.remaining_ticks = Some(remaining - 1);
                false
            }
            Some(_) => {
                self.remaining_ticks = None;
                true
            }
            None => false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.remaining_ticks.is_none()
    }
}

/// Non-send resource wrapper for the SDL2 mixer, which must stay on the main thread.
pub struct AudioResource(pub Audio);

/// The cache file to play, if the fetch has finished successfully and left it on disk.
pub fn resolve_track(fetch: &MusicFetch) -> Result<PathBuf, AudioError> {
    match fetch.outcome() {
        Some(outcome) if outcome.is_ready() && fetch.path().exists() => Ok(fetch.path().to_path_buf()),
        _ => Err(AudioError::NotReady),
    }
}

/// Fires the single playback attempt once the start delay has elapsed.
pub fn music_system(
    mut timer: ResMut<MusicTimer>,
    fetch: Option<Res<MusicFetch>>,
    audio: Option<NonSendMut<AudioResource>>,
) {
    if !timer.tick() {
        return;
    }

    let Some(fetch) = fetch else {
        debug!("Music is muted, skipping playback");
        return;
    };

    let path = match resolve_track(&fetch) {
        Ok(path) => path,
        Err(e) => {
            info!(outcome = ?fetch.outcome(), reason = %e, "Music unavailable, continuing without it");
            return;
        }
    };

    match audio {
        Some(mut audio) => {
            if let Err(e) = audio.0.play_looped(&path) {
                warn!(path = %path.display(), error = %e, "Could not play music");
            }
        }
        None => debug!(path = %path.display(), "No audio device, skipping playback"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_once() {
        let mut timer = MusicTimer::new(3);
        assert!(!timer.tick());
        assert!(!timer.tick());
        assert!(timer.tick());
        assert!(timer.has_fired());
        assert!(!timer.tick());
    }

    #[test]
    fn test_zero_tick_timer_fires_immediately() {
        let mut timer = MusicTimer::new(0);
        assert!(timer.tick());
        assert!(!timer.tick());
    }
}
