//! Background acquisition of the music track.
//!
//! The download runs on its own thread and publishes a single outcome through a
//! one-shot cell. The game loop never blocks on it; it looks at the outcome exactly
//! once, when the music timer fires.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use std::thread;

use bevy_ecs::resource::Resource;
use tracing::{debug, info, warn};

use crate::constants::music::REQUEST_TIMEOUT;
use crate::error::AudioError;

/// How the fetch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The cache file was already present; nothing was downloaded
    Cached,
    Downloaded { bytes: u64 },
    Failed(String),
}

impl FetchOutcome {
    /// True when the cache file can be played.
    pub fn is_ready(&self) -> bool {
        matches!(self, FetchOutcome::Cached | FetchOutcome::Downloaded { .. })
    }
}

/// Handle to a background fetch. Cheap to clone; all clones observe the same outcome.
#[derive(Resource, Debug, Clone)]
pub struct MusicFetch {
    path: PathBuf,
    outcome: Arc<OnceLock<FetchOutcome>>,
}

impl MusicFetch {
    /// Starts fetching `url` into `path` on a worker thread and returns immediately.
    pub fn spawn(url: String, path: PathBuf) -> Self {
        let outcome = Arc::new(OnceLock::new());
        let worker_outcome = Arc::clone(&outcome);
        let worker_path = path.clone();

        let spawned = thread::Builder::new().name("music-fetch".into()).spawn(move || {
            let result = match fetch_to_cache(&url, &worker_path) {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(%url, error = %e, "Could not download music");
                    FetchOutcome::Failed(e.to_string())
                }
            };
            let _ = worker_outcome.set(result);
        });

        match spawned {
            Ok(_) => Self { path, outcome },
            Err(e) => {
                warn!(error = %e, "Could not start music download thread");
                Self::completed(path, FetchOutcome::Failed(e.to_string()))
            }
        }
    }

    /// A handle whose outcome is already known, such as when no worker thread could be started.
    pub fn completed(path: PathBuf, outcome: FetchOutcome) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(outcome);
        Self {
            path,
            outcome: Arc::new(cell),
        }
    }

    /// The outcome, or `None` while the download is still in flight.
    pub fn outcome(&self) -> Option<&FetchOutcome> {
        self.outcome.get()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Ensures `path` holds the track at `url`, downloading it if the file is absent.
///
/// The body is streamed into a `.part` sibling and renamed into place, so a reader
/// never sees a half-written cache file. The partial file is removed on failure.
pub fn fetch_to_cache(url: &str, path: &Path) -> Result<FetchOutcome, AudioError> {
    if path.exists() {
        debug!(path = %path.display(), "Music already cached");
        return Ok(FetchOutcome::Cached);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let partial = path.with_extension("part");
    let result = download(url, &partial).and_then(|bytes| {
        fs::rename(&partial, path)?;
        Ok(bytes)
    });

    match result {
        Ok(bytes) => {
            info!(bytes, path = %path.display(), "Music downloaded");
            Ok(FetchOutcome::Downloaded { bytes })
        }
        Err(e) => {
            let _ = fs::remove_file(&partial);
            Err(e)
        }
    }
}

fn download(url: &str, destination: &Path) -> Result<u64, AudioError> {
    let client = reqwest::blocking::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let mut response = client.get(url).send()?;
    if !response.status().is_success() {
        return Err(AudioError::Status(response.status()));
    }

    let mut file = File::create(destination)?;
    let bytes = response.copy_to(&mut file)?;
    file.sync_all()?;
    Ok(bytes)
}
