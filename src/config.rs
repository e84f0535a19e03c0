use std::path::PathBuf;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::constants::{music, DEFAULT_ASSET_DIR};
use crate::error::GameResult;

/// Prefix for environment overrides, e.g. `ELSA_ASSET_DIR=./art`.
pub const ENV_PREFIX: &str = "ELSA_";

/// Runtime configuration: where things live on disk and on the network.
///
/// Gameplay tuning stays in [`crate::constants`]; only paths and switches that
/// differ between installs are configurable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Directory the images and font are read from
    pub asset_dir: PathBuf,
    /// Remote location of the background track
    pub music_url: String,
    /// Local cache file for the background track
    pub music_path: PathBuf,
    /// Skip the download and playback entirely
    pub muted: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            music_url: music::DEFAULT_URL.to_string(),
            music_path: PathBuf::from(music::DEFAULT_CACHE_PATH),
            muted: false,
        }
    }
}

impl Config {
    /// Builds the configuration from defaults overlaid with `ELSA_*` environment variables.
    pub fn load() -> GameResult<Self> {
        Ok(Self::figment().extract()?)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Path of a named asset inside the asset directory.
    pub fn asset_path(&self, file_name: &str) -> PathBuf {
        self.asset_dir.join(file_name)
    }
}
