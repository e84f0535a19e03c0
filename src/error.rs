//! Centralized error types for the game.
//!
//! Asset and audio failures are recoverable and are normally logged and swallowed
//! close to where they happen; only SDL/window initialisation failures are fatal.

use std::io;
use std::path::PathBuf;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("SDL error: {0}")]
    Sdl(String),
}

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("Failed to load image {path}: {reason}")]
    ImageLoad { path: PathBuf, reason: String },

    #[error("Failed to load font {path}: {reason}")]
    FontLoad { path: PathBuf, reason: String },

    #[error("Failed to create placeholder surface: {0}")]
    Placeholder(String),

    #[error("Failed to render text: {0}")]
    TextRender(String),

    #[error("Failed to upload texture: {0}")]
    Texture(String),
}

/// Errors from acquiring or playing the background music.
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    #[error("Download failed: {0}")]
    Download(#[from] reqwest::Error),

    #[error("Server responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Music is not ready yet")]
    NotReady,

    #[error("Mixer error: {0}")]
    Mixer(String),
}

impl From<figment::Error> for GameError {
    fn from(error: figment::Error) -> Self {
        GameError::Config(Box::new(error))
    }
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
