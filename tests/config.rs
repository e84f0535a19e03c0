use std::path::PathBuf;

use elsa::config::Config;
use elsa::constants::music::{DEFAULT_CACHE_PATH, DEFAULT_URL};
use elsa::error::GameError;
use pretty_assertions::assert_eq;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.asset_dir, PathBuf::from("assets"));
    assert_eq!(config.music_url, DEFAULT_URL);
    assert_eq!(config.music_path, PathBuf::from(DEFAULT_CACHE_PATH));
    assert!(!config.muted);
    assert_eq!(config.asset_path("shadow.png"), PathBuf::from("assets/shadow.png"));
}

#[test]
fn test_environment_overrides() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("ELSA_ASSET_DIR", "art");
        jail.set_env("ELSA_MUTED", "true");
        jail.set_env("ELSA_MUSIC_PATH", "cache/track.mp3");

        let config = Config::load().expect("config should load");
        assert_eq!(config.asset_dir, PathBuf::from("art"));
        assert_eq!(config.music_path, PathBuf::from("cache/track.mp3"));
        assert_eq!(config.music_url, DEFAULT_URL);
        assert!(config.muted);
        Ok(())
    });
}

#[test]
fn test_invalid_value_is_a_config_error() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("ELSA_MUTED", "sometimes");

        let error = Config::load().expect_err("a non-boolean flag should be rejected");
        assert!(matches!(error, GameError::Config(_)));
        Ok(())
    });
}
