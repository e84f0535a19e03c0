//! Elsa, a tiny side-scroller: run right, jump the crates, and outpace the shadow.

pub mod app;
pub mod asset;
pub mod audio;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod formatter;
pub mod game;
pub mod logging;
pub mod platform;
pub mod systems;
