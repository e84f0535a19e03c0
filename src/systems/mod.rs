//! The Entity-Component-System (ECS) module.
//!
//! The game keeps its whole state in resources; each system owns one concern
//! and the schedule in [`crate::game`] fixes their order within a frame.

pub mod audio;
pub mod collision;
pub mod input;
pub mod player;
pub mod render;
pub mod shadow;
pub mod stage;

pub use self::audio::*;
pub use self::collision::*;
pub use self::input::*;
pub use self::player::*;
pub use self::render::*;
pub use self::shadow::*;
pub use self::stage::*;
