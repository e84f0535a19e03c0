//! Loading of the game's artwork and banners from the asset directory.
//!
//! A missing or unreadable image is never fatal: it is replaced with a solid
//! placeholder of a known size so the game stays playable.

use std::collections::HashMap;
use std::path::Path;

use glam::UVec2;
use sdl2::image::LoadSurface;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::WindowContext;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tracing::{debug, warn};

use crate::config::Config;
use crate::constants::{color, messages, CANVAS_SIZE, FONT_FILE, FONT_POINT_SIZE};
use crate::error::{AssetError, GameResult};
use crate::systems::player::PlayerPose;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Asset {
    Background,
    ElsaIdle,
    ElsaWalk1,
    ElsaWalk2,
    ElsaJump,
    Shadow,
}

impl Asset {
    pub fn file_name(self) -> &'static str {
        match self {
            Asset::Background => "background.png",
            Asset::ElsaIdle => "elsa_idle.png",
            Asset::ElsaWalk1 => "elsa_walk1.png",
            Asset::ElsaWalk2 => "elsa_walk2.png",
            Asset::ElsaJump => "elsa_jump.png",
            Asset::Shadow => "shadow.png",
        }
    }

    /// Size of the placeholder used when the file cannot be loaded.
    pub fn fallback_size(self) -> UVec2 {
        match self {
            Asset::Background => CANVAS_SIZE,
            Asset::ElsaIdle | Asset::ElsaWalk1 | Asset::ElsaWalk2 | Asset::ElsaJump => UVec2::new(64, 136),
            Asset::Shadow => UVec2::new(160, 240),
        }
    }
}

impl From<PlayerPose> for Asset {
    fn from(pose: PlayerPose) -> Self {
        match pose {
            PlayerPose::Idle => Asset::ElsaIdle,
            PlayerPose::Walk1 => Asset::ElsaWalk1,
            PlayerPose::Walk2 => Asset::ElsaWalk2,
            PlayerPose::Jump => Asset::ElsaJump,
        }
    }
}

/// A solid rectangle in the placeholder color.
pub fn placeholder_surface(size: UVec2) -> Result<Surface<'static>, AssetError> {
    let mut surface = Surface::new(size.x, size.y, PixelFormatEnum::RGBA32).map_err(AssetError::Placeholder)?;
    surface.fill_rect(None, color::PLACEHOLDER).map_err(AssetError::Placeholder)?;
    Ok(surface)
}

/// Loads the image at `path`, falling back to a placeholder of `fallback_size` if it cannot be read.
pub fn load_image(path: &Path, fallback_size: UVec2) -> Result<Surface<'static>, AssetError> {
    match Surface::from_file(path) {
        Ok(surface) => {
            debug!(path = %path.display(), width = surface.width(), height = surface.height(), "Loaded image");
            Ok(surface)
        }
        Err(reason) => {
            let error = AssetError::ImageLoad {
                path: path.to_path_buf(),
                reason,
            };
            warn!(error = %error, "Using placeholder");
            placeholder_surface(fallback_size)
        }
    }
}

/// Every image the game draws, uploaded as textures. Lives as a non-send resource.
pub struct Sprites {
    textures: HashMap<Asset, Texture>,
}

impl Sprites {
    pub fn load(texture_creator: &TextureCreator<WindowContext>, config: &Config) -> GameResult<Self> {
        Asset::iter()
            .map(|asset| -> GameResult<(Asset, Texture)> {
                let surface = load_image(&config.asset_path(asset.file_name()), asset.fallback_size())?;
                let texture = texture_creator
                    .create_texture_from_surface(&surface)
                    .map_err(|e| AssetError::Texture(e.to_string()))?;
                Ok((asset, texture))
            })
            .collect()
    }

    pub fn get(&self, asset: Asset) -> Option<&Texture> {
        self.textures.get(&asset)
    }
}

impl FromIterator<(Asset, Texture)> for Sprites {
    fn from_iter<I: IntoIterator<Item = (Asset, Texture)>>(iter: I) -> Self {
        Self {
            textures: iter.into_iter().collect(),
        }
    }
}

/// The end-of-game banners, rendered once at startup.
///
/// Both are absent when the font cannot be loaded; the message screens then stay black.
pub struct Banners {
    death: Option<Texture>,
    finish: Option<Texture>,
}

impl Banners {
    pub fn new(death: Option<Texture>, finish: Option<Texture>) -> Self {
        Self { death, finish }
    }

    pub fn empty() -> Self {
        Self::new(None, None)
    }

    pub fn load(ttf: &Sdl2TtfContext, texture_creator: &TextureCreator<WindowContext>, config: &Config) -> Self {
        let font_path = config.asset_path(FONT_FILE);
        let font = match ttf.load_font(&font_path, FONT_POINT_SIZE) {
            Ok(font) => font,
            Err(reason) => {
                let error = AssetError::FontLoad { path: font_path, reason };
                warn!(error = %error, "Banners will not be shown");
                return Self::empty();
            }
        };

        let render = |text: &str| -> Option<Texture> {
            let rendered = font
                .render(text)
                .blended(color::BANNER_TEXT)
                .map_err(|e| AssetError::TextRender(e.to_string()))
                .and_then(|surface| {
                    texture_creator
                        .create_texture_from_surface(&surface)
                        .map_err(|e| AssetError::Texture(e.to_string()))
                });
            match rendered {
                Ok(texture) => Some(texture),
                Err(e) => {
                    warn!(error = %e, "Failed to render banner");
                    None
                }
            }
        };

        Self::new(render(messages::DEATH), render(messages::FINISH))
    }

    pub fn death(&self) -> Option<&Texture> {
        self.death.as_ref()
    }

    pub fn finish(&self) -> Option<&Texture> {
        self.finish.as_ref()
    }
}
