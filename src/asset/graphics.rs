//! Sprite sheets and palettes

use std::path::PathBuf;

use macroquad::prelude::*;
use super::AssetError;
use crate::sprite::Palette;

/// City tileset: ground, buildings, decorations (16x16 tiles)
pub const CITY_PALETTE_PATH: &str = "assets/sprites/projectmute.png";

/// Characters, the taxi and coins
pub const MEGA_SHEET_PATH: &str = "assets/sprites/mega.png";

/// City tileset tile size
pub const CITY_TILE_SIZE: u32 = 16;

/// The mega sheet must reach the taxi row (y 1072, 32 tall) and five
/// 32px frames of walking animation.
const MEGA_MIN_WIDTH: f32 = 160.0;
const MEGA_MIN_HEIGHT: f32 = 1104.0;

/// Highest brush index referenced by code (decorations 139..144, ground 171..175)
const CITY_MIN_BRUSHES: usize = 176;

/// All textures the simulation draws with
pub struct Graphics {
    pub city: Palette,
    pub mega: Texture2D,
}

impl Graphics {
    pub async fn load() -> Result<Self, AssetError> {
        let city = Palette::from_texture(load_sheet(CITY_PALETTE_PATH).await?, CITY_TILE_SIZE, CITY_TILE_SIZE);
        if city.grid.len() < CITY_MIN_BRUSHES {
            return Err(AssetError::Invalid {
                path: PathBuf::from(CITY_PALETTE_PATH),
                message: format!("expected at least {} tiles, found {}", CITY_MIN_BRUSHES, city.grid.len()),
            });
        }

        let mega = load_sheet(MEGA_SHEET_PATH).await?;
        if mega.width() < MEGA_MIN_WIDTH || mega.height() < MEGA_MIN_HEIGHT {
            return Err(AssetError::Invalid {
                path: PathBuf::from(MEGA_SHEET_PATH),
                message: format!(
                    "sheet is {}x{}, need at least {}x{}",
                    mega.width(),
                    mega.height(),
                    MEGA_MIN_WIDTH,
                    MEGA_MIN_HEIGHT
                ),
            });
        }

        Ok(Self { city, mega })
    }
}

/// Load a pixel-art sheet with nearest-neighbour filtering
async fn load_sheet(path: &str) -> Result<Texture2D, AssetError> {
    let texture = load_texture(path).await.map_err(|e| AssetError::Texture {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    texture.set_filter(FilterMode::Nearest);
    log::info!("Loaded {} ({}x{})", path, texture.width(), texture.height());
    Ok(texture)
}
