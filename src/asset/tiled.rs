//! Tiled tile-map import
//!
//! Buildings are drawn in Tiled (https://www.mapeditor.org/) against the city
//! tileset and exported as JSON. Each layer is a flat row-major array of
//! tile ids where 0 is an empty cell and every other id is 1-based. We turn
//! the nonzero cells into a [`Stamp`]: brush `id - 1` at the pixel offset of
//! its cell.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use super::AssetError;
use crate::sprite::Stamp;

/// Upper bound on cells per layer, to keep a bad export from eating memory
pub const MAX_LAYER_CELLS: usize = 64 * 64;

/// Upper bound on a map's pixel extent along either axis
pub const MAX_MAP_PIXELS: u32 = 4096;

/// One tile layer of a Tiled export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Row-major tile ids (0 = empty). Object layers have none.
    #[serde(default)]
    pub data: Vec<u32>,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

/// The subset of a Tiled JSON export we care about
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TileMap {
    pub width: u32,
    pub height: u32,
    pub tilewidth: u32,
    pub tileheight: u32,
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl TileMap {
    /// Parse a Tiled JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load and parse a Tiled JSON file
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let contents = fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents).map_err(|source| AssetError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Flatten every layer into one stamp, layers in file order
    pub fn to_stamp(&self) -> Result<Stamp, String> {
        let pixel_w = map_extent("width", self.width, self.tilewidth)?;
        let pixel_h = map_extent("height", self.height, self.tileheight)?;
        let mut stamp = Stamp::new(pixel_w as f32, pixel_h as f32);

        for (layer_index, layer) in self.layers.iter().enumerate() {
            if layer.data.is_empty() {
                continue;
            }
            if layer.width == 0 {
                return Err(format!("layer {} has tile data but zero width", layer_index));
            }
            if layer.data.len() > MAX_LAYER_CELLS {
                return Err(format!(
                    "layer {} has too many cells ({} > {})",
                    layer_index,
                    layer.data.len(),
                    MAX_LAYER_CELLS
                ));
            }

            let columns = layer.width as usize;
            for (cell, &tile) in layer.data.iter().enumerate() {
                if tile == 0 {
                    continue;
                }
                let col = (cell % columns) as u64;
                let row = (cell / columns) as u64;
                stamp.push(
                    (tile - 1) as usize,
                    (col * self.tilewidth as u64) as f32,
                    (row * self.tileheight as u64) as f32,
                );
            }
        }

        Ok(stamp)
    }
}

/// Pixel extent of `tiles` cells of `tile_size` px, bounded by [`MAX_MAP_PIXELS`]
fn map_extent(axis: &str, tiles: u32, tile_size: u32) -> Result<u32, String> {
    tiles
        .checked_mul(tile_size)
        .filter(|&pixels| pixels <= MAX_MAP_PIXELS)
        .ok_or_else(|| {
            format!(
                "map {} of {} tiles at {} px exceeds {} px",
                axis, tiles, tile_size, MAX_MAP_PIXELS
            )
        })
}

/// Load a Tiled export straight into a stamp
pub fn load_stamp(path: &Path) -> Result<Stamp, AssetError> {
    let map = TileMap::load(path)?;
    let stamp = map.to_stamp().map_err(|message| AssetError::Invalid {
        path: path.to_path_buf(),
        message,
    })?;
    log::debug!("Loaded {} brushes from {}", stamp.coords.len(), path.display());
    Ok(stamp)
}
