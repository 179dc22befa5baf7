//! Asset loading
//!
//! Everything the game needs to be playable (sprite sheets, the city
//! palette, building tile maps) is loaded once at startup and any failure
//! is fatal: there is no fallback art and no hot reload. Sounds and music
//! are optional; a missing file only costs us the sound.

mod audio;
mod graphics;
pub mod tiled;

pub use audio::*;
pub use graphics::*;

use std::path::PathBuf;
use thiserror::Error;

/// Error type for asset loading
#[derive(Debug, Error)]
pub enum AssetError {
    /// File could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// File is not valid JSON for what we expected
    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Image could not be decoded or uploaded
    #[error("failed to load texture {path}: {message}")]
    Texture { path: String, message: String },
    /// File parsed but its contents make no sense
    #[error("invalid asset {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },
}
