//! 2D sprite primitives
//!
//! - Palette: a sprite sheet sliced into a grid of brushes
//! - Stamp: brushes composed into one static visual (buildings, decor)
//! - Sprite: an animated region of a sheet (people, taxi, coins)

mod palette;
mod stamp;
#[allow(clippy::module_inception)]
mod sprite;

pub use palette::*;
pub use stamp::*;
pub use sprite::*;
