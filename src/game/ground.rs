//! The street: a strip of randomly varied ground tiles along the ground line

use macroquad::prelude::{Color, WHITE};
use rand::rngs::StdRng;
use rand::Rng;

use crate::asset::{Graphics, CITY_TILE_SIZE};
use crate::config::Screen;
use crate::ui::GROUND_NIGHT;

/// Ground brushes 171..=174 on the city palette
const GROUND_BRUSH: usize = 171;
const GROUND_VARIANTS: usize = 4;

#[derive(Debug, Clone)]
pub struct GroundStrip {
    /// One brush per 16px column, left to right
    pub tiles: Vec<usize>,
    pub y: f32,
}

impl GroundStrip {
    /// Pick a tile for every column; the pattern is fixed for the session
    pub fn new(screen: &Screen, rng: &mut StdRng) -> Self {
        let columns = (screen.width / CITY_TILE_SIZE as f32).ceil() as usize;
        let tiles = (0..columns)
            .map(|_| GROUND_BRUSH + rng.gen_range(0..GROUND_VARIANTS))
            .collect();
        Self { tiles, y: screen.ground_level }
    }

    pub fn tint(night: bool) -> Color {
        if night {
            GROUND_NIGHT
        } else {
            WHITE
        }
    }

    pub fn draw(&self, gfx: &Graphics, night: bool) {
        let tint = Self::tint(night);
        let size = CITY_TILE_SIZE as f32;
        for (column, &brush) in self.tiles.iter().enumerate() {
            gfx.city.draw(brush, column as f32 * size, self.y, tint);
        }
    }
}
