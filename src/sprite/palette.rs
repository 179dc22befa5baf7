//! Palettes: sprite sheets sliced into a uniform grid of brushes
//!
//! Brushes are addressed by a zero-based index assigned in raster order
//! (left to right, then top to bottom), which is the same numbering Tiled
//! uses for a tileset once its 1-based tile ids are corrected.

use macroquad::prelude::*;

/// A rectangular region of a sprite sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Brush {
    /// Zero-size placeholder returned for unknown indices; draws nothing
    pub const EMPTY: Brush = Brush { x: 0.0, y: 0.0, w: 0.0, h: 0.0 };

    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }
}

/// The brush layout of a sheet, independent of any GPU texture
#[derive(Debug, Clone, PartialEq)]
pub struct BrushGrid {
    brushes: Vec<Brush>,
    pub columns: u32,
    pub rows: u32,
    pub tile_w: u32,
    pub tile_h: u32,
}

impl BrushGrid {
    /// Slice an image of `image_w` x `image_h` pixels into tiles.
    /// Partial tiles at the right/bottom edge are ignored.
    pub fn new(image_w: u32, image_h: u32, tile_w: u32, tile_h: u32) -> Self {
        let (columns, rows) = if tile_w == 0 || tile_h == 0 {
            (0, 0)
        } else {
            (image_w / tile_w, image_h / tile_h)
        };

        let brushes = (0..columns * rows)
            .map(|i| Brush {
                x: ((i % columns) * tile_w) as f32,
                y: ((i / columns) * tile_h) as f32,
                w: tile_w as f32,
                h: tile_h as f32,
            })
            .collect();

        Self { brushes, columns, rows, tile_w, tile_h }
    }

    /// Look up a brush; out-of-range indices give [`Brush::EMPTY`]
    pub fn brush(&self, index: usize) -> Brush {
        self.brushes.get(index).copied().unwrap_or(Brush::EMPTY)
    }

    pub fn len(&self) -> usize {
        self.brushes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brushes.is_empty()
    }
}

/// A brush grid bound to its texture, ready to draw
pub struct Palette {
    pub grid: BrushGrid,
    pub texture: Texture2D,
}

impl Palette {
    /// Slice an already-loaded texture into square-ish tiles
    pub fn from_texture(texture: Texture2D, tile_w: u32, tile_h: u32) -> Self {
        texture.set_filter(FilterMode::Nearest);
        let grid = BrushGrid::new(texture.width() as u32, texture.height() as u32, tile_w, tile_h);
        Self { grid, texture }
    }

    /// Draw one brush with its top-left corner at (x, y)
    pub fn draw(&self, brush: usize, x: f32, y: f32, tint: Color) {
        let b = self.grid.brush(brush);
        if b.is_empty() {
            return;
        }
        draw_texture_ex(
            &self.texture,
            x,
            y,
            tint,
            DrawTextureParams {
                source: Some(macroquad::math::Rect::new(b.x, b.y, b.w, b.h)),
                ..Default::default()
            },
        );
    }
}
