//! Stamps: several brushes composed into one static visual

use macroquad::prelude::Color;
use super::Palette;
use crate::ui::Rect;

/// One brush placed at an offset inside a stamp
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCoord {
    pub brush: usize,
    pub x_offset: f32,
    pub y_offset: f32,
}

impl DrawCoord {
    pub const fn new(brush: usize, x_offset: f32, y_offset: f32) -> Self {
        Self { brush, x_offset, y_offset }
    }
}

/// An ordered list of brushes rendered together at a screen position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stamp {
    pub coords: Vec<DrawCoord>,
    /// Screen position of the stamp's top-left corner
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Stamp {
    pub fn new(width: f32, height: f32) -> Self {
        Self { coords: Vec::new(), x: 0.0, y: 0.0, width, height }
    }

    /// Builder-style brush append
    pub fn with(mut self, brush: usize, x_offset: f32, y_offset: f32) -> Self {
        self.coords.push(DrawCoord::new(brush, x_offset, y_offset));
        self
    }

    pub fn push(&mut self, brush: usize, x_offset: f32, y_offset: f32) {
        self.coords.push(DrawCoord::new(brush, x_offset, y_offset));
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn hitbox(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Draw every brush; offsets snap to whole pixels
    pub fn draw(&self, palette: &Palette, tint: Color) {
        for coord in &self.coords {
            palette.draw(
                coord.brush,
                (self.x + coord.x_offset).trunc(),
                (self.y + coord.y_offset).trunc(),
                tint,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hitbox_follows_position() {
        let mut stamp = Stamp::new(48.0, 32.0).with(75, 0.0, 0.0);
        stamp.set_position(100.0, 400.0);
        assert_eq!(stamp.hitbox(), Rect::new(100.0, 400.0, 48.0, 32.0));
        assert_eq!(stamp.coords.len(), 1);
    }
}
