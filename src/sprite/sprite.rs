//! Animated sprites cut from a sprite sheet
//!
//! A sprite's animation frames sit side by side on the sheet: frame N is the
//! sprite's source rect shifted right by N widths. The animation advances
//! every [`FRAME_TICKS`] ticks while `animated` is set; frame 0 is the idle
//! pose.

use macroquad::prelude::*;
use crate::ui::Rect;

/// Ticks between animation frames (6 frames per second at 60 FPS)
pub const FRAME_TICKS: u32 = 10;

/// Tick counter period
const COUNTER_PERIOD: u32 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Source rect on the sheet (frame 0)
    pub sheet_x: f32,
    pub sheet_y: f32,
    pub width: f32,
    pub height: f32,

    /// Screen position
    pub x: f32,
    pub y: f32,

    /// Current animation frame (0 = idle)
    pub frame: u32,
    /// Number of walking frames after the idle frame
    pub frame_count: u32,
    counter: u32,
    pub animated: bool,
    /// Mirror horizontally (facing left)
    pub reversed: bool,
    /// Horizontal step in pixels per tick when walking
    pub speed: f32,
    pub tint: Color,
}

impl Sprite {
    pub fn new(sheet_x: f32, sheet_y: f32, width: f32, height: f32) -> Self {
        Self {
            sheet_x,
            sheet_y,
            width,
            height,
            x: 0.0,
            y: 0.0,
            frame: 0,
            frame_count: 1,
            counter: 0,
            animated: false,
            reversed: false,
            speed: 1.0,
            tint: WHITE,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_frames(mut self, frame_count: u32) -> Self {
        self.frame_count = frame_count;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Advance the animation by one tick
    pub fn tick(&mut self) {
        if self.animated && self.counter % FRAME_TICKS == 0 {
            self.frame += 1;
            if self.frame > self.frame_count {
                self.frame = 1;
            }
        }
        if !self.animated {
            self.frame = 0;
        }
        self.counter = (self.counter + 1) % COUNTER_PERIOD;
    }

    /// Screen-space bounds
    pub fn hitbox(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn draw(&self, sheet: &Texture2D) {
        let source = macroquad::math::Rect::new(
            self.sheet_x + self.frame as f32 * self.width,
            self.sheet_y,
            self.width,
            self.height,
        );
        draw_texture_ex(
            sheet,
            self.x,
            self.y,
            self.tint,
            DrawTextureParams {
                source: Some(source),
                flip_x: self.reversed,
                ..Default::default()
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_sprite_stays_on_frame_zero() {
        let mut sprite = Sprite::new(0.0, 864.0, 32.0, 32.0).with_frames(4);
        for _ in 0..100 {
            sprite.tick();
            assert_eq!(sprite.frame, 0);
        }
    }

    #[test]
    fn test_walk_cycle_skips_idle_frame() {
        let mut sprite = Sprite::new(0.0, 864.0, 32.0, 32.0).with_frames(4);
        sprite.animated = true;

        let mut seen = Vec::new();
        for _ in 0..(FRAME_TICKS * 10) {
            sprite.tick();
            if !seen.contains(&sprite.frame) {
                seen.push(sprite.frame);
            }
        }
        seen.sort();
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_hitbox_is_screen_space() {
        let sprite = Sprite::new(96.0, 32.0, 32.0, 32.0).at(10.0, 20.0);
        assert_eq!(sprite.hitbox(), Rect::new(10.0, 20.0, 32.0, 32.0));
    }
}
