//! Rain
//!
//! A field of 4x4 droplets falling at their own speeds. Roughly every other
//! tick a new droplet appears just above the top edge at a random column;
//! droplets are dropped as soon as they fall past the bottom of the screen,
//! so the field stays bounded. The same effect runs behind the main menu.

use macroquad::prelude::{draw_rectangle, Color};
use rand::rngs::StdRng;
use rand::Rng;

use super::{Simulated, TickContext};
use crate::asset::Graphics;
use crate::config::Screen;
use crate::ui::Rect;

pub const DROPLET_SIZE: f32 = 4.0;

/// Droplets enter this far above the top edge
const SPAWN_Y: f32 = -4.0;

/// Fall speed range in pixels per tick
const MIN_SPEED: u32 = 6;
const MAX_SPEED: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Droplet {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub struct Rain {
    pub droplets: Vec<Droplet>,
    /// Color given to new droplets
    pub color: Color,
    pub done: bool,
}

impl Rain {
    pub fn new(color: Color) -> Self {
        Self {
            droplets: Vec::new(),
            color,
            done: false,
        }
    }

    /// Recolor the whole field, falling droplets included
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        for droplet in &mut self.droplets {
            droplet.color = color;
        }
    }

    /// One tick of rain: fall, cull below the screen, maybe spawn
    pub fn step(&mut self, screen: &Screen, rng: &mut StdRng) {
        for droplet in &mut self.droplets {
            droplet.y += droplet.speed;
        }
        self.droplets.retain(|d| d.y <= screen.height);

        if rng.gen_bool(0.5) {
            let columns = (screen.width as u32).max(1);
            self.droplets.push(Droplet {
                x: rng.gen_range(0..columns) as f32,
                y: SPAWN_Y,
                speed: rng.gen_range(MIN_SPEED..MAX_SPEED) as f32,
                color: self.color,
            });
        }
    }

    /// Draw every droplet. Needs no textures, so the menu can use it too.
    pub fn draw_droplets(&self) {
        for d in &self.droplets {
            draw_rectangle(d.x, d.y, DROPLET_SIZE, DROPLET_SIZE, d.color);
        }
    }
}

impl Simulated for Rain {
    fn update(&mut self, ctx: &mut TickContext) {
        self.step(&ctx.config.screen, ctx.rng);
    }

    fn draw(&self, _gfx: &Graphics) {
        self.draw_droplets();
    }

    /// Weather has no physical extent
    fn hitbox(&self) -> Rect {
        Rect::EMPTY
    }

    fn can_reap(&self) -> bool {
        self.done
    }
}
