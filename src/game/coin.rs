//! Dropped coins
//!
//! A coin pays into the treasury on its first update, hops up and falls back
//! to the ground, then fades out over [`FADE_TICKS`] ticks and is reaped.

use macroquad::prelude::Color;
use rand::Rng;

use super::{SoundCue, Simulated, TickContext};
use crate::asset::Graphics;
use crate::sprite::Sprite;
use crate::ui::Rect;

/// Upward speed a coin starts with
pub const LAUNCH_VELOCITY: f32 = -10.0;

/// Ticks the landed coin takes to fade out
pub const FADE_TICKS: u32 = 20;

/// What a taxi passenger pays on arrival
pub const TAXI_FARE: f64 = 2.5;

const SHEET_X: f32 = 96.0;
const SHEET_Y: f32 = 32.0;
const SIZE: f32 = 32.0;

/// Lifecycle stages, only ever moving forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinPhase {
    /// In the air
    Active,
    /// On the ground, fading
    Fading,
    Done,
}

#[derive(Debug, Clone)]
pub struct Coin {
    pub sprite: Sprite,
    pub velocity: f32,
    /// Value credited to the treasury
    pub payout: f64,
    credited: bool,
    fade: u32,
    phase: CoinPhase,
}

impl Coin {
    pub fn new(payout: f64, x: f32, y: f32) -> Self {
        Self {
            sprite: Sprite::new(SHEET_X, SHEET_Y, SIZE, SIZE).at(x, y),
            velocity: LAUNCH_VELOCITY,
            payout,
            credited: false,
            fade: 0,
            phase: CoinPhase::Active,
        }
    }

    pub fn phase(&self) -> CoinPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == CoinPhase::Active
    }

    pub fn is_done(&self) -> bool {
        self.phase == CoinPhase::Done
    }

    /// Opacity of the sprite
    pub fn alpha(&self) -> f32 {
        self.sprite.tint.a
    }
}

impl Simulated for Coin {
    fn update(&mut self, ctx: &mut TickContext) {
        match self.phase {
            CoinPhase::Active => {
                if !self.credited {
                    ctx.economy.credit(self.payout);
                    self.credited = true;
                }

                self.velocity += 1.0;
                let ground = ctx.ground_level();
                if self.sprite.y + self.velocity >= ground {
                    self.sprite.y = ground;
                    let cue = if ctx.rng.gen_bool(0.5) { SoundCue::Coin1 } else { SoundCue::Coin2 };
                    ctx.events.sounds.send(cue);
                    self.phase = CoinPhase::Fading;
                } else {
                    self.sprite.y += self.velocity;
                }
            }
            CoinPhase::Fading => {
                if self.fade < FADE_TICKS {
                    let alpha = 1.0 - self.fade as f32 / FADE_TICKS as f32;
                    self.sprite.tint = Color::new(1.0, 1.0, 1.0, alpha);
                } else {
                    self.sprite.tint = Color::new(1.0, 1.0, 1.0, 0.0);
                    self.phase = CoinPhase::Done;
                }
                self.fade += 1;
            }
            CoinPhase::Done => {}
        }
    }

    fn draw(&self, gfx: &Graphics) {
        if !self.is_done() {
            self.sprite.draw(&gfx.mega);
        }
    }

    fn hitbox(&self) -> Rect {
        self.sprite.hitbox()
    }

    fn can_reap(&self) -> bool {
        self.is_done()
    }
}
