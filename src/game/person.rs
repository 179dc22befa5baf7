//! Citizens
//!
//! People arrive by taxi and then mostly wander: now and then an idle person
//! picks a spot along the street and walks there. Some of them carry dosh
//! and occasionally drop a coin. The player can pick a person up with the
//! mouse and drop them; released mid-air they fall with increasing speed
//! until they reach the ground.

use rand::Rng;

use super::{Coin, SoundCue, Simulated, TickContext};
use crate::asset::Graphics;
use crate::sprite::Sprite;
use crate::ui::Rect;

/// Average ticks between wander decisions for an idle person
pub const WANDER_ODDS: u32 = 300;

/// Average ticks between coin drops for a person carrying dosh
pub const MONEYBAGS_ODDS: u32 = 3600;

/// A dropped coin is worth this fraction (1/n) of what the person carries
pub const DROP_DIVISOR: u32 = 10;

/// Base fall step; the step grows by one pixel every tick of the fall
pub const FALL_STEP: f32 = 2.5;

/// Waypoints snap to multiples of this
const WAYPOINT_GRID: u32 = 4;

// Walk cycles on the mega sheet: one 32px row per look, idle frame first
const SHEET_Y: f32 = 864.0;
const SIZE: f32 = 32.0;
const WALK_FRAMES: u32 = 4;
pub const LOOKS: u32 = 4;

/// Behaviors a person runs every tick, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonEffect {
    /// Pick random waypoints along the street and walk to them
    Wander,
    /// Drop a share of carried dosh as a coin now and then
    MoneyBags,
}

impl PersonEffect {
    fn apply(&self, person: &mut Person, ctx: &mut TickContext) {
        match self {
            PersonEffect::Wander => wander(person, ctx),
            PersonEffect::MoneyBags => money_bags(person, ctx),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Person {
    pub sprite: Sprite,
    /// Extra fall speed accumulated this fall
    pub fall_counter: f32,
    pub waypoint_x: f32,
    /// Walking towards `waypoint_x`
    pub on_task: bool,
    /// Dosh carried (whole units)
    pub dosh: u32,
    /// Held by the mouse
    pub dragged: bool,
    pub deceased: bool,
    pub effects: Vec<PersonEffect>,
}

impl Person {
    /// A person wearing walk cycle `look` (0..LOOKS) standing at (x, y)
    pub fn new(look: u32, x: f32, y: f32, dosh: u32) -> Self {
        let row = (look % LOOKS) as f32;
        Self {
            sprite: Sprite::new(0.0, SHEET_Y + SIZE * row, SIZE, SIZE)
                .with_frames(WALK_FRAMES)
                .at(x, y),
            fall_counter: 0.0,
            waypoint_x: x,
            on_task: false,
            dosh,
            dragged: false,
            deceased: false,
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: PersonEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn x(&self) -> f32 {
        self.sprite.x
    }

    pub fn y(&self) -> f32 {
        self.sprite.y
    }

    pub fn is_falling(&self, ground_level: f32) -> bool {
        self.sprite.y < ground_level
    }

    fn update_drag(&mut self, ctx: &mut TickContext) {
        let mouse = ctx.input.mouse;
        if !self.dragged && mouse.clicking(&self.hitbox()) {
            self.dragged = true;
            ctx.events.sounds.send(SoundCue::Jump);
        }
        if !self.dragged {
            return;
        }

        self.on_task = false;
        self.fall_counter = 0.0;
        self.sprite.x = mouse.x;
        self.sprite.y = mouse.y.min(ctx.ground_level());

        if mouse.right_down || !mouse.left_down {
            self.dragged = false;
        }
    }

    fn fall(&mut self, ground_level: f32) {
        if !self.is_falling(ground_level) {
            return;
        }
        let next = self.sprite.y + FALL_STEP + self.fall_counter;
        self.sprite.y = next.min(ground_level);
        self.fall_counter += 1.0;
    }
}

impl Simulated for Person {
    fn update(&mut self, ctx: &mut TickContext) {
        let effects = self.effects.clone();
        for effect in &effects {
            effect.apply(self, ctx);
        }

        let was_dragged = self.dragged;
        self.update_drag(ctx);
        if was_dragged || self.dragged {
            return;
        }

        let ground = ctx.ground_level();
        self.fall(ground);
        if !self.is_falling(ground) {
            self.sprite.tick();
        }
    }

    fn draw(&self, gfx: &Graphics) {
        self.sprite.draw(&gfx.mega);
    }

    fn hitbox(&self) -> Rect {
        self.sprite.hitbox()
    }

    fn can_reap(&self) -> bool {
        self.deceased
    }
}

fn wander(person: &mut Person, ctx: &mut TickContext) {
    let ground = ctx.ground_level();

    if !person.on_task {
        if person.is_falling(ground) {
            return;
        }
        person.sprite.animated = false;
        if ctx.one_in(WANDER_ODDS) {
            let width = (ctx.config.screen.width as u32).max(1);
            let waypoint = ctx.rng.gen_range(0..width);
            person.waypoint_x = (waypoint - waypoint % WAYPOINT_GRID) as f32;
            person.on_task = true;
        }
        return;
    }

    let speed = person.sprite.speed;
    let dx = person.waypoint_x - person.sprite.x;
    if dx.abs() <= speed {
        person.sprite.x = person.waypoint_x;
        person.on_task = false;
    } else {
        person.sprite.animated = true;
        person.sprite.reversed = dx < 0.0;
        person.sprite.x += speed.copysign(dx);
    }
}

fn money_bags(person: &mut Person, ctx: &mut TickContext) {
    if person.dosh == 0 || !ctx.one_in(MONEYBAGS_ODDS) {
        return;
    }
    let payout = person.dosh / DROP_DIVISOR;
    if payout == 0 {
        return;
    }
    person.dosh -= payout;
    ctx.spawn(Coin::new(payout as f64, person.sprite.x, person.sprite.y).into());
}
