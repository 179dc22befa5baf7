//! The taxi that brings new citizens to town
//!
//! It drives left to right across the street. Once off screen it waits for
//! a random moment when the city has free housing, then reappears at the
//! left edge. Every time it crosses the middle of the screen it drops off
//! its passengers and a fare coin.

use rand::Rng;

use super::person::LOOKS;
use super::{Coin, Person, PersonEffect, SoundCue, Simulated, TickContext, TAXI_FARE};
use crate::asset::Graphics;
use crate::config::Screen;
use crate::sprite::Sprite;
use crate::ui::Rect;

/// Pixels per tick
pub const TAXI_SPEED: f32 = 4.0;

/// Average ticks between respawn attempts while parked off screen
pub const DEFAULT_SPAWN_ODDS: u32 = 600;

/// Upper bound (exclusive) on what a passenger carries
pub const PASSENGER_MAX_DOSH: u32 = 100;

/// One passenger in this many is a coin dropper
pub const MONEYBAGS_PASSENGER_ODDS: u32 = 10;

const SHEET_Y: f32 = 1072.0;
const WIDTH: f32 = 96.0;
const HEIGHT: f32 = 32.0;

#[derive(Debug, Clone)]
pub struct Taxi {
    pub sprite: Sprite,
    pub passengers: u32,
    /// 0 falls back to [`DEFAULT_SPAWN_ODDS`]
    pub spawn_odds: u32,
}

impl Taxi {
    /// A taxi parked just past the right edge, on the ground
    pub fn new(screen: &Screen) -> Self {
        Self {
            sprite: Sprite::new(0.0, SHEET_Y, WIDTH, HEIGHT)
                .with_speed(TAXI_SPEED)
                .at(screen.width + WIDTH, screen.ground_level),
            passengers: 1,
            spawn_odds: DEFAULT_SPAWN_ODDS,
        }
    }

    pub fn x(&self) -> f32 {
        self.sprite.x
    }

    pub fn on_screen(&self, screen_width: f32) -> bool {
        let w = self.sprite.width;
        self.sprite.x >= -w && self.sprite.x <= screen_width + w
    }

    fn drop_off(&self, ctx: &mut TickContext) {
        let look = ctx.rng.gen_range(0..LOOKS);
        let (x, y) = (self.sprite.x, self.sprite.y);

        for _ in 0..self.passengers {
            let dosh = ctx.rng.gen_range(0..PASSENGER_MAX_DOSH);
            let mut person = Person::new(look, x, y, dosh).with_effect(PersonEffect::Wander);
            if ctx.one_in(MONEYBAGS_PASSENGER_ODDS) {
                person = person.with_effect(PersonEffect::MoneyBags);
            }
            ctx.events.sounds.send(SoundCue::Arrived);
            ctx.spawn(person.into());
        }

        ctx.spawn(Coin::new(TAXI_FARE, x, y).into());
        log::debug!("Taxi dropped off {} passenger(s) at x={}", self.passengers, x);
    }
}

impl Simulated for Taxi {
    fn update(&mut self, ctx: &mut TickContext) {
        let screen_width = ctx.config.screen.width;
        let before = self.sprite.x;

        if self.on_screen(screen_width) {
            self.sprite.x += self.sprite.speed;
        } else {
            if self.spawn_odds == 0 {
                self.spawn_odds = DEFAULT_SPAWN_ODDS;
            }
            if ctx.one_in(self.spawn_odds) && ctx.economy.has_vacancy() {
                self.sprite.x = -self.sprite.width;
                ctx.events.sounds.send(SoundCue::Taxi);
            }

            let population = ctx.economy.population;
            self.passengers = if population > 1 && ctx.economy.population_max >= population * 2 {
                2
            } else {
                1
            };
        }

        let middle = (screen_width / 2.0).floor();
        if before < middle && self.sprite.x >= middle {
            self.drop_off(ctx);
        }
    }

    fn draw(&self, gfx: &Graphics) {
        self.sprite.draw(&gfx.mega);
    }

    fn hitbox(&self) -> Rect {
        self.sprite.hitbox()
    }

    fn can_reap(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::{Economy, Entity, EntityKind, Events};
    use crate::ui::FrameInput;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct Harness {
        config: GameConfig,
        input: FrameInput,
        rng: StdRng,
        economy: Economy,
        events: Events,
        spawned: Vec<Entity>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                config: GameConfig::default(),
                input: FrameInput::default(),
                rng: StdRng::seed_from_u64(1),
                economy: Economy::new(0.0, 1.0),
                events: Events::new(),
                spawned: Vec::new(),
            }
        }

        fn tick(&mut self, taxi: &mut Taxi) {
            let mut ctx = TickContext {
                config: &self.config,
                input: &self.input,
                rng: &mut self.rng,
                economy: &mut self.economy,
                events: &mut self.events,
                spawned: &mut self.spawned,
            };
            taxi.update(&mut ctx);
        }
    }

    #[test]
    fn test_starts_parked_off_screen() {
        let mut h = Harness::new();
        let mut taxi = Taxi::new(&h.config.screen);
        assert_eq!(taxi.sprite.y, h.config.screen.ground_level);
        // On the right boundary: one more step takes it off screen
        h.tick(&mut taxi);
        assert!(!taxi.on_screen(h.config.screen.width));
    }

    #[test]
    fn test_no_respawn_without_vacancy() {
        let mut h = Harness::new();
        let mut taxi = Taxi::new(&h.config.screen);
        taxi.sprite.x = 10_000.0;
        for _ in 0..20_000 {
            h.tick(&mut taxi);
        }
        assert_eq!(taxi.x(), 10_000.0);
        assert!(h.events.sounds.is_empty());
    }

    #[test]
    fn test_respawns_at_left_edge_when_housing_free() {
        let mut h = Harness::new();
        h.economy.population_max = 4;
        let mut taxi = Taxi::new(&h.config.screen);
        taxi.sprite.x = 10_000.0;

        for _ in 0..50_000 {
            h.tick(&mut taxi);
            if taxi.x() != 10_000.0 {
                break;
            }
        }
        assert_eq!(taxi.x(), -WIDTH);
        assert_eq!(h.events.sounds.iter().copied().collect::<Vec<_>>(), vec![SoundCue::Taxi]);
    }

    #[test]
    fn test_drops_off_exactly_once_per_crossing() {
        let mut h = Harness::new();
        let mut taxi = Taxi::new(&h.config.screen);
        taxi.sprite.x = -WIDTH;

        while taxi.on_screen(h.config.screen.width) {
            h.tick(&mut taxi);
        }

        let kinds: Vec<_> = h.spawned.iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec![EntityKind::Person, EntityKind::Coin]);
        assert_eq!(h.spawned[1].as_coin().map(|c| c.payout), Some(TAXI_FARE));

        let person = h.spawned[0].as_person().unwrap();
        assert!(person.dosh < PASSENGER_MAX_DOSH);
        assert!(person.effects.contains(&PersonEffect::Wander));
        assert_eq!(person.y(), h.config.screen.ground_level);
    }

    #[test]
    fn test_two_passengers_when_housing_is_plentiful() {
        let mut h = Harness::new();
        h.economy.population = 2;
        h.economy.population_max = 4;
        let mut taxi = Taxi::new(&h.config.screen);
        taxi.sprite.x = 10_000.0;
        taxi.spawn_odds = u32::MAX;
        h.tick(&mut taxi);
        assert_eq!(taxi.passengers, 2);

        h.economy.population_max = 3;
        h.tick(&mut taxi);
        assert_eq!(taxi.passengers, 1);
    }

    #[test]
    fn test_never_reaped() {
        let taxi = Taxi::new(&GameConfig::default().screen);
        assert!(!taxi.can_reap());
    }
}
