//! Entities and their shared capability set
//!
//! Every simulated object implements [`Simulated`]: update once per tick,
//! draw, report a hitbox, and say whether it can be reaped. The engine keeps
//! them in one ordered `Vec<Entity>`; the enum tag ([`EntityKind`]) is what
//! population counts, collision queries and the cutscene pause filter on.
//!
//! Identity is positional. Nothing holds an index into the collection
//! across ticks; decorations refer to their building by [`BuildingId`].
//!
//! [`BuildingId`]: super::BuildingId

use rand::rngs::StdRng;
use rand::Rng;

use super::{Building, Coin, Decoration, Economy, Events, Person, Rain, Taxi};
use crate::asset::Graphics;
use crate::config::GameConfig;
use crate::ui::{FrameInput, Rect};

/// Everything an entity may read or touch while it updates
pub struct TickContext<'a> {
    pub config: &'a GameConfig,
    pub input: &'a FrameInput,
    pub rng: &'a mut StdRng,
    pub economy: &'a mut Economy,
    pub events: &'a mut Events,
    /// Entities created this tick; they join the collection after the pass
    pub spawned: &'a mut Vec<Entity>,
}

impl TickContext<'_> {
    /// Queue a new entity. It is appended after this tick's survivors and
    /// receives its first update next tick.
    pub fn spawn(&mut self, entity: Entity) {
        log::debug!("Spawned {:?}", entity.kind());
        self.spawned.push(entity);
    }

    /// True with probability 1/`odds` (never for `odds == 0`)
    pub fn one_in(&mut self, odds: u32) -> bool {
        odds > 0 && self.rng.gen_range(0..odds) == 0
    }

    pub fn ground_level(&self) -> f32 {
        self.config.screen.ground_level
    }
}

/// The capability set shared by every entity variant
pub trait Simulated {
    /// Advance one tick
    fn update(&mut self, ctx: &mut TickContext);

    /// Render at the current state. Must not mutate anything.
    fn draw(&self, gfx: &Graphics);

    /// Screen-space bounds for collision queries
    fn hitbox(&self) -> Rect;

    /// Terminal state reached; the engine drops the entity this tick
    fn can_reap(&self) -> bool;
}

/// Entity variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Building,
    Decoration,
    Person,
    Coin,
    Taxi,
    Rain,
}

impl EntityKind {
    /// Kinds that stand still while a dialog holds the game
    pub fn freezes_on_halt(&self) -> bool {
        matches!(self, EntityKind::Person | EntityKind::Taxi)
    }
}

/// A simulated object
#[derive(Debug, Clone)]
pub enum Entity {
    Building(Building),
    Decoration(Decoration),
    Person(Person),
    Coin(Coin),
    Taxi(Taxi),
    Rain(Rain),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Building(_) => EntityKind::Building,
            Entity::Decoration(_) => EntityKind::Decoration,
            Entity::Person(_) => EntityKind::Person,
            Entity::Coin(_) => EntityKind::Coin,
            Entity::Taxi(_) => EntityKind::Taxi,
            Entity::Rain(_) => EntityKind::Rain,
        }
    }

    pub fn as_building(&self) -> Option<&Building> {
        match self {
            Entity::Building(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_person(&self) -> Option<&Person> {
        match self {
            Entity::Person(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_person_mut(&mut self) -> Option<&mut Person> {
        match self {
            Entity::Person(p) => Some(p),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn as_coin(&self) -> Option<&Coin> {
        match self {
            Entity::Coin(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_rain_mut(&mut self) -> Option<&mut Rain> {
        match self {
            Entity::Rain(r) => Some(r),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn Simulated {
        match self {
            Entity::Building(b) => b,
            Entity::Decoration(d) => d,
            Entity::Person(p) => p,
            Entity::Coin(c) => c,
            Entity::Taxi(t) => t,
            Entity::Rain(r) => r,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Simulated {
        match self {
            Entity::Building(b) => b,
            Entity::Decoration(d) => d,
            Entity::Person(p) => p,
            Entity::Coin(c) => c,
            Entity::Taxi(t) => t,
            Entity::Rain(r) => r,
        }
    }
}

impl Simulated for Entity {
    fn update(&mut self, ctx: &mut TickContext) {
        self.inner_mut().update(ctx);
    }

    fn draw(&self, gfx: &Graphics) {
        self.inner().draw(gfx);
    }

    fn hitbox(&self) -> Rect {
        self.inner().hitbox()
    }

    fn can_reap(&self) -> bool {
        self.inner().can_reap()
    }
}

impl From<Building> for Entity {
    fn from(b: Building) -> Self {
        Entity::Building(b)
    }
}

impl From<Decoration> for Entity {
    fn from(d: Decoration) -> Self {
        Entity::Decoration(d)
    }
}

impl From<Person> for Entity {
    fn from(p: Person) -> Self {
        Entity::Person(p)
    }
}

impl From<Coin> for Entity {
    fn from(c: Coin) -> Self {
        Entity::Coin(c)
    }
}

impl From<Taxi> for Entity {
    fn from(t: Taxi) -> Self {
        Entity::Taxi(t)
    }
}

impl From<Rain> for Entity {
    fn from(r: Rain) -> Self {
        Entity::Rain(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_people_and_taxis_freeze() {
        let frozen: Vec<_> = [
            EntityKind::Building,
            EntityKind::Decoration,
            EntityKind::Person,
            EntityKind::Coin,
            EntityKind::Taxi,
            EntityKind::Rain,
        ]
        .into_iter()
        .filter(|k| k.freezes_on_halt())
        .collect();
        assert_eq!(frozen, vec![EntityKind::Person, EntityKind::Taxi]);
    }

    #[test]
    fn test_kind_matches_variant() {
        let coin: Entity = Coin::new(1.0, 0.0, 0.0).into();
        assert_eq!(coin.kind(), EntityKind::Coin);
        assert!(coin.as_coin().is_some());
        assert!(coin.as_building().is_none());
    }
}
