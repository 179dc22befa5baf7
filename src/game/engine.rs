//! The simulation engine
//!
//! Owns every live entity in one ordered collection and runs the tick:
//! update each entity once, reap the ones that finished, append whatever
//! was spawned during the pass, then recount the city and advance the
//! economy and the light cycle.
//!
//! Collection order is both update order and draw order. Buildings are
//! inserted at the front so they draw behind people and coins.

use std::mem;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use super::{
    Building, Economy, Entity, EntityKind, Events, LightCycle, PlacedEvent, Simulated, SoundCue, TickContext,
};
use crate::asset::Graphics;
use crate::config::GameConfig;
use crate::ui::{FrameInput, Rect, RAIN_DAY, RAIN_NIGHT};

/// Why a building could not be placed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    #[error("not enough dosh: need ${cost:.2}, have ${available:.2}")]
    InsufficientFunds { cost: f64, available: f64 },
    #[error("something is already built there")]
    Obstructed,
    #[error("too far from the street")]
    OutsideBand,
}

pub struct Engine {
    pub entities: Vec<Entity>,
    pub economy: Economy,
    pub light: LightCycle,
    /// Freeze people and traffic (dialogs); everything else keeps running
    pub halted: bool,
    pub events: Events,
    /// Building hitboxes as of the end of the last tick
    building_boxes: Vec<Rect>,
    rng: StdRng,
}

impl Engine {
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            entities: Vec::new(),
            economy: Economy::new(config.starting_dosh, config.tax),
            light: LightCycle::new(),
            halted: false,
            events: Events::new(),
            building_boxes: Vec::new(),
            rng,
        }
    }

    /// Add an entity at the back of the collection
    pub fn spawn(&mut self, entity: Entity) {
        log::debug!("Spawned {:?}", entity.kind());
        self.entities.push(entity);
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn dosh(&self) -> f64 {
        self.economy.dosh
    }

    pub fn population(&self) -> usize {
        self.economy.population
    }

    pub fn population_max(&self) -> usize {
        self.economy.population_max
    }

    pub fn building_boxes(&self) -> &[Rect] {
        &self.building_boxes
    }

    pub fn count_kind(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind() == kind).count()
    }

    /// Draw every entity in collection order
    pub fn draw(&self, gfx: &Graphics) {
        for entity in &self.entities {
            entity.draw(gfx);
        }
    }

    /// Run one tick
    pub fn update(&mut self, config: &GameConfig, input: &FrameInput) {
        let halted = self.halted;
        let mut spawned = Vec::new();
        let entities = mem::take(&mut self.entities);
        let mut survivors = Vec::with_capacity(entities.len());

        {
            let mut ctx = TickContext {
                config,
                input,
                rng: &mut self.rng,
                economy: &mut self.economy,
                events: &mut self.events,
                spawned: &mut spawned,
            };

            for mut entity in entities {
                if !(halted && entity.kind().freezes_on_halt()) {
                    entity.update(&mut ctx);
                }
                if entity.can_reap() {
                    log::debug!("Reaped {:?}", entity.kind());
                    continue;
                }
                survivors.push(entity);
            }
        }

        survivors.append(&mut spawned);
        self.entities = survivors;

        self.recount();
        self.economy.accrue(self.building_boxes.len());
        self.light.advance();

        let rain_color = if self.light.is_night() { RAIN_NIGHT } else { RAIN_DAY };
        for rain in self.entities.iter_mut().filter_map(Entity::as_rain_mut) {
            rain.set_color(rain_color);
        }
    }

    /// Refresh population and building hitboxes from the collection
    fn recount(&mut self) {
        self.economy.population = self.count_kind(EntityKind::Person);
        self.building_boxes = self
            .entities
            .iter()
            .filter_map(Entity::as_building)
            .map(|b| b.hitbox())
            .collect();
    }

    /// Does `hitbox` overlap any live entity of `kind`?
    pub fn is_collided_with_kind(&self, hitbox: &Rect, kind: EntityKind) -> bool {
        self.entities
            .iter()
            .any(|e| e.kind() == kind && e.hitbox().overlaps(hitbox))
    }

    /// Why `building` can't go where it is, if anything
    pub fn check_placement(&self, building: &Building) -> Result<(), PlacementError> {
        if self.is_collided_with_kind(&building.hitbox(), EntityKind::Building) {
            return Err(PlacementError::Obstructed);
        }
        if !self.economy.can_afford(building.cost) {
            return Err(PlacementError::InsufficientFunds {
                cost: building.cost,
                available: self.economy.dosh,
            });
        }
        Ok(())
    }

    /// Pay for and place a building. On error nothing changes.
    pub fn try_place(&mut self, building: Building) -> Result<(), PlacementError> {
        self.check_placement(&building)?;

        self.economy.dosh -= building.cost;
        self.economy.population_max += building.population;
        self.building_boxes.push(building.hitbox());
        self.events.sounds.send(SoundCue::Confirm);
        self.events.placed.send(PlacedEvent {
            kind: building.kind,
            x: building.x(),
            cost: building.cost,
        });
        self.entities.insert(0, Entity::Building(building));
        Ok(())
    }
}
