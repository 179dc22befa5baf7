//! Game simulation
//!
//! The city as a flat list of entities driven by the [`Engine`] once per
//! frame. Entities are a closed set of variants sharing the [`Simulated`]
//! capability set; side effects they can't apply themselves (new entities,
//! sounds) go through the [`TickContext`].
//!
//! Nothing in here touches macroquad's global input or audio state, so the
//! whole simulation runs headless in tests.

pub mod building;
pub mod coin;
pub mod economy;
pub mod engine;
pub mod entity;
pub mod event;
pub mod ground;
pub mod light;
pub mod person;
pub mod taxi;
pub mod weather;

// Re-export main types
pub use building::{Building, BuildingCatalog, BuildingEffect, BuildingId, BuildingKind, Decoration, BUILDINGS_DIR};
pub use coin::{Coin, CoinPhase, TAXI_FARE};
pub use economy::Economy;
pub use engine::{Engine, PlacementError};
pub use entity::{Entity, EntityKind, Simulated, TickContext};
pub use event::{Events, PlacedEvent, SoundCue};
pub use ground::GroundStrip;
pub use light::LightCycle;
pub use person::{Person, PersonEffect};
pub use taxi::Taxi;
pub use weather::Rain;
