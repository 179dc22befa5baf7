//! Build placement: the building preview that follows the cursor
//!
//! Two states. `Idle`, and `Previewing` a candidate building of one kind.
//! Build buttons act like an exclusive tool group: pressing the active
//! kind's button puts the preview away, pressing another kind swaps it.
//!
//! While previewing, the candidate sits on the street under the cursor and
//! its tint says whether it can go there. Left click commits through
//! [`Engine::try_place`], right click cancels.

use std::mem;

use macroquad::prelude::Color;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::game::{Building, BuildingCatalog, BuildingKind, Engine, PlacementError, SoundCue};
use crate::ui::{MouseState, TINT_OBSTRUCTED, TINT_UNAFFORDABLE, TINT_VALID};

/// Clicks further than this below the ground line don't place anything
pub const PLACEMENT_BAND: f32 = 100.0;

/// Buildings sink this far into the ground so their doors meet the street
const FOUNDATION_DEPTH: f32 = 16.0;

/// Whether the preview could be placed where it is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    Valid,
    /// Overlaps an existing building
    Obstructed,
    /// Not enough dosh
    Unaffordable,
}

impl PreviewState {
    fn from_check(result: Result<(), PlacementError>) -> Self {
        match result {
            Ok(()) | Err(PlacementError::OutsideBand) => PreviewState::Valid,
            Err(PlacementError::Obstructed) => PreviewState::Obstructed,
            Err(PlacementError::InsufficientFunds { .. }) => PreviewState::Unaffordable,
        }
    }

    pub fn tint(&self) -> Color {
        match self {
            PreviewState::Valid => TINT_VALID,
            PreviewState::Obstructed => TINT_OBSTRUCTED,
            PreviewState::Unaffordable => TINT_UNAFFORDABLE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    Idle,
    Previewing {
        kind: BuildingKind,
        building: Building,
        state: PreviewState,
    },
}

impl Placement {
    pub fn kind(&self) -> Option<BuildingKind> {
        match self {
            Placement::Idle => None,
            Placement::Previewing { kind, .. } => Some(*kind),
        }
    }

    pub fn is_previewing(&self) -> bool {
        matches!(self, Placement::Previewing { .. })
    }

    /// The preview building and its state, if any
    pub fn preview(&self) -> Option<(&Building, PreviewState)> {
        match self {
            Placement::Idle => None,
            Placement::Previewing { building, state, .. } => Some((building, *state)),
        }
    }

    /// A build button was pressed
    pub fn select(&mut self, kind: BuildingKind, catalog: &BuildingCatalog, rng: &mut StdRng) {
        if self.kind() == Some(kind) {
            *self = Placement::Idle;
            return;
        }
        *self = Placement::Previewing {
            kind,
            building: catalog.instantiate(kind, rng),
            state: PreviewState::Valid,
        };
    }

    /// Move the preview under the cursor and re-evaluate its state
    pub fn track(&mut self, engine: &Engine, config: &GameConfig, mouse: &MouseState) {
        if let Placement::Previewing { building, state, .. } = self {
            let ground = config.screen.ground_level;
            building.set_position(
                mouse.x - building.width() / 2.0,
                ground - building.height() + FOUNDATION_DEPTH,
            );
            *state = PreviewState::from_check(engine.check_placement(building));
        }
    }

    /// Try to build the preview at the cursor. On success the preview is
    /// put away; on failure it stays up.
    pub fn commit(&mut self, engine: &mut Engine, config: &GameConfig, mouse: &MouseState) -> Result<(), PlacementError> {
        let Placement::Previewing { building, .. } = self else {
            return Ok(());
        };
        if mouse.y > config.screen.ground_level + PLACEMENT_BAND {
            return Err(PlacementError::OutsideBand);
        }

        engine.try_place(building.clone())?;
        if let Placement::Previewing { kind, building, .. } = mem::replace(self, Placement::Idle) {
            log::info!("Placed {:?} at x={} (${:.2} left)", kind, building.x(), engine.dosh());
        }
        Ok(())
    }

    /// Per-frame handling while previewing. `accept_clicks` is false on the
    /// frame a build button consumed the click.
    pub fn update(&mut self, engine: &mut Engine, config: &GameConfig, mouse: &MouseState, accept_clicks: bool) {
        if !self.is_previewing() {
            return;
        }
        self.track(engine, config, mouse);
        if !accept_clicks {
            return;
        }

        if mouse.right_pressed {
            engine.events.sounds.send(SoundCue::Cancel);
            *self = Placement::Idle;
        } else if mouse.left_pressed {
            if let Err(e) = self.commit(engine, config, mouse) {
                log::debug!("Placement rejected: {}", e);
            }
        }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Placement::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::building::tests::test_catalog;
    use crate::game::EntityKind;

    fn setup() -> (Engine, GameConfig, BuildingCatalog) {
        let config = GameConfig::default();
        (Engine::new(&config), config, test_catalog())
    }

    fn click(x: f32, y: f32) -> MouseState {
        MouseState { x, y, left_down: true, left_pressed: true, ..Default::default() }
    }

    #[test]
    fn test_same_button_toggles_other_button_swaps() {
        let (mut engine, _config, catalog) = setup();
        let mut placement = Placement::Idle;

        placement.select(BuildingKind::House, &catalog, engine.rng_mut());
        assert_eq!(placement.kind(), Some(BuildingKind::House));

        placement.select(BuildingKind::Slum, &catalog, engine.rng_mut());
        assert_eq!(placement.kind(), Some(BuildingKind::Slum));

        placement.select(BuildingKind::Slum, &catalog, engine.rng_mut());
        assert_eq!(placement, Placement::Idle);
    }

    #[test]
    fn test_preview_sits_on_street_under_cursor() {
        let (mut engine, config, catalog) = setup();
        let mut placement = Placement::Idle;
        placement.select(BuildingKind::House, &catalog, engine.rng_mut());

        let mouse = MouseState { x: 300.0, y: 100.0, ..Default::default() };
        placement.update(&mut engine, &config, &mouse, true);

        let (building, state) = placement.preview().unwrap();
        assert_eq!(building.x(), 276.0);
        assert_eq!(building.y(), config.screen.ground_level - 32.0 + 16.0);
        assert_eq!(state, PreviewState::Valid);
    }

    #[test]
    fn test_click_places_and_exits_preview() {
        let (mut engine, config, catalog) = setup();
        let mut placement = Placement::Idle;
        placement.select(BuildingKind::House, &catalog, engine.rng_mut());

        placement.update(&mut engine, &config, &click(300.0, 200.0), true);

        assert_eq!(placement, Placement::Idle);
        assert_eq!(engine.count_kind(EntityKind::Building), 1);
        assert_eq!(engine.population_max(), 1);
        assert_eq!(engine.dosh(), config.starting_dosh - 1.0);
    }

    #[test]
    fn test_click_below_band_is_ignored() {
        let (mut engine, config, catalog) = setup();
        let mut placement = Placement::Idle;
        placement.select(BuildingKind::House, &catalog, engine.rng_mut());

        let y = config.screen.ground_level + PLACEMENT_BAND + 1.0;
        placement.update(&mut engine, &config, &click(300.0, y), true);

        assert!(placement.is_previewing());
        assert_eq!(engine.count_kind(EntityKind::Building), 0);
        assert_eq!(
            placement.commit(&mut engine, &config, &click(300.0, y)),
            Err(PlacementError::OutsideBand)
        );
    }

    #[test]
    fn test_obstruction_wins_over_cost() {
        let (mut engine, config, catalog) = setup();
        let mut placement = Placement::Idle;

        placement.select(BuildingKind::House, &catalog, engine.rng_mut());
        placement.update(&mut engine, &config, &click(300.0, 200.0), true);

        engine.economy.dosh = 0.0;
        placement.select(BuildingKind::House, &catalog, engine.rng_mut());
        let hover = MouseState { x: 310.0, y: 200.0, ..Default::default() };
        placement.update(&mut engine, &config, &hover, true);
        assert_eq!(placement.preview().map(|(_, s)| s), Some(PreviewState::Obstructed));

        let hover = MouseState { x: 600.0, y: 200.0, ..Default::default() };
        placement.update(&mut engine, &config, &hover, true);
        assert_eq!(placement.preview().map(|(_, s)| s), Some(PreviewState::Unaffordable));
    }

    #[test]
    fn test_rejected_click_keeps_preview_and_funds() {
        let (mut engine, config, catalog) = setup();
        engine.economy.dosh = 50.0;
        let mut placement = Placement::Idle;
        placement.select(BuildingKind::Apartment, &catalog, engine.rng_mut());

        placement.update(&mut engine, &config, &click(300.0, 200.0), true);

        assert_eq!(placement.kind(), Some(BuildingKind::Apartment));
        assert_eq!(engine.dosh(), 50.0);
        assert!(engine.entities.is_empty());
    }

    #[test]
    fn test_right_click_cancels() {
        let (mut engine, config, catalog) = setup();
        let mut placement = Placement::Idle;
        placement.select(BuildingKind::Church, &catalog, engine.rng_mut());

        let mouse = MouseState { x: 10.0, y: 10.0, right_down: true, right_pressed: true, ..Default::default() };
        placement.update(&mut engine, &config, &mouse, true);

        assert_eq!(placement, Placement::Idle);
        assert_eq!(engine.events.sounds.iter().copied().collect::<Vec<_>>(), vec![SoundCue::Cancel]);
    }

    #[test]
    fn test_button_click_frame_does_not_place() {
        let (mut engine, config, catalog) = setup();
        let mut placement = Placement::Idle;
        placement.select(BuildingKind::House, &catalog, engine.rng_mut());

        placement.update(&mut engine, &config, &click(300.0, 200.0), false);
        assert!(placement.is_previewing());
        assert!(engine.entities.is_empty());
    }
}
