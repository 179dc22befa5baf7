//! Buildings and their decorations
//!
//! A building is a stamp on the city palette plus a cost and a population
//! yield. Every tick a building with fewer than [`MAX_DECORATIONS`]
//! decorations gets a new one: a random ornament brush at a random cell
//! inside the building's footprint. Buildings may also carry extra
//! per-tick effects, applied in order after that.

use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};

use macroquad::prelude::{Color, WHITE};
use rand::rngs::StdRng;
use rand::Rng;

use super::{Simulated, TickContext};
use crate::asset::tiled::load_stamp;
use crate::asset::{AssetError, Graphics};
use crate::sprite::Stamp;
use crate::ui::Rect;

/// Directory holding the Tiled exports for the multi-storey buildings
pub const BUILDINGS_DIR: &str = "assets/buildings/slum";

/// Decorations a building collects before it stops
pub const MAX_DECORATIONS: usize = 3;

/// Ornament brushes 139..=143 on the city palette
const DECORATION_BRUSH: usize = 139;
const DECORATION_VARIANTS: usize = 5;

const CELL: f32 = 16.0;

// Tiled exports under BUILDINGS_DIR; houses are generated instead
const SLUM_MAP: &str = "2.json";
const APARTMENT_MAP: &str = "1.json";
const CHURCH_MAP: &str = "church.json";

static NEXT_BUILDING_ID: AtomicU32 = AtomicU32::new(1);

/// Stable identity of a building, used by decorations to name their owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuildingId(u32);

impl BuildingId {
    fn next() -> Self {
        Self(NEXT_BUILDING_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// What can be built from the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildingKind {
    House,
    Slum,
    Apartment,
    Church,
}

impl BuildingKind {
    pub const ALL: [BuildingKind; 4] = [
        BuildingKind::House,
        BuildingKind::Slum,
        BuildingKind::Apartment,
        BuildingKind::Church,
    ];

    pub fn cost(&self) -> f64 {
        match self {
            BuildingKind::House => 1.0,
            BuildingKind::Slum => 10.0,
            BuildingKind::Apartment => 100.0,
            BuildingKind::Church => 300.0,
        }
    }

    /// Housing capacity added when placed
    pub fn population(&self) -> usize {
        match self {
            BuildingKind::House => 1,
            BuildingKind::Slum => 6,
            BuildingKind::Apartment => 12,
            BuildingKind::Church => 0,
        }
    }

    /// Build button caption
    pub fn label(&self) -> &'static str {
        match self {
            BuildingKind::House => "$1 - house",
            BuildingKind::Slum => "$10 - slum",
            BuildingKind::Apartment => "$100 - apt",
            BuildingKind::Church => "$300 - church",
        }
    }

    fn effects(&self) -> Vec<BuildingEffect> {
        match self {
            BuildingKind::House => Vec::new(),
            _ => vec![BuildingEffect::Decorate],
        }
    }
}

/// Extra per-tick behavior attached to a building
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingEffect {
    /// Keep adding ornaments until the building is saturated
    Decorate,
}

impl BuildingEffect {
    fn apply(&self, building: &mut Building, rng: &mut StdRng) {
        match self {
            BuildingEffect::Decorate => {
                if building.decorations.len() < MAX_DECORATIONS {
                    building.decorate(rng);
                }
            }
        }
    }
}

/// A single ornament brush drawn on top of a building
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    pub attached_to: BuildingId,
    pub stamp: Stamp,
    pub removed: bool,
}

impl Simulated for Decoration {
    // Decorations don't do anything on their own yet; their owner drops them
    // once `removed` is set.
    fn update(&mut self, _ctx: &mut TickContext) {}

    fn draw(&self, gfx: &Graphics) {
        self.stamp.draw(&gfx.city, WHITE);
    }

    fn hitbox(&self) -> Rect {
        self.stamp.hitbox()
    }

    fn can_reap(&self) -> bool {
        self.removed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub id: BuildingId,
    pub kind: BuildingKind,
    pub cost: f64,
    /// Housing capacity this building adds
    pub population: usize,
    pub stamp: Stamp,
    pub decorations: Vec<Decoration>,
    pub effects: Vec<BuildingEffect>,
    /// Demolished; reaped at the end of the tick
    pub deleted: bool,
}

impl Building {
    pub fn new(kind: BuildingKind, stamp: Stamp) -> Self {
        Self {
            id: BuildingId::next(),
            kind,
            cost: kind.cost(),
            population: kind.population(),
            stamp,
            decorations: Vec::new(),
            effects: kind.effects(),
            deleted: false,
        }
    }

    pub fn x(&self) -> f32 {
        self.stamp.x
    }

    pub fn y(&self) -> f32 {
        self.stamp.y
    }

    pub fn width(&self) -> f32 {
        self.stamp.width
    }

    pub fn height(&self) -> f32 {
        self.stamp.height
    }

    /// Move the building; decorations travel with it
    pub fn set_position(&mut self, x: f32, y: f32) {
        let dx = x - self.stamp.x;
        let dy = y - self.stamp.y;
        self.stamp.set_position(x, y);
        for decoration in &mut self.decorations {
            decoration.stamp.set_position(decoration.stamp.x + dx, decoration.stamp.y + dy);
        }
    }

    /// Add one ornament on a random 16px cell of the footprint
    pub fn decorate(&mut self, rng: &mut StdRng) {
        let brush = DECORATION_BRUSH + rng.gen_range(0..DECORATION_VARIANTS);
        let x = CELL * random_cell(rng, self.stamp.width);
        let y = CELL * random_cell(rng, self.stamp.height);

        let mut stamp = Stamp::new(CELL, CELL).with(brush, 0.0, 0.0);
        stamp.set_position(self.stamp.x + x, self.stamp.y + y);

        self.decorations.push(Decoration {
            attached_to: self.id,
            stamp,
            removed: false,
        });
    }

    /// Draw with a color tint (placement preview)
    pub fn draw_tinted(&self, gfx: &Graphics, tint: Color) {
        self.stamp.draw(&gfx.city, tint);
        for decoration in &self.decorations {
            decoration.stamp.draw(&gfx.city, tint);
        }
    }
}

/// Random cell index along an axis of `extent` pixels (0 for sub-cell sizes)
fn random_cell(rng: &mut StdRng, extent: f32) -> f32 {
    let cells = (extent / CELL) as u32;
    if cells == 0 {
        0.0
    } else {
        rng.gen_range(0..cells) as f32
    }
}

impl Simulated for Building {
    fn update(&mut self, ctx: &mut TickContext) {
        self.decorations.retain(|d| !d.removed);

        if self.decorations.len() < MAX_DECORATIONS {
            self.decorate(ctx.rng);
        }

        let effects = self.effects.clone();
        for effect in &effects {
            effect.apply(self, ctx.rng);
        }

        for decoration in &mut self.decorations {
            decoration.update(ctx);
        }
    }

    fn draw(&self, gfx: &Graphics) {
        self.draw_tinted(gfx, WHITE);
    }

    fn hitbox(&self) -> Rect {
        self.stamp.hitbox()
    }

    fn can_reap(&self) -> bool {
        self.deleted
    }
}

/// Generate a two-storey house: a 3x2 shell with a random door and, one
/// time in three, a window in a different column.
pub fn house_stamp(rng: &mut StdRng) -> Stamp {
    let door = rng.gen_range(0..3);
    let mut window = rng.gen_range(0..3);
    while window == door {
        window = rng.gen_range(0..3);
    }

    let mut stamp = Stamp::new(48.0, 32.0)
        .with(75, 0.0, 0.0)
        .with(107, 0.0, 16.0)
        .with(77, 16.0, 0.0)
        .with(109, 16.0, 16.0)
        .with(79, 32.0, 0.0)
        .with(111, 32.0, 16.0)
        .with(103, door as f32 * CELL, 16.0);
    if rng.gen_range(0..3) == 0 {
        stamp.push(20, window as f32 * CELL, 16.0);
    }
    stamp
}

/// Building templates, loaded once at startup
#[derive(Debug, Clone)]
pub struct BuildingCatalog {
    slum: Stamp,
    apartment: Stamp,
    church: Stamp,
}

impl BuildingCatalog {
    /// Load every Tiled template from `dir`. A missing or broken file is fatal.
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let catalog = Self {
            slum: load_stamp(&dir.join(SLUM_MAP))?,
            apartment: load_stamp(&dir.join(APARTMENT_MAP))?,
            church: load_stamp(&dir.join(CHURCH_MAP))?,
        };
        log::info!("Loaded building templates from {}", dir.display());
        Ok(catalog)
    }

    /// A fresh, unplaced building of the given kind
    pub fn instantiate(&self, kind: BuildingKind, rng: &mut StdRng) -> Building {
        let stamp = match kind {
            BuildingKind::House => house_stamp(rng),
            BuildingKind::Slum => self.slum.clone(),
            BuildingKind::Apartment => self.apartment.clone(),
            BuildingKind::Church => self.church.clone(),
        };
        Building::new(kind, stamp)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::{Economy, Events};
    use crate::sprite::DrawCoord;
    use crate::ui::FrameInput;
    use rand::SeedableRng;

    fn catalog_dir() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(BUILDINGS_DIR)
    }

    pub(crate) fn test_catalog() -> BuildingCatalog {
        BuildingCatalog::load(&catalog_dir()).unwrap()
    }

    fn tick(building: &mut Building, rng: &mut StdRng) {
        let config = GameConfig::default();
        let input = FrameInput::default();
        let mut economy = Economy::new(0.0, 1.0);
        let mut events = Events::new();
        let mut spawned = Vec::new();
        let mut ctx = TickContext {
            config: &config,
            input: &input,
            rng,
            economy: &mut economy,
            events: &mut events,
            spawned: &mut spawned,
        };
        building.update(&mut ctx);
        assert!(spawned.is_empty());
    }

    #[test]
    fn test_house_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let stamp = house_stamp(&mut rng);
            assert_eq!((stamp.width, stamp.height), (48.0, 32.0));
            assert_eq!(&stamp.coords[..6], &[
                DrawCoord::new(75, 0.0, 0.0),
                DrawCoord::new(107, 0.0, 16.0),
                DrawCoord::new(77, 16.0, 0.0),
                DrawCoord::new(109, 16.0, 16.0),
                DrawCoord::new(79, 32.0, 0.0),
                DrawCoord::new(111, 32.0, 16.0),
            ]);

            let door = stamp.coords[6];
            assert_eq!(door.brush, 103);
            if let Some(window) = stamp.coords.get(7) {
                assert_eq!(window.brush, 20);
                assert_ne!(window.x_offset, door.x_offset);
            }
        }
    }

    #[test]
    fn test_kind_table() {
        assert_eq!(BuildingKind::House.cost(), 1.0);
        assert_eq!(BuildingKind::Slum.population(), 6);
        assert_eq!(BuildingKind::Apartment.cost(), 100.0);
        assert_eq!(BuildingKind::Church.population(), 0);
    }

    #[test]
    fn test_apartment_template_matches_tile_map() {
        let catalog = test_catalog();
        let mut rng = StdRng::seed_from_u64(0);
        let apartment = catalog.instantiate(BuildingKind::Apartment, &mut rng);
        let coords = &apartment.stamp.coords;
        assert_eq!(coords[0], DrawCoord::new(75, 0.0, 0.0));
        assert_eq!(coords[1], DrawCoord::new(77, 16.0, 0.0));
        assert_eq!(coords[2], DrawCoord::new(77, 32.0, 0.0));
        assert_eq!(coords[8], DrawCoord::new(107, 0.0, 16.0));
    }

    #[test]
    fn test_missing_catalog_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(BuildingCatalog::load(dir.path()).is_err());
    }

    #[test]
    fn test_decorations_saturate_at_three() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut building = Building::new(BuildingKind::Slum, Stamp::new(48.0, 64.0));
        for _ in 0..10 {
            tick(&mut building, &mut rng);
            assert!(building.decorations.len() <= MAX_DECORATIONS);
        }
        assert_eq!(building.decorations.len(), MAX_DECORATIONS);
    }

    #[test]
    fn test_plain_house_decorates_one_per_tick() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut building = Building::new(BuildingKind::House, house_stamp(&mut rng));
        tick(&mut building, &mut rng);
        assert_eq!(building.decorations.len(), 1);
    }

    #[test]
    fn test_decorate_effect_adds_a_second_ornament_per_tick() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut building = Building::new(BuildingKind::Slum, Stamp::new(64.0, 48.0));
        tick(&mut building, &mut rng);
        assert_eq!(building.decorations.len(), 2);

        // The effect stops at the same cap as the base rule
        tick(&mut building, &mut rng);
        assert_eq!(building.decorations.len(), MAX_DECORATIONS);
    }

    #[test]
    fn test_decorations_land_inside_footprint() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut building = Building::new(BuildingKind::House, Stamp::new(48.0, 32.0));
        building.set_position(100.0, 200.0);
        for _ in 0..200 {
            building.decorations.clear();
            building.decorate(&mut rng);
            let d = &building.decorations[0];
            assert_eq!(d.attached_to, building.id);
            assert!((DECORATION_BRUSH..DECORATION_BRUSH + DECORATION_VARIANTS).contains(&d.stamp.coords[0].brush));
            let hitbox = d.hitbox();
            assert!(hitbox.x >= 100.0 && hitbox.right() <= 148.0);
            assert!(hitbox.y >= 200.0 && hitbox.bottom() <= 232.0);
        }
    }

    #[test]
    fn test_removed_decorations_are_dropped() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut building = Building::new(BuildingKind::House, Stamp::new(48.0, 32.0));
        for _ in 0..3 {
            building.decorate(&mut rng);
        }
        building.decorations[1].removed = true;
        let kept = building.decorations[0].clone();
        // Below the cap again, so one fresh decoration replaces the removed one
        tick(&mut building, &mut rng);
        assert_eq!(building.decorations.len(), 3);
        assert_eq!(building.decorations[0], kept);
    }

    #[test]
    fn test_moving_building_moves_decorations() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut building = Building::new(BuildingKind::House, Stamp::new(48.0, 32.0));
        building.decorate(&mut rng);
        let before = building.decorations[0].stamp.x;
        building.set_position(50.0, 0.0);
        assert_eq!(building.decorations[0].stamp.x, before + 50.0);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Building::new(BuildingKind::House, Stamp::default());
        let b = Building::new(BuildingKind::House, Stamp::default());
        assert_ne!(a.id, b.id);
    }
}
