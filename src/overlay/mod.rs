//! In-game overlay
//!
//! The build panel along the bottom of the screen, the building preview,
//! the HUD counters and the timed dialogs. The overlay is the only thing
//! besides the simulation itself that changes the engine: it places
//! buildings (spending dosh) and halts the game while a dialog is up.

mod dialog;
mod placement;

pub use dialog::DialogQueue;
pub use placement::Placement;

use macroquad::prelude::*;

use crate::asset::Graphics;
use crate::config::GameConfig;
use crate::game::{BuildingCatalog, BuildingKind, Engine, SoundCue};
use crate::ui::{draw_dialog, draw_text_button, FrameInput, Rect, FONT_SIZE_HUD, FPS_COLOR, PANEL_COLOR, TEXT_COLOR};

/// Height of the build panel
pub const PANEL_HEIGHT: f32 = 150.0;

const BUTTON_W: f32 = 80.0;
const BUTTON_H: f32 = 40.0;

/// Widest counter line we plan room for
const HUD_TEMPLATE: &str = "Population: 100000 / 100000";
const FPS_TEMPLATE: &str = "FPS: 000  ";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildButton {
    pub kind: BuildingKind,
    pub rect: Rect,
}

/// Two columns of two, anchored to the bottom-left corner
fn layout_buttons(screen_h: f32) -> Vec<BuildButton> {
    let top = screen_h - 130.0;
    let bottom = screen_h - 80.0;
    [
        (BuildingKind::House, 10.0, top),
        (BuildingKind::Slum, 10.0, bottom),
        (BuildingKind::Apartment, 100.0, top),
        (BuildingKind::Church, 100.0, bottom),
    ]
    .into_iter()
    .map(|(kind, x, y)| BuildButton { kind, rect: Rect::new(x, y, BUTTON_W, BUTTON_H) })
    .collect()
}

pub struct Overlay {
    panel: Rect,
    buttons: Vec<BuildButton>,
    placement: Placement,
    dialogs: DialogQueue,
    catalog: BuildingCatalog,
}

impl Overlay {
    pub fn new(config: &GameConfig, catalog: BuildingCatalog) -> Self {
        let screen = Rect::new(0.0, 0.0, config.screen.width, config.screen.height);
        Self {
            panel: screen.slice_bottom(PANEL_HEIGHT),
            buttons: layout_buttons(config.screen.height),
            placement: Placement::Idle,
            dialogs: DialogQueue::new(&config.dialogs),
            catalog,
        }
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn buttons(&self) -> &[BuildButton] {
        &self.buttons
    }

    /// Handle this frame's input: build buttons, placement, dialogs
    pub fn update(&mut self, engine: &mut Engine, config: &GameConfig, input: &FrameInput) {
        let mouse = &input.mouse;

        let mut clicked_button = false;
        for button in &self.buttons {
            if mouse.clicked(&button.rect) {
                clicked_button = true;
                engine.events.sounds.send(SoundCue::Select);
                self.placement.select(button.kind, &self.catalog, engine.rng_mut());
            }
        }

        self.placement.update(engine, config, mouse, !clicked_button);
        engine.halted = self.dialogs.update(input, &mut engine.events);
    }

    pub fn draw(&self, engine: &Engine, gfx: &Graphics, config: &GameConfig, input: &FrameInput) {
        let screen = &config.screen;
        draw_rectangle(self.panel.x, self.panel.y, self.panel.w, self.panel.h, PANEL_COLOR);
        for button in &self.buttons {
            draw_text_button(button.rect, button.kind.label(), &input.mouse);
        }

        let hud_x = screen.width - measure_text(HUD_TEMPLATE, None, FONT_SIZE_HUD as u16, 1.0).width;
        let hud_y = screen.height - (screen.height / 12.0).floor();
        draw_text(
            &format!("Population: {} / {}", engine.population(), engine.population_max()),
            hud_x,
            hud_y,
            FONT_SIZE_HUD,
            TEXT_COLOR,
        );
        draw_text(&format!("Dosh: ${:.2}", engine.dosh()), hud_x, hud_y - FONT_SIZE_HUD, FONT_SIZE_HUD, TEXT_COLOR);

        if let Some((building, state)) = self.placement.preview() {
            building.draw_tinted(gfx, state.tint());
        }

        let fps_x = screen.width - measure_text(FPS_TEMPLATE, None, FONT_SIZE_HUD as u16, 1.0).width;
        draw_text(&format!("FPS: {}", input.fps), fps_x, 20.0 + FONT_SIZE_HUD, FONT_SIZE_HUD, FPS_COLOR);

        if let Some(dialog) = self.dialogs.active(input.elapsed) {
            draw_dialog(&dialog.text, screen.width, screen.height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DialogSettings;
    use crate::game::building::tests::test_catalog;
    use crate::game::EntityKind;
    use crate::ui::MouseState;

    fn press(rect: Rect) -> FrameInput {
        FrameInput {
            mouse: MouseState {
                x: rect.center_x(),
                y: rect.center_y(),
                left_down: true,
                left_pressed: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn button(overlay: &Overlay, kind: BuildingKind) -> Rect {
        overlay.buttons().iter().find(|b| b.kind == kind).map(|b| b.rect).unwrap()
    }

    #[test]
    fn test_button_layout() {
        let config = GameConfig::default();
        let overlay = Overlay::new(&config, test_catalog());
        assert_eq!(button(&overlay, BuildingKind::House), Rect::new(10.0, 470.0, 80.0, 40.0));
        assert_eq!(button(&overlay, BuildingKind::Church), Rect::new(100.0, 520.0, 80.0, 40.0));
        assert_eq!(overlay.panel, Rect::new(0.0, 450.0, 800.0, 150.0));
    }

    #[test]
    fn test_button_press_previews_without_placing() {
        let config = GameConfig::default();
        let mut engine = Engine::new(&config);
        let mut overlay = Overlay::new(&config, test_catalog());

        let input = press(button(&overlay, BuildingKind::House));
        overlay.update(&mut engine, &config, &input);

        assert_eq!(overlay.placement().kind(), Some(BuildingKind::House));
        assert_eq!(engine.count_kind(EntityKind::Building), 0);
        assert_eq!(engine.events.sounds.iter().copied().collect::<Vec<_>>(), vec![SoundCue::Select]);

        // Same button again puts the preview away
        overlay.update(&mut engine, &config, &input);
        assert!(!overlay.placement().is_previewing());
    }

    #[test]
    fn test_preview_then_click_builds() {
        let config = GameConfig::default();
        let mut engine = Engine::new(&config);
        let mut overlay = Overlay::new(&config, test_catalog());

        overlay.update(&mut engine, &config, &press(button(&overlay, BuildingKind::Slum)));
        overlay.update(&mut engine, &config, &press(Rect::new(400.0, 200.0, 0.0, 0.0)));

        assert_eq!(engine.count_kind(EntityKind::Building), 1);
        assert_eq!(engine.population_max(), 6);
        assert_eq!(engine.dosh(), config.starting_dosh - 10.0);
    }

    #[test]
    fn test_dialog_halts_engine() {
        let mut config = GameConfig::default();
        config.dialogs = vec![DialogSettings { after_secs: 1.0, text: "Hello".to_string() }];
        let mut engine = Engine::new(&config);
        let mut overlay = Overlay::new(&config, test_catalog());

        let mut input = FrameInput { elapsed: 2.0, ..Default::default() };
        overlay.update(&mut engine, &config, &input);
        assert!(engine.halted);

        input.acknowledge_pressed = true;
        overlay.update(&mut engine, &config, &input);
        assert!(!engine.halted);
    }
}
