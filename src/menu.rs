//! Title screen
//!
//! Light rain over a black background, the game title and a Start button.
//! Start hands control back to the host, which runs the game; the exit key
//! quits.

use macroquad::prelude::*;
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;

use crate::asset::{MusicTrack, SoundBank};
use crate::config::GameConfig;
use crate::game::{Rain, SoundCue};
use crate::ui::{draw_text_button, MouseState, Rect, FONT_SIZE_TITLE, MENU_BG, RAIN_MENU, TEXT_COLOR};

const TITLE: &str = "_ Pixelopolis _";

const START_W: f32 = 160.0;
const START_H: f32 = 48.0;

/// What the player picked on the title screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Start,
    Quit,
}

/// Start button, centered horizontally a fifth of the way up from the bottom
pub fn start_button_rect(screen_w: f32, screen_h: f32) -> Rect {
    Rect::new(
        ((screen_w - START_W) / 2.0).floor(),
        (screen_h - screen_h / 5.0 - START_H / 2.0).floor(),
        START_W,
        START_H,
    )
}

/// The exit key only counts once the menu has been on screen for a frame,
/// so the press that left the game doesn't also quit
fn exit_requested(frames_shown: u32, exit_pressed: bool) -> bool {
    frames_shown > 0 && exit_pressed
}

/// Run the title screen until the player starts or quits
pub async fn run_menu(config: &GameConfig, sounds: &SoundBank) -> MenuChoice {
    let screen = config.screen;
    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut rain = Rain::new(RAIN_MENU);
    let start = start_button_rect(screen.width, screen.height);

    if config.music {
        sounds.start_music(MusicTrack::Menu);
    }
    log::info!("Main menu");

    let mut frames_shown = 0u32;
    let choice = loop {
        if exit_requested(frames_shown, is_key_pressed(config.keys.exit)) {
            break MenuChoice::Quit;
        }

        let mouse = MouseState::poll();
        if mouse.clicked(&start) {
            sounds.play(SoundCue::Select);
            break MenuChoice::Start;
        }

        rain.step(&screen, &mut rng);

        clear_background(MENU_BG);
        rain.draw_droplets();

        let title = measure_text(TITLE, None, FONT_SIZE_TITLE as u16, 1.0);
        draw_text(
            TITLE,
            ((screen.width - title.width) / 2.0).round(),
            (screen.height / 3.0).round(),
            FONT_SIZE_TITLE,
            TEXT_COLOR,
        );
        draw_text_button(start, "Start", &mouse);

        frames_shown = frames_shown.saturating_add(1);
        next_frame().await;
    };

    sounds.stop_music(MusicTrack::Menu);
    choice
}
