//! Pixelopolis: a tiny pixel-art city builder
//!
//! Place houses, slums, apartments and churches along one street. Taxis
//! bring citizens while there is housing for them, citizens wander and drop
//! coins, and the treasury grows with the population. Day turns to night,
//! and it never stops raining.

mod asset;
mod config;
mod game;
mod menu;
mod overlay;
mod sprite;
mod ui;

use std::path::Path;

use anyhow::Context;
use macroquad::prelude::*;

use asset::{Graphics, MusicTrack, SoundBank};
use config::{GameConfig, Screen, Settings, SETTINGS_PATH};
use game::{BuildingCatalog, Engine, Entity, GroundStrip, Rain, Taxi, BUILDINGS_DIR};
use menu::MenuChoice;
use overlay::Overlay;
use ui::{FrameInput, RAIN_DAY};

fn window_conf() -> Conf {
    Conf {
        window_title: "Pixelopolis".to_owned(),
        window_width: 1280,
        window_height: 720,
        high_dpi: false,
        #[cfg(not(target_arch = "wasm32"))]
        fullscreen: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let settings = Settings::load(Path::new(SETTINGS_PATH)).context("loading settings")?;

    // Let the window settle into its fullscreen size before measuring it
    next_frame().await;
    let screen = Screen::new(screen_width(), screen_height());
    let config = GameConfig::new(settings, screen).context("invalid settings")?;
    log::info!("Screen {}x{}, ground at y={}", screen.width, screen.height, screen.ground_level);

    let gfx = Graphics::load().await.context("loading sprite sheets")?;
    let catalog = BuildingCatalog::load(Path::new(BUILDINGS_DIR)).context("loading building templates")?;
    let sounds = SoundBank::load().await;

    loop {
        match menu::run_menu(&config, &sounds).await {
            MenuChoice::Quit => break,
            MenuChoice::Start => play(&config, &gfx, catalog.clone(), &sounds).await,
        }
    }

    log::info!("Bye");
    Ok(())
}

/// One game session, until the exit key sends us back to the menu
async fn play(config: &GameConfig, gfx: &Graphics, catalog: BuildingCatalog, sounds: &SoundBank) {
    let mut engine = Engine::new(config);
    engine.spawn(Entity::Taxi(Taxi::new(&config.screen)));
    engine.spawn(Entity::Rain(Rain::new(RAIN_DAY)));
    let ground = GroundStrip::new(&config.screen, engine.rng_mut());
    let mut overlay = Overlay::new(config, catalog);

    sounds.start_music(MusicTrack::Rain);
    if config.music {
        sounds.start_music(MusicTrack::Game);
    }
    log::info!("Game started with ${:.2}", engine.dosh());

    let started_at = get_time();
    loop {
        let frame_start = get_time();
        if is_key_pressed(config.keys.exit) {
            // Let the key press expire before the menu polls it
            next_frame().await;
            break;
        }
        let input = FrameInput::poll(&config.keys, started_at);

        clear_background(engine.light.color());
        ground.draw(gfx, engine.light.is_night());
        engine.draw(gfx);
        engine.update(config, &input);
        overlay.draw(&engine, gfx, config, &input);
        overlay.update(&mut engine, config, &input);

        for cue in engine.events.sounds.drain() {
            sounds.play(cue);
        }
        for placed in engine.events.placed.drain() {
            log::debug!("{:?} went up at x={} for ${:.2}", placed.kind, placed.x, placed.cost);
        }

        limit_frame_rate(frame_start, config.frame_time());
        next_frame().await;
    }

    sounds.stop_music(MusicTrack::Game);
    sounds.stop_music(MusicTrack::Rain);
    log::info!(
        "Game over: population {} / {}, ${:.2}",
        engine.population(),
        engine.population_max(),
        engine.dosh()
    );
}

/// Hold the frame until `target_frame_time` has passed since `frame_start`
fn limit_frame_rate(frame_start: f64, target_frame_time: f64) {
    if get_time() - frame_start >= target_frame_time {
        return;
    }

    // Native: use sleep for bulk, then spin-wait for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
    }
    while get_time() - frame_start < target_frame_time {
        std::hint::spin_loop();
    }
}
