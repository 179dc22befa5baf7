//! Game configuration
//!
//! Settings are read once at startup from `assets/config.ron` and combined
//! with the window size into an immutable [`GameConfig`] that is passed by
//! reference to the engine, the overlay and the menu. Nothing in the game
//! reads process-wide mutable settings.
//!
//! A missing settings file falls back to defaults; a malformed one is an
//! error (the player asked for something we can't honor).

use std::fs;
use std::path::{Path, PathBuf};

use macroquad::prelude::KeyCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default location of the settings file, relative to the working directory
pub const SETTINGS_PATH: &str = "assets/config.ron";

/// Error type for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("unknown key '{name}' bound to {binding}")]
    UnknownKey { binding: &'static str, name: String },
    #[error("invalid setting: {0}")]
    Invalid(String),
}

// =============================================================================
// On-disk settings
// =============================================================================

/// Key names as written in the settings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeySettings {
    /// Dismisses dialogs
    pub acknowledge: String,
    /// Leaves the current screen
    pub exit: String,
}

impl Default for KeySettings {
    fn default() -> Self {
        Self {
            acknowledge: "Space".to_string(),
            exit: "Escape".to_string(),
        }
    }
}

/// A scripted dialog shown a fixed time after the game starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogSettings {
    /// Seconds after the game loop starts
    pub after_secs: f64,
    pub text: String,
}

/// User-editable settings (RON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame cap; the simulation is tuned per tick, so this is also game speed
    pub target_fps: u32,
    /// Play background music
    pub music: bool,
    /// Dosh in the treasury when the game starts
    pub starting_dosh: f64,
    /// Tax multiplier used by the economy accrual
    pub tax: f64,
    /// Fixed RNG seed (reproducible runs); random when absent
    pub rng_seed: Option<u64>,
    pub keys: KeySettings,
    pub dialogs: Vec<DialogSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: 60,
            music: false,
            starting_dosh: 300.0,
            tax: 1.05,
            rng_seed: None,
            keys: KeySettings::default(),
            dialogs: vec![DialogSettings {
                after_secs: 7.0,
                text: "Welcome to Pixelopolis. Construct a slum or hovel to attract new citizens.\nPress space to continue...".to_string(),
            }],
        }
    }
}

impl Settings {
    /// Load settings from a RON file, or defaults if the file doesn't exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

// =============================================================================
// Runtime configuration
// =============================================================================

/// Screen geometry, fixed for the lifetime of a game session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    pub width: f32,
    pub height: f32,
    /// Y coordinate people, coins and the taxi rest on
    pub ground_level: f32,
}

impl Screen {
    /// Ground sits a quarter of the screen up from the bottom
    pub fn new(width: f32, height: f32) -> Self {
        let width = width.floor();
        let height = height.floor();
        Self {
            width,
            height,
            ground_level: height - (height / 4.0).floor(),
        }
    }
}

/// Resolved key bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybindings {
    pub acknowledge: KeyCode,
    pub exit: KeyCode,
}

impl Default for Keybindings {
    fn default() -> Self {
        Self {
            acknowledge: KeyCode::Space,
            exit: KeyCode::Escape,
        }
    }
}

/// Immutable configuration for one run of the game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub screen: Screen,
    pub keys: Keybindings,
    pub target_fps: u32,
    pub music: bool,
    pub starting_dosh: f64,
    pub tax: f64,
    pub rng_seed: Option<u64>,
    pub dialogs: Vec<DialogSettings>,
}

impl GameConfig {
    /// Resolve settings against the actual window size
    pub fn new(settings: Settings, screen: Screen) -> Result<Self, ConfigError> {
        if settings.target_fps == 0 {
            return Err(ConfigError::Invalid("target_fps must be positive".to_string()));
        }
        if settings.starting_dosh < 0.0 || !settings.starting_dosh.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "starting_dosh must be a non-negative number, got {}",
                settings.starting_dosh
            )));
        }
        if settings.tax < 0.0 || !settings.tax.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "tax must be a non-negative number, got {}",
                settings.tax
            )));
        }

        let keys = Keybindings {
            acknowledge: key_from_name(&settings.keys.acknowledge).ok_or_else(|| {
                ConfigError::UnknownKey { binding: "acknowledge", name: settings.keys.acknowledge.clone() }
            })?,
            exit: key_from_name(&settings.keys.exit).ok_or_else(|| ConfigError::UnknownKey {
                binding: "exit",
                name: settings.keys.exit.clone(),
            })?,
        };

        Ok(Self {
            screen,
            keys,
            target_fps: settings.target_fps,
            music: settings.music,
            starting_dosh: settings.starting_dosh,
            tax: settings.tax,
            rng_seed: settings.rng_seed,
            dialogs: settings.dialogs,
        })
    }

    /// Target frame duration in seconds
    pub fn frame_time(&self) -> f64 {
        1.0 / self.target_fps as f64
    }
}

impl Default for GameConfig {
    /// Default settings on an 800x600 screen. Used by tests and as a fallback.
    fn default() -> Self {
        Self {
            screen: Screen::new(800.0, 600.0),
            keys: Keybindings::default(),
            target_fps: 60,
            music: false,
            starting_dosh: 300.0,
            tax: 1.05,
            rng_seed: Some(0),
            dialogs: Vec::new(),
        }
    }
}

/// Map a key name from the settings file to a macroquad key code
pub fn key_from_name(name: &str) -> Option<KeyCode> {
    let key = match name.trim().to_ascii_lowercase().as_str() {
        "space" => KeyCode::Space,
        "escape" | "esc" => KeyCode::Escape,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "a" => KeyCode::A,
        "b" => KeyCode::B,
        "c" => KeyCode::C,
        "d" => KeyCode::D,
        "e" => KeyCode::E,
        "f" => KeyCode::F,
        "g" => KeyCode::G,
        "h" => KeyCode::H,
        "i" => KeyCode::I,
        "j" => KeyCode::J,
        "k" => KeyCode::K,
        "l" => KeyCode::L,
        "m" => KeyCode::M,
        "n" => KeyCode::N,
        "o" => KeyCode::O,
        "p" => KeyCode::P,
        "q" => KeyCode::Q,
        "r" => KeyCode::R,
        "s" => KeyCode::S,
        "t" => KeyCode::T,
        "u" => KeyCode::U,
        "v" => KeyCode::V,
        "w" => KeyCode::W,
        "x" => KeyCode::X,
        "y" => KeyCode::Y,
        "z" => KeyCode::Z,
        _ => return None,
    };
    Some(key)
}
