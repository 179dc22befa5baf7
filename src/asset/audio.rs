//! Sound effects and music
//!
//! Audio is optional: a clip that fails to load is logged and skipped, and
//! the matching cue plays nothing.

use std::collections::HashMap;

use macroquad::audio::{load_sound, play_sound, play_sound_once, stop_sound, PlaySoundParams, Sound};
use crate::game::SoundCue;

const SOUNDS_DIR: &str = "assets/sounds";
const MUSIC_DIR: &str = "assets/music";

/// Looping background tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MusicTrack {
    Menu,
    Game,
    /// Rain ambience, plays under everything in-game
    Rain,
}

impl MusicTrack {
    pub const ALL: [MusicTrack; 3] = [MusicTrack::Menu, MusicTrack::Game, MusicTrack::Rain];

    fn file_name(&self) -> &'static str {
        match self {
            MusicTrack::Menu => "menudrumroll.ogg",
            MusicTrack::Game => "gameloop.ogg",
            MusicTrack::Rain => "rain.ogg",
        }
    }

    fn volume(&self) -> f32 {
        match self {
            MusicTrack::Rain => 0.08,
            _ => 0.5,
        }
    }
}

/// Every clip we managed to load
#[derive(Default)]
pub struct SoundBank {
    cues: HashMap<SoundCue, Sound>,
    music: HashMap<MusicTrack, Sound>,
}

impl SoundBank {
    pub async fn load() -> Self {
        let mut bank = Self::default();

        for cue in SoundCue::ALL {
            let path = format!("{}/{}.wav", SOUNDS_DIR, cue.file_stem());
            match load_sound(&path).await {
                Ok(sound) => {
                    bank.cues.insert(cue, sound);
                }
                Err(e) => log::warn!("Sound {} unavailable: {}", path, e),
            }
        }

        for track in MusicTrack::ALL {
            let path = format!("{}/{}", MUSIC_DIR, track.file_name());
            match load_sound(&path).await {
                Ok(sound) => {
                    bank.music.insert(track, sound);
                }
                Err(e) => log::warn!("Music {} unavailable: {}", path, e),
            }
        }

        log::info!("Loaded {} sounds, {} music tracks", bank.cues.len(), bank.music.len());
        bank
    }

    pub fn play(&self, cue: SoundCue) {
        if let Some(sound) = self.cues.get(&cue) {
            play_sound_once(sound);
        }
    }

    pub fn start_music(&self, track: MusicTrack) {
        if let Some(sound) = self.music.get(&track) {
            play_sound(sound, PlaySoundParams { looped: true, volume: track.volume() });
        }
    }

    pub fn stop_music(&self, track: MusicTrack) {
        if let Some(sound) = self.music.get(&track) {
            stop_sound(sound);
        }
    }
}
