//! Day/night light cycle
//!
//! A counter runs 0..=2000 and wraps. The phase advances by pi/400 only
//! during two windows (counter <= 200 and 1000..=1200) and snaps back to 0
//! once it passes pi; the sky color follows `sin(phase)`. Counters above
//! 1000 are night.

use std::f64::consts::PI;

use macroquad::prelude::Color;

pub const CYCLE_LENGTH: u32 = 2000;
pub const PHASE_STEP: f64 = PI / 400.0;
pub const DAWN_END: u32 = 200;
pub const DUSK_START: u32 = 1000;
pub const DUSK_END: u32 = 1200;

/// Sky before the first tick
const INITIAL_SKY: Color = Color::new(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0, 1.0);

#[derive(Debug, Clone)]
pub struct LightCycle {
    counter: u32,
    phase: f64,
    color: Color,
}

impl LightCycle {
    pub fn new() -> Self {
        Self {
            counter: 0,
            phase: 0.0,
            color: INITIAL_SKY,
        }
    }

    pub fn advance(&mut self) {
        self.counter += 1;
        if self.counter > CYCLE_LENGTH {
            self.counter = 0;
        }

        if self.counter <= DAWN_END || (DUSK_START..=DUSK_END).contains(&self.counter) {
            self.phase += PHASE_STEP;
        }
        if self.phase > PI {
            self.phase = 0.0;
        }

        self.color = sky_color(self.phase);
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    #[cfg(test)]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Background clear color
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_night(&self) -> bool {
        self.counter > DUSK_START
    }
}

impl Default for LightCycle {
    fn default() -> Self {
        Self::new()
    }
}

/// 8-bit channels: (49 + 191s, 52 + 187s, 49 + 191s, 200 + 55s)
fn sky_color(phase: f64) -> Color {
    let s = phase.sin();
    Color::from_rgba(
        (49.0 + 191.0 * s) as u8,
        (52.0 + 187.0 * s) as u8,
        (49.0 + 191.0 * s) as u8,
        (200.0 + 55.0 * s) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_zero_is_dark() {
        let c = sky_color(0.0);
        assert_eq!(
            [c.r, c.g, c.b, c.a].map(|v| (v * 255.0).round() as u8),
            [49, 52, 49, 200]
        );
    }

    #[test]
    fn test_first_tick_steps_phase() {
        let mut light = LightCycle::new();
        light.advance();
        assert_eq!(light.counter(), 1);
        assert!((light.phase() - PHASE_STEP).abs() < 1e-12);
        assert!(!light.is_night());
    }

    #[test]
    fn test_phase_holds_outside_windows() {
        let mut light = LightCycle::new();
        for _ in 0..DAWN_END {
            light.advance();
        }
        let midday = light.phase();
        assert!((midday - PI / 2.0).abs() < 1e-9);

        for _ in DAWN_END..DUSK_START - 1 {
            light.advance();
        }
        assert_eq!(light.phase(), midday);
    }

    #[test]
    fn test_phase_never_exceeds_pi_and_counter_wraps() {
        let mut light = LightCycle::new();
        let mut wrapped = false;
        for _ in 0..(CYCLE_LENGTH * 3) {
            light.advance();
            assert!(light.phase() <= PI);
            assert!(light.counter() <= CYCLE_LENGTH);
            if light.counter() == 0 {
                wrapped = true;
            }
        }
        assert!(wrapped);
    }

    #[test]
    fn test_night_follows_counter() {
        let mut light = LightCycle::new();
        for _ in 0..DUSK_START {
            light.advance();
        }
        assert!(!light.is_night());
        light.advance();
        assert!(light.is_night());
    }
}
