//! Per-frame input snapshot
//!
//! Input is sampled once at the top of the frame and handed to the
//! simulation as plain data, so entity and overlay logic never reach into
//! macroquad's global input state (and stay testable without a window).

use macroquad::prelude::*;
use super::Rect;
use crate::config::Keybindings;

/// Mouse button state
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub right_down: bool,
    pub left_pressed: bool,  // Just pressed this frame
    pub right_pressed: bool, // Just pressed this frame
}

impl MouseState {
    /// Sample the current mouse from macroquad
    pub fn poll() -> Self {
        let (x, y) = mouse_position();
        Self {
            x,
            y,
            left_down: is_mouse_button_down(MouseButton::Left),
            right_down: is_mouse_button_down(MouseButton::Right),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            right_pressed: is_mouse_button_pressed(MouseButton::Right),
        }
    }

    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse is holding the left button inside a rect
    pub fn clicking(&self, rect: &Rect) -> bool {
        self.left_down && rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

/// Everything the simulation reads from the outside world during one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub mouse: MouseState,
    /// The "continue" key was pressed this frame (dismisses dialogs)
    pub acknowledge_pressed: bool,
    /// Seconds since the game loop started
    pub elapsed: f64,
    /// Frames per second reported by macroquad (HUD only)
    pub fps: i32,
}

impl FrameInput {
    /// Sample mouse, keys and clock for this frame
    pub fn poll(keys: &Keybindings, started_at: f64) -> Self {
        Self {
            mouse: MouseState::poll(),
            acknowledge_pressed: is_key_pressed(keys.acknowledge),
            elapsed: get_time() - started_at,
            fps: get_fps(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clicked_requires_press_edge() {
        let rect = Rect::new(10.0, 10.0, 80.0, 40.0);
        let held = MouseState { x: 20.0, y: 20.0, left_down: true, ..Default::default() };
        assert!(held.clicking(&rect));
        assert!(!held.clicked(&rect));

        let pressed = MouseState { left_pressed: true, ..held };
        assert!(pressed.clicked(&rect));
    }
}
