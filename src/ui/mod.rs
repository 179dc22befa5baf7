//! Immediate-mode UI helpers for the HUD and menus
//!
//! Design principles:
//! - Immediate mode (no retained widget state, rebuilt each frame)
//! - Simple rectangle-based layout
//! - Macroquad integration for rendering
//! - Input is captured once per frame into plain data ([`FrameInput`])

mod rect;
mod input;
mod theme;
mod widgets;

pub use rect::*;
pub use input::*;
pub use theme::*;
pub use widgets::*;
