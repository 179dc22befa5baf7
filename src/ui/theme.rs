//! UI Theme - Shared colors and styling constants
//!
//! Centralized color definitions for the HUD, menus and placement preview.

use macroquad::prelude::Color;

// =============================================================================
// Base UI Colors
// =============================================================================

/// Bottom build panel background
pub const PANEL_COLOR: Color = Color::new(0.31, 0.31, 0.31, 1.0); // ~80, 80, 80

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.96, 0.96, 0.96, 1.0);

/// FPS counter color
pub const FPS_COLOR: Color = Color::new(1.0, 0.8, 0.0, 1.0);

/// Menu background
pub const MENU_BG: Color = Color::new(0.0, 0.0, 0.0, 1.0);

// =============================================================================
// Buttons
// =============================================================================

pub const BUTTON_BG: Color = Color::new(0.79, 0.79, 0.79, 1.0);
pub const BUTTON_HOVER: Color = Color::new(0.79, 0.94, 1.0, 1.0);
pub const BUTTON_PRESSED: Color = Color::new(0.59, 0.91, 1.0, 1.0);
pub const BUTTON_BORDER: Color = Color::new(0.51, 0.51, 0.51, 1.0);
pub const BUTTON_TEXT: Color = Color::new(0.41, 0.41, 0.41, 1.0);

// =============================================================================
// Dialog box
// =============================================================================

pub const DIALOG_BG: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const DIALOG_BORDER: Color = Color::new(1.0, 1.0, 1.0, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

/// HUD text size
pub const FONT_SIZE_HUD: f32 = 18.0;

/// Button label size
pub const FONT_SIZE_BUTTON: f32 = 14.0;

/// Dialog body size
pub const FONT_SIZE_DIALOG: f32 = 32.0;

/// Main menu title size
pub const FONT_SIZE_TITLE: f32 = 64.0;

// =============================================================================
// Placement preview tints
// =============================================================================

/// Placement would succeed
pub const TINT_VALID: Color = Color::new(0.45, 1.0, 0.45, 1.0);

/// Preview overlaps an existing building
pub const TINT_OBSTRUCTED: Color = Color::new(1.0, 0.9, 0.3, 1.0);

/// Not enough dosh for this building
pub const TINT_UNAFFORDABLE: Color = Color::new(1.0, 0.35, 0.35, 1.0);

// =============================================================================
// Weather
// =============================================================================

/// Daytime rain (purple, translucent)
pub const RAIN_DAY: Color = Color::new(57.0 / 255.0, 16.0 / 255.0, 90.0 / 255.0, 200.0 / 255.0);

/// Night rain
pub const RAIN_NIGHT: Color = Color::new(0.96, 0.96, 0.96, 1.0);

/// Rain behind the main menu
pub const RAIN_MENU: Color = Color::new(0.78, 0.78, 0.78, 1.0);

/// Ground strip tint at night
pub const GROUND_NIGHT: Color = Color::new(1.0, 0.92, 0.55, 1.0);
