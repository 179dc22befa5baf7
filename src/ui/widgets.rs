//! Basic UI widgets: text buttons and the dialog box

use macroquad::prelude::*;
use super::{Rect, MouseState};
use super::theme::*;

/// Draw a labelled button. Purely visual; clicks are resolved during update
/// against the same rect via [`MouseState::clicked`].
pub fn draw_text_button(rect: Rect, label: &str, mouse: &MouseState) {
    let bg = if mouse.clicking(&rect) {
        BUTTON_PRESSED
    } else if mouse.inside(&rect) {
        BUTTON_HOVER
    } else {
        BUTTON_BG
    };

    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, BUTTON_BORDER);

    let dims = measure_text(label, None, FONT_SIZE_BUTTON as u16, 1.0);
    // Round to integer pixels for crisp rendering
    let text_x = (rect.center_x() - dims.width * 0.5).round();
    let text_y = (rect.center_y() + dims.offset_y * 0.5).round();
    draw_text(label, text_x, text_y, FONT_SIZE_BUTTON, BUTTON_TEXT);
}

/// Wrap text to fit within a given pixel width
/// Returns a vector of lines that fit within max_width
pub fn wrap_text(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    // Explicit newlines always break
    for paragraph in text.split('\n') {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        if words.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in words {
            let test_line = if current_line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current_line, word)
            };

            // Approximate glyph width; measure_text per word is too slow for a per-frame dialog
            let char_width = font_size * 0.5;
            let test_width = test_line.len() as f32 * char_width;

            if test_width <= max_width || current_line.is_empty() {
                current_line = test_line;
            } else {
                lines.push(current_line);
                current_line = word.to_string();
            }
        }
        lines.push(current_line);
    }

    lines
}

/// Draw a dialog box across the top fifth of the screen
pub fn draw_dialog(text: &str, screen_w: f32, screen_h: f32) {
    let rect = Rect::new(0.0, 0.0, screen_w, screen_h / 5.0);
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, DIALOG_BG);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 4.0, DIALOG_BORDER);

    let body = rect.pad(20.0);
    let line_height = FONT_SIZE_DIALOG * 1.2;
    let mut y = body.y + FONT_SIZE_DIALOG;
    for line in wrap_text(text, FONT_SIZE_DIALOG, body.w) {
        if y > rect.bottom() {
            break;
        }
        draw_text(&line, body.x, y, FONT_SIZE_DIALOG, TEXT_COLOR);
        y += line_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_keeps_explicit_newlines() {
        let lines = wrap_text("Welcome.\nPress space", 10.0, 1000.0);
        assert_eq!(lines, vec!["Welcome.".to_string(), "Press space".to_string()]);
    }

    #[test]
    fn test_wrap_breaks_long_lines() {
        // 5px per char -> 30px fits six characters
        let lines = wrap_text("aaa bbb ccc", 10.0, 30.0);
        assert_eq!(lines, vec!["aaa".to_string(), "bbb".to_string(), "ccc".to_string()]);
    }

    #[test]
    fn test_wrap_never_drops_oversized_word() {
        let lines = wrap_text("skyscraper", 10.0, 10.0);
        assert_eq!(lines, vec!["skyscraper".to_string()]);
    }
}
