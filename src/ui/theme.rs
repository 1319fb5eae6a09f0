//! Color theme constants for the dashboard
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

use crate::models::Difficulty;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused panel
pub const COLOR_BORDER_FOCUSED: Color = Color::White;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Active/selected elements - bright green
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Error messages - red
pub const COLOR_ERROR: Color = Color::Red;

/// Background of the highlighted sidebar row
pub const COLOR_HIGHLIGHT_BG: Color = Color::Rgb(10, 15, 35);

// ============================================================================
// Chart Colors
// ============================================================================

/// Category chart palette, repeated when there are more categories
pub const CATEGORY_PALETTE: [Color; 14] = [
    Color::Rgb(0x4C, 0xAF, 0x50),
    Color::Rgb(0x21, 0x96, 0xF3),
    Color::Rgb(0xFF, 0xC1, 0x07),
    Color::Rgb(0xFF, 0x57, 0x22),
    Color::Rgb(0x9C, 0x27, 0xB0),
    Color::Rgb(0x00, 0xBC, 0xD4),
    Color::Rgb(0xCD, 0xDC, 0x39),
    Color::Rgb(0xFF, 0xEB, 0x3B),
    Color::Rgb(0x79, 0x55, 0x48),
    Color::Rgb(0x60, 0x7D, 0x8B),
    Color::Rgb(0xE9, 0x1E, 0x63),
    Color::Rgb(0x00, 0x96, 0x88),
    Color::Rgb(0x8B, 0xC3, 0x4A),
    Color::Rgb(0xFF, 0x98, 0x00),
];

/// Difficulty bar color - indigo #3F51B5
pub const COLOR_DIFFICULTY_BAR: Color = Color::Rgb(0x3F, 0x51, 0xB5);

/// Palette color for the category at `index`.
pub fn category_color(index: usize) -> Color {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}

/// Pill color for a difficulty
pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Rgb(4, 181, 117),
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}
