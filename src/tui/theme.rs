//! Card colors and style constants for the rendering layer.
//!
//! The catalog carries symbolic colors; this module owns the mapping to
//! concrete terminal styles. Pure data — consumed by the view for visual
//! consistency.

use ratatui::style::{Color, Modifier, Style};

use crate::catalog::CardColor;

// ============================================================================
// CARD COLORS
// ============================================================================

/// Resolve a symbolic card color to a terminal color.
pub fn card_color(color: CardColor) -> Color {
    match color {
        CardColor::Orange => Color::Rgb(255, 149, 0),
        CardColor::Blue => Color::Rgb(0, 122, 255),
        CardColor::Pink => Color::Rgb(255, 45, 85),
        CardColor::Green => Color::Rgb(52, 199, 89),
        CardColor::Purple => Color::Rgb(175, 82, 222),
    }
}

/// Face style for a card: dark text on its own color.
pub fn card_style(color: CardColor) -> Style {
    Style::new().fg(Color::Black).bg(card_color(color))
}

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Active card label.
pub const STYLE_ACTIVE_LABEL: Style = Style::new()
    .fg(Color::Black)
    .add_modifier(Modifier::BOLD);

/// De-emphasized metadata (position numbers, swipe direction).
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
