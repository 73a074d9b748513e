//! Pure rendering: map App state to ratatui widgets.
//!
//! Terminal cells are the canvas: each card becomes a bordered block whose
//! size follows its scale factor and whose horizontal position follows its
//! layout offset. Stacking depth turns into paint order — lowest depth
//! first, so higher cards overwrite lower ones in the frame buffer.

use std::time::Instant;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::layout::CardTransform;

use super::state::App;
use super::theme;

// ============================================================================
// GEOMETRY CONSTANTS
// ============================================================================

/// Width of a full-scale card, in terminal columns.
const BASE_CARD_WIDTH: f64 = 24.0;

/// Height of a full-scale card, in terminal rows.
const BASE_CARD_HEIGHT: f64 = 11.0;

/// Terminal columns per layout offset unit. The layout engine speaks in
/// abstract units (adjacent cards sit 90 apart); this converts to cells.
/// The input layer uses the inverse so a dragged card tracks the pointer
/// column for column.
pub(super) const COLUMNS_PER_UNIT: f64 = 0.3;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole TUI to the terminal frame.
pub fn render(app: &App, now: Instant, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // carousel
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled("carousel-tui", theme::STYLE_TITLE)),
        chunks[0],
    );
    frame.render_widget(render_help(app), chunks[2]);

    render_carousel(app, now, frame, chunks[1]);
}

fn render_help(app: &App) -> Paragraph<'static> {
    let position = format!(
        "card {}/{}  ",
        app.carousel.active_index() + 1,
        app.carousel.len()
    );
    Paragraph::new(Line::from(vec![
        Span::styled(position, theme::STYLE_DIM),
        Span::styled("[←/→] page  [drag] swipe  [q] quit", theme::STYLE_HELP),
    ]))
}

// ============================================================================
// CAROUSEL
// ============================================================================

fn render_carousel(app: &App, now: Instant, frame: &mut Frame, area: Rect) {
    let mut transforms = match &app.animation {
        Some(animation) => animation.sample(now),
        None => app.carousel.transforms(),
    };

    // Live drag feedback: the active card follows the pointer.
    let drag = app.carousel.drag();
    if drag.dx != 0.0 {
        let active = app.carousel.active_index();
        transforms[active].offset += drag.dx;
    }

    for position in paint_order(&transforms) {
        let Some(card) = app.carousel.catalog().get(position) else {
            continue;
        };
        let t = transforms[position];
        let Some(rect) = card_rect(area, &t) else {
            continue;
        };

        let label_style = if position == app.carousel.active_index() {
            theme::STYLE_ACTIVE_LABEL
        } else {
            theme::card_style(card.color)
        };

        // Vertical centering inside the block: pad lines above the label
        let inner_height = rect.height.saturating_sub(2) as usize;
        let mut lines = vec![Line::default(); inner_height / 2];
        lines.push(Line::from(Span::styled(card.label.clone(), label_style)));
        lines.push(Line::from(Span::styled(
            format!("{}", card.position),
            theme::STYLE_DIM,
        )));

        let widget = Paragraph::new(lines)
            .centered()
            .block(Block::bordered().style(theme::card_style(card.color)));
        frame.render_widget(widget, rect);
    }
}

// ============================================================================
// PURE GEOMETRY HELPERS
// ============================================================================

/// Card positions sorted by stacking depth, lowest first.
///
/// Painting in this order makes higher-depth cards overwrite lower ones.
fn paint_order(transforms: &[CardTransform]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..transforms.len()).collect();
    order.sort_by_key(|&i| transforms[i].z_index);
    order
}

/// Screen rectangle for a card transform, centered in `area`.
///
/// Returns None when the card falls entirely outside the drawable area or
/// the area is too small to show anything.
fn card_rect(area: Rect, t: &CardTransform) -> Option<Rect> {
    let width = (BASE_CARD_WIDTH * t.scale).round() as i32;
    let height = (BASE_CARD_HEIGHT * t.scale).round() as i32;
    if width < 2 || height < 2 || area.width == 0 || area.height == 0 {
        return None;
    }

    let center_x = area.x as i32 + area.width as i32 / 2;
    let center_y = area.y as i32 + area.height as i32 / 2;
    let shift = (t.offset * COLUMNS_PER_UNIT).round() as i32;

    let left = center_x + shift - width / 2;
    let top = center_y - height / 2;

    // Clip to the drawable area
    let area_right = (area.x + area.width) as i32;
    let area_bottom = (area.y + area.height) as i32;
    let clipped_left = left.max(area.x as i32);
    let clipped_top = top.max(area.y as i32);
    let clipped_right = (left + width).min(area_right);
    let clipped_bottom = (top + height).min(area_bottom);

    if clipped_left >= clipped_right || clipped_top >= clipped_bottom {
        return None;
    }

    Some(Rect {
        x: clipped_left as u16,
        y: clipped_top as u16,
        width: (clipped_right - clipped_left) as u16,
        height: (clipped_bottom - clipped_top) as u16,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;

    fn full_area() -> Rect {
        Rect { x: 0, y: 0, width: 120, height: 40 }
    }

    // -- Paint order --

    #[test]
    fn paint_order_draws_active_card_last() {
        let transforms = layout::transforms(0, 5);
        let order = paint_order(&transforms);
        assert_eq!(*order.last().unwrap(), 0);
    }

    #[test]
    fn paint_order_is_ascending_in_depth() {
        let transforms = layout::transforms(2, 5);
        let order = paint_order(&transforms);
        for pair in order.windows(2) {
            assert!(transforms[pair[0]].z_index <= transforms[pair[1]].z_index);
        }
    }

    // -- Card rectangles --

    #[test]
    fn active_card_is_centered_and_full_size() {
        let t = layout::transform(0, 0, 5);
        let rect = card_rect(full_area(), &t).unwrap();
        assert_eq!(rect.width, 24);
        assert_eq!(rect.height, 11);
        // Centered: left edge at 60 - 12
        assert_eq!(rect.x, 48);
    }

    #[test]
    fn positive_offset_shifts_left_of_negative() {
        // Mirrored layout: the card one step forward (offset -90) lands
        // left of center, one step back (+90) lands right.
        let forward = card_rect(full_area(), &layout::transform(1, 0, 5)).unwrap();
        let back = card_rect(full_area(), &layout::transform(4, 0, 5)).unwrap();
        assert!(forward.x < back.x);
    }

    #[test]
    fn scaled_down_cards_shrink() {
        let neighbor = card_rect(full_area(), &layout::transform(1, 0, 5)).unwrap();
        assert!(neighbor.width < 24);
        assert!(neighbor.height < 11);
    }

    #[test]
    fn tiny_area_yields_no_rect() {
        let area = Rect { x: 0, y: 0, width: 0, height: 0 };
        let t = layout::transform(0, 0, 5);
        assert!(card_rect(area, &t).is_none());
    }

    #[test]
    fn off_screen_card_is_clipped_or_dropped() {
        let area = Rect { x: 0, y: 0, width: 30, height: 12 };
        let t = CardTransform { scale: 1.0, offset: -400.0, z_index: 1 };
        // Either clipped to the area or dropped entirely; never out of bounds
        if let Some(rect) = card_rect(area, &t) {
            assert!(rect.x >= area.x);
            assert!(rect.x + rect.width <= area.x + area.width);
        }
    }
}
