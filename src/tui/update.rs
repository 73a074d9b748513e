//! Pure state transitions: (carousel, action) → Transition.
//!
//! The entire gesture state machine lives here and in the carousel itself.
//! Fully testable without a terminal. Drags feed the gesture controller;
//! keyboard paging reuses the same circular index arithmetic, so arrows
//! and swipes can never disagree.

use crate::carousel::{Carousel, SwipeOutcome};

use super::state::{Action, Transition};

/// Apply one semantic action to the carousel.
///
/// Mutates only the carousel's own state (active index, drag translation)
/// and reports what happened; starting animations and quitting are the
/// effects layer's business.
pub fn update(carousel: &mut Carousel, action: &Action) -> Transition {
    match action {
        Action::DragMoved(translation) => {
            carousel.on_drag_change(*translation);
            Transition::Idle
        }
        Action::DragEnded(translation) => match carousel.on_drag_end(*translation) {
            SwipeOutcome::Changed { previous } => Transition::IndexChanged { previous },
            SwipeOutcome::Unchanged => Transition::Idle,
        },
        Action::SwipeLeft => {
            let previous = carousel.active_index();
            carousel.advance();
            Transition::IndexChanged { previous }
        }
        Action::SwipeRight => {
            let previous = carousel.active_index();
            carousel.retreat();
            Transition::IndexChanged { previous }
        }
        Action::Quit => Transition::Quit,
    }
}

// ============================================================================
// TESTS
// ============================================================================
