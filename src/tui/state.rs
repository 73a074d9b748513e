//! TUI state algebra: pure types, zero effects.
//!
//! The model is deliberately small — one carousel, one optional in-flight
//! animation, one quit flag. Input handling maps raw terminal events to
//! semantic [`Action`]s; the transition function decides what each action
//! means and reports the result as a [`Transition`] for the effects layer
//! to interpret.

use crate::carousel::{Carousel, DragTranslation};
use crate::catalog::Catalog;

use super::animate::Animation;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// The carousel engine — active index plus transient drag state.
    pub carousel: Carousel,

    /// In-flight index-change animation. None when the layout is settled.
    pub animation: Option<Animation>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Create an App showing `catalog` with card 0 active.
    pub fn new(catalog: Catalog) -> Self {
        App {
            carousel: Carousel::new(catalog),
            animation: None,
            should_quit: false,
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw terminal events.
///
/// The effects layer maps key presses and mouse gestures to Actions;
/// the transition function gives them meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// A drag is in progress with this running translation.
    DragMoved(DragTranslation),
    /// A drag finished with this final translation.
    DragEnded(DragTranslation),
    /// Keyboard paging: same index change as an over-threshold swipe left.
    SwipeLeft,
    /// Keyboard paging: same index change as an over-threshold swipe right.
    SwipeRight,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The effects boundary inspects it to decide whether to start an
/// animation or shut down. Pure code describes WHAT happened, effectful
/// code decides HOW to show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing visible changed beyond live drag feedback.
    Idle,
    /// The active index moved; `previous` is where it was. The renderer
    /// should animate the dependent scale/offset/depth changes.
    IndexChanged { previous: usize },
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
