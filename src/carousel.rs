//! Gesture controller: the one piece of mutable state in the whole engine.
//!
//! A [`Carousel`] owns the catalog, the active index, and the transient
//! drag translation. Drag deltas flow in from the host's input layer; on
//! gesture end the threshold rule decides whether the active index steps
//! forward or back, circularly. The controller never renders anything — it
//! reports index changes and lets the host animate the dependent
//! scale/offset/depth transitions.

use crate::catalog::Catalog;
use crate::layout::{self, CardTransform};

// ============================================================================
// GESTURE TYPES
// ============================================================================

/// Minimum horizontal drag distance, in layout units, for a swipe to count.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Raw 2D drag translation, as reported by the host input layer.
///
/// Only the horizontal component drives index changes; the full vector is
/// kept so a renderer can optionally show the dragged card following the
/// pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragTranslation {
    pub dx: f64,
    pub dy: f64,
}

impl DragTranslation {
    pub fn new(dx: f64, dy: f64) -> Self {
        DragTranslation { dx, dy }
    }
}

/// Direction of the last completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwipeDirection {
    Left,
    Right,
    /// No swipe yet, or the last drag fell below the threshold.
    #[default]
    None,
}

/// What a completed drag did to the active index.
///
/// The host inspects this to know whether to animate a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// The active index moved; `previous` is where it was.
    Changed { previous: usize },
    /// Below-threshold drag (or a canceled one): nothing happened.
    Unchanged,
}

// ============================================================================
// CAROUSEL
// ============================================================================

/// Carousel state: catalog plus active index plus in-flight drag.
///
/// Invariant: `active_index` is always in `[0, n)`. Every update goes
/// through non-negative modulo arithmetic, so the index can neither go
/// negative nor reach n.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    catalog: Catalog,
    active_index: usize,
    drag: DragTranslation,
    last_swipe: SwipeDirection,
}

impl Carousel {
    /// Wrap a catalog, starting with card 0 active and no drag in flight.
    pub fn new(catalog: Catalog) -> Self {
        Carousel {
            catalog,
            active_index: 0,
            drag: DragTranslation::default(),
            last_swipe: SwipeDirection::None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Always false — catalogs are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The in-flight drag translation; zero whenever no drag is active.
    pub fn drag(&self) -> DragTranslation {
        self.drag
    }

    pub fn last_swipe(&self) -> SwipeDirection {
        self.last_swipe
    }

    // -- Gesture entry points --

    /// Store the latest raw translation while a drag is in progress.
    ///
    /// Live feedback only — the index never changes mid-drag.
    pub fn on_drag_change(&mut self, translation: DragTranslation) {
        self.drag = translation;
    }

    /// Finish a drag: apply the threshold rule, reset the translation.
    ///
    /// A swipe left (dx below `-SWIPE_THRESHOLD`) advances to the next
    /// card; a swipe right (dx above the threshold) retreats to the
    /// previous one; anything in between is a no-op. A drag canceled by
    /// the host lands here with whatever translation it had and is treated
    /// the same way.
    pub fn on_drag_end(&mut self, translation: DragTranslation) -> SwipeOutcome {
        let previous = self.active_index;
        let outcome = if translation.dx < -SWIPE_THRESHOLD {
            self.last_swipe = SwipeDirection::Left;
            self.advance();
            SwipeOutcome::Changed { previous }
        } else if translation.dx > SWIPE_THRESHOLD {
            self.last_swipe = SwipeDirection::Right;
            self.retreat();
            SwipeOutcome::Changed { previous }
        } else {
            self.last_swipe = SwipeDirection::None;
            SwipeOutcome::Unchanged
        };
        self.drag = DragTranslation::default();
        outcome
    }

    // -- Index stepping --

    /// Step to the next card, wrapping past the end of the catalog.
    pub fn advance(&mut self) {
        let n = self.len();
        self.active_index = (self.active_index + n - 1) % n;
    }

    /// Step to the previous card, wrapping past the start.
    pub fn retreat(&mut self) {
        let n = self.len();
        self.active_index = (self.active_index + 1) % n;
    }

    // -- Layout delegation --

    /// Visual transform for the card at `position` under the current state.
    pub fn transform(&self, position: usize) -> CardTransform {
        layout::transform(position, self.active_index, self.len())
    }

    /// Transforms for every card, in catalog order.
    pub fn transforms(&self) -> Vec<CardTransform> {
        layout::transforms(self.active_index, self.len())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn demo_carousel() -> Carousel {
        Carousel::new(Catalog::demo())
    }

    // -- Threshold rule --

    #[test]
    fn swipe_left_past_threshold_advances_circularly() {
        let mut carousel = demo_carousel();
        let outcome = carousel.on_drag_end(DragTranslation::new(-60.0, 0.0));
        assert_eq!(outcome, SwipeOutcome::Changed { previous: 0 });
        assert_eq!(carousel.active_index(), 4); // (0 - 1 + 5) % 5
        assert_eq!(carousel.last_swipe(), SwipeDirection::Left);
    }

    #[test]
    fn swipe_right_past_threshold_retreats_circularly() {
        let mut carousel = demo_carousel();
        carousel.active_index = 4;
        let outcome = carousel.on_drag_end(DragTranslation::new(60.0, 0.0));
        assert_eq!(outcome, SwipeOutcome::Changed { previous: 4 });
        assert_eq!(carousel.active_index(), 0); // (4 + 1) % 5
        assert_eq!(carousel.last_swipe(), SwipeDirection::Right);
    }

    #[test]
    fn below_threshold_drag_is_a_noop() {
        let mut carousel = demo_carousel();
        carousel.on_drag_change(DragTranslation::new(30.0, 5.0));
        let outcome = carousel.on_drag_end(DragTranslation::new(30.0, 5.0));
        assert_eq!(outcome, SwipeOutcome::Unchanged);
        assert_eq!(carousel.active_index(), 0);
        assert_eq!(carousel.last_swipe(), SwipeDirection::None);
    }

    #[test]
    fn exactly_at_threshold_does_not_trigger() {
        let mut carousel = demo_carousel();
        assert_eq!(
            carousel.on_drag_end(DragTranslation::new(-50.0, 0.0)),
            SwipeOutcome::Unchanged
        );
        assert_eq!(
            carousel.on_drag_end(DragTranslation::new(50.0, 0.0)),
            SwipeOutcome::Unchanged
        );
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn vertical_component_is_ignored() {
        let mut carousel = demo_carousel();
        let outcome = carousel.on_drag_end(DragTranslation::new(-10.0, 500.0));
        assert_eq!(outcome, SwipeOutcome::Unchanged);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn drag_translation_resets_after_every_gesture() {
        let mut carousel = demo_carousel();
        carousel.on_drag_change(DragTranslation::new(-70.0, 3.0));
        assert_eq!(carousel.drag(), DragTranslation::new(-70.0, 3.0));
        carousel.on_drag_end(DragTranslation::new(-70.0, 3.0));
        assert_eq!(carousel.drag(), DragTranslation::default());

        carousel.on_drag_change(DragTranslation::new(10.0, 0.0));
        carousel.on_drag_end(DragTranslation::new(10.0, 0.0));
        assert_eq!(carousel.drag(), DragTranslation::default());
    }

    // -- Index invariant --

    #[test]
    fn active_index_stays_in_range_over_many_swipes() {
        let mut carousel = demo_carousel();
        for _ in 0..23 {
            carousel.on_drag_end(DragTranslation::new(-60.0, 0.0));
            assert!(carousel.active_index() < carousel.len());
        }
        for _ in 0..37 {
            carousel.on_drag_end(DragTranslation::new(60.0, 0.0));
            assert!(carousel.active_index() < carousel.len());
        }
    }

    #[test]
    fn carousel_is_never_empty() {
        assert!(!demo_carousel().is_empty());
    }

    #[test]
    fn full_cycle_of_advances_returns_to_start() {
        let mut carousel = demo_carousel();
        for _ in 0..5 {
            carousel.advance();
        }
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn single_card_carousel_swipes_to_itself() {
        let mut carousel = Carousel::new(Catalog::from_labels(["only"]).unwrap());
        let outcome = carousel.on_drag_end(DragTranslation::new(-100.0, 0.0));
        // The index "changed" through a full wrap back to 0
        assert_eq!(outcome, SwipeOutcome::Changed { previous: 0 });
        assert_eq!(carousel.active_index(), 0);
    }

    // -- Layout delegation --

    #[test]
    fn transform_follows_the_active_index() {
        let mut carousel = demo_carousel();
        assert_eq!(carousel.transform(0).scale, 1.0);
        carousel.advance();
        assert_eq!(carousel.active_index(), 4);
        assert_eq!(carousel.transform(4).scale, 1.0);
        assert_eq!(carousel.transform(0).scale, 0.7);
    }

    #[test]
    fn transforms_returns_one_entry_per_card() {
        let carousel = demo_carousel();
        assert_eq!(carousel.transforms().len(), 5);
    }
}
