//! Transition animation: interpolate card transforms over a fixed duration.
//!
//! The gesture controller only reports "active index changed"; the visual
//! glide between the old and new layouts happens here. Sampling is pure
//! (progress in, transforms out) — the event loop supplies wall-clock time
//! and decides when the animation is over.

use std::time::{Duration, Instant};

use crate::layout::CardTransform;

/// How long an index change takes to settle visually.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

// ============================================================================
// EASING
// ============================================================================

/// Smoothstep ease-in-out on `[0, 1]`, clamped outside.
///
/// Monotonic, with `ease_in_out(0) == 0` and `ease_in_out(1) == 1`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation between `a` and `b`.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

// ============================================================================
// ANIMATION
// ============================================================================

/// An in-flight transition between two full layout snapshots.
///
/// `from` and `to` are per-card transform sets in catalog order, captured
/// at the moment the active index changed.
#[derive(Debug, Clone)]
pub struct Animation {
    from: Vec<CardTransform>,
    to: Vec<CardTransform>,
    started: Instant,
}

impl Animation {
    /// Start an animation now.
    pub fn begin(from: Vec<CardTransform>, to: Vec<CardTransform>) -> Self {
        debug_assert_eq!(from.len(), to.len());
        Animation {
            from,
            to,
            started: Instant::now(),
        }
    }

    /// Eased progress at `now`, in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        ease_in_out(elapsed.as_secs_f64() / TRANSITION_DURATION.as_secs_f64())
    }

    pub fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= TRANSITION_DURATION
    }

    /// Transforms at `now` — scale and offset glide, stacking order flips
    /// at the halfway point so the incoming active card surfaces mid-glide.
    pub fn sample(&self, now: Instant) -> Vec<CardTransform> {
        self.sample_at(self.progress(now))
    }

    /// Pure sampling at an explicit eased progress value.
    pub fn sample_at(&self, progress: f64) -> Vec<CardTransform> {
        let t = progress.clamp(0.0, 1.0);
        self.from
            .iter()
            .zip(&self.to)
            .map(|(from, to)| CardTransform {
                scale: lerp(from.scale, to.scale, t),
                offset: lerp(from.offset, to.offset, t),
                z_index: if t < 0.5 { from.z_index } else { to.z_index },
            })
            .collect()
    }

    /// The layout this animation settles into.
    pub fn target(&self) -> &[CardTransform] {
        &self.to
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;

    // -- Easing --

    #[test]
    fn ease_endpoints_are_fixed() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(0.5), 0.5);
    }

    #[test]
    fn ease_clamps_out_of_range_input() {
        assert_eq!(ease_in_out(-0.3), 0.0);
        assert_eq!(ease_in_out(1.7), 1.0);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut prev = 0.0;
        for step in 0..=100 {
            let eased = ease_in_out(step as f64 / 100.0);
            assert!(eased >= prev, "dip at step {}", step);
            prev = eased;
        }
    }

    #[test]
    fn ease_starts_slow_and_ends_slow() {
        assert!(ease_in_out(0.1) < 0.1);
        assert!(ease_in_out(0.9) > 0.9);
    }

    // -- Sampling --

    fn demo_animation() -> Animation {
        // Active index moving 0 → 4 in a five-card catalog
        Animation::begin(layout::transforms(0, 5), layout::transforms(4, 5))
    }

    #[test]
    fn sample_at_zero_matches_origin_layout() {
        let anim = demo_animation();
        assert_eq!(anim.sample_at(0.0), layout::transforms(0, 5));
    }

    #[test]
    fn sample_at_one_matches_target_layout() {
        let anim = demo_animation();
        assert_eq!(anim.sample_at(1.0), layout::transforms(4, 5));
        assert_eq!(anim.target(), &layout::transforms(4, 5)[..]);
    }

    #[test]
    fn midpoint_sample_is_between_endpoints() {
        let anim = demo_animation();
        let mid = anim.sample_at(0.5);
        // Card 0: scale 1.0 → 0.7
        assert!((mid[0].scale - 0.85).abs() < 1e-9);
        // Card 4: scale 0.7 → 1.0
        assert!((mid[4].scale - 0.85).abs() < 1e-9);
    }

    #[test]
    fn stacking_order_flips_at_halfway() {
        let anim = demo_animation();
        let early = anim.sample_at(0.49);
        let late = anim.sample_at(0.5);
        // Card 4 becomes active: depth 5 only after the flip
        assert_eq!(early[4].z_index, layout::z_index(4, 0, 5));
        assert_eq!(late[4].z_index, 5);
    }

    #[test]
    fn sample_clamps_progress() {
        let anim = demo_animation();
        assert_eq!(anim.sample_at(2.0), anim.sample_at(1.0));
        assert_eq!(anim.sample_at(-1.0), anim.sample_at(0.0));
    }

    #[test]
    fn fresh_animation_is_not_finished() {
        let anim = demo_animation();
        assert!(!anim.finished(Instant::now()));
        assert!(anim.finished(Instant::now() + TRANSITION_DURATION));
    }
}
