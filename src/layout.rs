//! Carousel geometry: per-card scale, horizontal offset, and stacking depth.
//!
//! Pure functions — no I/O, no state, easily testable. Every function takes
//! a card position, the active index, and the catalog size n, and all index
//! arithmetic is circular (mod n, non-negative).

// ============================================================================
// CONSTANTS
// ============================================================================

/// Scale of the active card.
pub const MAX_SCALE: f64 = 1.0;

/// Scale of the cards adjacent to the active one.
pub const MIN_SCALE: f64 = 0.7;

/// Second-ring cards shrink by this factor relative to [`MIN_SCALE`].
const SECOND_RING_FACTOR: f64 = 0.8;

/// Everything further out shrinks by this factor relative to [`MIN_SCALE`].
const OUTER_RING_FACTOR: f64 = 0.6;

/// Horizontal displacement of a card one step from the active card.
///
/// Negative on purpose: a card with positive signed distance (to the
/// "right" in catalog order) is pushed left, and vice versa. The layout is
/// mirrored, cards tuck behind the active one instead of fanning away.
pub const ADJACENT_OFFSET: f64 = -90.0;

/// Horizontal displacement of every card more than one step away.
pub const NON_ADJACENT_OFFSET: f64 = -120.0;

// ============================================================================
// CIRCULAR DISTANCE
// ============================================================================

/// Forward circular distance from `active` to `position`, in `0..n`.
///
/// Positions outside `0..n` are reduced mod n first, so callers may pass
/// wrapped indices (`position + n` behaves like `position`).
fn forward_distance(position: usize, active: usize, n: usize) -> usize {
    debug_assert!(n >= 1, "catalog is never empty");
    (position % n + n - active % n) % n
}

/// Signed circular distance from `active` to `position`, wrapped into
/// `[-(n/2), n - 1 - n/2]` with integer half. Zero means active.
fn signed_distance(position: usize, active: usize, n: usize) -> i64 {
    let half = (n / 2) as i64;
    let mut delta = (position % n) as i64 - (active % n) as i64;
    if delta > half {
        delta -= n as i64;
    } else if delta < -half {
        delta += n as i64;
    }
    delta
}

// ============================================================================
// TRANSFORM FUNCTIONS
// ============================================================================

/// Scale factor for the card at `position`, in `[0, 1]`.
///
/// Symmetric falloff by circular distance from the active card:
/// active 1.0, immediate neighbors 0.7, next ring 0.56, everything else
/// 0.42. Small n collapses cases naturally (for n = 2 the two neighbor
/// branches are the same card).
pub fn scale(position: usize, active: usize, n: usize) -> f64 {
    let d = forward_distance(position, active, n);
    if d == 0 {
        MAX_SCALE
    } else if d == 1 || d == n - 1 {
        MIN_SCALE
    } else if d == 2 || d == n - 2 {
        MIN_SCALE * SECOND_RING_FACTOR
    } else {
        MIN_SCALE * OUTER_RING_FACTOR
    }
}

/// Signed horizontal offset for the card at `position`.
///
/// Zero for the active card; [`ADJACENT_OFFSET`] one step out,
/// [`NON_ADJACENT_OFFSET`] beyond, each multiplied by the sign of the
/// wrapped signed distance (see the mirrored-layout note on
/// [`ADJACENT_OFFSET`]).
pub fn offset(position: usize, active: usize, n: usize) -> f64 {
    let delta = signed_distance(position, active, n);
    if delta == 0 {
        return 0.0;
    }
    let magnitude = if delta.abs() == 1 {
        ADJACENT_OFFSET
    } else {
        NON_ADJACENT_OFFSET
    };
    if delta < 0 { -magnitude } else { magnitude }
}

/// Stacking depth for the card at `position`; higher is drawn on top.
///
/// Two monotonic bands keyed on forward circular distance `d`:
/// the active card gets `n` (strictly topmost), cards with `d <= n/2` rank
/// `n - d`, cards beyond the halfway point rank `d - n/2`. Proximity
/// decides layering on both sides without ever tying at the top.
pub fn z_index(position: usize, active: usize, n: usize) -> usize {
    let d = forward_distance(position, active, n);
    let half = n / 2;
    if d == 0 {
        n
    } else if d <= half {
        n - d
    } else {
        d - half
    }
}

// ============================================================================
// BUNDLED TRANSFORM
// ============================================================================

/// The full visual transform for one card.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct CardTransform {
    /// Scale factor, `[0, 1]`.
    pub scale: f64,
    /// Signed horizontal displacement in layout units.
    pub offset: f64,
    /// Stacking depth; higher draws on top.
    pub z_index: usize,
}

/// Transform for the card at `position` given the current active index.
pub fn transform(position: usize, active: usize, n: usize) -> CardTransform {
    CardTransform {
        scale: scale(position, active, n),
        offset: offset(position, active, n),
        z_index: z_index(position, active, n),
    }
}

/// Transforms for all n cards in catalog order. One call per frame.
pub fn transforms(active: usize, n: usize) -> Vec<CardTransform> {
    (0..n).map(|i| transform(i, active, n)).collect()
}

// ============================================================================
// TESTS
// ============================================================================
