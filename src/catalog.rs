//! The card catalog: an ordered, finite, immutable set of display cards.
//!
//! Cards are plain data — label and color are fields, not a dispatch over
//! some card kind. The catalog is validated once at construction and never
//! mutated afterwards; everything downstream (layout, gestures, rendering)
//! reads it by position.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// COLORS
// ============================================================================

/// Symbolic card color.
///
/// Deliberately not a terminal color: the rendering layer owns the mapping
/// to concrete styles, the catalog only carries identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Orange,
    Blue,
    Pink,
    Green,
    Purple,
}

/// Palette used when assigning colors to user-supplied labels.
///
/// Cycles when there are more cards than colors.
pub const PALETTE: [CardColor; 5] = [
    CardColor::Orange,
    CardColor::Blue,
    CardColor::Pink,
    CardColor::Green,
    CardColor::Purple,
];

// ============================================================================
// CARDS
// ============================================================================

/// One card in the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Position in catalog order, `0..n`.
    pub position: usize,
    /// Display label.
    pub label: String,
    /// Symbolic color, resolved to a style at render time.
    pub color: CardColor,
}

// ============================================================================
// CATALOG
// ============================================================================

/// Ordered, non-empty, immutable sequence of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    cards: Vec<Card>,
}

/// Why a catalog could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The carousel needs at least one card — all the circular index
    /// arithmetic is mod n.
    Empty,
    /// A card's `position` field disagrees with its place in the sequence.
    PositionMismatch { expected: usize, found: usize },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog must contain at least one card"),
            CatalogError::PositionMismatch { expected, found } => write!(
                f,
                "card at position {} declares position {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

impl Catalog {
    /// Build a catalog from cards, validating the contract:
    /// non-empty, and `cards[i].position == i` for all i.
    pub fn new(cards: Vec<Card>) -> Result<Self, CatalogError> {
        if cards.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, card) in cards.iter().enumerate() {
            if card.position != i {
                return Err(CatalogError::PositionMismatch {
                    expected: i,
                    found: card.position,
                });
            }
        }
        Ok(Catalog { cards })
    }

    /// Build a catalog from labels alone, cycling colors through [`PALETTE`].
    pub fn from_labels<I, S>(labels: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cards = labels
            .into_iter()
            .enumerate()
            .map(|(position, label)| Card {
                position,
                label: label.into(),
                color: PALETTE[position % PALETTE.len()],
            })
            .collect();
        Catalog::new(cards)
    }

    /// The fixed five-card demo catalog.
    pub fn demo() -> Self {
        Catalog::from_labels(["first", "second", "third", "fourth", "fifth"])
            .expect("demo catalog is non-empty")
    }

    /// Number of cards, n ≥ 1.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false — construction rejects empty catalogs.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `position`, if in range.
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Cards in catalog order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
