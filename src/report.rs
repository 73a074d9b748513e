//! Layout table formatting.
//!
//! Pure functions — (catalog, active index, format) → String.
//! No I/O, no side effects. Used by the CLI to inspect the geometry the
//! TUI would render, and by scripts via the JSON form.

use serde::Serialize;

use crate::catalog::{Card, Catalog};
use crate::layout;

/// Output format for the layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable aligned table.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Format the full layout table for `active`.
pub fn format_transforms(catalog: &Catalog, active: usize, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(catalog, active),
        OutputFormat::Json => format_json(catalog, active),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(catalog: &Catalog, active: usize) -> String {
    let n = catalog.len();
    let mut out = String::new();

    out.push_str(&format!("Active index: {} (of {})\n\n", active % n, n));
    out.push_str("  pos  label     scale  offset   z\n");
    out.push_str("  ───  ────────  ─────  ──────  ──\n");

    for card in catalog.cards() {
        let t = layout::transform(card.position, active, n);
        let marker = if card.position == active % n { "▶" } else { " " };
        out.push_str(&format!(
            "{} {:>3}  {:<8}  {:>5.2}  {:>6.1}  {:>2}\n",
            marker, card.position, card.label, t.scale, t.offset, t.z_index
        ));
    }

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

/// One row of the JSON layout table.
#[derive(Serialize)]
struct TransformRow<'a> {
    #[serde(flatten)]
    card: &'a Card,
    scale: f64,
    offset: f64,
    z_index: usize,
}

#[derive(Serialize)]
struct TransformTable<'a> {
    active_index: usize,
    count: usize,
    cards: Vec<TransformRow<'a>>,
}

fn format_json(catalog: &Catalog, active: usize) -> String {
    let n = catalog.len();
    let table = TransformTable {
        active_index: active % n,
        count: n,
        cards: catalog
            .cards()
            .map(|card| {
                let t = layout::transform(card.position, active, n);
                TransformRow {
                    card,
                    scale: t.scale,
                    offset: t.offset,
                    z_index: t.z_index,
                }
            })
            .collect(),
    };

    serde_json::to_string_pretty(&table).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

// ============================================================================
// TESTS
// ============================================================================
