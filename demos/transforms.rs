//! Print the layout table for every active index of the demo catalog.
//!
//! Run with: cargo run --example transforms

use carousel_tui::catalog::Catalog;
use carousel_tui::report::{format_transforms, OutputFormat};

fn main() {
    let catalog = Catalog::demo();

    for active in 0..catalog.len() {
        println!("{}", format_transforms(&catalog, active, OutputFormat::Human));
    }
}
