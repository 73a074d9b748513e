//! carousel-tui CLI
//!
//! Page through a circular card carousel in the terminal, or print the
//! layout table a given active index would produce.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use carousel_tui::catalog::Catalog;
use carousel_tui::report::{format_transforms, OutputFormat};
use carousel_tui::tui;

#[derive(Parser)]
#[command(name = "carousel-tui")]
#[command(about = "Circular card carousel with drag paging")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive carousel
    Run {
        /// Comma-separated card labels (default: the five demo cards)
        #[arg(long, value_delimiter = ',')]
        labels: Option<Vec<String>>,
    },

    /// Print the layout table for an active index without entering the TUI
    Layout {
        /// Active card index
        #[arg(long, default_value_t = 0)]
        active: usize,

        /// Comma-separated card labels (default: the five demo cards)
        #[arg(long, value_delimiter = ',')]
        labels: Option<Vec<String>>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { labels } => cmd_run(labels),
        Commands::Layout { active, labels, format } => cmd_layout(active, labels, format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

/// Build a catalog from `--labels`, falling back to the demo cards.
fn resolve_catalog(labels: Option<Vec<String>>) -> Result<Catalog, String> {
    match labels {
        Some(labels) => Catalog::from_labels(labels)
            .map_err(|e| format!("{} (pass at least one label)", e)),
        None => Ok(Catalog::demo()),
    }
}

fn cmd_run(labels: Option<Vec<String>>) -> Result<(), String> {
    let catalog = resolve_catalog(labels)?;
    tui::run::run(catalog).map_err(|e| e.to_string())
}

fn cmd_layout(
    active: usize,
    labels: Option<Vec<String>>,
    format: OutputFormat,
) -> Result<(), String> {
    let catalog = resolve_catalog(labels)?;
    if active >= catalog.len() {
        return Err(format!(
            "active index {} out of range for {} cards",
            active,
            catalog.len()
        ));
    }
    print!("{}", format_transforms(&catalog, active, format));
    Ok(())
}
